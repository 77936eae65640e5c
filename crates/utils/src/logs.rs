use std::path::Path;

use anyhow::{Context, Result};
use bomalign_core::FileAlignment;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;

/// Directory holding the run logs and the mirrored backups.
pub const LOGGING_DIR: &str = "alignment_logs";

const MOD_LOG: &str = "mod.log";
const MISSING_LOG: &str = "missing.log";
const MOD_HEADER: &str = "Modified Versions\n----------------------------\n";
const MISSING_HEADER: &str = "Not in BOM\n----------------------------\n";

/// Run-scoped writer for the two alignment logs.
///
/// Both files are opened in truncate mode when the run starts, so concurrent
/// runs against the same logging directory clobber each other. Sections are
/// appended per file report; a file with no records produces no section, which
/// keeps each file header appearing at most once.
#[derive(Debug)]
pub struct AlignmentLogs {
    modified: File,
    missing: File,
}

impl AlignmentLogs {
    /// Create the logging directory on demand and both log files with their
    /// header lines.
    ///
    /// # Errors
    /// Returns error if the directory or either log file cannot be created.
    pub async fn create(log_dir: &Path) -> Result<Self> {
        tokio::fs::create_dir_all(log_dir)
            .await
            .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;

        let mut modified = File::create(log_dir.join(MOD_LOG))
            .await
            .context("Failed to create mod.log")?;
        modified.write_all(MOD_HEADER.as_bytes()).await?;

        let mut missing = File::create(log_dir.join(MISSING_LOG))
            .await
            .context("Failed to create missing.log")?;
        missing.write_all(MISSING_HEADER.as_bytes()).await?;

        Ok(Self { modified, missing })
    }

    /// Append one file's records: a blank line, the file path, then one
    /// tab-indented detail line per record, in each affected log.
    ///
    /// # Errors
    /// Returns error if writing either log fails.
    pub async fn record(&mut self, report: &FileAlignment) -> Result<()> {
        if !report.modified.is_empty() {
            let mut section = format!("\n{}\n", report.path.display());
            for entry in &report.modified {
                section.push_str(&format!("\t{entry}\n"));
            }
            self.modified.write_all(section.as_bytes()).await?;
        }

        if !report.missing.is_empty() {
            let mut section = format!("\n{}\n", report.path.display());
            for entry in &report.missing {
                section.push_str(&format!("\t{entry}\n"));
            }
            self.missing.write_all(section.as_bytes()).await?;
        }

        Ok(())
    }

    /// Flush both logs; called on every exit path of a run.
    ///
    /// # Errors
    /// Returns error if flushing either log fails.
    pub async fn flush(&mut self) -> Result<()> {
        self.modified.flush().await?;
        self.missing.flush().await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bomalign_core::{Coordinate, MissingDependency, ModifiedVersion};
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn report_with_records() -> FileAlignment {
        let mut report = FileAlignment::new(PathBuf::from("app/build.gradle"));
        report.modified.push(ModifiedVersion::new(
            Coordinate::new(
                "com.acme".to_string(),
                "widget".to_string(),
                "1.0.0".to_string(),
            ),
            "1.2.3".to_string(),
        ));
        report.missing.push(MissingDependency {
            group: "org.unknown".to_string(),
            artifact: "thing".to_string(),
        });
        report
    }

    #[tokio::test]
    async fn test_create_writes_headers() {
        let temp_dir = TempDir::new().unwrap();
        let log_dir = temp_dir.path().join("alignment_logs");

        let mut logs = AlignmentLogs::create(&log_dir).await.unwrap();
        logs.flush().await.unwrap();

        assert_eq!(
            fs::read_to_string(log_dir.join("mod.log")).unwrap(),
            "Modified Versions\n----------------------------\n"
        );
        assert_eq!(
            fs::read_to_string(log_dir.join("missing.log")).unwrap(),
            "Not in BOM\n----------------------------\n"
        );

        temp_dir.close().unwrap();
    }

    #[tokio::test]
    async fn test_record_writes_one_section_per_file() {
        let temp_dir = TempDir::new().unwrap();
        let log_dir = temp_dir.path().join("alignment_logs");

        let mut logs = AlignmentLogs::create(&log_dir).await.unwrap();
        logs.record(&report_with_records()).await.unwrap();
        logs.flush().await.unwrap();

        let mod_log = fs::read_to_string(log_dir.join("mod.log")).unwrap();
        assert!(mod_log.ends_with("\napp/build.gradle\n\tcom.acme:widget:1.0.0 --> 1.2.3\n"));
        assert_eq!(mod_log.matches("app/build.gradle").count(), 1);

        let missing_log = fs::read_to_string(log_dir.join("missing.log")).unwrap();
        assert!(missing_log.ends_with("\napp/build.gradle\n\torg.unknown:thing\n"));

        temp_dir.close().unwrap();
    }

    #[tokio::test]
    async fn test_record_skips_clean_reports() {
        let temp_dir = TempDir::new().unwrap();
        let log_dir = temp_dir.path().join("alignment_logs");

        let mut logs = AlignmentLogs::create(&log_dir).await.unwrap();
        logs.record(&FileAlignment::new(PathBuf::from("clean/build.gradle")))
            .await
            .unwrap();
        logs.flush().await.unwrap();

        let mod_log = fs::read_to_string(log_dir.join("mod.log")).unwrap();
        assert!(!mod_log.contains("clean/build.gradle"));

        temp_dir.close().unwrap();
    }

    #[tokio::test]
    async fn test_create_truncates_previous_run() {
        let temp_dir = TempDir::new().unwrap();
        let log_dir = temp_dir.path().join("alignment_logs");

        let mut logs = AlignmentLogs::create(&log_dir).await.unwrap();
        logs.record(&report_with_records()).await.unwrap();
        logs.flush().await.unwrap();
        drop(logs);

        let mut logs = AlignmentLogs::create(&log_dir).await.unwrap();
        logs.flush().await.unwrap();

        assert_eq!(
            fs::read_to_string(log_dir.join("mod.log")).unwrap(),
            "Modified Versions\n----------------------------\n"
        );

        temp_dir.close().unwrap();
    }
}
