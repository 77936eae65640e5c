use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use bomalign_bom::{BomProperties, load_bom};
use bomalign_gradle::{GRADLE_SUFFIX, align_file, find_build_files};
use bomalign_utils::{AlignmentLogs, LOGGING_DIR, backup_original, normalize_target_path};
use colored::Colorize;

#[derive(Debug)]
pub struct AlignArgs {
    pub bom: String,
    pub lib: Option<PathBuf>,
}

/// Align every target file with the BOM and write the run logs.
///
/// With `lib` set that file is the sole target and no suffix check applies;
/// otherwise every `.gradle` file under the current directory is processed,
/// one at a time. The first error aborts the batch; rewrites and log sections
/// already performed stay on disk.
///
/// # Errors
/// Returns error if loading the BOM, backing up, rewriting, or logging fails.
pub async fn handle_align(args: &AlignArgs) -> Result<()> {
    let bom = load_bom(&args.bom)
        .await
        .with_context(|| format!("Failed to load BOM from {}", args.bom))?;

    let targets = match &args.lib {
        Some(lib) => vec![lib.clone()],
        None => find_build_files(Path::new("."), GRADLE_SUFFIX),
    };

    let log_dir = Path::new(LOGGING_DIR);
    let mut logs = AlignmentLogs::create(log_dir).await?;
    let result = align_targets(&targets, &bom, log_dir, &mut logs).await;
    // Flush even when a target failed mid-batch; earlier sections stay on disk.
    logs.flush().await?;
    let (modified, missing) = result?;

    println!(
        "{} {} {}",
        format!("Aligned {} file(s):", targets.len())
            .bright_white()
            .bold(),
        format!("{modified} version(s) modified,").bright_green(),
        format!("{missing} not in BOM").bright_yellow(),
    );
    Ok(())
}

async fn align_targets(
    targets: &[PathBuf],
    bom: &BomProperties,
    log_dir: &Path,
    logs: &mut AlignmentLogs,
) -> Result<(usize, usize)> {
    let mut modified = 0usize;
    let mut missing = 0usize;
    for target in targets {
        let target = normalize_target_path(target);
        backup_original(log_dir, &target).await?;
        let report = align_file(&target, bom).await?;
        modified += report.modified.len();
        missing += report.missing.len();
        logs.record(&report).await?;
    }
    Ok((modified, missing))
}
