use std::borrow::Cow;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use bomalign_bom::BomProperties;
use bomalign_core::{FileAlignment, MissingDependency, ModifiedVersion};

use crate::line::match_dependency;

enum LineChange {
    Modified(ModifiedVersion),
    Missing(MissingDependency),
}

/// Rewrite one line against the BOM.
///
/// A modified line gets the sanctioned version spliced over the matched span.
/// A line whose resolved version already matches passes through untouched and
/// produces no record.
fn rewrite_line<'a>(line: &'a str, bom: &BomProperties) -> (Cow<'a, str>, Option<LineChange>) {
    let Some(found) = match_dependency(line) else {
        return (Cow::Borrowed(line), None);
    };
    let coordinate = found.coordinate;

    match bom.resolve(&coordinate.group, &coordinate.artifact) {
        Some(sanctioned) if sanctioned != coordinate.version => {
            let mut rewritten = String::with_capacity(line.len() + sanctioned.len());
            rewritten.push_str(&line[..found.version_span.start]);
            rewritten.push_str(&sanctioned);
            rewritten.push_str(&line[found.version_span.end..]);
            let record = ModifiedVersion::new(coordinate, sanctioned);
            (Cow::Owned(rewritten), Some(LineChange::Modified(record)))
        }
        Some(_) => (Cow::Borrowed(line), None),
        None => (
            Cow::Borrowed(line),
            Some(LineChange::Missing(MissingDependency {
                group: coordinate.group,
                artifact: coordinate.artifact,
            })),
        ),
    }
}

/// Rewrite one build file in place and return its per-file report.
///
/// Line endings are preserved byte-for-byte; lines the BOM does not touch come
/// out identical. The rewritten content goes to a `.mod` sibling first and is
/// renamed over the original, so the file is never observed half-written.
///
/// # Errors
/// Returns error if the file cannot be read, staged, or replaced.
pub async fn align_file(path: &Path, bom: &BomProperties) -> Result<FileAlignment> {
    let content = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let mut report = FileAlignment::new(path.to_path_buf());
    let mut output = String::with_capacity(content.len());
    for line in content.split_inclusive('\n') {
        let (rewritten, change) = rewrite_line(line, bom);
        match change {
            Some(LineChange::Modified(record)) => report.modified.push(record),
            Some(LineChange::Missing(record)) => report.missing.push(record),
            None => {}
        }
        output.push_str(&rewritten);
    }

    let mut staged = path.as_os_str().to_owned();
    staged.push(".mod");
    let staged = PathBuf::from(staged);
    tokio::fs::write(&staged, &output)
        .await
        .with_context(|| format!("Failed to write {}", staged.display()))?;
    tokio::fs::rename(&staged, path)
        .await
        .with_context(|| format!("Failed to replace {}", path.display()))?;

    Ok(report)
}
