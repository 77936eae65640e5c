use std::path::{Path, PathBuf};

use ignore::WalkBuilder;

/// File-name suffix marking a Gradle build file.
pub const GRADLE_SUFFIX: &str = ".gradle";

/// Recursively collect every file under `root` whose name ends with `suffix`.
///
/// Paths come back relative to `root`, in walk order (not sorted). Standard
/// ignore filters are disabled so untracked and hidden trees are walked too.
#[must_use]
pub fn find_build_files(root: &Path, suffix: &str) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for entry in WalkBuilder::new(root).standard_filters(false).build().flatten() {
        if !entry.file_type().is_some_and(|t| t.is_file()) {
            continue;
        }
        let path = entry.path();
        let is_match = path
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name.ends_with(suffix));
        if is_match {
            files.push(path.strip_prefix(root).unwrap_or(path).to_path_buf());
        }
    }
    files
}
