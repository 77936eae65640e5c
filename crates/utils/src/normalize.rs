use std::path::{Path, PathBuf};

/// Strip a leading `./` component so log sections and backup paths stay clean.
#[must_use]
pub fn normalize_target_path(path: &Path) -> PathBuf {
    path.strip_prefix(".")
        .map_or_else(|_| path.to_path_buf(), Path::to_path_buf)
}
