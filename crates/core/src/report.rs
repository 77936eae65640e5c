use std::fmt::Display;
use std::path::PathBuf;

use crate::coordinate::Coordinate;

/// One version rewrite performed on a file.
///
/// `Display` is the detail line format of `mod.log`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModifiedVersion {
    pub group: String,
    pub artifact: String,
    pub old_version: String,
    pub new_version: String,
}

impl ModifiedVersion {
    pub fn new(coordinate: Coordinate, new_version: String) -> Self {
        Self {
            group: coordinate.group,
            artifact: coordinate.artifact,
            old_version: coordinate.version,
            new_version,
        }
    }
}

impl Display for ModifiedVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}:{} --> {}",
            self.group, self.artifact, self.old_version, self.new_version
        )
    }
}

/// A dependency declaration with no matching BOM key.
///
/// `Display` is the detail line format of `missing.log`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingDependency {
    pub group: String,
    pub artifact: String,
}

impl Display for MissingDependency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.group, self.artifact)
    }
}

/// Everything the rewrite pass did (and could not do) for one target file.
///
/// The log writer emits one section per non-clean report, which is what keeps
/// the per-file headers appearing exactly once.
#[derive(Debug)]
pub struct FileAlignment {
    pub path: PathBuf,
    pub modified: Vec<ModifiedVersion>,
    pub missing: Vec<MissingDependency>,
}

impl FileAlignment {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            modified: Vec::new(),
            missing: Vec::new(),
        }
    }

    /// True when the file needed no rewrites and had no BOM misses.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.modified.is_empty() && self.missing.is_empty()
    }
}
