use std::fmt::Display;

/// A `group:artifact:version` dependency coordinate extracted from one build file line.
///
/// Transient: built while a line is processed and dropped once the line is rewritten.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coordinate {
    pub group: String,
    pub artifact: String,
    pub version: String,
}

impl Coordinate {
    pub fn new(group: String, artifact: String, version: String) -> Self {
        Self {
            group,
            artifact,
            version,
        }
    }

    /// BOM key for the artifact-specific entry, e.g. `com.acme.widget`.
    /// Takes precedence over the bare group key on lookup.
    #[must_use]
    pub fn qualified_key(&self) -> String {
        format!("{}.{}", self.group, self.artifact)
    }
}

impl Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.group, self.artifact, self.version)
    }
}
