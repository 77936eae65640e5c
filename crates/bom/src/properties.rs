use std::collections::HashMap;

/// Flat mapping from a BOM property key to a version string.
///
/// Keys are either a bare group id (`com.acme`) or `group.artifact`
/// (`com.acme.widget`). Built once per run by the parser and read-only during
/// rewriting; duplicate keys in the document resolve last-write-wins.
#[derive(Debug, Default, Clone)]
pub struct BomProperties {
    entries: HashMap<String, String>,
}

impl BomProperties {
    pub fn insert(&mut self, key: String, value: String) {
        self.entries.insert(key, value);
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolve the sanctioned version for a dependency coordinate.
    ///
    /// The artifact-specific `group.artifact` key takes precedence over the
    /// bare `group` key. A `${...}` placeholder value is dereferenced through
    /// the map once; an unresolvable placeholder yields `None` so the caller
    /// treats the dependency as missing from the BOM.
    #[must_use]
    pub fn resolve(&self, group: &str, artifact: &str) -> Option<String> {
        let qualified = format!("{group}.{artifact}");
        let value = self.get(&qualified).or_else(|| self.get(group))?;
        if value.starts_with("${") {
            self.expand(value).map(str::to_string)
        } else {
            Some(value.to_string())
        }
    }

    /// One level of version-variable indirection: strip the placeholder
    /// decoration and the literal `version.` token, then look the remainder
    /// up as an exact key.
    fn expand(&self, value: &str) -> Option<&str> {
        let key = value
            .chars()
            .filter(|c| !matches!(c, '$' | '{' | '}'))
            .collect::<String>()
            .replace("version.", "");
        self.get(&key)
    }
}
