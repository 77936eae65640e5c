use std::path::Path;

use quick_xml::Reader;
use quick_xml::events::Event;

use crate::{BomError, BomProperties};

/// Read the BOM document at `path` and build its properties map.
///
/// # Errors
/// Returns `Parse` on malformed XML and `MissingProperties` when no element
/// whose name contains `properties` exists anywhere in the tree.
pub async fn parse_bom(path: &Path) -> Result<BomProperties, BomError> {
    let content = tokio::fs::read_to_string(path).await?;
    parse_bom_content(&content)
}

/// Build the properties map from BOM document content.
///
/// The first element whose local (namespace-stripped) name contains
/// `properties` is taken as the properties node. Each direct child element
/// becomes one entry: key is the local tag name with every literal `version.`
/// token removed, value is the text content. Entries with an empty key or
/// value are skipped; duplicate keys resolve last-write-wins.
///
/// # Errors
/// Returns `Parse` on malformed XML and `MissingProperties` when no
/// properties node exists.
pub fn parse_bom_content(content: &str) -> Result<BomProperties, BomError> {
    let mut reader = Reader::from_str(content);
    let mut props = BomProperties::default();
    let mut found = false;
    let mut in_properties = false;
    // Element depth relative to the properties node; its direct children sit at 1.
    let mut depth = 0usize;
    let mut current_key: Option<String> = None;
    let mut current_value = String::new();

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                let name = String::from_utf8_lossy(e.local_name().as_ref()).to_string();
                if in_properties {
                    depth += 1;
                    if depth == 1 {
                        current_key = Some(property_key(&name));
                        current_value.clear();
                    }
                } else if name.contains("properties") {
                    found = true;
                    in_properties = true;
                    depth = 0;
                }
            }
            Event::Empty(e) => {
                // A self-closing properties node still counts as found.
                let name = String::from_utf8_lossy(e.local_name().as_ref()).to_string();
                if !in_properties && name.contains("properties") {
                    found = true;
                    break;
                }
            }
            Event::Text(e) => {
                if in_properties && depth == 1 {
                    current_value.push_str(&e.unescape()?);
                }
            }
            Event::End(_) => {
                if in_properties {
                    if depth == 0 {
                        // Properties node closed; only the first one counts.
                        break;
                    }
                    if depth == 1 {
                        if let Some(key) = current_key.take() {
                            let value = current_value.trim();
                            if !key.is_empty() && !value.is_empty() {
                                props.insert(key, value.to_string());
                            }
                        }
                    }
                    depth -= 1;
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if !found {
        return Err(BomError::MissingProperties);
    }
    Ok(props)
}

/// Derive the map key from a property tag name. The namespace is already
/// stripped via `local_name`; the literal `version.` token goes too.
fn property_key(tag: &str) -> String {
    tag.replace("version.", "")
}
