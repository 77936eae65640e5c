use std::path::Path;

pub mod error;
pub mod fetch;
pub mod parse;
pub mod properties;

pub use error::BomError;
pub use fetch::fetch_bom;
pub use parse::parse_bom;
pub use properties::BomProperties;

/// Load the BOM from a filesystem path or an http(s) URL.
///
/// URLs are fetched to a temp file first; everything else is read directly.
///
/// # Errors
/// Returns error if the fetch fails, the document is malformed, or it has no
/// properties node.
pub async fn load_bom(location: &str) -> Result<BomProperties, BomError> {
    if location.starts_with("http") {
        let fetched = fetch::fetch_bom(location).await?;
        parse::parse_bom(&fetched).await
    } else {
        parse::parse_bom(Path::new(location)).await
    }
}
