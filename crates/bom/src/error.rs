use thiserror::Error;

/// Failure modes of loading a BOM.
///
/// None of these are retried anywhere: the first error aborts the run.
#[derive(Debug, Error)]
pub enum BomError {
    #[error("failed to fetch BOM from {url}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to parse BOM XML")]
    Parse(#[from] quick_xml::Error),

    #[error("BOM document has no properties node")]
    MissingProperties,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
