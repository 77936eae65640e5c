use std::path::PathBuf;

use crate::BomError;

/// Download a remote BOM to a uniquely named temp file and return its path.
///
/// The file name combines the URL's last path segment with the process id,
/// which keeps concurrent runs from clobbering each other's download.
///
/// # Errors
/// Returns `Fetch` when the request fails or the server answers with an error
/// status, and `Io` when the temp file cannot be written.
pub async fn fetch_bom(url: &str) -> Result<PathBuf, BomError> {
    let name = url
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or("bom");
    let outfile = std::env::temp_dir().join(format!("{}.{}", name, std::process::id()));

    let body = reqwest::get(url)
        .await
        .and_then(reqwest::Response::error_for_status)
        .map_err(|source| BomError::Fetch {
            url: url.to_string(),
            source,
        })?
        .bytes()
        .await
        .map_err(|source| BomError::Fetch {
            url: url.to_string(),
            source,
        })?;

    tokio::fs::write(&outfile, &body).await?;
    Ok(outfile)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fetch_bom_unreachable_host() {
        let result = fetch_bom("http://127.0.0.1:1/bom.xml").await;
        assert!(matches!(result, Err(BomError::Fetch { .. })));
    }
}
