use std::error::Error;
use std::fmt;

use formats::boundary::{BoundaryDataset, BoundaryError};

#[derive(Debug)]
pub enum FetchError {
    Http(reqwest::Error),
    Status(reqwest::StatusCode),
    Decode(BoundaryError),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Http(err) => write!(f, "request failed: {err}"),
            FetchError::Status(status) => write!(f, "upstream HTTP {status}"),
            FetchError::Decode(err) => write!(f, "boundary decode failed: {err}"),
        }
    }
}

impl Error for FetchError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            FetchError::Http(err) => Some(err),
            FetchError::Status(_) => None,
            FetchError::Decode(err) => Some(err),
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError::Http(err)
    }
}

/// Fetches and decodes the boundary dataset. One attempt; the caller decides
/// what a failure means for the scene.
pub async fn fetch_boundary(
    client: &reqwest::Client,
    url: &str,
) -> Result<BoundaryDataset, FetchError> {
    let resp = client.get(url).send().await?;
    if !resp.status().is_success() {
        return Err(FetchError::Status(resp.status()));
    }
    let text = resp.text().await?;
    BoundaryDataset::from_geojson_str(&text).map_err(FetchError::Decode)
}
