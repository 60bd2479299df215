/// HTTP client for the remote images API
///
/// Two endpoints are exposed by the API:
/// - `GET {base}?image={index}` returns raw image bytes
/// - `GET {base}/api/images/{index}` returns `{"imageUrl": "..."}`
///
/// Every failure is converted into a `FetchError` whose display string is
/// what the UI shows; nothing propagates past the fetch call.

use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

/// Host serving both the binary endpoint and the link API
pub const API_BASE_URL: &str = "https://imagesapi.ztnaut.com";

/// Everything that can go wrong while fetching an image
#[derive(Debug, Error)]
pub enum FetchError {
    /// Non-2xx from the binary image endpoint
    #[error("Failed to fetch image from image query param.")]
    ImageStatus(reqwest::StatusCode),

    /// Non-2xx from the link API endpoint
    #[error("Failed to fetch image from imagelink API.")]
    LinkStatus(reqwest::StatusCode),

    /// Link API answered 2xx but without a usable `imageUrl` field
    #[error("Image URL not found in API response.")]
    UrlMissing,

    /// Network-level failure or undecodable body
    #[error("{0}")]
    Transport(#[from] reqwest::Error),
}

/// Shape of the link API response; only `imageUrl` is consumed
#[derive(Debug, Deserialize)]
struct LinkPayload {
    #[serde(rename = "imageUrl")]
    image_url: Option<String>,
}

/// Client for the images API, cheap to clone into fetch tasks
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Build a client against the given base URL.
    ///
    /// Tests point this at a local listener; production uses `API_BASE_URL`.
    pub fn new(base_url: impl Into<String>) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    /// Fetch raw image bytes for the given index.
    pub async fn fetch_image_bytes(&self, index: &str) -> Result<Vec<u8>, FetchError> {
        let response = self
            .http
            .get(&self.base_url)
            .query(&[("image", index)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::ImageStatus(status));
        }

        Ok(response.bytes().await?.to_vec())
    }

    /// Ask the link API for the remote URL of the given index.
    pub async fn fetch_image_link(&self, index: &str) -> Result<String, FetchError> {
        let url = format!("{}/api/images/{}", self.base_url, index);
        let response = self.http.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::LinkStatus(status));
        }

        let payload: LinkPayload = response.json().await?;
        match payload.image_url {
            Some(url) if !url.is_empty() => Ok(url),
            // present-but-empty is as unusable as absent
            _ => Err(FetchError::UrlMissing),
        }
    }

    /// Download the bytes behind a URL handed out by the link API.
    pub async fn download(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let response = self.http.get(url).send().await?.error_for_status()?;
        Ok(response.bytes().await?.to_vec())
    }
}
