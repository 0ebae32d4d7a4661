//! Asset fetcher for emoji images and guild icons.
//!
//! Downloads an image by URL and returns it tagged with its MIME type so it can be
//! re-uploaded as a data URI.

use reqwest::header::CONTENT_TYPE;
use serenity::async_trait;
use url::Url;

use crate::{
    error::AssetError,
    model::asset::{EncodedImage, DEFAULT_IMAGE_MIME},
};

/// Retrieves image bytes by URL.
#[async_trait]
pub trait AssetFetcher: Send + Sync {
    /// Downloads the image at `url`.
    ///
    /// # Returns
    /// - `Ok(EncodedImage)` - Image bytes with the MIME type reported by the server
    /// - `Err(AssetError)` - Invalid URL, transport failure or non-success status
    async fn fetch(&self, url: &str) -> Result<EncodedImage, AssetError>;
}

/// Asset fetcher backed by the shared reqwest client.
pub struct ReqwestAssetFetcher {
    client: reqwest::Client,
}

impl ReqwestAssetFetcher {
    /// Creates a fetcher using `client`.
    ///
    /// The client is configured at startup (redirects disabled); clones share its
    /// connection pool.
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

/// Extracts the MIME type from a `Content-Type` header value.
///
/// Parameters such as `charset` are stripped. Missing or empty values fall back to
/// `image/png`.
pub fn mime_from_content_type(content_type: Option<&str>) -> String {
    content_type
        .and_then(|value| value.split(';').next())
        .map(str::trim)
        .filter(|mime| !mime.is_empty())
        .unwrap_or(DEFAULT_IMAGE_MIME)
        .to_string()
}

#[async_trait]
impl AssetFetcher for ReqwestAssetFetcher {
    async fn fetch(&self, url: &str) -> Result<EncodedImage, AssetError> {
        let parsed = Url::parse(url).map_err(|source| AssetError::InvalidUrl {
            url: url.to_string(),
            source,
        })?;

        let response = self.client.get(parsed).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AssetError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let mime = mime_from_content_type(
            response
                .headers()
                .get(CONTENT_TYPE)
                .and_then(|value| value.to_str().ok()),
        );
        let bytes = response.bytes().await?;

        Ok(EncodedImage::new(mime, bytes.to_vec()))
    }
}
