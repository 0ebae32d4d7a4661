//! Downloaded image payloads.

use base64::{engine::general_purpose::STANDARD, Engine};

/// MIME type assumed when a server does not declare one.
pub const DEFAULT_IMAGE_MIME: &str = "image/png";

/// Image bytes tagged with their MIME type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedImage {
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl EncodedImage {
    pub fn new(mime: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            mime: mime.into(),
            bytes,
        }
    }

    /// Renders the image as an embeddable `data:<mime>;base64,<payload>` URI, the form
    /// Discord accepts for emoji and icon uploads.
    pub fn to_data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime, STANDARD.encode(&self.bytes))
    }

    /// File name whose extension matches the MIME type.
    pub fn file_name(&self, stem: &str) -> String {
        let extension = match self.mime.as_str() {
            "image/gif" => "gif",
            "image/jpeg" | "image/jpg" => "jpg",
            "image/webp" => "webp",
            _ => "png",
        };
        format!("{}.{}", stem, extension)
    }
}
