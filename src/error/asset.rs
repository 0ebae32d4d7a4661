use thiserror::Error;

/// Failure while downloading an image asset (emoji image or guild icon).
#[derive(Error, Debug)]
pub enum AssetError {
    /// The asset URL could not be parsed.
    #[error("Invalid asset URL '{url}': {source}")]
    InvalidUrl {
        /// The URL that failed to parse
        url: String,
        /// The underlying parse error
        #[source]
        source: url::ParseError,
    },

    /// Network or transport failure from reqwest.
    #[error(transparent)]
    Request(#[from] reqwest::Error),

    /// The server answered with a non-success status code.
    #[error("Asset request to '{url}' failed with status {status}")]
    Status {
        /// The requested URL
        url: String,
        /// HTTP status code returned by the server
        status: u16,
    },
}
