use thiserror::Error;

/// Failure reported by the directory-service client for a single call.
#[derive(Error, Debug)]
pub enum DirectoryError {
    /// The Discord API rejected the call (permission denied, rate limited, invalid
    /// payload, ...).
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Rejection raised by the in-memory directory used in tests.
    #[cfg(test)]
    #[error("{0}")]
    Rejected(String),
}

impl From<serenity::Error> for DirectoryError {
    fn from(err: serenity::Error) -> Self {
        DirectoryError::DiscordErr(Box::new(err))
    }
}
