use thiserror::Error;

use crate::error::{asset::AssetError, directory::DirectoryError};

/// Fatal errors that abort a clone run before anything in the target is touched.
#[derive(Error, Debug, PartialEq)]
pub enum CloneError {
    /// Source guild is not in the client's cache.
    #[error("Source server {0} not found or bot is not a member.")]
    SourceNotFound(u64),

    /// Target guild is not in the client's cache.
    #[error("Target server {0} not found or bot is not a member.")]
    TargetNotFound(u64),

    /// Another clone is still running on this bot.
    #[error("A clone is already in progress.")]
    AlreadyRunning,
}

/// Recoverable failure for a single role, category, channel or emoji.
///
/// Phases log it, count it in `CloneStats::failed` and move on to the next item.
#[derive(Error, Debug)]
pub enum ItemError {
    #[error(transparent)]
    Directory(#[from] DirectoryError),

    #[error(transparent)]
    Asset(#[from] AssetError),
}
