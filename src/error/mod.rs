//! Error types for the cloner and the bot surface around it.
//!
//! `AppError` is the top-level error type returned during startup and from the bot
//! runtime. The clone engine uses narrower types: `CloneError` for the fatal
//! resolution failures that abort a run before any mutation, and `ItemError` for the
//! per-entity failures that are logged, counted and then skipped.

pub mod asset;
pub mod clone;
pub mod command;
pub mod config;
pub mod directory;

use thiserror::Error;

use crate::error::config::ConfigError;

pub use asset::AssetError;
pub use clone::{CloneError, ItemError};
pub use command::CommandError;
pub use directory::DirectoryError;

/// Top-level application error type.
///
/// Aggregates the errors that can stop the process itself. Failures inside a clone
/// run never surface here; they are absorbed into the run's stats or returned to the
/// invoking chat command.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// HTTP client construction error from reqwest.
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Logger could not be installed as the global default subscriber.
    #[error("Failed to initialise logger: {0}")]
    LoggerErr(String),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}
