use thiserror::Error;

/// Errors produced while parsing a text command.
///
/// The display text is sent back to the invoking channel, so messages are phrased for
/// the person who typed the command.
#[derive(Error, Debug, PartialEq)]
pub enum CommandError {
    /// Not enough positional arguments were supplied.
    #[error("Usage: {prefix}clone <source_server_id> <target_server_id> [--keep-channels] [--keep-roles] [--keep-emojis] [--no-channels] [--no-roles] [--emojis] [--info]")]
    Usage {
        /// Command prefix, echoed back in the usage line
        prefix: String,
    },

    /// A server id argument is not a valid snowflake.
    #[error("'{0}' is not a valid server id")]
    InvalidGuildId(String),

    /// A flag argument is not recognised.
    #[error("Unknown option '{0}'")]
    UnknownFlag(String),
}
