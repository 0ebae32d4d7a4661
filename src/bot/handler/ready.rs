//! Ready event handler.
//!
//! Fired once per gateway connection after the initial handshake; the guild cache
//! fills in afterwards as guild create events arrive.

use dioxus_logger::tracing;
use serenity::all::{ActivityData, Context, Ready};

/// Logs the connection and advertises the command prefix in the bot's status.
///
/// # Arguments
/// - `ctx` - Discord context for setting activity status
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(ctx: Context, ready: Ready) {
    tracing::info!(
        "{} is connected to Discord in {} guilds",
        ready.user.name,
        ready.guilds.len()
    );

    ctx.set_activity(Some(ActivityData::watching("for clone requests")));
}
