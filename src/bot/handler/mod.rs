use serenity::all::{Context, EventHandler, Message, Ready};
use serenity::async_trait;
use std::sync::Arc;

use crate::bot::controller::CloneController;

pub mod message;
pub mod ready;

/// Discord bot event handler
pub struct Handler {
    pub controller: Arc<CloneController>,
    pub prefix: String,
    /// Users allowed to run clone commands.
    pub allowed_user_ids: Vec<u64>,
}

impl Handler {
    pub fn new(controller: Arc<CloneController>, prefix: String, allowed_user_ids: Vec<u64>) -> Self {
        Self {
            controller,
            prefix,
            allowed_user_ids,
        }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(ctx, ready).await;
    }

    /// Called when a message is sent in a channel
    async fn message(&self, ctx: Context, message: Message) {
        message::handle_message(self, ctx, message).await;
    }
}
