//! Message handler for the clone text commands.

use dioxus_logger::tracing;
use serenity::all::{Context, Message};
use std::sync::Arc;

use crate::{
    bot::{
        command::{self, BotCommand},
        controller::CloneController,
        handler::Handler,
        progress::spawn_progress_poster,
    },
    data::discord::SerenityGuildDirectory,
    model::clone::CloneOptions,
};

/// Handles a message, running it as a command when it is one from an allowed user.
///
/// Messages from bots and from users outside the allow-list are ignored without a reply.
pub async fn handle_message(handler: &Handler, ctx: Context, message: Message) {
    if message.author.bot || !handler.allowed_user_ids.contains(&message.author.id.get()) {
        return;
    }

    let command = match command::parse(&message.content, &handler.prefix) {
        None => return,
        Some(Ok(command)) => command,
        Some(Err(e)) => {
            reply(&ctx, &message, e.to_string()).await;
            return;
        }
    };

    match command {
        BotCommand::Clone {
            source_id,
            target_id,
            options,
        } => {
            if handler.controller.is_running() {
                reply(
                    &ctx,
                    &message,
                    format!(
                        "A clone is already in progress. Use `{}clonestop` to stop it.",
                        handler.prefix
                    ),
                )
                .await;
                return;
            }

            tracing::info!(
                "{} requested clone {} -> {}",
                message.author.name,
                source_id,
                target_id
            );
            let controller = handler.controller.clone();
            tokio::spawn(run_clone(controller, ctx, message, source_id, target_id, options));
        }
        BotCommand::Stop => {
            let text = if handler.controller.request_stop() {
                "🛑 Stop signal received. Halting process..."
            } else {
                "No clone is running."
            };
            reply(&ctx, &message, text).await;
        }
    }
}

/// Runs a clone, streaming progress to the command's channel, then replies with the
/// outcome.
async fn run_clone(
    controller: Arc<CloneController>,
    ctx: Context,
    message: Message,
    source_id: u64,
    target_id: u64,
    options: CloneOptions,
) {
    let directory = Arc::new(SerenityGuildDirectory::from_context(&ctx));
    let (log, poster) = spawn_progress_poster(ctx.http.clone(), message.channel_id);

    let result = controller
        .start(directory, source_id, target_id, &options, &log)
        .await;

    drop(log);
    if let Err(e) = poster.await {
        tracing::warn!("Progress poster for clone {} -> {} failed: {}", source_id, target_id, e);
    }

    let text = match result {
        Ok(stats) => format!("Clone finished: {}", stats),
        Err(e) => format!("❌ {}", e),
    };
    reply(&ctx, &message, text).await;
}

async fn reply(ctx: &Context, message: &Message, text: impl Into<String>) {
    if let Err(e) = message.reply(ctx, text).await {
        tracing::error!("Failed to reply in channel {}: {}", message.channel_id, e);
    }
}
