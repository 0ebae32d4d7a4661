use dioxus_logger::tracing;
use serenity::all::{Client, GatewayIntents};
use std::sync::Arc;

use crate::{
    bot::{controller::CloneController, handler::Handler},
    config::Config,
    error::AppError,
    service::asset::ReqwestAssetFetcher,
};

/// Builds the Discord client with the clone command handler attached.
///
/// # Arguments
/// - `config` - Application configuration
/// - `http_client` - HTTP client used to download emoji images and icons
///
/// # Returns
/// - `Ok(Client)` - Client ready to be started
/// - `Err(AppError)` - Client could not be built (e.g. malformed token)
pub async fn init_bot(config: &Config, http_client: reqwest::Client) -> Result<Client, AppError> {
    // MESSAGE_CONTENT is privileged and must be enabled in the Developer Portal
    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT
        | GatewayIntents::GUILD_EMOJIS_AND_STICKERS;

    let assets = Arc::new(ReqwestAssetFetcher::new(http_client));
    let controller = Arc::new(CloneController::new(assets, config.pacing));
    let handler = Handler::new(
        controller,
        config.command_prefix.clone(),
        config.allowed_user_ids.clone(),
    );

    let client = Client::builder(&config.discord_bot_token, intents)
        .event_handler(handler)
        .await?;

    Ok(client)
}

/// Runs the gateway connection until shutdown.
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
