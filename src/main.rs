mod bot;
mod config;
mod data;
mod error;
mod model;
mod service;
mod startup;

use dioxus_logger::tracing;

use crate::{config::Config, error::AppError};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;
    startup::init_logger(&config)?;

    let http_client = startup::setup_reqwest_client()?;
    let client = bot::start::init_bot(&config, http_client).await?;

    tracing::info!(
        "Accepting clone commands from {} users with prefix '{}'",
        config.allowed_user_ids.len(),
        config.command_prefix
    );

    bot::start::start_bot(client).await
}
