use dioxus_logger::tracing::Level;
use std::time::Duration;

use crate::{error::config::ConfigError, service::cloner::PacingPolicy};

const DEFAULT_COMMAND_PREFIX: &str = "!";
const DEFAULT_CLONE_PACING_MS: u64 = 5_000;
const DEFAULT_EMOJI_PACING_MS: u64 = 10_000;

pub struct Config {
    pub discord_bot_token: String,

    /// Users allowed to run clone commands.
    pub allowed_user_ids: Vec<u64>,
    pub command_prefix: String,

    pub pacing: PacingPolicy,
    pub log_level: Level,
}

impl Config {
    /// Loads configuration from the process environment.
    ///
    /// Call `dotenvy::dotenv()` first to pick up a `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds configuration from an arbitrary variable lookup.
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and every value parsed
    /// - `Err(ConfigError::MissingEnvVar)` - A required variable is unset or empty
    /// - `Err(ConfigError::InvalidEnvVar)` - A variable is set but cannot be parsed
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let required = |name: &str| {
            lookup(name)
                .filter(|value| !value.trim().is_empty())
                .ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
        };
        let pacing_ms = |name: &str, default: u64| match lookup(name) {
            Some(value) => value
                .trim()
                .parse::<u64>()
                .map_err(|_| invalid(name, &value)),
            None => Ok(default),
        };

        let allowed_user_ids = parse_user_ids(&required("ALLOWED_USER_IDS")?)?;
        let pacing = PacingPolicy {
            standard: Duration::from_millis(pacing_ms("CLONE_PACING_MS", DEFAULT_CLONE_PACING_MS)?),
            emoji: Duration::from_millis(pacing_ms("EMOJI_PACING_MS", DEFAULT_EMOJI_PACING_MS)?),
        };
        let log_level = match lookup("LOG_LEVEL") {
            Some(value) => value
                .trim()
                .parse::<Level>()
                .map_err(|_| invalid("LOG_LEVEL", &value))?,
            None => Level::INFO,
        };

        Ok(Self {
            discord_bot_token: required("DISCORD_BOT_TOKEN")?,
            allowed_user_ids,
            command_prefix: lookup("COMMAND_PREFIX")
                .filter(|prefix| !prefix.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_COMMAND_PREFIX.to_string()),
            pacing,
            log_level,
        })
    }
}

/// Parses a comma-separated list of Discord user ids, ignoring blank entries.
fn parse_user_ids(value: &str) -> Result<Vec<u64>, ConfigError> {
    value
        .split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(|id| id.parse::<u64>().map_err(|_| invalid("ALLOWED_USER_IDS", id)))
        .collect()
}

fn invalid(name: &str, value: &str) -> ConfigError {
    ConfigError::InvalidEnvVar {
        name: name.to_string(),
        value: value.to_string(),
    }
}
