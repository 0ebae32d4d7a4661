//! Text command parsing.

use crate::{error::CommandError, model::clone::CloneOptions};

/// A recognised bot command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BotCommand {
    /// `clone <source_id> <target_id> [flags]`
    Clone {
        source_id: u64,
        target_id: u64,
        options: CloneOptions,
    },
    /// `clonestop`
    Stop,
}

/// Parses a message into a command.
///
/// # Arguments
/// - `content` - Raw message content
/// - `prefix` - Command prefix, e.g. `!`
///
/// # Returns
/// - `None` - Message is not one of this bot's commands
/// - `Some(Ok(BotCommand))` - Well-formed command
/// - `Some(Err(CommandError))` - Recognised command with bad arguments
pub fn parse(content: &str, prefix: &str) -> Option<Result<BotCommand, CommandError>> {
    let rest = content.trim().strip_prefix(prefix)?;
    let mut words = rest.split_whitespace();

    match words.next()?.to_lowercase().as_str() {
        "clone" => Some(parse_clone(words.collect(), prefix)),
        "clonestop" => Some(Ok(BotCommand::Stop)),
        _ => None,
    }
}

fn parse_clone(args: Vec<&str>, prefix: &str) -> Result<BotCommand, CommandError> {
    let usage = || CommandError::Usage {
        prefix: prefix.to_string(),
    };
    let (ids, flags): (Vec<&str>, Vec<&str>) = args.into_iter().partition(|a| !a.starts_with("--"));
    let [source, target] = ids.as_slice() else {
        return Err(usage());
    };

    let mut options = CloneOptions::default();
    for flag in flags {
        match flag {
            "--keep-channels" => options.delete_channels = false,
            "--keep-roles" => options.delete_roles = false,
            "--keep-emojis" => options.delete_emojis = false,
            "--no-channels" => options.clone_channels = false,
            "--no-roles" => options.clone_roles = false,
            "--emojis" => options.clone_emojis = true,
            "--info" => options.update_info = true,
            unknown => return Err(CommandError::UnknownFlag(unknown.to_string())),
        }
    }

    Ok(BotCommand::Clone {
        source_id: parse_guild_id(source)?,
        target_id: parse_guild_id(target)?,
        options,
    })
}

/// Parses a server id, rejecting zero which Discord never assigns.
fn parse_guild_id(raw: &str) -> Result<u64, CommandError> {
    raw.parse::<u64>()
        .ok()
        .filter(|id| *id != 0)
        .ok_or_else(|| CommandError::InvalidGuildId(raw.to_string()))
}
