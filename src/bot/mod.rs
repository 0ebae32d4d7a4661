//! Discord bot surface for the cloner.
//!
//! Listens for text commands from allow-listed users and drives the clone engine:
//! `clone <source> <target> [flags]` starts a run and `clonestop` stops it. Progress
//! is streamed back into the channel the command was sent from.
//!
//! # Gateway Intents
//!
//! - `GUILDS` - Guild, role and channel cache the engine reads from
//! - `GUILD_MESSAGES` - Receive commands
//! - `MESSAGE_CONTENT` - Read command text (privileged intent)
//! - `GUILD_EMOJIS_AND_STICKERS` - Keep the emoji cache current

pub mod command;
pub mod controller;
pub mod handler;
pub mod progress;
pub mod start;
