//! Test factories for creating Serenity API objects.
//!
//! This module provides factory functions for creating mock Serenity structs
//! (Guild, Role, Channel, Emoji) for testing purposes. These factories create
//! valid Serenity objects by deserializing JSON, simulating what Discord's API
//! would return.
//!
//! # Available Factories
//!
//! - `guild::create_test_guild` - Create Serenity Guild objects
//! - `role::create_test_role` - Create Serenity Role objects
//! - `channel::create_test_channel` - Create Serenity GuildChannel objects
//! - `emoji::create_test_emoji` - Create Serenity Emoji objects

pub mod channel;
pub mod emoji;
pub mod guild;
pub mod role;

// Re-export commonly used functions for convenience
pub use channel::{create_test_channel, create_test_channel_with_overwrites, role_overwrite};
pub use emoji::create_test_emoji;
pub use guild::{create_test_guild, create_test_guild_with_tier};
pub use role::{create_test_managed_role, create_test_role};
