//! Guild Cloner Test Utils
//!
//! Provides shared testing utilities for the guild cloner. The factories in this crate
//! build Serenity model objects by deserializing Discord-shaped JSON, so tests exercise
//! the same conversion code that runs against real gateway data.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::{create_test_guild, create_test_role};
//!
//! #[test]
//! fn test_guild_snapshot() {
//!     let mut guild = create_test_guild(123456789, "Test Guild", None);
//!     let role = create_test_role(111111111, "Admin", 0xFF0000, 10);
//!     guild.roles.insert(role.id, role);
//!
//!     // Convert and assert...
//! }
//! ```

pub mod serenity;
