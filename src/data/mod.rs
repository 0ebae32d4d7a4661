//! Directory-service access layer.
//!
//! Everything the cloner reads from or writes to Discord goes through the
//! `GuildDirectory` trait defined here. Implementations convert Serenity objects into
//! domain models at this boundary so the service layer never handles wire types.

pub mod discord;
