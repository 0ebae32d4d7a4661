pub mod client;
pub mod directory;
#[cfg(test)]
pub mod memory;

pub use client::SerenityGuildDirectory;
pub use directory::{GuildDirectory, AUDIT_LOG_REASON};
