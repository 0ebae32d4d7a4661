//! Directory-service client contract consumed by the clone engine.

use serenity::async_trait;

use crate::{
    error::DirectoryError,
    model::{
        asset::EncodedImage,
        discord::{
            CreateChannelParam, CreateEmojiParam, CreateRoleParam, DiscordGuild,
            DiscordGuildChannel, DiscordGuildEmoji, DiscordGuildRole,
        },
    },
};

/// Audit-log reason attached to every mutation made by the cloner.
pub const AUDIT_LOG_REASON: &str = "Server Cloner";

/// Guild lookup and guild-scoped CRUD against the remote directory service.
///
/// Every call is a single remote request with no retry and no timeout of its own; the
/// caller decides how to pace and how to treat failures.
#[async_trait]
pub trait GuildDirectory: Send + Sync {
    /// Looks a guild up in the client's cache.
    ///
    /// # Returns
    /// - `Some(DiscordGuild)` - Snapshot of the cached guild
    /// - `None` - Guild unknown or the bot is not a member
    fn guild(&self, guild_id: u64) -> Option<DiscordGuild>;

    /// Fetches the guild's current roles.
    async fn roles(&self, guild_id: u64) -> Result<Vec<DiscordGuildRole>, DirectoryError>;

    /// Fetches the guild's current channels and categories.
    async fn channels(&self, guild_id: u64) -> Result<Vec<DiscordGuildChannel>, DirectoryError>;

    async fn create_role(
        &self,
        guild_id: u64,
        param: &CreateRoleParam,
    ) -> Result<DiscordGuildRole, DirectoryError>;

    async fn delete_role(&self, guild_id: u64, role_id: u64) -> Result<(), DirectoryError>;

    /// Creates a category, text channel or voice channel.
    async fn create_channel(
        &self,
        guild_id: u64,
        param: &CreateChannelParam,
    ) -> Result<DiscordGuildChannel, DirectoryError>;

    async fn delete_channel(&self, channel_id: u64) -> Result<(), DirectoryError>;

    async fn create_emoji(
        &self,
        guild_id: u64,
        param: &CreateEmojiParam,
    ) -> Result<DiscordGuildEmoji, DirectoryError>;

    async fn delete_emoji(&self, guild_id: u64, emoji_id: u64) -> Result<(), DirectoryError>;

    /// Renames the guild.
    async fn set_name(&self, guild_id: u64, name: &str) -> Result<(), DirectoryError>;

    /// Replaces the guild icon.
    async fn set_icon(&self, guild_id: u64, icon: &EncodedImage) -> Result<(), DirectoryError>;
}
