//! Serenity-backed directory-service client.
//!
//! Guild lookups read the gateway cache; collection reads and all mutations go
//! through Discord's HTTP API so the cloner always sees the target as it is after its
//! own changes, regardless of whether the matching gateway events have arrived yet.

use dioxus_logger::tracing;
use serenity::all::{
    ChannelId, ChannelType, CreateAttachment, CreateChannel, EditGuild, EditRole, EmojiId,
    GuildId, Permissions, RoleId,
};
use serenity::async_trait;
use serenity::cache::Cache;
use serenity::http::Http;
use serenity::prelude::Context;
use std::sync::Arc;

use crate::{
    data::discord::directory::{GuildDirectory, AUDIT_LOG_REASON},
    error::DirectoryError,
    model::{
        asset::EncodedImage,
        discord::{
            ChannelSettings, CreateChannelParam, CreateEmojiParam, CreateRoleParam, DiscordGuild,
            DiscordGuildChannel, DiscordGuildEmoji, DiscordGuildRole,
        },
    },
};

/// Directory client over a Serenity cache and HTTP client.
///
/// Both handles are reference counted; cloning the client is cheap.
#[derive(Clone)]
pub struct SerenityGuildDirectory {
    cache: Arc<Cache>,
    http: Arc<Http>,
}

impl SerenityGuildDirectory {
    pub fn new(cache: Arc<Cache>, http: Arc<Http>) -> Self {
        Self { cache, http }
    }

    /// Creates a client sharing the cache and HTTP client of a gateway context.
    pub fn from_context(ctx: &Context) -> Self {
        Self::new(ctx.cache.clone(), ctx.http.clone())
    }
}

/// Builds the Serenity channel builder for a create request.
fn channel_builder(param: &CreateChannelParam) -> CreateChannel<'_> {
    let kind = match param.settings {
        ChannelSettings::Category => ChannelType::Category,
        ChannelSettings::Text { .. } => ChannelType::Text,
        ChannelSettings::Voice { .. } => ChannelType::Voice,
    };

    let mut builder = CreateChannel::new(param.name.as_str())
        .kind(kind)
        .position(param.position)
        .permissions(param.overwrites.iter().map(|o| o.to_serenity()))
        .audit_log_reason(AUDIT_LOG_REASON);

    if let Some(parent_id) = param.parent_id {
        builder = builder.category(ChannelId::new(parent_id));
    }

    match &param.settings {
        ChannelSettings::Category => builder,
        ChannelSettings::Text {
            topic,
            nsfw,
            rate_limit_per_user,
        } => builder
            .topic(topic.as_str())
            .nsfw(*nsfw)
            .rate_limit_per_user(*rate_limit_per_user),
        ChannelSettings::Voice {
            bitrate,
            user_limit,
        } => builder.bitrate(*bitrate).user_limit(*user_limit),
    }
}

#[async_trait]
impl GuildDirectory for SerenityGuildDirectory {
    fn guild(&self, guild_id: u64) -> Option<DiscordGuild> {
        let bot_user_id = self.cache.current_user().id.get();
        let guild = self.cache.guild(GuildId::new(guild_id))?;

        Some(DiscordGuild::from_serenity(&guild, bot_user_id))
    }

    async fn roles(&self, guild_id: u64) -> Result<Vec<DiscordGuildRole>, DirectoryError> {
        let roles = GuildId::new(guild_id).roles(&*self.http).await?;

        Ok(roles.values().map(DiscordGuildRole::from_serenity).collect())
    }

    async fn channels(&self, guild_id: u64) -> Result<Vec<DiscordGuildChannel>, DirectoryError> {
        let channels = GuildId::new(guild_id).channels(&*self.http).await?;

        Ok(channels
            .values()
            .map(DiscordGuildChannel::from_serenity)
            .collect())
    }

    async fn create_role(
        &self,
        guild_id: u64,
        param: &CreateRoleParam,
    ) -> Result<DiscordGuildRole, DirectoryError> {
        let builder = EditRole::new()
            .name(param.name.as_str())
            .colour(param.colour)
            .permissions(Permissions::from_bits_truncate(param.permissions))
            .hoist(param.hoist)
            .mentionable(param.mentionable)
            .audit_log_reason(AUDIT_LOG_REASON);

        let role = GuildId::new(guild_id)
            .create_role(&*self.http, builder)
            .await?;

        tracing::debug!("Created role {} ({}) in guild {}", role.name, role.id, guild_id);

        Ok(DiscordGuildRole::from_serenity(&role))
    }

    async fn delete_role(&self, guild_id: u64, role_id: u64) -> Result<(), DirectoryError> {
        GuildId::new(guild_id)
            .delete_role(&*self.http, RoleId::new(role_id))
            .await?;

        Ok(())
    }

    async fn create_channel(
        &self,
        guild_id: u64,
        param: &CreateChannelParam,
    ) -> Result<DiscordGuildChannel, DirectoryError> {
        let channel = GuildId::new(guild_id)
            .create_channel(&*self.http, channel_builder(param))
            .await?;

        tracing::debug!(
            "Created channel {} ({}) in guild {}",
            channel.name,
            channel.id,
            guild_id
        );

        Ok(DiscordGuildChannel::from_serenity(&channel))
    }

    async fn delete_channel(&self, channel_id: u64) -> Result<(), DirectoryError> {
        ChannelId::new(channel_id).delete(&*self.http).await?;

        Ok(())
    }

    async fn create_emoji(
        &self,
        guild_id: u64,
        param: &CreateEmojiParam,
    ) -> Result<DiscordGuildEmoji, DirectoryError> {
        let emoji = GuildId::new(guild_id)
            .create_emoji(&*self.http, &param.name, &param.image)
            .await?;

        Ok(DiscordGuildEmoji::from_serenity(&emoji))
    }

    async fn delete_emoji(&self, guild_id: u64, emoji_id: u64) -> Result<(), DirectoryError> {
        GuildId::new(guild_id)
            .delete_emoji(&*self.http, EmojiId::new(emoji_id))
            .await?;

        Ok(())
    }

    async fn set_name(&self, guild_id: u64, name: &str) -> Result<(), DirectoryError> {
        let builder = EditGuild::new()
            .name(name)
            .audit_log_reason(AUDIT_LOG_REASON);

        GuildId::new(guild_id).edit(&*self.http, builder).await?;

        Ok(())
    }

    async fn set_icon(&self, guild_id: u64, icon: &EncodedImage) -> Result<(), DirectoryError> {
        let attachment = CreateAttachment::bytes(icon.bytes.clone(), icon.file_name("icon"));
        let builder = EditGuild::new()
            .icon(Some(&attachment))
            .audit_log_reason(AUDIT_LOG_REASON);

        GuildId::new(guild_id).edit(&*self.http, builder).await?;

        Ok(())
    }
}
