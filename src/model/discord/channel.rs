//! Discord guild channel domain models.
//!
//! Categories, text channels and voice channels share one model; the attributes that
//! only apply to one kind are carried by `ChannelSettings` when creating a channel.

use serenity::all::{ChannelType, GuildChannel};

use crate::model::discord::overwrite::ChannelOverwrite;

/// Voice bitrate cap used when the target guild does not report its own.
pub const DEFAULT_MAX_BITRATE: u32 = 96_000;

/// Channel kinds the cloner distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelKind {
    Category,
    Text,
    Voice,
    /// Stage, forum, announcement, thread... never cloned.
    Other,
}

impl ChannelKind {
    pub fn from_serenity(kind: ChannelType) -> Self {
        match kind {
            ChannelType::Category => Self::Category,
            ChannelType::Text => Self::Text,
            ChannelType::Voice => Self::Voice,
            _ => Self::Other,
        }
    }
}

/// Discord channel (or category) within a guild.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscordGuildChannel {
    /// Discord channel ID as a u64.
    pub channel_id: u64,
    /// Channel display name.
    pub name: String,
    pub kind: ChannelKind,
    /// Channel position in the guild's channel list.
    pub position: u16,
    /// Parent category id, for channels nested in a category.
    pub parent_id: Option<u64>,
    pub overwrites: Vec<ChannelOverwrite>,
    pub topic: Option<String>,
    pub nsfw: bool,
    /// Slow-mode interval in seconds.
    pub rate_limit_per_user: u16,
    /// Voice bitrate in bits per second.
    pub bitrate: Option<u32>,
    /// Voice user cap, 0 meaning unlimited.
    pub user_limit: u32,
}

impl DiscordGuildChannel {
    /// Converts a Serenity channel into the domain model.
    ///
    /// Overwrites with a kind the model does not know are skipped.
    pub fn from_serenity(channel: &GuildChannel) -> Self {
        Self {
            channel_id: channel.id.get(),
            name: channel.name.clone(),
            kind: ChannelKind::from_serenity(channel.kind),
            position: channel.position,
            parent_id: channel.parent_id.map(|id| id.get()),
            overwrites: channel
                .permission_overwrites
                .iter()
                .filter_map(ChannelOverwrite::from_serenity)
                .collect(),
            topic: channel.topic.clone(),
            nsfw: channel.nsfw,
            rate_limit_per_user: channel.rate_limit_per_user.unwrap_or(0),
            bitrate: channel.bitrate,
            user_limit: channel.user_limit.unwrap_or(0),
        }
    }

    pub fn is_category(&self) -> bool {
        self.kind == ChannelKind::Category
    }
}

/// Kind-specific attributes for a channel to be created.
#[derive(Debug, Clone, PartialEq)]
pub enum ChannelSettings {
    Category,
    Text {
        topic: String,
        nsfw: bool,
        rate_limit_per_user: u16,
    },
    Voice {
        bitrate: u32,
        user_limit: u32,
    },
}

impl ChannelSettings {
    /// Builds the attributes for recreating `channel` in a guild whose voice bitrate
    /// ceiling is `max_bitrate`.
    ///
    /// # Returns
    /// - `Some(ChannelSettings)` - For categories, text and voice channels
    /// - `None` - For kinds that are not cloned
    pub fn for_clone(channel: &DiscordGuildChannel, max_bitrate: Option<u32>) -> Option<Self> {
        match channel.kind {
            ChannelKind::Category => Some(Self::Category),
            ChannelKind::Text => Some(Self::Text {
                topic: channel.topic.clone().unwrap_or_default(),
                nsfw: channel.nsfw,
                rate_limit_per_user: channel.rate_limit_per_user,
            }),
            ChannelKind::Voice => {
                let cap = max_bitrate.unwrap_or(DEFAULT_MAX_BITRATE);
                Some(Self::Voice {
                    bitrate: channel.bitrate.unwrap_or(cap).min(cap),
                    user_limit: channel.user_limit,
                })
            }
            ChannelKind::Other => None,
        }
    }

    #[cfg(test)]
    pub fn kind(&self) -> ChannelKind {
        match self {
            Self::Category => ChannelKind::Category,
            Self::Text { .. } => ChannelKind::Text,
            Self::Voice { .. } => ChannelKind::Voice,
        }
    }
}

/// Attributes for a category or channel to be created in the target guild.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateChannelParam {
    pub name: String,
    pub settings: ChannelSettings,
    /// Target category id to nest the channel under.
    pub parent_id: Option<u64>,
    /// Position hint; the platform is free to reassign it.
    pub position: u16,
    /// Overwrites already translated into the target guild's id space.
    pub overwrites: Vec<ChannelOverwrite>,
}
