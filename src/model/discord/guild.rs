//! Discord guild snapshot domain model.
//!
//! A `DiscordGuild` is a point-in-time copy of a cached guild: its display metadata,
//! its roles, channels and emojis, and what the bot is allowed to remove from it.
//! Snapshots are taken once at the start of a clone run; the guild lock held by the
//! cache never outlives the conversion.

use serenity::all::{Guild, Permissions, PremiumTier, UserId};

use crate::model::discord::{
    channel::{ChannelKind, DiscordGuildChannel},
    emoji::DiscordGuildEmoji,
    role::DiscordGuildRole,
};

/// What the bot may remove from a guild.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BotAccess {
    /// Position of the bot's highest role; roles at or above it cannot be managed.
    /// `None` means the bot is not restricted by hierarchy (owner).
    pub top_role_position: Option<u16>,
    pub manage_channels: bool,
    pub manage_roles: bool,
    pub manage_emojis: bool,
}

impl BotAccess {
    /// Access for a bot that owns the guild or whose membership is not cached.
    ///
    /// The service remains the final authority; rejected deletions are counted as
    /// failures.
    pub fn unrestricted() -> Self {
        Self {
            top_role_position: None,
            manage_channels: true,
            manage_roles: true,
            manage_emojis: true,
        }
    }

    /// Computes access from the bot's cached membership in `guild`.
    pub fn from_guild(guild: &Guild, bot_user_id: u64) -> Self {
        let bot_id = UserId::new(bot_user_id);
        if guild.owner_id == bot_id {
            return Self::unrestricted();
        }

        let Some(member) = guild.members.get(&bot_id) else {
            return Self::unrestricted();
        };

        #[allow(deprecated)]
        let permissions = guild.member_permissions(member);
        let top_role_position = member
            .roles
            .iter()
            .filter_map(|id| guild.roles.get(id))
            .map(|role| role.position)
            .max()
            .unwrap_or(0);

        Self {
            top_role_position: Some(top_role_position),
            manage_channels: permissions.contains(Permissions::MANAGE_CHANNELS),
            manage_roles: permissions.contains(Permissions::MANAGE_ROLES),
            manage_emojis: permissions.contains(Permissions::MANAGE_GUILD_EXPRESSIONS),
        }
    }
}

/// Point-in-time snapshot of a guild.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscordGuild {
    /// Discord guild ID as a u64.
    pub guild_id: u64,
    /// Guild display name.
    pub name: String,
    /// PNG icon URL at 1024px, if the guild has an icon.
    pub icon_url: Option<String>,
    /// Highest voice bitrate the guild supports, in bits per second.
    pub max_bitrate: Option<u32>,
    pub roles: Vec<DiscordGuildRole>,
    pub channels: Vec<DiscordGuildChannel>,
    pub emojis: Vec<DiscordGuildEmoji>,
    /// Community rules channel; Discord refuses to delete it.
    pub rules_channel_id: Option<u64>,
    /// Community moderator-updates channel; Discord refuses to delete it.
    pub public_updates_channel_id: Option<u64>,
    pub access: BotAccess,
}

impl DiscordGuild {
    /// Converts a cached Serenity guild into a snapshot.
    ///
    /// # Arguments
    /// - `guild` - Guild as held in the client's cache
    /// - `bot_user_id` - The bot's own user id, used to compute removal access
    pub fn from_serenity(guild: &Guild, bot_user_id: u64) -> Self {
        let icon_url = guild.icon.as_ref().map(|hash| {
            format!(
                "https://cdn.discordapp.com/icons/{}/{}.png?size=1024",
                guild.id, hash
            )
        });
        let vip = guild.features.iter().any(|f| f == "VIP_REGIONS");

        Self {
            guild_id: guild.id.get(),
            name: guild.name.clone(),
            icon_url,
            max_bitrate: Some(max_bitrate_for(guild.premium_tier, vip)),
            roles: guild.roles.values().map(DiscordGuildRole::from_serenity).collect(),
            channels: guild
                .channels
                .values()
                .map(DiscordGuildChannel::from_serenity)
                .collect(),
            emojis: guild.emojis.values().map(DiscordGuildEmoji::from_serenity).collect(),
            rules_channel_id: guild.rules_channel_id.map(|id| id.get()),
            public_updates_channel_id: guild.public_updates_channel_id.map(|id| id.get()),
            access: BotAccess::from_guild(guild, bot_user_id),
        }
    }

    /// Finds a role by id.
    pub fn role(&self, role_id: u64) -> Option<&DiscordGuildRole> {
        self.roles.iter().find(|role| role.role_id == role_id)
    }

    /// Finds a channel or category by id.
    pub fn channel(&self, channel_id: u64) -> Option<&DiscordGuildChannel> {
        self.channels.iter().find(|c| c.channel_id == channel_id)
    }

    /// Roles that can be cloned: everything except `@everyone` and integration roles,
    /// highest position first.
    pub fn cloneable_roles(&self) -> Vec<&DiscordGuildRole> {
        let mut roles: Vec<_> = self
            .roles
            .iter()
            .filter(|role| !role.is_default(self.guild_id) && !role.managed)
            .collect();
        roles.sort_by(|a, b| b.position.cmp(&a.position).then(a.role_id.cmp(&b.role_id)));
        roles
    }

    /// Categories in ascending position order.
    pub fn categories(&self) -> Vec<&DiscordGuildChannel> {
        self.channels_of(&[ChannelKind::Category])
    }

    /// Text and voice channels in ascending position order.
    pub fn text_and_voice_channels(&self) -> Vec<&DiscordGuildChannel> {
        self.channels_of(&[ChannelKind::Text, ChannelKind::Voice])
    }

    fn channels_of(&self, kinds: &[ChannelKind]) -> Vec<&DiscordGuildChannel> {
        let mut channels: Vec<_> = self
            .channels
            .iter()
            .filter(|c| kinds.contains(&c.kind))
            .collect();
        channels.sort_by(|a, b| {
            a.position
                .cmp(&b.position)
                .then(a.channel_id.cmp(&b.channel_id))
        });
        channels
    }

    /// Emojis in ascending id order.
    pub fn sorted_emojis(&self) -> Vec<&DiscordGuildEmoji> {
        let mut emojis: Vec<_> = self.emojis.iter().collect();
        emojis.sort_by_key(|e| e.emoji_id);
        emojis
    }

    /// Channels the bot is permitted to delete: everything except the community rules
    /// and moderator-updates channels.
    pub fn removable_channels(&self) -> Vec<&DiscordGuildChannel> {
        if !self.access.manage_channels {
            return Vec::new();
        }
        let protected = [self.rules_channel_id, self.public_updates_channel_id];
        self.channels
            .iter()
            .filter(|c| !protected.contains(&Some(c.channel_id)))
            .collect()
    }

    /// Roles the bot is permitted to delete: not `@everyone`, not managed and below the
    /// bot's highest role.
    pub fn removable_roles(&self) -> Vec<&DiscordGuildRole> {
        if !self.access.manage_roles {
            return Vec::new();
        }
        self.roles
            .iter()
            .filter(|role| !role.is_default(self.guild_id) && !role.managed)
            .filter(|role| match self.access.top_role_position {
                Some(top) => role.position < top,
                None => true,
            })
            .collect()
    }

    /// Emojis the bot is permitted to delete: those not owned by an integration.
    pub fn removable_emojis(&self) -> Vec<&DiscordGuildEmoji> {
        if !self.access.manage_emojis {
            return Vec::new();
        }
        self.emojis.iter().filter(|e| !e.managed).collect()
    }
}

/// Voice bitrate ceiling for a boost tier.
///
/// Guilds with the `VIP_REGIONS` feature get the top tier ceiling regardless of boosts.
pub fn max_bitrate_for(tier: PremiumTier, vip: bool) -> u32 {
    if vip {
        return 384_000;
    }
    match tier {
        PremiumTier::Tier1 => 128_000,
        PremiumTier::Tier2 => 256_000,
        PremiumTier::Tier3 => 384_000,
        _ => 96_000,
    }
}
