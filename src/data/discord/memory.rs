//! In-memory directory client for tests.
//!
//! Holds guild snapshots and applies every mutation to them, so later reads observe
//! earlier writes just like the live service. Every mutating call is recorded in order,
//! failures can be injected per entity name, and a cancellation flag can be tripped
//! after a given number of mutating calls to simulate a stop request arriving while a
//! call is in flight.

use serenity::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use crate::{
    data::discord::directory::GuildDirectory,
    error::DirectoryError,
    model::{
        asset::EncodedImage,
        discord::{
            ChannelSettings, CreateChannelParam, CreateEmojiParam, CreateRoleParam, DiscordGuild,
            DiscordGuildChannel, DiscordGuildEmoji, DiscordGuildRole,
        },
    },
    service::cloner::CancellationFlag,
};

/// A mutating call received by the in-memory directory.
#[derive(Debug, Clone, PartialEq)]
pub enum DirectoryCall {
    CreateRole { guild_id: u64, name: String },
    DeleteRole { guild_id: u64, role_id: u64 },
    CreateChannel { guild_id: u64, param: CreateChannelParam },
    DeleteChannel { channel_id: u64 },
    CreateEmoji { guild_id: u64, name: String },
    DeleteEmoji { guild_id: u64, emoji_id: u64 },
    SetName { guild_id: u64, name: String },
    SetIcon { guild_id: u64, mime: String },
}

#[derive(Default)]
struct State {
    guilds: HashMap<u64, DiscordGuild>,
    calls: Vec<DirectoryCall>,
    failing: HashSet<String>,
    fail_reads: bool,
    cancel_after: Option<(usize, CancellationFlag)>,
    next_id: u64,
}

impl State {
    fn record(&mut self, call: DirectoryCall) {
        self.calls.push(call);
        if let Some((after, flag)) = &self.cancel_after {
            if self.calls.len() >= *after {
                flag.cancel();
            }
        }
    }

    fn check(&self, name: &str) -> Result<(), DirectoryError> {
        if self.failing.contains(name) {
            return Err(DirectoryError::Rejected(format!(
                "Missing Permissions for '{}'",
                name
            )));
        }
        Ok(())
    }

    fn guild_mut(&mut self, guild_id: u64) -> Result<&mut DiscordGuild, DirectoryError> {
        self.guilds
            .get_mut(&guild_id)
            .ok_or_else(|| DirectoryError::Rejected(format!("Unknown Guild {}", guild_id)))
    }

    fn allocate_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }
}

pub struct InMemoryGuildDirectory {
    state: Mutex<State>,
}

impl InMemoryGuildDirectory {
    /// Creates a directory containing the given guilds.
    ///
    /// Ids of created entities start at 900_000 so they never collide with fixture ids.
    pub fn new(guilds: Vec<DiscordGuild>) -> Self {
        Self {
            state: Mutex::new(State {
                guilds: guilds.into_iter().map(|g| (g.guild_id, g)).collect(),
                next_id: 900_000,
                ..Default::default()
            }),
        }
    }

    /// Makes every create/delete of an entity with this name fail.
    pub fn fail_on(self, name: &str) -> Self {
        self.state.lock().unwrap().failing.insert(name.to_string());
        self
    }

    /// Makes collection reads (`roles`, `channels`) fail.
    pub fn fail_reads(self) -> Self {
        self.state.lock().unwrap().fail_reads = true;
        self
    }

    /// Trips `flag` once `calls` mutating calls have been received.
    pub fn cancel_after(&self, calls: usize, flag: CancellationFlag) {
        self.state.lock().unwrap().cancel_after = Some((calls, flag));
    }

    /// All mutating calls received so far, in order.
    pub fn calls(&self) -> Vec<DirectoryCall> {
        self.state.lock().unwrap().calls.clone()
    }

    /// Current state of a guild.
    pub fn snapshot(&self, guild_id: u64) -> DiscordGuild {
        self.state.lock().unwrap().guilds[&guild_id].clone()
    }
}

#[async_trait]
impl GuildDirectory for InMemoryGuildDirectory {
    fn guild(&self, guild_id: u64) -> Option<DiscordGuild> {
        self.state.lock().unwrap().guilds.get(&guild_id).cloned()
    }

    async fn roles(&self, guild_id: u64) -> Result<Vec<DiscordGuildRole>, DirectoryError> {
        let mut state = self.state.lock().unwrap();
        if state.fail_reads {
            return Err(DirectoryError::Rejected("Service unavailable".to_string()));
        }
        Ok(state.guild_mut(guild_id)?.roles.clone())
    }

    async fn channels(&self, guild_id: u64) -> Result<Vec<DiscordGuildChannel>, DirectoryError> {
        let mut state = self.state.lock().unwrap();
        if state.fail_reads {
            return Err(DirectoryError::Rejected("Service unavailable".to_string()));
        }
        Ok(state.guild_mut(guild_id)?.channels.clone())
    }

    async fn create_role(
        &self,
        guild_id: u64,
        param: &CreateRoleParam,
    ) -> Result<DiscordGuildRole, DirectoryError> {
        let mut state = self.state.lock().unwrap();
        state.record(DirectoryCall::CreateRole {
            guild_id,
            name: param.name.clone(),
        });
        state.check(&param.name)?;

        let role_id = state.allocate_id();
        let guild = state.guild_mut(guild_id)?;
        // New roles land directly above @everyone, pushing existing ones up
        for role in guild.roles.iter_mut().filter(|r| r.role_id != guild_id) {
            role.position += 1;
        }
        let role = DiscordGuildRole {
            role_id,
            name: param.name.clone(),
            colour: param.colour,
            permissions: param.permissions,
            hoist: param.hoist,
            mentionable: param.mentionable,
            position: 1,
            managed: false,
        };
        guild.roles.push(role.clone());

        Ok(role)
    }

    async fn delete_role(&self, guild_id: u64, role_id: u64) -> Result<(), DirectoryError> {
        let mut state = self.state.lock().unwrap();
        state.record(DirectoryCall::DeleteRole { guild_id, role_id });
        let name = state
            .guild_mut(guild_id)?
            .role(role_id)
            .map(|r| r.name.clone())
            .unwrap_or_default();
        state.check(&name)?;

        state.guild_mut(guild_id)?.roles.retain(|r| r.role_id != role_id);
        Ok(())
    }

    async fn create_channel(
        &self,
        guild_id: u64,
        param: &CreateChannelParam,
    ) -> Result<DiscordGuildChannel, DirectoryError> {
        let mut state = self.state.lock().unwrap();
        state.record(DirectoryCall::CreateChannel {
            guild_id,
            param: param.clone(),
        });
        state.check(&param.name)?;

        let channel_id = state.allocate_id();
        let (topic, nsfw, rate_limit_per_user, bitrate, user_limit) = match &param.settings {
            ChannelSettings::Category => (None, false, 0, None, 0),
            ChannelSettings::Text {
                topic,
                nsfw,
                rate_limit_per_user,
            } => (Some(topic.clone()), *nsfw, *rate_limit_per_user, None, 0),
            ChannelSettings::Voice {
                bitrate,
                user_limit,
            } => (None, false, 0, Some(*bitrate), *user_limit),
        };
        let channel = DiscordGuildChannel {
            channel_id,
            name: param.name.clone(),
            kind: param.settings.kind(),
            position: param.position,
            parent_id: param.parent_id,
            overwrites: param.overwrites.clone(),
            topic,
            nsfw,
            rate_limit_per_user,
            bitrate,
            user_limit,
        };
        state.guild_mut(guild_id)?.channels.push(channel.clone());

        Ok(channel)
    }

    async fn delete_channel(&self, channel_id: u64) -> Result<(), DirectoryError> {
        let mut state = self.state.lock().unwrap();
        state.record(DirectoryCall::DeleteChannel { channel_id });
        let owner = state
            .guilds
            .values()
            .find_map(|g| g.channel(channel_id).map(|c| (g.guild_id, c.name.clone())));
        let Some((guild_id, name)) = owner else {
            return Err(DirectoryError::Rejected("Unknown Channel".to_string()));
        };
        state.check(&name)?;

        let guild = state.guild_mut(guild_id)?;
        guild.channels.retain(|c| c.channel_id != channel_id);
        // Discord orphans the children of a deleted category
        for child in guild.channels.iter_mut() {
            if child.parent_id == Some(channel_id) {
                child.parent_id = None;
            }
        }
        Ok(())
    }

    async fn create_emoji(
        &self,
        guild_id: u64,
        param: &CreateEmojiParam,
    ) -> Result<DiscordGuildEmoji, DirectoryError> {
        let mut state = self.state.lock().unwrap();
        state.record(DirectoryCall::CreateEmoji {
            guild_id,
            name: param.name.clone(),
        });
        state.check(&param.name)?;

        let emoji_id = state.allocate_id();
        let emoji = DiscordGuildEmoji {
            emoji_id,
            name: param.name.clone(),
            url: format!("https://cdn.discordapp.com/emojis/{}.png", emoji_id),
            managed: false,
        };
        state.guild_mut(guild_id)?.emojis.push(emoji.clone());

        Ok(emoji)
    }

    async fn delete_emoji(&self, guild_id: u64, emoji_id: u64) -> Result<(), DirectoryError> {
        let mut state = self.state.lock().unwrap();
        state.record(DirectoryCall::DeleteEmoji { guild_id, emoji_id });
        let name = state
            .guild_mut(guild_id)?
            .emojis
            .iter()
            .find(|e| e.emoji_id == emoji_id)
            .map(|e| e.name.clone())
            .unwrap_or_default();
        state.check(&name)?;

        state
            .guild_mut(guild_id)?
            .emojis
            .retain(|e| e.emoji_id != emoji_id);
        Ok(())
    }

    async fn set_name(&self, guild_id: u64, name: &str) -> Result<(), DirectoryError> {
        let mut state = self.state.lock().unwrap();
        state.record(DirectoryCall::SetName {
            guild_id,
            name: name.to_string(),
        });
        state.check(name)?;

        state.guild_mut(guild_id)?.name = name.to_string();
        Ok(())
    }

    async fn set_icon(&self, guild_id: u64, icon: &EncodedImage) -> Result<(), DirectoryError> {
        let mut state = self.state.lock().unwrap();
        state.record(DirectoryCall::SetIcon {
            guild_id,
            mime: icon.mime.clone(),
        });
        state.check("icon")?;

        let guild = state.guild_mut(guild_id)?;
        guild.icon_url = Some(format!(
            "https://cdn.discordapp.com/icons/{}/cloned.png",
            guild_id
        ));
        Ok(())
    }
}

/// Builders for guild snapshots used across the engine tests.
pub mod fixture {
    use crate::model::discord::{
        BotAccess, ChannelKind, ChannelOverwrite, DiscordGuild, DiscordGuildChannel,
        DiscordGuildEmoji, DiscordGuildRole,
    };

    /// Empty guild containing only its `@everyone` role.
    pub fn guild(guild_id: u64, name: &str) -> DiscordGuild {
        DiscordGuild {
            guild_id,
            name: name.to_string(),
            icon_url: None,
            max_bitrate: None,
            roles: vec![role(guild_id, "@everyone", 0)],
            channels: Vec::new(),
            emojis: Vec::new(),
            rules_channel_id: None,
            public_updates_channel_id: None,
            access: BotAccess::unrestricted(),
        }
    }

    pub fn role(role_id: u64, name: &str, position: u16) -> DiscordGuildRole {
        DiscordGuildRole {
            role_id,
            name: name.to_string(),
            colour: 0x99AAB5,
            permissions: 0x0400,
            hoist: false,
            mentionable: false,
            position,
            managed: false,
        }
    }

    pub fn managed_role(role_id: u64, name: &str, position: u16) -> DiscordGuildRole {
        DiscordGuildRole {
            managed: true,
            ..role(role_id, name, position)
        }
    }

    fn channel(channel_id: u64, name: &str, kind: ChannelKind, position: u16) -> DiscordGuildChannel {
        DiscordGuildChannel {
            channel_id,
            name: name.to_string(),
            kind,
            position,
            parent_id: None,
            overwrites: Vec::new(),
            topic: None,
            nsfw: false,
            rate_limit_per_user: 0,
            bitrate: None,
            user_limit: 0,
        }
    }

    pub fn category(channel_id: u64, name: &str, position: u16) -> DiscordGuildChannel {
        channel(channel_id, name, ChannelKind::Category, position)
    }

    pub fn text(channel_id: u64, name: &str, position: u16, parent_id: Option<u64>) -> DiscordGuildChannel {
        DiscordGuildChannel {
            parent_id,
            ..channel(channel_id, name, ChannelKind::Text, position)
        }
    }

    pub fn voice(
        channel_id: u64,
        name: &str,
        position: u16,
        parent_id: Option<u64>,
        bitrate: u32,
    ) -> DiscordGuildChannel {
        DiscordGuildChannel {
            parent_id,
            bitrate: Some(bitrate),
            ..channel(channel_id, name, ChannelKind::Voice, position)
        }
    }

    pub fn with_overwrites(
        channel: DiscordGuildChannel,
        overwrites: Vec<ChannelOverwrite>,
    ) -> DiscordGuildChannel {
        DiscordGuildChannel {
            overwrites,
            ..channel
        }
    }

    pub fn emoji(emoji_id: u64, name: &str) -> DiscordGuildEmoji {
        DiscordGuildEmoji {
            emoji_id,
            name: name.to_string(),
            url: format!("https://cdn.discordapp.com/emojis/{}.png", emoji_id),
            managed: false,
        }
    }
}
