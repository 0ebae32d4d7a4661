//! Text and voice channel replication.

use dioxus_logger::tracing;

use crate::{
    data::discord::GuildDirectory,
    error::ItemError,
    model::discord::{ChannelSettings, CreateChannelParam, DiscordGuild, DiscordGuildChannel},
    service::cloner::{
        context::{CloneContext, PhaseTally},
        overwrite::{fetch_target_roles, OverwriteMapper},
        pacing::OperationClass,
    },
};

/// Recreates the source's text and voice channels in ascending position order.
///
/// Each channel is nested under the target category whose name matches the source
/// parent's name. Category ids differ between guilds, so this is a name join; when the
/// target holds several categories with that name the lowest positioned one wins.
pub struct ChannelReplicator<'a> {
    directory: &'a dyn GuildDirectory,
}

impl<'a> ChannelReplicator<'a> {
    pub fn new(directory: &'a dyn GuildDirectory) -> Self {
        Self { directory }
    }

    /// # Arguments
    /// - `source` - Snapshot of the source guild
    /// - `target` - Snapshot of the target guild, for its voice bitrate ceiling
    /// - `ctx` - Run context holding the role map and counters
    pub async fn run(&self, source: &DiscordGuild, target: &DiscordGuild, ctx: &mut CloneContext<'_>) {
        ctx.log("💬 Cloning channels...");
        let target_roles = fetch_target_roles(self.directory, target.guild_id, ctx).await;
        let target_channels = match self.directory.channels(target.guild_id).await {
            Ok(channels) => channels,
            Err(e) => {
                tracing::warn!("Failed to fetch channels of guild {}: {}", target.guild_id, e);
                ctx.log(format!("Failed to fetch target channels: {}", e));
                Vec::new()
            }
        };
        let mut tally = PhaseTally::default();

        for channel in source.text_and_voice_channels() {
            if ctx.is_cancelled() {
                break;
            }

            let Some(settings) = ChannelSettings::for_clone(channel, target.max_bitrate) else {
                continue;
            };
            let overwrites = OverwriteMapper::new(&ctx.role_map, source, &target_roles)
                .map(&channel.overwrites);
            let param = CreateChannelParam {
                name: channel.name.clone(),
                settings,
                parent_id: resolve_parent(source, channel, &target_channels),
                position: channel.position,
                overwrites,
            };

            let outcome = self
                .directory
                .create_channel(target.guild_id, &param)
                .await
                .map_err(ItemError::from);
            tally.record(&outcome);
            match outcome {
                Ok(_) => {
                    ctx.log(format!("Created channel: {}", channel.name));
                    ctx.pace(OperationClass::Standard).await;
                }
                Err(e) => ctx.log(format!("Failed to create channel {}: {}", channel.name, e)),
            }
        }

        ctx.stats.channels_created += tally.succeeded;
        ctx.stats.failed += tally.failed;
    }
}

/// Finds the target category matching the name of `channel`'s source parent.
///
/// # Returns
/// - `Some(u64)` - Id of the matching target category
/// - `None` - Channel has no parent, or no target category has the parent's name
fn resolve_parent(
    source: &DiscordGuild,
    channel: &DiscordGuildChannel,
    target_channels: &[DiscordGuildChannel],
) -> Option<u64> {
    let parent_name = &source.channel(channel.parent_id?)?.name;

    target_channels
        .iter()
        .filter(|c| c.is_category() && &c.name == parent_name)
        .min_by_key(|c| (c.position, c.channel_id))
        .map(|c| c.channel_id)
}
