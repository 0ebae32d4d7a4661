//! Removal of existing channels, roles and emojis from the target guild.

use crate::{
    data::discord::GuildDirectory,
    error::ItemError,
    model::{clone::CloneOptions, discord::DiscordGuild},
    service::cloner::{
        context::{CloneContext, PhaseTally},
        pacing::OperationClass,
    },
};

/// Deletes target content gated by the options' delete toggles.
///
/// Only entities the bot may remove are attempted. Deletions are not counted as
/// successes; a failed deletion counts towards `CloneStats::failed`.
pub struct TargetCleanup<'a> {
    directory: &'a dyn GuildDirectory,
}

impl<'a> TargetCleanup<'a> {
    pub fn new(directory: &'a dyn GuildDirectory) -> Self {
        Self { directory }
    }

    /// Runs the cleanup against the snapshot taken at the start of the run.
    ///
    /// Returns early, skipping any remaining collection, once cancellation is observed.
    pub async fn run(&self, target: &DiscordGuild, options: &CloneOptions, ctx: &mut CloneContext<'_>) {
        ctx.log("🗑️ Cleaning target server...");
        let mut tally = PhaseTally::default();

        let completed = self.delete_all(target, options, ctx, &mut tally).await;
        ctx.stats.failed += tally.failed;

        if completed {
            ctx.log("Cleanup step finished.");
        }
    }

    async fn delete_all(
        &self,
        target: &DiscordGuild,
        options: &CloneOptions,
        ctx: &CloneContext<'_>,
        tally: &mut PhaseTally,
    ) -> bool {
        if options.delete_channels {
            for channel in target.removable_channels() {
                if ctx.is_cancelled() {
                    return false;
                }

                let outcome = self
                    .directory
                    .delete_channel(channel.channel_id)
                    .await
                    .map_err(ItemError::from);
                tally.record(&outcome);
                match outcome {
                    Ok(()) => {
                        ctx.log(format!("Deleted channel: {}", channel.name));
                        ctx.pace(OperationClass::Standard).await;
                    }
                    Err(e) => ctx.log(format!("Failed to delete channel {}: {}", channel.name, e)),
                }
            }
        }

        if options.delete_roles {
            for role in target.removable_roles() {
                if ctx.is_cancelled() {
                    return false;
                }

                let outcome = self
                    .directory
                    .delete_role(target.guild_id, role.role_id)
                    .await
                    .map_err(ItemError::from);
                tally.record(&outcome);
                match outcome {
                    Ok(()) => {
                        ctx.log(format!("Deleted role: {}", role.name));
                        ctx.pace(OperationClass::Standard).await;
                    }
                    Err(e) => ctx.log(format!("Failed to delete role {}: {}", role.name, e)),
                }
            }
        }

        if options.delete_emojis {
            for emoji in target.removable_emojis() {
                if ctx.is_cancelled() {
                    return false;
                }

                let outcome = self
                    .directory
                    .delete_emoji(target.guild_id, emoji.emoji_id)
                    .await
                    .map_err(ItemError::from);
                tally.record(&outcome);
                match outcome {
                    Ok(()) => {
                        ctx.log(format!("Deleted emoji: {}", emoji.name));
                        ctx.pace(OperationClass::Standard).await;
                    }
                    Err(e) => ctx.log(format!("Failed to delete emoji {}: {}", emoji.name, e)),
                }
            }
        }

        true
    }
}
