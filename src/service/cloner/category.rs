//! Category replication.

use crate::{
    data::discord::GuildDirectory,
    error::ItemError,
    model::discord::{ChannelSettings, CreateChannelParam, DiscordGuild},
    service::cloner::{
        context::{CloneContext, PhaseTally},
        overwrite::{fetch_target_roles, OverwriteMapper},
        pacing::OperationClass,
    },
};

/// Recreates the source's categories in ascending position order with translated
/// permission overwrites.
pub struct CategoryReplicator<'a> {
    directory: &'a dyn GuildDirectory,
}

impl<'a> CategoryReplicator<'a> {
    pub fn new(directory: &'a dyn GuildDirectory) -> Self {
        Self { directory }
    }

    pub async fn run(&self, source: &DiscordGuild, target_id: u64, ctx: &mut CloneContext<'_>) {
        ctx.log("📁 Cloning categories...");
        let target_roles = fetch_target_roles(self.directory, target_id, ctx).await;
        let mut tally = PhaseTally::default();

        for category in source.categories() {
            if ctx.is_cancelled() {
                break;
            }

            let overwrites = OverwriteMapper::new(&ctx.role_map, source, &target_roles)
                .map(&category.overwrites);
            let param = CreateChannelParam {
                name: category.name.clone(),
                settings: ChannelSettings::Category,
                parent_id: None,
                position: category.position,
                overwrites,
            };

            let outcome = self
                .directory
                .create_channel(target_id, &param)
                .await
                .map_err(ItemError::from);
            tally.record(&outcome);
            match outcome {
                Ok(_) => {
                    ctx.log(format!("Created category: {}", category.name));
                    ctx.pace(OperationClass::Standard).await;
                }
                Err(e) => ctx.log(format!(
                    "Failed to create category {}: {}",
                    category.name, e
                )),
            }
        }

        ctx.stats.categories_created += tally.succeeded;
        ctx.stats.failed += tally.failed;
    }
}
