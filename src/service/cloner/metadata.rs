//! Guild name and icon synchronisation.

use dioxus_logger::tracing;

use crate::{
    data::discord::GuildDirectory,
    error::ItemError,
    model::discord::DiscordGuild,
    service::{
        asset::AssetFetcher,
        cloner::{context::CloneContext, pacing::OperationClass},
    },
};

/// Copies the source's name and icon onto the target.
///
/// Failures here are logged and otherwise ignored; they never touch the run's counters.
pub struct MetadataSynchronizer<'a> {
    directory: &'a dyn GuildDirectory,
    assets: &'a dyn AssetFetcher,
}

impl<'a> MetadataSynchronizer<'a> {
    pub fn new(directory: &'a dyn GuildDirectory, assets: &'a dyn AssetFetcher) -> Self {
        Self { directory, assets }
    }

    pub async fn run(&self, source: &DiscordGuild, target_id: u64, ctx: &CloneContext<'_>) {
        ctx.log("🏠 Updating server info...");

        match self.sync(source, target_id, ctx).await {
            Ok(()) => {
                ctx.log("Server info updated.");
                ctx.pace(OperationClass::Standard).await;
            }
            Err(e) => {
                tracing::warn!("Metadata sync for guild {} failed: {}", target_id, e);
                ctx.log(format!("Failed to update info: {}", e));
            }
        }
    }

    async fn sync(
        &self,
        source: &DiscordGuild,
        target_id: u64,
        ctx: &CloneContext<'_>,
    ) -> Result<(), ItemError> {
        self.directory.set_name(target_id, &source.name).await?;

        if ctx.is_cancelled() {
            return Ok(());
        }
        if let Some(icon_url) = &source.icon_url {
            let icon = self.assets.fetch(icon_url).await?;
            self.directory.set_icon(target_id, &icon).await?;
        }

        Ok(())
    }
}
