//! Guild cloning engine.
//!
//! Replicates the structure of a source guild onto a target guild in ordered phases:
//! cleanup of the target, roles, categories, channels, emojis and finally guild
//! metadata. Later phases depend on ids produced by earlier ones (channels need their
//! categories, overwrites need roles), so each phase completes before the next starts.
//!
//! Per-entity failures never abort a run: they are logged, counted and skipped. Only
//! an unresolvable source or target guild fails the run, and it does so before anything
//! in the target is touched.

pub mod category;
pub mod channel;
pub mod cleanup;
pub mod context;
pub mod emoji;
pub mod metadata;
pub mod overwrite;
pub mod pacing;
pub mod role;

#[cfg(test)]
mod test;

use dioxus_logger::tracing;
use std::sync::Arc;

use crate::{
    data::discord::GuildDirectory,
    error::CloneError,
    model::clone::{CloneOptions, CloneStats},
    service::asset::AssetFetcher,
};

use self::{
    category::CategoryReplicator, channel::ChannelReplicator, cleanup::TargetCleanup,
    context::CloneContext, emoji::EmojiReplicator, metadata::MetadataSynchronizer,
    role::RoleReplicator,
};

pub use self::{
    context::{CancellationFlag, ProgressLog, TracingProgressLog},
    pacing::PacingPolicy,
};

/// Runs a clone from one guild to another and exposes a stop control for it.
///
/// An instance serves a single run: its stop flag is never reset, so once stopped every
/// later `clone_server` call stops before its first phase. Build a new cloner per run.
pub struct ServerCloner {
    directory: Arc<dyn GuildDirectory>,
    assets: Arc<dyn AssetFetcher>,
    pacing: PacingPolicy,
    cancel: CancellationFlag,
}

impl ServerCloner {
    pub fn new(directory: Arc<dyn GuildDirectory>, assets: Arc<dyn AssetFetcher>) -> Self {
        Self {
            directory,
            assets,
            pacing: PacingPolicy::default(),
            cancel: CancellationFlag::new(),
        }
    }

    pub fn with_pacing(mut self, pacing: PacingPolicy) -> Self {
        self.pacing = pacing;
        self
    }

    /// Handle to this cloner's stop signal, for callers that outlive a borrow of it.
    #[cfg(test)]
    pub fn cancellation_flag(&self) -> CancellationFlag {
        self.cancel.clone()
    }

    /// Asks the running clone to stop after its in-flight call.
    ///
    /// Safe at any time; a flag set before the run starts stops it before its first
    /// phase.
    pub fn request_stop(&self) {
        self.cancel.cancel();
    }

    /// Clones the source guild onto the target guild.
    ///
    /// # Arguments
    /// - `source_id` - Guild to read from
    /// - `target_id` - Guild to modify
    /// - `options` - Phase toggles
    /// - `log` - Receives a progress line for every entity and phase boundary
    ///
    /// # Returns
    /// - `Ok(CloneStats)` - Run completed or was stopped; counters reflect work done
    /// - `Err(CloneError::SourceNotFound)` - Source guild not in the client's cache
    /// - `Err(CloneError::TargetNotFound)` - Target guild not in the client's cache
    pub async fn clone_server(
        &self,
        source_id: u64,
        target_id: u64,
        options: &CloneOptions,
        log: &dyn ProgressLog,
    ) -> Result<CloneStats, CloneError> {
        let resolved = self
            .directory
            .guild(source_id)
            .ok_or(CloneError::SourceNotFound(source_id))
            .and_then(|source| {
                self.directory
                    .guild(target_id)
                    .map(|target| (source, target))
                    .ok_or(CloneError::TargetNotFound(target_id))
            });
        let (source, target) = match resolved {
            Ok(guilds) => guilds,
            Err(e) => {
                log.log(&format!("❌ Cloning failed: {}", e));
                return Err(e);
            }
        };

        tracing::info!(
            "Cloning guild {} into guild {} with {:?}",
            source.guild_id,
            target.guild_id,
            options
        );
        let mut ctx = CloneContext::new(self.cancel.clone(), log, &self.pacing);
        ctx.log(format!("Cloning from: {} -> {}", source.name, target.name));
        ctx.log("Starting cloning process...");

        let directory = self.directory.as_ref();
        let assets = self.assets.as_ref();

        if !ctx.is_cancelled() {
            TargetCleanup::new(directory)
                .run(&target, options, &mut ctx)
                .await;
        }
        if options.clone_roles && !ctx.is_cancelled() {
            RoleReplicator::new(directory)
                .run(&source, target.guild_id, &mut ctx)
                .await;
        }
        if options.clone_channels && !ctx.is_cancelled() {
            CategoryReplicator::new(directory)
                .run(&source, target.guild_id, &mut ctx)
                .await;
        }
        if options.clone_channels && !ctx.is_cancelled() {
            ChannelReplicator::new(directory)
                .run(&source, &target, &mut ctx)
                .await;
        }
        if options.clone_emojis && !ctx.is_cancelled() {
            EmojiReplicator::new(directory, assets)
                .run(&source, target.guild_id, &mut ctx)
                .await;
        }
        if options.update_info && !ctx.is_cancelled() {
            MetadataSynchronizer::new(directory, assets)
                .run(&source, target.guild_id, &ctx)
                .await;
        }

        let stats = ctx.stats;
        if ctx.is_cancelled() {
            tracing::info!("Clone into guild {} stopped: {}", target.guild_id, stats);
            ctx.log("⚠️ Cloning stopped by user.");
        } else {
            tracing::info!("Clone into guild {} finished: {}", target.guild_id, stats);
            ctx.log(format!(
                "🎉 Cloning completed! Success Rate: {}%",
                stats.success_rate()
            ));
        }

        Ok(stats)
    }
}
