//! Single-run ownership of the clone engine for the bot.

use dioxus_logger::tracing;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::{
    data::discord::GuildDirectory,
    error::CloneError,
    model::clone::{CloneOptions, CloneStats},
    service::{
        asset::AssetFetcher,
        cloner::{PacingPolicy, ProgressLog, ServerCloner},
    },
};

/// Starts clone runs and stops the active one.
///
/// At most one run is active per controller. A start request while a run is active is
/// refused rather than queued.
pub struct CloneController {
    assets: Arc<dyn AssetFetcher>,
    pacing: PacingPolicy,
    active: Mutex<Option<Arc<ServerCloner>>>,
}

impl CloneController {
    pub fn new(assets: Arc<dyn AssetFetcher>, pacing: PacingPolicy) -> Self {
        Self {
            assets,
            pacing,
            active: Mutex::new(None),
        }
    }

    /// Runs a clone to completion.
    ///
    /// # Returns
    /// - `Ok(CloneStats)` - Run completed or was stopped
    /// - `Err(CloneError::AlreadyRunning)` - Another run is active
    /// - `Err(CloneError::SourceNotFound | TargetNotFound)` - Guild could not be resolved
    pub async fn start(
        &self,
        directory: Arc<dyn GuildDirectory>,
        source_id: u64,
        target_id: u64,
        options: &CloneOptions,
        log: &dyn ProgressLog,
    ) -> Result<CloneStats, CloneError> {
        let run = self.claim(directory)?;

        tracing::info!("Clone {} -> {} started", source_id, target_id);
        run.cloner
            .clone_server(source_id, target_id, options, log)
            .await
    }

    /// Asks the active run, if any, to stop.
    ///
    /// # Returns
    /// - `true` - A run was active and has been signalled
    /// - `false` - No run is active
    pub fn request_stop(&self) -> bool {
        match self.lock_active().as_ref() {
            Some(cloner) => {
                cloner.request_stop();
                true
            }
            None => false,
        }
    }

    pub fn is_running(&self) -> bool {
        self.lock_active().is_some()
    }

    fn claim(&self, directory: Arc<dyn GuildDirectory>) -> Result<ActiveRun<'_>, CloneError> {
        let mut active = self.lock_active();
        if active.is_some() {
            return Err(CloneError::AlreadyRunning);
        }

        let cloner = Arc::new(
            ServerCloner::new(directory, self.assets.clone()).with_pacing(self.pacing),
        );
        *active = Some(cloner.clone());

        Ok(ActiveRun {
            controller: self,
            cloner,
        })
    }

    fn lock_active(&self) -> MutexGuard<'_, Option<Arc<ServerCloner>>> {
        self.active.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Releases the controller's active slot when the run ends or its task is dropped.
struct ActiveRun<'a> {
    controller: &'a CloneController,
    cloner: Arc<ServerCloner>,
}

impl Drop for ActiveRun<'_> {
    fn drop(&mut self) {
        *self.controller.lock_active() = None;
    }
}
