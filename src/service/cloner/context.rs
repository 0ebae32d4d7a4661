//! Run-wide state shared by the clone phases.

use dioxus_logger::tracing;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::{
    error::ItemError,
    model::clone::{CloneStats, RoleMap},
    service::cloner::pacing::{OperationClass, PacingPolicy},
};

/// Cooperative stop signal for a clone run.
///
/// Clones share the same flag. Setting it never interrupts a call in flight; phases
/// poll it before each remote call and stop issuing new ones once it is set.
#[derive(Debug, Clone, Default)]
pub struct CancellationFlag(Arc<AtomicBool>);

impl CancellationFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Sink for human-readable progress lines.
///
/// Fire-and-forget: implementations must not block the run.
pub trait ProgressLog: Send + Sync {
    fn log(&self, message: &str);
}

/// Progress sink that emits each line as a tracing event.
pub struct TracingProgressLog;

impl ProgressLog for TracingProgressLog {
    fn log(&self, message: &str) {
        tracing::info!("{}", message);
    }
}

/// Created/failed counts accumulated by a single phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PhaseTally {
    pub succeeded: u32,
    pub failed: u32,
}

impl PhaseTally {
    /// Folds one item outcome into the tally.
    pub fn record<T>(&mut self, outcome: &Result<T, ItemError>) {
        match outcome {
            Ok(_) => self.succeeded += 1,
            Err(_) => self.failed += 1,
        }
    }
}

/// State owned by one clone run and handed to every phase.
pub struct CloneContext<'a> {
    pub role_map: RoleMap,
    pub stats: CloneStats,
    cancel: CancellationFlag,
    log: &'a dyn ProgressLog,
    pacing: &'a PacingPolicy,
}

impl<'a> CloneContext<'a> {
    pub fn new(cancel: CancellationFlag, log: &'a dyn ProgressLog, pacing: &'a PacingPolicy) -> Self {
        Self {
            role_map: RoleMap::new(),
            stats: CloneStats::default(),
            cancel,
            log,
            pacing,
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }

    pub fn log(&self, message: impl AsRef<str>) {
        self.log.log(message.as_ref());
    }

    pub async fn pace(&self, class: OperationClass) {
        self.pacing.pace(class).await;
    }
}
