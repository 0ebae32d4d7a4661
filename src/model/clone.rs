//! Run-level models for a clone: options, counters and the role identifier map.

use std::collections::HashMap;
use std::fmt;

/// Toggles that gate each phase of a clone run.
///
/// Every toggle controls exactly one phase. Deletion and the role/channel phases are
/// on by default; emoji cloning and guild metadata sync are opt-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CloneOptions {
    pub delete_channels: bool,
    pub delete_roles: bool,
    pub delete_emojis: bool,
    pub clone_channels: bool,
    pub clone_roles: bool,
    pub clone_emojis: bool,
    pub update_info: bool,
}

impl Default for CloneOptions {
    fn default() -> Self {
        Self {
            delete_channels: true,
            delete_roles: true,
            delete_emojis: true,
            clone_channels: true,
            clone_roles: true,
            clone_emojis: false,
            update_info: false,
        }
    }
}

/// Counters accumulated over a single clone run.
///
/// Only the phase currently running mutates these; they are never reset mid-run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CloneStats {
    pub roles_created: u32,
    pub categories_created: u32,
    pub channels_created: u32,
    pub emojis_created: u32,
    pub failed: u32,
}

impl CloneStats {
    /// Total number of entities created across all phases.
    pub fn succeeded(&self) -> u32 {
        self.roles_created + self.categories_created + self.channels_created + self.emojis_created
    }

    /// Percentage of attempted operations that succeeded, rounded half up.
    ///
    /// # Returns
    /// - `0` - Nothing was created and nothing failed
    /// - `0..=100` - `round(100 * succeeded / (succeeded + failed))` otherwise
    pub fn success_rate(&self) -> u32 {
        let succeeded = u64::from(self.succeeded());
        let total = succeeded + u64::from(self.failed);
        if total == 0 {
            return 0;
        }

        ((200 * succeeded + total) / (2 * total)) as u32
    }
}

impl fmt::Display for CloneStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "roles: {}, categories: {}, channels: {}, emojis: {}, failed: {}, success rate: {}%",
            self.roles_created,
            self.categories_created,
            self.channels_created,
            self.emojis_created,
            self.failed,
            self.success_rate()
        )
    }
}

/// Translation table from source role ids to the ids of the roles created for them in
/// the target guild.
///
/// Built during role replication and consulted only when translating permission
/// overwrites. Lives for a single run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoleMap {
    entries: HashMap<u64, u64>,
}

impl RoleMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the target id created for a source role.
    pub fn insert(&mut self, source_role_id: u64, target_role_id: u64) {
        self.entries.insert(source_role_id, target_role_id);
    }

    /// Looks up the target id for a source role.
    pub fn get(&self, source_role_id: u64) -> Option<u64> {
        self.entries.get(&source_role_id).copied()
    }

    #[cfg(test)]
    pub fn contains(&self, source_role_id: u64) -> bool {
        self.entries.contains_key(&source_role_id)
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
