//! Translation of permission overwrites from the source guild's id space into the
//! target guild's.

use dioxus_logger::tracing;

use crate::{
    data::discord::GuildDirectory,
    model::{
        clone::RoleMap,
        discord::{ChannelOverwrite, DiscordGuild, DiscordGuildRole, OverwriteSubject},
    },
    service::cloner::context::CloneContext,
};

/// Rewrites overwrite subjects so they reference target entities.
///
/// Member subjects are copied unchanged since membership is shared between the two
/// guilds. Role subjects resolve through the `RoleMap` first and then by role name
/// against the target's roles; an overwrite that resolves neither way is dropped.
/// `@everyone` resolves by name like any other role.
pub struct OverwriteMapper<'a> {
    role_map: &'a RoleMap,
    source: &'a DiscordGuild,
    target_roles: &'a [DiscordGuildRole],
}

impl<'a> OverwriteMapper<'a> {
    /// # Arguments
    /// - `role_map` - Source to target role ids created during this run
    /// - `source` - Snapshot of the source guild, used to name unmapped roles
    /// - `target_roles` - Roles currently in the target guild
    pub fn new(
        role_map: &'a RoleMap,
        source: &'a DiscordGuild,
        target_roles: &'a [DiscordGuildRole],
    ) -> Self {
        Self {
            role_map,
            source,
            target_roles,
        }
    }

    /// Translates `overwrites`, preserving their order.
    pub fn map(&self, overwrites: &[ChannelOverwrite]) -> Vec<ChannelOverwrite> {
        overwrites
            .iter()
            .filter_map(|overwrite| match overwrite.subject {
                OverwriteSubject::Member(_) => Some(*overwrite),
                OverwriteSubject::Role(source_role_id) => self
                    .resolve_role(source_role_id)
                    .map(|target_id| overwrite.with_subject(OverwriteSubject::Role(target_id))),
            })
            .collect()
    }

    fn resolve_role(&self, source_role_id: u64) -> Option<u64> {
        if let Some(target_id) = self.role_map.get(source_role_id) {
            return Some(target_id);
        }

        let name = &self.source.role(source_role_id)?.name;
        self.target_roles
            .iter()
            .filter(|role| &role.name == name)
            .min_by_key(|role| role.role_id)
            .map(|role| role.role_id)
    }
}

/// Reads the target's current roles for name-based overwrite resolution.
///
/// A failed read is logged and treated as an empty role list, leaving only the
/// `RoleMap` to resolve role overwrites.
pub async fn fetch_target_roles(
    directory: &dyn GuildDirectory,
    target_id: u64,
    ctx: &CloneContext<'_>,
) -> Vec<DiscordGuildRole> {
    match directory.roles(target_id).await {
        Ok(roles) => roles,
        Err(e) => {
            tracing::warn!("Failed to fetch roles of guild {}: {}", target_id, e);
            ctx.log(format!("Failed to fetch target roles: {}", e));
            Vec::new()
        }
    }
}
