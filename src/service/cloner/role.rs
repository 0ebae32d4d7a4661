//! Role replication.

use crate::{
    data::discord::GuildDirectory,
    error::ItemError,
    model::discord::{CreateRoleParam, DiscordGuild},
    service::cloner::{
        context::{CloneContext, PhaseTally},
        pacing::OperationClass,
    },
};

/// Recreates the source's cloneable roles in the target and records each created role
/// in the run's `RoleMap`.
///
/// Roles are created highest position first. New roles are placed at the top of the
/// target's hierarchy, so this order approximates the source ranking without the rate
/// limit cost of explicit reordering.
pub struct RoleReplicator<'a> {
    directory: &'a dyn GuildDirectory,
}

impl<'a> RoleReplicator<'a> {
    pub fn new(directory: &'a dyn GuildDirectory) -> Self {
        Self { directory }
    }

    pub async fn run(&self, source: &DiscordGuild, target_id: u64, ctx: &mut CloneContext<'_>) {
        ctx.log("👑 Cloning roles...");
        let mut tally = PhaseTally::default();

        for role in source.cloneable_roles() {
            if ctx.is_cancelled() {
                break;
            }

            let param = CreateRoleParam::from_source(role);
            let outcome = self
                .directory
                .create_role(target_id, &param)
                .await
                .map_err(ItemError::from);
            tally.record(&outcome);
            match outcome {
                Ok(created) => {
                    ctx.role_map.insert(role.role_id, created.role_id);
                    ctx.log(format!("Created role: {}", role.name));
                    ctx.pace(OperationClass::Standard).await;
                }
                Err(e) => ctx.log(format!("Failed to create role {}: {}", role.name, e)),
            }
        }

        ctx.stats.roles_created += tally.succeeded;
        ctx.stats.failed += tally.failed;
    }
}
