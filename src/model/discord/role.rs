//! Discord guild role domain models.
//!
//! Provides the domain model for roles read from a guild and the parameter model used
//! to create a role in another guild. Conversion from Serenity happens at the
//! directory-service boundary.

use serenity::all::Role;

/// Discord role within a guild.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscordGuildRole {
    /// Discord role ID as a u64.
    pub role_id: u64,
    /// Role display name.
    pub name: String,
    /// Role color as a 24-bit RGB value.
    pub colour: u32,
    /// Raw permission bitfield.
    pub permissions: u64,
    /// Whether members with this role are displayed separately.
    pub hoist: bool,
    /// Whether anyone can mention this role.
    pub mentionable: bool,
    /// Role position in the guild's role hierarchy (higher = more important).
    pub position: u16,
    /// Whether the role is owned by an integration (bot, booster role, ...).
    pub managed: bool,
}

impl DiscordGuildRole {
    /// Converts a Serenity role into the domain model.
    pub fn from_serenity(role: &Role) -> Self {
        Self {
            role_id: role.id.get(),
            name: role.name.clone(),
            colour: role.colour.0,
            permissions: role.permissions.bits(),
            hoist: role.hoist,
            mentionable: role.mentionable,
            position: role.position,
            managed: role.managed,
        }
    }

    /// Whether this is the guild's implicit `@everyone` role.
    ///
    /// Discord gives the default role the same id as the guild.
    pub fn is_default(&self, guild_id: u64) -> bool {
        self.role_id == guild_id
    }
}

/// Attributes for a role to be created in the target guild.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateRoleParam {
    pub name: String,
    pub colour: u32,
    pub permissions: u64,
    pub hoist: bool,
    pub mentionable: bool,
}

impl CreateRoleParam {
    /// Copies the cloneable attributes of a source role.
    ///
    /// Position is deliberately left out; creation order approximates the hierarchy.
    pub fn from_source(role: &DiscordGuildRole) -> Self {
        Self {
            name: role.name.clone(),
            colour: role.colour,
            permissions: role.permissions,
            hoist: role.hoist,
            mentionable: role.mentionable,
        }
    }
}
