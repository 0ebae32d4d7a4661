//! Permission overwrite domain model.
//!
//! An overwrite grants or denies permissions on one channel to either a role or a
//! single member. Role subjects are only meaningful inside one guild's id space and
//! must be translated before being attached to a channel in another guild.

use serenity::all::{Permissions, PermissionOverwrite, PermissionOverwriteType, RoleId, UserId};

/// Who a permission overwrite applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OverwriteSubject {
    Role(u64),
    Member(u64),
}

/// A per-channel permission grant/denial.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelOverwrite {
    pub subject: OverwriteSubject,
    /// Allowed permission bitfield.
    pub allow: u64,
    /// Denied permission bitfield.
    pub deny: u64,
}

impl ChannelOverwrite {
    /// Converts a Serenity overwrite.
    ///
    /// # Returns
    /// - `Some(ChannelOverwrite)` - Role or member overwrite
    /// - `None` - Overwrite kind unknown to this model
    pub fn from_serenity(overwrite: &PermissionOverwrite) -> Option<Self> {
        let subject = match overwrite.kind {
            PermissionOverwriteType::Role(id) => OverwriteSubject::Role(id.get()),
            PermissionOverwriteType::Member(id) => OverwriteSubject::Member(id.get()),
            _ => return None,
        };

        Some(Self {
            subject,
            allow: overwrite.allow.bits(),
            deny: overwrite.deny.bits(),
        })
    }

    /// Converts the overwrite into the Serenity type accepted by channel builders.
    ///
    /// Permission bits Discord does not know about are dropped.
    pub fn to_serenity(&self) -> PermissionOverwrite {
        let kind = match self.subject {
            OverwriteSubject::Role(id) => PermissionOverwriteType::Role(RoleId::new(id)),
            OverwriteSubject::Member(id) => PermissionOverwriteType::Member(UserId::new(id)),
        };

        PermissionOverwrite {
            allow: Permissions::from_bits_truncate(self.allow),
            deny: Permissions::from_bits_truncate(self.deny),
            kind,
        }
    }

    /// Returns the same grant re-targeted at another subject.
    pub fn with_subject(self, subject: OverwriteSubject) -> Self {
        Self { subject, ..self }
    }
}
