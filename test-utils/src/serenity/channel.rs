//! Test factory for creating Serenity GuildChannel objects.

use serenity::all::GuildChannel;
use serde_json::Value;

/// Creates a test Serenity GuildChannel without permission overwrites.
///
/// # Arguments
/// - `channel_id` - Discord channel ID (snowflake)
/// - `guild_id` - Guild the channel belongs to
/// - `name` - Channel name
/// - `kind` - Discord channel type number (0 = text, 2 = voice, 4 = category)
/// - `position` - Sorting position
/// - `parent_id` - Parent category id, if nested
///
/// # Panics
/// - If the JSON cannot be deserialized into a GuildChannel (indicates invalid test data)
pub fn create_test_channel(
    channel_id: u64,
    guild_id: u64,
    name: &str,
    kind: u8,
    position: u16,
    parent_id: Option<u64>,
) -> GuildChannel {
    create_test_channel_with_overwrites(channel_id, guild_id, name, kind, position, parent_id, &[])
}

/// Creates a test Serenity GuildChannel carrying the given permission overwrites.
///
/// Build overwrite values with `role_overwrite`. Voice channels get a 64 kbps bitrate
/// and no user limit; text channels get no topic and slow-mode disabled.
pub fn create_test_channel_with_overwrites(
    channel_id: u64,
    guild_id: u64,
    name: &str,
    kind: u8,
    position: u16,
    parent_id: Option<u64>,
    overwrites: &[Value],
) -> GuildChannel {
    let (bitrate, user_limit) = if kind == 2 {
        (Some(64000), Some(0))
    } else {
        (None, None)
    };

    serde_json::from_value(serde_json::json!({
        "id": channel_id.to_string(),
        "guild_id": guild_id.to_string(),
        "type": kind,
        "name": name,
        "position": position,
        "parent_id": parent_id.map(|id| id.to_string()),
        "permission_overwrites": overwrites,
        "topic": null,
        "nsfw": false,
        "rate_limit_per_user": 0,
        "bitrate": bitrate,
        "user_limit": user_limit,
        "flags": 0,
    }))
    .expect("Failed to create test channel - invalid JSON structure")
}

/// JSON for a role permission overwrite, as Discord sends it.
pub fn role_overwrite(role_id: u64, allow: u64, deny: u64) -> Value {
    serde_json::json!({
        "id": role_id.to_string(),
        "type": 0,
        "allow": allow.to_string(),
        "deny": deny.to_string(),
    })
}
