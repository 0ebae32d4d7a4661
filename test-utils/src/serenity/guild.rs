//! Test factory for creating Serenity Guild objects.
//!
//! Guilds are created empty; tests add roles, channels and emojis by inserting into
//! the guild's public collections, the same way the gateway cache populates them.

use serenity::all::Guild;

/// Creates a test Serenity Guild at boost tier 0 with no features.
///
/// The icon hash is padded to 32 characters (Discord's icon hash format) if shorter.
///
/// # Arguments
/// - `guild_id` - Discord guild ID (snowflake)
/// - `name` - Guild name
/// - `icon_hash` - Optional icon hash (will be padded to 32 characters if shorter)
///
/// # Panics
/// - If the JSON cannot be deserialized into a Guild (indicates invalid test data)
///
/// # Examples
///
/// ```rust,ignore
/// let guild = create_test_guild(123456789, "Test Guild", Some("abc123"));
/// assert_eq!(guild.icon.unwrap().to_string(), "abc12300000000000000000000000000");
/// ```
pub fn create_test_guild(guild_id: u64, name: &str, icon_hash: Option<&str>) -> Guild {
    create_test_guild_with_tier(guild_id, name, icon_hash, 0, &[])
}

/// Creates a test Serenity Guild with a boost tier and feature list.
///
/// # Arguments
/// - `premium_tier` - Boost tier number (0-3)
/// - `features` - Guild feature flags such as `"VIP_REGIONS"`
pub fn create_test_guild_with_tier(
    guild_id: u64,
    name: &str,
    icon_hash: Option<&str>,
    premium_tier: u8,
    features: &[&str],
) -> Guild {
    let formatted_icon = icon_hash.map(|hash| {
        if hash.len() < 32 {
            format!("{:0<32}", hash)
        } else {
            hash.to_string()
        }
    });

    serde_json::from_value(serde_json::json!({
        "id": guild_id.to_string(),
        "name": name,
        "icon": formatted_icon,
        "icon_hash": formatted_icon,
        "owner_id": "100000000000000000",
        "afk_timeout": 300,
        "verification_level": 0,
        "default_message_notifications": 0,
        "explicit_content_filter": 0,
        "roles": [],
        "emojis": [],
        "stickers": [],
        "features": features,
        "mfa_level": 0,
        "system_channel_flags": 0,
        "premium_tier": premium_tier,
        "premium_subscription_count": 0,
        "premium_progress_bar_enabled": false,
        "preferred_locale": "en-US",
        "nsfw_level": 0,
        "joined_at": "2020-01-01T00:00:00.000000+00:00",
        "large": false,
        "member_count": 100,
        "voice_states": [],
        "channels": [],
        "threads": [],
        "presences": [],
        "max_presences": 25000,
        "max_members": 100000,
        "unavailable": false,
        "members": [],
        "stage_instances": [],
        "guild_scheduled_events": [],
    }))
    .expect("Failed to create test guild - invalid JSON structure")
}
