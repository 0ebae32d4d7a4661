//! Test factory for creating Serenity Role objects.

use serenity::all::Role;

/// Creates a test Serenity Role with customizable fields.
///
/// Creates a Role object by deserializing JSON with the provided values.
/// All other fields are set to reasonable defaults (not hoisted, not managed,
/// not mentionable, with zero permissions).
///
/// # Arguments
/// - `role_id` - Discord role ID (snowflake)
/// - `name` - Role name
/// - `color` - Role color as a 32-bit integer (RGB)
/// - `position` - Role position in the hierarchy (higher = more important)
///
/// # Panics
/// - If the JSON cannot be deserialized into a Role (indicates invalid test data)
///
/// # Examples
///
/// ```rust,ignore
/// let role = create_test_role(123456789, "Admin", 0xFF0000, 10);
/// assert_eq!(role.name, "Admin");
/// assert_eq!(role.colour.0, 0xFF0000);
/// ```
pub fn create_test_role(role_id: u64, name: &str, color: u32, position: u16) -> Role {
    build_role(role_id, name, color, position, false)
}

/// Creates a test Serenity Role owned by an integration.
///
/// Identical to `create_test_role` except `managed` is set, as Discord does for bot
/// and booster roles.
pub fn create_test_managed_role(role_id: u64, name: &str, position: u16) -> Role {
    build_role(role_id, name, 0, position, true)
}

fn build_role(role_id: u64, name: &str, color: u32, position: u16, managed: bool) -> Role {
    serde_json::from_value(serde_json::json!({
        "id": role_id.to_string(),
        "name": name,
        "color": color,
        "hoist": false,
        "icon": null,
        "unicode_emoji": null,
        "position": position,
        "permissions": "0",
        "managed": managed,
        "mentionable": false,
    }))
    .expect("Failed to create test role - invalid JSON structure")
}
