use serenity::all::Emoji;

/// Custom emoji belonging to a guild.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscordGuildEmoji {
    /// Discord emoji ID as a u64.
    pub emoji_id: u64,
    pub name: String,
    /// CDN URL of the emoji image.
    pub url: String,
    /// Whether the emoji is owned by an integration (e.g. Twitch subscriber emojis).
    pub managed: bool,
}

impl DiscordGuildEmoji {
    pub fn from_serenity(emoji: &Emoji) -> Self {
        Self {
            emoji_id: emoji.id.get(),
            name: emoji.name.clone(),
            url: emoji.url(),
            managed: emoji.managed,
        }
    }
}

/// Attributes for an emoji to be created in the target guild.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateEmojiParam {
    pub name: String,
    /// Image encoded as a `data:<mime>;base64,...` URI.
    pub image: String,
}
