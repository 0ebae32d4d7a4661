pub mod channel;
pub mod emoji;
pub mod guild;
pub mod overwrite;
pub mod role;

pub use channel::{ChannelKind, ChannelSettings, CreateChannelParam, DiscordGuildChannel};
pub use emoji::{CreateEmojiParam, DiscordGuildEmoji};
pub use guild::{BotAccess, DiscordGuild};
pub use overwrite::{ChannelOverwrite, OverwriteSubject};
pub use role::{CreateRoleParam, DiscordGuildRole};
