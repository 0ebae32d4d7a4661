//! Emoji replication.

use crate::{
    data::discord::GuildDirectory,
    error::ItemError,
    model::discord::{CreateEmojiParam, DiscordGuild, DiscordGuildEmoji},
    service::{
        asset::AssetFetcher,
        cloner::{
            context::{CloneContext, PhaseTally},
            pacing::OperationClass,
        },
    },
};

/// Re-uploads every source emoji to the target.
///
/// Emojis are not filtered; each image is downloaded and re-encoded as a data URI. A
/// failed download counts as a failed emoji. Successful uploads are paced on the
/// emoji interval.
pub struct EmojiReplicator<'a> {
    directory: &'a dyn GuildDirectory,
    assets: &'a dyn AssetFetcher,
}

impl<'a> EmojiReplicator<'a> {
    pub fn new(directory: &'a dyn GuildDirectory, assets: &'a dyn AssetFetcher) -> Self {
        Self { directory, assets }
    }

    pub async fn run(&self, source: &DiscordGuild, target_id: u64, ctx: &mut CloneContext<'_>) {
        ctx.log("😀 Cloning emojis...");
        let mut tally = PhaseTally::default();

        for emoji in source.sorted_emojis() {
            if ctx.is_cancelled() {
                break;
            }

            let outcome = self.clone_emoji(emoji, target_id).await;
            tally.record(&outcome);
            match outcome {
                Ok(_) => {
                    ctx.log(format!("Created emoji: {}", emoji.name));
                    ctx.pace(OperationClass::Emoji).await;
                }
                Err(e) => ctx.log(format!("Failed to clone emoji {}: {}", emoji.name, e)),
            }
        }

        ctx.stats.emojis_created += tally.succeeded;
        ctx.stats.failed += tally.failed;
    }

    async fn clone_emoji(
        &self,
        emoji: &DiscordGuildEmoji,
        target_id: u64,
    ) -> Result<DiscordGuildEmoji, ItemError> {
        let image = self.assets.fetch(&emoji.url).await?;
        let param = CreateEmojiParam {
            name: emoji.name.clone(),
            image: image.to_data_uri(),
        };

        Ok(self.directory.create_emoji(target_id, &param).await?)
    }
}
