use serenity::async_trait;
use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::Instant;

use crate::{
    data::discord::memory::{fixture, DirectoryCall, InMemoryGuildDirectory},
    error::{AssetError, CloneError},
    model::{
        asset::EncodedImage,
        clone::{CloneOptions, CloneStats},
        discord::{
            ChannelOverwrite, ChannelSettings, DiscordGuild, DiscordGuildEmoji, OverwriteSubject,
        },
    },
    service::{
        asset::AssetFetcher,
        cloner::{PacingPolicy, ProgressLog, ServerCloner},
    },
};

mod category;

const SOURCE_ID: u64 = 1;
const TARGET_ID: u64 = 2;

/// Progress sink that keeps every line for assertions.
#[derive(Default)]
struct RecordingLog {
    lines: Mutex<Vec<String>>,
}

impl RecordingLog {
    fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }

    fn contains(&self, line: &str) -> bool {
        self.lines().iter().any(|l| l == line)
    }
}

impl ProgressLog for RecordingLog {
    fn log(&self, message: &str) {
        self.lines.lock().unwrap().push(message.to_string());
    }
}

/// Asset fetcher serving a fixed PNG, failing for selected URLs.
#[derive(Default)]
struct FakeAssetFetcher {
    failing: HashSet<String>,
}

impl FakeAssetFetcher {
    fn failing_on(url: &str) -> Self {
        Self {
            failing: HashSet::from([url.to_string()]),
        }
    }
}

#[async_trait]
impl AssetFetcher for FakeAssetFetcher {
    async fn fetch(&self, url: &str) -> Result<EncodedImage, AssetError> {
        if self.failing.contains(url) {
            return Err(AssetError::Status {
                url: url.to_string(),
                status: 404,
            });
        }
        Ok(EncodedImage::new("image/png", vec![0x89, 0x50, 0x4E, 0x47]))
    }
}

/// Options with every phase disabled, for tests that enable just the phase under test.
fn no_phases() -> CloneOptions {
    CloneOptions {
        delete_channels: false,
        delete_roles: false,
        delete_emojis: false,
        clone_channels: false,
        clone_roles: false,
        clone_emojis: false,
        update_info: false,
    }
}

fn cloner(directory: &Arc<InMemoryGuildDirectory>, assets: FakeAssetFetcher) -> ServerCloner {
    ServerCloner::new(directory.clone(), Arc::new(assets)).with_pacing(PacingPolicy::none())
}

fn role_overwrite(role_id: u64) -> ChannelOverwrite {
    ChannelOverwrite {
        subject: OverwriteSubject::Role(role_id),
        allow: 0x0400,
        deny: 0,
    }
}

/// Names of the created channels in call order, with the parent id they were given.
fn created_channels(calls: &[DirectoryCall]) -> Vec<(String, Option<u64>)> {
    calls
        .iter()
        .filter_map(|call| match call {
            DirectoryCall::CreateChannel { param, .. } => {
                Some((param.name.clone(), param.parent_id))
            }
            _ => None,
        })
        .collect()
}
