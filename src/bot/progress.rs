//! Progress sink that mirrors clone progress into the invoking Discord channel.
//!
//! Lines are queued on an unbounded channel so the clone never waits on Discord. A
//! poster task drains the queue, batching whatever has accumulated into code-block
//! messages under Discord's message length limit.

use dioxus_logger::tracing;
use serenity::all::ChannelId;
use serenity::http::Http;
use std::sync::Arc;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;

use crate::service::cloner::{ProgressLog, TracingProgressLog};

/// Discord's maximum message length in characters.
const MAX_MESSAGE_LEN: usize = 2000;
/// Characters taken by the surrounding "```\n" and "\n```".
const CODE_BLOCK_OVERHEAD: usize = 8;

/// Progress sink feeding a poster task.
pub struct ChannelProgressLog {
    tx: UnboundedSender<String>,
}

impl ProgressLog for ChannelProgressLog {
    fn log(&self, message: &str) {
        TracingProgressLog.log(message);
        if self.tx.send(message.to_string()).is_err() {
            tracing::warn!("Progress poster has stopped; dropping line: {}", message);
        }
    }
}

/// Creates a progress sink posting to `channel_id`.
///
/// The poster task ends once the returned sink is dropped and the queue is drained;
/// await the handle to make sure every line was posted.
pub fn spawn_progress_poster(
    http: Arc<Http>,
    channel_id: ChannelId,
) -> (ChannelProgressLog, JoinHandle<()>) {
    let (tx, rx) = mpsc::unbounded_channel();
    let handle = tokio::spawn(post_progress(http, channel_id, rx));

    (ChannelProgressLog { tx }, handle)
}

async fn post_progress(http: Arc<Http>, channel_id: ChannelId, mut rx: UnboundedReceiver<String>) {
    while let Some(first) = rx.recv().await {
        let mut lines = vec![first];
        while let Ok(line) = rx.try_recv() {
            lines.push(line);
        }

        for chunk in code_blocks(&lines) {
            if let Err(e) = channel_id.say(&*http, chunk).await {
                tracing::error!("Failed to post clone progress to {}: {}", channel_id, e);
            }
        }
    }
}

/// Packs lines into as few code blocks as fit in a Discord message each.
///
/// A single line too long for one message is truncated.
fn code_blocks(lines: &[String]) -> Vec<String> {
    let budget = MAX_MESSAGE_LEN - CODE_BLOCK_OVERHEAD;
    let mut blocks = Vec::new();
    let mut current = String::new();

    for line in lines {
        let line: String = line.chars().take(budget).collect();
        let needed = line.chars().count() + usize::from(!current.is_empty());
        if current.chars().count() + needed > budget {
            blocks.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push('\n');
        }
        current.push_str(&line);
    }
    if !current.is_empty() {
        blocks.push(current);
    }

    blocks
        .into_iter()
        .map(|body| format!("```\n{}\n```", body))
        .collect()
}
