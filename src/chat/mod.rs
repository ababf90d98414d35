//! 聊天投递模块：外发消息的渲染与可插拔投递目标。
//!
//! # Chat Module
//!
//! Outbound messages are never transmitted. Each one is rendered as a
//! `POST /chat message ->` block on the console and then handed to a
//! [`ChatSink`], the single place a real relay would plug in.
//!
//! ## Key Components
//!
//! | Component | Description |
//! |-----------|-------------|
//! | [`ChatSink`] | Trait for post destinations |
//! | [`PostReceipt`] | Acknowledgement returned by a sink |
//! | [`NoopChatSink`] | Default sink, accepts everything without I/O |
//! | [`InMemoryChatSink`] | Records posts for inspection in tests |
//! | [`render_post_block`] | Console rendering of a post |

use crate::types::OutboundMessage;
use crate::Result;
use async_trait::async_trait;
use std::sync::{Arc, RwLock};

/// Header line of every rendered post.
pub const POST_HEADER: &str = "POST /chat message ->";

/// Indentation applied to every JSON line under the header.
const JSON_INDENT: &str = "  ";

/// Render a post: header (optionally tagged with `label`), then the pretty JSON
/// body indented by two spaces. No trailing newline.
pub fn render_post_block(label: Option<&str>, msg: &OutboundMessage) -> Result<String> {
    let mut out = match label {
        Some(label) => format!("{POST_HEADER} ({label})"),
        None => POST_HEADER.to_string(),
    };
    for line in msg.to_pretty_json()?.lines() {
        out.push('\n');
        if !line.trim().is_empty() {
            out.push_str(JSON_INDENT);
        }
        out.push_str(line);
    }
    Ok(out)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PostReceipt {
    pub ok: bool,
}

impl PostReceipt {
    pub fn accepted() -> Self {
        Self { ok: true }
    }

    pub fn rejected() -> Self {
        Self { ok: false }
    }
}

#[async_trait]
pub trait ChatSink: Send + Sync {
    async fn post(&self, message: &OutboundMessage) -> Result<PostReceipt>;
}

/// No-op sink (always available).
pub struct NoopChatSink;

#[async_trait]
impl ChatSink for NoopChatSink {
    async fn post(&self, _: &OutboundMessage) -> Result<PostReceipt> {
        Ok(PostReceipt::accepted())
    }
}

/// Returns a no-op chat sink.
pub fn noop_sink() -> Arc<dyn ChatSink> {
    Arc::new(NoopChatSink)
}

/// In-memory sink for testing.
#[derive(Clone)]
pub struct InMemoryChatSink {
    posts: Arc<RwLock<Vec<OutboundMessage>>>,
    max_posts: usize,
}

impl InMemoryChatSink {
    pub fn new(max: usize) -> Self {
        Self {
            posts: Arc::new(RwLock::new(Vec::new())),
            max_posts: max,
        }
    }

    pub fn posts(&self) -> Vec<OutboundMessage> {
        self.posts.read().map(|p| p.clone()).unwrap_or_default()
    }

    pub fn clear(&self) {
        if let Ok(mut posts) = self.posts.write() {
            posts.clear();
        }
    }

    pub fn len(&self) -> usize {
        self.posts.read().map(|p| p.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for InMemoryChatSink {
    fn default() -> Self {
        Self::new(64)
    }
}

#[async_trait]
impl ChatSink for InMemoryChatSink {
    async fn post(&self, message: &OutboundMessage) -> Result<PostReceipt> {
        if let Ok(mut posts) = self.posts.write() {
            posts.push(message.clone());
            if posts.len() > self.max_posts {
                posts.remove(0);
            }
        }
        Ok(PostReceipt::accepted())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> OutboundMessage {
        OutboundMessage::new("chat", "https://www.daos.fun/chatdaos", "CA", "hello")
    }

    #[test]
    fn block_without_label() {
        let block = render_post_block(None, &sample()).unwrap();
        assert_eq!(
            block,
            "POST /chat message ->\n  {\n    \"chatId\": \"chat\",\n    \"roomUrl\": \"https://www.daos.fun/chatdaos\",\n    \"contract\": \"CA\",\n    \"message\": \"hello\"\n  }"
        );
    }

    #[test]
    fn block_with_label_tags_header() {
        let block = render_post_block(Some("Graphs"), &sample()).unwrap();
        assert_eq!(block.lines().next(), Some("POST /chat message -> (Graphs)"));
    }

    #[test]
    fn block_body_parses_back() {
        let block = render_post_block(None, &sample()).unwrap();
        let body: String = block.lines().skip(1).collect::<Vec<_>>().join("\n");
        let parsed: OutboundMessage = serde_json::from_str(&body).unwrap();
        assert_eq!(parsed, sample());
    }

    #[tokio::test]
    async fn in_memory_sink_drops_oldest_past_capacity() {
        let sink = InMemoryChatSink::new(2);
        for text in ["a", "b", "c"] {
            let msg = OutboundMessage::new("c", "r", "k", text);
            assert!(sink.post(&msg).await.unwrap().ok);
        }
        let kept: Vec<_> = sink.posts().into_iter().map(|m| m.message).collect();
        assert_eq!(kept, ["b", "c"]);
        sink.clear();
        assert!(sink.is_empty());
    }

    #[tokio::test]
    async fn noop_sink_accepts() {
        let receipt = noop_sink().post(&sample()).await.unwrap();
        assert_eq!(receipt, PostReceipt::accepted());
    }
}
