//! Outbound chat message payload.

use serde::{Deserialize, Serialize};

/// A simulated chat post. Never transmitted; rendered as JSON and dropped.
///
/// Field order is the serialized key order: `chatId`, `roomUrl`, `contract`, `message`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutboundMessage {
    pub chat_id: String,
    pub room_url: String,
    pub contract: String,
    pub message: String,
}

impl OutboundMessage {
    pub fn new(
        chat_id: impl Into<String>,
        room_url: impl Into<String>,
        contract: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            chat_id: chat_id.into(),
            room_url: room_url.into(),
            contract: contract.into(),
            message: message.into(),
        }
    }

    /// Wrap `body` in a fenced code block tagged with `lang`.
    pub fn fenced(lang: &str, body: &str) -> String {
        format!("```{lang}\n{body}\n```")
    }

    /// Pretty JSON with two-space indentation.
    pub fn to_pretty_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
