//! Run context: the fixed identifiers every phase reads.

use crate::error::{Error, ErrorContext};
use crate::types::{OutboundMessage, SectionDescriptor, SHOWCASE_SECTIONS};
use crate::Result;

pub const DEFAULT_CHAT_ID: &str = "a631af1c-0c49-4734-8647-69203a85b3af";
pub const DEFAULT_CONTRACT: &str = "5zSPQwwaDpUpGWNjc8gWPv7kKGMpXczJ4MiMokadaos";
pub const DEFAULT_AGENT_NAME: &str = "$pyTERM";

/// Prefix every room link starts with.
pub const ROOM_URL_PREFIX: &str = "https://www.daos.fun/";
/// Suffix appended after the chat id in a room link.
pub const ROOM_URL_SUFFIX: &str = "daos";

/// Build the room link for a chat id: `https://www.daos.fun/{chat_id}daos`.
pub fn room_url_for(chat_id: &str) -> String {
    format!("{ROOM_URL_PREFIX}{chat_id}{ROOM_URL_SUFFIX}")
}

/// Immutable run context, built once at process start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub chat_id: String,
    pub room_url: String,
    pub contract: String,
    pub agent_name: String,
    pub sections: Vec<SectionDescriptor>,
}

impl RunConfig {
    /// Run context with a room link derived from `chat_id`.
    pub fn new(
        chat_id: impl Into<String>,
        contract: impl Into<String>,
        agent_name: impl Into<String>,
        sections: Vec<SectionDescriptor>,
    ) -> Self {
        let chat_id = chat_id.into();
        Self {
            room_url: room_url_for(&chat_id),
            chat_id,
            contract: contract.into(),
            agent_name: agent_name.into(),
            sections,
        }
    }

    /// The `$pyTERM` showcase constants.
    pub fn showcase() -> Self {
        Self::new(
            DEFAULT_CHAT_ID,
            DEFAULT_CONTRACT,
            DEFAULT_AGENT_NAME,
            SHOWCASE_SECTIONS.to_vec(),
        )
    }

    /// Override the derived room link.
    pub fn with_room_url(mut self, url: impl Into<String>) -> Self {
        self.room_url = url.into();
        self
    }

    pub fn room_link(&self) -> &str {
        &self.room_url
    }

    pub fn contract(&self) -> &str {
        &self.contract
    }

    pub fn section_keys(&self) -> Vec<&'static str> {
        self.sections.iter().map(|s| s.key).collect()
    }

    /// Wrap `message` into an outbound record addressed to this run's room.
    pub fn message(&self, message: impl Into<String>) -> OutboundMessage {
        OutboundMessage::new(
            self.chat_id.clone(),
            self.room_url.clone(),
            self.contract.clone(),
            message,
        )
    }

    /// Reject contexts no phase could narrate sensibly.
    pub fn validate(&self) -> Result<()> {
        let required = [
            ("config.chat_id", &self.chat_id),
            ("config.contract", &self.contract),
            ("config.agent_name", &self.agent_name),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(Error::configuration_with_context(
                    "value must not be empty",
                    ErrorContext::new()
                        .with_field_path(field)
                        .with_source("run_config"),
                ));
            }
        }

        url::Url::parse(&self.room_url).map_err(|e| {
            Error::configuration_with_context(
                "room url is not a valid URL",
                ErrorContext::new()
                    .with_field_path("config.room_url")
                    .with_details(format!("{}: {}", self.room_url, e))
                    .with_source("run_config"),
            )
        })?;

        if self.sections.is_empty() {
            return Err(Error::configuration_with_context(
                "at least one section is required",
                ErrorContext::new()
                    .with_field_path("config.sections")
                    .with_source("run_config"),
            ));
        }
        Ok(())
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self::showcase()
    }
}
