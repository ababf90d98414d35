//! 类型模块：展示分区描述与外发聊天消息。
//!
//! # Types Module
//!
//! Plain data records shared by every phase of a run.
//!
//! ## Key Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`SectionDescriptor`] | One showcase topic (key, source label, summary) |
//! | [`OutboundMessage`] | Simulated chat post, serialized to indented JSON |
//!
//! ## Example
//!
//! ```rust
//! use showcase_narrator::types::{OutboundMessage, SHOWCASE_SECTIONS};
//!
//! let first = &SHOWCASE_SECTIONS[0];
//! assert_eq!(first.key, "Layouts");
//!
//! let msg = OutboundMessage::new("chat", "https://www.daos.fun/chatdaos", "CA", "hello");
//! assert_eq!(msg.message, "hello");
//! ```

pub mod message;
pub mod section;

pub use message::OutboundMessage;
pub use section::{SectionDescriptor, SHOWCASE_SECTIONS};
