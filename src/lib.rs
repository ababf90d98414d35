//! # showcase-narrator
//!
//! 控制台演示：为 $pyTERM 展示代理模拟构建、部署与聊天消息发布。
//!
//! Scripted console run for the `$pyTERM` showcase agent.
//!
//! ## Overview
//!
//! A run prints a banner, narrates a simulated build/provision/deploy pipeline with
//! spinners, progress bars and typewriter output, then renders canned chat posts
//! describing the showcase sections as indented JSON. Nothing is installed,
//! compiled or transmitted: every step is console output.
//!
//! ## Key Features
//!
//! - **Fixed phase order**: [`narrator::Phase::ALL`] drives every run
//! - **Injectable pacing**: [`pacing::Pacer`] strategies make runs instant for tests
//! - **Injectable clock**: [`clock::Clock`] pins log timestamps
//! - **Chat sink seam**: [`chat::ChatSink`] receives every outbound message
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use showcase_narrator::NarratorBuilder;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> showcase_narrator::Result<()> {
//!     let mut narrator = NarratorBuilder::new().build(std::io::stdout())?;
//!     narrator.run().await
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Run context constants and validation |
//! | [`types`] | Section descriptors and outbound messages |
//! | [`console`] | Log lines, rules, spinners, progress bars, typewriter |
//! | [`pacing`] | Delay strategies |
//! | [`clock`] | Timestamp sources |
//! | [`chat`] | POST block rendering and chat sinks |
//! | [`narrator`] | Phase scripts and the run sequence |

pub mod chat;
pub mod clock;
pub mod config;
pub mod console;
pub mod narrator;
pub mod pacing;
pub mod types;

pub use chat::{ChatSink, InMemoryChatSink, PostReceipt};
pub use config::RunConfig;
pub use narrator::{Narrator, NarratorBuilder, Phase};
pub use types::{OutboundMessage, SectionDescriptor};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the library
pub mod error;
pub use error::{Error, ErrorContext};
