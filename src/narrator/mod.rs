//! 运行叙述者：按固定顺序执行各个阶段并输出到控制台。
//!
//! # Narrator Module
//!
//! A [`Narrator`] executes the scripted run: banner, overview, the simulated
//! build/provision/deploy pipeline, the chat posts, the healthcheck and a final
//! completion line. Phases run one after another in [`Phase::ALL`] order.
//!
//! ```rust
//! use showcase_narrator::narrator::NarratorBuilder;
//! use showcase_narrator::pacing;
//!
//! # tokio_test::block_on(async {
//! let mut narrator = NarratorBuilder::new()
//!     .pacer(pacing::instant())
//!     .build(Vec::new())
//!     .unwrap();
//! narrator.run().await.unwrap();
//! let out = String::from_utf8(narrator.into_output()).unwrap();
//! assert!(out.contains("Run complete"));
//! # });
//! ```

mod health;
mod messages;
mod pipeline;

pub use health::HealthCheck;
pub use messages::{
    deep_dive_text, overview_text, signal_text, snippet_text, DEEP_DIVE_NOTES, OVERVIEW_HEADER,
    SIGNAL_NOTE,
};

use crate::chat::{render_post_block, ChatSink, PostReceipt};
use crate::clock::{Clock, SystemClock};
use crate::config::RunConfig;
use crate::console::{Console, LogLevel};
use crate::error::{Error, ErrorContext};
use crate::pacing::Pacer;
use crate::types::OutboundMessage;
use crate::Result;
use std::fmt;
use std::io::Write;
use std::sync::Arc;
use tracing::{debug, info_span, Instrument};

/// One named step of the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Overview,
    Build,
    Provision,
    Deploy,
    PostOverview,
    ShareSnippet,
    DeepDive,
    Signal,
    Healthcheck,
    Done,
}

impl Phase {
    /// Execution order of a full run.
    pub const ALL: [Phase; 10] = [
        Phase::Overview,
        Phase::Build,
        Phase::Provision,
        Phase::Deploy,
        Phase::PostOverview,
        Phase::ShareSnippet,
        Phase::DeepDive,
        Phase::Signal,
        Phase::Healthcheck,
        Phase::Done,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Phase::Overview => "overview",
            Phase::Build => "build",
            Phase::Provision => "provision",
            Phase::Deploy => "deploy",
            Phase::PostOverview => "post-overview",
            Phase::ShareSnippet => "share-snippet",
            Phase::DeepDive => "deep-dive",
            Phase::Signal => "signal",
            Phase::Healthcheck => "healthcheck",
            Phase::Done => "done",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Builder for a [`Narrator`]. Defaults: showcase config, real-time pacing,
/// system clock, no-op chat sink.
pub struct NarratorBuilder {
    config: RunConfig,
    pacer: Arc<dyn Pacer>,
    clock: Arc<dyn Clock>,
    sink: Arc<dyn ChatSink>,
}

impl NarratorBuilder {
    pub fn new() -> Self {
        Self {
            config: RunConfig::showcase(),
            pacer: crate::pacing::realtime(),
            clock: Arc::new(SystemClock),
            sink: crate::chat::noop_sink(),
        }
    }

    pub fn config(mut self, config: RunConfig) -> Self {
        self.config = config;
        self
    }

    /// Inject a pacing strategy. Use [`crate::pacing::instant`] in tests.
    pub fn pacer(mut self, pacer: Arc<dyn Pacer>) -> Self {
        self.pacer = pacer;
        self
    }

    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Inject a chat sink. Default is a no-op sink.
    pub fn chat_sink(mut self, sink: Arc<dyn ChatSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Validate the config and bind the narrator to `out`.
    pub fn build<W: Write + Send>(self, out: W) -> Result<Narrator<W>> {
        self.config.validate()?;
        Ok(Narrator {
            config: self.config,
            console: Console::new(out, self.pacer, self.clock),
            sink: self.sink,
        })
    }
}

impl Default for NarratorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub struct Narrator<W> {
    config: RunConfig,
    console: Console<W>,
    sink: Arc<dyn ChatSink>,
}

impl<W: Write + Send> Narrator<W> {
    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    pub fn into_output(self) -> W {
        self.console.into_inner()
    }

    /// Banner, every phase in [`Phase::ALL`] order, completion line last.
    pub async fn run(&mut self) -> Result<()> {
        self.console.banner(&self.config.agent_name)?;
        for phase in Phase::ALL {
            self.run_phase(phase).await?;
        }
        Ok(())
    }

    pub async fn run_phase(&mut self, phase: Phase) -> Result<()> {
        let span = info_span!("phase", name = phase.label());
        async {
            debug!("phase start");
            match phase {
                Phase::Overview => self.emit_overview(),
                Phase::Build => self.build_sequence().await,
                Phase::Provision => self.provision_sequence().await,
                Phase::Deploy => self.deploy_sequence().await,
                Phase::PostOverview => self.post_overview_message().await,
                Phase::ShareSnippet => self.share_snippet().await,
                Phase::DeepDive => self.deep_dive_sections().await,
                Phase::Signal => self.emit_signal(SIGNAL_NOTE).await,
                Phase::Healthcheck => self.healthcheck().map(|_| ()),
                Phase::Done => self.console.log(LogLevel::Done, "Run complete"),
            }
        }
        .instrument(span)
        .await
    }

    /// Log line, then the labeled block with room, chat id, contract and section keys.
    pub fn emit_overview(&mut self) -> Result<()> {
        self.console.log(LogLevel::Info, "Boot sequence start")?;
        self.console.hr()?;
        let keys = self
            .config
            .section_keys()
            .iter()
            .map(|k| format!("'{k}'"))
            .collect::<Vec<_>>()
            .join(", ");
        let block = [
            format!("Room         : {}", self.config.room_url),
            format!("Chat ID      : {}", self.config.chat_id),
            format!("Contract     : {} (Solana)", self.config.contract),
            format!("Sections     : [{keys}]"),
        ];
        for line in &block {
            self.console.line(line)?;
        }
        self.console.hr()
    }

    /// Print the POST block for `message` and hand it to the chat sink.
    async fn publish(&mut self, label: Option<&str>, message: OutboundMessage) -> Result<PostReceipt> {
        let block = render_post_block(label, &message)?;
        self.console.line(&block)?;
        debug!(label = label.unwrap_or(""), bytes = message.message.len(), "post rendered");

        let receipt = self.sink.post(&message).await?;
        if !receipt.ok {
            return Err(Error::delivery_with_context(
                "chat sink rejected the post",
                ErrorContext::new()
                    .with_field_path("message")
                    .with_details(label.unwrap_or(POST_UNLABELED).to_string())
                    .with_source("chat_sink"),
            ));
        }
        Ok(receipt)
    }
}

const POST_UNLABELED: &str = "unlabeled";
