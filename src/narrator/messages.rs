//! Chat post phases: overview, code snippet, per-section deep dives and signal.

use super::Narrator;
use crate::console::LogLevel;
use crate::types::{OutboundMessage, SectionDescriptor};
use crate::Result;
use std::io::Write;

pub const OVERVIEW_HEADER: &str = "DAOS Showcase online";

pub const DEEP_DIVE_NOTES: &str =
    "This module's behaviors have been adapted for chat-based walkthroughs.";

/// Note attached to the signal sent by a full run.
pub const SIGNAL_NOTE: &str = "Initialized showcase agent and published overview.";

const SNIPPET: &str = "# converted from the TermTk demo - label/list example\n\
def label_demo():\n\
\x20   print(\"Layouts / Widgets demo moved to DAOS.FUN agent format\")\n";

/// Header line followed by one bullet per section.
pub fn overview_text(sections: &[SectionDescriptor]) -> String {
    let mut text = String::from(OVERVIEW_HEADER);
    for section in sections {
        text.push('\n');
        text.push_str(&section.overview_line());
    }
    text
}

/// Fenced Python snippet. The snippet keeps its trailing newline, so the
/// closing fence follows a blank line.
pub fn snippet_text() -> String {
    OutboundMessage::fenced("python", SNIPPET)
}

pub fn deep_dive_text(section: &SectionDescriptor) -> String {
    let body = format!(
        "=== {key} ===\nSource : {source}\nSummary: {summary}\nNotes  : {DEEP_DIVE_NOTES}",
        key = section.key,
        source = section.source,
        summary = section.summary,
    );
    OutboundMessage::fenced("md", &body)
}

pub fn signal_text(contract: &str, note: &str) -> String {
    format!("Signal for CA {contract}:\n{note}")
}

impl<W: Write + Send> Narrator<W> {
    pub async fn post_overview_message(&mut self) -> Result<()> {
        self.console.log(LogLevel::Info, "Publishing overview to chat")?;
        let message = self.config.message(overview_text(&self.config.sections));
        self.publish(None, message).await?;
        self.console.log(LogLevel::Ok, "Overview published")?;
        self.console.hr()
    }

    pub async fn share_snippet(&mut self) -> Result<()> {
        self.console.log(LogLevel::Info, "Sharing code snippet")?;
        let message = self.config.message(snippet_text());
        self.publish(None, message).await?;
        self.console.log(LogLevel::Ok, "Snippet shared")?;
        self.console.hr()
    }

    /// One labeled post per section, in declared order.
    pub async fn deep_dive_sections(&mut self) -> Result<()> {
        self.console.log(LogLevel::Info, "Emitting section deep dives")?;
        let sections = self.config.sections.clone();
        for section in &sections {
            let message = self.config.message(deep_dive_text(section));
            self.publish(Some(section.key), message).await?;
        }
        self.console.log(LogLevel::Ok, "Deep dives sent")?;
        self.console.hr()
    }

    pub async fn emit_signal(&mut self, note: &str) -> Result<()> {
        self.console.log(LogLevel::Info, "Sending signal")?;
        let message = self.config.message(signal_text(&self.config.contract, note));
        self.publish(None, message).await?;
        self.console.log(LogLevel::Ok, "Signal sent")?;
        self.console.hr()
    }
}
