//! Shared helpers for console-output tests.

#![allow(dead_code)]

use showcase_narrator::clock::FixedClock;
use showcase_narrator::{pacing, InMemoryChatSink, Narrator, NarratorBuilder};
use std::sync::Arc;

pub const EPOCH_PREFIX: &str = "[1970-01-01 00:00:00 UTC] ";

/// Zero-delay narrator writing into memory, with a fixed clock and a recording sink.
pub fn narrator() -> (Narrator<Vec<u8>>, InMemoryChatSink) {
    let sink = InMemoryChatSink::default();
    let narrator = NarratorBuilder::new()
        .pacer(pacing::instant())
        .clock(Arc::new(FixedClock::from_unix(0)))
        .chat_sink(Arc::new(sink.clone()))
        .build(Vec::new())
        .expect("showcase config is valid");
    (narrator, sink)
}

pub fn output(narrator: Narrator<Vec<u8>>) -> String {
    String::from_utf8(narrator.into_output()).expect("console output is utf-8")
}

/// `(LEVEL, message)` for every timestamped log line, in print order.
pub fn log_entries(out: &str) -> Vec<(String, String)> {
    out.lines()
        .filter_map(|line| line.strip_prefix(EPOCH_PREFIX))
        .filter_map(|rest| rest.split_once(" | "))
        .map(|(level, msg)| (level.trim_end().to_string(), msg.to_string()))
        .collect()
}

/// A rendered POST block: header line plus the de-indented JSON body.
pub struct PostBlock {
    pub header: String,
    pub body: String,
}

pub fn post_blocks(out: &str) -> Vec<PostBlock> {
    let mut blocks = Vec::new();
    let mut lines = out.lines();
    while let Some(line) = lines.next() {
        if !line.starts_with("POST /chat message ->") {
            continue;
        }
        let mut body = Vec::new();
        for json_line in lines.by_ref() {
            let json_line = json_line
                .strip_prefix("  ")
                .expect("JSON lines are indented by two spaces");
            body.push(json_line);
            if json_line == "}" {
                break;
            }
        }
        blocks.push(PostBlock {
            header: line.to_string(),
            body: body.join("\n"),
        });
    }
    blocks
}
