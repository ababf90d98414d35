//! Every POST block is valid JSON carrying the run identifiers.

mod common;

use common::{narrator, output, post_blocks};
use serde_json::Value;
use showcase_narrator::config::{DEFAULT_CHAT_ID, DEFAULT_CONTRACT};
use showcase_narrator::types::SHOWCASE_SECTIONS;

const ROOM_URL: &str = "https://www.daos.fun/a631af1c-0c49-4734-8647-69203a85b3afdaos";

#[tokio::test]
async fn every_block_is_valid_json_with_fixed_identifiers() {
    let (mut n, _) = narrator();
    n.run().await.unwrap();
    let blocks = post_blocks(&output(n));
    assert!(!blocks.is_empty());

    for block in &blocks {
        let value: Value = serde_json::from_str(&block.body)
            .unwrap_or_else(|e| panic!("invalid JSON under {:?}: {e}", block.header));
        let obj = value.as_object().unwrap();
        let mut keys: Vec<_> = obj.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, ["chatId", "contract", "message", "roomUrl"]);
        assert_eq!(obj["chatId"], DEFAULT_CHAT_ID);
        assert_eq!(obj["roomUrl"], ROOM_URL);
        assert_eq!(obj["contract"], DEFAULT_CONTRACT);
    }
}

#[tokio::test]
async fn json_keys_appear_in_fixed_order() {
    let (mut n, _) = narrator();
    n.post_overview_message().await.unwrap();
    let blocks = post_blocks(&output(n));
    let body = &blocks[0].body;

    let positions: Vec<_> = ["\"chatId\"", "\"roomUrl\"", "\"contract\"", "\"message\""]
        .iter()
        .map(|k| body.find(k).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[tokio::test]
async fn overview_message_lists_every_section() {
    let (mut n, sink) = narrator();
    n.post_overview_message().await.unwrap();

    let message = &sink.posts()[0].message;
    assert!(message.starts_with(
        "DAOS Showcase online\n- Layouts: Layout demos translated into chat-friendly descriptions. (src: showcase/layout_basic.py)"
    ));
    for section in &SHOWCASE_SECTIONS {
        assert!(message.contains(&section.overview_line()));
    }
}

#[tokio::test]
async fn deep_dives_emit_one_block_per_section_in_order() {
    let (mut n, _) = narrator();
    n.deep_dive_sections().await.unwrap();
    let blocks = post_blocks(&output(n));
    assert_eq!(blocks.len(), SHOWCASE_SECTIONS.len());

    for (block, section) in blocks.iter().zip(SHOWCASE_SECTIONS.iter()) {
        assert_eq!(block.header, format!("POST /chat message -> ({})", section.key));
        let value: Value = serde_json::from_str(&block.body).unwrap();
        let message = value["message"].as_str().unwrap();
        assert!(message.starts_with(&format!("```md\n=== {} ===\n", section.key)));
        assert!(message.contains(&format!("Source : {}", section.source)));
        assert!(message.contains(&format!("Summary: {}", section.summary)));
        assert!(message.ends_with("\n```"));
    }
}

#[tokio::test]
async fn snippet_and_signal_bodies() {
    let (mut n, sink) = narrator();
    n.share_snippet().await.unwrap();
    n.emit_signal("custom note").await.unwrap();

    let posts = sink.posts();
    assert!(posts[0].message.starts_with("```python\n# converted from the TermTk demo"));
    assert!(posts[0].message.ends_with("\n\n```"));
    assert_eq!(
        posts[1].message,
        format!("Signal for CA {DEFAULT_CONTRACT}:\ncustom note")
    );
}
