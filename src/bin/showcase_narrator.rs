//! Console run of the $pyTERM showcase agent.
//!
//! Takes no arguments. Narration goes to stdout; diagnostics (`RUST_LOG`) go to stderr.

use anyhow::Context;
use showcase_narrator::NarratorBuilder;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut narrator = NarratorBuilder::new()
        .build(std::io::stdout())
        .context("invalid run configuration")?;
    narrator.run().await.context("console run aborted")?;
    Ok(())
}
