//! Simulated build, provision and deploy scripts.
//!
//! Nothing here runs a command; the `$ ...` lines are narration only.

use super::Narrator;
use crate::console::LogLevel;
use crate::Result;
use std::io::Write;
use std::time::Duration;

const DEFAULT_SPIN: Duration = Duration::from_millis(1500);

fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}

impl<W: Write + Send> Narrator<W> {
    pub async fn build_sequence(&mut self) -> Result<()> {
        let c = &mut self.console;
        c.log(LogLevel::Info, "Initializing build pipeline")?;
        c.spinner("Installing dependencies", DEFAULT_SPIN).await?;
        c.typewriter_block(
            "$ npm ci\nadded 0 packages, audited 0 packages in 0.8s",
            80,
        )
        .await?;
        c.spinner("Preparing TypeScript", DEFAULT_SPIN).await?;
        c.typewriter("$ tsc -p tsconfig.json", 60, true).await?;
        c.progress_bar("Compiling TypeScript", 24, ms(40)).await?;
        c.log(LogLevel::Ok, "TypeScript compile succeeded")?;
        c.spinner("Bundling modules", ms(1200)).await?;
        c.progress_bar("Optimizing", 18, ms(50)).await?;
        c.log(LogLevel::Ok, "Bundle ready")
    }

    pub async fn provision_sequence(&mut self) -> Result<()> {
        let c = &mut self.console;
        c.log(LogLevel::Info, "Provisioning keys and endpoints")?;
        c.spinner("Requesting signer", DEFAULT_SPIN).await?;
        c.typewriter("$ vault read secret/agents/pyterm-signer", 55, true)
            .await?;
        c.pause(ms(200)).await;
        c.spinner("Sealing credentials", ms(1000)).await?;
        c.log(LogLevel::Ok, "Credentials loaded")?;
        c.hr()
    }

    pub async fn deploy_sequence(&mut self) -> Result<()> {
        let c = &mut self.console;
        c.log(LogLevel::Info, "Deploying runtime")?;
        c.typewriter("$ node dist/agent.js --init", 50, true).await?;
        c.progress_bar("Starting services", 16, ms(60)).await?;
        c.spinner("Warming caches", ms(1000)).await?;
        c.log(LogLevel::Ok, "Services online")?;
        c.hr()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::narrator::NarratorBuilder;
    use crate::pacing::RecordingPacer;
    use std::sync::Arc;

    #[tokio::test]
    async fn build_script_prints_steps_in_order() {
        let mut n = NarratorBuilder::new()
            .pacer(crate::pacing::instant())
            .build(Vec::new())
            .unwrap();
        n.build_sequence().await.unwrap();
        let out = String::from_utf8(n.into_output()).unwrap();

        let markers = [
            "| Initializing build pipeline",
            "Installing dependencies ... done",
            "$ npm ci\nadded 0 packages, audited 0 packages in 0.8s\n",
            "Preparing TypeScript ... done",
            "$ tsc -p tsconfig.json\n",
            "Compiling TypeScript\n",
            "[########################] 100%\n",
            "| TypeScript compile succeeded",
            "Bundling modules ... done",
            "Optimizing\n",
            "[##################] 100%\n",
            "| Bundle ready",
        ];
        let mut from = 0;
        for marker in markers {
            let at = out[from..]
                .find(marker)
                .unwrap_or_else(|| panic!("missing or out of order: {marker:?}"));
            from += at + marker.len();
        }
    }

    #[tokio::test]
    async fn provision_script_includes_fixed_pause() {
        let pacer = Arc::new(RecordingPacer::new());
        let mut n = NarratorBuilder::new()
            .pacer(pacer.clone())
            .build(Vec::new())
            .unwrap();
        n.provision_sequence().await.unwrap();
        let out = String::from_utf8(n.into_output()).unwrap();
        assert!(out.contains("$ vault read secret/agents/pyterm-signer\n"));
        assert!(out.contains("\rSealing credentials ... done\n"));
        assert!(out.ends_with(&format!("| Credentials loaded\n{}\n", "-".repeat(60))));
        assert!(pacer.delays().contains(&Duration::from_millis(200)));
    }

    #[tokio::test]
    async fn deploy_script_runs_sixteen_step_bar() {
        let mut n = NarratorBuilder::new()
            .pacer(crate::pacing::instant())
            .build(Vec::new())
            .unwrap();
        n.deploy_sequence().await.unwrap();
        let out = String::from_utf8(n.into_output()).unwrap();
        assert_eq!(out.matches("\r[").count(), 17);
        assert!(out.contains("Warming caches ... done"));
        assert!(out.contains("| Services online"));
    }
}
