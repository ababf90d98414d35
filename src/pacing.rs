//! 节奏控制：控制台动画的延时策略。
//!
//! Pacing strategies for console effects.
//!
//! Spinners, progress bars and the typewriter only ever ask a [`Pacer`] to wait.
//! Swapping the pacer changes how long a run takes, never what it prints.
//!
//! | Pacer | Behavior |
//! |-------|----------|
//! | [`RealtimePacer`] | Sleeps on the tokio timer |
//! | [`InstantPacer`] | Returns immediately |
//! | [`RecordingPacer`] | Returns immediately, remembers every requested delay |

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use std::time::Duration;

#[async_trait]
pub trait Pacer: Send + Sync {
    async fn pause(&self, delay: Duration);
}

/// Real sleeps; used by the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct RealtimePacer;

#[async_trait]
impl Pacer for RealtimePacer {
    async fn pause(&self, delay: Duration) {
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }
}

/// Zero-delay pacer for tests and piped output.
#[derive(Debug, Clone, Copy, Default)]
pub struct InstantPacer;

#[async_trait]
impl Pacer for InstantPacer {
    async fn pause(&self, _: Duration) {}
}

/// Zero-delay pacer that keeps a log of requested delays.
#[derive(Debug, Clone, Default)]
pub struct RecordingPacer {
    delays: Arc<Mutex<Vec<Duration>>>,
}

impl RecordingPacer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn delays(&self) -> Vec<Duration> {
        self.delays.lock().map(|d| d.clone()).unwrap_or_default()
    }

    pub fn total(&self) -> Duration {
        self.delays().iter().sum()
    }

    pub fn len(&self) -> usize {
        self.delays.lock().map(|d| d.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl Pacer for RecordingPacer {
    async fn pause(&self, delay: Duration) {
        if let Ok(mut delays) = self.delays.lock() {
            delays.push(delay);
        }
    }
}

/// Returns the zero-delay pacer.
pub fn instant() -> Arc<dyn Pacer> {
    Arc::new(InstantPacer)
}

/// Returns the wall-clock pacer.
pub fn realtime() -> Arc<dyn Pacer> {
    Arc::new(RealtimePacer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn recording_pacer_keeps_order_and_total() {
        let pacer = RecordingPacer::new();
        pacer.pause(Duration::from_millis(100)).await;
        pacer.pause(Duration::from_millis(50)).await;
        assert_eq!(
            pacer.delays(),
            vec![Duration::from_millis(100), Duration::from_millis(50)]
        );
        assert_eq!(pacer.total(), Duration::from_millis(150));
        assert_eq!(pacer.len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn realtime_pacer_advances_tokio_clock() {
        let start = tokio::time::Instant::now();
        RealtimePacer.pause(Duration::from_secs(2)).await;
        assert!(start.elapsed() >= Duration::from_secs(2));
    }

    #[test]
    fn instant_pacer_returns_without_runtime_timer() {
        tokio_test::block_on(InstantPacer.pause(Duration::from_secs(60)));
    }
}
