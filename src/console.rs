//! Console renderer: timestamped log lines, rules, spinners, progress bars and
//! the typewriter effect.
//!
//! Every effect writes through a single [`Console`] so output stays strictly
//! sequential. Delays go through the injected [`Pacer`]; log timestamps come from
//! the injected [`Clock`].

use crate::clock::Clock;
use crate::pacing::Pacer;
use crate::Result;
use std::fmt;
use std::io::Write;
use std::sync::Arc;
use std::time::Duration;

/// Width of rules and the banner.
pub const RULE_WIDTH: usize = 60;

pub const SPINNER_FRAMES: [char; 4] = ['|', '/', '-', '\\'];
pub const SPINNER_TICK: Duration = Duration::from_millis(100);

pub const BAR_FILL: char = '#';
pub const BAR_EMPTY: char = '-';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Ok,
    Done,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Info => "INFO",
            LogLevel::Ok => "OK",
            LogLevel::Done => "DONE",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // pad() so width/alignment flags apply
        f.pad(self.as_str())
    }
}

/// `[{timestamp}] {LEVEL:<5} | {message}`
pub fn format_log_line(timestamp: &str, level: LogLevel, message: &str) -> String {
    format!("[{timestamp}] {level:<5} | {message}")
}

pub fn rule(ch: char) -> String {
    std::iter::repeat(ch).take(RULE_WIDTH).collect()
}

/// Three-line banner framed by `=` rules.
pub fn banner(agent_name: &str) -> String {
    let edge = rule('=');
    format!("{edge}\n   Agent {agent_name} - Console Run\n{edge}")
}

/// Completion percentage rounded half to even, so `12.5` prints as `12`.
/// A zero-step bar is always complete.
pub fn percent(done: usize, steps: usize) -> u32 {
    if steps == 0 {
        return 100;
    }
    (done as f64 * 100.0 / steps as f64).round_ties_even() as u32
}

/// One bar state without the leading carriage return, e.g. `[##--]  50%`.
pub fn progress_state(done: usize, steps: usize) -> String {
    let done = done.min(steps);
    let filled: String = std::iter::repeat(BAR_FILL).take(done).collect();
    let empty: String = std::iter::repeat(BAR_EMPTY).take(steps - done).collect();
    format!("[{filled}{empty}] {:>3}%", percent(done, steps))
}

/// Number of spinner frames drawn for `duration`.
pub fn spinner_ticks(duration: Duration) -> u128 {
    let tick = SPINNER_TICK.as_millis();
    (duration.as_millis() + tick - 1) / tick
}

pub struct Console<W> {
    out: W,
    pacer: Arc<dyn Pacer>,
    clock: Arc<dyn Clock>,
}

impl<W: Write + Send> Console<W> {
    pub fn new(out: W, pacer: Arc<dyn Pacer>, clock: Arc<dyn Clock>) -> Self {
        Self { out, pacer, clock }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_flush(&mut self, text: &str) -> Result<()> {
        self.out.write_all(text.as_bytes())?;
        self.out.flush()?;
        Ok(())
    }

    /// Plain delay with no output.
    pub async fn pause(&self, delay: Duration) {
        self.pacer.pause(delay).await;
    }

    /// Print `text` followed by a newline.
    pub fn line(&mut self, text: &str) -> Result<()> {
        writeln!(self.out, "{text}")?;
        self.out.flush()?;
        Ok(())
    }

    pub fn log(&mut self, level: LogLevel, message: &str) -> Result<()> {
        let line = format_log_line(&self.clock.timestamp(), level, message);
        self.line(&line)
    }

    pub fn hr(&mut self) -> Result<()> {
        self.line(&rule('-'))
    }

    pub fn banner(&mut self, agent_name: &str) -> Result<()> {
        self.line(&banner(agent_name))
    }

    /// Rotate through [`SPINNER_FRAMES`] on one line for roughly `duration`, then
    /// settle on `{label} ... done`.
    pub async fn spinner(&mut self, label: &str, duration: Duration) -> Result<()> {
        for tick in 0..spinner_ticks(duration) {
            let frame = SPINNER_FRAMES[(tick % SPINNER_FRAMES.len() as u128) as usize];
            self.write_flush(&format!("\r{label} {frame}"))?;
            self.pacer.pause(SPINNER_TICK).await;
        }
        self.write_flush(&format!("\r{label} ... done\n"))
    }

    /// Title line, then `steps + 1` bar states overwriting each other.
    pub async fn progress_bar(&mut self, title: &str, steps: usize, delay: Duration) -> Result<()> {
        self.line(title)?;
        if steps == 0 {
            self.write_flush(&format!("\r{}", progress_state(0, 0)))?;
        } else {
            for i in 0..=steps {
                self.write_flush(&format!("\r{}", progress_state(i, steps)))?;
                self.pacer.pause(delay).await;
            }
        }
        self.write_flush("\n")
    }

    /// Print `text` one character at a time. `chars_per_second == 0` prints without delay.
    pub async fn typewriter(
        &mut self,
        text: &str,
        chars_per_second: u32,
        newline: bool,
    ) -> Result<()> {
        let delay = if chars_per_second == 0 {
            Duration::ZERO
        } else {
            Duration::from_secs_f64(1.0 / f64::from(chars_per_second))
        };
        let mut buf = [0u8; 4];
        for ch in text.chars() {
            self.write_flush(ch.encode_utf8(&mut buf))?;
            self.pacer.pause(delay).await;
        }
        if newline {
            self.write_flush("\n")?;
        }
        Ok(())
    }

    pub async fn typewriter_block(&mut self, text: &str, chars_per_second: u32) -> Result<()> {
        for line in text.lines() {
            self.typewriter(line, chars_per_second, true).await?;
        }
        Ok(())
    }
}
