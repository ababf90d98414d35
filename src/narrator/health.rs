//! Run-context healthcheck. Results are informational only.

use super::Narrator;
use crate::config::{RunConfig, ROOM_URL_PREFIX, ROOM_URL_SUFFIX};
use crate::console::LogLevel;
use crate::Result;
use std::io::Write;

const MIN_CONTRACT_LEN: usize = 32;
const MIN_SECTIONS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HealthCheck {
    pub name: &'static str,
    pub passed: bool,
}

impl HealthCheck {
    pub fn status(&self) -> &'static str {
        if self.passed {
            "PASS"
        } else {
            "FAIL"
        }
    }

    /// `[PASS] name` / `[FAIL] name`
    pub fn line(&self) -> String {
        format!("[{}] {}", self.status(), self.name)
    }

    /// The three checks, in report order.
    pub fn evaluate(config: &RunConfig) -> Vec<HealthCheck> {
        vec![
            HealthCheck {
                name: "room_url_format",
                passed: config.room_url.starts_with(ROOM_URL_PREFIX)
                    && config.room_url.ends_with(ROOM_URL_SUFFIX),
            },
            HealthCheck {
                name: "contract_len_ok",
                passed: config.contract.len() >= MIN_CONTRACT_LEN,
            },
            HealthCheck {
                name: "sections_count",
                passed: config.sections.len() >= MIN_SECTIONS,
            },
        ]
    }
}

impl<W: Write + Send> Narrator<W> {
    /// Print one PASS/FAIL line per check. A failing check never fails the run.
    pub fn healthcheck(&mut self) -> Result<Vec<HealthCheck>> {
        self.console.log(LogLevel::Info, "Healthcheck")?;
        let checks = HealthCheck::evaluate(&self.config);
        for check in &checks {
            if !check.passed {
                tracing::warn!(check = check.name, "healthcheck failed");
            }
            self.console.line(&check.line())?;
        }
        self.console.hr()?;
        Ok(checks)
    }
}
