//! Check results - stores and summarizes scenario outcomes

use super::CheckCategory;
use std::time::Duration;

/// Status of a single scenario
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScenarioStatus {
    /// Scenario passed
    Pass,
    /// Scenario failed
    Fail,
}

impl ScenarioStatus {
    pub fn is_pass(&self) -> bool {
        matches!(self, Self::Pass)
    }
}

/// Result of a single scenario evaluation
#[derive(Debug, Clone)]
pub struct ScenarioResult {
    pub scenario_id: String,
    pub scenario_name: String,
    pub category: CheckCategory,
    pub status: ScenarioStatus,
    /// On failure, a human-readable reason showing expected vs observed
    pub message: Option<String>,
}

/// Complete report of one check run
#[derive(Debug)]
pub struct CheckReport {
    results: Vec<ScenarioResult>,
    duration: Duration,
}

impl CheckReport {
    pub fn new(results: Vec<ScenarioResult>, duration: Duration) -> Self {
        Self { results, duration }
    }

    pub fn total(&self) -> usize {
        self.results.len()
    }

    pub fn passed(&self) -> usize {
        self.results
            .iter()
            .filter(|r| r.status == ScenarioStatus::Pass)
            .count()
    }

    pub fn failed(&self) -> usize {
        self.results
            .iter()
            .filter(|r| r.status == ScenarioStatus::Fail)
            .count()
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn results(&self) -> &[ScenarioResult] {
        &self.results
    }

    /// True if every scenario passed
    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }

    pub fn summary(&self) -> String {
        format!(
            "Checks: {}/{} passed in {:?}",
            self.passed(),
            self.total(),
            self.duration
        )
    }
}
