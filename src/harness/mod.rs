//! Structural check harness for the résumé page
//!
//! Provides the built-in check scenarios, a runner that evaluates them
//! against the page artifacts, and pass/fail reporting.

mod results;
mod runner;
mod scenario;

pub use results::{CheckReport, ScenarioResult, ScenarioStatus};
pub use runner::{CheckRunner, RunnerConfig};
pub use scenario::{Check, Scenario, ScenarioSet};

/// Check categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CheckCategory {
    /// Markup structure checks against `index.html`
    Markup,
    /// Stylesheet rule checks against `style.css`
    Style,
}

impl CheckCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Markup => "markup",
            Self::Style => "style",
        }
    }

    pub fn all() -> &'static [CheckCategory] {
        &[Self::Markup, Self::Style]
    }
}
