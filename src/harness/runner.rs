//! Check runner - loads the page artifacts and evaluates every scenario

use super::results::{CheckReport, ScenarioResult, ScenarioStatus};
use super::scenario::{Check, Scenario, ScenarioSet};
use super::CheckCategory;
use crate::scanner::{Marker, PageScanner, ScanResult};
use crate::stylesheet::{RuleCheck, RuleMatcher};
use crate::utils::error::{CheckError, Result};
use std::fs;
use std::path::PathBuf;
use std::time::Instant;

/// Configuration for the check runner
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// Project root the artifact paths are resolved from
    pub root: PathBuf,
    /// Markup artifact, relative to the root
    pub markup_file: String,
    /// Stylesheet artifact, relative to the root
    pub stylesheet_file: String,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            markup_file: "index.html".into(),
            stylesheet_file: "style.css".into(),
        }
    }
}

impl RunnerConfig {
    /// Resolve artifacts from the crate source tree; used by tests
    pub fn for_manifest_dir(dir: &str) -> Self {
        Self {
            root: PathBuf::from(dir),
            ..Self::default()
        }
    }
}

/// Runs the built-in scenarios against the page and collects results
pub struct CheckRunner {
    config: RunnerConfig,
    scenarios: ScenarioSet,
    scanner: PageScanner,
}

impl CheckRunner {
    pub fn new(config: RunnerConfig) -> Self {
        let mut scenarios = ScenarioSet::new();
        scenarios.load_builtin();
        Self {
            config,
            scenarios,
            scanner: PageScanner::new(),
        }
    }

    /// Run every scenario once
    ///
    /// Both artifacts are read fresh at the start of the run; a missing
    /// artifact is fatal and no partial report is produced.
    pub fn run(&self) -> Result<CheckReport> {
        let start = Instant::now();

        let markup = self.read_artifact(&self.config.markup_file)?;
        let stylesheet = self.read_artifact(&self.config.stylesheet_file)?;

        let scan = self.scanner.scan(&markup);
        let matcher = RuleMatcher::new(stylesheet);

        // Evaluate category by category so the report groups markup checks
        // before style checks
        let mut results = Vec::new();
        for category in CheckCategory::all() {
            for scenario in self.scenarios.by_category(*category) {
                results.push(self.run_scenario(scenario, &scan, &matcher));
            }
        }

        let report = CheckReport::new(results, start.elapsed());
        log::info!("{}", report.summary());
        Ok(report)
    }

    fn read_artifact(&self, name: &str) -> Result<String> {
        let path = self.config.root.join(name);
        fs::read_to_string(&path).map_err(|source| CheckError::Artifact { path, source })
    }

    fn run_scenario(
        &self,
        scenario: &Scenario,
        scan: &ScanResult,
        matcher: &RuleMatcher,
    ) -> ScenarioResult {
        let outcome = match &scenario.check {
            Check::ContactGridPresent => {
                if scan.has_contact_grid {
                    Ok(())
                } else {
                    Err("expected a grid container inside the contacts region".to_string())
                }
            }
            Check::MinCopyableFields(min) => {
                let found = scan.copyable_fields.len();
                if found >= *min {
                    Ok(())
                } else {
                    Err(format!(
                        "expected at least {} copyable fields, found {} ({:?})",
                        min, found, scan.copyable_fields
                    ))
                }
            }
            Check::CopyablePairing => check_pairing(scan),
            Check::MinSocialLinks(min) => {
                let found = scan.link_markers.len();
                if found >= *min {
                    Ok(())
                } else {
                    Err(format!(
                        "expected at least {} social links, found {}",
                        min, found
                    ))
                }
            }
            Check::IconBeforeLabel => check_marker_order(scan),
            Check::DeclarationPresent {
                selector,
                property,
                value,
            } => match matcher.check(selector, property, value) {
                RuleCheck::Present => Ok(()),
                RuleCheck::SelectorNotFound => {
                    Err(format!("no rule block matches `{}`", selector))
                }
                RuleCheck::DeclarationNotFound => Err(format!(
                    "block `{}` lacks `{}: {}`",
                    selector, property, value
                )),
            },
        };

        let (status, message) = match outcome {
            Ok(()) => (ScenarioStatus::Pass, None),
            Err(reason) => {
                log::warn!("{}: {}", scenario.id, reason);
                (ScenarioStatus::Fail, Some(reason))
            }
        };

        ScenarioResult {
            scenario_id: scenario.id.clone(),
            scenario_name: scenario.name.clone(),
            category: scenario.category,
            status,
            message,
        }
    }
}

/// Every copy trigger targets exactly one copyable field and vice versa;
/// compared as sorted sequences so the failure message shows both sides
fn check_pairing(scan: &ScanResult) -> std::result::Result<(), String> {
    let mut fields = scan.copyable_fields.clone();
    let mut triggers = scan.copy_triggers.clone();
    fields.sort();
    triggers.sort();
    if fields == triggers {
        Ok(())
    } else {
        Err(format!(
            "copy triggers {:?} do not pair with copyable fields {:?}",
            triggers, fields
        ))
    }
}

fn check_marker_order(scan: &ScanResult) -> std::result::Result<(), String> {
    for markers in &scan.link_markers {
        let icon = markers.iter().position(|m| *m == Marker::Icon);
        let label = markers.iter().position(|m| *m == Marker::Label);
        match (icon, label) {
            (Some(i), Some(l)) if i < l => {}
            _ => {
                let tokens: Vec<&str> = markers.iter().map(|m| m.as_str()).collect();
                return Err(format!(
                    "expected icon before label in each link, found {:?}",
                    tokens
                ));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_runner_config_default() {
        let config = RunnerConfig::default();
        assert_eq!(config.markup_file, "index.html");
        assert_eq!(config.stylesheet_file, "style.css");
    }

    #[test]
    fn test_missing_artifact_is_fatal() {
        let config = RunnerConfig {
            root: PathBuf::from("/nonexistent/cvcheck"),
            ..RunnerConfig::default()
        };
        let runner = CheckRunner::new(config);
        assert!(matches!(runner.run(), Err(CheckError::Artifact { .. })));
    }

    #[test]
    fn test_run_against_page_artifacts() {
        let config = RunnerConfig::for_manifest_dir(env!("CARGO_MANIFEST_DIR"));
        let runner = CheckRunner::new(config);
        let report = runner.run().unwrap();
        assert_eq!(report.total(), 9);
        let failures: Vec<_> = report
            .results()
            .iter()
            .filter(|r| !r.status.is_pass())
            .map(|r| (r.scenario_id.clone(), r.message.clone()))
            .collect();
        assert!(failures.is_empty(), "failed scenarios: {:?}", failures);
    }

    #[test]
    fn test_pairing_mismatch_reports_both_sides() {
        let scan = ScanResult {
            copyable_fields: vec!["email".into(), "phone".into()],
            copy_triggers: vec!["email".into()],
            ..ScanResult::default()
        };
        let err = check_pairing(&scan).unwrap_err();
        assert!(err.contains("email"));
        assert!(err.contains("phone"));
    }

    #[test]
    fn test_report_groups_markup_before_style() {
        let config = RunnerConfig::for_manifest_dir(env!("CARGO_MANIFEST_DIR"));
        let runner = CheckRunner::new(config);
        let report = runner.run().unwrap();
        let categories: Vec<_> = report.results().iter().map(|r| r.category).collect();
        let boundary = categories
            .iter()
            .position(|c| *c == CheckCategory::Style)
            .unwrap();
        assert!(categories[..boundary]
            .iter()
            .all(|c| *c == CheckCategory::Markup));
        assert!(categories[boundary..]
            .iter()
            .all(|c| *c == CheckCategory::Style));
    }

    #[test]
    fn test_marker_order_rejects_label_first() {
        let scan = ScanResult {
            link_markers: vec![vec![Marker::Label, Marker::Icon]],
            ..ScanResult::default()
        };
        let err = check_marker_order(&scan).unwrap_err();
        assert!(err.contains("social-icon"));
        assert!(err.contains("social-label"));
    }

    #[test]
    fn test_marker_order_requires_both_markers() {
        let scan = ScanResult {
            link_markers: vec![vec![Marker::Icon]],
            ..ScanResult::default()
        };
        assert!(check_marker_order(&scan).is_err());
    }
}
