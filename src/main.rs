//! cvcheck - Structural checks for a static résumé page
//!
//! Runs every built-in scenario against `index.html` and `style.css` and
//! exits non-zero if any of them fails.

use cvcheck::{CheckRunner, RunnerConfig, NAME, VERSION};

fn main() {
    env_logger::init();

    println!("{} v{}", NAME, VERSION);

    let runner = CheckRunner::new(RunnerConfig::default());
    let report = match runner.run() {
        Ok(report) => report,
        Err(e) => {
            eprintln!("❌ {}", e);
            std::process::exit(2);
        }
    };

    for result in report.results() {
        match &result.message {
            None => println!("✅ [{}] {}", result.scenario_id, result.scenario_name),
            Some(reason) => println!(
                "❌ [{}] {}: {}",
                result.scenario_id, result.scenario_name, reason
            ),
        }
    }
    println!("{}", report.summary());

    if !report.is_success() {
        std::process::exit(1);
    }
}
