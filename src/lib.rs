//! # cvcheck - Structural checks for a static résumé page
//!
//! The repository ships a static CV page (`index.html` + `style.css`) together
//! with a small harness that verifies its presentational invariants: a contact
//! section with copy-friendly fields and a hero area whose social links stack
//! an icon above a label.
//!
//! ## Architecture
//!
//! The crate is organized into the following modules:
//!
//! - **scanner**: streaming markup scan extracting a structural summary of
//!   the page (contact region contents, per-link icon/label order)
//! - **stylesheet**: textual rule-block matching over the stylesheet source
//! - **harness**: built-in check scenarios, runner, and reporting
//! - **utils**: shared utilities and error types

pub mod harness;
pub mod scanner;
pub mod stylesheet;
pub mod utils;

// Re-export main types for convenience
pub use harness::{CheckReport, CheckRunner, RunnerConfig};
pub use scanner::{Marker, PageScanner, ScanConfig, ScanResult};
pub use stylesheet::{RuleCheck, RuleMatcher};
pub use utils::error::{CheckError, Result};

/// Crate version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = "cvcheck";
