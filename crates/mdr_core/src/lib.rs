//! # mdr_core
//!
//! Structural lint engine for mdr.
//!
//! This crate provides:
//! - The `Linter` orchestrator and the [`lint`] convenience entry point
//! - The five built-in structural rules
//! - Source line resolution for AST nodes
//! - Configuration loading
//! - Document statistics
//!
//! ## Example
//!
//! ```rust
//! let report = mdr_core::lint(b"# Title\n\nIntro.\n\n### Skipped\n\nBody\n");
//!
//! assert_eq!(report.len(), 1);
//! let issue = &report.issues()[0];
//! assert_eq!(issue.rule(), "heading-hierarchy");
//! assert_eq!(issue.line(), 5);
//! ```

mod config;
mod error;
mod issue;
pub mod line;
mod linter;
mod rules;
mod stats;

pub use config::{CONFIG_FILE_NAME, LinterConfig, RuleLevel, RuleSetting};
pub use error::LinterError;
pub use issue::{Issue, Report, Severity};
pub use linter::{Linter, lint};
pub use rules::Rule;
pub use stats::Stats;
