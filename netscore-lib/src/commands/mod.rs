//! Command-line interface and orchestration for netscore
//!
//! This module parses the command line, loads configuration, and drives a
//! scoring run end to end:
//!
//! 1. Parse arguments; usage errors are reported and no scoring is attempted
//! 2. Initialize logging and load the configuration file (or defaults)
//! 3. Load the manifest and lock file
//! 4. Compute the metrics report
//! 5. Emit the report to the host's output stream
//!
//! All process interaction goes through the [`Host`] trait so the whole flow
//! can be exercised in tests without touching the real stdout, stderr, or exit.

mod common;
mod config;
mod host;
mod run;
mod score;

#[cfg(debug_assertions)]
pub use config::Config;

pub use common::{ColorMode, LogLevel, ReportFormat};
pub use host::Host;
pub use run::run;
pub use score::{ScoreArgs, score_package};
