//! Bootstrap orchestration.
//!
//! - [`sequence`] - The fail-fast verify → install → launch run
//! - [`launcher`] - Application launch and exit status forwarding

pub mod launcher;
pub mod sequence;

pub use launcher::{launch, LaunchPlan};
pub use sequence::Bootstrap;

use std::fmt;

use crate::error::AppbootError;

/// Where a bootstrap run is.
///
/// Stages only move forward: `Start → Verifying → Installing → Launching →
/// Running`, or into `Failed` from any gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Start,
    Verifying,
    Installing,
    Launching,
    /// Control handed to the application.
    Running,
    Failed,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Start => "start",
            Stage::Verifying => "verifying",
            Stage::Installing => "installing",
            Stage::Launching => "launching",
            Stage::Running => "running",
            Stage::Failed => "failed",
        };
        f.write_str(name)
    }
}

/// How a bootstrap run ended.
#[derive(Debug)]
pub enum Outcome {
    /// The application ran and exited with `code`.
    Exited { code: i32 },
    /// Dry run: verification passed, nothing else ran.
    DryRun,
    /// A gate failed.
    Failed { stage: Stage, error: AppbootError },
}

impl Outcome {
    /// Exit status the bootstrap process should end with.
    pub fn exit_code(&self) -> i32 {
        match self {
            Outcome::Exited { code } => *code,
            Outcome::DryRun => 0,
            Outcome::Failed { error, .. } => error.exit_code(),
        }
    }
}
