//! procex library exports for testing

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

pub mod collect;
pub mod core;
pub mod error;
pub mod tui;

#[cfg(test)]
pub mod test_support;

pub use error::AppError;

/// Where the task list comes from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskSource {
    /// Deterministic fake processes.
    #[default]
    Mock,
    /// Live processes and threads from `/proc`.
    Proc,
}
