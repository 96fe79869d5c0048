use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HarnessError {
    #[error("Failed to load fixture '{name}': {reason}")]
    FixtureLoad { name: String, reason: String },

    /// Fixture writes and performance-log appends.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Clip execution failed in {implementation} (record {record}, iteration {iteration})")]
    ClipExecution {
        implementation: &'static str,
        record: usize,
        iteration: usize,
    },

    #[error("Performance regression in '{scenario}': ratio {ratio:.4} exceeds tolerance {tolerance:.2}")]
    RegressionExceeded {
        scenario: String,
        ratio: f64,
        tolerance: f64,
    },

    #[error("Baseline finished in zero time while the candidate took {candidate:?}; ratio is undefined")]
    ZeroBaseline { candidate: Duration },

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, HarnessError>;
