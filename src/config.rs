use crate::error::{HarnessError, Result};
use crate::judge::DEFAULT_TOLERANCE;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// Settings for a harness run. Any field missing from a config file keeps its default.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HarnessConfig {
    /// Directory fixtures are loaded from.
    pub fixture_dir: PathBuf,
    /// Append-only performance history.
    pub log_path: PathBuf,
    /// Maximum allowed candidate/baseline time ratio.
    pub tolerance: f64,
    /// Passes over the full workload per implementation.
    pub iterations: usize,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            fixture_dir: PathBuf::from("data"),
            log_path: PathBuf::from("performance.log"),
            tolerance: DEFAULT_TOLERANCE,
            iterations: 1,
        }
    }
}

impl HarnessConfig {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .map_err(|e| HarnessError::Config(format!("{}: {}", path.display(), e)))?;
        let config: Self = serde_json::from_reader(BufReader::new(file))
            .map_err(|e| HarnessError::Config(format!("{}: {}", path.display(), e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_fixture_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.fixture_dir = dir.into();
        self
    }

    pub fn with_log_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_path = path.into();
        self
    }

    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !self.tolerance.is_finite() || self.tolerance < 1.0 {
            return Err(HarnessError::Config(format!(
                "tolerance must be a finite ratio >= 1.0, got {}",
                self.tolerance
            )));
        }
        if self.iterations == 0 {
            return Err(HarnessError::Config("iterations must be at least 1".to_string()));
        }
        Ok(())
    }
}
