use crate::error::{HarnessError, Result};
use crate::executor::Comparison;
use chrono::{DateTime, Local};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Candidate may be up to 5% slower than the baseline.
pub const DEFAULT_TOLERANCE: f64 = 1.05;

/// Outcome of one comparison.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Verdict {
    /// candidate time / baseline time
    pub ratio: f64,
    pub tolerance: f64,
    pub passed: bool,
}

impl Verdict {
    pub fn ensure_passed(&self, scenario: &str) -> Result<()> {
        if self.passed {
            Ok(())
        } else {
            Err(HarnessError::RegressionExceeded {
                scenario: scenario.to_string(),
                ratio: self.ratio,
                tolerance: self.tolerance,
            })
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RegressionJudge {
    pub tolerance: f64,
}

impl Default for RegressionJudge {
    fn default() -> Self {
        Self::new(DEFAULT_TOLERANCE)
    }
}

impl RegressionJudge {
    pub fn new(tolerance: f64) -> Self {
        Self { tolerance }
    }

    /// Pass iff `candidate / baseline <= tolerance`.
    pub fn judge_ratio(&self, ratio: f64) -> Verdict {
        Verdict {
            ratio,
            tolerance: self.tolerance,
            passed: ratio <= self.tolerance,
        }
    }

    /// Judges a timed comparison.
    ///
    /// Two zero durations count as a tie (ratio 1.0). A zero baseline against a non-zero
    /// candidate has no finite ratio and is an error rather than an infinite percentage.
    pub fn judge(&self, comparison: &Comparison) -> Result<Verdict> {
        if comparison.baseline.is_zero() {
            if comparison.candidate.is_zero() {
                return Ok(self.judge_ratio(1.0));
            }
            return Err(HarnessError::ZeroBaseline {
                candidate: comparison.candidate,
            });
        }
        let ratio = comparison.candidate.as_secs_f64() / comparison.baseline.as_secs_f64();
        Ok(self.judge_ratio(ratio))
    }
}

/// Formats one history line: `dd/mm/yyyy HH:mm`, the scenario right-aligned to 25 columns,
/// then the ratio as a zero-padded percentage.
pub fn format_log_line(timestamp: &DateTime<Local>, scenario: &str, ratio: f64) -> String {
    format!(
        "{} {:>25} {:06.2}%",
        timestamp.format("%d/%m/%Y %H:%M"),
        scenario,
        ratio * 100.0
    )
}

/// Append-only history of regression checks.
#[derive(Clone, Debug)]
pub struct PerformanceLog {
    path: PathBuf,
}

impl PerformanceLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn append(&self, scenario: &str, ratio: f64) -> Result<()> {
        self.append_at(&Local::now(), scenario, ratio)
    }

    pub fn append_at(&self, timestamp: &DateTime<Local>, scenario: &str, ratio: f64) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let mut file = OpenOptions::new().create(true).append(true).open(&self.path)?;
        writeln!(file, "{}", format_log_line(timestamp, scenario, ratio))?;
        Ok(())
    }
}
