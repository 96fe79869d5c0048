use crate::clipper::Clipper;
use crate::config::HarnessConfig;
use crate::error::{HarnessError, Result};
use crate::executor::{compare, Comparison};
use crate::fixture::FixtureStore;
use crate::judge::{PerformanceLog, RegressionJudge, Verdict};
use crate::workload::ClipExecutionData;

/// Runs named scenarios: load fixture, time baseline then candidate, judge, log.
#[derive(Clone, Debug)]
pub struct Harness {
    config: HarnessConfig,
    fixtures: FixtureStore,
    judge: RegressionJudge,
    log: PerformanceLog,
}

impl Harness {
    pub fn new(config: HarnessConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            fixtures: FixtureStore::new(config.fixture_dir.clone()),
            judge: RegressionJudge::new(config.tolerance),
            log: PerformanceLog::new(config.log_path.clone()),
            config,
        })
    }

    pub fn config(&self) -> &HarnessConfig {
        &self.config
    }

    pub fn fixtures(&self) -> &FixtureStore {
        &self.fixtures
    }

    /// Loads `fixture` and runs it as `scenario`.
    pub fn run_scenario<A: Clipper, B: Clipper>(&self, scenario: &str, fixture: &str) -> Result<Verdict> {
        log::debug!("Scenario '{}' reads fixture '{}' from {:?}", scenario, fixture, self.fixtures.dir());
        let workload = self.fixtures.load(fixture)?;
        if workload.is_empty() {
            return Err(HarnessError::FixtureLoad {
                name: fixture.to_string(),
                reason: "fixture contains no records".to_string(),
            });
        }
        self.run_workload::<A, B>(scenario, &workload)
    }

    /// Compares `A` against `B` on an in-memory workload.
    ///
    /// A log line is appended only once both implementations completed; a regression is then
    /// returned as an error after it has been recorded. An empty workload is rejected up front,
    /// since it would time nothing.
    pub fn run_workload<A: Clipper, B: Clipper>(&self, scenario: &str, workload: &[ClipExecutionData]) -> Result<Verdict> {
        if workload.is_empty() {
            return Err(HarnessError::Config(format!("scenario '{}' has an empty workload", scenario)));
        }

        log::info!(
            "Scenario '{}': {} records ({} vertices) x {} iterations, {} vs {}",
            scenario,
            workload.len(),
            workload.iter().map(ClipExecutionData::vertex_count).sum::<usize>(),
            self.config.iterations,
            A::NAME,
            B::NAME
        );

        let comparison: Comparison = compare::<A, B>(workload, self.config.iterations)?;
        let verdict = self.judge.judge(&comparison)?;

        self.log.append(scenario, verdict.ratio)?;

        if verdict.passed {
            log::info!(
                "Scenario '{}' passed: {:?} vs {:?} ({:.2}%)",
                scenario,
                comparison.baseline,
                comparison.candidate,
                verdict.ratio * 100.0
            );
        } else {
            log::warn!(
                "Scenario '{}' regressed: {:?} vs {:?} ({:.2}% > {:.2}%)",
                scenario,
                comparison.baseline,
                comparison.candidate,
                verdict.ratio * 100.0,
                verdict.tolerance * 100.0
            );
        }

        verdict.ensure_passed(scenario)?;
        Ok(verdict)
    }
}
