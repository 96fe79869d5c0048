use crate::clipper::{Clipper, PathRole};
use crate::error::{HarnessError, Result};
use crate::point::{scale_rings, IntPoint};
use crate::workload::ClipExecutionData;
use geo_types::MultiPolygon;
use std::time::{Duration, Instant};

/// Elapsed times of one comparison run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Comparison {
    pub baseline: Duration,
    pub candidate: Duration,
}

/// A record's geometry in the integer space clippers consume.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScaledRecord {
    pub subject: Vec<Vec<IntPoint>>,
    pub clip: Vec<Vec<IntPoint>>,
}

impl ScaledRecord {
    pub fn from_record(record: &ClipExecutionData) -> Self {
        Self {
            subject: scale_rings(&record.subject),
            clip: scale_rings(&record.clip),
        }
    }
}

/// Clips a single record with a fresh `C`, returning the solution.
///
/// Scaling happens here so that it is part of whatever time the caller measures.
pub fn clip_record<C: Clipper>(record: &ClipExecutionData) -> Option<MultiPolygon<f64>> {
    let scaled = ScaledRecord::from_record(record);

    let subject = C::build_paths(&scaled.subject);
    let clip = C::build_paths(&scaled.clip);

    let mut clipper = C::default();
    clipper.add_paths(subject, PathRole::Subject);
    clipper.add_paths(clip, PathRole::Clip);

    let mut solution = MultiPolygon::new(vec![]);
    clipper
        .execute(C::native_op(record.operation), &mut solution)
        .then_some(solution)
}

/// Runs the whole workload `iterations` times through `C` and returns the elapsed time.
///
/// The first failed execute aborts the run.
pub fn run_workload<C: Clipper>(workload: &[ClipExecutionData], iterations: usize) -> Result<Duration> {
    let start = Instant::now();

    for iteration in 0..iterations {
        for (index, record) in workload.iter().enumerate() {
            if clip_record::<C>(record).is_none() {
                log::warn!(
                    "{} failed {} on record {} (iteration {})",
                    C::NAME,
                    record.operation,
                    index,
                    iteration
                );
                return Err(HarnessError::ClipExecution {
                    implementation: C::NAME,
                    record: index,
                    iteration,
                });
            }
        }
    }

    let elapsed = start.elapsed();
    log::debug!(
        "{}: {} records x {} iterations in {:?}",
        C::NAME,
        workload.len(),
        iterations,
        elapsed
    );
    Ok(elapsed)
}

/// Times `A` (baseline) to completion, then `B` (candidate), on the same workload.
pub fn compare<A: Clipper, B: Clipper>(workload: &[ClipExecutionData], iterations: usize) -> Result<Comparison> {
    let baseline = run_workload::<A>(workload, iterations)?;
    let candidate = run_workload::<B>(workload, iterations)?;
    Ok(Comparison { baseline, candidate })
}

#[cfg(test)]
#[path = "executor_tests.rs"]
mod tests;
