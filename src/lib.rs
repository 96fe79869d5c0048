pub mod clipper;
pub mod config;
pub mod error;
pub mod executor;
pub mod fixture;
pub mod generator;
pub mod harness;
pub mod judge;
pub mod point;
pub mod workload;

pub use clipper::{Clipper, OverlayClipper, PathRole, SweepClipper};
pub use config::HarnessConfig;
pub use error::{HarnessError, Result};
pub use executor::{compare, run_workload, Comparison};
pub use fixture::FixtureStore;
pub use generator::{generate_workload, generate_workload_with_count, LoadProfile};
pub use harness::Harness;
pub use judge::{PerformanceLog, RegressionJudge, Verdict};
pub use point::{IntPoint, Point};
pub use workload::{ClipExecutionData, ClipOperation};
