//! Command implementations

pub mod benchmark;
pub mod check;
pub mod ladder;
pub mod neighbors;

pub use benchmark::{BenchmarkConfig, BenchmarkResult, run_benchmark};
pub use check::{CheckResult, DistanceResult, check_ladder, measure_distance};
pub use ladder::{LadderResult, find_ladder};
pub use neighbors::{NeighborsResult, list_neighbors};
