//! Command implementations

pub mod benchmark;
pub mod play;
pub mod solve;
pub mod test_all;

pub use benchmark::{BenchmarkResult, random_secrets, run_benchmark, simulate};
pub use play::{PlayOptions, TerminalDisplay, run_play};
pub use solve::{SolveConfig, SolveResult, SolveStep, solve_code};
pub use test_all::{TestAllStatistics, run_test_all};
