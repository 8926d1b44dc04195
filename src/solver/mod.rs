//! Automated codebreaker
//!
//! Candidate-elimination solver with a pluggable opening policy.

mod candidates;
mod engine;
pub mod opening;

pub use candidates::CandidateSet;
pub use engine::Solver;
pub use opening::{FirstCandidate, OpeningPolicy, OpeningType, RandomOpening, TwoColorSplit};
