//! Display seam
//!
//! The session reports every scored round and the final outcome to a
//! `GameDisplay`. Terminal rendering lives in the commands layer.

use super::session::{Outcome, RoundReport};

pub trait GameDisplay {
    fn round_scored(&mut self, report: &RoundReport<'_>);
    fn finished(&mut self, outcome: &Outcome);
}

/// Discards all reports (simulations, tests)
#[derive(Debug, Clone, Copy, Default)]
pub struct NullDisplay;

impl GameDisplay for NullDisplay {
    fn round_scored(&mut self, _report: &RoundReport<'_>) {}

    fn finished(&mut self, _outcome: &Outcome) {}
}
