//! Test every secret - exhaustive solver evaluation
//!
//! Runs the AI codebreaker against every code in the space (or a prefix of
//! it) and collects statistics.

use super::benchmark::{BenchmarkResult, simulate};
use crate::core::{Code, CodeSpace};
use crate::game::{GameConfig, Outcome};
use crate::solver::OpeningType;
use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::time::Instant;

/// Number of hardest secrets kept in the report
const HARDEST_KEPT: usize = 10;

/// Statistics from testing all secrets
#[derive(Debug)]
pub struct TestAllStatistics {
    pub summary: BenchmarkResult,
    /// Solved secrets needing the most rounds, hardest first
    pub hardest: Vec<(Code, usize)>,
    /// Secrets not cracked within the guess limit
    pub unsolved: Vec<Code>,
}

/// Run the solver on every secret (or the first `limit` in enumeration order)
///
/// # Errors
///
/// Returns an error if the configured length is invalid or a simulation fails.
pub fn run_test_all(
    config: &GameConfig,
    limit: Option<usize>,
    opening: OpeningType,
    show_progress: bool,
) -> Result<TestAllStatistics> {
    config.check_solvable()?;
    let secrets: Vec<Code> = CodeSpace::new(&config.palette, config.length)?
        .take(limit.unwrap_or(usize::MAX))
        .collect();

    let pb = if show_progress {
        println!("🎯 Testing {} secrets...", secrets.len());
        ProgressBar::new(secrets.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    let style = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")?
        .progress_chars("█▓▒░");
    pb.set_style(style);

    let start = Instant::now();
    let outcomes = secrets
        .par_iter()
        .map(|secret| {
            let outcome = simulate(config, secret.clone(), opening);
            pb.inc(1);
            outcome
        })
        .collect::<Result<Vec<Outcome>>>()?;
    pb.finish_with_message("Complete!");

    let summary = BenchmarkResult::from_outcomes(&outcomes, start.elapsed());

    let mut hardest: Vec<(Code, usize)> = outcomes
        .iter()
        .filter(|o| o.is_victory())
        .map(|o| (o.secret.clone(), o.rounds))
        .collect();
    hardest.sort_by(|(a, ra), (b, rb)| rb.cmp(ra).then_with(|| a.cmp(b)));
    hardest.truncate(HARDEST_KEPT);

    let unsolved = outcomes
        .iter()
        .filter(|o| !o.is_victory())
        .map(|o| o.secret.clone())
        .collect();

    Ok(TestAllStatistics {
        summary,
        hardest,
        unsolved,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{MastermindError, Palette};

    #[test]
    fn covers_whole_small_space() {
        let config = GameConfig::new(Palette::new(["a", "b", "c"]).unwrap(), 3, 27).unwrap();
        let stats = run_test_all(&config, None, OpeningType::Split, false).unwrap();

        assert_eq!(stats.summary.total_games, 27);
        assert_eq!(stats.summary.solved, 27);
        assert!(stats.unsolved.is_empty());
        assert!(stats.summary.max_rounds <= 27);
    }

    #[test]
    fn limit_takes_prefix() {
        let config = GameConfig::default();
        let stats = run_test_all(&config, Some(12), OpeningType::Split, false).unwrap();

        assert_eq!(stats.summary.total_games, 12);
        assert!(stats.hardest.len() <= HARDEST_KEPT);
    }

    #[test]
    fn hardest_sorted_descending() {
        let config = GameConfig::default();
        let stats = run_test_all(&config, Some(50), OpeningType::Split, false).unwrap();

        assert!(stats.hardest.windows(2).all(|w| w[0].1 >= w[1].1));
        assert_eq!(
            stats.hardest.first().map(|h| h.1),
            Some(stats.summary.max_rounds)
        );
    }

    #[test]
    fn tight_limit_reports_unsolved() {
        let config = GameConfig::new(Palette::default(), 4, 1).unwrap();
        let stats = run_test_all(&config, Some(5), OpeningType::Split, false).unwrap();

        // Only the opening itself can be cracked in one round
        assert_eq!(stats.summary.solved, 0);
        assert_eq!(stats.unsolved.len(), 5);
    }

    #[test]
    fn oversized_space_is_an_error() {
        let config = GameConfig::new(Palette::default(), 12, 13).unwrap();
        let err = run_test_all(&config, Some(3), OpeningType::Split, false).unwrap_err();
        assert!(err.downcast_ref::<MastermindError>().is_some());
    }
}
