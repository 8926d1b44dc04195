//! Benchmark command
//!
//! Plays the AI codebreaker against many secrets and aggregates the results.

use crate::core::Code;
use crate::game::{AiCodebreaker, GameConfig, GameSession, NullDisplay, Outcome};
use crate::solver::OpeningType;
use anyhow::Result;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    pub total_games: usize,
    pub solved: usize,
    pub failed: usize,
    pub total_rounds: usize,
    pub average_rounds: f64,
    pub min_rounds: usize,
    pub max_rounds: usize,
    /// Rounds needed -> number of solved games
    pub distribution: FxHashMap<usize, usize>,
    pub duration: Duration,
    pub games_per_second: f64,
}

impl BenchmarkResult {
    /// Aggregate finished games
    ///
    /// Round statistics only count solved games.
    #[must_use]
    pub fn from_outcomes(outcomes: &[Outcome], duration: Duration) -> Self {
        let solved: Vec<usize> = outcomes
            .iter()
            .filter(|o| o.is_victory())
            .map(|o| o.rounds)
            .collect();

        let mut distribution: FxHashMap<usize, usize> = FxHashMap::default();
        for &rounds in &solved {
            *distribution.entry(rounds).or_insert(0) += 1;
        }

        let total_rounds: usize = solved.iter().sum();
        let average_rounds = if solved.is_empty() {
            0.0
        } else {
            total_rounds as f64 / solved.len() as f64
        };
        let secs = duration.as_secs_f64();

        Self {
            total_games: outcomes.len(),
            solved: solved.len(),
            failed: outcomes.len() - solved.len(),
            total_rounds,
            average_rounds,
            min_rounds: solved.iter().copied().min().unwrap_or(0),
            max_rounds: solved.iter().copied().max().unwrap_or(0),
            distribution,
            duration,
            games_per_second: if secs > 0.0 {
                outcomes.len() as f64 / secs
            } else {
                0.0
            },
        }
    }
}

/// Play one silent game of the AI codebreaker against `secret`
///
/// # Errors
///
/// Returns an error if the secret has the wrong length or the solver fails.
pub fn simulate(config: &GameConfig, secret: Code, opening: OpeningType) -> Result<Outcome> {
    let mut session = GameSession::new(config.clone(), secret)?;
    let mut ai = AiCodebreaker::new(config, opening)?;
    session.run(&mut ai, &mut NullDisplay)
}

/// Draw `count` random secrets, reproducibly when `seed` is given
#[must_use]
pub fn random_secrets(config: &GameConfig, count: usize, seed: Option<u64>) -> Vec<Code> {
    let mut rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
    (0..count)
        .map(|_| Code::random(&config.palette, config.length, &mut rng))
        .collect()
}

/// Run benchmark on a set of secrets, in parallel
///
/// # Errors
///
/// Returns the first simulation error.
pub fn run_benchmark(
    config: &GameConfig,
    secrets: &[Code],
    opening: OpeningType,
) -> Result<BenchmarkResult> {
    let start = Instant::now();

    let outcomes = secrets
        .par_iter()
        .map(|secret| simulate(config, secret.clone(), opening))
        .collect::<Result<Vec<_>>>()?;

    Ok(BenchmarkResult::from_outcomes(&outcomes, start.elapsed()))
}
