//! Code solving command
//!
//! Lets the AI codebreaker crack a known secret and records every step.

use crate::core::{Code, Feedback, code_space_size};
use crate::game::{AiCodebreaker, GameConfig, GameSession, NullDisplay};
use crate::solver::OpeningType;
use anyhow::Result;

/// Configuration for solving a code
pub struct SolveConfig {
    pub game: GameConfig,
    pub secret: Code,
    pub opening: OpeningType,
}

impl SolveConfig {
    #[must_use]
    pub fn new(game: GameConfig, secret: Code) -> Self {
        Self {
            game,
            secret,
            opening: OpeningType::default(),
        }
    }
}

/// Result of solving a code
pub struct SolveResult {
    pub success: bool,
    pub steps: Vec<SolveStep>,
    pub secret: Code,
    pub game: GameConfig,
}

/// A single guess in the solution
pub struct SolveStep {
    pub guess: Code,
    pub feedback: Feedback,
    pub candidates_before: usize,
    /// `None` for the solving guess, which filters nothing
    pub candidates_after: Option<usize>,
}

/// Solve `config.secret` with the AI codebreaker
///
/// # Errors
///
/// Returns an error if:
/// - The secret does not match the configured length
/// - The solver hits an internal inconsistency
pub fn solve_code(config: SolveConfig) -> Result<SolveResult> {
    let SolveConfig {
        game,
        secret,
        opening,
    } = config;

    let mut session = GameSession::new(game.clone(), secret.clone())?;
    let mut ai = AiCodebreaker::new(&game, opening)?;
    let mut steps: Vec<SolveStep> = Vec::new();

    loop {
        let candidates_before = ai
            .solver()
            .candidate_count()
            .or_else(|| code_space_size(&game.palette, game.length))
            .unwrap_or(usize::MAX);

        let phase = session.play_round(&mut ai, &mut NullDisplay)?;

        if let Some(round) = session.state().history().get(steps.len()) {
            let candidates_after = if round.feedback.is_solved(game.length) {
                None
            } else {
                ai.solver().candidate_count()
            };
            steps.push(SolveStep {
                guess: round.guess.clone(),
                feedback: round.feedback,
                candidates_before,
                candidates_after,
            });
        }

        if phase.is_terminal() {
            break;
        }
    }

    Ok(SolveResult {
        success: steps
            .last()
            .is_some_and(|s| s.feedback.is_solved(game.length)),
        steps,
        secret,
        game,
    })
}
