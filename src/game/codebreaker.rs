//! Guess sources
//!
//! The session asks a `Codebreaker` for every guess. Humans are driven by the
//! interactive command; the computer is an `AiCodebreaker` wrapping the solver.

use super::config::GameConfig;
use super::players::AI_NAME;
use super::session::Turn;
use crate::core::{Code, Feedback, MastermindError};
use crate::solver::{OpeningPolicy, OpeningType, Solver};
use anyhow::{Result, bail};

/// Supplies guesses and receives the feedback for each one
pub trait Codebreaker {
    /// Name shown to the players
    fn name(&self) -> &str;

    /// Produce the guess for this turn
    ///
    /// # Errors
    /// Implementations fail when no guess can be produced; the game aborts.
    fn next_guess(&mut self, turn: Turn<'_>) -> Result<Code>;

    /// Receive the feedback for the guess just played
    ///
    /// # Errors
    /// Implementations fail when the feedback cannot be absorbed.
    fn observe(&mut self, _guess: &Code, _feedback: Feedback) -> Result<()> {
        Ok(())
    }
}

/// Computer codebreaker backed by the candidate solver
#[derive(Debug, Clone)]
pub struct AiCodebreaker<O: OpeningPolicy = OpeningType> {
    name: String,
    length: usize,
    solver: Solver<O>,
    pending: Option<Code>,
}

impl<O: OpeningPolicy> AiCodebreaker<O> {
    /// Create the AI for a game
    ///
    /// # Errors
    /// Returns `MastermindError::CodeSpaceTooLarge` if the game's code space is
    /// too large for the solver.
    pub fn new(config: &GameConfig, opening: O) -> Result<Self, MastermindError> {
        config.check_solvable()?;
        Ok(Self {
            name: AI_NAME.to_string(),
            length: config.length,
            solver: Solver::new(config.palette.clone(), config.length, opening),
            pending: None,
        })
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    #[must_use]
    pub const fn solver(&self) -> &Solver<O> {
        &self.solver
    }
}

impl<O: OpeningPolicy> Codebreaker for AiCodebreaker<O> {
    fn name(&self) -> &str {
        &self.name
    }

    fn next_guess(&mut self, _turn: Turn<'_>) -> Result<Code> {
        if let Some(guess) = self.pending.take() {
            return Ok(guess);
        }
        if self.solver.round() == 0 {
            return Ok(self.solver.first_guess()?);
        }
        bail!("Guess requested before feedback for round {}", self.solver.round())
    }

    fn observe(&mut self, guess: &Code, feedback: Feedback) -> Result<()> {
        if feedback.is_solved(self.length) {
            return Ok(());
        }
        self.pending = Some(self.solver.next_guess(feedback, guess)?);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Palette, evaluate};
    use crate::solver::TwoColorSplit;

    fn turn(number: usize) -> Turn<'static> {
        Turn {
            number,
            guesses_left: 13,
            history: &[],
        }
    }

    #[test]
    fn opening_then_filtered_guesses() {
        let config = GameConfig::default();
        let secret = config.palette.parse_code("white black red red", 4).unwrap();
        let mut ai = AiCodebreaker::new(&config, TwoColorSplit).unwrap();

        let first = ai.next_guess(turn(1)).unwrap();
        assert_eq!(config.palette.render(&first), "red red blue blue");

        let feedback = evaluate(&first, &secret).unwrap();
        ai.observe(&first, feedback).unwrap();
        let before = ai.solver().candidate_count().unwrap();
        assert!(before < 1296);

        let second = ai.next_guess(turn(2)).unwrap();
        assert_ne!(second, first);
        assert_eq!(evaluate(&first, &second).unwrap(), feedback);
    }

    #[test]
    fn asking_twice_without_feedback_fails() {
        let config = GameConfig::default();
        let mut ai = AiCodebreaker::new(&config, OpeningType::First).unwrap();

        ai.next_guess(turn(1)).unwrap();
        assert!(ai.next_guess(turn(2)).is_err());
    }

    #[test]
    fn inconsistent_feedback_surfaces_solver_error() {
        let config = GameConfig::default();
        let mut ai = AiCodebreaker::new(&config, TwoColorSplit).unwrap();
        let guess = ai.next_guess(turn(1)).unwrap();

        let err = ai.observe(&guess, Feedback::new(3, 0)).unwrap_err();
        assert_eq!(
            err.downcast_ref::<MastermindError>(),
            Some(&MastermindError::CandidateSetExhausted { round: 1 })
        );
    }

    #[test]
    fn custom_name() {
        let ai = AiCodebreaker::new(&GameConfig::default(), OpeningType::Split)
            .unwrap()
            .with_name("HAL");
        assert_eq!(ai.name(), "HAL");
    }

    #[test]
    fn oversized_game_rejected_at_setup() {
        let config = GameConfig::new(Palette::default(), 12, 13).unwrap();
        assert_eq!(
            AiCodebreaker::new(&config, TwoColorSplit).unwrap_err(),
            MastermindError::CodeSpaceTooLarge {
                colors: 6,
                length: 12
            }
        );
    }
}
