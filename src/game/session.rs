//! Turn state machine
//!
//! ```text
//! Setup -> RoundInProgress -> Victory
//!                          -> Defeat
//! ```
//!
//! Each round consumes one guess, scores it against the secret, records it in
//! the history and forwards the feedback to the codebreaker. Once no guesses
//! are left the next round ends the game in defeat without scoring anything.

use super::codebreaker::Codebreaker;
use super::config::GameConfig;
use super::display::GameDisplay;
use crate::core::{Code, Feedback, MastermindError, evaluate};
use anyhow::Result;
use log::{debug, info};
use rand::Rng;

/// Session lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Setup,
    RoundInProgress,
    Victory,
    Defeat,
}

impl Phase {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Victory | Self::Defeat)
    }
}

/// One scored guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    pub guess: Code,
    pub feedback: Feedback,
}

/// What a codebreaker may see before guessing. The secret is not part of it.
#[derive(Debug, Clone, Copy)]
pub struct Turn<'a> {
    /// 1-based round number
    pub number: usize,
    /// Guesses left including this one
    pub guesses_left: usize,
    pub history: &'a [Round],
}

/// Sent to the display after each scored round
#[derive(Debug, Clone, Copy)]
pub struct RoundReport<'a> {
    pub codebreaker: &'a str,
    pub number: usize,
    pub round: &'a Round,
    pub guesses_left: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    Victory,
    Defeat,
}

/// Final result of a game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub codebreaker: String,
    pub result: GameResult,
    pub rounds: usize,
    pub secret: Code,
}

impl Outcome {
    #[must_use]
    pub fn is_victory(&self) -> bool {
        self.result == GameResult::Victory
    }
}

/// Per-game state owned by the session
#[derive(Debug, Clone)]
pub struct GameState {
    secret: Code,
    guesses_left: usize,
    history: Vec<Round>,
}

impl GameState {
    #[must_use]
    pub const fn secret(&self) -> &Code {
        &self.secret
    }

    #[must_use]
    pub const fn guesses_left(&self) -> usize {
        self.guesses_left
    }

    #[must_use]
    pub fn history(&self) -> &[Round] {
        &self.history
    }
}

/// One game from setup to victory or defeat
#[derive(Debug, Clone)]
pub struct GameSession {
    config: GameConfig,
    state: GameState,
    phase: Phase,
}

impl GameSession {
    /// Set up a game around a fixed secret
    ///
    /// # Errors
    /// Returns `MastermindError::LengthMismatch` if the secret length differs
    /// from the configured length.
    pub fn new(config: GameConfig, secret: Code) -> Result<Self, MastermindError> {
        if secret.len() != config.length {
            return Err(MastermindError::LengthMismatch {
                guess: config.length,
                secret: secret.len(),
            });
        }

        let guesses_left = config.max_guesses;
        Ok(Self {
            config,
            state: GameState {
                secret,
                guesses_left,
                history: Vec::new(),
            },
            phase: Phase::Setup,
        })
    }

    /// Set up a game with a uniformly random secret
    ///
    /// # Errors
    /// See [`GameSession::new`].
    pub fn with_random_secret<R: Rng + ?Sized>(
        config: GameConfig,
        rng: &mut R,
    ) -> Result<Self, MastermindError> {
        let secret = Code::random(&config.palette, config.length, rng);
        Self::new(config, secret)
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Leave setup and begin play
    pub fn start(&mut self) {
        if self.phase == Phase::Setup {
            self.phase = Phase::RoundInProgress;
        }
    }

    /// Play a single round and return the resulting phase
    ///
    /// Starts the game if it is still in setup. Terminal phases are returned
    /// unchanged.
    ///
    /// # Errors
    /// Propagates codebreaker failures and core errors such as a guess of the
    /// wrong length. These abort the game.
    pub fn play_round<C, D>(&mut self, codebreaker: &mut C, display: &mut D) -> Result<Phase>
    where
        C: Codebreaker + ?Sized,
        D: GameDisplay + ?Sized,
    {
        self.start();
        if self.phase.is_terminal() {
            return Ok(self.phase);
        }

        if self.state.guesses_left == 0 {
            self.finish(GameResult::Defeat, codebreaker.name(), display);
            return Ok(self.phase);
        }

        let number = self.state.history.len() + 1;
        let guess = codebreaker.next_guess(Turn {
            number,
            guesses_left: self.state.guesses_left,
            history: &self.state.history,
        })?;
        self.state.guesses_left -= 1;

        let feedback = evaluate(&guess, &self.state.secret)?;
        debug!(
            "Round {number}: {} guessed {} -> {feedback}",
            codebreaker.name(),
            self.config.palette.render(&guess)
        );

        let solved = guess == self.state.secret;
        self.state.history.push(Round { guess, feedback });

        if let Some(round) = self.state.history.last() {
            display.round_scored(&RoundReport {
                codebreaker: codebreaker.name(),
                number,
                round,
                guesses_left: self.state.guesses_left,
            });
            // The round is recorded before the codebreaker can fail on it
            codebreaker.observe(&round.guess, feedback)?;
        }

        if solved {
            self.finish(GameResult::Victory, codebreaker.name(), display);
        }
        Ok(self.phase)
    }

    /// Play rounds until the game ends
    ///
    /// # Errors
    /// See [`GameSession::play_round`].
    pub fn run<C, D>(&mut self, codebreaker: &mut C, display: &mut D) -> Result<Outcome>
    where
        C: Codebreaker + ?Sized,
        D: GameDisplay + ?Sized,
    {
        while !self.play_round(codebreaker, display)?.is_terminal() {}
        Ok(self.outcome(codebreaker.name()))
    }

    fn outcome(&self, codebreaker: &str) -> Outcome {
        Outcome {
            codebreaker: codebreaker.to_string(),
            result: if self.phase == Phase::Victory {
                GameResult::Victory
            } else {
                GameResult::Defeat
            },
            rounds: self.state.history.len(),
            secret: self.state.secret.clone(),
        }
    }

    fn finish<D: GameDisplay + ?Sized>(
        &mut self,
        result: GameResult,
        codebreaker: &str,
        display: &mut D,
    ) {
        self.phase = match result {
            GameResult::Victory => Phase::Victory,
            GameResult::Defeat => Phase::Defeat,
        };
        let outcome = self.outcome(codebreaker);
        info!(
            "{codebreaker} {} after {} rounds",
            if outcome.is_victory() { "won" } else { "lost" },
            outcome.rounds
        );
        display.finished(&outcome);
    }
}
