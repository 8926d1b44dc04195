//! Main Mastermind solver interface

use super::candidates::CandidateSet;
use super::opening::{OpeningPolicy, OpeningType};
use crate::core::{Code, Feedback, MastermindError, Palette};
use log::debug;

/// Candidate-elimination codebreaker
///
/// Never sees the secret. Opens with the policy's guess, then after each
/// feedback drops every candidate that would not have produced it and plays the
/// first survivor in enumeration order.
///
/// Every guess is consistent with the history and the secret is never
/// eliminated. The number of rounds is not minimized.
#[derive(Debug, Clone)]
pub struct Solver<O: OpeningPolicy = OpeningType> {
    palette: Palette,
    length: usize,
    opening: O,
    candidates: Option<CandidateSet>,
    round: usize,
}

impl<O: OpeningPolicy> Solver<O> {
    /// Create a solver for codes of `length` colors over `palette`
    ///
    /// The candidate set is built lazily by [`Solver::first_guess`].
    #[must_use]
    pub const fn new(palette: Palette, length: usize, opening: O) -> Self {
        Self {
            palette,
            length,
            opening,
            candidates: None,
            round: 0,
        }
    }

    /// Number of guesses produced so far
    #[must_use]
    pub const fn round(&self) -> usize {
        self.round
    }

    #[must_use]
    pub const fn candidates(&self) -> Option<&CandidateSet> {
        self.candidates.as_ref()
    }

    /// Remaining candidate count, `None` before the opening guess
    #[must_use]
    pub fn candidate_count(&self) -> Option<usize> {
        self.candidates.as_ref().map(CandidateSet::len)
    }

    /// Produce the opening guess and reset the candidate set to the full space
    ///
    /// # Errors
    /// Returns `MastermindError::InvalidLength` if the code length is zero.
    pub fn first_guess(&mut self) -> Result<Code, MastermindError> {
        let candidates = CandidateSet::full(&self.palette, self.length)?;
        let guess = self.opening.opening(&self.palette, self.length);

        debug!(
            "Opening guess {} against {} candidates",
            self.palette.render(&guess),
            candidates.len()
        );

        self.candidates = Some(candidates);
        self.round = 1;
        Ok(guess)
    }

    /// Narrow the candidates with the last round's feedback and pick the next guess
    ///
    /// # Errors
    /// - `NoPriorGuess` if [`Solver::first_guess`] has not been called
    /// - `LengthMismatch` if `last_guess` has the wrong length
    /// - `CandidateSetExhausted` if no candidate survives, which means the
    ///   feedback was inconsistent with every code
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::{Palette, evaluate};
    /// use mastermind::solver::{OpeningType, Solver};
    ///
    /// let palette = Palette::default();
    /// let secret = palette.parse_code("green green red white", 4).unwrap();
    /// let mut solver = Solver::new(palette, 4, OpeningType::Split);
    ///
    /// let mut guess = solver.first_guess().unwrap();
    /// while guess != secret {
    ///     let feedback = evaluate(&guess, &secret).unwrap();
    ///     guess = solver.next_guess(feedback, &guess).unwrap();
    /// }
    /// assert!(solver.candidates().unwrap().contains(&secret));
    /// ```
    pub fn next_guess(
        &mut self,
        last_feedback: Feedback,
        last_guess: &Code,
    ) -> Result<Code, MastermindError> {
        let candidates = match self.candidates.as_mut() {
            Some(candidates) if self.round >= 1 => candidates,
            _ => return Err(MastermindError::NoPriorGuess),
        };

        let removed = candidates.retain_consistent(last_guess, last_feedback)?;
        debug!(
            "Round {}: feedback ({}) removed {removed}, {} candidates left",
            self.round,
            last_feedback,
            candidates.len()
        );

        let next = candidates
            .first()
            .cloned()
            .ok_or(MastermindError::CandidateSetExhausted { round: self.round })?;

        self.round += 1;
        Ok(next)
    }
}
