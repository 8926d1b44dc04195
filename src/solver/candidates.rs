//! Candidate set
//!
//! Codes not yet ruled out by feedback. Starts as the full code space and only
//! ever shrinks.

use crate::core::{Code, Feedback, MastermindError, Palette, enumerate, score};
use rayon::prelude::*;

/// Above this size filtering is spread across threads
const PARALLEL_THRESHOLD: usize = 4096;

/// Codes still consistent with every feedback received, in enumeration order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateSet {
    length: usize,
    codes: Vec<Code>,
}

impl CandidateSet {
    /// The full code space of `length` colors over `palette`
    ///
    /// # Errors
    /// Returns `MastermindError::InvalidLength` if `length` is zero.
    pub fn full(palette: &Palette, length: usize) -> Result<Self, MastermindError> {
        Ok(Self {
            length,
            codes: enumerate(palette, length)?,
        })
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// First remaining candidate in enumeration order
    #[must_use]
    pub fn first(&self) -> Option<&Code> {
        self.codes.first()
    }

    #[must_use]
    pub fn contains(&self, code: &Code) -> bool {
        self.codes.binary_search(code).is_ok()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Code> {
        self.codes.iter()
    }

    /// Keep only codes that would have produced `feedback` for `guess`
    ///
    /// Returns the number of codes removed.
    ///
    /// # Errors
    /// Returns `MastermindError::LengthMismatch` if `guess` has the wrong length.
    pub fn retain_consistent(
        &mut self,
        guess: &Code,
        feedback: Feedback,
    ) -> Result<usize, MastermindError> {
        if guess.len() != self.length {
            return Err(MastermindError::LengthMismatch {
                guess: guess.len(),
                secret: self.length,
            });
        }

        let before = self.codes.len();
        let consistent = |c: &Code| score(guess.colors(), c.colors()) == feedback;

        if before > PARALLEL_THRESHOLD {
            // Indexed collect keeps enumeration order
            self.codes = std::mem::take(&mut self.codes)
                .into_par_iter()
                .filter(|c| consistent(c))
                .collect();
        } else {
            self.codes.retain(|c| consistent(c));
        }

        Ok(before - self.codes.len())
    }
}

impl<'a> IntoIterator for &'a CandidateSet {
    type Item = &'a Code;
    type IntoIter = std::slice::Iter<'a, Code>;

    fn into_iter(self) -> Self::IntoIter {
        self.codes.iter()
    }
}
