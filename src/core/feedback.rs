//! Feedback calculation
//!
//! Feedback is the classic two-number peg score:
//! - `exact_matches`: same color at the same position
//! - `color_matches`: colors shared between guess and secret regardless of
//!   position, counted with multiset semantics. Exact matches are included.
//!
//! `0 <= exact_matches <= color_matches <= length` always holds.

use super::code::Code;
use super::error::MastermindError;
use super::palette::Color;
use std::fmt;

/// Score of a guess against a secret
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Feedback {
    pub exact_matches: usize,
    pub color_matches: usize,
}

impl Feedback {
    #[must_use]
    pub const fn new(exact_matches: usize, color_matches: usize) -> Self {
        Self {
            exact_matches,
            color_matches,
        }
    }

    /// Feedback for a fully correct guess of `length` colors
    #[must_use]
    pub const fn solved(length: usize) -> Self {
        Self::new(length, length)
    }

    /// Check if this feedback means the code was cracked
    #[must_use]
    pub const fn is_solved(self, length: usize) -> bool {
        self.exact_matches == length
    }

    /// Score `guess` against `secret`
    ///
    /// # Errors
    /// Returns `MastermindError::LengthMismatch` if the codes differ in length.
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::{Feedback, Palette};
    ///
    /// let palette = Palette::new(["red", "blue"]).unwrap();
    /// let secret = palette.parse_code("red red blue blue", 4).unwrap();
    /// let guess = palette.parse_code("red blue red blue", 4).unwrap();
    ///
    /// let feedback = Feedback::calculate(&guess, &secret).unwrap();
    /// assert_eq!(feedback, Feedback::new(2, 4));
    /// ```
    pub fn calculate(guess: &Code, secret: &Code) -> Result<Self, MastermindError> {
        if guess.len() != secret.len() {
            return Err(MastermindError::LengthMismatch {
                guess: guess.len(),
                secret: secret.len(),
            });
        }
        Ok(score(guess.colors(), secret.colors()))
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} exact, {} color",
            self.exact_matches, self.color_matches
        )
    }
}

/// Score `guess` against `secret`, see [`Feedback::calculate`]
///
/// # Errors
/// Returns `MastermindError::LengthMismatch` if the codes differ in length.
pub fn evaluate(guess: &Code, secret: &Code) -> Result<Feedback, MastermindError> {
    Feedback::calculate(guess, secret)
}

/// Score two equal-length color slices
///
/// Each guess color consumes the first still-unused matching slot of the
/// secret, so a color appearing `k` times in the guess and `m` times in the
/// secret contributes `min(k, m)`.
pub(crate) fn score(guess: &[Color], secret: &[Color]) -> Feedback {
    debug_assert_eq!(guess.len(), secret.len());

    let exact_matches = guess.iter().zip(secret).filter(|(g, s)| g == s).count();

    let mut remaining: Vec<Option<Color>> = secret.iter().copied().map(Some).collect();
    let mut color_matches = 0;
    for &color in guess {
        if let Some(slot) = remaining.iter_mut().find(|slot| **slot == Some(color)) {
            *slot = None;
            color_matches += 1;
        }
    }

    Feedback {
        exact_matches,
        color_matches,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Palette, enumerate};

    fn palette() -> Palette {
        Palette::default()
    }

    fn parse(p: &Palette, s: &str) -> Code {
        let length = s.split_whitespace().count();
        p.parse_code(s, length).unwrap()
    }

    #[test]
    fn multiset_example() {
        let p = Palette::new(["red", "blue"]).unwrap();
        let secret = parse(&p, "red red blue blue");
        let guess = parse(&p, "red blue red blue");

        let fb = evaluate(&guess, &secret).unwrap();
        assert_eq!(fb.exact_matches, 2);
        assert_eq!(fb.color_matches, 4);
    }

    #[test]
    fn no_shared_colors() {
        let p = palette();
        let fb = evaluate(&parse(&p, "red red blue blue"), &parse(&p, "white white green yellow"))
            .unwrap();
        assert_eq!(fb, Feedback::new(0, 0));
    }

    #[test]
    fn duplicates_counted_once_per_secret_occurrence() {
        let p = palette();
        // Guess has four reds, secret has one
        let fb = evaluate(&parse(&p, "red red red red"), &parse(&p, "blue red green white"))
            .unwrap();
        assert_eq!(fb, Feedback::new(1, 1));

        // Guess has one red, secret has three
        let fb = evaluate(&parse(&p, "red blue blue blue"), &parse(&p, "green red red red"))
            .unwrap();
        assert_eq!(fb, Feedback::new(0, 1));
    }

    #[test]
    fn exact_matches_included_in_color_matches() {
        let p = palette();
        let fb = evaluate(&parse(&p, "red blue black white"), &parse(&p, "red white black blue"))
            .unwrap();
        assert_eq!(fb, Feedback::new(2, 4));
    }

    #[test]
    fn self_match_is_solved() {
        let p = palette();
        for code in enumerate(&Palette::new(["a", "b", "c"]).unwrap(), 3).unwrap() {
            let fb = evaluate(&code, &code).unwrap();
            assert_eq!(fb, Feedback::solved(3));
            assert!(fb.is_solved(3));
        }
        let c = parse(&p, "green");
        assert_eq!(evaluate(&c, &c).unwrap(), Feedback::solved(1));
    }

    #[test]
    fn length_mismatch_rejected() {
        let p = palette();
        let err = evaluate(&parse(&p, "red blue"), &parse(&p, "red blue green")).unwrap_err();
        assert_eq!(
            err,
            MastermindError::LengthMismatch {
                guess: 2,
                secret: 3
            }
        );
    }

    #[test]
    fn evaluation_is_symmetric_and_bounded() {
        let p = Palette::new(["a", "b", "c"]).unwrap();
        let codes = enumerate(&p, 3).unwrap();

        for a in &codes {
            for b in &codes {
                let ab = evaluate(a, b).unwrap();
                let ba = evaluate(b, a).unwrap();
                assert_eq!(ab, ba, "{a} vs {b}");
                assert!(ab.exact_matches <= ab.color_matches);
                assert!(ab.color_matches <= 3);
            }
        }
    }

    #[test]
    fn inputs_are_not_mutated() {
        let p = palette();
        let guess = parse(&p, "red red blue blue");
        let secret = parse(&p, "blue red red yellow");
        let (g, s) = (guess.clone(), secret.clone());
        let _ = evaluate(&guess, &secret).unwrap();
        assert_eq!(guess, g);
        assert_eq!(secret, s);
    }

    #[test]
    fn feedback_display() {
        assert_eq!(Feedback::new(1, 3).to_string(), "1 exact, 3 color");
    }
}
