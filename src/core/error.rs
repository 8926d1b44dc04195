//! Error types for the game core
//!
//! `MastermindError` covers logic errors inside the core (these abort a game).
//! `CodeError` and `PaletteError` are validation failures for external input.

use std::fmt;

/// Logic errors raised by the evaluator, enumerator, solver and session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MastermindError {
    /// Guess and secret lengths disagree
    LengthMismatch { guess: usize, secret: usize },
    /// Code length outside the supported range
    InvalidLength(usize),
    /// A game must allow at least one guess
    InvalidGuessLimit(usize),
    /// Solver asked for a follow-up guess before making an opening guess
    NoPriorGuess,
    /// Feedback eliminated every candidate
    CandidateSetExhausted { round: usize },
    /// The code space is too large to enumerate
    CodeSpaceTooLarge { colors: usize, length: usize },
}

impl fmt::Display for MastermindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch { guess, secret } => {
                write!(f, "Guess has {guess} colors but the secret has {secret}")
            }
            Self::InvalidLength(len) => write!(f, "Invalid code length {len}"),
            Self::InvalidGuessLimit(n) => write!(f, "Invalid guess limit {n}"),
            Self::NoPriorGuess => write!(f, "Solver has not made an opening guess yet"),
            Self::CandidateSetExhausted { round } => write!(
                f,
                "No candidate is consistent with the feedback after round {round}"
            ),
            Self::CodeSpaceTooLarge { colors, length } => write!(
                f,
                "{colors} colors over {length} positions is too many codes to enumerate (at most {})",
                super::space::MAX_CODE_SPACE
            ),
        }
    }
}

impl std::error::Error for MastermindError {}

/// Validation failures when turning user text into a `Code`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeError {
    UnknownColor(String),
    WrongLength { expected: usize, got: usize },
}

impl fmt::Display for CodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownColor(name) => write!(f, "Unknown color '{name}'"),
            Self::WrongLength { expected, got } => {
                write!(f, "Expected {expected} colors, got {got}")
            }
        }
    }
}

impl std::error::Error for CodeError {}

/// Validation failures when building a `Palette`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaletteError {
    Empty,
    DuplicateColor(String),
    TooManyColors(usize),
}

impl fmt::Display for PaletteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Palette must contain at least one color"),
            Self::DuplicateColor(name) => write!(f, "Color '{name}' appears twice in the palette"),
            Self::TooManyColors(n) => write!(
                f,
                "Palette has {n} colors, at most {} are supported",
                super::palette::MAX_COLORS
            ),
        }
    }
}

impl std::error::Error for PaletteError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_mismatch_message_names_both_lengths() {
        let err = MastermindError::LengthMismatch { guess: 3, secret: 4 };
        assert_eq!(err.to_string(), "Guess has 3 colors but the secret has 4");
    }

    #[test]
    fn code_space_too_large_message() {
        let err = MastermindError::CodeSpaceTooLarge {
            colors: 6,
            length: 12,
        };
        assert!(err.to_string().starts_with("6 colors over 12 positions"));
    }

    #[test]
    fn code_error_messages() {
        assert_eq!(
            CodeError::UnknownColor("mauve".into()).to_string(),
            "Unknown color 'mauve'"
        );
        assert_eq!(
            CodeError::WrongLength { expected: 4, got: 2 }.to_string(),
            "Expected 4 colors, got 2"
        );
    }
}
