//! Game configuration

use crate::core::{MAX_LENGTH, MIN_LENGTH, MastermindError, Palette, check_code_space};

/// Default number of guesses a codebreaker gets
pub const DEFAULT_MAX_GUESSES: usize = 13;

/// Default code length
pub const DEFAULT_LENGTH: usize = 4;

/// Settings fixed for the whole game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub palette: Palette,
    pub length: usize,
    pub max_guesses: usize,
}

impl GameConfig {
    /// Create a validated configuration
    ///
    /// # Errors
    /// Returns `MastermindError::InvalidLength` if `length` is outside
    /// `MIN_LENGTH..=MAX_LENGTH`, or `InvalidGuessLimit` if `max_guesses` is zero.
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::Palette;
    /// use mastermind::game::GameConfig;
    ///
    /// assert!(GameConfig::new(Palette::default(), 4, 13).is_ok());
    /// assert!(GameConfig::new(Palette::default(), 13, 13).is_err());
    /// ```
    pub fn new(
        palette: Palette,
        length: usize,
        max_guesses: usize,
    ) -> Result<Self, MastermindError> {
        if !(MIN_LENGTH..=MAX_LENGTH).contains(&length) {
            return Err(MastermindError::InvalidLength(length));
        }
        if max_guesses == 0 {
            return Err(MastermindError::InvalidGuessLimit(max_guesses));
        }
        Ok(Self {
            palette,
            length,
            max_guesses,
        })
    }

    /// Check that the AI codebreaker can play this game
    ///
    /// Human games accept any length in range; the AI enumerates the whole
    /// code space, which caps how large it may be.
    ///
    /// # Errors
    /// Returns `MastermindError::CodeSpaceTooLarge` if the code space is over
    /// `MAX_CODE_SPACE` codes.
    pub fn check_solvable(&self) -> Result<(), MastermindError> {
        check_code_space(&self.palette, self.length).map(|_| ())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            palette: Palette::default(),
            length: DEFAULT_LENGTH,
            max_guesses: DEFAULT_MAX_GUESSES,
        }
    }
}
