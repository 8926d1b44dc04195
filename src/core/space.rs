//! Code space enumeration
//!
//! The code space is every sequence of `length` palette colors, repetition
//! allowed: `palette.len() ^ length` codes in lexicographic order over the
//! palette's declared order (last position varies fastest).

use super::code::Code;
use super::error::MastermindError;
use super::palette::{Color, Palette};

/// Largest code space that is materialized in memory (six colors fit up to eight positions)
pub const MAX_CODE_SPACE: usize = 1 << 21;

/// Number of codes of `length` colors over `palette`, `None` on overflow
#[must_use]
pub fn code_space_size(palette: &Palette, length: usize) -> Option<usize> {
    let exp = u32::try_from(length).ok()?;
    palette.len().checked_pow(exp)
}

/// Size of the code space, if it is small enough to enumerate
///
/// # Errors
/// Returns `MastermindError::CodeSpaceTooLarge` if the size overflows or
/// exceeds `MAX_CODE_SPACE`.
pub fn check_code_space(palette: &Palette, length: usize) -> Result<usize, MastermindError> {
    code_space_size(palette, length)
        .filter(|&size| size <= MAX_CODE_SPACE)
        .ok_or(MastermindError::CodeSpaceTooLarge {
            colors: palette.len(),
            length,
        })
}

/// Lazy lexicographic iterator over the code space
#[derive(Debug, Clone)]
pub struct CodeSpace {
    base: usize,
    digits: Vec<usize>,
    exhausted: bool,
}

impl CodeSpace {
    /// Create an iterator over all codes of `length` colors
    ///
    /// # Errors
    /// Returns `MastermindError::InvalidLength` if `length` is zero.
    pub fn new(palette: &Palette, length: usize) -> Result<Self, MastermindError> {
        if length < 1 {
            return Err(MastermindError::InvalidLength(length));
        }
        Ok(Self {
            base: palette.len(),
            digits: vec![0; length],
            exhausted: palette.is_empty(),
        })
    }

    fn current(&self) -> Code {
        Code::new(self.digits.iter().map(|&d| Color::new(d as u8)).collect())
    }

    /// Advance the odometer, returning false once it wraps around
    fn advance(&mut self) -> bool {
        for digit in self.digits.iter_mut().rev() {
            *digit += 1;
            if *digit < self.base {
                return true;
            }
            *digit = 0;
        }
        false
    }
}

impl Iterator for CodeSpace {
    type Item = Code;

    fn next(&mut self) -> Option<Code> {
        if self.exhausted {
            return None;
        }
        let code = self.current();
        self.exhausted = !self.advance();
        Some(code)
    }
}

/// Materialize the whole code space
///
/// # Errors
/// Returns `MastermindError::InvalidLength` if `length` is zero, or
/// `CodeSpaceTooLarge` if the space is over `MAX_CODE_SPACE` codes or cannot
/// be allocated.
///
/// # Examples
/// ```
/// use mastermind::core::{Palette, enumerate};
///
/// let codes = enumerate(&Palette::default(), 4).unwrap();
/// assert_eq!(codes.len(), 1296);
/// ```
pub fn enumerate(palette: &Palette, length: usize) -> Result<Vec<Code>, MastermindError> {
    let space = CodeSpace::new(palette, length)?;
    let size = check_code_space(palette, length)?;

    let mut codes = Vec::new();
    codes
        .try_reserve_exact(size)
        .map_err(|_| MastermindError::CodeSpaceTooLarge {
            colors: palette.len(),
            length,
        })?;
    codes.extend(space);
    Ok(codes)
}
