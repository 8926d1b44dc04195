//! Core domain types for Mastermind
//!
//! Pure, I/O free building blocks: palette, codes, feedback scoring and code
//! space enumeration.

mod code;
mod error;
mod feedback;
mod palette;
mod space;

pub use code::Code;
pub use error::{CodeError, MastermindError, PaletteError};
pub use feedback::{Feedback, evaluate};
pub(crate) use feedback::score;
pub use palette::{Color, DEFAULT_COLORS, MAX_COLORS, Palette};
pub use space::{CodeSpace, MAX_CODE_SPACE, check_code_space, code_space_size, enumerate};

/// Shortest supported code
pub const MIN_LENGTH: usize = 1;

/// Longest supported code
pub const MAX_LENGTH: usize = 12;
