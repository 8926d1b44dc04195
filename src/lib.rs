//! Mastermind
//!
//! The classic code-breaking game with an automated codebreaker that narrows
//! the code space using the feedback of every guess.
//!
//! # Quick Start
//!
//! ```rust
//! use mastermind::core::{Feedback, Palette};
//!
//! let palette = Palette::default();
//! let secret = palette.parse_code("red red blue blue", 4).unwrap();
//! let guess = palette.parse_code("blue red green red", 4).unwrap();
//!
//! let feedback = Feedback::calculate(&guess, &secret).unwrap();
//! assert_eq!(feedback, Feedback::new(1, 3));
//! ```

// Core domain types
pub mod core;

// Automated codebreaker
pub mod solver;

// Turn state machine and roles
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
