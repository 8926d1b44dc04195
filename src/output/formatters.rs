//! Formatting utilities for terminal output

use crate::core::{Code, Feedback, Palette};
use colored::Colorize;

/// Peg for a color at the right position
pub const EXACT_PEG: char = '●';
/// Peg for a right color at the wrong position
pub const COLOR_PEG: char = '○';
/// Placeholder for a position that scored nothing
pub const EMPTY_PEG: char = '·';

/// Format feedback as a row of `length` pegs, exact matches first
///
/// # Examples
/// ```
/// use mastermind::core::Feedback;
/// use mastermind::output::formatters::feedback_pegs;
///
/// assert_eq!(feedback_pegs(Feedback::new(1, 3), 4), "●○○·");
/// ```
#[must_use]
pub fn feedback_pegs(feedback: Feedback, length: usize) -> String {
    let mut result = String::with_capacity(length * 3);
    for i in 0..length {
        result.push(if i < feedback.exact_matches {
            EXACT_PEG
        } else if i < feedback.color_matches {
            COLOR_PEG
        } else {
            EMPTY_PEG
        });
    }
    result
}

/// Render a code with each color name painted in its own color
///
/// Names `colored` does not recognize fall back to white.
#[must_use]
pub fn colored_code(palette: &Palette, code: &Code) -> String {
    code.iter()
        .map(|c| {
            let name = palette.name(c);
            name.color(name).bold().to_string()
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
