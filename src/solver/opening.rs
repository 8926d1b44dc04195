//! Opening guess policies
//!
//! Defines the `OpeningPolicy` trait and concrete implementations.

use crate::core::{Code, Palette};

/// A policy choosing the codebreaker's very first guess
pub trait OpeningPolicy {
    /// Build the opening guess of `length` colors over `palette`
    fn opening(&self, palette: &Palette, length: usize) -> Code;
}

/// Enum wrapper for all opening policies
///
/// Allows runtime selection of the policy while maintaining static dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OpeningType {
    /// Two colors, each covering half the positions (default)
    #[default]
    Split,
    /// First code of the enumeration
    First,
    /// Uniformly random code
    Random,
}

impl OpeningPolicy for OpeningType {
    fn opening(&self, palette: &Palette, length: usize) -> Code {
        match self {
            Self::Split => TwoColorSplit.opening(palette, length),
            Self::First => FirstCandidate.opening(palette, length),
            Self::Random => RandomOpening.opening(palette, length),
        }
    }
}

impl OpeningType {
    /// Create policy from name string
    ///
    /// Supported names: "split", "first", "random".
    /// Defaults to split if name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "first" => Self::First,
            "random" => Self::Random,
            _ => Self::Split,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Split => "split",
            Self::First => "first",
            Self::Random => "random",
        }
    }
}

/// First palette color in the first half (rounded up), second color in the rest
///
/// With the default palette and four positions this is `red red blue blue`.
/// A single-color palette repeats its only color.
#[derive(Debug, Clone, Copy, Default)]
pub struct TwoColorSplit;

impl OpeningPolicy for TwoColorSplit {
    fn opening(&self, palette: &Palette, length: usize) -> Code {
        let colors: Vec<_> = palette.colors().take(2).collect();
        let first = colors[0];
        let second = colors.get(1).copied().unwrap_or(first);
        let split = length.div_ceil(2);

        Code::new(
            (0..length)
                .map(|i| if i < split { first } else { second })
                .collect(),
        )
    }
}

/// The first code of the enumeration: the first color everywhere
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstCandidate;

impl OpeningPolicy for FirstCandidate {
    fn opening(&self, palette: &Palette, length: usize) -> Code {
        let colors: Vec<_> = palette.colors().take(1).collect();
        Code::new(vec![colors[0]; length])
    }
}

/// Uniformly random opening
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomOpening;

impl OpeningPolicy for RandomOpening {
    fn opening(&self, palette: &Palette, length: usize) -> Code {
        Code::random(palette, length, &mut rand::rng())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_default_palette_length_four() {
        let palette = Palette::default();
        let code = TwoColorSplit.opening(&palette, 4);
        assert_eq!(palette.render(&code), "red red blue blue");
    }

    #[test]
    fn split_odd_length_rounds_first_half_up() {
        let palette = Palette::default();
        assert_eq!(
            palette.render(&TwoColorSplit.opening(&palette, 5)),
            "red red red blue blue"
        );
        assert_eq!(palette.render(&TwoColorSplit.opening(&palette, 1)), "red");
    }

    #[test]
    fn split_single_color_palette() {
        let palette = Palette::new(["only"]).unwrap();
        assert_eq!(
            palette.render(&TwoColorSplit.opening(&palette, 3)),
            "only only only"
        );
    }

    #[test]
    fn first_candidate_is_all_first_color() {
        let palette = Palette::default();
        assert_eq!(
            palette.render(&FirstCandidate.opening(&palette, 3)),
            "red red red"
        );
    }

    #[test]
    fn random_opening_has_right_shape() {
        let palette = Palette::default();
        let code = RandomOpening.opening(&palette, 6);
        assert_eq!(code.len(), 6);
        assert!(palette.contains_code(&code));
    }

    #[test]
    fn from_name_defaults_to_split() {
        assert_eq!(OpeningType::from_name("first"), OpeningType::First);
        assert_eq!(OpeningType::from_name("random"), OpeningType::Random);
        assert_eq!(OpeningType::from_name("split"), OpeningType::Split);
        assert_eq!(OpeningType::from_name("whatever"), OpeningType::Split);
        assert_eq!(OpeningType::default().name(), "split");
    }
}
