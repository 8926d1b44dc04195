//! Code representation
//!
//! A `Code` is an ordered sequence of colors. Repetition is allowed.

use super::palette::{Color, Palette};
use rand::Rng;
use std::fmt;

/// An ordered sequence of palette colors
///
/// Ordering is lexicographic over palette positions, which is also the
/// enumeration order of the code space.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Code(Vec<Color>);

impl Code {
    #[must_use]
    pub const fn new(colors: Vec<Color>) -> Self {
        Self(colors)
    }

    /// Draw a uniformly random code of `length` colors from `palette`
    ///
    /// Colors may repeat.
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::{Code, Palette};
    ///
    /// let palette = Palette::default();
    /// let code = Code::random(&palette, 4, &mut rand::rng());
    /// assert_eq!(code.len(), 4);
    /// assert!(palette.contains_code(&code));
    /// ```
    pub fn random<R: Rng + ?Sized>(palette: &Palette, length: usize, rng: &mut R) -> Self {
        let colors = (0..length)
            .map(|_| Color::new(rng.random_range(0..palette.len()) as u8))
            .collect();
        Self(colors)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn colors(&self) -> &[Color] {
        &self.0
    }

    /// Iterate over the colors by value
    pub fn iter(&self) -> impl ExactSizeIterator<Item = Color> + '_ {
        self.0.iter().copied()
    }
}

impl From<Vec<Color>> for Code {
    fn from(colors: Vec<Color>) -> Self {
        Self(colors)
    }
}

/// Palette-independent rendering using color indices, e.g. `[0 0 1 1]`
impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, color) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", color.index())?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn code(indices: &[u8]) -> Code {
        Code::new(indices.iter().map(|&i| Color::new(i)).collect())
    }

    #[test]
    fn code_display_uses_indices() {
        assert_eq!(code(&[0, 0, 1, 1]).to_string(), "[0 0 1 1]");
        assert_eq!(code(&[]).to_string(), "[]");
    }

    #[test]
    fn code_ordering_is_lexicographic() {
        assert!(code(&[0, 0, 0, 1]) < code(&[0, 0, 1, 0]));
        assert!(code(&[1, 0, 0, 0]) > code(&[0, 5, 5, 5]));
    }

    #[test]
    fn random_code_respects_palette_and_length() {
        let palette = Palette::new(["a", "b", "c"]).unwrap();
        let mut rng = StdRng::seed_from_u64(7);

        for length in 1..=12 {
            let c = Code::random(&palette, length, &mut rng);
            assert_eq!(c.len(), length);
            assert!(palette.contains_code(&c));
        }
    }

    #[test]
    fn random_code_is_reproducible_with_seed() {
        let palette = Palette::default();
        let a = Code::random(&palette, 6, &mut StdRng::seed_from_u64(42));
        let b = Code::random(&palette, 6, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn single_color_palette_random_is_constant() {
        let palette = Palette::new(["only"]).unwrap();
        let c = Code::random(&palette, 3, &mut StdRng::seed_from_u64(1));
        assert_eq!(c, code(&[0, 0, 0]));
    }
}
