//! Color palette
//!
//! A palette is an ordered catalog of distinct color names. Colors are stored as
//! indices into the palette, so their ordering follows the declared order.

use super::code::Code;
use super::error::{CodeError, PaletteError};
use rustc_hash::FxHashMap;
use std::fmt;

/// Largest palette we accept
pub const MAX_COLORS: usize = 64;

/// The classic six colors, in declaration order
pub const DEFAULT_COLORS: [&str; 6] = ["red", "blue", "black", "white", "yellow", "green"];

/// A single color, identified by its position in the palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Color(u8);

impl Color {
    /// Create a color from its palette index
    ///
    /// # Panics
    /// Panics in debug mode if index >= `MAX_COLORS`
    #[inline]
    #[must_use]
    pub const fn new(index: u8) -> Self {
        debug_assert!((index as usize) < MAX_COLORS, "Color index out of range");
        Self(index)
    }

    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Ordered, immutable set of distinct colors
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    names: Vec<String>,
    lookup: FxHashMap<String, Color>,
}

impl Palette {
    /// Build a palette from color names
    ///
    /// Names are trimmed and lowercased.
    ///
    /// # Errors
    /// Returns `PaletteError` if the list is empty, has duplicates, or is longer
    /// than `MAX_COLORS`.
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::Palette;
    ///
    /// let palette = Palette::new(["Red", "blue"]).unwrap();
    /// assert_eq!(palette.len(), 2);
    /// assert!(Palette::new(["red", "red"]).is_err());
    /// ```
    pub fn new<I, S>(names: I) -> Result<Self, PaletteError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let names: Vec<String> = names
            .into_iter()
            .map(|n| n.as_ref().trim().to_lowercase())
            .collect();

        if names.is_empty() {
            return Err(PaletteError::Empty);
        }
        if names.len() > MAX_COLORS {
            return Err(PaletteError::TooManyColors(names.len()));
        }

        let mut lookup = FxHashMap::default();
        for (i, name) in names.iter().enumerate() {
            if lookup.insert(name.clone(), Color::new(i as u8)).is_some() {
                return Err(PaletteError::DuplicateColor(name.clone()));
            }
        }

        Ok(Self { names, lookup })
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Always false for a constructed palette, kept for API symmetry with `len`
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// All colors in declaration order
    pub fn colors(&self) -> impl ExactSizeIterator<Item = Color> + '_ {
        (0..self.names.len()).map(|i| Color::new(i as u8))
    }

    /// Name of a color
    ///
    /// # Panics
    /// Panics if the color does not belong to this palette
    #[must_use]
    pub fn name(&self, color: Color) -> &str {
        &self.names[color.index()]
    }

    /// Check whether every color of `code` belongs to this palette
    #[must_use]
    pub fn contains_code(&self, code: &Code) -> bool {
        code.iter().all(|c| c.index() < self.names.len())
    }

    /// Look up a color by name (case insensitive)
    ///
    /// # Errors
    /// Returns `CodeError::UnknownColor` if the name is not in the palette.
    pub fn parse_color(&self, name: &str) -> Result<Color, CodeError> {
        let key = name.trim().to_lowercase();
        self.lookup
            .get(&key)
            .copied()
            .ok_or(CodeError::UnknownColor(key))
    }

    /// Parse a code from whitespace or comma separated color names
    ///
    /// # Errors
    /// Returns `CodeError` if a name is unknown or the count differs from `length`.
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::Palette;
    ///
    /// let palette = Palette::default();
    /// let code = palette.parse_code("red, red blue BLUE", 4).unwrap();
    /// assert_eq!(palette.render(&code), "red red blue blue");
    /// assert!(palette.parse_code("red mauve", 2).is_err());
    /// ```
    pub fn parse_code(&self, input: &str, length: usize) -> Result<Code, CodeError> {
        let colors = input
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|s| !s.is_empty())
            .map(|name| self.parse_color(name))
            .collect::<Result<Vec<_>, _>>()?;

        if colors.len() != length {
            return Err(CodeError::WrongLength {
                expected: length,
                got: colors.len(),
            });
        }

        Ok(Code::new(colors))
    }

    /// Render a code as space separated color names
    #[must_use]
    pub fn render(&self, code: &Code) -> String {
        code.iter()
            .map(|c| self.name(c))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Default for Palette {
    fn default() -> Self {
        let names: Vec<String> = DEFAULT_COLORS.iter().map(|&s| s.to_string()).collect();
        let lookup = names
            .iter()
            .enumerate()
            .map(|(i, n)| (n.clone(), Color::new(i as u8)))
            .collect();
        Self { names, lookup }
    }
}

impl fmt::Display for Palette {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.names.join(", "))
    }
}
