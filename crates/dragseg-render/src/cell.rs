#![forbid(unsafe_code)]

//! Cell and color primitives.

use std::fmt;

/// A 24-bit color packed as `0x00RRGGBB`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb(pub u32);

impl Rgb {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);
    pub const RED: Self = Self::new(220, 50, 47);
    pub const GREEN: Self = Self::new(133, 153, 0);
    pub const BLUE: Self = Self::new(38, 139, 210);
    pub const GRAY: Self = Self::new(128, 128, 128);

    /// Pack red, green and blue channels.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    #[inline]
    pub const fn r(self) -> u8 {
        (self.0 >> 16) as u8
    }

    #[inline]
    pub const fn g(self) -> u8 {
        (self.0 >> 8) as u8
    }

    #[inline]
    pub const fn b(self) -> u8 {
        self.0 as u8
    }
}

impl fmt::Debug for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r(), self.g(), self.b())
    }
}

bitflags::bitflags! {
    /// Cell style flags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct StyleFlags: u8 {
        /// Bold / increased intensity.
        const BOLD      = 0b0000_0001;
        /// Dim / decreased intensity.
        const DIM       = 0b0000_0010;
        /// Italic text.
        const ITALIC    = 0b0000_0100;
        /// Underlined text.
        const UNDERLINE = 0b0000_1000;
        /// Reverse video (swap fg/bg).
        const REVERSE   = 0b0010_0000;
    }
}

/// One terminal cell.
///
/// Wide graphemes occupy their first cell; the following cells hold
/// [`Cell::CONTINUATION`] so the grid width stays exact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub symbol: String,
    pub fg: Option<Rgb>,
    pub bg: Option<Rgb>,
    pub flags: StyleFlags,
}

impl Cell {
    /// Marker symbol for the trailing half of a wide grapheme.
    pub const CONTINUATION: &'static str = "";

    /// A cell holding a single character with no styling.
    #[must_use]
    pub fn from_char(ch: char) -> Self {
        Self {
            symbol: ch.to_string(),
            ..Self::default()
        }
    }

    /// A cell holding one grapheme cluster.
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Self {
        Self {
            symbol: symbol.to_string(),
            ..Self::default()
        }
    }

    /// First character of the symbol, if any.
    #[must_use]
    pub fn as_char(&self) -> Option<char> {
        self.symbol.chars().next()
    }

    /// True for the trailing half of a wide grapheme.
    #[must_use]
    pub fn is_continuation(&self) -> bool {
        self.symbol.is_empty()
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            symbol: " ".to_string(),
            fg: None,
            bg: None,
            flags: StyleFlags::empty(),
        }
    }
}
