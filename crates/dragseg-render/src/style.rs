#![forbid(unsafe_code)]

//! Styles: optional colors plus attribute flags, layered with [`Style::patch`].

use crate::cell::{Cell, Rgb, StyleFlags};

/// A partial style. `None` colors leave the underlying cell untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    pub fg: Option<Rgb>,
    pub bg: Option<Rgb>,
    pub flags: StyleFlags,
}

impl Style {
    /// Empty style.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            fg: None,
            bg: None,
            flags: StyleFlags::empty(),
        }
    }

    #[must_use]
    pub const fn fg(mut self, color: Rgb) -> Self {
        self.fg = Some(color);
        self
    }

    #[must_use]
    pub const fn bg(mut self, color: Rgb) -> Self {
        self.bg = Some(color);
        self
    }

    #[must_use]
    pub fn bold(self) -> Self {
        self.add_flags(StyleFlags::BOLD)
    }

    #[must_use]
    pub fn dim(self) -> Self {
        self.add_flags(StyleFlags::DIM)
    }

    #[must_use]
    pub fn underline(self) -> Self {
        self.add_flags(StyleFlags::UNDERLINE)
    }

    #[must_use]
    pub fn reverse(self) -> Self {
        self.add_flags(StyleFlags::REVERSE)
    }

    /// Add attribute flags.
    #[must_use]
    pub fn add_flags(mut self, flags: StyleFlags) -> Self {
        self.flags |= flags;
        self
    }

    /// Overlay `other` on top of `self`: colors set in `other` win, flags merge.
    #[must_use]
    pub fn patch(self, other: Style) -> Self {
        Self {
            fg: other.fg.or(self.fg),
            bg: other.bg.or(self.bg),
            flags: self.flags | other.flags,
        }
    }

    /// Apply this style to a cell in place.
    pub fn apply_to(&self, cell: &mut Cell) {
        if let Some(fg) = self.fg {
            cell.fg = Some(fg);
        }
        if let Some(bg) = self.bg {
            cell.bg = Some(bg);
        }
        cell.flags |= self.flags;
    }
}
