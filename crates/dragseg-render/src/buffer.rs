#![forbid(unsafe_code)]

//! Fixed-size grid of cells.
//!
//! Writes outside the grid are dropped silently so widgets can clip by
//! simply not caring about the edge.

use dragseg_core::geometry::Rect;

use crate::cell::Cell;
use crate::style::Style;

/// A row-major grid of [`Cell`]s.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Buffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Buffer {
    /// Create a blank buffer.
    #[must_use]
    pub fn new(width: u16, height: u16) -> Self {
        let len = usize::from(width) * usize::from(height);
        Self {
            width,
            height,
            cells: vec![Cell::default(); len],
        }
    }

    #[inline]
    pub const fn width(&self) -> u16 {
        self.width
    }

    #[inline]
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// The whole buffer as a rectangle at the origin.
    #[inline]
    pub const fn area(&self) -> Rect {
        Rect::new(0, 0, self.width, self.height)
    }

    #[inline]
    fn index_of(&self, x: u16, y: u16) -> Option<usize> {
        (x < self.width && y < self.height)
            .then(|| usize::from(y) * usize::from(self.width) + usize::from(x))
    }

    /// Cell at `(x, y)`, or `None` outside the grid.
    #[must_use]
    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        self.index_of(x, y).map(|i| &self.cells[i])
    }

    /// Mutable cell at `(x, y)`, or `None` outside the grid.
    pub fn get_mut(&mut self, x: u16, y: u16) -> Option<&mut Cell> {
        self.index_of(x, y).map(|i| &mut self.cells[i])
    }

    /// Replace the cell at `(x, y)`. Out-of-bounds writes are ignored.
    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(slot) = self.get_mut(x, y) {
            *slot = cell;
        }
    }

    /// Fill a rectangle (clipped to the grid) with copies of `cell`.
    pub fn fill(&mut self, rect: Rect, cell: &Cell) {
        let Some(clip) = rect.intersection_opt(&self.area()) else {
            return;
        };
        for y in clip.y..clip.bottom() {
            for x in clip.x..clip.right() {
                self.set(x, y, cell.clone());
            }
        }
    }

    /// Apply a style to every cell in a rectangle without touching symbols.
    pub fn set_style_area(&mut self, rect: Rect, style: Style) {
        let Some(clip) = rect.intersection_opt(&self.area()) else {
            return;
        };
        for y in clip.y..clip.bottom() {
            for x in clip.x..clip.right() {
                if let Some(cell) = self.get_mut(x, y) {
                    style.apply_to(cell);
                }
            }
        }
    }

    /// Reset every cell to blank.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::default());
    }

    /// Row `y` as plain text, skipping wide-grapheme continuation cells.
    ///
    /// Handy for snapshot-style assertions in tests.
    #[must_use]
    pub fn row_text(&self, y: u16) -> String {
        let mut out = String::new();
        for x in 0..self.width {
            if let Some(cell) = self.get(x, y)
                && !cell.is_continuation()
            {
                out.push_str(&cell.symbol);
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::{Rgb, StyleFlags};

    #[test]
    fn new_buffer_is_blank() {
        let buf = Buffer::new(4, 2);
        assert_eq!(buf.row_text(0), "    ");
        assert_eq!(buf.row_text(1), "    ");
        assert_eq!(buf.area(), Rect::new(0, 0, 4, 2));
    }

    #[test]
    fn out_of_bounds_access() {
        let mut buf = Buffer::new(2, 2);
        assert!(buf.get(2, 0).is_none());
        assert!(buf.get(0, 2).is_none());
        buf.set(5, 5, Cell::from_char('x'));
        assert_eq!(buf.row_text(0), "  ");
    }

    #[test]
    fn fill_clips_to_grid() {
        let mut buf = Buffer::new(3, 2);
        buf.fill(Rect::new(1, 1, 10, 10), &Cell::from_char('#'));
        assert_eq!(buf.row_text(0), "   ");
        assert_eq!(buf.row_text(1), " ##");
    }

    #[test]
    fn style_area_keeps_symbols() {
        let mut buf = Buffer::new(3, 1);
        buf.set(0, 0, Cell::from_char('a'));
        buf.set_style_area(Rect::new(0, 0, 2, 1), Style::new().fg(Rgb::RED).bold());
        let cell = buf.get(0, 0).expect("cell");
        assert_eq!(cell.as_char(), Some('a'));
        assert_eq!(cell.fg, Some(Rgb::RED));
        assert!(cell.flags.contains(StyleFlags::BOLD));
        assert_eq!(buf.get(2, 0).expect("cell").fg, None);
    }

    #[test]
    fn clear_resets() {
        let mut buf = Buffer::new(2, 1);
        buf.set(0, 0, Cell::from_char('z'));
        buf.clear();
        assert_eq!(buf.row_text(0), "  ");
    }
}
