#![forbid(unsafe_code)]

//! Cell geometry shared by layout, hit testing, and drop resolution.
//!
//! All coordinates are terminal cells: 0-indexed, origin at top-left, right
//! and bottom edges exclusive.

/// A 2D cell position (a pointer or touch point).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub x: u16,
    pub y: u16,
}

impl Position {
    /// Create a new position.
    #[must_use]
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }

    /// Manhattan distance to another position.
    #[must_use]
    pub fn manhattan_distance(self, other: Self) -> u32 {
        u32::from(self.x.abs_diff(other.x)) + u32::from(self.y.abs_diff(other.y))
    }
}

impl From<(u16, u16)> for Position {
    fn from((x, y): (u16, u16)) -> Self {
        Self { x, y }
    }
}

/// Width and height of something laid out in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Size {
    pub width: u16,
    pub height: u16,
}

impl Size {
    /// Create a new size.
    #[must_use]
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// True when either dimension is zero.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// A rectangle used for layout bounds and hit testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    /// Left edge (inclusive).
    pub x: u16,
    /// Top edge (inclusive).
    pub y: u16,
    /// Width in cells.
    pub width: u16,
    /// Height in cells.
    pub height: u16,
}

impl Rect {
    /// Create a new rectangle.
    #[inline]
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle at `origin` with the given size.
    #[inline]
    pub const fn at(origin: Position, size: Size) -> Self {
        Self::new(origin.x, origin.y, size.width, size.height)
    }

    /// Right edge (exclusive).
    #[inline]
    pub const fn right(&self) -> u16 {
        self.x.saturating_add(self.width)
    }

    /// Bottom edge (exclusive).
    #[inline]
    pub const fn bottom(&self) -> u16 {
        self.y.saturating_add(self.height)
    }

    /// Size of the rectangle.
    #[inline]
    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Check if the rectangle has zero area.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Check if a point is inside the rectangle.
    #[inline]
    pub const fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Check if a position is inside the rectangle.
    #[inline]
    pub const fn contains_pos(&self, pos: Position) -> bool {
        self.contains(pos.x, pos.y)
    }

    /// True when `y` falls within the vertical extent (row membership).
    #[inline]
    pub const fn spans_y(&self, y: u16) -> bool {
        self.height > 0 && y >= self.y && y < self.bottom()
    }

    /// Doubled horizontal midpoint: `2 * x + width`.
    ///
    /// Compare against `2 * px` to decide left/right of center without
    /// losing the half cell on odd widths.
    #[inline]
    pub const fn center_x2(&self) -> u32 {
        2 * self.x as u32 + self.width as u32
    }

    /// True when `x` lies strictly right of the horizontal midpoint.
    #[inline]
    pub const fn is_right_of_center(&self, x: u16) -> bool {
        2 * x as u32 > self.center_x2()
    }

    /// Create a new rectangle inside the current one with the given margin.
    pub fn inner(&self, margin: Sides) -> Rect {
        Rect {
            x: self.x.saturating_add(margin.left),
            y: self.y.saturating_add(margin.top),
            width: self.width.saturating_sub(margin.horizontal_sum()),
            height: self.height.saturating_sub(margin.vertical_sum()),
        }
    }

    /// Compute the intersection with another rectangle, returning `None` if no overlap.
    #[inline]
    pub fn intersection_opt(&self, other: &Rect) -> Option<Rect> {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());

        if x < right && y < bottom {
            Some(Rect::new(x, y, right - x, bottom - y))
        } else {
            None
        }
    }

    /// Rectangle of `size` centered on `anchor`, clamped to stay inside `bounds`.
    #[must_use]
    pub fn centered_on(anchor: Position, size: Size, bounds: Rect) -> Rect {
        let half_w = size.width / 2;
        let half_h = size.height / 2;
        let max_x = bounds.right().saturating_sub(size.width).max(bounds.x);
        let max_y = bounds.bottom().saturating_sub(size.height).max(bounds.y);
        let x = anchor.x.saturating_sub(half_w).clamp(bounds.x, max_x);
        let y = anchor.y.saturating_sub(half_h).clamp(bounds.y, max_y);
        Rect::new(
            x,
            y,
            size.width.min(bounds.right().saturating_sub(x)),
            size.height.min(bounds.bottom().saturating_sub(y)),
        )
    }
}

/// Sides for padding, margins, and borders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Sides {
    pub top: u16,
    pub right: u16,
    pub bottom: u16,
    pub left: u16,
}

impl Sides {
    /// Equal value on every side.
    pub const fn all(val: u16) -> Self {
        Self {
            top: val,
            right: val,
            bottom: val,
            left: val,
        }
    }

    /// Sum of left and right.
    #[inline]
    pub const fn horizontal_sum(&self) -> u16 {
        self.left.saturating_add(self.right)
    }

    /// Sum of top and bottom.
    #[inline]
    pub const fn vertical_sum(&self) -> u16 {
        self.top.saturating_add(self.bottom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_contains_edges() {
        let rect = Rect::new(2, 3, 4, 5);
        assert!(rect.contains(2, 3));
        assert!(rect.contains(5, 7));
        assert!(!rect.contains(6, 3));
        assert!(!rect.contains(2, 8));
    }

    #[test]
    fn spans_y_ignores_x() {
        let rect = Rect::new(10, 4, 3, 2);
        assert!(rect.spans_y(4));
        assert!(rect.spans_y(5));
        assert!(!rect.spans_y(6));
        assert!(!Rect::new(0, 4, 3, 0).spans_y(4));
    }

    #[test]
    fn midpoint_odd_width() {
        // x=0 width=5 -> center at 2.5
        let rect = Rect::new(0, 0, 5, 1);
        assert!(!rect.is_right_of_center(2));
        assert!(rect.is_right_of_center(3));
    }

    #[test]
    fn midpoint_even_width() {
        // x=4 width=4 -> center at 6.0; the center cell itself is not right of it
        let rect = Rect::new(4, 0, 4, 1);
        assert!(!rect.is_right_of_center(6));
        assert!(rect.is_right_of_center(7));
    }

    #[test]
    fn inner_shrinks_by_border() {
        let rect = Rect::new(0, 0, 10, 4);
        assert_eq!(rect.inner(Sides::all(1)), Rect::new(1, 1, 8, 2));
        assert_eq!(Rect::new(0, 0, 1, 1).inner(Sides::all(1)).size(), Size::new(0, 0));
    }

    #[test]
    fn intersection_opt_disjoint() {
        let a = Rect::new(0, 0, 2, 2);
        assert_eq!(a.intersection_opt(&Rect::new(2, 0, 2, 2)), None);
        assert_eq!(
            a.intersection_opt(&Rect::new(1, 1, 4, 4)),
            Some(Rect::new(1, 1, 1, 1))
        );
    }

    #[test]
    fn centered_on_clamps_to_bounds() {
        let bounds = Rect::new(0, 0, 20, 10);
        let r = Rect::centered_on(Position::new(10, 5), Size::new(4, 2), bounds);
        assert_eq!(r, Rect::new(8, 4, 4, 2));

        let corner = Rect::centered_on(Position::new(0, 0), Size::new(4, 2), bounds);
        assert_eq!(corner, Rect::new(0, 0, 4, 2));

        let far = Rect::centered_on(Position::new(19, 9), Size::new(4, 2), bounds);
        assert_eq!(far, Rect::new(16, 8, 4, 2));
    }

    #[test]
    fn manhattan_distance_is_symmetric() {
        let a = Position::new(3, 9);
        let b = Position::new(7, 2);
        assert_eq!(a.manhattan_distance(b), 11);
        assert_eq!(b.manhattan_distance(a), 11);
    }
}
