#![forbid(unsafe_code)]

//! Rendering seams: the [`Widget`] trait and item visuals.

use dragseg_core::geometry::{Rect, Size};
use dragseg_render::Buffer;
use dragseg_render::Style;
use dragseg_render::drawing::draw_text;
use unicode_width::UnicodeWidthStr;

/// A `Widget` is a renderable component.
///
/// Widgets render themselves into a [`Buffer`] within a given [`Rect`].
pub trait Widget {
    /// Render the widget into the buffer at the given area.
    fn render(&self, area: Rect, buf: &mut Buffer);
}

/// The visual produced for one item by the caller's transform.
///
/// `size` is the item's natural footprint. Layout uses it to flow items into
/// rows, and the drag placeholder copies it so the vacated slot keeps its
/// shape.
pub trait ItemWidget: Widget {
    fn size(&self) -> Size;
}

/// A one-line bracketed label: `[label]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chip {
    label: String,
    style: Style,
}

impl Chip {
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            style: Style::new(),
        }
    }

    #[must_use]
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }
}

impl Widget for Chip {
    fn render(&self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        let max_x = area.right();
        let x = draw_text(buf, area.x, area.y, "[", self.style, max_x);
        let x = draw_text(buf, x, area.y, &self.label, self.style, max_x.saturating_sub(1));
        draw_text(buf, x, area.y, "]", self.style, max_x);
    }
}

impl ItemWidget for Chip {
    fn size(&self) -> Size {
        let width = u16::try_from(self.label.width().saturating_add(2)).unwrap_or(u16::MAX);
        Size::new(width, 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chip_size_counts_brackets() {
        assert_eq!(Chip::new("abc").size(), Size::new(5, 1));
        assert_eq!(Chip::new("").size(), Size::new(2, 1));
        assert_eq!(Chip::new("日本").size(), Size::new(6, 1));
    }

    #[test]
    fn chip_renders_label() {
        let mut buf = Buffer::new(8, 1);
        Chip::new("ab").render(Rect::new(1, 0, 4, 1), &mut buf);
        assert_eq!(buf.row_text(0), " [ab]   ");
    }

    #[test]
    fn chip_truncates_but_keeps_closing_bracket() {
        let mut buf = Buffer::new(6, 1);
        Chip::new("abcdef").render(Rect::new(0, 0, 5, 1), &mut buf);
        assert_eq!(buf.row_text(0), "[abc] ");
    }
}
