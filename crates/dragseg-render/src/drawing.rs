#![forbid(unsafe_code)]

//! Drawing helpers: clipped text spans and box borders.

use dragseg_core::geometry::Rect;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use crate::buffer::Buffer;
use crate::cell::Cell;
use crate::style::Style;

/// Glyphs for the eight pieces of a box border.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderSet {
    pub top_left: char,
    pub top_right: char,
    pub bottom_left: char,
    pub bottom_right: char,
    pub horizontal: char,
    pub vertical: char,
}

impl BorderSet {
    pub const PLAIN: Self = Self {
        top_left: '┌',
        top_right: '┐',
        bottom_left: '└',
        bottom_right: '┘',
        horizontal: '─',
        vertical: '│',
    };

    pub const DOUBLE: Self = Self {
        top_left: '╔',
        top_right: '╗',
        bottom_left: '╚',
        bottom_right: '╝',
        horizontal: '═',
        vertical: '║',
    };

    pub const HEAVY: Self = Self {
        top_left: '┏',
        top_right: '┓',
        bottom_left: '┗',
        bottom_right: '┛',
        horizontal: '━',
        vertical: '┃',
    };
}

fn styled(ch: char, style: Style) -> Cell {
    let mut cell = Cell::from_char(ch);
    style.apply_to(&mut cell);
    cell
}

/// Draw `text` starting at `(x, y)`, never writing at or past `max_x`.
///
/// Graphemes that would straddle `max_x` are dropped whole. Returns the
/// column just after the last written grapheme.
pub fn draw_text(buf: &mut Buffer, x: u16, y: u16, text: &str, style: Style, max_x: u16) -> u16 {
    let mut cx = x;
    for grapheme in text.graphemes(true) {
        let width = grapheme.width();
        if width == 0 {
            continue;
        }
        let width = u16::try_from(width).unwrap_or(u16::MAX);
        if cx.saturating_add(width) > max_x {
            break;
        }
        let mut cell = Cell::from_symbol(grapheme);
        style.apply_to(&mut cell);
        buf.set(cx, y, cell);
        for tail in 1..width {
            let mut cont = Cell::from_symbol(Cell::CONTINUATION);
            style.apply_to(&mut cont);
            buf.set(cx + tail, y, cont);
        }
        cx += width;
    }
    cx
}

/// Draw a box border along the edge of `rect`.
///
/// Rectangles smaller than 2x2 have no room for corners and are skipped.
pub fn draw_border(buf: &mut Buffer, rect: Rect, set: BorderSet, style: Style) {
    if rect.width < 2 || rect.height < 2 {
        return;
    }
    let right = rect.right() - 1;
    let bottom = rect.bottom() - 1;

    buf.set(rect.x, rect.y, styled(set.top_left, style));
    buf.set(right, rect.y, styled(set.top_right, style));
    buf.set(rect.x, bottom, styled(set.bottom_left, style));
    buf.set(right, bottom, styled(set.bottom_right, style));

    for x in (rect.x + 1)..right {
        buf.set(x, rect.y, styled(set.horizontal, style));
        buf.set(x, bottom, styled(set.horizontal, style));
    }
    for y in (rect.y + 1)..bottom {
        buf.set(rect.x, y, styled(set.vertical, style));
        buf.set(right, y, styled(set.vertical, style));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_clips_at_max_x() {
        let mut buf = Buffer::new(8, 1);
        let end = draw_text(&mut buf, 1, 0, "hello world", Style::new(), 5);
        assert_eq!(end, 5);
        assert_eq!(buf.row_text(0), " hell   ");
    }

    #[test]
    fn wide_grapheme_not_split() {
        let mut buf = Buffer::new(4, 1);
        // "日" is two cells wide; only one fits before max_x=3 after "a"+"日"
        let end = draw_text(&mut buf, 0, 0, "a日日", Style::new(), 4);
        assert_eq!(end, 3);
        assert_eq!(buf.row_text(0), "a日 ");
        assert!(buf.get(2, 0).expect("cell").is_continuation());
    }

    #[test]
    fn border_plain_box() {
        let mut buf = Buffer::new(4, 3);
        draw_border(&mut buf, Rect::new(0, 0, 4, 3), BorderSet::PLAIN, Style::new());
        assert_eq!(buf.row_text(0), "┌──┐");
        assert_eq!(buf.row_text(1), "│  │");
        assert_eq!(buf.row_text(2), "└──┘");
    }

    #[test]
    fn border_too_small_is_skipped() {
        let mut buf = Buffer::new(3, 3);
        draw_border(&mut buf, Rect::new(0, 0, 1, 3), BorderSet::DOUBLE, Style::new());
        assert_eq!(buf.row_text(0), "   ");
    }
}
