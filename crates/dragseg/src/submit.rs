#![forbid(unsafe_code)]

use std::fmt;

use dragseg_core::geometry::{Position, Rect, Size};
use dragseg_render::drawing::draw_text;
use dragseg_render::{Buffer, Style};
use unicode_width::UnicodeWidthStr;

use crate::widget::Widget;

/// Callback receiving the final arrangement.
pub type SubmitFn<T> = Box<dyn FnMut(&[Vec<T>])>;

/// The trigger control appended below the containers: `[ Submit ]`.
pub struct SubmitButton<T> {
    label: String,
    on_submit: SubmitFn<T>,
    pub(crate) area: Rect,
}

impl<T> fmt::Debug for SubmitButton<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubmitButton")
            .field("label", &self.label)
            .field("area", &self.area)
            .finish_non_exhaustive()
    }
}

impl<T> SubmitButton<T> {
    pub(crate) fn new(label: impl Into<String>, on_submit: SubmitFn<T>) -> Self {
        Self {
            label: label.into(),
            on_submit,
            area: Rect::default(),
        }
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn area(&self) -> Rect {
        self.area
    }

    #[must_use]
    pub fn size(&self) -> Size {
        let width = u16::try_from(self.label.width().saturating_add(4)).unwrap_or(u16::MAX);
        Size::new(width, 1)
    }

    #[must_use]
    pub fn contains(&self, point: Position) -> bool {
        self.area.contains_pos(point)
    }

    pub(crate) fn fire(&mut self, arrangement: &[Vec<T>]) {
        (self.on_submit)(arrangement);
    }
}

impl<T> Widget for SubmitButton<T> {
    fn render(&self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        let style = Style::new().bold();
        let max_x = area.right();
        let x = draw_text(buf, area.x, area.y, "[ ", style, max_x);
        let x = draw_text(buf, x, area.y, &self.label, style, max_x.saturating_sub(2));
        draw_text(buf, x, area.y, " ]", style, max_x);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn renders_bracketed_label() {
        let button: SubmitButton<u8> = SubmitButton::new("Go", Box::new(|_| {}));
        assert_eq!(button.size(), Size::new(6, 1));
        let mut buf = Buffer::new(8, 1);
        button.render(Rect::new(0, 0, 6, 1), &mut buf);
        assert_eq!(buf.row_text(0), "[ Go ]  ");
    }

    #[test]
    fn fire_passes_arrangement() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let mut button: SubmitButton<char> = SubmitButton::new(
            "Submit",
            Box::new(move |arr: &[Vec<char>]| sink.borrow_mut().push(arr.to_vec())),
        );
        button.fire(&[vec!['a'], vec![]]);
        assert_eq!(*seen.borrow(), vec![vec![vec!['a'], vec![]]]);
    }

    #[test]
    fn hit_test_uses_last_area() {
        let mut button: SubmitButton<u8> = SubmitButton::new("Ok", Box::new(|_| {}));
        assert!(!button.contains(Position::new(0, 0)));
        button.area = Rect::new(0, 9, 6, 1);
        assert!(button.contains(Position::new(5, 9)));
        assert!(!button.contains(Position::new(6, 9)));
    }
}
