#![forbid(unsafe_code)]

use bitflags::bitflags;
use dragseg_core::geometry::{Rect, Sides};
use dragseg_render::drawing::{BorderSet, draw_border, draw_text};
use dragseg_render::{Buffer, Rgb, Style};

use crate::widget::Widget;

bitflags! {
    /// Derived visual state of a container shell.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ContainerMarks: u8 {
        /// The container's validator currently fails.
        const INVALID       = 0b0001;
        /// A drag is hovering over this container.
        const DROP_TARGET   = 0b0010;
        /// The hovering drag would be refused here.
        const DROP_REJECTED = 0b0100;
    }
}

/// The empty visual frame one container's items are laid out in.
///
/// Produced by the caller's container factory. Marks and area are owned by
/// the board and overwritten on every layout pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerShell {
    title: Option<String>,
    bordered: bool,
    style: Style,
    pub(crate) area: Rect,
    pub(crate) marks: ContainerMarks,
}

impl Default for ContainerShell {
    fn default() -> Self {
        Self {
            title: None,
            bordered: true,
            style: Style::new(),
            area: Rect::default(),
            marks: ContainerMarks::empty(),
        }
    }
}

impl ContainerShell {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Drop the border. Marks are then shown only through the title style.
    #[must_use]
    pub fn borderless(mut self) -> Self {
        self.bordered = false;
        self
    }

    #[must_use]
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn area(&self) -> Rect {
        self.area
    }

    #[must_use]
    pub fn marks(&self) -> ContainerMarks {
        self.marks
    }

    /// Area items flow into.
    #[must_use]
    pub fn inner(&self, area: Rect) -> Rect {
        if self.bordered {
            area.inner(Sides::all(1))
        } else {
            area
        }
    }

    fn border_set(&self) -> BorderSet {
        if self.marks.contains(ContainerMarks::DROP_TARGET) {
            BorderSet::DOUBLE
        } else {
            BorderSet::PLAIN
        }
    }

    fn border_style(&self) -> Style {
        if self.marks.contains(ContainerMarks::DROP_TARGET) {
            let color = if self.marks.contains(ContainerMarks::DROP_REJECTED) {
                Rgb::RED
            } else {
                Rgb::GREEN
            };
            self.style.fg(color)
        } else if self.marks.contains(ContainerMarks::INVALID) {
            self.style.fg(Rgb::RED)
        } else {
            self.style
        }
    }
}

impl Widget for ContainerShell {
    fn render(&self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        let style = self.border_style();
        if self.bordered {
            draw_border(buf, area, self.border_set(), style);
        }
        if let Some(title) = &self.title {
            let (x, max_x) = if self.bordered {
                (area.x.saturating_add(1), area.right().saturating_sub(1))
            } else {
                (area.x, area.right())
            };
            draw_text(buf, x, area.y, title, style.bold(), max_x);
        }
    }
}
