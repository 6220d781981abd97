#![forbid(unsafe_code)]

//! Drag placeholder.
//!
//! While an item floats under a touch drag, a spacer of its flow size holds
//! its slot so the rest of the container does not reflow. At most one
//! placeholder exists per board.

use dragseg_core::geometry::{Rect, Size};
use dragseg_render::{Buffer, Cell, Style};

use crate::element::{ElementId, ItemElement};
use crate::widget::Widget;

/// Spacer marking the slot a dragged item left behind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placeholder {
    owner: ElementId,
    size: Size,
    pub(crate) area: Rect,
}

impl Placeholder {
    /// The dragged element this placeholder follows in flow order.
    #[must_use]
    pub fn owner(&self) -> ElementId {
        self.owner
    }

    #[must_use]
    pub fn size(&self) -> Size {
        self.size
    }

    #[must_use]
    pub fn area(&self) -> Rect {
        self.area
    }
}

impl Widget for Placeholder {
    fn render(&self, area: Rect, buf: &mut Buffer) {
        let mut cell = Cell::from_char('·');
        Style::new().dim().apply_to(&mut cell);
        buf.fill(area, &cell);
    }
}

/// Holder for the single placeholder a board may show.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderSlot {
    current: Option<Placeholder>,
}

impl PlaceholderSlot {
    /// Place the placeholder right after `element`, sized to its last known
    /// dimensions. Replaces any existing placeholder.
    pub fn insert_after(&mut self, element: &ItemElement) {
        self.current = Some(Placeholder {
            owner: element.id(),
            size: element.last_size(),
            area: Rect::default(),
        });
    }

    pub fn remove(&mut self) -> Option<Placeholder> {
        self.current.take()
    }

    #[must_use]
    pub fn get(&self) -> Option<&Placeholder> {
        self.current.as_ref()
    }

    pub(crate) fn get_mut(&mut self) -> Option<&mut Placeholder> {
        self.current.as_mut()
    }

    /// The placeholder if it follows `id`.
    #[must_use]
    pub fn following(&self, id: ElementId) -> Option<&Placeholder> {
        self.current.as_ref().filter(|p| p.owner == id)
    }
}
