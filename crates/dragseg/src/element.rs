#![forbid(unsafe_code)]

//! Item identity, positions, and the rendered element wrapper.
//!
//! An [`ItemPos`] says where an item is *now*; it shifts whenever an earlier
//! item leaves or enters the container. An [`ElementId`] never changes for
//! the lifetime of the widget, so anything that must follow an item across
//! moves (focus, an active touch gesture, the placeholder) holds the id and
//! looks the position up in the engine's side table.

use std::fmt;

use bitflags::bitflags;
use dragseg_core::geometry::{Position, Rect, Size};

use crate::widget::ItemWidget;

/// Current location of an item: `(container, index)`, both 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "state-persistence",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct ItemPos {
    pub container: usize,
    pub index: usize,
}

impl ItemPos {
    #[must_use]
    pub const fn new(container: usize, index: usize) -> Self {
        Self { container, index }
    }
}

impl From<(usize, usize)> for ItemPos {
    fn from((container, index): (usize, usize)) -> Self {
        Self { container, index }
    }
}

impl fmt::Display for ItemPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.container, self.index)
    }
}

/// Stable identity of one rendered element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub u32);

bitflags! {
    /// Visual state carried by an element.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ElementMarks: u8 {
        /// Selected for a keyboard move or an active drag.
        const SELECTED = 0b0001;
        /// Holds input focus.
        const FOCUSED  = 0b0010;
        /// Immovable.
        const FIXED    = 0b0100;
    }
}

/// How an element is placed by layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Placement {
    /// Laid out in its container's flow.
    #[default]
    Flow,
    /// Taken out of flow and drawn centered on `anchor`, above everything else.
    Floating { anchor: Position, z: u16 },
}

impl Placement {
    /// z-index used while an element tracks a finger.
    pub const DRAG_Z: u16 = 1000;

    #[must_use]
    pub const fn is_floating(&self) -> bool {
        matches!(self, Self::Floating { .. })
    }
}

/// One rendered item: the caller's visual plus layout and mark state.
pub struct ItemElement {
    id: ElementId,
    visual: Box<dyn ItemWidget>,
    pub(crate) area: Rect,
    pub(crate) placement: Placement,
    pub(crate) marks: ElementMarks,
}

impl fmt::Debug for ItemElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ItemElement")
            .field("id", &self.id)
            .field("area", &self.area)
            .field("placement", &self.placement)
            .field("marks", &self.marks)
            .finish_non_exhaustive()
    }
}

impl ItemElement {
    pub(crate) fn new(id: ElementId, visual: Box<dyn ItemWidget>) -> Self {
        Self {
            id,
            visual,
            area: Rect::default(),
            placement: Placement::Flow,
            marks: ElementMarks::empty(),
        }
    }

    #[must_use]
    pub fn id(&self) -> ElementId {
        self.id
    }

    /// Area assigned by the last layout pass.
    #[must_use]
    pub fn area(&self) -> Rect {
        self.area
    }

    #[must_use]
    pub fn placement(&self) -> Placement {
        self.placement
    }

    #[must_use]
    pub fn marks(&self) -> ElementMarks {
        self.marks
    }

    /// Natural size reported by the visual.
    #[must_use]
    pub fn size(&self) -> Size {
        self.visual.size()
    }

    /// Last known on-screen size, falling back to the natural size before
    /// the first layout.
    #[must_use]
    pub fn last_size(&self) -> Size {
        if self.area.is_empty() {
            self.size()
        } else {
            self.area.size()
        }
    }

    pub(crate) fn visual(&self) -> &dyn ItemWidget {
        self.visual.as_ref()
    }
}
