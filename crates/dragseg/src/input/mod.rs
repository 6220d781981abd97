#![forbid(unsafe_code)]

//! Input adapters.
//!
//! Each adapter turns one modality's raw events into an intent. The adapters
//! never touch the engine: the board resolves every intent through the same
//! geometry and move path, which is what keeps mouse, touch and keyboard
//! consistent with each other.
//!
//! | Adapter | Per-gesture state |
//! |---------|-------------------|
//! | [`pointer::PointerAdapter`] | pressed target, origin, dragging flag |
//! | [`touch::TouchAdapter`] | dragged element and its placement snapshot |
//! | [`keyboard`] | none |

pub mod keyboard;
pub mod pointer;
pub mod touch;

use crate::element::{ElementId, Placement};

/// What lies under an input coordinate, as seen by an adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Hit {
    /// Topmost element under the point.
    pub element: Option<ElementHit>,
    /// Whether the point is on the submit control.
    pub submit: bool,
}

/// An element under the point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementHit {
    pub id: ElementId,
    pub fixed: bool,
    pub placement: Placement,
}

impl Hit {
    /// The hit element, if it can be dragged.
    #[must_use]
    pub fn draggable(&self) -> Option<ElementHit> {
        self.element.filter(|hit| !hit.fixed)
    }

    #[must_use]
    pub fn element_id(&self) -> Option<ElementId> {
        self.element.map(|hit| hit.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_hits_are_not_draggable() {
        let hit = Hit {
            element: Some(ElementHit {
                id: ElementId(1),
                fixed: true,
                placement: Placement::Flow,
            }),
            submit: false,
        };
        assert_eq!(hit.element_id(), Some(ElementId(1)));
        assert!(hit.draggable().is_none());
        assert!(Hit::default().element_id().is_none());
    }
}
