#![forbid(unsafe_code)]

//! Touch drag.
//!
//! The per-gesture record holds the dragged element and a snapshot of its
//! placement taken at touch start. The board restores that snapshot on end
//! and on cancel, so the element is back in flow before the drop point is
//! resolved.

use dragseg_core::event::{TouchEvent, TouchPhase};
use dragseg_core::geometry::Position;

use super::Hit;
use crate::element::{ElementId, Placement};

/// What a touch event asks the board to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchIntent {
    Ignore,
    /// A touch began on `hit`. Offered to the outside-click subscription.
    Tap { hit: Option<ElementId> },
    /// A touch began on a draggable element, which should be selected.
    Start { element: ElementId, hit: Option<ElementId> },
    /// The finger moved; the element should follow `at`. `first` is set on
    /// the gesture's first move, when the element leaves the flow.
    Move {
        element: ElementId,
        at: Position,
        first: bool,
    },
    /// The finger lifted. `at` is `None` when the event carried no point.
    End {
        element: ElementId,
        original: Placement,
        at: Option<Position>,
    },
    /// The platform cancelled the gesture.
    Cancel {
        element: ElementId,
        original: Placement,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Gesture {
    element: ElementId,
    original: Placement,
    moved: bool,
}

/// Touch adapter state.
#[derive(Debug, Clone, Default)]
pub struct TouchAdapter {
    gesture: Option<Gesture>,
}

impl TouchAdapter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The element under an active gesture.
    #[must_use]
    pub fn active(&self) -> Option<ElementId> {
        self.gesture.map(|g| g.element)
    }

    /// Translate one touch event. `hit` describes what lies under the
    /// primary point (default when there is none).
    pub fn on_touch(&mut self, event: &TouchEvent, hit: Hit) -> TouchIntent {
        let at = event.primary().map(|p| p.position());
        match event.phase {
            TouchPhase::Start => match hit.draggable() {
                Some(element) => {
                    self.gesture = Some(Gesture {
                        element: element.id,
                        original: element.placement,
                        moved: false,
                    });
                    TouchIntent::Start {
                        element: element.id,
                        hit: hit.element_id(),
                    }
                }
                None => TouchIntent::Tap {
                    hit: hit.element_id(),
                },
            },
            TouchPhase::Move => match (self.gesture.as_mut(), at) {
                (Some(gesture), Some(at)) => {
                    let first = !gesture.moved;
                    gesture.moved = true;
                    TouchIntent::Move {
                        element: gesture.element,
                        at,
                        first,
                    }
                }
                _ => TouchIntent::Ignore,
            },
            TouchPhase::End => match self.gesture.take() {
                Some(gesture) => TouchIntent::End {
                    element: gesture.element,
                    original: gesture.original,
                    at,
                },
                None => TouchIntent::Ignore,
            },
            TouchPhase::Cancel => self.cancel(),
        }
    }

    /// End the active gesture without a drop.
    pub fn cancel(&mut self) -> TouchIntent {
        match self.gesture.take() {
            Some(gesture) => TouchIntent::Cancel {
                element: gesture.element,
                original: gesture.original,
            },
            None => TouchIntent::Ignore,
        }
    }
}
