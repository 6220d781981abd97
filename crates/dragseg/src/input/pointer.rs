#![forbid(unsafe_code)]

//! Mouse drag and click.
//!
//! A left press on a draggable element or the submit control is remembered.
//! Moving at least `threshold` cells (Manhattan distance) while held turns
//! the press into a drag; releasing then drops. Releasing without a drag on
//! the pressed element is a click.

use dragseg_core::event::{MouseButton, MouseEvent, MouseEventKind};
use dragseg_core::geometry::Position;

use super::Hit;
use crate::element::ElementId;

/// What a mouse event asks the board to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerIntent {
    /// Nothing to do.
    Ignore,
    /// A left press landed on `hit`. Offered to the outside-click
    /// subscription.
    Press { hit: Option<ElementId> },
    /// The press on `element` became a drag.
    BeginDrag { element: ElementId, at: Position },
    /// A drag of `element` is over `at`.
    Hover { element: ElementId, at: Position },
    /// A drag of `element` was released at `at`.
    Drop { element: ElementId, at: Position },
    /// Press and release on the same element without dragging.
    Click { element: ElementId },
    /// Press and release on the submit control.
    Submit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PressTarget {
    Element(ElementId),
    Submit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Press {
    target: PressTarget,
    origin: Position,
    dragging: bool,
}

/// Pointer adapter state.
#[derive(Debug, Clone, Default)]
pub struct PointerAdapter {
    press: Option<Press>,
}

impl PointerAdapter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The element currently being dragged.
    #[must_use]
    pub fn dragging(&self) -> Option<ElementId> {
        match self.press {
            Some(Press {
                target: PressTarget::Element(id),
                dragging: true,
                ..
            }) => Some(id),
            _ => None,
        }
    }

    /// Translate one mouse event. `hit` describes what lies under it.
    pub fn on_mouse(&mut self, event: &MouseEvent, hit: Hit, threshold: u16) -> PointerIntent {
        let at = event.position();
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let target = if let Some(element) = hit.draggable() {
                    Some(PressTarget::Element(element.id))
                } else if hit.submit {
                    Some(PressTarget::Submit)
                } else {
                    None
                };
                self.press = target.map(|target| Press {
                    target,
                    origin: at,
                    dragging: false,
                });
                PointerIntent::Press {
                    hit: hit.element_id(),
                }
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                let Some(press) = self.press.as_mut() else {
                    return PointerIntent::Ignore;
                };
                let PressTarget::Element(element) = press.target else {
                    return PointerIntent::Ignore;
                };
                if press.dragging {
                    PointerIntent::Hover { element, at }
                } else if press.origin.manhattan_distance(at) >= u32::from(threshold) {
                    press.dragging = true;
                    PointerIntent::BeginDrag { element, at }
                } else {
                    PointerIntent::Ignore
                }
            }
            MouseEventKind::Up(MouseButton::Left) => {
                let Some(press) = self.press.take() else {
                    return PointerIntent::Ignore;
                };
                match press.target {
                    PressTarget::Element(element) if press.dragging => {
                        PointerIntent::Drop { element, at }
                    }
                    PressTarget::Element(element) if hit.element_id() == Some(element) => {
                        PointerIntent::Click { element }
                    }
                    PressTarget::Submit if hit.submit => PointerIntent::Submit,
                    _ => PointerIntent::Ignore,
                }
            }
            _ => PointerIntent::Ignore,
        }
    }

    /// Abandon any press. Returns the element whose drag was cut short.
    pub fn cancel(&mut self) -> Option<ElementId> {
        let dragging = self.dragging();
        self.press = None;
        dragging
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::Placement;
    use crate::input::ElementHit;

    fn on(id: u32, fixed: bool) -> Hit {
        Hit {
            element: Some(ElementHit {
                id: ElementId(id),
                fixed,
                placement: Placement::Flow,
            }),
            submit: false,
        }
    }

    fn mouse(kind: MouseEventKind, x: u16, y: u16) -> MouseEvent {
        MouseEvent::new(kind, x, y)
    }

    const LEFT: MouseButton = MouseButton::Left;

    #[test]
    fn press_release_in_place_is_click() {
        let mut p = PointerAdapter::new();
        assert_eq!(
            p.on_mouse(&mouse(MouseEventKind::Down(LEFT), 2, 1), on(4, false), 1),
            PointerIntent::Press {
                hit: Some(ElementId(4))
            }
        );
        assert_eq!(
            p.on_mouse(&mouse(MouseEventKind::Up(LEFT), 2, 1), on(4, false), 1),
            PointerIntent::Click {
                element: ElementId(4)
            }
        );
    }

    #[test]
    fn drag_past_threshold_then_drop() {
        let mut p = PointerAdapter::new();
        p.on_mouse(&mouse(MouseEventKind::Down(LEFT), 2, 1), on(4, false), 2);
        assert_eq!(
            p.on_mouse(&mouse(MouseEventKind::Drag(LEFT), 3, 1), Hit::default(), 2),
            PointerIntent::Ignore
        );
        assert_eq!(
            p.on_mouse(&mouse(MouseEventKind::Drag(LEFT), 3, 2), Hit::default(), 2),
            PointerIntent::BeginDrag {
                element: ElementId(4),
                at: Position::new(3, 2)
            }
        );
        assert_eq!(p.dragging(), Some(ElementId(4)));
        assert_eq!(
            p.on_mouse(&mouse(MouseEventKind::Drag(LEFT), 9, 5), Hit::default(), 2),
            PointerIntent::Hover {
                element: ElementId(4),
                at: Position::new(9, 5)
            }
        );
        assert_eq!(
            p.on_mouse(&mouse(MouseEventKind::Up(LEFT), 9, 6), Hit::default(), 2),
            PointerIntent::Drop {
                element: ElementId(4),
                at: Position::new(9, 6)
            }
        );
        assert!(p.dragging().is_none());
    }

    #[test]
    fn fixed_items_never_drag() {
        let mut p = PointerAdapter::new();
        assert_eq!(
            p.on_mouse(&mouse(MouseEventKind::Down(LEFT), 0, 0), on(1, true), 1),
            PointerIntent::Press {
                hit: Some(ElementId(1))
            }
        );
        assert_eq!(
            p.on_mouse(&mouse(MouseEventKind::Drag(LEFT), 5, 0), Hit::default(), 1),
            PointerIntent::Ignore
        );
        assert_eq!(
            p.on_mouse(&mouse(MouseEventKind::Up(LEFT), 0, 0), on(1, true), 1),
            PointerIntent::Ignore
        );
    }

    #[test]
    fn release_elsewhere_without_drag_is_ignored() {
        let mut p = PointerAdapter::new();
        p.on_mouse(&mouse(MouseEventKind::Down(LEFT), 0, 0), on(1, false), 3);
        assert_eq!(
            p.on_mouse(&mouse(MouseEventKind::Up(LEFT), 1, 0), on(2, false), 3),
            PointerIntent::Ignore
        );
    }

    #[test]
    fn submit_press_and_release() {
        let mut p = PointerAdapter::new();
        let submit = Hit {
            element: None,
            submit: true,
        };
        p.on_mouse(&mouse(MouseEventKind::Down(LEFT), 0, 9), submit, 1);
        // dragging off the button does not start a drag
        assert_eq!(
            p.on_mouse(&mouse(MouseEventKind::Drag(LEFT), 4, 9), submit, 1),
            PointerIntent::Ignore
        );
        assert_eq!(
            p.on_mouse(&mouse(MouseEventKind::Up(LEFT), 1, 9), submit, 1),
            PointerIntent::Submit
        );
    }

    #[test]
    fn other_buttons_ignored_and_cancel_clears() {
        let mut p = PointerAdapter::new();
        assert_eq!(
            p.on_mouse(
                &mouse(MouseEventKind::Down(MouseButton::Right), 0, 0),
                on(1, false),
                1
            ),
            PointerIntent::Ignore
        );
        p.on_mouse(&mouse(MouseEventKind::Down(LEFT), 0, 0), on(1, false), 0);
        p.on_mouse(&mouse(MouseEventKind::Drag(LEFT), 0, 0), Hit::default(), 0);
        assert_eq!(p.cancel(), Some(ElementId(1)));
        assert_eq!(
            p.on_mouse(&mouse(MouseEventKind::Up(LEFT), 0, 0), Hit::default(), 0),
            PointerIntent::Ignore
        );
    }
}
