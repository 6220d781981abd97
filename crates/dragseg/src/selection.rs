#![forbid(unsafe_code)]

//! Selection and focus state machine.
//!
//! # States
//!
//! ```text
//!            select(e)                 select(f), f != e
//! Unselected ─────────► Selected(e) ───────────────────► Selected(f)
//!     ▲                     │
//!     └─────────────────────┘
//!      unselect / outside click
//! ```
//!
//! Selection holds an [`ElementId`], not a position. The position is looked
//! up in the engine's side table whenever it is needed, so it is always the
//! item's *current* slot after any number of moves.
//!
//! While something is selected, an [`OutsideClick`] subscription is held.
//! Every pointer press or touch start is offered to it; a press that does not
//! land on the selected element ends the selection. The subscription is
//! dropped on every path out of `Selected`.

use crate::element::{ElementId, ElementMarks};
use crate::engine::ReorderEngine;

/// Current selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionState {
    #[default]
    Unselected,
    Selected(ElementId),
}

impl SelectionState {
    #[must_use]
    pub fn element(self) -> Option<ElementId> {
        match self {
            Self::Unselected => None,
            Self::Selected(id) => Some(id),
        }
    }
}

/// Scoped "press outside the selected element" listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutsideClick {
    owner: ElementId,
}

impl OutsideClick {
    /// True when a press that hit `hit` lies outside the owner.
    #[must_use]
    pub fn is_outside(&self, hit: Option<ElementId>) -> bool {
        hit != Some(self.owner)
    }

    #[must_use]
    pub fn owner(&self) -> ElementId {
        self.owner
    }
}

/// Selection plus input focus.
#[derive(Debug, Clone, Default)]
pub struct SelectionMachine {
    state: SelectionState,
    outside_click: Option<OutsideClick>,
    focused: Option<ElementId>,
}

impl SelectionMachine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> SelectionState {
        self.state
    }

    #[must_use]
    pub fn selected(&self) -> Option<ElementId> {
        self.state.element()
    }

    #[must_use]
    pub fn is_selected(&self, id: ElementId) -> bool {
        self.selected() == Some(id)
    }

    #[must_use]
    pub fn focused(&self) -> Option<ElementId> {
        self.focused
    }

    /// The active outside-click subscription, if any.
    #[must_use]
    pub fn outside_click(&self) -> Option<OutsideClick> {
        self.outside_click
    }

    /// Select `id` and move focus to it. Returns the element that was
    /// selected before, if it was a different one.
    pub fn select(&mut self, id: ElementId) -> Option<ElementId> {
        let previous = self.selected().filter(|&prev| prev != id);
        #[cfg(feature = "tracing")]
        if self.selected() != Some(id) {
            Self::log_change(self.selected(), Some(id));
        }
        self.state = SelectionState::Selected(id);
        self.outside_click = Some(OutsideClick { owner: id });
        self.focused = Some(id);
        previous
    }

    /// Clear the selection. Returns the element that was selected.
    pub fn unselect(&mut self) -> Option<ElementId> {
        let previous = self.selected();
        #[cfg(feature = "tracing")]
        if previous.is_some() {
            Self::log_change(previous, None);
        }
        self.state = SelectionState::Unselected;
        self.outside_click = None;
        previous
    }

    /// Offer a press to the outside-click subscription. Returns the element
    /// that was unselected, if the press was outside it.
    pub fn on_press(&mut self, hit: Option<ElementId>) -> Option<ElementId> {
        let outside = self.outside_click?;
        if outside.is_outside(hit) {
            self.unselect()
        } else {
            None
        }
    }

    /// Move focus without touching the selection.
    pub fn focus(&mut self, id: ElementId) -> Option<ElementId> {
        self.focused.replace(id)
    }

    /// Write SELECTED and FOCUSED marks onto the engine's elements.
    pub(crate) fn sync_marks<T>(&self, engine: &mut ReorderEngine<T>) {
        for element in engine.all_elements_mut() {
            let id = element.id();
            element
                .marks
                .set(ElementMarks::SELECTED, self.selected() == Some(id));
            element
                .marks
                .set(ElementMarks::FOCUSED, self.focused == Some(id));
        }
    }

    #[cfg(feature = "tracing")]
    fn log_change(from: Option<ElementId>, to: Option<ElementId>) {
        tracing::debug!(
            message = "selection.change",
            from = from.map(|id| id.0),
            to = to.map(|id| id.0)
        );
    }
}
