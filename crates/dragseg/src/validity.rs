#![forbid(unsafe_code)]

//! Container validity.
//!
//! Each container may carry a predicate over its items. A container whose
//! predicate fails is marked invalid and drawn with a red border.

use std::fmt;

use crate::config::Validator;

/// Per-container validator results.
///
/// Containers without a validator are always valid. State is purely
/// derived: [`ValidityTracker::recheck`] recomputes it from the items.
pub struct ValidityTracker<T> {
    validators: Vec<Option<Validator<T>>>,
    invalid: Vec<bool>,
}

impl<T> fmt::Debug for ValidityTracker<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidityTracker")
            .field("invalid", &self.invalid)
            .finish_non_exhaustive()
    }
}

impl<T> ValidityTracker<T> {
    /// Build a tracker for `backing` and evaluate every container once.
    pub(crate) fn new(mut validators: Vec<Option<Validator<T>>>, backing: &[Vec<T>]) -> Self {
        validators.resize_with(backing.len(), || None);
        let mut tracker = Self {
            validators,
            invalid: vec![false; backing.len()],
        };
        for (container, items) in backing.iter().enumerate() {
            tracker.recheck(container, items);
        }
        tracker
    }

    /// Re-run the validator for one container. Returns whether the invalid
    /// state changed.
    pub(crate) fn recheck(&mut self, container: usize, items: &[T]) -> bool {
        let Some(slot) = self.invalid.get_mut(container) else {
            return false;
        };
        let invalid = self
            .validators
            .get(container)
            .and_then(Option::as_ref)
            .is_some_and(|validator| !validator(items));
        let changed = *slot != invalid;
        *slot = invalid;
        changed
    }

    #[must_use]
    pub fn is_invalid(&self, container: usize) -> bool {
        self.invalid.get(container).copied().unwrap_or(false)
    }
}
