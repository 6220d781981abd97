#![forbid(unsafe_code)]

//! The reorder engine: backing data, rendered elements, and fixed flags kept
//! in lockstep.
//!
//! # Design
//!
//! Three parallel structures describe each container:
//!
//! ```text
//! backing[c]   : Vec<T>            caller data
//! elements[c]  : Vec<ItemElement>  rendered visuals
//! fixed[c]     : Vec<bool>         immovability flags
//! ```
//!
//! [`ReorderEngine::move_item`] is the only mutating primitive. It checks the
//! move with [`check_move`], then removes from all three and inserts into all
//! three, so a rejected move touches nothing. Positions are not stored on the
//! elements; a side table maps each stable [`ElementId`] to its current
//! [`ItemPos`] and is re-stamped for both affected containers after a move.
//!
//! # Invariants
//!
//! 1. `backing[c].len() == elements[c].len() == fixed[c].len()` for every `c`.
//! 2. `positions[elements[c][i].id()] == (c, i)` for every element.
//! 3. The total item count never changes.
//! 4. No container ever exceeds its capacity.

use std::fmt;

use ahash::AHashMap;

use crate::config::{Capacity, ReorderConfig};
use crate::constraint::{SlotModel, check_move};
use crate::element::{ElementId, ElementMarks, ItemElement, ItemPos};
use crate::error::{BoardError, MoveRejection};
use crate::validity::ValidityTracker;
use crate::widget::ItemWidget;

/// Owner of the backing arrangement and its rendered elements.
pub struct ReorderEngine<T> {
    backing: Vec<Vec<T>>,
    elements: Vec<Vec<ItemElement>>,
    fixed: Vec<Vec<bool>>,
    limits: Vec<Capacity>,
    validity: ValidityTracker<T>,
    positions: AHashMap<ElementId, ItemPos>,
}

impl<T> fmt::Debug for ReorderEngine<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReorderEngine")
            .field(
                "lens",
                &self.backing.iter().map(Vec::len).collect::<Vec<_>>(),
            )
            .field("limits", &self.limits)
            .field("validity", &self.validity)
            .finish_non_exhaustive()
    }
}

fn check_shapes<T>(backing: &[Vec<T>], config: &ReorderConfig<T>) -> Result<(), BoardError> {
    let containers = backing.len();
    if config.limits.len() > containers {
        return Err(BoardError::LimitsShape {
            containers,
            limits: config.limits.len(),
        });
    }
    if let Some(container) = config
        .validators
        .iter()
        .rposition(Option::is_some)
        .filter(|&c| c >= containers)
    {
        return Err(BoardError::ValidatorsShape {
            containers,
            container,
        });
    }
    if let Some(fixed) = &config.fixed {
        for container in 0..fixed.len().max(containers) {
            let expected = backing.get(container).map_or(0, Vec::len);
            let row = fixed.get(container);
            let found = row.map_or(0, Vec::len);
            if row.is_none() || container >= containers || found != expected {
                return Err(BoardError::FixedShape {
                    container,
                    expected,
                    found,
                });
            }
        }
    }
    for (container, items) in backing.iter().enumerate() {
        if let Capacity::Limit(limit) = config.capacity(container)
            && items.len() > limit
        {
            return Err(BoardError::OverCapacity {
                container,
                len: items.len(),
                limit,
            });
        }
    }
    Ok(())
}

impl<T> ReorderEngine<T> {
    /// Build the engine, rendering every item once with `transform`.
    ///
    /// Fails when the configuration does not match the shape of `backing`.
    pub fn new<F>(
        backing: Vec<Vec<T>>,
        mut transform: F,
        config: ReorderConfig<T>,
    ) -> Result<Self, BoardError>
    where
        F: FnMut(&T) -> Box<dyn ItemWidget>,
    {
        check_shapes(&backing, &config)?;
        let ReorderConfig {
            mut limits,
            validators,
            fixed,
        } = config;
        limits.resize(backing.len(), Capacity::Unbounded);
        let fixed =
            fixed.unwrap_or_else(|| backing.iter().map(|items| vec![false; items.len()]).collect());

        let mut next_id = 0u32;
        let mut positions = AHashMap::new();
        let mut elements = Vec::with_capacity(backing.len());
        for (container, items) in backing.iter().enumerate() {
            let mut row = Vec::with_capacity(items.len());
            for (index, item) in items.iter().enumerate() {
                let id = ElementId(next_id);
                next_id += 1;
                let mut element = ItemElement::new(id, transform(item));
                if fixed[container][index] {
                    element.marks |= ElementMarks::FIXED;
                }
                positions.insert(id, ItemPos::new(container, index));
                row.push(element);
            }
            elements.push(row);
        }

        let validity = ValidityTracker::new(validators, &backing);
        Ok(Self {
            backing,
            elements,
            fixed,
            limits,
            validity,
            positions,
        })
    }

    #[must_use]
    pub fn container_count(&self) -> usize {
        self.backing.len()
    }

    /// Total items across all containers.
    #[must_use]
    pub fn total_items(&self) -> usize {
        self.backing.iter().map(Vec::len).sum()
    }

    /// The current arrangement.
    #[must_use]
    pub fn backing(&self) -> &[Vec<T>] {
        &self.backing
    }

    #[must_use]
    pub fn into_backing(self) -> Vec<Vec<T>> {
        self.backing
    }

    #[must_use]
    pub fn items(&self, container: usize) -> &[T] {
        self.backing.get(container).map(Vec::as_slice).unwrap_or(&[])
    }

    #[must_use]
    pub fn elements(&self, container: usize) -> &[ItemElement] {
        self.elements.get(container).map(Vec::as_slice).unwrap_or(&[])
    }

    pub(crate) fn elements_mut(&mut self, container: usize) -> &mut [ItemElement] {
        self.elements
            .get_mut(container)
            .map(Vec::as_mut_slice)
            .unwrap_or(&mut [])
    }

    pub(crate) fn all_elements_mut(&mut self) -> impl Iterator<Item = &mut ItemElement> {
        self.elements.iter_mut().flatten()
    }

    #[must_use]
    pub fn element(&self, pos: ItemPos) -> Option<&ItemElement> {
        self.elements.get(pos.container)?.get(pos.index)
    }

    pub(crate) fn element_by_id_mut(&mut self, id: ElementId) -> Option<&mut ItemElement> {
        let pos = self.position_of(id)?;
        self.elements.get_mut(pos.container)?.get_mut(pos.index)
    }

    #[must_use]
    pub fn element_by_id(&self, id: ElementId) -> Option<&ItemElement> {
        self.element(self.position_of(id)?)
    }

    /// Current position of the element with stable identity `id`.
    #[must_use]
    pub fn position_of(&self, id: ElementId) -> Option<ItemPos> {
        self.positions.get(&id).copied()
    }

    #[must_use]
    pub fn is_invalid(&self, container: usize) -> bool {
        self.validity.is_invalid(container)
    }

    /// Fixed flags for one container, parallel to its items.
    #[must_use]
    pub fn fixed_flags(&self, container: usize) -> &[bool] {
        self.fixed.get(container).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Move the item at `from` to insertion point `to`.
    ///
    /// `to.index` is relative to the destination after `from` has been
    /// removed. On success returns the item's new position. On rejection no
    /// structure is touched.
    pub fn move_item(&mut self, from: ItemPos, to: ItemPos) -> Result<ItemPos, MoveRejection> {
        if let Err(rejection) = check_move(&*self, from, to) {
            #[cfg(feature = "tracing")]
            Self::log_reject(from, to, rejection);
            return Err(rejection);
        }

        #[cfg(feature = "tracing")]
        let span = tracing::debug_span!(
            "reorder.move",
            from_container = from.container,
            from_index = from.index,
            to_container = to.container,
            to_index = to.index
        );
        #[cfg(feature = "tracing")]
        let _guard = span.enter();

        let item = self.backing[from.container].remove(from.index);
        let element = self.elements[from.container].remove(from.index);
        let flag = self.fixed[from.container].remove(from.index);

        self.backing[to.container].insert(to.index, item);
        self.elements[to.container].insert(to.index, element);
        self.fixed[to.container].insert(to.index, flag);

        self.restamp(from.container);
        if to.container != from.container {
            self.restamp(to.container);
        }
        self.recheck_validity(from.container);
        if to.container != from.container {
            self.recheck_validity(to.container);
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            message = "reorder.move",
            from_container = from.container,
            from_index = from.index,
            to_container = to.container,
            to_index = to.index
        );
        Ok(to)
    }

    fn restamp(&mut self, container: usize) {
        for (index, element) in self.elements[container].iter().enumerate() {
            self.positions
                .insert(element.id(), ItemPos::new(container, index));
        }
    }

    fn recheck_validity(&mut self, container: usize) {
        let _changed = self
            .validity
            .recheck(container, &self.backing[container]);
        #[cfg(feature = "tracing")]
        if _changed {
            tracing::debug!(
                message = "reorder.validity",
                container,
                invalid = self.validity.is_invalid(container)
            );
        }
    }

    #[cfg(feature = "tracing")]
    fn log_reject(from: ItemPos, to: ItemPos, rejection: MoveRejection) {
        tracing::debug!(
            message = "reorder.reject",
            reason = rejection.as_str(),
            from_container = from.container,
            from_index = from.index,
            to_container = to.container,
            to_index = to.index
        );
    }
}

impl<T> SlotModel for ReorderEngine<T> {
    fn container_count(&self) -> usize {
        self.backing.len()
    }

    fn container_len(&self, container: usize) -> usize {
        self.backing.get(container).map_or(0, Vec::len)
    }

    fn capacity(&self, container: usize) -> Capacity {
        self.limits.get(container).copied().unwrap_or_default()
    }

    fn is_fixed(&self, pos: ItemPos) -> bool {
        self.fixed
            .get(pos.container)
            .and_then(|row| row.get(pos.index))
            .copied()
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::Chip;

    fn chip(item: &char) -> Box<dyn ItemWidget> {
        Box::new(Chip::new(item.to_string()))
    }

    fn engine(backing: Vec<Vec<char>>, config: ReorderConfig<char>) -> ReorderEngine<char> {
        ReorderEngine::new(backing, chip, config).expect("valid config")
    }

    fn assert_restamped(engine: &ReorderEngine<char>) {
        for c in 0..engine.container_count() {
            assert_eq!(engine.items(c).len(), engine.elements(c).len());
            assert_eq!(engine.items(c).len(), engine.fixed_flags(c).len());
            for (i, el) in engine.elements(c).iter().enumerate() {
                assert_eq!(engine.position_of(el.id()), Some(ItemPos::new(c, i)));
            }
        }
    }

    #[test]
    fn cross_container_move_splices_all_structures() {
        let mut e = engine(
            vec![vec!['a', 'b'], vec!['c']],
            ReorderConfig::new().with_limits([2usize, 2]),
        );
        let moved_id = e.elements(0)[0].id();
        assert_eq!(
            e.move_item(ItemPos::new(0, 0), ItemPos::new(1, 1)),
            Ok(ItemPos::new(1, 1))
        );
        assert_eq!(e.backing(), &[vec!['b'], vec!['c', 'a']]);
        assert_eq!(e.position_of(moved_id), Some(ItemPos::new(1, 1)));
        assert_restamped(&e);
    }

    #[test]
    fn same_container_move_uses_post_removal_index() {
        let mut e = engine(vec![vec!['a', 'b', 'c']], ReorderConfig::new());
        e.move_item(ItemPos::new(0, 0), ItemPos::new(0, 2))
            .expect("move");
        assert_eq!(e.backing(), &[vec!['b', 'c', 'a']]);
        e.move_item(ItemPos::new(0, 2), ItemPos::new(0, 0))
            .expect("move");
        assert_eq!(e.backing(), &[vec!['a', 'b', 'c']]);
        assert_restamped(&e);
    }

    #[test]
    fn rejected_move_changes_nothing() {
        let mut e = engine(
            vec![vec!['a', 'b', 'c']],
            ReorderConfig::new().with_fixed(vec![vec![false, true, false]]),
        );
        let ids: Vec<_> = e.elements(0).iter().map(ItemElement::id).collect();
        assert_eq!(
            e.move_item(ItemPos::new(0, 1), ItemPos::new(0, 0)),
            Err(MoveRejection::FixedItem {
                source: ItemPos::new(0, 1)
            })
        );
        assert_eq!(e.backing(), &[vec!['a', 'b', 'c']]);
        assert_eq!(e.fixed_flags(0), &[false, true, false]);
        let after: Vec<_> = e.elements(0).iter().map(ItemElement::id).collect();
        assert_eq!(ids, after);
    }

    #[test]
    fn fixed_items_carry_the_mark() {
        let e = engine(
            vec![vec!['a', 'b']],
            ReorderConfig::new().with_fixed(vec![vec![false, true]]),
        );
        assert!(!e.elements(0)[0].marks().contains(ElementMarks::FIXED));
        assert!(e.elements(0)[1].marks().contains(ElementMarks::FIXED));
    }

    #[test]
    fn validity_rechecked_for_both_containers() {
        let mut e = engine(
            vec![vec!['a'], vec![]],
            ReorderConfig::new()
                .with_validator(0, |items| !items.is_empty())
                .with_validator(1, |items| items.len() < 2),
        );
        assert!(!e.is_invalid(0));
        e.move_item(ItemPos::new(0, 0), ItemPos::new(1, 0))
            .expect("move");
        assert!(e.is_invalid(0));
        assert!(!e.is_invalid(1));
        e.move_item(ItemPos::new(1, 0), ItemPos::new(0, 0))
            .expect("move back");
        assert!(!e.is_invalid(0));
    }

    #[test]
    fn shape_errors() {
        let err = ReorderEngine::new(
            vec![vec!['a']],
            chip,
            ReorderConfig::new().with_limits([1usize, 1]),
        )
        .unwrap_err();
        assert_eq!(
            err,
            BoardError::LimitsShape {
                containers: 1,
                limits: 2
            }
        );

        let err = ReorderEngine::new(
            vec![vec!['a', 'b']],
            chip,
            ReorderConfig::new().with_fixed(vec![vec![true]]),
        )
        .unwrap_err();
        assert_eq!(
            err,
            BoardError::FixedShape {
                container: 0,
                expected: 2,
                found: 1
            }
        );

        let err = ReorderEngine::new(
            vec![vec!['a']],
            chip,
            ReorderConfig::new().with_validator(3, |_| true),
        )
        .unwrap_err();
        assert_eq!(
            err,
            BoardError::ValidatorsShape {
                containers: 1,
                container: 3
            }
        );

        let err = ReorderEngine::new(
            vec![vec!['a', 'b']],
            chip,
            ReorderConfig::new().with_limits([1usize]),
        )
        .unwrap_err();
        assert_eq!(
            err,
            BoardError::OverCapacity {
                container: 0,
                len: 2,
                limit: 1
            }
        );
    }

    #[test]
    fn missing_fixed_rows_are_reported() {
        let err = ReorderEngine::new(
            vec![vec!['a'], vec!['b', 'c']],
            chip,
            ReorderConfig::new().with_fixed(vec![vec![false]]),
        )
        .unwrap_err();
        assert_eq!(
            err,
            BoardError::FixedShape {
                container: 1,
                expected: 2,
                found: 0
            }
        );
    }

    #[test]
    fn element_ids_are_stable_and_unique() {
        let e = engine(vec![vec!['a', 'b'], vec!['c']], ReorderConfig::new());
        let ids: Vec<_> = (0..2)
            .flat_map(|c| e.elements(c).iter().map(ItemElement::id))
            .collect();
        assert_eq!(ids, vec![ElementId(0), ElementId(1), ElementId(2)]);
        assert_eq!(e.element_by_id(ElementId(2)).map(ItemElement::id), Some(ElementId(2)));
        assert_eq!(e.total_items(), 3);
    }
}
