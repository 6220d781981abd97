#![forbid(unsafe_code)]

//! Movement constraints.
//!
//! The checker sees the board only through [`SlotModel`], so it can be
//! exercised against plain vectors in tests and against the live engine in
//! production with the same code.

use crate::config::Capacity;
use crate::element::ItemPos;
use crate::error::MoveRejection;

/// Read-only view of container shapes and per-slot flags.
pub trait SlotModel {
    fn container_count(&self) -> usize;
    fn container_len(&self, container: usize) -> usize;
    fn capacity(&self, container: usize) -> Capacity;
    fn is_fixed(&self, pos: ItemPos) -> bool;
}

/// Decide whether moving the item at `from` to `to` is permitted.
///
/// `to.index` is an insertion point in the post-removal sequence: for a
/// same-container move it may be at most `len - 1`, for a cross-container
/// move at most `len` (append).
///
/// Capacity is checked only across containers and against the destination's
/// current length, since the moving item is not yet a member.
pub fn check_move<M: SlotModel + ?Sized>(
    model: &M,
    from: ItemPos,
    to: ItemPos,
) -> Result<(), MoveRejection> {
    let containers = model.container_count();
    if from.container >= containers || from.index >= model.container_len(from.container) {
        return Err(MoveRejection::SourceOutOfRange { source: from });
    }
    if to.container >= containers {
        return Err(MoveRejection::DestinationOutOfRange { destination: to });
    }

    let dest_len = model.container_len(to.container);
    let same_container = from.container == to.container;
    let max_index = if same_container { dest_len - 1 } else { dest_len };
    if to.index > max_index {
        return Err(MoveRejection::DestinationOutOfRange { destination: to });
    }

    if !same_container {
        let capacity = model.capacity(to.container);
        if capacity.is_full(dest_len) {
            return Err(MoveRejection::AtCapacity {
                container: to.container,
                limit: capacity.limit().unwrap_or(dest_len),
            });
        }
    }

    if model.is_fixed(from) {
        return Err(MoveRejection::FixedItem { source: from });
    }
    Ok(())
}

/// Boolean form of [`check_move`].
#[must_use]
pub fn can_move<M: SlotModel + ?Sized>(model: &M, from: ItemPos, to: ItemPos) -> bool {
    check_move(model, from, to).is_ok()
}

/// Whether a drag of the item at `source` hovering over `container` would be
/// accepted somewhere in it. Drives the drag-over indicator.
#[must_use]
pub fn accepts_drop<M: SlotModel + ?Sized>(model: &M, source: ItemPos, container: usize) -> bool {
    if model.is_fixed(source) {
        return false;
    }
    source.container == container
        || !model
            .capacity(container)
            .is_full(model.container_len(container))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Grid {
        lens: Vec<usize>,
        limits: Vec<Capacity>,
        fixed: Vec<ItemPos>,
    }

    impl SlotModel for Grid {
        fn container_count(&self) -> usize {
            self.lens.len()
        }
        fn container_len(&self, container: usize) -> usize {
            self.lens[container]
        }
        fn capacity(&self, container: usize) -> Capacity {
            self.limits.get(container).copied().unwrap_or_default()
        }
        fn is_fixed(&self, pos: ItemPos) -> bool {
            self.fixed.contains(&pos)
        }
    }

    fn grid(lens: &[usize], limits: &[usize]) -> Grid {
        Grid {
            lens: lens.to_vec(),
            limits: limits.iter().map(|&l| Capacity::Limit(l)).collect(),
            fixed: Vec::new(),
        }
    }

    #[test]
    fn cross_move_into_full_container_rejected() {
        let g = grid(&[1, 1], &[1, 1]);
        assert_eq!(
            check_move(&g, ItemPos::new(0, 0), ItemPos::new(1, 0)),
            Err(MoveRejection::AtCapacity {
                container: 1,
                limit: 1
            })
        );
    }

    #[test]
    fn same_container_move_skips_capacity() {
        let g = grid(&[2], &[2]);
        assert!(can_move(&g, ItemPos::new(0, 0), ItemPos::new(0, 1)));
    }

    #[test]
    fn fixed_source_always_rejected() {
        let mut g = grid(&[3, 0], &[]);
        g.fixed.push(ItemPos::new(0, 1));
        assert_eq!(
            check_move(&g, ItemPos::new(0, 1), ItemPos::new(0, 0)),
            Err(MoveRejection::FixedItem {
                source: ItemPos::new(0, 1)
            })
        );
        assert!(!can_move(&g, ItemPos::new(0, 1), ItemPos::new(1, 0)));
        assert!(can_move(&g, ItemPos::new(0, 0), ItemPos::new(1, 0)));
    }

    #[test]
    fn destination_bounds_depend_on_container() {
        let g = grid(&[2, 2], &[]);
        // append is allowed across containers
        assert!(can_move(&g, ItemPos::new(0, 0), ItemPos::new(1, 2)));
        assert!(!can_move(&g, ItemPos::new(0, 0), ItemPos::new(1, 3)));
        // within a container the sequence is one shorter after removal
        assert!(can_move(&g, ItemPos::new(0, 0), ItemPos::new(0, 1)));
        assert!(!can_move(&g, ItemPos::new(0, 0), ItemPos::new(0, 2)));
        assert!(!can_move(&g, ItemPos::new(0, 0), ItemPos::new(2, 0)));
    }

    #[test]
    fn missing_source_rejected() {
        let g = grid(&[0, 1], &[]);
        assert_eq!(
            check_move(&g, ItemPos::new(0, 0), ItemPos::new(1, 0)),
            Err(MoveRejection::SourceOutOfRange {
                source: ItemPos::new(0, 0)
            })
        );
    }

    #[test]
    fn drop_acceptance_mirrors_constraints() {
        let mut g = grid(&[2, 1], &[3, 1]);
        assert!(accepts_drop(&g, ItemPos::new(0, 0), 0));
        assert!(!accepts_drop(&g, ItemPos::new(0, 0), 1));
        assert!(accepts_drop(&g, ItemPos::new(1, 0), 0));
        g.fixed.push(ItemPos::new(1, 0));
        assert!(!accepts_drop(&g, ItemPos::new(1, 0), 0));
    }
}
