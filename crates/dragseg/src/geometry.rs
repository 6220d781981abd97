#![forbid(unsafe_code)]

//! Drop-point resolution.
//!
//! Pure functions of the last layout's rectangles. Nothing here mutates state.
//!
//! # Invariants
//!
//! - An empty destination always resolves to index 0.
//! - The returned index is expressed against the *post-removal* sequence:
//!   for a same-container move, `0..len` (the item is re-inserted into a
//!   sequence one shorter); for a cross-container move, `0..=len`.
//! - Midpoint comparisons use doubled coordinates so odd widths split exactly.

use dragseg_core::geometry::{Position, Rect};

use crate::element::ItemPos;

/// Which item in a row the point belongs to.
///
/// A direct hit wins. Otherwise the first item in the point's row whose
/// midpoint is not left of the point. A point past every midpoint of its
/// row has no match, even when later rows exist.
fn row_match(items: &[Rect], point: Position) -> Option<usize> {
    if let Some(hit) = items.iter().position(|r| r.contains_pos(point)) {
        return Some(hit);
    }
    items
        .iter()
        .position(|r| r.spans_y(point.y) && !r.is_right_of_center(point.x))
}

/// Insertion index for a drop at `point` into a container whose items were
/// last laid out at `items`.
///
/// `source` is the dragged item's current position and `destination` the
/// index of the container under the point.
#[must_use]
pub fn resolve_drop_index(
    items: &[Rect],
    point: Position,
    source: ItemPos,
    destination: usize,
) -> usize {
    if items.is_empty() {
        return 0;
    }
    let same_container = source.container == destination;

    let Some(matched) = row_match(items, point) else {
        return if same_container {
            items.len() - 1
        } else {
            items.len()
        };
    };

    let mut index = matched;
    if items[matched].is_right_of_center(point.x) {
        index += 1;
    }
    if same_container && index > source.index {
        index -= 1;
    }
    index
}

/// Index of the container whose shell contains `point`.
#[must_use]
pub fn container_at(shells: &[Rect], point: Position) -> Option<usize> {
    shells.iter().position(|r| r.contains_pos(point))
}
