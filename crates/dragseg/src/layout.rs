#![forbid(unsafe_code)]

//! Board layout: split the area among containers, then flow items into rows.
//!
//! Layout only writes areas. Geometry queries read the areas written by the
//! most recent pass, so a pass must run between a mutation and the next
//! drop resolution.

use dragseg_core::geometry::{Rect, Size};

use crate::config::Axis;
use crate::container::ContainerShell;
use crate::element::Placement;
use crate::engine::ReorderEngine;
use crate::placeholder::PlaceholderSlot;

/// Split `area` into `count` nearly equal parts along `axis`.
///
/// The first `total % count` parts get one extra cell.
#[must_use]
pub fn split_even(area: Rect, count: usize, axis: Axis) -> Vec<Rect> {
    if count == 0 {
        return Vec::new();
    }
    let total = usize::from(match axis {
        Axis::Vertical => area.height,
        Axis::Horizontal => area.width,
    });
    let base = total / count;
    let extra = total % count;

    let mut offset = 0usize;
    (0..count)
        .map(|i| {
            let len = base + usize::from(i < extra);
            let start = u16::try_from(offset).unwrap_or(u16::MAX);
            let len16 = u16::try_from(len).unwrap_or(u16::MAX);
            offset += len;
            match axis {
                Axis::Vertical => {
                    Rect::new(area.x, area.y.saturating_add(start), area.width, len16)
                }
                Axis::Horizontal => {
                    Rect::new(area.x.saturating_add(start), area.y, len16, area.height)
                }
            }
        })
        .collect()
}

/// Flow `sizes` left to right inside `inner`, wrapping into rows.
///
/// Rows are as tall as their tallest entry. Entries that would start past
/// the bottom edge get an empty rect at the bottom-left corner so they are
/// neither drawn nor hit.
#[must_use]
pub fn flow(inner: Rect, sizes: &[Size], gap: u16) -> Vec<Rect> {
    let right = inner.right();
    let bottom = inner.bottom();
    let mut x = inner.x;
    let mut y = inner.y;
    let mut row_height = 0u16;

    sizes
        .iter()
        .map(|size| {
            if x > inner.x && x.saturating_add(size.width) > right {
                x = inner.x;
                y = y.saturating_add(row_height);
                row_height = 0;
            }
            if y >= bottom || x >= right {
                return Rect::new(inner.x, bottom, 0, 0);
            }
            let rect = Rect::new(
                x,
                y,
                size.width.min(right - x),
                size.height.min(bottom - y),
            );
            row_height = row_height.max(size.height);
            x = x.saturating_add(size.width).saturating_add(gap);
            rect
        })
        .collect()
}

/// One entry in a container's flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    Item(usize),
    Placeholder,
}

/// Lay out shells, flowing items, the placeholder, and floating items.
pub(crate) fn layout_containers<T>(
    engine: &mut ReorderEngine<T>,
    shells: &mut [ContainerShell],
    placeholder: &mut PlaceholderSlot,
    area: Rect,
    axis: Axis,
    gap: u16,
) {
    let rects = split_even(area, shells.len(), axis);
    for (container, (shell, rect)) in shells.iter_mut().zip(rects).enumerate() {
        shell.area = rect;
        let inner = shell.inner(rect);

        let mut slots = Vec::new();
        let mut sizes = Vec::new();
        for (index, element) in engine.elements(container).iter().enumerate() {
            if !element.placement().is_floating() {
                slots.push(Slot::Item(index));
                sizes.push(element.size());
            }
            if let Some(p) = placeholder.following(element.id()) {
                slots.push(Slot::Placeholder);
                sizes.push(p.size());
            }
        }

        let placed = flow(inner, &sizes, gap);
        let elements = engine.elements_mut(container);
        for (slot, rect) in slots.into_iter().zip(placed) {
            match slot {
                Slot::Item(index) => elements[index].area = rect,
                Slot::Placeholder => {
                    if let Some(p) = placeholder.get_mut() {
                        p.area = rect;
                    }
                }
            }
        }

        for element in elements.iter_mut() {
            if let Placement::Floating { anchor, .. } = element.placement {
                element.area = Rect::centered_on(anchor, element.size(), area);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_distributes_remainder_first() {
        let parts = split_even(Rect::new(0, 0, 10, 7), 3, Axis::Vertical);
        assert_eq!(
            parts,
            vec![
                Rect::new(0, 0, 10, 3),
                Rect::new(0, 3, 10, 2),
                Rect::new(0, 5, 10, 2),
            ]
        );
        let parts = split_even(Rect::new(2, 0, 9, 4), 2, Axis::Horizontal);
        assert_eq!(parts, vec![Rect::new(2, 0, 5, 4), Rect::new(7, 0, 4, 4)]);
        assert!(split_even(Rect::new(0, 0, 9, 9), 0, Axis::Vertical).is_empty());
    }

    #[test]
    fn flow_wraps_rows() {
        let sizes = [Size::new(4, 1), Size::new(4, 1), Size::new(4, 2), Size::new(3, 1)];
        let rects = flow(Rect::new(1, 1, 10, 5), &sizes, 1);
        assert_eq!(
            rects,
            vec![
                Rect::new(1, 1, 4, 1),
                Rect::new(6, 1, 4, 1),
                Rect::new(1, 2, 4, 2),
                Rect::new(6, 2, 3, 1),
            ]
        );
    }

    #[test]
    fn flow_clips_and_hides_overflow() {
        let sizes = [Size::new(12, 1), Size::new(2, 1), Size::new(2, 1)];
        let rects = flow(Rect::new(0, 0, 8, 2), &sizes, 0);
        assert_eq!(rects[0], Rect::new(0, 0, 8, 1));
        assert_eq!(rects[1], Rect::new(0, 1, 2, 1));
        let rects = flow(Rect::new(0, 0, 8, 1), &sizes, 0);
        assert!(rects[1].is_empty());
        assert!(rects[2].is_empty());
    }

    #[test]
    fn flow_with_zero_height_area() {
        let rects = flow(Rect::new(0, 0, 8, 0), &[Size::new(2, 1)], 1);
        assert!(rects[0].is_empty());
    }
}
