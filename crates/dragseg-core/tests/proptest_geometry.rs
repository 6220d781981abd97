//! Property tests for cell geometry helpers used by layout and drop resolution.

use dragseg_core::geometry::{Position, Rect, Sides, Size};
use proptest::prelude::*;

fn rect_strategy() -> impl Strategy<Value = Rect> {
    (0u16..200, 0u16..200, 1u16..120, 1u16..60).prop_map(|(x, y, w, h)| Rect::new(x, y, w, h))
}

proptest! {
    #[test]
    fn centered_on_stays_inside_bounds(
        bounds in rect_strategy(),
        ax in 0u16..400,
        ay in 0u16..300,
        w in 1u16..40,
        h in 1u16..10,
    ) {
        let r = Rect::centered_on(Position::new(ax, ay), Size::new(w, h), bounds);
        prop_assert!(r.x >= bounds.x);
        prop_assert!(r.y >= bounds.y);
        prop_assert!(r.right() <= bounds.right());
        prop_assert!(r.bottom() <= bounds.bottom());
    }

    #[test]
    fn inner_is_contained(rect in rect_strategy(), m in 0u16..5) {
        let inner = rect.inner(Sides::all(m));
        prop_assert!(inner.width <= rect.width);
        prop_assert!(inner.height <= rect.height);
        if !inner.is_empty() {
            prop_assert!(rect.contains(inner.x, inner.y));
        }
    }

    #[test]
    fn every_point_is_left_or_right_of_center(rect in rect_strategy(), dx in 0u16..120) {
        let x = rect.x.saturating_add(dx.min(rect.width.saturating_sub(1)));
        let right = rect.is_right_of_center(x);
        let left = 2 * u32::from(x) < rect.center_x2();
        // a point sitting exactly on the center counts as neither
        prop_assert!(!(right && left));
    }
}
