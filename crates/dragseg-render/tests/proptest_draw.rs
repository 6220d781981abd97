//! Clipping invariants for the drawing helpers.

use dragseg_render::Buffer;
use dragseg_render::Style;
use dragseg_render::drawing::draw_text;
use proptest::prelude::*;

proptest! {
    #[test]
    fn draw_text_never_writes_past_max_x(
        text in "[a-z日本 ]{0,24}",
        x in 0u16..10,
        max_x in 0u16..20,
    ) {
        let mut buf = Buffer::new(20, 1);
        let end = draw_text(&mut buf, x, 0, &text, Style::new(), max_x);
        prop_assert!(end <= max_x.max(x));
        for col in max_x.max(x)..20 {
            prop_assert_eq!(buf.get(col, 0).and_then(|c| c.as_char()), Some(' '));
        }
    }
}
