#![forbid(unsafe_code)]

//! Render kernel: cells, styles, and the buffer widgets draw into.
//!
//! The kernel knows nothing about input or widgets. It owns a fixed grid of
//! [`cell::Cell`] values plus the small set of drawing helpers the reorder
//! widget needs (clipped text spans and box borders).

pub mod buffer;
pub mod cell;
pub mod drawing;
pub mod style;

pub use buffer::Buffer;
pub use cell::{Cell, Rgb, StyleFlags};
pub use style::Style;
