#![forbid(unsafe_code)]

//! Reorderable multi-container list widget.
//!
//! `dragseg` presents a two-level collection (containers holding ordered
//! items) and lets the user rearrange it with a pointer, touch, or the
//! keyboard. Every input path funnels into one constrained move, so fixed
//! items, container capacities, and per-container validators hold no matter
//! how the move was requested.
//!
//! # Layers
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Backing data, visual elements, the move primitive |
//! | [`constraint`] | Move admissibility (range, capacity, fixed) |
//! | [`geometry`] | Drop-point to insertion-index resolution |
//! | [`selection`] | Selection, focus, outside-click dismissal |
//! | [`input`] | Pointer, touch, and keyboard adapters |
//! | [`layout`] | Container split and item flow |
//! | [`board`] | The widget that ties it all together |
//!
//! Index convention: a destination index is an insertion point in the
//! destination *after* the source item has been removed.

pub mod board;
pub mod config;
pub mod constraint;
pub mod container;
pub mod element;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod input;
pub mod layout;
pub mod placeholder;
pub mod selection;
pub mod submit;
pub mod validity;
pub mod widget;

pub use board::{EventOutcome, ReorderBoard};
pub use config::{Axis, BoardOptions, Capacity, ReorderConfig, Validator};
pub use container::{ContainerMarks, ContainerShell};
pub use element::{ElementId, ElementMarks, ItemElement, ItemPos, Placement};
pub use engine::ReorderEngine;
pub use error::{BoardError, MoveRejection};
pub use input::keyboard::Direction;
pub use selection::SelectionState;
pub use submit::SubmitFn;
pub use widget::{Chip, ItemWidget, Widget};
