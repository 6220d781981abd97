#![forbid(unsafe_code)]

//! Core: geometry, canonical input events, and logging bootstrap.
//!
//! # Role in dragseg
//! `dragseg-core` is the input layer. It owns the normalized event types the
//! reorder widget consumes (keys, mouse, touch, resize, focus) and the cell
//! geometry every layer agrees on. The render kernel (`dragseg-render`) only
//! depends on the geometry half of this crate.

pub mod event;
pub mod geometry;
pub mod logging;
