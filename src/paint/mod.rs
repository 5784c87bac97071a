//! Border painting
//!
//! This module turns resolved [`crate::style::Border`] values into vector
//! drawing calls against a [`canvas::Canvas`].
//!
//! # Architecture
//!
//! Painting is a two-phase pipeline:
//! 1. **Rendering**: a border renderer emits canvas operations for one box
//!    edge, orienting its join geometry from the segment alone.
//! 2. **Backend**: the receiving [`canvas::Canvas`] implementation turns the
//!    operations into page content; the [`display_list`] implementation
//!    instead records them for inspection or later replay.
//!
//! Box edges are painted in the fixed order top → right → bottom → left;
//! see [`border`] for the full drawing convention.

pub mod border;
pub mod canvas;
pub mod display_list;

pub use border::Side;
pub use canvas::{Canvas, LineCap};
pub use display_list::{CanvasOp, DisplayList, RecordingCanvas};
