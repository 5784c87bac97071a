//! Recorded canvas operations
//!
//! This module provides a flat, ordered list of typed canvas operations and
//! a [`Canvas`] implementation that records into it. The display list sits
//! between the border renderers and a concrete drawing backend:
//!
//! ```text
//! Border renderers → DisplayList → page canvas backend
//! ```
//!
//! Recording serves two purposes:
//! - **Testing**: join accounting and dash geometry are verified against
//!   the exact operation sequence, never against pixels.
//! - **Replay**: a border drawn identically on many pages can be recorded
//!   once and stamped onto each page's canvas.
//!
//! # Example
//!
//! ```
//! use fastborder::{Border, CanvasOp, Color, RecordingCanvas};
//!
//! let border = Border::solid(Color::BLACK, 1.0);
//! let mut canvas = RecordingCanvas::new();
//! border.draw(&mut canvas, 0.0, 100.0, 200.0, 100.0, 1.0, 1.0);
//!
//! let list = canvas.into_list();
//! assert!(matches!(list.ops().last(), Some(CanvasOp::Fill)));
//! ```

use crate::error::{Error, Result};
use crate::geometry::{Point, Rect};
use crate::paint::canvas::{Canvas, LineCap};
use crate::style::color::Color;

// ============================================================================
// Operation Types
// ============================================================================

/// A single recorded canvas operation
///
/// One variant per [`Canvas`] capability, carrying exactly the arguments of
/// the call that produced it.
#[derive(Debug, Clone, PartialEq)]
pub enum CanvasOp {
    /// Begin a new subpath
    MoveTo(Point),

    /// Extend the current subpath
    LineTo(Point),

    /// Append a closed rectangular subpath
    Rectangle(Rect),

    /// Set the fill color
    SetFillColor(Color),

    /// Set the stroke color
    SetStrokeColor(Color),

    /// Set the stroke line width
    SetLineWidth(f32),

    /// Set the dash pattern
    SetLineDash { on: f32, off: f32, phase: f32 },

    /// Set the line cap
    SetLineCap(LineCap),

    /// Fill the pending path
    Fill,

    /// Stroke the pending path
    Stroke,

    /// Push the graphics state
    SaveState,

    /// Pop the graphics state
    RestoreState,
}

// ============================================================================
// Display List
// ============================================================================

/// A flat, ordered list of canvas operations
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DisplayList {
    ops: Vec<CanvasOp>,
}

impl DisplayList {
    /// Creates an empty display list
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an operation
    pub fn push(&mut self, op: CanvasOp) {
        self.ops.push(op);
    }

    /// The recorded operations in order
    pub fn ops(&self) -> &[CanvasOp] {
        &self.ops
    }

    /// Number of recorded operations
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// Returns true if nothing was recorded
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Iterates over the recorded operations
    pub fn iter(&self) -> std::slice::Iter<'_, CanvasOp> {
        self.ops.iter()
    }

    /// Checks that the graphics-state stack is balanced
    ///
    /// A `RestoreState` with no matching `SaveState` reports the offending
    /// operation index; `SaveState` calls left open at the end of the list
    /// report the remaining depth.
    pub fn validate(&self) -> Result<()> {
        let mut depth = 0usize;
        for (index, op) in self.ops.iter().enumerate() {
            match op {
                CanvasOp::SaveState => depth += 1,
                CanvasOp::RestoreState => {
                    depth = depth.checked_sub(1).ok_or(Error::StateUnderflow { index })?;
                }
                _ => {}
            }
        }
        if depth > 0 {
            return Err(Error::UnbalancedState { depth });
        }
        Ok(())
    }

    /// Re-issues every recorded operation against another canvas
    ///
    /// Validates the state stack first so a malformed recording is rejected
    /// before any operation reaches the target.
    pub fn replay<C: Canvas + ?Sized>(&self, target: &mut C) -> Result<()> {
        self.validate()?;
        for op in &self.ops {
            match *op {
                CanvasOp::MoveTo(p) => target.move_to(p.x, p.y),
                CanvasOp::LineTo(p) => target.line_to(p.x, p.y),
                CanvasOp::Rectangle(r) => target.rectangle(r.x, r.y, r.width, r.height),
                CanvasOp::SetFillColor(color) => target.set_fill_color(color),
                CanvasOp::SetStrokeColor(color) => target.set_stroke_color(color),
                CanvasOp::SetLineWidth(width) => target.set_line_width(width),
                CanvasOp::SetLineDash { on, off, phase } => target.set_line_dash(on, off, phase),
                CanvasOp::SetLineCap(cap) => target.set_line_cap(cap),
                CanvasOp::Fill => target.fill(),
                CanvasOp::Stroke => target.stroke(),
                CanvasOp::SaveState => target.save_state(),
                CanvasOp::RestoreState => target.restore_state(),
            }
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a DisplayList {
    type Item = &'a CanvasOp;
    type IntoIter = std::slice::Iter<'a, CanvasOp>;

    fn into_iter(self) -> Self::IntoIter {
        self.ops.iter()
    }
}

// ============================================================================
// Recording Canvas
// ============================================================================

/// A [`Canvas`] that records every operation into a [`DisplayList`]
#[derive(Debug, Clone, Default)]
pub struct RecordingCanvas {
    list: DisplayList,
}

impl RecordingCanvas {
    /// Creates an empty recording canvas
    pub fn new() -> Self {
        Self::default()
    }

    /// The operations recorded so far
    pub fn ops(&self) -> &[CanvasOp] {
        self.list.ops()
    }

    /// Consumes the canvas and returns the recording
    pub fn into_list(self) -> DisplayList {
        self.list
    }
}

impl Canvas for RecordingCanvas {
    fn move_to(&mut self, x: f32, y: f32) {
        self.list.push(CanvasOp::MoveTo(Point::new(x, y)));
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.list.push(CanvasOp::LineTo(Point::new(x, y)));
    }

    fn rectangle(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.list.push(CanvasOp::Rectangle(Rect::from_xywh(x, y, width, height)));
    }

    fn set_fill_color(&mut self, color: Color) {
        self.list.push(CanvasOp::SetFillColor(color));
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.list.push(CanvasOp::SetStrokeColor(color));
    }

    fn set_line_width(&mut self, width: f32) {
        self.list.push(CanvasOp::SetLineWidth(width));
    }

    fn set_line_dash(&mut self, on: f32, off: f32, phase: f32) {
        self.list.push(CanvasOp::SetLineDash { on, off, phase });
    }

    fn set_line_cap(&mut self, cap: LineCap) {
        self.list.push(CanvasOp::SetLineCap(cap));
    }

    fn fill(&mut self) {
        self.list.push(CanvasOp::Fill);
    }

    fn stroke(&mut self) {
        self.list.push(CanvasOp::Stroke);
    }

    fn save_state(&mut self) {
        self.list.push(CanvasOp::SaveState);
    }

    fn restore_state(&mut self) {
        self.list.push(CanvasOp::RestoreState);
    }
}
