//! Canvas capability interface consumed by the border renderers
//!
//! This module defines the minimal drawing surface the renderers need:
//! path construction, fill/stroke state, the dash machinery the dashed and
//! dotted styles drive, and a save/restore graphics-state stack.
//!
//! # Architecture
//!
//! The border subsystem emits a sequence of vector drawing calls and never
//! touches pixels; rasterization and content-stream serialization are the
//! backing implementation's concern. Any page or content-stream writer that
//! can honor these operations can be handed to the renderers. Tests use the
//! recording implementation in [`crate::paint::display_list`].
//!
//! # Example
//!
//! ```
//! use fastborder::{Canvas, Color, RecordingCanvas};
//!
//! let mut canvas = RecordingCanvas::new();
//! canvas.set_fill_color(Color::BLACK);
//! canvas.move_to(0.0, 0.0);
//! canvas.line_to(10.0, 0.0);
//! canvas.fill();
//! ```

use crate::style::color::Color;

/// Line cap applied to stroked path ends and dash segments
///
/// Follows page-canvas cap semantics: `Butt` ends the stroke exactly at the
/// endpoint, `Round` and `Square` project past it by half the line width.
/// The round-dots border style relies on `Round` caps to turn zero-length
/// dashes into circles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineCap {
    /// Stroke stops at the endpoint
    #[default]
    Butt,
    /// Semicircular cap centered on the endpoint
    Round,
    /// Half-width square cap past the endpoint
    Square,
}

/// The set of drawing capabilities the border renderers consume
///
/// Implementations are single-writer per page and synchronous; no method
/// returns an error because a drawing surface that can fail should fail at
/// flush time, not per primitive. Path construction follows the usual
/// current-point model: `move_to` starts a subpath, `line_to` extends it,
/// and `fill`/`stroke` consume the pending path.
pub trait Canvas {
    /// Begins a new subpath at the given point
    fn move_to(&mut self, x: f32, y: f32);

    /// Extends the current subpath with a straight segment
    fn line_to(&mut self, x: f32, y: f32);

    /// Appends a closed rectangular subpath
    fn rectangle(&mut self, x: f32, y: f32, width: f32, height: f32);

    /// Sets the color used by subsequent `fill` calls
    fn set_fill_color(&mut self, color: Color);

    /// Sets the color used by subsequent `stroke` calls
    fn set_stroke_color(&mut self, color: Color);

    /// Sets the stroke line width
    fn set_line_width(&mut self, width: f32);

    /// Sets the dash pattern: `on` units painted, `off` units skipped,
    /// starting `phase` units into the pattern
    ///
    /// An `on` length of zero paints dots whose shape is controlled by the
    /// current line cap.
    fn set_line_dash(&mut self, on: f32, off: f32, phase: f32);

    /// Sets the line cap for stroked path ends and dash segments
    fn set_line_cap(&mut self, cap: LineCap);

    /// Fills the pending path and clears it
    fn fill(&mut self);

    /// Strokes the pending path and clears it
    fn stroke(&mut self);

    /// Pushes the current graphics state
    fn save_state(&mut self);

    /// Pops the most recently saved graphics state
    fn restore_state(&mut self);

    /// Fills an axis-aligned rectangle with the current fill color
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.rectangle(x, y, width, height);
        self.fill();
    }

    /// Strokes an axis-aligned rectangle outline with the current stroke
    /// color and line width
    fn stroke_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.rectangle(x, y, width, height);
        self.stroke();
    }
}
