//! Border renderers: one stroke geometry per border style
//!
//! This module implements the drawing side of [`Border`]. Every style
//! shares the same two entry points:
//!
//! - [`Border::draw`] paints one edge of a box whose neighboring edges are
//!   known, trimming or extending the painted region at both ends so that
//!   adjoining borders meet without gaps or double painting.
//! - [`Border::draw_cell_border`] paints the same visual style without any
//!   join accounting, for table cells whose neighbors are not known.
//!
//! # Drawing Convention
//!
//! Borders are drawn in the fixed order top → right → bottom → left, and
//! every segment is oriented so that, facing the direction of travel, the
//! box interior lies to the right. The given endpoints lie on the boundary
//! of the content area; the border body extends to the left of the travel
//! direction, away from the content. `width_before` and `width_after` are
//! the widths of the neighboring borders in the same cyclic order, e.g.
//! for the bottom edge `width_before` is the right border's width and
//! `width_after` the left border's.
//!
//! The [`Side`] a segment represents is recovered from the endpoint deltas
//! alone, which is what lets each renderer orient its join and bevel
//! geometry without being told which edge it is painting.

use crate::paint::canvas::{Canvas, LineCap};
use crate::style::border::{Border, BorderStyle};
use crate::style::color::Color;

/// Numeric tolerance for classifying segment deltas, in page units
///
/// Axis deltas at or below this magnitude are treated as zero so float
/// rounding in the layout engine cannot flip a segment's orientation.
const SIDE_TOLERANCE: f32 = 0.0005;

/// Dash length multiplier for the dashed style
const DASH_MODIFIER: f32 = 5.0;

/// Initial gap multiplier for the dashed style
const DASHED_GAP_MODIFIER: f32 = 3.5;

/// Initial gap multiplier for the dotted style
const DOTTED_GAP_MODIFIER: f32 = 1.5;

/// Initial gap multiplier for the round-dots style
const ROUND_DOTS_GAP_MODIFIER: f32 = 2.5;

/// The box side a border segment represents
///
/// Produced per draw call from the segment's endpoint deltas and never
/// stored. `None` marks a degenerate segment (or NaN coordinates), which
/// renderers treat as a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Degenerate segment, nothing to draw
    None,
    /// Horizontal segment travelling left to right
    Top,
    /// Vertical segment travelling top to bottom
    Right,
    /// Horizontal segment travelling right to left
    Bottom,
    /// Vertical segment travelling bottom to top
    Left,
}

impl Side {
    /// Classifies a segment by the sign of its endpoint deltas
    ///
    /// Under the drawing convention the travel direction determines the
    /// side uniquely: rightward is TOP, downward is RIGHT, leftward is
    /// BOTTOM, upward is LEFT. When both axis deltas exceed the tolerance
    /// the resolution order is TOP, RIGHT, BOTTOM, LEFT; well-formed
    /// axis-aligned callers never produce such segments, but the order is
    /// part of the contract and must not change.
    ///
    /// # Examples
    ///
    /// ```
    /// use fastborder::Side;
    ///
    /// assert_eq!(Side::from_segment(0.0, 10.0, 5.0, 10.0), Side::Top);
    /// assert_eq!(Side::from_segment(5.0, 10.0, 5.0, 0.0), Side::Right);
    /// assert_eq!(Side::from_segment(1.0, 1.0, 1.0, 1.0), Side::None);
    /// ```
    pub fn from_segment(x1: f32, y1: f32, x2: f32, y2: f32) -> Side {
        let dx = x2 - x1;
        let dy = y2 - y1;

        let mut is_left = false;
        let mut is_right = false;
        if dy.abs() > SIDE_TOLERANCE {
            is_left = dy > 0.0;
            is_right = dy < 0.0;
        }

        let mut is_top = false;
        let mut is_bottom = false;
        if dx.abs() > SIDE_TOLERANCE {
            is_top = dx > 0.0;
            is_bottom = dx < 0.0;
        }

        if is_top {
            Side::Top
        } else if is_right {
            Side::Right
        } else if is_bottom {
            Side::Bottom
        } else if is_left {
            Side::Left
        } else {
            Side::None
        }
    }
}

/// Renormalises a dash period so a whole number of periods fits the edge
///
/// Returns `length / ceil(length / initial_period)`, the largest period not
/// exceeding the initial one that divides the edge evenly. Keeping whole
/// periods on every edge is what makes dash patterns of adjoining edges
/// line up at the corners.
fn dots_gap(length: f32, initial_period: f32) -> f32 {
    let periods = (length / initial_period).ceil();
    if periods > 0.0 {
        length / periods
    } else {
        initial_period
    }
}

/// Euclidean length of a segment
fn segment_length(x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
    let dx = x2 - x1;
    let dy = y2 - y1;
    (dx * dx + dy * dy).sqrt()
}

/// Emits a closed quadrilateral and fills it
///
/// The path returns to the first corner explicitly, matching the content
/// stream shape a page canvas expects for an unambiguous closed region.
fn fill_quad<C: Canvas + ?Sized>(
    canvas: &mut C,
    x1: f32,
    y1: f32,
    x2: f32,
    y2: f32,
    x3: f32,
    y3: f32,
    x4: f32,
    y4: f32,
) {
    canvas.move_to(x1, y1);
    canvas.line_to(x2, y2);
    canvas.line_to(x3, y3);
    canvas.line_to(x4, y4);
    canvas.line_to(x1, y1);
    canvas.fill();
}

impl Border {
    /// Paints one edge of a box whose neighboring edge widths are known
    ///
    /// `(x1, y1)`-`(x2, y2)` is the edge segment on the content-area
    /// boundary, oriented per the drawing convention (see the module
    /// documentation). `width_before` and `width_after` are the widths of
    /// the neighboring borders preceding and following this edge in the
    /// top → right → bottom → left cycle; they shape the painted region at
    /// the two corners so adjoining borders meet seam-free.
    ///
    /// Non-positive or NaN widths and degenerate segments are silent
    /// no-ops: border painting never aborts page generation.
    ///
    /// The graphics state is not saved or restored here; the layout engine
    /// brackets the whole border pass instead.
    pub fn draw<C: Canvas + ?Sized>(
        &self,
        canvas: &mut C,
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        width_before: f32,
        width_after: f32,
    ) {
        if !(self.width() > 0.0) {
            return;
        }
        match self.style() {
            BorderStyle::Solid => self.draw_solid(canvas, x1, y1, x2, y2, width_before, width_after),
            BorderStyle::Dashed => {
                self.draw_stroked(canvas, x1, y1, x2, y2, DashGeometry::dashed(self.width()))
            }
            BorderStyle::Dotted => {
                self.draw_stroked(canvas, x1, y1, x2, y2, DashGeometry::dotted(self.width()))
            }
            BorderStyle::RoundDots => {
                self.draw_stroked(canvas, x1, y1, x2, y2, DashGeometry::round_dots(self.width()))
            }
            BorderStyle::Double => self.draw_double(canvas, x1, y1, x2, y2, width_before, width_after),
            BorderStyle::Groove | BorderStyle::Inset | BorderStyle::Outset | BorderStyle::Ridge => {
                self.draw_three_d(canvas, x1, y1, x2, y2, width_before, width_after)
            }
        }
    }

    /// Paints this border along a table-cell edge
    ///
    /// Same visual style as [`Border::draw`] but without join accounting:
    /// the painted region is centered on the given segment and the
    /// neighboring widths are never consulted. State changes (stroke
    /// color, line width, dash pattern) are bracketed in
    /// `save_state`/`restore_state` so the surrounding content stream is
    /// unaffected.
    pub fn draw_cell_border<C: Canvas + ?Sized>(&self, canvas: &mut C, x1: f32, y1: f32, x2: f32, y2: f32) {
        if !(self.width() > 0.0) {
            return;
        }
        if Side::from_segment(x1, y1, x2, y2) == Side::None {
            return;
        }
        match self.style() {
            BorderStyle::Solid
            | BorderStyle::Groove
            | BorderStyle::Inset
            | BorderStyle::Outset
            | BorderStyle::Ridge => {
                canvas.save_state();
                canvas.set_stroke_color(self.color());
                canvas.set_line_width(self.width());
                canvas.move_to(x1, y1);
                canvas.line_to(x2, y2);
                canvas.stroke();
                canvas.restore_state();
            }
            BorderStyle::Dashed => {
                self.cell_border_stroked(canvas, x1, y1, x2, y2, DashGeometry::dashed(self.width()));
            }
            BorderStyle::Dotted => {
                self.cell_border_stroked(canvas, x1, y1, x2, y2, DashGeometry::dotted(self.width()));
            }
            BorderStyle::RoundDots => {
                self.cell_border_stroked(canvas, x1, y1, x2, y2, DashGeometry::round_dots(self.width()));
            }
            BorderStyle::Double => self.cell_border_double(canvas, x1, y1, x2, y2),
        }
    }

    /// Solid edge: one filled quadrilateral
    ///
    /// The inner edge is the raw segment; the outer edge is offset outward
    /// by the full width and extended along the tangent by the neighbor
    /// widths. The slanted ends are exactly the miter diagonals the
    /// neighboring borders produce, so adjoining solid borders tile the
    /// corner without gap or overlap.
    fn draw_solid<C: Canvas + ?Sized>(
        &self,
        canvas: &mut C,
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        width_before: f32,
        width_after: f32,
    ) {
        let w = self.width();
        let (x3, y3, x4, y4) = match Side::from_segment(x1, y1, x2, y2) {
            Side::Top => (x2 + width_after, y2 + w, x1 - width_before, y1 + w),
            Side::Right => (x2 + w, y2 - width_after, x1 + w, y1 + width_before),
            Side::Bottom => (x2 - width_after, y2 - w, x1 + width_before, y1 - w),
            Side::Left => (x2 - w, y2 + width_after, x1 - w, y1 - width_before),
            Side::None => return,
        };
        canvas.set_fill_color(self.color());
        fill_quad(canvas, x1, y1, x2, y2, x3, y3, x4, y4);
    }

    /// Dash-patterned edge (dashed, dotted, and round-dots styles)
    ///
    /// The stroke runs along the center line of the border band, i.e. the
    /// segment offset outward by half the width. The dash period is
    /// renormalized to the edge length so corners start and end on the same
    /// phase regardless of edge length.
    fn draw_stroked<C: Canvas + ?Sized>(
        &self,
        canvas: &mut C,
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        geometry: DashGeometry,
    ) {
        let length = segment_length(x1, y1, x2, y2);
        if !(length > SIDE_TOLERANCE) {
            return;
        }
        let half = self.width() / 2.0;
        let (x1, y1, x2, y2) = match Side::from_segment(x1, y1, x2, y2) {
            Side::Top => (x1, y1 + half, x2, y2 + half),
            Side::Right => (x1 + half, y1, x2 + half, y2),
            Side::Bottom => (x1, y1 - half, x2, y2 - half),
            Side::Left => (x1 - half, y1, x2 - half, y2),
            Side::None => return,
        };
        canvas.set_line_width(self.width());
        canvas.set_stroke_color(self.color());
        geometry.apply(canvas, length);
        canvas.move_to(x1, y1);
        canvas.line_to(x2, y2);
        canvas.stroke();
    }

    /// Double edge: two filled stripes of a third of the width
    ///
    /// The band splits into an inner stripe on the content boundary, a gap,
    /// and an outer stripe, each `width / 3` thick. Join extensions use the
    /// corresponding thirds of the neighbor widths, so the stripes of two
    /// adjoining double borders continue into each other around the corner.
    fn draw_double<C: Canvas + ?Sized>(
        &self,
        canvas: &mut C,
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        width_before: f32,
        width_after: f32,
    ) {
        let side = Side::from_segment(x1, y1, x2, y2);
        if side == Side::None {
            return;
        }
        let third = self.width() / 3.0;
        let third_before = width_before / 3.0;
        let third_after = width_after / 3.0;

        canvas.set_fill_color(self.color());

        // Inner stripe sits on the raw segment.
        let (x3, y3, x4, y4) = match side {
            Side::Top => (x2 + third_after, y2 + third, x1 - third_before, y1 + third),
            Side::Right => (x2 + third, y2 - third_after, x1 + third, y1 + third_before),
            Side::Bottom => (x2 - third_after, y2 - third, x1 + third_before, y1 - third),
            Side::Left => (x2 - third, y2 + third_after, x1 - third, y1 - third_before),
            Side::None => unreachable!(),
        };
        fill_quad(canvas, x1, y1, x2, y2, x3, y3, x4, y4);

        // Outer stripe: the same shape shifted two thirds outward, with the
        // base widened along the miter diagonals.
        let (x1, y1, x2, y2) = match side {
            Side::Top => (
                x1 - 2.0 * third_before,
                y1 + 2.0 * third,
                x2 + 2.0 * third_after,
                y2 + 2.0 * third,
            ),
            Side::Right => (
                x1 + 2.0 * third,
                y1 + 2.0 * third_before,
                x2 + 2.0 * third,
                y2 - 2.0 * third_after,
            ),
            Side::Bottom => (
                x1 + 2.0 * third_before,
                y1 - 2.0 * third,
                x2 - 2.0 * third_after,
                y2 - 2.0 * third,
            ),
            Side::Left => (
                x1 - 2.0 * third,
                y1 - 2.0 * third_before,
                x2 - 2.0 * third,
                y2 + 2.0 * third_after,
            ),
            Side::None => unreachable!(),
        };
        let (x3, y3, x4, y4) = match side {
            Side::Top => (x2 + third_after, y2 + third, x1 - third_before, y1 + third),
            Side::Right => (x2 + third, y2 - third_after, x1 + third, y1 + third_before),
            Side::Bottom => (x2 - third_after, y2 - third, x1 + third_before, y1 - third),
            Side::Left => (x2 - third, y2 + third_after, x1 - third, y1 - third_before),
            Side::None => unreachable!(),
        };
        fill_quad(canvas, x1, y1, x2, y2, x3, y3, x4, y4);
    }

    /// 3-D edge: the band split into a shaded inner and outer half
    ///
    /// Both halves are `width / 2` thick with half-width join extensions.
    /// The shade of each half comes from [`Border::three_d_shades`], which
    /// flips the assignment between the style pairs and between the
    /// top/left and bottom/right sides so the bevel reads consistently
    /// around the whole box.
    fn draw_three_d<C: Canvas + ?Sized>(
        &self,
        canvas: &mut C,
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        width_before: f32,
        width_after: f32,
    ) {
        let side = Side::from_segment(x1, y1, x2, y2);
        if side == Side::None {
            return;
        }
        let half = self.width() / 2.0;
        let half_before = width_before / 2.0;
        let half_after = width_after / 2.0;
        let (inner_shade, outer_shade) = self.three_d_shades(side);

        // Inner half sits on the raw segment.
        let (x3, y3, x4, y4) = match side {
            Side::Top => (x2 + half_after, y2 + half, x1 - half_before, y1 + half),
            Side::Right => (x2 + half, y2 - half_after, x1 + half, y1 + half_before),
            Side::Bottom => (x2 - half_after, y2 - half, x1 + half_before, y1 - half),
            Side::Left => (x2 - half, y2 + half_after, x1 - half, y1 - half_before),
            Side::None => unreachable!(),
        };
        canvas.set_fill_color(inner_shade);
        fill_quad(canvas, x1, y1, x2, y2, x3, y3, x4, y4);

        // Outer half continues from the inner half's outer edge.
        let (x1, y1, x2, y2) = match side {
            Side::Top => (x1 - half_before, y1 + half, x2 + half_after, y2 + half),
            Side::Right => (x1 + half, y1 + half_before, x2 + half, y2 - half_after),
            Side::Bottom => (x1 + half_before, y1 - half, x2 - half_after, y2 - half),
            Side::Left => (x1 - half, y1 - half_before, x2 - half, y2 + half_after),
            Side::None => unreachable!(),
        };
        let (x3, y3, x4, y4) = match side {
            Side::Top => (x2 + half_after, y2 + half, x1 - half_before, y1 + half),
            Side::Right => (x2 + half, y2 - half_after, x1 + half, y1 + half_before),
            Side::Bottom => (x2 - half_after, y2 - half, x1 + half_before, y1 - half),
            Side::Left => (x2 - half, y2 + half_after, x1 - half, y1 - half_before),
            Side::None => unreachable!(),
        };
        canvas.set_fill_color(outer_shade);
        fill_quad(canvas, x1, y1, x2, y2, x3, y3, x4, y4);
    }

    /// Shades for the (inner, outer) halves of a 3-D border on `side`
    ///
    /// Groove/Ridge use opposite shades on the two halves; Inset/Outset
    /// shade both halves alike. Within each pair the assignment is the
    /// complement of the other style, and every assignment flips between
    /// the top/left and bottom/right sides.
    fn three_d_shades(&self, side: Side) -> (Color, Color) {
        let light = self.color().lighter();
        let dark = self.color().darker();
        let top_left = matches!(side, Side::Top | Side::Left);
        match self.style() {
            BorderStyle::Groove => {
                if top_left {
                    (light, dark)
                } else {
                    (dark, light)
                }
            }
            BorderStyle::Ridge => {
                if top_left {
                    (dark, light)
                } else {
                    (light, dark)
                }
            }
            BorderStyle::Inset => {
                if top_left {
                    (dark, dark)
                } else {
                    (light, light)
                }
            }
            BorderStyle::Outset => {
                if top_left {
                    (light, light)
                } else {
                    (dark, dark)
                }
            }
            _ => (self.color(), self.color()),
        }
    }

    /// Dash-patterned cell border, centered on the given segment
    fn cell_border_stroked<C: Canvas + ?Sized>(
        &self,
        canvas: &mut C,
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        geometry: DashGeometry,
    ) {
        let length = segment_length(x1, y1, x2, y2);
        if !(length > SIDE_TOLERANCE) {
            return;
        }
        canvas.save_state();
        canvas.set_line_width(self.width());
        canvas.set_stroke_color(self.color());
        geometry.apply(canvas, length);
        canvas.move_to(x1, y1);
        canvas.line_to(x2, y2);
        canvas.stroke();
        canvas.restore_state();
    }

    /// Double cell border: two strokes of a third of the width
    ///
    /// The stripes sit a third of the width either side of the given
    /// segment, leaving the same `width / 3` gap as the joined form.
    fn cell_border_double<C: Canvas + ?Sized>(&self, canvas: &mut C, x1: f32, y1: f32, x2: f32, y2: f32) {
        let third = self.width() / 3.0;
        let (ox, oy) = match Side::from_segment(x1, y1, x2, y2) {
            Side::Top | Side::Bottom => (0.0, third),
            Side::Right | Side::Left => (third, 0.0),
            Side::None => return,
        };
        canvas.save_state();
        canvas.set_stroke_color(self.color());
        canvas.set_line_width(third);
        canvas.move_to(x1 + ox, y1 + oy);
        canvas.line_to(x2 + ox, y2 + oy);
        canvas.stroke();
        canvas.move_to(x1 - ox, y1 - oy);
        canvas.line_to(x2 - ox, y2 - oy);
        canvas.stroke();
        canvas.restore_state();
    }
}

/// Dash pattern parameters for one of the dash-based styles
///
/// Holds the style's raw dash length and initial period; `apply` derives
/// the edge-length-adjusted pattern and emits the dash and cap state.
#[derive(Debug, Clone, Copy)]
struct DashGeometry {
    /// Painted dash length, zero for round dots
    dash: f32,
    /// Period the gap derivation starts from
    initial_period: f32,
    /// Cap applied to each dash segment
    cap: LineCap,
}

impl DashGeometry {
    fn dashed(width: f32) -> Self {
        let dash = width * DASH_MODIFIER;
        Self {
            dash,
            initial_period: width * DASHED_GAP_MODIFIER + dash,
            cap: LineCap::Butt,
        }
    }

    fn dotted(width: f32) -> Self {
        Self {
            dash: width,
            initial_period: width * DOTTED_GAP_MODIFIER + width,
            cap: LineCap::Butt,
        }
    }

    fn round_dots(width: f32) -> Self {
        Self {
            dash: 0.0,
            initial_period: width * ROUND_DOTS_GAP_MODIFIER,
            cap: LineCap::Round,
        }
    }

    /// Emits the dash state for an edge of the given length
    ///
    /// The gap is the renormalized period minus the dash length, and the
    /// phase centers the pattern on the edge so both corners carry the
    /// same partial dash.
    fn apply<C: Canvas + ?Sized>(self, canvas: &mut C, length: f32) {
        let mut gap = dots_gap(length, self.initial_period);
        if gap > self.dash {
            gap -= self.dash;
        }
        if self.cap != LineCap::Butt {
            canvas.set_line_cap(self.cap);
        }
        canvas.set_line_dash(self.dash, gap, self.dash + gap / 2.0);
    }
}
