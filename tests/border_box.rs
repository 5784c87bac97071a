//! End-to-end border painting scenarios
//!
//! These tests drive whole boxes through the renderers the way a layout
//! engine would (edges in top → right → bottom → left order, interior to
//! the right of travel) and verify the recorded canvas call sequence.

use fastborder::{Border, CanvasOp, Color, Point, RecordingCanvas};

/// Corner lists of the filled quadrilaterals in a recorded op sequence.
fn filled_quads(ops: &[CanvasOp]) -> Vec<Vec<Point>> {
    let mut quads = Vec::new();
    let mut current = Vec::new();
    for op in ops {
        match op {
            CanvasOp::MoveTo(p) => current = vec![*p],
            CanvasOp::LineTo(p) => current.push(*p),
            CanvasOp::Fill => quads.push(std::mem::take(&mut current)),
            _ => {}
        }
    }
    quads
}

fn fill_colors(ops: &[CanvasOp]) -> Vec<Color> {
    ops.iter()
        .filter_map(|op| match op {
            CanvasOp::SetFillColor(c) => Some(*c),
            _ => None,
        })
        .collect()
}

/// Draws all four edges of a box with one shared border, returning the ops.
///
/// `left`/`bottom`/`right`/`top` are the content-area bounds; every edge
/// gets the border's own width as both neighbor widths, as a layout engine
/// does when all four edges share the same border.
fn draw_box(border: &Border, left: f32, bottom: f32, right: f32, top: f32) -> Vec<CanvasOp> {
    let w = border.width();
    let mut canvas = RecordingCanvas::new();
    border.draw(&mut canvas, left, top, right, top, w, w);
    border.draw(&mut canvas, right, top, right, bottom, w, w);
    border.draw(&mut canvas, right, bottom, left, bottom, w, w);
    border.draw(&mut canvas, left, bottom, left, top, w, w);
    canvas.into_list().ops().to_vec()
}

#[test]
fn solid_box_outline_is_closed_and_seam_free() {
    let border = Border::solid(Color::BLACK, 1.0);
    let ops = draw_box(&border, 0.0, 0.0, 100.0, 100.0);

    let quads = filled_quads(&ops);
    assert_eq!(quads.len(), 4, "each edge paints exactly one quadrilateral");

    // Every edge's quad: inner edge on the content boundary, outer edge
    // offset by the width and extended by the neighbor widths.
    let expected = [
        // top
        [
            Point::new(0.0, 100.0),
            Point::new(100.0, 100.0),
            Point::new(101.0, 101.0),
            Point::new(-1.0, 101.0),
        ],
        // right
        [
            Point::new(100.0, 100.0),
            Point::new(100.0, 0.0),
            Point::new(101.0, -1.0),
            Point::new(101.0, 101.0),
        ],
        // bottom
        [
            Point::new(100.0, 0.0),
            Point::new(0.0, 0.0),
            Point::new(-1.0, -1.0),
            Point::new(101.0, -1.0),
        ],
        // left
        [
            Point::new(0.0, 0.0),
            Point::new(0.0, 100.0),
            Point::new(-1.0, 101.0),
            Point::new(-1.0, -1.0),
        ],
    ];
    for (quad, corners) in quads.iter().zip(&expected) {
        assert_eq!(&quad[..4], corners);
        assert_eq!(quad[4], corners[0], "quad path returns to its first corner");
    }

    // Adjoining edges share their miter diagonal exactly: the end of one
    // edge and the start of the next coincide at both the inner corner and
    // the outward-extended corner, so corners are tiled with zero gap and
    // zero overlap.
    for i in 0..4 {
        let next = (i + 1) % 4;
        let inner_end = quads[i][1];
        let outer_end = quads[i][2];
        let inner_start = quads[next][0];
        let outer_start = quads[next][3];
        assert_eq!(inner_end, inner_start, "inner corner {} shared", i);
        assert_eq!(outer_end, outer_start, "outer corner {} shared", i);
    }
}

#[test]
fn solid_join_extension_matches_neighbor_widths_exactly() {
    // Top edge of width 4 between a left border of width 2 and a right
    // border of width 6.
    let border = Border::solid(Color::BLACK, 4.0);
    let mut canvas = RecordingCanvas::new();
    border.draw(&mut canvas, 0.0, 100.0, 100.0, 100.0, 2.0, 6.0);

    let quads = filled_quads(canvas.ops());
    assert_eq!(
        &quads[0][..4],
        &[
            Point::new(0.0, 100.0),
            Point::new(100.0, 100.0),
            Point::new(106.0, 104.0),
            Point::new(-2.0, 104.0),
        ]
    );
}

#[test]
fn groove_box_bevel_reads_consistently_around_the_box() {
    let border = Border::groove(Color::GRAY, 2.0);
    let ops = draw_box(&border, 0.0, 0.0, 100.0, 100.0);

    let fills = fill_colors(&ops);
    assert_eq!(fills.len(), 8, "each edge paints two shaded halves");

    let light = Color::GRAY.lighter();
    let dark = Color::GRAY.darker();
    // (inner, outer) per edge in drawing order: the assignment flips from
    // the top/left sides to the bottom/right sides.
    assert_eq!(fills[0..2], [light, dark]); // top
    assert_eq!(fills[2..4], [dark, light]); // right
    assert_eq!(fills[4..6], [dark, light]); // bottom
    assert_eq!(fills[6..8], [light, dark]); // left
}

#[test]
fn double_box_stripes_meet_stripe_for_stripe() {
    let border = Border::double(Color::BLACK, 3.0);
    let ops = draw_box(&border, 0.0, 0.0, 90.0, 90.0);

    let quads = filled_quads(&ops);
    assert_eq!(quads.len(), 8);

    // At the top-right corner the top edge's stripes end on the miter
    // diagonal where the right edge's stripes begin.
    let top_inner = &quads[0];
    let top_outer = &quads[1];
    let right_inner = &quads[2];
    let right_outer = &quads[3];
    assert_eq!(top_inner[1], right_inner[0]);
    assert_eq!(top_inner[2], right_inner[3]);
    assert_eq!(top_outer[1], right_outer[0]);
    assert_eq!(top_outer[2], right_outer[3]);
}

#[test]
fn cell_borders_never_disturb_surrounding_state() {
    let borders = [
        Border::solid(Color::BLACK, 1.0),
        Border::dashed(Color::BLACK, 1.0),
        Border::dotted(Color::BLACK, 1.0),
        Border::round_dots(Color::BLACK, 1.0),
        Border::double(Color::BLACK, 3.0),
        Border::ridge(Color::GRAY, 2.0),
    ];

    let mut canvas = RecordingCanvas::new();
    for border in &borders {
        border.draw_cell_border(&mut canvas, 0.0, 0.0, 50.0, 0.0);
        border.draw_cell_border(&mut canvas, 50.0, 0.0, 50.0, -20.0);
    }
    let list = canvas.into_list();

    list.validate().expect("cell borders bracket their state changes");
    let saves = list.iter().filter(|op| **op == CanvasOp::SaveState).count();
    assert_eq!(saves, borders.len() * 2);
}

#[test]
fn recorded_border_pass_replays_identically() {
    let border = Border::dashed(Color::BLUE, 2.0);
    let mut canvas = RecordingCanvas::new();
    border.draw(&mut canvas, 0.0, 40.0, 80.0, 40.0, 2.0, 2.0);
    border.draw(&mut canvas, 80.0, 40.0, 80.0, 0.0, 2.0, 2.0);
    let recorded = canvas.into_list();

    let mut target = RecordingCanvas::new();
    recorded.replay(&mut target).expect("recording is well-formed");
    assert_eq!(target.into_list(), recorded);
}

#[test]
fn absent_border_draws_nothing_by_construction() {
    // "No border" is the absence of a Border value; a box edge styled with
    // None simply never reaches the renderers.
    let edge: Option<Border> = None;
    let mut canvas = RecordingCanvas::new();
    if let Some(border) = &edge {
        border.draw(&mut canvas, 0.0, 0.0, 100.0, 0.0, 0.0, 0.0);
    }
    assert!(canvas.ops().is_empty());
}
