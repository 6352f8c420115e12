//! End-to-end movement and drawing scenarios.
//!
//! Drives a full navigator through command sequences and checks the
//! resulting pose and canvas against independently computed expectations:
//! - Equilateral triangle: exact pixel coverage and heading closure
//! - Out-of-bounds move: unbounded position, clipped drawing
//! - Auto-stepped circle: polygon subdivision count and heading closure
//!
//! Run with: `cargo test --test scenarios`

use std::collections::HashSet;

use kurma_nav::{
    cells_along_segment, AngleMode, GridCoord, Navigator, NavigatorConfig, Vec2D,
};

fn navigator(mode: AngleMode, size: usize, start: (f64, f64)) -> Navigator {
    Navigator::new(NavigatorConfig {
        mode,
        canvas_width: size,
        canvas_height: size,
        start_x: start.0,
        start_y: start.1,
        ..NavigatorConfig::default()
    })
    .unwrap()
}

/// Angular difference on the 360 circle.
fn angle_diff(a: f64, b: f64) -> f64 {
    let d = (a - b).rem_euclid(360.0);
    d.min(360.0 - d)
}

#[test]
fn triangle_draws_exactly_three_segments() {
    let mut turtle = navigator(AngleMode::Logo, 128, (64.0, 64.0));

    turtle.forward(20.0).unwrap();
    assert_eq!(turtle.position(), Vec2D::new(64.0, 84.0));

    turtle.left(120.0).unwrap();
    turtle.forward(20.0).unwrap();
    assert_eq!(turtle.position(), Vec2D::new(47.0, 74.0));

    turtle.left(120.0).unwrap();
    turtle.forward(20.0).unwrap();
    assert_eq!(turtle.position(), Vec2D::new(64.0, 64.0));

    // Closing turn: after the third side the heading is 240° around; one
    // more left(120) closes the loop without drawing anything.
    turtle.left(120.0).unwrap();
    assert!(angle_diff(turtle.heading(), 0.0) < 1e-6);

    // Expected coverage: the union of the three rasterized sides. The
    // per-move "resting pixel keeps its value" rule changes nothing here:
    // each side's start is painted by a neighboring side, and the shared
    // start/end vertex is painted by the closing side.
    let vertices = [
        GridCoord::new(64, 64),
        GridCoord::new(64, 84),
        GridCoord::new(47, 74),
        GridCoord::new(64, 64),
    ];
    let mut expected: HashSet<GridCoord> = HashSet::new();
    for pair in vertices.windows(2) {
        expected.extend(cells_along_segment(pair[0], pair[1]));
    }

    for cell in &expected {
        assert!(
            (0..128).contains(&cell.x) && (0..128).contains(&cell.y),
            "expected cell {:?} outside the canvas",
            cell
        );
    }

    for y in 0..128 {
        for x in 0..128 {
            let cell = GridCoord::new(x, y);
            let drawn = turtle.canvas().get(cell) == Some(false);
            assert_eq!(
                drawn,
                expected.contains(&cell),
                "mismatch at {:?}",
                cell
            );
        }
    }
}

#[test]
fn out_of_bounds_move_keeps_position_clips_drawing() {
    let mut turtle = navigator(AngleMode::Standard, 128, (2.0, 2.0));
    turtle.forward(-1000.0).unwrap();

    // Position is the unclamped target
    assert_eq!(turtle.position(), Vec2D::new(-998.0, 2.0));

    // Drawing is the clamped run next to the origin; the resting pixel at
    // (2,2) keeps its background value
    assert_eq!(turtle.canvas().get(GridCoord::new(2, 2)), Some(true));
    assert_eq!(turtle.canvas().get(GridCoord::new(1, 2)), Some(false));
    assert_eq!(turtle.canvas().get(GridCoord::new(0, 2)), Some(false));
    assert_eq!(turtle.canvas().count_of(false), 2);
}

#[test]
fn auto_stepped_circle_uses_derived_polygon_count() {
    let mut turtle = navigator(AngleMode::Logo, 256, (128.0, 128.0));

    // 1 + floor(min(11 + 50/6, 59)) for a full circle
    assert_eq!(turtle.steps_for(50.0, 360.0), 20);

    let initial = turtle.heading();
    turtle.circle(50.0, None, None).unwrap();

    assert!(angle_diff(turtle.heading(), initial) < 1e-6);
    assert!(turtle.canvas().count_of(false) > 0);

    // Every drawn pixel sits inside the circle's bounding box (the center is
    // 50 units to the turtle's left, i.e. at (78, 128)), with slack for the
    // polygon chords and endpoint rounding.
    let (w, _h, pixels) = turtle.canvas().to_grayscale();
    for (i, value) in pixels.iter().enumerate() {
        if *value == 0 {
            let (x, y) = ((i % w) as i32, (i / w) as i32);
            assert!(
                (25..=131).contains(&x) && (75..=181).contains(&y),
                "drawn pixel ({}, {}) outside the circle's bounding box",
                x,
                y
            );
        }
    }
}
