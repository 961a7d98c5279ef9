//! Cartesian axis diagram anchored at the drag start.
//!
//! The diagram is a single polyline: vertical axis, corner, horizontal axis.
//! Arrowheads are drawn as doubled-back strokes (`tip → barb → tip`) so the
//! whole figure stays one stroke. An axis only gets an arrowhead when it is
//! long relative to the stroke (`length / thickness >= min_arrow_slimness`)
//! and points in the positive direction; control switches to the
//! arrowless "origin top-left" variant.

use std::f64::consts::FRAC_PI_2;

use crate::modifiers::ModifierRemap;
use crate::snap::GridSnap;
use crate::types::{DragInput, Point, Range, Shape, ShapeCfg};

/// Build the axis diagram for one drag step.
pub fn coordinate_system<R: ModifierRemap + ?Sized>(
    input: DragInput,
    snap: GridSnap,
    remap: &R,
    cfg: ShapeCfg,
) -> Shape {
    let c = snap.snap(input.current, input.modifiers.alt);
    let p1 = input.start;
    let thickness = input.thickness;

    let mut width = c.x - p1.x;
    let mut height = c.y - p1.y;
    let sign_w = if width > 0.0 { 1.0 } else { -1.0 };
    let sign_h = if height > 0.0 { 1.0 } else { -1.0 };
    // Gating uses the raw extent, before any squaring.
    let slim_w = width / thickness;
    let slim_h = height / thickness;

    let mods = remap.remap(width, height, input.modifiers);

    if mods.shift {
        width = (width * sign_w).max(height * sign_h) * sign_w;
        height = (width * sign_w) * sign_h;
    }

    let arrow = thickness * cfg.arrow_length_factor;
    let gate = cfg.min_arrow_slimness();
    let (arrow_w, arrow_h) = if mods.control {
        (0.0, 0.0)
    } else {
        (
            if sign_w > 0.0 && slim_w >= gate { arrow } else { 0.0 },
            if sign_h > 0.0 && slim_h >= gate { arrow } else { 0.0 },
        )
    };

    let delta = cfg.arrow_half_angle;
    let mut n = 3;
    if arrow_w != 0.0 {
        n += 4;
    }
    if arrow_h != 0.0 {
        n += 4;
    }
    let mut points = Vec::with_capacity(n);

    if !mods.control {
        let corner = Point::new(p1.x, p1.y + height);
        let tip = Point::new(p1.x + width, p1.y + height);
        points.push(p1);
        if arrow_h != 0.0 {
            points.push(Point::new(
                p1.x - arrow_h * (FRAC_PI_2 + delta).cos(),
                p1.y + arrow_h * (FRAC_PI_2 + delta).sin(),
            ));
            points.push(p1);
            points.push(Point::new(
                p1.x - arrow_h * (FRAC_PI_2 - delta).cos(),
                p1.y + arrow_h * (FRAC_PI_2 - delta).sin(),
            ));
            points.push(p1);
        }
        points.push(corner);
        points.push(tip);
        if arrow_w != 0.0 {
            points.push(Point::new(
                tip.x - arrow_w * delta.cos(),
                tip.y - arrow_w * delta.sin(),
            ));
            points.push(tip);
            points.push(Point::new(
                tip.x - arrow_w * (-delta).cos(),
                tip.y - arrow_w * (-delta).sin(),
            ));
            points.push(tip);
        }
    } else {
        points.push(Point::new(p1.x, p1.y + height));
        points.push(p1);
        points.push(Point::new(p1.x + width, p1.y));
    }

    debug_assert_eq!(points.len(), n);
    // Arrow barbs may stick out of the axis rectangle.
    let range = Range::from_points(&points).unwrap_or_else(|| Range::at(p1));
    Shape { points, range }
}
