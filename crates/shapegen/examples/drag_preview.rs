//! Replay a scripted drag through both tools and print each preview.
//!
//! Purpose
//! - Show how a front end feeds pointer events into a `Gesture` and what the
//!   renderer receives (point count, damage range) per motion event.
//!
//! Run: `cargo run -p shapegen --example drag_preview`

use std::time::Instant;

use shapegen::prelude::*;

fn main() {
    let settings = Settings {
        snap: GridSnap {
            enabled: true,
            ..GridSnap::default()
        },
        ..Settings::default()
    };
    // pointer path: right and down, shift pressed halfway
    let path: Vec<(Point, Modifiers)> = (1..=8)
        .map(|k| {
            let t = f64::from(k);
            let mods = Modifiers::NONE.with_shift(k > 4);
            (Point::new(100.0 + 25.0 * t, 100.0 + 9.0 * t), mods)
        })
        .collect();

    for kind in ShapeKind::ALL {
        let started = Instant::now();
        let mut g = Gesture::begin(kind, Point::new(100.0, 100.0), Modifiers::NONE, 2.0, settings);
        println!("{kind}: start at ({:.2}, {:.2})", g.start().x, g.start().y);
        for (p, mods) in &path {
            let u = g.motion(*p, *mods);
            println!(
                "  move ({:>6.1}, {:>6.1}) shift={:<5} -> {:>3} points, damage [{:.1}, {:.1}]..[{:.1}, {:.1}]",
                p.x,
                p.y,
                mods.shift,
                u.shape.points.len(),
                u.damage.min.x,
                u.damage.min.y,
                u.damage.max.x,
                u.damage.max.y
            );
        }
        match g.end() {
            Some(shape) => println!(
                "  committed {} points in {:.3} ms",
                shape.points.len(),
                started.elapsed().as_secs_f64() * 1e3
            ),
            None => println!("  nothing to commit"),
        }
    }
}
