//! Sampled cosine / sine curve inscribed in the drag rectangle.
//!
//! Model
//! - `cfg.periods` periods span the full width; the amplitude is half the
//!   height, so the curve touches the top and bottom edges of the rectangle.
//! - Control switches cosine to sine (phase `-π/2`).
//! - Shift forces `|height| == |width|`. With control also held the width
//!   becomes the drag length `hypot(w, h)`, otherwise the larger extent. The
//!   two rules give different numbers and are kept separate.
//! - Sampling density grows with the shape size:
//!   `ceil(base + gain * (amplitude + |width| / periods))` points per period,
//!   capped at `cfg.max_samples_per_period` and so that `periods * n` fits a `u32`.

use std::f64::consts::{FRAC_PI_2, TAU};

use nalgebra::Vector2;

use crate::modifiers::ModifierRemap;
use crate::snap::GridSnap;
use crate::types::{DragInput, Point, Range, Shape, ShapeCfg};

/// Curve parameters derived from one drag step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CosineParams {
    pub center: Point,
    /// Signed half extents (negative when dragging left/up).
    pub radius: Vector2<f64>,
    pub amplitude: f64,
    pub phase: f64,
    /// Angular frequency along x; 0 for a degenerate (zero) width.
    pub frequency: f64,
    pub samples_per_period: u32,
}

impl CosineParams {
    #[inline]
    pub fn sample_count(&self, periods: u32) -> usize {
        (periods as usize) * (self.samples_per_period as usize) + 1
    }

    /// Rectangle the curve is inscribed in.
    #[inline]
    pub fn range(&self) -> Range {
        Range::from_corners(self.center + self.radius, self.center - self.radius)
    }
}

/// Derive curve parameters without sampling.
pub fn cosine_params<R: ModifierRemap + ?Sized>(
    input: DragInput,
    snap: GridSnap,
    remap: &R,
    cfg: ShapeCfg,
) -> CosineParams {
    let c = snap.snap(input.current, input.modifiers.alt);
    let mut width = c.x - input.start.x;
    let mut height = c.y - input.start.y;
    let periods_n = cfg.periods.max(1);
    let periods = f64::from(periods_n);

    let mods = remap.remap(width, height, input.modifiers);

    if mods.shift {
        width = if mods.control {
            width.hypot(height)
        } else {
            width.abs().max(height.abs()).copysign(width)
        };
        height = width.copysign(height);
    }

    let radius = Vector2::new(0.5 * width, 0.5 * height);
    let amplitude = 0.5 * height.abs();
    let frequency = if width.abs() < cfg.eps_width {
        0.0
    } else {
        TAU * periods / width.abs()
    };
    let phase = if mods.control { -FRAC_PI_2 } else { 0.0 };
    let per_period =
        (cfg.samples_base + cfg.samples_gain * (amplitude + (width / periods).abs())).ceil();
    let cap = cfg.max_samples_per_period.clamp(1, u32::MAX / periods_n);
    // Non-finite extents get the base resolution.
    let samples_per_period = if per_period.is_finite() {
        per_period.clamp(1.0, f64::from(cap)) as u32
    } else {
        (cfg.samples_base.ceil().max(1.0) as u32).min(cap)
    };

    CosineParams {
        center: input.start + radius,
        radius,
        amplitude,
        phase,
        frequency,
        samples_per_period,
    }
}

/// Build the sampled curve for one drag step.
pub fn cosine<R: ModifierRemap + ?Sized>(
    input: DragInput,
    snap: GridSnap,
    remap: &R,
    cfg: ShapeCfg,
) -> Shape {
    let periods = cfg.periods.max(1);
    let prm = cosine_params(input, snap, remap, cfg);
    // Cannot overflow: samples_per_period <= u32::MAX / periods.
    let total = periods * prm.samples_per_period;
    let step = TAU / f64::from(prm.samples_per_period);
    let left = prm.center.x - prm.radius.x;

    let points = (0..=total)
        .map(|j| {
            let t = f64::from(j) / f64::from(total);
            Point::new(
                left + t * 2.0 * prm.radius.x,
                prm.center.y - prm.amplitude * (prm.phase + f64::from(j) * step).cos(),
            )
        })
        .collect();

    Shape {
        points,
        range: prm.range(),
    }
}
