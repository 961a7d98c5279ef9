//! Basic value types shared by the generators and the gesture driver.
//!
//! - `Range`: axis-aligned damage box, grown point by point.
//! - `Modifiers`: keyboard state sampled with each pointer event.
//! - `DragInput`: immutable snapshot of one drag step, passed by value.
//! - `Shape`: generator output (polyline + bounding range).

use nalgebra::{Point2, Vector2};

/// Page coordinate.
pub type Point = Point2<f64>;

/// Axis-aligned bounding box used for redraw invalidation.
///
/// Invariant: `min <= max` componentwise.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Range {
    pub min: Point,
    pub max: Point,
}

impl Range {
    /// Degenerate box covering exactly `p`.
    #[inline]
    pub fn at(p: Point) -> Self {
        Self { min: p, max: p }
    }

    /// Box spanned by two opposite corners (any order).
    #[inline]
    pub fn from_corners(a: Point, b: Point) -> Self {
        let mut r = Self::at(a);
        r.add_point(b);
        r
    }

    /// Tight min/max over `points`; `None` for an empty slice.
    pub fn from_points(points: &[Point]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut r = Self::at(*first);
        for p in rest {
            r.add_point(*p);
        }
        Some(r)
    }

    #[inline]
    pub fn add_point(&mut self, p: Point) {
        self.min = Point::new(self.min.x.min(p.x), self.min.y.min(p.y));
        self.max = Point::new(self.max.x.max(p.x), self.max.y.max(p.y));
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    pub fn union(&self, other: &Range) -> Range {
        let mut r = *self;
        r.add_point(other.min);
        r.add_point(other.max);
        r
    }

    /// Grow every side by `pad` (negative values are treated as 0).
    pub fn padded(&self, pad: f64) -> Range {
        let d = Vector2::repeat(pad.max(0.0));
        Range {
            min: self.min - d,
            max: self.max + d,
        }
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }
}

/// Modifier keys held during a pointer event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    /// Toggles grid snapping for this event.
    pub alt: bool,
    pub shift: bool,
    pub control: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        alt: false,
        shift: false,
        control: false,
    };

    #[inline]
    pub fn with_shift(mut self, on: bool) -> Self {
        self.shift = on;
        self
    }

    #[inline]
    pub fn with_control(mut self, on: bool) -> Self {
        self.control = on;
        self
    }

    #[inline]
    pub fn with_alt(mut self, on: bool) -> Self {
        self.alt = on;
        self
    }
}

/// One drag step: where the gesture started, where the pointer is now
/// (before snapping), which keys are held, and the tool thickness.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragInput {
    pub start: Point,
    pub current: Point,
    pub modifiers: Modifiers,
    pub thickness: f64,
}

impl DragInput {
    #[inline]
    pub fn new(start: Point, current: Point, modifiers: Modifiers, thickness: f64) -> Self {
        Self {
            start,
            current,
            modifiers,
            thickness,
        }
    }
}

/// Polyline plus the range a renderer has to invalidate for it.
#[derive(Clone, Debug, PartialEq)]
pub struct Shape {
    pub points: Vec<Point>,
    pub range: Range,
}

/// Generator constants (arrow gating, sampling density, degenerate guards).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShapeCfg {
    /// Periods drawn by the cosine generator.
    pub periods: u32,
    /// Arrowhead length in units of the stroke thickness.
    pub arrow_length_factor: f64,
    /// Minimal axis length relative to the arrow length for an arrow to be drawn.
    pub arrow_min_length_ratio: f64,
    /// Half opening angle of an arrowhead (radians).
    pub arrow_half_angle: f64,
    /// Widths below this are treated as zero when deriving the frequency.
    pub eps_width: f64,
    pub samples_base: f64,
    pub samples_gain: f64,
    /// Upper bound on cosine samples per period; keeps huge drags bounded.
    pub max_samples_per_period: u32,
}

impl Default for ShapeCfg {
    fn default() -> Self {
        Self {
            periods: 3,
            arrow_length_factor: 7.0,
            arrow_min_length_ratio: 0.4,
            arrow_half_angle: std::f64::consts::PI / 15.0,
            eps_width: 1e-6,
            samples_base: 5.0,
            samples_gain: 0.3,
            max_samples_per_period: 4096,
        }
    }
}

impl ShapeCfg {
    /// Axis length / thickness needed before an arrowhead is drawn (17.5 by default).
    #[inline]
    pub fn min_arrow_slimness(&self) -> f64 {
        self.arrow_length_factor / self.arrow_min_length_ratio
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_grows_and_unions() {
        let mut r = Range::at(Point::new(1.0, 2.0));
        r.add_point(Point::new(-1.0, 5.0));
        assert_eq!(r.min, Point::new(-1.0, 2.0));
        assert_eq!(r.max, Point::new(1.0, 5.0));
        assert!((r.width() - 2.0).abs() < 1e-12);
        assert!((r.height() - 3.0).abs() < 1e-12);

        let u = r.union(&Range::at(Point::new(4.0, 0.0)));
        assert_eq!(u.min, Point::new(-1.0, 0.0));
        assert_eq!(u.max, Point::new(4.0, 5.0));
        assert!(u.contains(Point::new(0.0, 1.0)));
        assert!(!r.contains(Point::new(0.0, 1.0)));
    }

    #[test]
    fn range_from_points_and_padding() {
        assert!(Range::from_points(&[]).is_none());
        let r = Range::from_points(&[
            Point::new(3.0, 3.0),
            Point::new(0.0, 4.0),
            Point::new(2.0, -1.0),
        ])
        .unwrap();
        assert_eq!(r, Range::from_corners(Point::new(3.0, -1.0), Point::new(0.0, 4.0)));
        let p = r.padded(0.5);
        assert_eq!(p.min, Point::new(-0.5, -1.5));
        assert_eq!(p.max, Point::new(3.5, 4.5));
        assert_eq!(r.padded(-2.0), r);
    }

    #[test]
    fn default_slimness_gate() {
        assert!((ShapeCfg::default().min_arrow_slimness() - 17.5).abs() < 1e-12);
    }
}
