//! Grid snapping for drag points.
//!
//! Snapping is active when the setting and the alt key disagree (alt toggles
//! the configured behavior for the current event). A point only moves if the
//! nearest grid vertex lies within `tolerance * grid_size / 2`.

use crate::types::Point;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridSnap {
    pub enabled: bool,
    /// Grid spacing in page units (14.17 ≈ 5 mm at 72 dpi).
    pub grid_size: f64,
    /// Fraction of half a grid cell within which points snap. 1.0 always snaps.
    pub tolerance: f64,
}

impl Default for GridSnap {
    fn default() -> Self {
        Self {
            enabled: false,
            grid_size: 14.17,
            tolerance: 0.5,
        }
    }
}

impl GridSnap {
    pub fn off() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    #[inline]
    pub fn is_active(&self, alt: bool) -> bool {
        self.enabled != alt && self.grid_size.is_finite() && self.grid_size > 0.0
    }

    /// Nearest grid vertex to `p` (no tolerance check).
    #[inline]
    pub fn nearest_vertex(&self, p: Point) -> Point {
        let g = self.grid_size;
        Point::new((p.x / g).round() * g, (p.y / g).round() * g)
    }

    /// Snap `p` if snapping is active for this event and a vertex is close enough.
    pub fn snap(&self, p: Point, alt: bool) -> Point {
        if !self.is_active(alt) {
            return p;
        }
        let q = self.nearest_vertex(p);
        let max_dist = self.tolerance.max(0.0) * self.grid_size * 0.5;
        if (q - p).norm() <= max_dist {
            q
        } else {
            p
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid10() -> GridSnap {
        GridSnap {
            enabled: true,
            grid_size: 10.0,
            tolerance: 0.5,
        }
    }

    #[test]
    fn snaps_within_tolerance_only() {
        let g = grid10();
        // within 2.5 of (20, 30)
        assert_eq!(g.snap(Point::new(21.0, 29.0), false), Point::new(20.0, 30.0));
        // 4 away from the nearest vertex -> unchanged
        let far = Point::new(24.0, 30.0);
        assert_eq!(g.snap(far, false), far);
        // negative coordinates round to the nearest vertex as well
        assert_eq!(g.snap(Point::new(-9.0, -1.0), false), Point::new(-10.0, 0.0));
    }

    #[test]
    fn alt_toggles_setting() {
        let on = grid10();
        let off = GridSnap {
            enabled: false,
            ..on
        };
        let p = Point::new(11.0, 9.0);
        assert_eq!(on.snap(p, true), p);
        assert_eq!(off.snap(p, false), p);
        assert_eq!(off.snap(p, true), Point::new(10.0, 10.0));
    }

    #[test]
    fn degenerate_grid_disables_snapping() {
        let p = Point::new(1.5, 2.5);
        for size in [0.0, -3.0, f64::NAN, f64::INFINITY] {
            let g = GridSnap {
                grid_size: size,
                ..grid10()
            };
            assert_eq!(g.snap(p, false), p);
        }
    }
}
