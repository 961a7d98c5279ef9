//! JSON form of generated shapes.

use serde::Serialize;
use shapegen::{Point, Range, Shape, ShapeKind};

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ShapeRecord {
    pub tool: String,
    pub start: [f64; 2],
    pub current: [f64; 2],
    pub points: Vec<[f64; 2]>,
    pub range: RangeRecord,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct RangeRecord {
    pub min: [f64; 2],
    pub max: [f64; 2],
}

#[inline]
fn xy(p: Point) -> [f64; 2] {
    [p.x, p.y]
}

impl From<Range> for RangeRecord {
    fn from(r: Range) -> Self {
        Self {
            min: xy(r.min),
            max: xy(r.max),
        }
    }
}

impl ShapeRecord {
    pub fn new(tool: ShapeKind, start: Point, current: Point, shape: &Shape) -> Self {
        Self {
            tool: tool.to_string(),
            start: xy(start),
            current: xy(current),
            points: shape.points.iter().copied().map(xy).collect(),
            range: shape.range.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_serializes_points_as_pairs() {
        let shape = Shape {
            points: vec![Point::new(0.0, 1.0), Point::new(2.0, 3.0)],
            range: Range::from_corners(Point::new(0.0, 1.0), Point::new(2.0, 3.0)),
        };
        let rec = ShapeRecord::new(
            ShapeKind::CoordinateSystem,
            Point::new(0.0, 1.0),
            Point::new(2.0, 3.0),
            &shape,
        );
        let v = serde_json::to_value(&rec).unwrap();
        assert_eq!(v["tool"], "coords");
        assert_eq!(v["points"][1][0], 2.0);
        assert_eq!(v["range"]["max"][1], 3.0);
    }
}
