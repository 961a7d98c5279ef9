//! Drag gesture driver: press → motion* → release.
//!
//! A `Gesture` owns the per-gesture state (snapped start point, thickness,
//! remap policy, last preview) and regenerates the shape on every motion
//! event. Each update reports the damage range a renderer must repaint: the
//! union of the previous and the new preview, padded by half the stroke.
//!
//! Draw-direction modifiers follow the drag live until either extent reaches
//! `DrawDirCfg::radius`; from then on the flags are frozen so wobbling back
//! across the start point does not flip the shape.

use crate::cfg::Settings;
use crate::modifiers::{DirectionPolicy, ModifierRemap};
use crate::shapes::ShapeKind;
use crate::types::{DragInput, Modifiers, Point, Range, Shape};

/// Result of one motion event.
#[derive(Clone, Debug, PartialEq)]
pub struct Update {
    pub shape: Shape,
    pub damage: Range,
}

#[derive(Clone, Debug)]
pub struct Gesture {
    kind: ShapeKind,
    start: Point,
    thickness: f64,
    settings: Settings,
    policy: DirectionPolicy,
    last: Option<Shape>,
}

impl Gesture {
    /// Pointer pressed at `start`; the press point is snapped with the press-time alt flag.
    pub fn begin(
        kind: ShapeKind,
        start: Point,
        modifiers: Modifiers,
        thickness: f64,
        settings: Settings,
    ) -> Self {
        Self {
            kind,
            start: settings.snap.snap(start, modifiers.alt),
            thickness,
            settings,
            policy: settings.remap(),
            last: None,
        }
    }

    #[inline]
    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    #[inline]
    pub fn start(&self) -> Point {
        self.start
    }

    #[inline]
    pub fn policy(&self) -> DirectionPolicy {
        self.policy
    }

    /// Last preview, if any motion event arrived.
    #[inline]
    pub fn preview(&self) -> Option<&Shape> {
        self.last.as_ref()
    }

    /// Pointer moved to `current` with `modifiers` held.
    pub fn motion(&mut self, current: Point, modifiers: Modifiers) -> Update {
        self.maybe_lock(current, modifiers);
        let input = DragInput::new(self.start, current, modifiers, self.thickness);
        let shape = self.kind.generator().create_shape(
            input,
            self.settings.snap,
            &self.policy,
            self.settings.shape,
        );
        let covered = match &self.last {
            Some(prev) => prev.range.union(&shape.range),
            None => shape.range,
        };
        self.last = Some(shape.clone());
        Update {
            shape,
            damage: covered.padded(0.5 * self.thickness),
        }
    }

    /// Pointer released: the shape to commit, if it has any extent.
    pub fn end(self) -> Option<Shape> {
        let shape = self.last?;
        if shape.range.width() == 0.0 && shape.range.height() == 0.0 {
            return None;
        }
        Some(shape)
    }

    fn maybe_lock(&mut self, current: Point, modifiers: Modifiers) {
        let DirectionPolicy::Live(live) = self.policy else {
            return;
        };
        let c = self.settings.snap.snap(current, modifiers.alt);
        let width = c.x - self.start.x;
        let height = c.y - self.start.y;
        let radius = self.settings.draw_dir.radius;
        if width.abs() >= radius || height.abs() >= radius {
            self.policy = DirectionPolicy::Locked(live.gesture_flags(width, height));
        }
    }
}

/// Convenience for callers that only need the remapped keys of a drag step.
pub fn effective_modifiers(policy: &DirectionPolicy, input: &DragInput) -> Modifiers {
    let w = input.current.x - input.start.x;
    let h = input.current.y - input.start.y;
    policy.remap(w, h, input.modifiers)
}
