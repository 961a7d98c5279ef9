//! Drag-shape generators.
//!
//! Purpose
//! - Turn one drag step (`DragInput`) into a polyline and its damage range.
//! - Each generator is a pure function of its inputs; snapping and the
//!   modifier policy are passed in explicitly.
//!
//! Generators
//! - `coordinate_system`: two axes with optional arrowheads.
//! - `cosine`: three periods of a cosine (sine with control).
//!
//! Code cross-refs: `crate::snap::GridSnap`, `crate::modifiers::ModifierRemap`,
//! `crate::gesture::Gesture` (drives these once per pointer event).

mod coordinate_system;
mod cosine;

pub use coordinate_system::coordinate_system;
pub use cosine::{cosine, cosine_params, CosineParams};

use std::fmt;
use std::str::FromStr;

use crate::modifiers::ModifierRemap;
use crate::snap::GridSnap;
use crate::types::{DragInput, Shape, ShapeCfg};

/// Common interface of all drag-shape generators.
pub trait ShapeGenerator {
    fn create_shape(
        &self,
        input: DragInput,
        snap: GridSnap,
        remap: &dyn ModifierRemap,
        cfg: ShapeCfg,
    ) -> Shape;
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CoordinateSystem;

impl ShapeGenerator for CoordinateSystem {
    fn create_shape(
        &self,
        input: DragInput,
        snap: GridSnap,
        remap: &dyn ModifierRemap,
        cfg: ShapeCfg,
    ) -> Shape {
        coordinate_system(input, snap, remap, cfg)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cosine;

impl ShapeGenerator for Cosine {
    fn create_shape(
        &self,
        input: DragInput,
        snap: GridSnap,
        remap: &dyn ModifierRemap,
        cfg: ShapeCfg,
    ) -> Shape {
        cosine(input, snap, remap, cfg)
    }
}

/// Drag tool selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    CoordinateSystem,
    Cosine,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 2] = [ShapeKind::CoordinateSystem, ShapeKind::Cosine];

    pub fn generator(self) -> &'static dyn ShapeGenerator {
        match self {
            ShapeKind::CoordinateSystem => &CoordinateSystem,
            ShapeKind::Cosine => &Cosine,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::CoordinateSystem => "coords",
            ShapeKind::Cosine => "cosine",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unknown tool name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownShapeKind(pub String);

impl fmt::Display for UnknownShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown shape kind: {:?} (expected coords or cosine)", self.0)
    }
}

impl std::error::Error for UnknownShapeKind {}

impl FromStr for ShapeKind {
    type Err = UnknownShapeKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "coords" | "coordinate_system" | "coordinates" => Ok(ShapeKind::CoordinateSystem),
            "cosine" | "cos" => Ok(ShapeKind::Cosine),
            _ => Err(UnknownShapeKind(s.to_string())),
        }
    }
}
