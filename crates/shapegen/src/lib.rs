//! Drag-shape geometry for canvas drawing tools.
//!
//! Turns a pointer drag (start point, live point, modifier keys, stroke
//! thickness) into a polyline plus the range a renderer has to invalidate.
//!
//! API Policy
//! - Generators are pure functions; snapping and the modifier policy are
//!   explicit arguments so they can be driven without any application state.
//! - `gesture::Gesture` bundles the per-drag state for front ends that feed
//!   raw pointer events.

pub mod cfg;
pub mod gesture;
pub mod modifiers;
pub mod shapes;
pub mod snap;
pub mod types;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use cfg::{DrawDirCfg, Settings};
pub use gesture::{Gesture, Update};
pub use shapes::{ShapeGenerator, ShapeKind};
pub use types::{DragInput, Modifiers, Point, Range, Shape, ShapeCfg};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::cfg::{DrawDirCfg, Settings};
    pub use crate::gesture::{effective_modifiers, Gesture, Update};
    pub use crate::modifiers::{
        DirectionPolicy, DrawDirRemap, KeepModifiers, LockedDirection, ModifierRemap,
    };
    pub use crate::shapes::{
        coordinate_system, cosine, cosine_params, CoordinateSystem, Cosine, CosineParams,
        ShapeGenerator, ShapeKind,
    };
    pub use crate::snap::GridSnap;
    pub use crate::types::{DragInput, Modifiers, Point, Range, Shape, ShapeCfg};
}
