//! Tool settings consumed by the gesture driver.
//!
//! Policy
//! - Defaults match the usual application defaults (snapping off, draw-direction
//!   modifiers off, 50 unit lock radius). Front ends override per field.

use crate::modifiers::{DirectionPolicy, DrawDirRemap, KeepModifiers};
use crate::snap::GridSnap;
use crate::types::ShapeCfg;

/// Draw-direction modifier setting.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawDirCfg {
    pub enabled: bool,
    /// Drag extent (either axis) after which the direction flags are frozen.
    pub radius: f64,
    pub flip_shift: bool,
    pub flip_control: bool,
}

impl Default for DrawDirCfg {
    fn default() -> Self {
        Self {
            enabled: false,
            radius: 50.0,
            flip_shift: false,
            flip_control: false,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Settings {
    pub shape: ShapeCfg,
    pub snap: GridSnap,
    pub draw_dir: DrawDirCfg,
}

impl Settings {
    /// Remap policy a new gesture starts with.
    pub fn remap(&self) -> DirectionPolicy {
        if self.draw_dir.enabled {
            DirectionPolicy::Live(DrawDirRemap {
                flip_shift: self.draw_dir.flip_shift,
                flip_control: self.draw_dir.flip_control,
            })
        } else {
            DirectionPolicy::Keep(KeepModifiers)
        }
    }
}
