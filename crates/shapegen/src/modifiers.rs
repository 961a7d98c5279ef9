//! Modifier remapping by drag direction.
//!
//! With the draw-direction setting on, the direction of the drag acts like a
//! held key: dragging leftwards toggles shift, dragging upwards toggles
//! control. The generators receive the policy as a `ModifierRemap` so they
//! can be driven without any settings lookup.

use crate::types::Modifiers;

/// Strategy mapping the raw key state to the effective one for a drag of
/// extent `(width, height)`.
pub trait ModifierRemap {
    fn remap(&self, width: f64, height: f64, mods: Modifiers) -> Modifiers;
}

/// Identity remap (draw-direction setting disabled).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct KeepModifiers;

impl ModifierRemap for KeepModifiers {
    #[inline]
    fn remap(&self, _width: f64, _height: f64, mods: Modifiers) -> Modifiers {
        mods
    }
}

/// Live direction-derived flags; `flip_*` inverts which direction toggles.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DrawDirRemap {
    pub flip_shift: bool,
    pub flip_control: bool,
}

impl DrawDirRemap {
    /// Gesture flags implied by the drag direction alone.
    #[inline]
    pub fn gesture_flags(&self, width: f64, height: f64) -> LockedDirection {
        LockedDirection {
            shift: (width < 0.0) != self.flip_shift,
            control: (height < 0.0) != self.flip_control,
        }
    }
}

impl ModifierRemap for DrawDirRemap {
    #[inline]
    fn remap(&self, width: f64, height: f64, mods: Modifiers) -> Modifiers {
        self.gesture_flags(width, height).remap(width, height, mods)
    }
}

/// Gesture flags frozen once a drag has left the lock radius.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LockedDirection {
    pub shift: bool,
    pub control: bool,
}

impl ModifierRemap for LockedDirection {
    #[inline]
    fn remap(&self, _width: f64, _height: f64, mods: Modifiers) -> Modifiers {
        Modifiers {
            alt: mods.alt,
            shift: mods.shift != self.shift,
            control: mods.control != self.control,
        }
    }
}

/// Remap state of one gesture: off, following the drag live, or frozen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DirectionPolicy {
    Keep(KeepModifiers),
    Live(DrawDirRemap),
    Locked(LockedDirection),
}

impl DirectionPolicy {
    #[inline]
    pub fn is_locked(&self) -> bool {
        matches!(self, DirectionPolicy::Locked(_))
    }
}

impl ModifierRemap for DirectionPolicy {
    #[inline]
    fn remap(&self, width: f64, height: f64, mods: Modifiers) -> Modifiers {
        match self {
            DirectionPolicy::Keep(r) => r.remap(width, height, mods),
            DirectionPolicy::Live(r) => r.remap(width, height, mods),
            DirectionPolicy::Locked(r) => r.remap(width, height, mods),
        }
    }
}

impl<R: ModifierRemap + ?Sized> ModifierRemap for &R {
    #[inline]
    fn remap(&self, width: f64, height: f64, mods: Modifiers) -> Modifiers {
        (**self).remap(width, height, mods)
    }
}
