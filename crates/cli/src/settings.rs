//! JSON settings file: every section and field is optional.
//!
//! ```json
//! { "snap": { "enabled": true, "grid_size": 10.0 },
//!   "draw_dir": { "enabled": true, "radius": 30.0 },
//!   "shape": { "periods": 3 } }
//! ```

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use shapegen::snap::GridSnap;
use shapegen::{DrawDirCfg, Settings, ShapeCfg};
use std::fs;
use std::path::Path;

/// Upper bounds for the cosine resolution settings (at most ~65M points per shape).
const MAX_PERIODS: u32 = 1000;
const MAX_SAMPLES_PER_PERIOD: u32 = 65_536;

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SettingsFile {
    pub snap: SnapSection,
    pub draw_dir: DrawDirSection,
    pub shape: ShapeSection,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SnapSection {
    pub enabled: bool,
    pub grid_size: f64,
    pub tolerance: f64,
}

impl Default for SnapSection {
    fn default() -> Self {
        GridSnap::default().into()
    }
}

impl From<GridSnap> for SnapSection {
    fn from(g: GridSnap) -> Self {
        Self {
            enabled: g.enabled,
            grid_size: g.grid_size,
            tolerance: g.tolerance,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DrawDirSection {
    pub enabled: bool,
    pub radius: f64,
    pub flip_shift: bool,
    pub flip_control: bool,
}

impl Default for DrawDirSection {
    fn default() -> Self {
        DrawDirCfg::default().into()
    }
}

impl From<DrawDirCfg> for DrawDirSection {
    fn from(d: DrawDirCfg) -> Self {
        Self {
            enabled: d.enabled,
            radius: d.radius,
            flip_shift: d.flip_shift,
            flip_control: d.flip_control,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShapeSection {
    pub periods: u32,
    pub arrow_length_factor: f64,
    pub arrow_min_length_ratio: f64,
    pub arrow_half_angle: f64,
    pub eps_width: f64,
    pub samples_base: f64,
    pub samples_gain: f64,
    pub max_samples_per_period: u32,
}

impl Default for ShapeSection {
    fn default() -> Self {
        ShapeCfg::default().into()
    }
}

impl From<ShapeCfg> for ShapeSection {
    fn from(c: ShapeCfg) -> Self {
        Self {
            periods: c.periods,
            arrow_length_factor: c.arrow_length_factor,
            arrow_min_length_ratio: c.arrow_min_length_ratio,
            arrow_half_angle: c.arrow_half_angle,
            eps_width: c.eps_width,
            samples_base: c.samples_base,
            samples_gain: c.samples_gain,
            max_samples_per_period: c.max_samples_per_period,
        }
    }
}

impl From<Settings> for SettingsFile {
    fn from(s: Settings) -> Self {
        Self {
            snap: s.snap.into(),
            draw_dir: s.draw_dir.into(),
            shape: s.shape.into(),
        }
    }
}

impl SettingsFile {
    /// Check ranges and convert into library settings.
    pub fn into_settings(self) -> Result<Settings> {
        let sh = self.shape;
        if !(1..=MAX_PERIODS).contains(&sh.periods) {
            bail!("shape.periods must be in 1..={MAX_PERIODS}, got {}", sh.periods);
        }
        if !(sh.arrow_min_length_ratio > 0.0) {
            bail!(
                "shape.arrow_min_length_ratio must be positive, got {}",
                sh.arrow_min_length_ratio
            );
        }
        if !(sh.samples_base >= 1.0) || !(sh.samples_gain >= 0.0) {
            bail!("shape.samples_base must be >= 1 and shape.samples_gain >= 0");
        }
        if !(1..=MAX_SAMPLES_PER_PERIOD).contains(&sh.max_samples_per_period) {
            bail!(
                "shape.max_samples_per_period must be in 1..={MAX_SAMPLES_PER_PERIOD}, got {}",
                sh.max_samples_per_period
            );
        }
        if !(self.draw_dir.radius >= 0.0) {
            bail!("draw_dir.radius must be non-negative, got {}", self.draw_dir.radius);
        }
        Ok(Settings {
            shape: ShapeCfg {
                periods: sh.periods,
                arrow_length_factor: sh.arrow_length_factor,
                arrow_min_length_ratio: sh.arrow_min_length_ratio,
                arrow_half_angle: sh.arrow_half_angle,
                eps_width: sh.eps_width,
                samples_base: sh.samples_base,
                samples_gain: sh.samples_gain,
                max_samples_per_period: sh.max_samples_per_period,
            },
            snap: GridSnap {
                enabled: self.snap.enabled,
                grid_size: self.snap.grid_size,
                tolerance: self.snap.tolerance,
            },
            draw_dir: DrawDirCfg {
                enabled: self.draw_dir.enabled,
                radius: self.draw_dir.radius,
                flip_shift: self.draw_dir.flip_shift,
                flip_control: self.draw_dir.flip_control,
            },
        })
    }
}

/// Load settings from `path`, or library defaults when no file is given.
pub fn load(path: Option<&Path>) -> Result<Settings> {
    let Some(path) = path else {
        return Ok(Settings::default());
    };
    let bytes = fs::read(path).with_context(|| format!("reading settings {}", path.display()))?;
    let file: SettingsFile = serde_json::from_slice(&bytes)
        .with_context(|| format!("parsing settings {}", path.display()))?;
    let settings = file
        .into_settings()
        .with_context(|| format!("invalid settings in {}", path.display()))?;
    tracing::info!(
        path = %path.display(),
        snap = settings.snap.enabled,
        draw_dir = settings.draw_dir.enabled,
        "settings_loaded"
    );
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn partial_file_keeps_defaults() {
        let file: SettingsFile =
            serde_json::from_str(r#"{ "snap": { "enabled": true, "grid_size": 10.0 } }"#).unwrap();
        let s = file.into_settings().unwrap();
        assert!(s.snap.enabled);
        assert_eq!(s.snap.grid_size, 10.0);
        assert_eq!(s.snap.tolerance, GridSnap::default().tolerance);
        assert_eq!(s.shape, ShapeCfg::default());
        assert_eq!(s.draw_dir, DrawDirCfg::default());
    }

    #[test]
    fn rejects_unknown_fields_and_bad_ranges() {
        assert!(serde_json::from_str::<SettingsFile>(r#"{ "grid": {} }"#).is_err());
        let file: SettingsFile = serde_json::from_str(r#"{ "shape": { "periods": 0 } }"#).unwrap();
        assert!(file.into_settings().is_err());
        let file: SettingsFile =
            serde_json::from_str(r#"{ "shape": { "periods": 5000 } }"#).unwrap();
        assert!(file.into_settings().is_err());
        let file: SettingsFile =
            serde_json::from_str(r#"{ "shape": { "max_samples_per_period": 0 } }"#).unwrap();
        assert!(file.into_settings().is_err());
    }

    #[test]
    fn defaults_round_trip_through_file_form() {
        let s = Settings::default();
        assert_eq!(SettingsFile::from(s).into_settings().unwrap(), s);
    }

    #[test]
    fn load_reads_file_or_defaults() {
        assert_eq!(load(None).unwrap(), Settings::default());
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{ "draw_dir": { "enabled": true, "radius": 12.5 } }"#).unwrap();
        let s = load(Some(&path)).unwrap();
        assert!(s.draw_dir.enabled);
        assert_eq!(s.draw_dir.radius, 12.5);
        assert!(load(Some(&dir.path().join("missing.json"))).is_err());
    }
}
