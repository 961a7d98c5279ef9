//! `<name>.run.json` written beside every shape file: the library version,
//! effective settings, source CSV and a per-shape summary.

use anyhow::{Context, Result};
use serde::Serialize;
use shapegen::Settings;
use std::fs;
use std::path::{Path, PathBuf};

use crate::output::{RangeRecord, ShapeRecord};
use crate::settings::SettingsFile;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ShapeSummary {
    pub tool: String,
    pub points: usize,
    pub range: RangeRecord,
}

impl From<&ShapeRecord> for ShapeSummary {
    fn from(rec: &ShapeRecord) -> Self {
        Self {
            tool: rec.tool.clone(),
            points: rec.points.len(),
            range: rec.range,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RunRecord {
    pub version: &'static str,
    pub command: &'static str,
    pub settings: SettingsFile,
    /// Thickness from the command line (batch rows may override it).
    pub thickness: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    pub shapes: Vec<ShapeSummary>,
}

impl RunRecord {
    pub fn new(command: &'static str, settings: Settings, thickness: f64) -> Self {
        Self {
            version: shapegen::VERSION,
            command,
            settings: settings.into(),
            thickness,
            source: None,
            shapes: Vec::new(),
        }
    }

    pub fn with_source(mut self, csv: &Path) -> Self {
        self.source = Some(csv.display().to_string());
        self
    }

    pub fn push(&mut self, rec: &ShapeRecord) {
        self.shapes.push(rec.into());
    }

    pub fn total_points(&self) -> usize {
        self.shapes.iter().map(|s| s.points).sum()
    }

    /// Serialize next to `artifact`; returns the path written.
    pub fn write_beside(&self, artifact: &Path) -> Result<PathBuf> {
        let path = run_path(artifact);
        fs::write(&path, serde_json::to_vec_pretty(self)?)
            .with_context(|| format!("writing {}", path.display()))?;
        tracing::debug!(
            path = %path.display(),
            shapes = self.shapes.len(),
            points = self.total_points(),
            "run_record_written"
        );
        Ok(path)
    }
}

fn run_path(artifact: &Path) -> PathBuf {
    artifact.with_extension("run.json")
}

#[cfg(test)]
mod tests {
    use super::*;
    use shapegen::{Point, Range, Shape, ShapeKind};
    use tempfile::tempdir;

    fn record(tool: ShapeKind, n: usize) -> ShapeRecord {
        let points = vec![Point::new(1.0, 2.0); n];
        let shape = Shape {
            range: Range::at(points[0]),
            points,
        };
        ShapeRecord::new(tool, Point::new(1.0, 2.0), Point::new(1.0, 2.0), &shape)
    }

    #[test]
    fn run_path_sits_beside_artifact() {
        assert_eq!(
            run_path(Path::new("/tmp/out/axes.json")),
            Path::new("/tmp/out/axes.run.json")
        );
        assert_eq!(run_path(Path::new("shapes")), Path::new("shapes.run.json"));
    }

    #[test]
    fn summarizes_shapes_and_source() {
        let dir = tempdir().unwrap();
        let artifact = dir.path().join("shapes.json");
        let mut run = RunRecord::new("batch", Settings::default(), 2.0)
            .with_source(Path::new("drags.csv"));
        run.push(&record(ShapeKind::CoordinateSystem, 7));
        run.push(&record(ShapeKind::Cosine, 61));
        assert_eq!(run.total_points(), 68);

        let path = run.write_beside(&artifact).unwrap();
        let v: serde_json::Value = serde_json::from_slice(&fs::read(path).unwrap()).unwrap();
        assert_eq!(v["command"], "batch");
        assert_eq!(v["version"], shapegen::VERSION);
        assert_eq!(v["source"], "drags.csv");
        assert_eq!(v["shapes"][0]["tool"], "coords");
        assert_eq!(v["shapes"][1]["points"], 61);
        assert_eq!(v["settings"]["shape"]["periods"], 3);
    }

    #[test]
    fn source_is_omitted_for_single_shapes() {
        let run = RunRecord::new("shape", Settings::default(), 1.0);
        let v = serde_json::to_value(&run).unwrap();
        assert!(v.get("source").is_none());
        assert_eq!(v["thickness"], 1.0);
    }
}
