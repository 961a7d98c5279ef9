use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde_json::json;
use shapegen::{Gesture, Modifiers, Point, Settings, Shape, ShapeKind};
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

mod batch;
mod output;
mod run_record;
mod settings;

use output::ShapeRecord;
use run_record::RunRecord;

/// Default stroke width when none is given (a thin pen).
const DEFAULT_THICKNESS: f64 = 1.41;

#[derive(Parser)]
#[command(name = "shapegen-cli")]
#[command(about = "Generate drag-tool shapes (coordinate systems, cosine curves)")]
struct Cmd {
    /// JSON settings file (snapping, draw-direction modifiers, shape constants)
    #[arg(long, global = true)]
    settings: Option<PathBuf>,

    /// Log per-row details
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Generate one shape from a single drag step
    Shape {
        /// coords | cosine
        #[arg(long, value_parser = parse_kind)]
        tool: ShapeKind,
        /// Drag start as X,Y
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        start: Point,
        /// Pointer position as X,Y
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        current: Point,
        #[arg(long, default_value_t = DEFAULT_THICKNESS)]
        thickness: f64,
        /// Toggle grid snapping for this step
        #[arg(long)]
        alt: bool,
        #[arg(long)]
        shift: bool,
        #[arg(long)]
        control: bool,
        /// Write JSON here (plus a `.run.json` record) instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Generate one shape per CSV row
    Batch {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
        /// Thickness for rows without a thickness column
        #[arg(long, default_value_t = DEFAULT_THICKNESS)]
        thickness: f64,
    },
    /// Print the library version, tools and effective settings as JSON
    Report,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_max_level(if cmd.verbose { Level::DEBUG } else { Level::INFO })
        .init();
    let settings = settings::load(cmd.settings.as_deref())?;
    match cmd.action {
        Action::Shape {
            tool,
            start,
            current,
            thickness,
            alt,
            shift,
            control,
            out,
        } => {
            let modifiers = Modifiers {
                alt,
                shift,
                control,
            };
            shape(settings, tool, start, current, thickness, modifiers, out.as_deref())
        }
        Action::Batch {
            input,
            out,
            thickness,
        } => batch(settings, &input, &out, thickness),
        Action::Report => report(settings),
    }
}

/// One press + motion step through a fresh gesture.
fn generate(
    settings: Settings,
    tool: ShapeKind,
    start: Point,
    current: Point,
    thickness: f64,
    modifiers: Modifiers,
) -> (Point, Shape) {
    let mut g = Gesture::begin(tool, start, modifiers, thickness, settings);
    let update = g.motion(current, modifiers);
    (g.start(), update.shape)
}

fn shape(
    settings: Settings,
    tool: ShapeKind,
    start: Point,
    current: Point,
    thickness: f64,
    modifiers: Modifiers,
    out: Option<&Path>,
) -> Result<()> {
    let (snapped_start, shape) = generate(settings, tool, start, current, thickness, modifiers);
    tracing::info!(
        %tool,
        points = shape.points.len(),
        shift = modifiers.shift,
        control = modifiers.control,
        "shape"
    );
    let record = ShapeRecord::new(tool, snapped_start, current, &shape);
    let Some(out) = out else {
        println!("{}", serde_json::to_string_pretty(&record)?);
        return Ok(());
    };
    write_json(out, &record)?;
    let mut run = RunRecord::new("shape", settings, thickness);
    run.push(&record);
    run.write_beside(out)?;
    tracing::info!(out = %out.display(), "shape_written");
    Ok(())
}

fn batch(settings: Settings, input: &Path, out: &Path, thickness: f64) -> Result<()> {
    tracing::info!(input = %input.display(), out = %out.display(), "batch");
    let rows = batch::read_rows(input, thickness)?;
    let mut records = Vec::with_capacity(rows.len());
    let mut run = RunRecord::new("batch", settings, thickness).with_source(input);
    for (i, row) in rows.iter().enumerate() {
        let (snapped_start, shape) = generate(
            settings,
            row.tool,
            row.start,
            row.current,
            row.thickness,
            row.modifiers,
        );
        tracing::debug!(row = i, tool = %row.tool, points = shape.points.len(), "batch_row");
        let record = ShapeRecord::new(row.tool, snapped_start, row.current, &shape);
        run.push(&record);
        records.push(record);
    }
    write_json(out, &records)?;
    run.write_beside(out)?;
    tracing::info!(
        rows = records.len(),
        points = run.total_points(),
        out = %out.display(),
        "batch_written"
    );
    Ok(())
}

fn report(settings: Settings) -> Result<()> {
    let obj = json!({
        "version": shapegen::VERSION,
        "tools": ShapeKind::ALL.iter().map(|k| k.to_string()).collect::<Vec<_>>(),
        "settings": settings::SettingsFile::from(settings),
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

fn write_json<T: serde::Serialize>(out: &Path, value: &T) -> Result<()> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    std::fs::write(out, serde_json::to_vec_pretty(value)?)
        .with_context(|| format!("writing {}", out.display()))
}

fn parse_kind(s: &str) -> Result<ShapeKind, String> {
    s.parse::<ShapeKind>().map_err(|e| e.to_string())
}

fn parse_point(s: &str) -> Result<Point, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y, got {s:?}"))?;
    let x: f64 = x
        .trim()
        .parse()
        .map_err(|e| format!("bad x in {s:?}: {e}"))?;
    let y: f64 = y
        .trim()
        .parse()
        .map_err(|e| format!("bad y in {s:?}: {e}"))?;
    if !x.is_finite() || !y.is_finite() {
        return Err(format!("non-finite coordinate in {s:?}"));
    }
    Ok(Point::new(x, y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use tempfile::tempdir;

    #[test]
    fn cli_definition_is_consistent() {
        Cmd::command().debug_assert();
    }

    #[test]
    fn parse_point_accepts_pairs() {
        assert_eq!(parse_point("1.5, -2").unwrap(), Point::new(1.5, -2.0));
        assert!(parse_point("1.5").is_err());
        assert!(parse_point("a,b").is_err());
        assert!(parse_point("inf,0").is_err());
    }

    #[test]
    fn shape_args_parse_negative_points() {
        let cmd = Cmd::try_parse_from([
            "shapegen-cli",
            "shape",
            "--tool",
            "cosine",
            "--start",
            "-10,-20",
            "--current",
            "30,40",
            "--shift",
        ])
        .unwrap();
        match cmd.action {
            Action::Shape {
                tool, start, shift, ..
            } => {
                assert_eq!(tool, ShapeKind::Cosine);
                assert_eq!(start, Point::new(-10.0, -20.0));
                assert!(shift);
            }
            _ => panic!("expected shape"),
        }
    }

    #[test]
    fn generate_matches_reference_drag() {
        let (start, shape) = generate(
            Settings::default(),
            ShapeKind::CoordinateSystem,
            Point::new(0.0, 0.0),
            Point::new(100.0, 40.0),
            5.0,
            Modifiers::NONE,
        );
        assert_eq!(start, Point::new(0.0, 0.0));
        assert_eq!(shape.points.len(), 7);
    }

    #[test]
    fn shape_command_writes_output_and_run_record() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("nested").join("axes.json");
        shape(
            Settings::default(),
            ShapeKind::CoordinateSystem,
            Point::new(0.0, 0.0),
            Point::new(200.0, 200.0),
            2.0,
            Modifiers::NONE,
            Some(out.as_path()),
        )
        .unwrap();
        let v: serde_json::Value = serde_json::from_slice(&std::fs::read(&out).unwrap()).unwrap();
        assert_eq!(v["points"].as_array().unwrap().len(), 11);
        assert!(dir.path().join("nested").join("axes.run.json").exists());
    }

    #[test]
    fn batch_command_writes_one_record_per_row() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("drags.csv");
        std::fs::write(
            &input,
            "tool,start_x,start_y,x,y,thickness\ncoords,0,0,100,40,5\ncosine,0,0,90,40,1\n",
        )
        .unwrap();
        let out = dir.path().join("shapes.json");
        batch(Settings::default(), &input, &out, 1.0).unwrap();
        let v: serde_json::Value = serde_json::from_slice(&std::fs::read(&out).unwrap()).unwrap();
        let records = v.as_array().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0]["points"].as_array().unwrap().len(), 7);
        assert_eq!(records[1]["tool"], "cosine");
        let run: serde_json::Value = serde_json::from_slice(
            &std::fs::read(dir.path().join("shapes.run.json")).unwrap(),
        )
        .unwrap();
        assert_eq!(run["shapes"].as_array().unwrap().len(), 2);
        assert_eq!(run["shapes"][0]["points"], 7);
        assert_eq!(run["source"], input.display().to_string());
    }
}
