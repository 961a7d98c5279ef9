//! CSV batch input: one drag step per row.
//!
//! Columns: `tool,start_x,start_y,x,y` (required) and `thickness,alt,shift,control`
//! (optional; default thickness and `false`). Numeric columns may be integer
//! or float; flags may be boolean or 0/1. Coordinates must be finite, as on
//! the `shape` command line.

use anyhow::{anyhow, bail, Context, Result};
use polars::prelude::*;
use shapegen::{Modifiers, Point, ShapeKind};
use std::path::Path;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragRow {
    pub tool: ShapeKind,
    pub start: Point,
    pub current: Point,
    pub thickness: f64,
    pub modifiers: Modifiers,
}

pub fn read_rows(path: &Path, default_thickness: f64) -> Result<Vec<DragRow>> {
    let df = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(100))
        .finish()
        .with_context(|| format!("opening {}", path.display()))?
        .collect()
        .with_context(|| format!("reading {}", path.display()))?;
    let n = df.height();
    tracing::info!(rows = n, cols = df.width(), "batch_csv_shape");

    let tools = tool_column(&df)?;
    let start_x = coord_column(&df, "start_x")?;
    let start_y = coord_column(&df, "start_y")?;
    let x = coord_column(&df, "x")?;
    let y = coord_column(&df, "y")?;
    let thickness = match df.column("thickness") {
        Ok(_) => f64_column(&df, "thickness")?,
        Err(_) => vec![default_thickness; n],
    };
    let alt = flag_column(&df, "alt", n)?;
    let shift = flag_column(&df, "shift", n)?;
    let control = flag_column(&df, "control", n)?;

    Ok((0..n)
        .map(|i| DragRow {
            tool: tools[i],
            start: Point::new(start_x[i], start_y[i]),
            current: Point::new(x[i], y[i]),
            thickness: thickness[i],
            modifiers: Modifiers {
                alt: alt[i],
                shift: shift[i],
                control: control[i],
            },
        })
        .collect())
}

fn tool_column(df: &DataFrame) -> Result<Vec<ShapeKind>> {
    let col = df.column("tool").context("missing column tool")?;
    col.str()?
        .into_iter()
        .enumerate()
        .map(|(i, v)| {
            let name = v.ok_or_else(|| anyhow!("row {i}: empty tool"))?;
            name.parse::<ShapeKind>()
                .with_context(|| format!("row {i}: bad tool"))
        })
        .collect()
}

fn f64_column(df: &DataFrame, name: &str) -> Result<Vec<f64>> {
    let col = df
        .column(name)
        .with_context(|| format!("missing column {name}"))?
        .cast(&DataType::Float64)?;
    col.f64()?
        .into_iter()
        .enumerate()
        .map(|(i, v)| v.ok_or_else(|| anyhow!("row {i}: empty {name}")))
        .collect()
}

fn coord_column(df: &DataFrame, name: &str) -> Result<Vec<f64>> {
    let values = f64_column(df, name)?;
    if let Some(i) = values.iter().position(|v| !v.is_finite()) {
        bail!("row {i}: non-finite {name} ({})", values[i]);
    }
    Ok(values)
}

fn flag_column(df: &DataFrame, name: &str, n: usize) -> Result<Vec<bool>> {
    let Ok(col) = df.column(name) else {
        return Ok(vec![false; n]);
    };
    let col = col
        .cast(&DataType::Boolean)
        .with_context(|| format!("column {name} is not a flag"))?;
    Ok(col.bool()?.into_iter().map(|v| v.unwrap_or(false)).collect())
}
