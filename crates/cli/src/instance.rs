//! Instance files: loading, quantization, and writing.
//!
//! Formats
//! - `.json`: `{"points": [{"x": f64, "y": f64}, ...], "radius": f64}`.
//! - `.csv` / `.parquet`: columns `x`, `y`; the radius comes from `--radius`.
//!
//! Real coordinates are rounded onto the integer grid of spacing `unit`.
//! Missing fields, nulls, non-numeric or non-finite values are reported as
//! `LoadError::InputParse`, never defaulted.

use std::fs;
use std::path::{Path, PathBuf};

use disks::geom::Point;
use nalgebra::Vector2;
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("cannot access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("input parse error in {}: {reason}", path.display())]
    InputParse { path: PathBuf, reason: String },
}

impl LoadError {
    fn parse(path: &Path, reason: impl Into<String>) -> Self {
        LoadError::InputParse {
            path: path.to_path_buf(),
            reason: reason.into(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RawPoint {
    pub x: f64,
    pub y: f64,
}

/// On-disk JSON instance.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RawInstance {
    pub points: Vec<RawPoint>,
    pub radius: f64,
}

/// Quantized instance handed to the solver.
#[derive(Clone, Debug, PartialEq)]
pub struct Instance {
    pub points: Vec<Point>,
    pub radius: i64,
    /// Grid spacing used for quantization.
    pub unit: f64,
}

/// Load and quantize an instance. `radius` overrides the file's radius and
/// is required for tabular inputs.
pub fn load(path: &Path, radius: Option<f64>, unit: f64) -> Result<Instance, LoadError> {
    if !(unit.is_finite() && unit > 0.0) {
        return Err(LoadError::parse(path, format!("grid unit must be positive, got {unit}")));
    }
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();
    let (coords, file_radius) = match ext.as_str() {
        "json" => {
            let raw = read_json(path)?;
            let coords: Vec<Vector2<f64>> =
                raw.points.iter().map(|p| Vector2::new(p.x, p.y)).collect();
            (coords, Some(raw.radius))
        }
        "csv" | "parquet" => (read_table(path, &ext)?, None),
        other => {
            return Err(LoadError::parse(
                path,
                format!("unsupported extension {other:?} (expected json, csv or parquet)"),
            ))
        }
    };
    let radius = radius
        .or(file_radius)
        .ok_or_else(|| LoadError::parse(path, "no radius: pass --radius for tabular input"))?;
    let instance = quantize(path, &coords, radius, unit)?;
    tracing::info!(
        points = instance.points.len(),
        radius = instance.radius,
        unit,
        "instance loaded"
    );
    Ok(instance)
}

fn read_json(path: &Path) -> Result<RawInstance, LoadError> {
    let bytes = fs::read(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_slice(&bytes).map_err(|e| LoadError::parse(path, e.to_string()))
}

fn read_table(path: &Path, ext: &str) -> Result<Vec<Vector2<f64>>, LoadError> {
    if !path.exists() {
        return Err(LoadError::Io {
            path: path.to_path_buf(),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        });
    }
    let polars_err = |e: PolarsError| LoadError::parse(path, e.to_string());
    let lf = if ext == "csv" {
        LazyCsvReader::new(path)
            .with_infer_schema_length(Some(100))
            .finish()
            .map_err(polars_err)?
    } else {
        LazyFrame::scan_parquet(path, ScanArgsParquet::default()).map_err(polars_err)?
    };
    let df = lf
        .select([
            col("x").cast(DataType::Float64),
            col("y").cast(DataType::Float64),
        ])
        .collect()
        .map_err(polars_err)?;
    let xs = df.column("x").and_then(|c| c.f64()).map_err(polars_err)?;
    let ys = df.column("y").and_then(|c| c.f64()).map_err(polars_err)?;
    xs.into_iter()
        .zip(ys.into_iter())
        .enumerate()
        .map(|(row, pair)| match pair {
            (Some(x), Some(y)) => Ok(Vector2::new(x, y)),
            _ => Err(LoadError::parse(
                path,
                format!("row {row}: missing or non-numeric coordinate"),
            )),
        })
        .collect()
}

fn quantize(
    path: &Path,
    coords: &[Vector2<f64>],
    radius: f64,
    unit: f64,
) -> Result<Instance, LoadError> {
    let points = coords
        .iter()
        .enumerate()
        .map(|(i, &v)| {
            Point::from_real(v, unit).ok_or_else(|| {
                LoadError::parse(path, format!("point {i} ({}, {}) is not representable", v.x, v.y))
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    if !(radius.is_finite() && radius >= 0.0) {
        return Err(LoadError::parse(
            path,
            format!("radius must be finite and non-negative, got {radius}"),
        ));
    }
    let grid_radius = Point::from_real(Vector2::new(radius, 0.0), unit)
        .map(|p| p.x)
        .ok_or_else(|| LoadError::parse(path, format!("radius {radius} is not representable")))?;
    Ok(Instance {
        points,
        radius: grid_radius,
        unit,
    })
}

/// Write a JSON instance in real coordinates.
pub fn write_json(path: &Path, instance: &Instance) -> Result<(), LoadError> {
    let raw = RawInstance {
        points: instance
            .points
            .iter()
            .map(|p| {
                let v = p.to_real(instance.unit);
                RawPoint { x: v.x, y: v.y }
            })
            .collect(),
        radius: instance.radius as f64 * instance.unit,
    };
    let bytes = serde_json::to_vec_pretty(&raw).map_err(|e| LoadError::parse(path, e.to_string()))?;
    fs::write(path, bytes).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}
