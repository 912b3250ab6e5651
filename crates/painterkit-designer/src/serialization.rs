//! Save/load for painter design files.
//!
//! Designs are stored as versioned JSON with metadata, the placed shapes,
//! and the finished curves. Curve caches are not persisted; they are
//! regenerated from the control points on load.

use anyhow::{bail, Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

use crate::canvas::Canvas;
use crate::curve::{CurveKind, SplineCurve};
use crate::shapes::Shape;

/// Design file format version.
const FILE_FORMAT_VERSION: &str = "1.0";

/// Complete design file structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DesignFile {
    pub version: String,
    pub metadata: DesignMetadata,
    pub canvas_size: (f64, f64),
    pub shapes: Vec<Shape>,
    pub splines: Vec<SplineData>,
}

/// Design metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DesignMetadata {
    pub name: String,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
    #[serde(default)]
    pub description: String,
}

/// Serialized curve: control points and style, no derived caches.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SplineData {
    pub kind: CurveKind,
    pub color: painterkit_core::Color,
    pub points: Vec<(f64, f64)>,
    pub tension: f64,
    pub line_width: f64,
    pub show_control_lines: bool,
    pub show_points: bool,
}

impl SplineData {
    fn from_curve(curve: &SplineCurve) -> Self {
        Self {
            kind: curve.kind(),
            color: curve.color,
            points: curve.control_points().iter().map(|p| (p.x, p.y)).collect(),
            tension: curve.tension(),
            line_width: curve.line_width,
            show_control_lines: curve.show_control_lines,
            show_points: curve.show_points,
        }
    }

    fn into_curve(self) -> SplineCurve {
        let mut curve = SplineCurve::with_kind(self.color, self.kind);
        curve.line_width = self.line_width;
        curve.show_control_lines = self.show_control_lines;
        curve.show_points = self.show_points;
        curve.set_tension(self.tension);
        for (x, y) in self.points {
            curve.add_control_point(painterkit_core::Point::new(x, y));
        }
        curve
    }
}

/// Serializes the canvas into a design file structure.
pub fn to_design_file(canvas: &Canvas, name: &str) -> DesignFile {
    let now = Utc::now();
    DesignFile {
        version: FILE_FORMAT_VERSION.to_string(),
        metadata: DesignMetadata {
            name: name.to_string(),
            created: now,
            modified: now,
            description: String::new(),
        },
        canvas_size: canvas.size(),
        shapes: canvas.shapes().map(|o| o.shape.clone()).collect(),
        splines: canvas
            .spline_manager
            .finished()
            .iter()
            .map(SplineData::from_curve)
            .collect(),
    }
}

/// Rebuilds a canvas from a design file structure.
pub fn from_design_file(file: DesignFile) -> Result<Canvas> {
    if file.version != FILE_FORMAT_VERSION {
        bail!("unsupported design file version {}", file.version);
    }
    let (width, height) = file.canvas_size;
    let mut canvas = Canvas::with_size(width, height);
    for shape in file.shapes {
        canvas.add_shape(shape);
    }
    for spline in file.splines {
        canvas.spline_manager.push_finished(spline.into_curve());
    }
    Ok(canvas)
}

/// Saves the canvas as a JSON design file.
pub fn save_design(canvas: &Canvas, name: &str, path: &Path) -> Result<()> {
    let file = to_design_file(canvas, name);
    let json = serde_json::to_string_pretty(&file).context("Failed to serialize design")?;
    std::fs::write(path, json)
        .with_context(|| format!("Failed to write design file: {}", path.display()))?;
    info!(path = %path.display(), shapes = file.shapes.len(), splines = file.splines.len(), "saved design");
    Ok(())
}

/// Loads a canvas from a JSON design file.
pub fn load_design(path: &Path) -> Result<(Canvas, DesignMetadata)> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read design file: {}", path.display()))?;
    let file: DesignFile =
        serde_json::from_str(&json).context("Failed to parse design file")?;
    let metadata = file.metadata.clone();
    let canvas = from_design_file(file)?;
    info!(path = %path.display(), name = %metadata.name, "loaded design");
    Ok((canvas, metadata))
}
