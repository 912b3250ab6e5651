//! Draw-command production for the rendering collaborator.
//!
//! The core never draws: every drawable entity flattens itself into an
//! ordered list of [`DrawCommand`]s — plain coordinates plus style — that
//! the host renders with its own line/polygon/oval primitives.

use painterkit_core::{Color, Point};

use crate::canvas::Canvas;
use crate::curve::SplineCurve;
use crate::shapes::{FrameShape, PolygonShape, Shape};

/// Grid line spacing in pixels.
const GRID_STEP: f64 = 50.0;
/// Radius of a control-point marker.
const CONTROL_MARKER_RADIUS: f64 = 4.0;
/// Radius of an intermediate-point marker.
const INTERMEDIATE_MARKER_RADIUS: f64 = 3.0;

fn grid_color() -> Color {
    Color::rgb(0xF0, 0xF0, 0xF0)
}
fn control_line_color() -> Color {
    Color::LIGHT_GRAY
}
fn control_marker_fill() -> Color {
    Color::rgb(0x4C, 0xAF, 0x50)
}
fn control_marker_outline() -> Color {
    Color::rgb(0x2E, 0x7D, 0x32)
}
fn intermediate_marker_fill() -> Color {
    Color::rgb(0xFF, 0x98, 0x00)
}
fn intermediate_marker_outline() -> Color {
    Color::rgb(0xF5, 0x7C, 0x00)
}
fn intermediate_line_color() -> Color {
    Color::rgb(0xFF, 0xA0, 0x00)
}
fn intermediate_label_color() -> Color {
    Color::rgb(0xE6, 0x51, 0x00)
}

/// Stroke attributes for outline commands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: Color,
    pub width: f64,
    /// `(on, off)` dash pattern in pixels; `None` draws solid.
    pub dash: Option<(u8, u8)>,
}

impl Stroke {
    /// A solid stroke.
    pub fn solid(color: Color, width: f64) -> Self {
        Self {
            color,
            width,
            dash: None,
        }
    }

    /// A dashed stroke.
    pub fn dashed(color: Color, width: f64, dash: (u8, u8)) -> Self {
        Self {
            color,
            width,
            dash: Some(dash),
        }
    }
}

/// One primitive for the host to render.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Open point run.
    Polyline { points: Vec<Point>, stroke: Stroke },
    /// Implicitly closed point run, optionally filled.
    Polygon {
        points: Vec<Point>,
        stroke: Stroke,
        fill: Option<Color>,
    },
    /// Axis-aligned ellipse.
    Oval {
        center: Point,
        rx: f64,
        ry: f64,
        stroke: Stroke,
        fill: Option<Color>,
    },
    /// Small text annotation (point indices and the like).
    Label {
        at: Point,
        text: String,
        color: Color,
        font_size: f64,
    },
}

/// Commands for one placed shape.
pub fn shape_commands(shape: &Shape) -> Vec<DrawCommand> {
    match shape {
        Shape::Polygon(polygon) => polygon_commands(polygon),
        Shape::Frame(frame) => frame_commands(frame),
    }
}

fn polygon_commands(polygon: &PolygonShape) -> Vec<DrawCommand> {
    if polygon.vertices.len() < 2 {
        return Vec::new();
    }
    vec![DrawCommand::Polygon {
        points: polygon.vertices.clone(),
        stroke: Stroke::solid(polygon.color, 2.0),
        fill: None,
    }]
}

fn frame_commands(frame: &FrameShape) -> Vec<DrawCommand> {
    let (x1, y1, x2, y2) = frame.region();
    let stroke = Stroke::solid(frame.color, frame.border_width);
    vec![
        DrawCommand::Polygon {
            points: vec![
                Point::new(x1, y1),
                Point::new(x2, y1),
                Point::new(x2, y2),
                Point::new(x1, y2),
            ],
            stroke,
            fill: None,
        },
        DrawCommand::Oval {
            center: frame.center,
            rx: frame.inner_radius(),
            ry: frame.inner_radius(),
            stroke,
            fill: None,
        },
    ]
}

/// Commands for one curve, in back-to-front paint order: control polyline,
/// intermediate connectors, the curve itself, control markers with indices,
/// intermediate markers with `segment.index` labels.
pub fn spline_commands(curve: &SplineCurve) -> Vec<DrawCommand> {
    let control = curve.control_points();
    if control.is_empty() {
        return Vec::new();
    }

    let mut commands = Vec::new();

    if curve.show_control_lines && control.len() >= 2 {
        commands.push(DrawCommand::Polyline {
            points: control.to_vec(),
            stroke: Stroke::dashed(control_line_color(), 1.0, (2, 2)),
        });
    }

    // Dashed connectors from each intermediate marker to both endpoints of
    // its control segment.
    for (i, marker) in curve.intermediate_points().iter().enumerate() {
        let segment = i / 2;
        if segment + 1 < control.len() {
            let stroke = Stroke::dashed(intermediate_line_color(), 1.0, (1, 2));
            commands.push(DrawCommand::Polyline {
                points: vec![*marker, control[segment]],
                stroke,
            });
            commands.push(DrawCommand::Polyline {
                points: vec![*marker, control[segment + 1]],
                stroke,
            });
        }
    }

    for segment in curve.segments() {
        if segment.points.len() >= 2 {
            commands.push(DrawCommand::Polyline {
                points: segment.points,
                stroke: Stroke::solid(segment.color, curve.line_width),
            });
        }
    }

    if curve.show_points {
        for (i, point) in control.iter().enumerate() {
            commands.push(DrawCommand::Oval {
                center: *point,
                rx: CONTROL_MARKER_RADIUS,
                ry: CONTROL_MARKER_RADIUS,
                stroke: Stroke::solid(control_marker_outline(), 2.0),
                fill: Some(control_marker_fill()),
            });
            commands.push(DrawCommand::Label {
                at: Point::new(point.x, point.y - 15.0),
                text: (i + 1).to_string(),
                color: control_marker_outline(),
                font_size: 9.0,
            });
        }
    }

    for (i, marker) in curve.intermediate_points().iter().enumerate() {
        commands.push(DrawCommand::Oval {
            center: *marker,
            rx: INTERMEDIATE_MARKER_RADIUS,
            ry: INTERMEDIATE_MARKER_RADIUS,
            stroke: Stroke::solid(intermediate_marker_outline(), 1.0),
            fill: Some(intermediate_marker_fill()),
        });
        commands.push(DrawCommand::Label {
            at: Point::new(marker.x, marker.y - 12.0),
            text: format!("{}.{}", i / 2 + 1, i % 2 + 1),
            color: intermediate_label_color(),
            font_size: 8.0,
        });
    }

    commands
}

/// Light background grid covering the drawing area.
pub fn grid_commands(width: f64, height: f64) -> Vec<DrawCommand> {
    let mut commands = Vec::new();
    if width <= 1.0 || height <= 1.0 {
        return commands;
    }
    let stroke = Stroke::solid(grid_color(), 1.0);
    let mut x = 0.0;
    while x < width {
        commands.push(DrawCommand::Polyline {
            points: vec![Point::new(x, 0.0), Point::new(x, height)],
            stroke,
        });
        x += GRID_STEP;
    }
    let mut y = 0.0;
    while y < height {
        commands.push(DrawCommand::Polyline {
            points: vec![Point::new(0.0, y), Point::new(width, y)],
            stroke,
        });
        y += GRID_STEP;
    }
    commands
}

/// Flattens the whole canvas: grid (when enabled), placed shapes, finished
/// curves, then the in-progress curve on top.
pub fn canvas_commands(canvas: &Canvas) -> Vec<DrawCommand> {
    let mut commands = Vec::new();
    if canvas.show_grid {
        let (width, height) = canvas.size();
        commands.extend(grid_commands(width, height));
    }
    for object in canvas.shapes() {
        commands.extend(shape_commands(&object.shape));
    }
    for curve in canvas.spline_manager.finished() {
        commands.extend(spline_commands(curve));
    }
    if let Some(current) = canvas.spline_manager.current() {
        commands.extend(spline_commands(current));
    }
    commands
}
