//! Normalized canvas coordinates
//!
//! Annotations are exchanged in resolution-independent coordinates: a point
//! on the shared screen is expressed as a fraction of the canvas extent in
//! each axis. Participants render the same stroke at the same relative
//! position regardless of their viewport's pixel dimensions, and the shared
//! video can be resized freely without invalidating existing annotations.

use serde::{Deserialize, Serialize};

/// A single annotation point in normalized canvas coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal position as a fraction of canvas width, in `[0, 1]`
    pub x: f32,

    /// Vertical position as a fraction of canvas height, in `[0, 1]`
    pub y: f32,

    /// Stylus pressure, if the input device reports one. The protocol
    /// attaches no meaning to it and passes it through unchanged.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pressure: Option<f32>,
}

impl Point {
    /// Create a point without pressure information
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            pressure: None,
        }
    }

    /// Create a point with pressure information
    pub fn with_pressure(x: f32, y: f32, pressure: f32) -> Self {
        Self {
            x,
            y,
            pressure: Some(pressure),
        }
    }

    /// Euclidean distance to another point
    pub fn distance_to(&self, other: &Point) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// A raw input position in device pixels, as delivered by pointer events
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelPoint {
    /// Horizontal position in device pixels
    pub x: f32,

    /// Vertical position in device pixels
    pub y: f32,

    /// Stylus pressure, if reported
    pub pressure: Option<f32>,
}

impl PixelPoint {
    /// Create a pixel point without pressure information
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            pressure: None,
        }
    }
}

/// Convert a device-pixel position into normalized coordinates
///
/// Coordinates are clamped to `[0, 1]`. A degenerate canvas (zero width or
/// height) maps everything to the origin instead of dividing by zero.
/// Pressure is passed through unchanged.
pub fn normalize(
    pixel_x: f32,
    pixel_y: f32,
    width: f32,
    height: f32,
    pressure: Option<f32>,
) -> Point {
    if width == 0.0 || height == 0.0 {
        return Point {
            x: 0.0,
            y: 0.0,
            pressure,
        };
    }

    Point {
        x: (pixel_x / width).clamp(0.0, 1.0),
        y: (pixel_y / height).clamp(0.0, 1.0),
        pressure,
    }
}

/// Convert a normalized point back into device pixels
///
/// The inverse of [`normalize`]. No clamping is applied; the canvas bounds
/// already guarantee `[0, 1]` input in practice.
pub fn denormalize(point: &Point, width: f32, height: f32) -> (f32, f32) {
    (point.x * width, point.y * height)
}

/// Normalize a sequence of pixel positions, preserving order and pressure
pub fn normalize_points(pixels: &[PixelPoint], width: f32, height: f32) -> Vec<Point> {
    pixels
        .iter()
        .map(|p| normalize(p.x, p.y, width, height, p.pressure))
        .collect()
}

/// Denormalize a sequence of points, preserving order
pub fn denormalize_points(points: &[Point], width: f32, height: f32) -> Vec<(f32, f32)> {
    points.iter().map(|p| denormalize(p, width, height)).collect()
}
