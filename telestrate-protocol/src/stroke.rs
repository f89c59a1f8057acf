//! Stroke model and drawing tools
//!
//! A stroke is one continuous freehand drawing action: an ordered,
//! append-only list of normalized points plus the authoring metadata needed
//! to render it. Point order is the drawing order and must be preserved; it
//! determines both the rendered path and the segment indices used by
//! hit-testing.

use crate::geometry::Point;
use serde::{Deserialize, Serialize};

/// Tools that can produce a stroke
///
/// This is the only tool set that may appear in a stored stroke or on the
/// wire. Eraser and select actions are local operations and are never
/// transmitted as stroke tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrokeTool {
    /// Opaque freehand pen
    Pen,
    /// Semi-transparent highlighter
    Highlighter,
}

/// The locally selected annotation tool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tool {
    Pen,
    Highlighter,
    Eraser,
    Select,
}

impl Tool {
    /// The stroke tool this selection draws with, if it draws at all
    pub fn stroke_tool(&self) -> Option<StrokeTool> {
        match self {
            Tool::Pen => Some(StrokeTool::Pen),
            Tool::Highlighter => Some(StrokeTool::Highlighter),
            Tool::Eraser | Tool::Select => None,
        }
    }

    /// Check if this tool produces strokes
    pub fn is_drawing(&self) -> bool {
        self.stroke_tool().is_some()
    }
}

/// RGBA annotation color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const RED: Color = Color { r: 255, g: 87, b: 87, a: 255 };
    pub const BLUE: Color = Color { r: 87, g: 166, b: 255, a: 255 };
    pub const GREEN: Color = Color { r: 87, g: 255, b: 144, a: 255 };
    pub const ORANGE: Color = Color { r: 255, g: 193, b: 87, a: 255 };
    pub const PURPLE: Color = Color { r: 200, g: 87, b: 255, a: 255 };
    pub const PINK: Color = Color { r: 255, g: 87, b: 200, a: 255 };

    /// Per-participant color rotation
    pub const PALETTE: [Color; 6] = [
        Self::RED,
        Self::BLUE,
        Self::GREEN,
        Self::ORANGE,
        Self::PURPLE,
        Self::PINK,
    ];
}

/// A single annotation stroke
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    /// Unique stroke id (UUID string)
    pub id: String,

    /// Identity of the participant who drew the stroke
    pub author_id: String,

    /// Tool the stroke was drawn with
    pub tool: StrokeTool,

    /// Stroke color
    pub color: Color,

    /// Ordered path in normalized coordinates, never empty
    pub points: Vec<Point>,

    /// Creation time, milliseconds since the UNIX epoch
    pub created_at: u64,

    /// Whether the author has released the pointer
    pub complete: bool,
}

impl Stroke {
    /// Create a new in-progress stroke seeded with its first point
    pub fn new(
        id: impl Into<String>,
        author_id: impl Into<String>,
        tool: StrokeTool,
        color: Color,
        start_point: Point,
        created_at: u64,
    ) -> Self {
        Self {
            id: id.into(),
            author_id: author_id.into(),
            tool,
            color,
            points: vec![start_point],
            created_at,
            complete: false,
        }
    }

    /// Append points to the stroke path, preserving order
    pub fn add_points(&mut self, points: &[Point]) {
        self.points.extend_from_slice(points);
    }

    /// Mark the stroke as completed
    ///
    /// A stroke transitions incomplete to complete exactly once, on pointer
    /// release. A single-point stroke is a valid completed stroke (a dot).
    pub fn mark_complete(&mut self) {
        self.complete = true;
    }
}
