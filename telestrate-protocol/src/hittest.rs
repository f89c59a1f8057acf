//! Stroke hit-testing
//!
//! Determines whether a pointer position lies on a stroke, used by the
//! eraser. Testing is a two-stage check: a cheap axis-aligned bounding-box
//! rejection first, then the exact minimum distance from the point to each
//! path segment.
//!
//! All distances are in normalized canvas units, so a threshold of 0.02 is
//! roughly 2% of the canvas extent at any resolution.

use crate::geometry::Point;
use crate::stroke::Stroke;

/// Default hit threshold in normalized units (~2% of canvas extent)
pub const DEFAULT_HIT_THRESHOLD: f32 = 0.02;

/// Axis-aligned bounding box in normalized coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min_x: f32,
    pub min_y: f32,
    pub max_x: f32,
    pub max_y: f32,
}

impl Aabb {
    /// The degenerate box at the origin
    pub const ZERO: Aabb = Aabb {
        min_x: 0.0,
        min_y: 0.0,
        max_x: 0.0,
        max_y: 0.0,
    };

    /// Grow the box by `margin` on all sides
    pub fn expand(&self, margin: f32) -> Aabb {
        Aabb {
            min_x: self.min_x - margin,
            min_y: self.min_y - margin,
            max_x: self.max_x + margin,
            max_y: self.max_y + margin,
        }
    }

    /// Check whether a point lies inside the box (inclusive)
    pub fn contains(&self, point: &Point) -> bool {
        point.x >= self.min_x
            && point.x <= self.max_x
            && point.y >= self.min_y
            && point.y <= self.max_y
    }
}

/// Compute the bounding box of a point path
///
/// Returns the degenerate box at the origin for an empty path. An empty path
/// should not occur (strokes are never empty), but must not panic either.
pub fn bounds_of(points: &[Point]) -> Aabb {
    let Some(first) = points.first() else {
        return Aabb::ZERO;
    };

    let mut bounds = Aabb {
        min_x: first.x,
        min_y: first.y,
        max_x: first.x,
        max_y: first.y,
    };

    for p in &points[1..] {
        bounds.min_x = bounds.min_x.min(p.x);
        bounds.min_y = bounds.min_y.min(p.y);
        bounds.max_x = bounds.max_x.max(p.x);
        bounds.max_y = bounds.max_y.max(p.y);
    }

    bounds
}

/// Minimum distance from `point` to the segment `a`-`b`
///
/// The projection parameter is clamped to `[0, 1]`; a zero-length segment
/// falls back to plain point distance.
fn point_segment_distance(point: &Point, a: &Point, b: &Point) -> f32 {
    let seg_x = b.x - a.x;
    let seg_y = b.y - a.y;
    let len_sq = seg_x * seg_x + seg_y * seg_y;

    if len_sq == 0.0 {
        return point.distance_to(a);
    }

    let t = (((point.x - a.x) * seg_x + (point.y - a.y) * seg_y) / len_sq).clamp(0.0, 1.0);
    let nearest = Point::new(a.x + t * seg_x, a.y + t * seg_y);
    point.distance_to(&nearest)
}

/// Check whether a point lies on a stroke within `threshold`
pub fn is_point_on_stroke(point: &Point, stroke: &Stroke, threshold: f32) -> bool {
    match stroke.points.len() {
        0 => false,
        1 => point.distance_to(&stroke.points[0]) <= threshold,
        _ => {
            // Fast rejection before the per-segment scan
            if !bounds_of(&stroke.points).expand(threshold).contains(point) {
                return false;
            }

            stroke
                .points
                .windows(2)
                .any(|seg| point_segment_distance(point, &seg[0], &seg[1]) <= threshold)
        }
    }
}

/// Find the topmost stroke at a point, if any
///
/// `strokes` must be in insertion order (oldest first); the scan runs in
/// reverse so the last-drawn stroke wins, matching visual stacking. This is
/// what decides which of several overlapping strokes an eraser deletes.
pub fn find_topmost_stroke_at<'a>(
    point: &Point,
    strokes: &[&'a Stroke],
    threshold: f32,
) -> Option<&'a Stroke> {
    strokes
        .iter()
        .rev()
        .find(|stroke| is_point_on_stroke(point, stroke, threshold))
        .copied()
}
