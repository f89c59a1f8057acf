//! In-memory stroke storage
//!
//! The store is the authoritative collection of annotation state on one
//! client: completed strokes in draw order, the local stroke currently being
//! drawn, and in-progress strokes mirrored from remote participants.
//!
//! The store is owned by a single [`AnnotationSession`](crate::session::AnnotationSession)
//! per room and is only mutated through the operations below. Every
//! operation is synchronous, completes immediately, and tolerates stale or
//! duplicate input: deletes and completions referencing unknown stroke ids
//! are no-ops, never errors, because they can race with reconnects and
//! at-least-once delivery.

use crate::geometry::Point;
use crate::stroke::Stroke;
use std::collections::HashMap;
use tracing::{debug, warn};

/// Authoritative in-memory collection of strokes
#[derive(Debug, Default)]
pub struct StrokeStore {
    /// Completed strokes by id
    strokes: HashMap<String, Stroke>,

    /// Insertion order of completed stroke ids (oldest first)
    ///
    /// Render order and eraser stacking both derive from this.
    stroke_order: Vec<String>,

    /// The local stroke currently being drawn, if any
    active_local: Option<Stroke>,

    /// In-progress strokes mirrored from remote participants, by stroke id
    remote_active: HashMap<String, Stroke>,
}

impl StrokeStore {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Local authoring ────────────────────────────────────────────────

    /// Begin a new local stroke
    ///
    /// Replaces any stroke still in the in-progress slot; that can only
    /// happen if a pointer-up was lost, so the remnant is dropped.
    pub fn start_local(&mut self, stroke: Stroke) {
        if let Some(old) = self.active_local.replace(stroke) {
            warn!("Discarding unfinished local stroke {}", old.id);
        }
    }

    /// Append a point to the in-progress local stroke
    ///
    /// No-op if there is no stroke in progress.
    pub fn continue_local(&mut self, point: Point) {
        if let Some(stroke) = self.active_local.as_mut() {
            stroke.points.push(point);
        }
    }

    /// Complete the in-progress local stroke and move it into the completed
    /// collection
    ///
    /// Returns the completed stroke, or `None` if nothing was in progress.
    /// A stroke with exactly one point is a valid completed stroke (a dot).
    pub fn end_local(&mut self) -> Option<Stroke> {
        let mut stroke = self.active_local.take()?;
        stroke.mark_complete();
        self.insert_completed(stroke.clone());
        Some(stroke)
    }

    /// Drop the in-progress local stroke without completing it
    ///
    /// Used when authoring permission is revoked mid-draw or the tool is
    /// switched away before release.
    pub fn abandon_local(&mut self) -> Option<Stroke> {
        self.active_local.take()
    }

    /// The local stroke currently being drawn, if any
    pub fn active_local(&self) -> Option<&Stroke> {
        self.active_local.as_ref()
    }

    // ── Remote strokes ─────────────────────────────────────────────────

    /// Apply an incremental point batch from a remote participant
    ///
    /// Creates the mirrored in-progress stroke on first sight, appends on
    /// subsequent updates. Other strokes are unaffected.
    pub fn apply_remote_update(&mut self, update: Stroke) {
        if let Some(existing) = self.remote_active.get_mut(&update.id) {
            existing.add_points(&update.points);
        } else {
            debug!(
                "Remote participant {} started stroke {}",
                update.author_id, update.id
            );
            self.remote_active.insert(update.id.clone(), update);
        }
    }

    /// Apply an authoritative completed stroke from a remote participant
    ///
    /// The completion message carries the full point list and supersedes any
    /// partial state accumulated from updates; this guards against dropped
    /// update messages.
    pub fn apply_remote_complete(&mut self, stroke: Stroke) {
        self.remote_active.remove(&stroke.id);
        self.insert_completed(stroke);
    }

    // ── Shared operations ──────────────────────────────────────────────

    /// Delete a stroke by id
    ///
    /// No-op for unknown ids: a delete may race with a reconnect or arrive
    /// twice.
    pub fn delete(&mut self, stroke_id: &str) {
        if self.strokes.remove(stroke_id).is_some() {
            self.stroke_order.retain(|id| id != stroke_id);
        }
        self.remote_active.remove(stroke_id);
    }

    /// Remove all completed strokes and all mirrored in-progress strokes
    ///
    /// The local in-progress stroke and the active tool selection are not
    /// touched.
    pub fn clear_all(&mut self) {
        self.strokes.clear();
        self.stroke_order.clear();
        self.remote_active.clear();
    }

    /// Replace the completed collection wholesale
    ///
    /// Used only by late-joiner sync. Any local in-progress stroke is
    /// preserved untouched, as are mirrored in-progress strokes (their
    /// completions will arrive separately).
    pub fn replace_all(&mut self, strokes: Vec<Stroke>) {
        self.strokes.clear();
        self.stroke_order.clear();
        for stroke in strokes {
            self.insert_completed(stroke);
        }
    }

    /// Drop state belonging to a participant who left the room
    ///
    /// A mirrored in-progress stroke whose author disconnected will never
    /// receive its completion; it is treated as implicitly abandoned.
    pub fn remove_participant(&mut self, participant_id: &str) {
        self.remote_active
            .retain(|_, stroke| stroke.author_id != participant_id);
    }

    /// Delete all completed strokes drawn by a specific participant
    pub fn delete_by_participant(&mut self, participant_id: &str) {
        let to_delete: Vec<String> = self
            .strokes
            .values()
            .filter(|s| s.author_id == participant_id)
            .map(|s| s.id.clone())
            .collect();

        for id in to_delete {
            self.delete(&id);
        }
    }

    // ── Queries ────────────────────────────────────────────────────────

    /// Completed strokes in insertion order (oldest first)
    pub fn strokes(&self) -> Vec<&Stroke> {
        self.stroke_order
            .iter()
            .filter_map(|id| self.strokes.get(id))
            .collect()
    }

    /// Mirrored in-progress strokes from remote participants
    pub fn remote_active_strokes(&self) -> impl Iterator<Item = &Stroke> {
        self.remote_active.values()
    }

    /// Get a completed stroke by id
    pub fn get(&self, stroke_id: &str) -> Option<&Stroke> {
        self.strokes.get(stroke_id)
    }

    /// Number of completed strokes
    pub fn len(&self) -> usize {
        self.strokes.len()
    }

    /// Check if the completed collection is empty
    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }

    fn insert_completed(&mut self, stroke: Stroke) {
        if !self.strokes.contains_key(&stroke.id) {
            self.stroke_order.push(stroke.id.clone());
        }
        self.strokes.insert(stroke.id.clone(), stroke);
    }
}
