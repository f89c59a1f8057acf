//! Annotation session
//!
//! The session is the single authority for annotation state on one client.
//! It owns the [`StrokeStore`], the local authoring context (selected tool,
//! color, permission), outbound message batching, and the late-joiner state
//! exchange.
//!
//! All operations are synchronous and complete immediately. The session
//! never performs I/O: outbound messages accumulate in a queue that the
//! surrounding runtime drains and hands to the transport, and inbound
//! payloads are pushed in through [`AnnotationSession::handle_message`].
//!
//! ## Update batching
//!
//! While a stroke is being drawn, pointer samples arrive much faster than
//! they are worth transmitting. Instead of a timer, emission is time-gated:
//! every pointer move appends to the in-progress stroke, and accumulated
//! new points are flushed as one `stroke_update` once at least
//! [`UPDATE_INTERVAL`] has elapsed since the last flush. Pointer release
//! emits exactly one `stroke_complete` carrying the full path, which
//! supersedes all partial updates on the receiving side.

use crate::error::{ProtocolError, Result};
use crate::geometry::Point;
use crate::hittest::{find_topmost_stroke_at, DEFAULT_HIT_THRESHOLD};
use crate::message::{current_timestamp_ms, AnnotationMessage};
use crate::store::StrokeStore;
use crate::stroke::{Color, Stroke, Tool};
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Minimum interval between outbound `stroke_update` flushes
/// (roughly one animation frame)
pub const UPDATE_INTERVAL: Duration = Duration::from_millis(16);

/// How long a late joiner waits for a state snapshot before proceeding
/// with an empty stroke set
pub const SNAPSHOT_WAIT: Duration = Duration::from_secs(3);

/// Late-joiner synchronization phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SyncPhase {
    /// No state request outstanding
    Idle,
    /// Request broadcast, waiting for the first snapshot
    Waiting { since: Instant },
    /// Snapshot applied, or wait window expired
    Synced,
}

/// Single authority for annotation state on one client
#[derive(Debug)]
pub struct AnnotationSession {
    /// Identity of the local participant
    local_id: String,

    /// Currently selected tool
    tool: Tool,

    /// Color for new local strokes
    color: Color,

    /// Whether this participant has annotation rights
    annotations_enabled: bool,

    /// Whether a screen share is active; drawing is only permitted over a
    /// shared screen
    share_active: bool,

    store: StrokeStore,

    /// Number of points of the in-progress local stroke already flushed
    flushed: usize,

    /// Time of the last `stroke_update` flush
    last_flush: Option<Instant>,

    update_interval: Duration,
    snapshot_wait: Duration,
    sync: SyncPhase,

    /// Outbound messages awaiting pickup by the runtime
    outbound: Vec<AnnotationMessage>,
}

impl AnnotationSession {
    pub fn new(local_id: impl Into<String>) -> Self {
        Self {
            local_id: local_id.into(),
            tool: Tool::Pen,
            color: Color::RED,
            annotations_enabled: true,
            share_active: false,
            store: StrokeStore::new(),
            flushed: 0,
            last_flush: None,
            update_interval: UPDATE_INTERVAL,
            snapshot_wait: SNAPSHOT_WAIT,
            sync: SyncPhase::Idle,
            outbound: Vec::new(),
        }
    }

    // ── Authoring context ──────────────────────────────────────────────

    /// Identity of the local participant
    pub fn local_id(&self) -> &str {
        &self.local_id
    }

    /// The stroke store
    pub fn store(&self) -> &StrokeStore {
        &self.store
    }

    /// Currently selected tool
    pub fn tool(&self) -> Tool {
        self.tool
    }

    /// Select a tool
    ///
    /// Switching away from a drawing tool mid-stroke abandons the stroke:
    /// it is dropped without a completion message.
    pub fn set_tool(&mut self, tool: Tool) {
        if !tool.is_drawing() {
            self.abandon_active();
        }
        self.tool = tool;
    }

    /// Color for new local strokes
    pub fn color(&self) -> Color {
        self.color
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// Grant or revoke annotation rights
    ///
    /// Revocation mid-draw abandons the in-progress stroke.
    pub fn set_annotations_enabled(&mut self, enabled: bool) {
        if !enabled {
            self.abandon_active();
        }
        self.annotations_enabled = enabled;
    }

    /// Update whether a screen share is active
    ///
    /// Annotations exist on top of a shared screen; when the share ends, an
    /// in-progress stroke has nothing to be drawn on and is abandoned.
    pub fn set_share_active(&mut self, active: bool) {
        if !active {
            self.abandon_active();
        }
        self.share_active = active;
    }

    /// Check whether local authoring is currently permitted
    pub fn can_author(&self) -> bool {
        self.annotations_enabled && self.share_active
    }

    /// Override the update flush interval (used by tests and configuration)
    pub fn set_update_interval(&mut self, interval: Duration) {
        self.update_interval = interval;
    }

    /// Override the snapshot wait window (used by tests and configuration)
    pub fn set_snapshot_wait(&mut self, wait: Duration) {
        self.snapshot_wait = wait;
    }

    // ── Local pointer input ────────────────────────────────────────────

    /// Handle pointer-down at a normalized position
    ///
    /// Routes on the selected tool: drawing tools start a stroke, the
    /// eraser deletes the topmost stroke under the pointer, select does
    /// nothing. Starting without authoring rights is rejected locally; no
    /// message is sent.
    pub fn pointer_down(&mut self, point: Point) -> Result<()> {
        match self.tool {
            Tool::Select => Ok(()),
            Tool::Eraser => self.erase_at(point),
            Tool::Pen | Tool::Highlighter => self.start_stroke(point),
        }
    }

    /// Handle pointer-move at a normalized position
    ///
    /// Appends to the in-progress stroke and flushes accumulated points if
    /// the update interval has elapsed. No-op when nothing is in progress.
    pub fn pointer_move(&mut self, point: Point) -> Result<()> {
        match self.tool {
            Tool::Select => Ok(()),
            Tool::Eraser => self.erase_at(point),
            Tool::Pen | Tool::Highlighter => {
                if self.store.active_local().is_some() {
                    self.store.continue_local(point);
                    self.maybe_flush();
                }
                Ok(())
            }
        }
    }

    /// Handle pointer-up
    ///
    /// Completes the in-progress stroke and emits exactly one
    /// `stroke_complete` carrying the full path. A stroke released without
    /// moving is a valid single-point dot.
    pub fn pointer_up(&mut self) {
        let Some(completed) = self.store.end_local() else {
            return;
        };

        self.flushed = 0;
        self.last_flush = None;
        self.outbound.push(AnnotationMessage::StrokeComplete {
            stroke_id: completed.id,
            author_id: completed.author_id,
            tool: completed.tool,
            color: completed.color,
            points: completed.points,
            timestamp: current_timestamp_ms(),
        });
    }

    fn start_stroke(&mut self, point: Point) -> Result<()> {
        if !self.can_author() {
            return Err(ProtocolError::AnnotationNotAllowed);
        }

        // The tool is a drawing tool here; routed by pointer_down.
        let Some(stroke_tool) = self.tool.stroke_tool() else {
            return Ok(());
        };

        let stroke = Stroke::new(
            uuid::Uuid::new_v4().to_string(),
            self.local_id.clone(),
            stroke_tool,
            self.color,
            point,
            current_timestamp_ms(),
        );

        self.outbound.push(AnnotationMessage::StrokeUpdate {
            stroke_id: stroke.id.clone(),
            author_id: stroke.author_id.clone(),
            tool: stroke.tool,
            color: stroke.color,
            points: stroke.points.clone(),
            timestamp: current_timestamp_ms(),
        });
        self.flushed = 1;
        self.last_flush = Some(Instant::now());
        self.store.start_local(stroke);
        Ok(())
    }

    /// Delete the topmost stroke under the pointer, if any
    pub fn erase_at(&mut self, point: Point) -> Result<()> {
        if !self.can_author() {
            return Err(ProtocolError::AnnotationNotAllowed);
        }

        let strokes = self.store.strokes();
        let Some(hit) = find_topmost_stroke_at(&point, &strokes, DEFAULT_HIT_THRESHOLD) else {
            return Ok(());
        };
        let stroke_id = hit.id.clone();

        self.store.delete(&stroke_id);
        self.outbound.push(AnnotationMessage::StrokeDelete {
            stroke_id,
            deleted_by: self.local_id.clone(),
            timestamp: current_timestamp_ms(),
        });
        Ok(())
    }

    /// Wipe all annotations and broadcast the wipe
    ///
    /// Host gating is the caller's responsibility; the session does not
    /// know roles.
    pub fn clear_all(&mut self) {
        self.store.clear_all();
        self.outbound.push(AnnotationMessage::ClearAll {
            cleared_by: self.local_id.clone(),
            timestamp: current_timestamp_ms(),
        });
    }

    fn abandon_active(&mut self) {
        if let Some(stroke) = self.store.abandon_local() {
            // No completion is sent; peers that saw partial updates drop
            // the remnant when this participant leaves, or it is superseded
            // by the next snapshot.
            debug!("Abandoned in-progress stroke {}", stroke.id);
            self.flushed = 0;
            self.last_flush = None;
        }
    }

    fn maybe_flush(&mut self) {
        let due = self
            .last_flush
            .map_or(true, |t| t.elapsed() >= self.update_interval);
        if !due {
            return;
        }

        let Some(stroke) = self.store.active_local() else {
            return;
        };
        let total = stroke.points.len();
        if total <= self.flushed {
            return;
        }

        let message = AnnotationMessage::StrokeUpdate {
            stroke_id: stroke.id.clone(),
            author_id: stroke.author_id.clone(),
            tool: stroke.tool,
            color: stroke.color,
            points: stroke.points[self.flushed..].to_vec(),
            timestamp: current_timestamp_ms(),
        };
        self.flushed = total;
        self.last_flush = Some(Instant::now());
        self.outbound.push(message);
    }

    // ── Late-joiner sync ───────────────────────────────────────────────

    /// Broadcast a state request after joining the room
    pub fn request_state(&mut self) {
        debug!("Requesting annotation state");
        self.outbound.push(AnnotationMessage::StateRequest {
            requester_id: self.local_id.clone(),
        });
        self.sync = SyncPhase::Waiting {
            since: Instant::now(),
        };
    }

    /// Check whether late-joiner sync has concluded
    ///
    /// True once a snapshot was applied or the wait window expired.
    pub fn sync_complete(&self) -> bool {
        self.sync == SyncPhase::Synced
    }

    /// Periodic housekeeping
    ///
    /// Flushes a due `stroke_update` and expires the snapshot wait window.
    /// Call once per frame.
    pub fn poll(&mut self) {
        self.maybe_flush();

        if let SyncPhase::Waiting { since } = self.sync {
            if since.elapsed() >= self.snapshot_wait {
                debug!("No state snapshot arrived; continuing with empty stroke set");
                self.sync = SyncPhase::Synced;
            }
        }
    }

    // ── Inbound traffic ────────────────────────────────────────────────

    /// Handle an annotation payload received from the transport
    ///
    /// Malformed payloads are logged and dropped; peers are not trusted to
    /// send well-formed data. Stale and duplicate operations are no-ops.
    pub fn handle_message(&mut self, sender_id: &str, payload: &[u8]) {
        // The transport should not loop our own traffic back, but guard
        // anyway: everything here was already applied locally.
        if sender_id == self.local_id {
            return;
        }

        let message = match AnnotationMessage::decode(payload) {
            Ok(message) => message,
            Err(e) => {
                warn!("Dropping malformed annotation payload from {}: {}", sender_id, e);
                return;
            }
        };

        self.apply(message);
    }

    fn apply(&mut self, message: AnnotationMessage) {
        match message {
            AnnotationMessage::StrokeUpdate {
                stroke_id,
                author_id,
                tool,
                color,
                points,
                timestamp,
            } => {
                // An empty batch carries nothing to create or append.
                if points.is_empty() {
                    return;
                }
                let first = points[0];
                let mut stroke =
                    Stroke::new(stroke_id, author_id, tool, color, first, timestamp);
                stroke.points = points;
                self.store.apply_remote_update(stroke);
            }

            AnnotationMessage::StrokeComplete {
                stroke_id,
                author_id,
                tool,
                color,
                points,
                timestamp,
            } => {
                // Validation guarantees a non-empty path.
                let first = points[0];
                let mut stroke =
                    Stroke::new(stroke_id, author_id, tool, color, first, timestamp);
                stroke.points = points;
                stroke.mark_complete();
                self.store.apply_remote_complete(stroke);
            }

            AnnotationMessage::StrokeDelete { stroke_id, deleted_by, .. } => {
                debug!("Stroke {} deleted by {}", stroke_id, deleted_by);
                self.store.delete(&stroke_id);
            }

            AnnotationMessage::ClearAll { cleared_by, .. } => {
                info!("{} cleared all annotations", cleared_by);
                self.store.clear_all();
            }

            AnnotationMessage::StateRequest { requester_id } => {
                self.answer_state_request(&requester_id);
            }

            AnnotationMessage::StateSnapshot { requester_id, strokes, .. } => {
                self.apply_state_snapshot(&requester_id, strokes);
            }
        }
    }

    fn answer_state_request(&mut self, requester_id: &str) {
        if requester_id == self.local_id {
            return;
        }
        // Only participants holding completed strokes answer; joiners with
        // nothing to offer stay quiet and the requester's wait window
        // handles the empty-room case.
        if self.store.is_empty() {
            return;
        }

        let strokes: Vec<Stroke> = self.store.strokes().into_iter().cloned().collect();
        debug!(
            "Answering state request from {} with {} strokes",
            requester_id,
            strokes.len()
        );
        self.outbound.push(AnnotationMessage::StateSnapshot {
            requester_id: requester_id.to_string(),
            strokes,
            timestamp: current_timestamp_ms(),
        });
    }

    fn apply_state_snapshot(&mut self, requester_id: &str, strokes: Vec<Stroke>) {
        // Snapshots are addressed by field, not by transport routing.
        if requester_id != self.local_id {
            return;
        }

        match self.sync {
            SyncPhase::Waiting { .. } => {
                info!("Applying state snapshot with {} strokes", strokes.len());
                self.store.replace_all(strokes);
                self.sync = SyncPhase::Synced;
            }
            SyncPhase::Idle | SyncPhase::Synced => {
                // First writer wins; later snapshots for the same request
                // are full-state duplicates and safely ignored.
                debug!("Ignoring redundant state snapshot");
            }
        }
    }

    /// A participant left the room: drop their in-progress strokes
    pub fn participant_left(&mut self, participant_id: &str) {
        self.store.remove_participant(participant_id);
    }

    /// Take all queued outbound messages
    ///
    /// Sending is fire-and-forget; the runtime encodes these and hands
    /// them to the transport without waiting for acknowledgement.
    pub fn drain_outbound(&mut self) -> Vec<AnnotationMessage> {
        std::mem::take(&mut self.outbound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A session with authoring enabled and no emission throttling
    fn drawing_session(id: &str) -> AnnotationSession {
        let mut session = AnnotationSession::new(id);
        session.set_share_active(true);
        session.set_update_interval(Duration::ZERO);
        session.set_snapshot_wait(Duration::ZERO);
        session
    }

    #[test]
    fn test_three_point_stroke_emission() {
        let mut session = drawing_session("alice");

        session.pointer_down(Point::new(0.1, 0.1)).unwrap();
        session.pointer_move(Point::new(0.5, 0.5)).unwrap();
        session.pointer_move(Point::new(0.9, 0.9)).unwrap();
        session.pointer_up();

        let messages = session.drain_outbound();
        let updates: Vec<_> = messages
            .iter()
            .filter(|m| matches!(m, AnnotationMessage::StrokeUpdate { .. }))
            .collect();
        let completes: Vec<_> = messages
            .iter()
            .filter(|m| matches!(m, AnnotationMessage::StrokeComplete { .. }))
            .collect();

        // One update per point batch, exactly one complete.
        assert_eq!(updates.len(), 3);
        assert_eq!(completes.len(), 1);
        let AnnotationMessage::StrokeComplete { points, .. } = completes[0] else {
            unreachable!();
        };
        assert_eq!(points.len(), 3);
        assert_eq!(points[2].x, 0.9);
    }

    #[test]
    fn test_throttling_batches_points() {
        let mut session = drawing_session("alice");
        // A long interval: nothing flushes between down and up.
        session.set_update_interval(Duration::from_secs(60));

        session.pointer_down(Point::new(0.1, 0.1)).unwrap();
        session.pointer_move(Point::new(0.2, 0.2)).unwrap();
        session.pointer_move(Point::new(0.3, 0.3)).unwrap();
        session.pointer_up();

        let messages = session.drain_outbound();
        // Only the seed update and the final complete.
        assert_eq!(messages.len(), 2);
        assert!(matches!(messages[0], AnnotationMessage::StrokeUpdate { ref points, .. } if points.len() == 1));
        assert!(matches!(messages[1], AnnotationMessage::StrokeComplete { ref points, .. } if points.len() == 3));
    }

    #[test]
    fn test_authoring_requires_permission_and_share() {
        let mut session = AnnotationSession::new("alice");

        // No share active.
        assert!(matches!(
            session.pointer_down(Point::new(0.1, 0.1)),
            Err(ProtocolError::AnnotationNotAllowed)
        ));

        // Share active but permission revoked.
        session.set_share_active(true);
        session.set_annotations_enabled(false);
        assert!(matches!(
            session.pointer_down(Point::new(0.1, 0.1)),
            Err(ProtocolError::AnnotationNotAllowed)
        ));

        assert!(session.drain_outbound().is_empty());
        assert!(session.store().active_local().is_none());
    }

    #[test]
    fn test_tool_switch_abandons_stroke() {
        let mut session = drawing_session("alice");

        session.pointer_down(Point::new(0.1, 0.1)).unwrap();
        session.pointer_move(Point::new(0.2, 0.2)).unwrap();
        let emitted_before = session.drain_outbound().len();

        session.set_tool(Tool::Select);
        session.pointer_up();

        // Nothing further was sent for the abandoned stroke: no complete.
        assert!(session.drain_outbound().is_empty());
        assert!(session.store().active_local().is_none());
        assert!(session.store().is_empty());
        assert!(emitted_before > 0);
    }

    #[test]
    fn test_permission_revocation_abandons_stroke() {
        let mut session = drawing_session("alice");

        session.pointer_down(Point::new(0.1, 0.1)).unwrap();
        session.set_annotations_enabled(false);
        session.pointer_up();

        let messages = session.drain_outbound();
        assert!(!messages
            .iter()
            .any(|m| matches!(m, AnnotationMessage::StrokeComplete { .. })));
    }

    #[test]
    fn test_dot_stroke() {
        let mut session = drawing_session("alice");
        session.pointer_down(Point::new(0.5, 0.5)).unwrap();
        session.pointer_up();

        assert_eq!(session.store().len(), 1);
        let messages = session.drain_outbound();
        assert!(matches!(
            messages.last(),
            Some(AnnotationMessage::StrokeComplete { points, .. }) if points.len() == 1
        ));
    }

    #[test]
    fn test_eraser_deletes_topmost_and_emits() {
        let mut session = drawing_session("alice");

        session.pointer_down(Point::new(0.4, 0.5)).unwrap();
        session.pointer_move(Point::new(0.6, 0.5)).unwrap();
        session.pointer_up();
        session.drain_outbound();

        session.set_tool(Tool::Eraser);
        session.pointer_down(Point::new(0.5, 0.5)).unwrap();

        assert!(session.store().is_empty());
        let messages = session.drain_outbound();
        assert_eq!(messages.len(), 1);
        assert!(matches!(messages[0], AnnotationMessage::StrokeDelete { .. }));

        // Erasing empty space emits nothing.
        session.pointer_down(Point::new(0.9, 0.9)).unwrap();
        assert!(session.drain_outbound().is_empty());
    }

    #[test]
    fn test_remote_stroke_application() {
        let mut session = drawing_session("alice");

        let update = AnnotationMessage::StrokeUpdate {
            stroke_id: "r1".to_string(),
            author_id: "bob".to_string(),
            tool: crate::stroke::StrokeTool::Pen,
            color: Color::BLUE,
            points: vec![Point::new(0.1, 0.1)],
            timestamp: 1,
        };
        session.handle_message("bob", &update.encode().unwrap());
        assert_eq!(session.store().remote_active_strokes().count(), 1);

        let complete = AnnotationMessage::StrokeComplete {
            stroke_id: "r1".to_string(),
            author_id: "bob".to_string(),
            tool: crate::stroke::StrokeTool::Pen,
            color: Color::BLUE,
            points: vec![Point::new(0.1, 0.1), Point::new(0.2, 0.2)],
            timestamp: 2,
        };
        session.handle_message("bob", &complete.encode().unwrap());
        assert_eq!(session.store().remote_active_strokes().count(), 0);
        assert_eq!(session.store().get("r1").unwrap().points.len(), 2);
    }

    #[test]
    fn test_malformed_payload_is_dropped() {
        let mut session = drawing_session("alice");
        session.handle_message("bob", b"{{{{");
        session.handle_message("bob", br#"{"type":"nonsense"}"#);
        assert!(session.store().is_empty());
    }

    #[test]
    fn test_own_sender_id_is_ignored() {
        let mut session = drawing_session("alice");
        let message = AnnotationMessage::ClearAll {
            cleared_by: "alice".to_string(),
            timestamp: 1,
        };
        // Pretend the transport looped our own message back; the wipe was
        // already applied locally, applying it again must not be attempted.
        session.pointer_down(Point::new(0.5, 0.5)).unwrap();
        session.pointer_up();
        session.handle_message("alice", &message.encode().unwrap());
        assert_eq!(session.store().len(), 1);
    }

    #[test]
    fn test_state_request_answered_only_with_content() {
        let mut session = drawing_session("alice");

        let request = AnnotationMessage::StateRequest {
            requester_id: "carol".to_string(),
        };

        // Empty store: stay quiet.
        session.handle_message("carol", &request.encode().unwrap());
        assert!(session.drain_outbound().is_empty());

        // With strokes: answer addressed to the requester.
        session.pointer_down(Point::new(0.1, 0.1)).unwrap();
        session.pointer_up();
        session.drain_outbound();

        session.handle_message("carol", &request.encode().unwrap());
        let messages = session.drain_outbound();
        assert!(matches!(
            &messages[..],
            [AnnotationMessage::StateSnapshot { requester_id, strokes, .. }]
                if requester_id == "carol" && strokes.len() == 1
        ));
    }

    #[test]
    fn test_first_snapshot_wins() {
        let mut session = drawing_session("bob");
        session.request_state();
        session.drain_outbound();

        let make_snapshot = |id: &str| AnnotationMessage::StateSnapshot {
            requester_id: "bob".to_string(),
            strokes: vec![{
                let mut s = Stroke::new(
                    id,
                    "alice",
                    crate::stroke::StrokeTool::Pen,
                    Color::RED,
                    Point::new(0.1, 0.1),
                    1,
                );
                s.mark_complete();
                s
            }],
            timestamp: 1,
        };

        session.handle_message("alice", &make_snapshot("from-alice").encode().unwrap());
        assert!(session.sync_complete());
        assert!(session.store().get("from-alice").is_some());

        // A second, later-arriving snapshot is ignored.
        session.handle_message("carol", &make_snapshot("from-carol").encode().unwrap());
        assert!(session.store().get("from-carol").is_none());
        assert!(session.store().get("from-alice").is_some());
    }

    #[test]
    fn test_snapshot_for_other_requester_is_ignored() {
        let mut session = drawing_session("bob");
        session.request_state();

        let snapshot = AnnotationMessage::StateSnapshot {
            requester_id: "someone-else".to_string(),
            strokes: vec![],
            timestamp: 1,
        };
        session.handle_message("alice", &snapshot.encode().unwrap());
        assert!(!session.sync_complete());
    }

    #[test]
    fn test_snapshot_wait_window_expires() {
        let mut session = drawing_session("bob");
        session.request_state();
        assert!(!session.sync_complete());

        // Wait window is zero in tests; the next poll gives up.
        session.poll();
        assert!(session.sync_complete());
        assert!(session.store().is_empty());
    }

    #[test]
    fn test_participant_left_drops_their_active_stroke() {
        let mut session = drawing_session("alice");

        let update = AnnotationMessage::StrokeUpdate {
            stroke_id: "r1".to_string(),
            author_id: "bob".to_string(),
            tool: crate::stroke::StrokeTool::Pen,
            color: Color::BLUE,
            points: vec![Point::new(0.1, 0.1)],
            timestamp: 1,
        };
        session.handle_message("bob", &update.encode().unwrap());
        assert_eq!(session.store().remote_active_strokes().count(), 1);

        session.participant_left("bob");
        assert_eq!(session.store().remote_active_strokes().count(), 0);
    }

    #[test]
    fn test_clear_all_emits() {
        let mut session = drawing_session("alice");
        session.pointer_down(Point::new(0.1, 0.1)).unwrap();
        session.pointer_up();
        session.drain_outbound();

        session.clear_all();
        assert!(session.store().is_empty());
        let messages = session.drain_outbound();
        assert!(matches!(
            &messages[..],
            [AnnotationMessage::ClearAll { cleared_by, .. }] if cleared_by == "alice"
        ));
    }
}
