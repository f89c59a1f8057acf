//! Meeting client runtime
//!
//! [`MeetingClient`] wires the protocol-crate authorities together on one
//! side of a room connection: it owns the annotation session, the
//! screen-share arbitrator, the participant roster, and the cursor tracker,
//! and turns room events into state mutations.
//!
//! The client performs no I/O itself. Outbound traffic accumulates as
//! `(topic, payload)` pairs for the surrounding transport to publish, and
//! window-level side effects of share transitions (minimizing the local
//! window, showing the always-on-top share controls) are emitted as
//! [`UiEffect`] values for the shell to perform.

use crate::capture::{CaptureOutcome, ScreenCapture};
use telestrate_protocol::{
    normalize, AnnotationSession, CursorMessage, CursorStyle, CursorTracker, Participant,
    ParticipantRole, ParticipantRoster, ProtocolError, Result, RoomEvent,
    ScreenShareArbitrator, ScreenShareState, ShareEvent, Tool, ANNOTATION_TOPIC, CURSOR_TOPIC,
};
use tracing::{debug, error, info, warn};

/// Window-level side effect requested by a share transition
///
/// The shell performs these; the client only declares them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEffect {
    /// Minimize the main window when the local share starts
    MinimizeMainWindow,
    /// Restore the main window when the local share ends
    RestoreMainWindow,
    /// Show the always-on-top share control bar
    ShowShareControls,
    /// Hide the share control bar
    HideShareControls,
}

/// A user-facing notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub text: String,
}

/// One participant's view of the meeting
pub struct MeetingClient {
    local_id: String,
    session: AnnotationSession,
    arbitrator: ScreenShareArbitrator,
    roster: ParticipantRoster,
    cursors: CursorTracker,
    capture: Box<dyn ScreenCapture>,

    /// Encoded outbound payloads awaiting publication
    outbound: Vec<(String, Vec<u8>)>,

    effects: Vec<UiEffect>,
    notifications: Vec<Notification>,
}

impl MeetingClient {
    pub fn new(
        local_id: impl Into<String>,
        local_name: impl Into<String>,
        role: ParticipantRole,
        capture: Box<dyn ScreenCapture>,
    ) -> Self {
        let local_id = local_id.into();
        let local_name = local_name.into();

        let mut roster = ParticipantRoster::new();
        roster.add(Participant::new(
            local_id.clone(),
            local_name,
            role,
            true,
        ));

        Self {
            session: AnnotationSession::new(local_id.clone()),
            arbitrator: ScreenShareArbitrator::new(local_id.clone()),
            roster,
            cursors: CursorTracker::new(),
            capture,
            outbound: Vec::new(),
            effects: Vec::new(),
            notifications: Vec::new(),
            local_id,
        }
    }

    // ── Accessors ──────────────────────────────────────────────────────

    pub fn local_id(&self) -> &str {
        &self.local_id
    }

    pub fn session(&self) -> &AnnotationSession {
        &self.session
    }

    /// Session for timing configuration
    pub fn session_mut(&mut self) -> &mut AnnotationSession {
        &mut self.session
    }

    pub fn share_state(&self) -> &ScreenShareState {
        self.arbitrator.state()
    }

    pub fn roster(&self) -> &ParticipantRoster {
        &self.roster
    }

    pub fn cursors(&self) -> &CursorTracker {
        &self.cursors
    }

    // ── Room events ────────────────────────────────────────────────────

    /// Apply an event delivered by the room transport
    pub fn handle_room_event(&mut self, event: RoomEvent) {
        match event {
            RoomEvent::Connected { room_name } => {
                info!("Connected to room {}", room_name);
                // Catch up on annotations drawn before we joined.
                self.session.request_state();
            }

            RoomEvent::Disconnected => {
                info!("Disconnected from room");
                self.capture.stop_capture();
                self.arbitrator.stop_local();
                self.sync_share_state();
            }

            RoomEvent::ParticipantJoined { participant } => {
                self.roster.add(participant);
            }

            RoomEvent::ParticipantLeft { participant_id } => {
                if let Some(event) =
                    self.arbitrator.handle_participant_left(&participant_id, &self.roster)
                {
                    self.announce(event);
                    self.sync_share_state();
                }
                self.session.participant_left(&participant_id);
                self.cursors.remove(&participant_id);
                self.roster.remove(&participant_id);
            }

            RoomEvent::DataReceived { sender_id, topic, payload } => {
                self.handle_data(&sender_id, &topic, &payload);
            }

            RoomEvent::TrackSubscribed { source, participant } => {
                if let Some(event) =
                    self.arbitrator.handle_track_subscribed(source, &participant, &self.roster)
                {
                    self.announce(event);
                }
                self.sync_share_state();
            }

            RoomEvent::TrackUnpublished { source, participant } => {
                if let Some(event) =
                    self.arbitrator.handle_track_unpublished(source, &participant, &self.roster)
                {
                    self.announce(event);
                }
                self.sync_share_state();
            }
        }
    }

    fn handle_data(&mut self, sender_id: &str, topic: &str, payload: &[u8]) {
        match topic {
            ANNOTATION_TOPIC => self.session.handle_message(sender_id, payload),
            CURSOR_TOPIC => match CursorMessage::decode(payload) {
                Ok(CursorMessage::Move { x, y, visible }) => {
                    let color = self.roster.color_for(sender_id);
                    self.cursors.update_position(sender_id, x, y, visible, color);
                }
                Ok(CursorMessage::Style { style }) => {
                    self.cursors.set_style(sender_id, style);
                }
                Err(e) => {
                    warn!("Dropping malformed cursor payload from {}: {}", sender_id, e);
                }
            },
            other => debug!("Ignoring payload on unknown topic {}", other),
        }
    }

    fn announce(&mut self, event: ShareEvent) {
        let text = match &event {
            ShareEvent::RemoteShareStarted { display_name, .. } => {
                format!("{display_name} started sharing their screen")
            }
            ShareEvent::RemoteShareStopped { display_name, .. } => {
                format!("{display_name} stopped sharing their screen")
            }
        };
        self.notifications.push(Notification { text });
    }

    /// Keep the session's authoring gate in step with the share state
    fn sync_share_state(&mut self) {
        self.session.set_share_active(self.arbitrator.state().is_sharing);
    }

    // ── Screen sharing ─────────────────────────────────────────────────

    /// Start sharing the local screen
    ///
    /// The conflict check runs before the capture picker so the user is
    /// told who is sharing without going through source selection. User
    /// cancellation of the picker is an expected outcome, not an error.
    pub fn start_share(&mut self, source_id: &str) -> Result<()> {
        if let Err(e) = self.arbitrator.check_can_start() {
            self.notifications.push(Notification { text: e.to_string() });
            return Err(e);
        }

        match self.capture.start_capture(source_id) {
            CaptureOutcome::Cancelled => {
                info!("Capture source selection cancelled");
                Ok(())
            }
            CaptureOutcome::Failed(reason) => {
                let err = ProtocolError::CaptureFailed(reason);
                self.notifications.push(Notification { text: err.to_string() });
                Err(err)
            }
            CaptureOutcome::Started(handle) => {
                self.arbitrator.start_local(handle.source_id)?;
                self.effects.push(UiEffect::MinimizeMainWindow);
                self.effects.push(UiEffect::ShowShareControls);
                self.sync_share_state();
                Ok(())
            }
        }
    }

    /// Stop the local share
    pub fn stop_share(&mut self) {
        self.capture.stop_capture();
        self.arbitrator.stop_local();
        self.effects.push(UiEffect::RestoreMainWindow);
        self.effects.push(UiEffect::HideShareControls);
        self.sync_share_state();
    }

    // ── Pointer input ──────────────────────────────────────────────────

    /// Pointer pressed at a pixel position within the annotation surface
    pub fn pointer_down(
        &mut self,
        pixel_x: f32,
        pixel_y: f32,
        width: f32,
        height: f32,
        pressure: Option<f32>,
    ) -> Result<()> {
        let point = normalize(pixel_x, pixel_y, width, height, pressure);
        self.notify_on_err(|client| client.session.pointer_down(point))
    }

    /// Pointer moved at a pixel position within the annotation surface
    pub fn pointer_move(
        &mut self,
        pixel_x: f32,
        pixel_y: f32,
        width: f32,
        height: f32,
        pressure: Option<f32>,
    ) -> Result<()> {
        let point = normalize(pixel_x, pixel_y, width, height, pressure);
        self.session.pointer_move(point)
    }

    /// Pointer released
    pub fn pointer_up(&mut self) {
        self.session.pointer_up();
    }

    /// Select an annotation tool and share the matching cursor style
    pub fn set_tool(&mut self, tool: Tool) {
        self.session.set_tool(tool);

        let style = match tool {
            Tool::Pen => CursorStyle::Pen,
            Tool::Highlighter => CursorStyle::Highlighter,
            Tool::Eraser => CursorStyle::Eraser,
            Tool::Select => CursorStyle::Default,
        };
        self.queue_cursor(CursorMessage::Style { style });
    }

    /// Grant or revoke the local user's annotation rights
    pub fn set_annotations_enabled(&mut self, enabled: bool) {
        self.session.set_annotations_enabled(enabled);
    }

    /// Broadcast the local cursor position over the shared screen
    pub fn cursor_moved(&mut self, pixel_x: f32, pixel_y: f32, width: f32, height: f32) {
        let point = normalize(pixel_x, pixel_y, width, height, None);
        self.queue_cursor(CursorMessage::Move {
            x: point.x,
            y: point.y,
            visible: true,
        });
    }

    /// Hide the local cursor for other participants
    pub fn cursor_hidden(&mut self) {
        self.queue_cursor(CursorMessage::Move {
            x: 0.0,
            y: 0.0,
            visible: false,
        });
    }

    /// Wipe all annotations; host only
    pub fn clear_annotations(&mut self) -> Result<()> {
        if !self.roster.is_host(&self.local_id) {
            let err = ProtocolError::NotHost;
            self.notifications.push(Notification { text: err.to_string() });
            return Err(err);
        }
        self.session.clear_all();
        Ok(())
    }

    // ── Outbound plumbing ──────────────────────────────────────────────

    /// Periodic housekeeping; call once per frame
    pub fn poll(&mut self) {
        self.session.poll();
        self.pump_session();
    }

    /// Take all queued `(topic, payload)` pairs for publication
    pub fn drain_outbound(&mut self) -> Vec<(String, Vec<u8>)> {
        self.pump_session();
        std::mem::take(&mut self.outbound)
    }

    /// Take all pending window effects
    pub fn drain_effects(&mut self) -> Vec<UiEffect> {
        std::mem::take(&mut self.effects)
    }

    /// Take all pending notifications
    pub fn drain_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notifications)
    }

    fn pump_session(&mut self) {
        for message in self.session.drain_outbound() {
            match message.encode() {
                Ok(bytes) => self.outbound.push((ANNOTATION_TOPIC.to_string(), bytes)),
                Err(e) => error!("Failed to encode {} message: {}", message.kind(), e),
            }
        }
    }

    fn queue_cursor(&mut self, message: CursorMessage) {
        match message.encode() {
            Ok(bytes) => self.outbound.push((CURSOR_TOPIC.to_string(), bytes)),
            Err(e) => error!("Failed to encode cursor message: {}", e),
        }
    }

    fn notify_on_err(&mut self, op: impl FnOnce(&mut Self) -> Result<()>) -> Result<()> {
        let result = op(self);
        if let Err(e) = &result {
            self.notifications.push(Notification { text: e.to_string() });
        }
        result
    }
}
