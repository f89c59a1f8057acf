//! Screen-share arbitration state machine
//!
//! Enforces "at most one active sharer" from the local client's point of
//! view. Two sources drive transitions: local user commands (start/stop)
//! and remote track lifecycle events from the transport.
//!
//! Track events can arrive interleaved or slightly out of order under load,
//! so every transition is applied independently and idempotently: an
//! unsubscribe while already idle, or a subscribe from the sharer we already
//! track, is a safe no-op. The final state is determined by the last event
//! observed, not by counting.

use crate::error::{ProtocolError, Result};
use crate::participant::ParticipantRoster;
use crate::share::{ScreenShareState, ShareEvent, SourceKind};
use crate::transport::{ParticipantInfo, SharePublisher, TrackSource};
use tracing::{debug, info, warn};

/// Single authority for [`ScreenShareState`] on one client
#[derive(Debug)]
pub struct ScreenShareArbitrator {
    /// Identity of the local participant, used for self-track
    /// disambiguation
    local_id: String,

    state: ScreenShareState,
}

impl ScreenShareArbitrator {
    pub fn new(local_id: impl Into<String>) -> Self {
        Self {
            local_id: local_id.into(),
            state: ScreenShareState::default(),
        }
    }

    /// Current share state
    pub fn state(&self) -> &ScreenShareState {
        &self.state
    }

    /// Check whether a local share could start right now
    ///
    /// Run before opening the capture picker, so the user is told about a
    /// conflict without going through source selection first.
    pub fn check_can_start(&self) -> Result<()> {
        if !self.state.is_sharing {
            return Ok(());
        }
        if self.state.is_local_sharing {
            return Err(ProtocolError::AlreadySharing);
        }
        let sharer = self
            .state
            .sharer_name
            .clone()
            .or_else(|| self.state.sharer_id.clone())
            .unwrap_or_else(|| "another participant".to_string());
        Err(ProtocolError::ShareConflict { sharer })
    }

    /// Begin sharing the local screen
    ///
    /// Permitted only while nobody is sharing; a conflict names the current
    /// sharer.
    pub fn start_local(&mut self, source_id: impl Into<String>) -> Result<()> {
        self.check_can_start()?;

        let source_id = source_id.into();
        info!("Starting local screen share of source {}", source_id);

        self.state.is_sharing = true;
        self.state.is_local_sharing = true;
        self.state.sharer_id = None;
        self.state.sharer_name = None;
        self.state.source_kind = Some(SourceKind::Screen);
        self.state.source_id = Some(source_id);
        Ok(())
    }

    /// Stop the local share
    ///
    /// Clears all local and sharer fields unconditionally; stopping while
    /// not sharing is harmless.
    pub fn stop_local(&mut self) {
        if self.state.is_local_sharing {
            info!("Stopping local screen share");
        }
        self.state = ScreenShareState::default();
    }

    /// Apply a subscribed track event from the transport
    ///
    /// Only screen tracks matter here. The publisher is resolved through its
    /// metadata: the local user's own synthetic screen-share identity echoed
    /// back by the transport must not be recorded as a remote sharer and
    /// must not produce a notification event.
    pub fn handle_track_subscribed(
        &mut self,
        source: TrackSource,
        publisher: &ParticipantInfo,
        roster: &ParticipantRoster,
    ) -> Option<ShareEvent> {
        if source != TrackSource::Screen {
            return None;
        }

        match SharePublisher::resolve(&self.local_id, publisher) {
            SharePublisher::LocalEcho => {
                debug!("Observed own screen-share track; ignoring");
                None
            }
            SharePublisher::Remote { participant_id } => {
                if self.state.is_sharing
                    && self.state.sharer_id.as_deref() == Some(participant_id.as_str())
                {
                    debug!("Duplicate subscribe for sharer {}", participant_id);
                    return None;
                }

                if self.state.is_local_sharing {
                    // The room should have prevented this; reflect what the
                    // transport reports anyway.
                    warn!(
                        "Remote share from {} while sharing locally",
                        participant_id
                    );
                }

                let display_name = roster.display_name(&participant_id);
                info!("{} started sharing their screen", display_name);

                self.state.is_sharing = true;
                self.state.sharer_id = Some(participant_id.clone());
                self.state.sharer_name = Some(display_name.clone());

                Some(ShareEvent::RemoteShareStarted {
                    participant_id,
                    display_name,
                })
            }
        }
    }

    /// Apply an unpublished/unsubscribed track event from the transport
    ///
    /// The mirror of [`Self::handle_track_subscribed`]: a genuine remote
    /// stop clears the sharer, a self-originated unpublish is a silent
    /// no-op (local cleanup runs through [`Self::stop_local`] instead), and
    /// an unpublish for a participant we are not tracking as the sharer is
    /// treated as stale.
    pub fn handle_track_unpublished(
        &mut self,
        source: TrackSource,
        publisher: &ParticipantInfo,
        roster: &ParticipantRoster,
    ) -> Option<ShareEvent> {
        if source != TrackSource::Screen {
            return None;
        }

        match SharePublisher::resolve(&self.local_id, publisher) {
            SharePublisher::LocalEcho => {
                debug!("Observed own screen-share unpublish; ignoring");
                None
            }
            SharePublisher::Remote { participant_id } => {
                if self.state.sharer_id.as_deref() != Some(participant_id.as_str()) {
                    debug!(
                        "Stale unpublish from {} (current sharer: {:?})",
                        participant_id, self.state.sharer_id
                    );
                    return None;
                }

                let display_name = roster.display_name(&participant_id);
                info!("{} stopped sharing their screen", display_name);

                self.state = ScreenShareState::default();

                Some(ShareEvent::RemoteShareStopped {
                    participant_id,
                    display_name,
                })
            }
        }
    }

    /// Drop the sharer if the given participant left the room mid-share
    pub fn handle_participant_left(
        &mut self,
        participant_id: &str,
        roster: &ParticipantRoster,
    ) -> Option<ShareEvent> {
        if self.state.sharer_id.as_deref() != Some(participant_id) {
            return None;
        }

        let display_name = roster.display_name(participant_id);
        info!("Sharer {} left the room", display_name);
        self.state = ScreenShareState::default();

        Some(ShareEvent::RemoteShareStopped {
            participant_id: participant_id.to_string(),
            display_name,
        })
    }
}
