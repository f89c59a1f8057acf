//! Screen-share events
//!
//! Events emitted by the arbitrator when a genuinely remote share starts or
//! stops. Self-observed track events (the transport echoing the local user's
//! own screen-share publication) never produce an event.

/// Share lifecycle event for the surrounding application
#[derive(Debug, Clone, PartialEq)]
pub enum ShareEvent {
    /// A remote participant started sharing their screen
    RemoteShareStarted {
        /// Resolved identity of the sharer
        participant_id: String,
        /// Display name for the notification, falling back to the raw
        /// identity when none is set
        display_name: String,
    },

    /// The remote sharer stopped sharing
    RemoteShareStopped {
        /// Resolved identity of the sharer
        participant_id: String,
        /// Display name for the notification
        display_name: String,
    },
}

impl ShareEvent {
    /// Check if this is a share-started event
    pub fn is_started(&self) -> bool {
        matches!(self, ShareEvent::RemoteShareStarted { .. })
    }

    /// Identity of the sharer this event concerns
    pub fn participant_id(&self) -> &str {
        match self {
            ShareEvent::RemoteShareStarted { participant_id, .. } => participant_id,
            ShareEvent::RemoteShareStopped { participant_id, .. } => participant_id,
        }
    }
}
