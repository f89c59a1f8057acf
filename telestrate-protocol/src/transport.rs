//! Transport boundary types
//!
//! The room service (the real-time transport) is an external collaborator
//! consumed through a narrow interface: a reliable ordered byte channel
//! scoped to a topic string, plus track lifecycle callbacks. This module
//! defines the event and identity types that cross that boundary.
//!
//! ## Synthetic screen-share identities
//!
//! The transport publishes screen-share tracks from a secondary participant
//! identity, distinct from the human participant's main identity. The
//! synthetic identity's metadata declares its parent:
//!
//! ```json
//! {"parentId": "user-42", "isScreenShare": true}
//! ```
//!
//! [`SharePublisher::resolve`] is the explicit mapping from a track
//! publisher back to the human participant it stands for. This contract is
//! a convention imposed by the transport layer, not a structural guarantee;
//! it is kept in one testable function so it can be revalidated against the
//! actual transport's track-naming behavior.

use crate::participant::Participant;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Kind of media track a publication carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrackSource {
    Screen,
    Camera,
    Microphone,
}

/// Identity and metadata of a track publisher as reported by the transport
#[derive(Debug, Clone, PartialEq)]
pub struct ParticipantInfo {
    /// Transport identity of the publisher
    pub identity: String,

    /// Display name of the publisher (may be empty)
    pub name: String,

    /// Raw metadata JSON attached to the publisher, if any
    pub metadata: Option<String>,
}

impl ParticipantInfo {
    pub fn new(identity: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            identity: identity.into(),
            name: name.into(),
            metadata: None,
        }
    }

    pub fn with_metadata(mut self, metadata: impl Into<String>) -> Self {
        self.metadata = Some(metadata.into());
        self
    }

    /// Parse the publisher metadata, if present and well-formed
    pub fn parsed_metadata(&self) -> Option<ParticipantMetadata> {
        let raw = self.metadata.as_deref()?;
        match serde_json::from_str(raw) {
            Ok(metadata) => Some(metadata),
            Err(e) => {
                warn!("Unparseable participant metadata for {}: {}", self.identity, e);
                None
            }
        }
    }
}

/// Metadata attached to a synthetic screen-share identity
///
/// Field names follow the transport's camelCase convention.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantMetadata {
    /// Identity of the human participant this publisher belongs to
    #[serde(default)]
    pub parent_id: Option<String>,

    /// Whether this identity exists solely to publish a screen-share track
    #[serde(default)]
    pub is_screen_share: bool,
}

/// Which human participant a screen-share track publisher stands for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SharePublisher {
    /// The local user's own synthetic identity echoed back by the transport
    LocalEcho,

    /// A genuinely remote sharer
    Remote {
        /// Resolved identity of the human participant
        participant_id: String,
    },
}

impl SharePublisher {
    /// Resolve a track publisher to the human participant behind it
    ///
    /// A synthetic screen-share identity is mapped to its declared parent;
    /// any other publisher stands for itself. If the resolved participant is
    /// the local user, the event is self-observation, not a remote share.
    pub fn resolve(local_id: &str, publisher: &ParticipantInfo) -> SharePublisher {
        let resolved = publisher
            .parsed_metadata()
            .filter(|m| m.is_screen_share)
            .and_then(|m| m.parent_id)
            .unwrap_or_else(|| publisher.identity.clone());

        if resolved == local_id {
            SharePublisher::LocalEcho
        } else {
            SharePublisher::Remote {
                participant_id: resolved,
            }
        }
    }
}

/// Events delivered by the room transport
///
/// The transport guarantees per-sender ordering for data payloads; no
/// cross-sender ordering is assumed.
#[derive(Debug, Clone)]
pub enum RoomEvent {
    /// Connected to the room
    Connected {
        /// Room name
        room_name: String,
    },

    /// Disconnected from the room
    Disconnected,

    /// A participant joined the room
    ParticipantJoined { participant: Participant },

    /// A participant left the room
    ParticipantLeft {
        /// Identity of the participant who left
        participant_id: String,
    },

    /// A data payload arrived on a topic
    DataReceived {
        /// Identity of the sending participant
        sender_id: String,
        /// Logical topic the payload was published on
        topic: String,
        /// Raw message bytes
        payload: Vec<u8>,
    },

    /// A remote media track became available
    TrackSubscribed {
        source: TrackSource,
        participant: ParticipantInfo,
    },

    /// A remote media track was unpublished
    TrackUnpublished {
        source: TrackSource,
        participant: ParticipantInfo,
    },
}
