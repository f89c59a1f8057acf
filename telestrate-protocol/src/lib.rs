//! Telestrate Protocol Implementation
//!
//! This library implements the collaborative annotation layer of a meeting
//! client: one participant shares their screen, and any permitted
//! participant draws freehand annotations on top of the shared video,
//! visible to everyone with low latency.
//!
//! Two pieces carry the weight. The annotation sync protocol represents
//! strokes in resolution-independent coordinates and streams their
//! lifecycle as small ordered messages over the room's reliable data
//! channel, including a state exchange for participants who join
//! mid-session. The screen-share arbitrator enforces a single active
//! sharer while surviving races between local user actions and remote
//! track events.
//!
//! The room transport itself is an external collaborator; see
//! [`transport`] for the boundary types it is consumed through.

pub mod capture;
pub mod cursor;
pub mod geometry;
pub mod hittest;
pub mod message;
pub mod participant;
pub mod session;
pub mod share;
pub mod store;
pub mod stroke;
pub mod transport;

mod error;
pub use capture::{CaptureHandle, CaptureOutcome, ScreenCapture};
pub use cursor::{CursorMessage, CursorStyle, CursorTracker, RemoteCursor, CURSOR_TOPIC};
pub use error::{ProtocolError, Result};
pub use geometry::{denormalize, denormalize_points, normalize, normalize_points, PixelPoint, Point};
pub use hittest::{bounds_of, find_topmost_stroke_at, is_point_on_stroke, Aabb, DEFAULT_HIT_THRESHOLD};
pub use message::{current_timestamp_ms, AnnotationMessage, ANNOTATION_TOPIC};
pub use participant::{Participant, ParticipantRole, ParticipantRoster};
pub use session::{AnnotationSession, SNAPSHOT_WAIT, UPDATE_INTERVAL};
pub use share::{ScreenShareArbitrator, ScreenShareState, ShareEvent, SourceKind};
pub use store::StrokeStore;
pub use stroke::{Color, Stroke, StrokeTool, Tool};
pub use transport::{ParticipantInfo, ParticipantMetadata, RoomEvent, SharePublisher, TrackSource};

/// Protocol version we implement
pub const PROTOCOL_VERSION: u32 = 1;
