//! Annotation wire protocol
//!
//! Stroke lifecycle events are exchanged as small JSON messages on the
//! room's reliable ordered data channel, scoped to the
//! [`ANNOTATION_TOPIC`] topic. Every message carries enough information to
//! be applied independently and idempotently; there are no per-message
//! acknowledgements or retries. Correctness relies on the transport's
//! guarantee that messages from one sender arrive in the order sent.
//!
//! ## Message kinds
//!
//! | kind              | purpose                                        |
//! |-------------------|------------------------------------------------|
//! | `stroke_update`   | incremental point batch while drawing          |
//! | `stroke_complete` | authoritative final stroke                     |
//! | `stroke_delete`   | eraser action                                  |
//! | `clear_all`       | host wipe                                      |
//! | `state_request`   | late joiner asks for current state             |
//! | `state_snapshot`  | response to a `state_request`                  |
//!
//! Decoding is total: malformed bytes, an unknown kind, or a missing
//! required field produce an error value, never a panic, since peers are
//! not fully trusted to send well-formed data. The tool field of stroke
//! messages is typed as [`StrokeTool`], so `eraser` and `select` are
//! rejected at the deserialization layer.

use crate::error::{ProtocolError, Result};
use crate::geometry::Point;
use crate::stroke::{Color, Stroke, StrokeTool};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// Data-channel topic carrying annotation traffic
pub const ANNOTATION_TOPIC: &str = "annotations";

/// A single annotation protocol message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AnnotationMessage {
    /// Incremental point batch for an in-progress stroke
    StrokeUpdate {
        stroke_id: String,
        author_id: String,
        tool: StrokeTool,
        color: Color,
        points: Vec<Point>,
        timestamp: u64,
    },

    /// Authoritative completed stroke with its full point list
    StrokeComplete {
        stroke_id: String,
        author_id: String,
        tool: StrokeTool,
        color: Color,
        points: Vec<Point>,
        timestamp: u64,
    },

    /// A stroke was erased
    StrokeDelete {
        stroke_id: String,
        deleted_by: String,
        timestamp: u64,
    },

    /// All annotations were wiped by the host
    ClearAll {
        cleared_by: String,
        timestamp: u64,
    },

    /// A late joiner asks for the current stroke set
    StateRequest { requester_id: String },

    /// Full stroke set, addressed to one requester by field
    StateSnapshot {
        requester_id: String,
        strokes: Vec<Stroke>,
        timestamp: u64,
    },
}

impl AnnotationMessage {
    /// Encode to UTF-8 JSON bytes
    pub fn encode(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }

    /// Decode and validate a message from raw bytes
    ///
    /// Returns an error for garbage bytes, unknown kinds, missing fields,
    /// or semantic violations; the payload must not be trusted before this
    /// succeeds.
    pub fn decode(bytes: &[u8]) -> Result<AnnotationMessage> {
        let message: AnnotationMessage = serde_json::from_slice(bytes)?;
        message.validate()?;
        Ok(message)
    }

    /// Kind name for logging
    pub fn kind(&self) -> &'static str {
        match self {
            AnnotationMessage::StrokeUpdate { .. } => "stroke_update",
            AnnotationMessage::StrokeComplete { .. } => "stroke_complete",
            AnnotationMessage::StrokeDelete { .. } => "stroke_delete",
            AnnotationMessage::ClearAll { .. } => "clear_all",
            AnnotationMessage::StateRequest { .. } => "state_request",
            AnnotationMessage::StateSnapshot { .. } => "state_snapshot",
        }
    }

    fn validate(&self) -> Result<()> {
        match self {
            // A completed stroke carries its full path; strokes are never
            // empty.
            AnnotationMessage::StrokeComplete { points, .. } if points.is_empty() => Err(
                ProtocolError::InvalidMessage("stroke_complete with no points".to_string()),
            ),
            AnnotationMessage::StateSnapshot { strokes, .. }
                if strokes.iter().any(|s| s.points.is_empty()) =>
            {
                Err(ProtocolError::InvalidMessage(
                    "state_snapshot containing an empty stroke".to_string(),
                ))
            }
            _ => Ok(()),
        }
    }
}

/// Current UNIX timestamp in milliseconds
pub fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}
