//! Error handling for the telestrate protocol
//!
//! This module provides the error type shared by all protocol operations.
//! Errors are automatically converted from underlying library errors using
//! `thiserror`.
//!
//! Two failure classes deliberately do **not** produce errors:
//!
//! - Stale or duplicate operations (deleting an unknown stroke, a second
//!   state snapshot, an unpublish for a track we never recorded) are silent
//!   no-ops. Peers deliver at-least-once, so duplicates are normal traffic.
//! - User cancellation of the capture picker is an expected outcome and is
//!   modeled in the capture boundary, not here.
//!
//! ## Basic Usage
//!
//! ```rust
//! use telestrate_protocol::{AnnotationMessage, Result};
//!
//! fn process_payload(data: &[u8]) -> Result<AnnotationMessage> {
//!     // Errors are automatically converted using the From trait
//!     let message = AnnotationMessage::decode(data)?;
//!     Ok(message)
//! }
//! ```
//!
//! Inbound payloads come from peers that are not fully trusted to send
//! well-formed data, so decode failures are logged and dropped at the call
//! site rather than propagated:
//!
//! ```rust,ignore
//! match AnnotationMessage::decode(&payload) {
//!     Ok(message) => session.apply(sender, message),
//!     Err(e) => warn!("Dropping malformed annotation payload: {}", e),
//! }
//! ```

use thiserror::Error;

/// Result type for protocol operations
pub type Result<T> = std::result::Result<T, ProtocolError>;

/// Errors that can occur during protocol operations
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A decoded message had an unknown kind or failed semantic validation
    #[error("Invalid message: {0}")]
    InvalidMessage(String),

    /// Annotation authoring attempted without authoring rights or without an
    /// active screen share
    #[error("Annotations are not currently allowed")]
    AnnotationNotAllowed,

    /// Annotation clear attempted by a participant who is not the host
    #[error("Only the host can clear annotations")]
    NotHost,

    /// Local screen-share start attempted while another participant is
    /// already sharing
    #[error("Cannot start screen share: {sharer} is already sharing")]
    ShareConflict {
        /// Display name of the current sharer
        sharer: String,
    },

    /// Local screen-share start attempted while a local share is already
    /// active
    #[error("Screen share is already active")]
    AlreadySharing,

    /// Screen capture failed for a reason other than user cancellation
    #[error("Screen capture failed: {0}")]
    CaptureFailed(String),
}
