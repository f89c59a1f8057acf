//! Screen-share ownership arbitration
//!
//! The room allows at most one active screen sharer. This module tracks who
//! that is on each client, reconciling local start/stop actions against
//! remote track events, including the transport echoing the local user's own
//! synthetic screen-share identity back as a track event.
//!
//! Room-level enforcement is advisory: the arbitrator reflects whatever the
//! transport reports, and the local policy check rejects a second local
//! share attempt while someone else is sharing.

mod arbitrator;
mod events;

pub use arbitrator::ScreenShareArbitrator;
pub use events::ShareEvent;

use serde::{Deserialize, Serialize};

/// Kind of capture source being shared
///
/// Window capture is not supported; only whole screens are shared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    Screen,
}

/// Published screen-share state
///
/// Invariant: `is_local_sharing` implies `is_sharing`. At most one non-local
/// sharer is tracked at a time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScreenShareState {
    /// Whether any participant is currently sharing
    pub is_sharing: bool,

    /// Identity of the remote sharer, `None` when nobody remote is sharing
    /// (including while the local user shares)
    pub sharer_id: Option<String>,

    /// Display name of the remote sharer
    pub sharer_name: Option<String>,

    /// Whether the local user is the sharer
    pub is_local_sharing: bool,

    /// Kind of the shared source while the local user shares
    pub source_kind: Option<SourceKind>,

    /// Identity of the shared capture source while the local user shares
    pub source_id: Option<String>,
}

impl ScreenShareState {
    /// Check whether a remote participant is sharing
    pub fn is_remote_sharing(&self) -> bool {
        self.is_sharing && !self.is_local_sharing
    }
}
