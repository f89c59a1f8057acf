//! Participant roster
//!
//! Tracks who is in the room. The roster resolves participant identities to
//! display names for notifications (falling back to the raw identity when no
//! name is set) and assigns each participant a stable annotation color from
//! the palette based on join order.

use crate::stroke::Color;
use std::collections::HashMap;
use tracing::{debug, info};

/// Role of a participant in the meeting
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParticipantRole {
    Host,
    Participant,
}

/// A participant in the room
#[derive(Debug, Clone, PartialEq)]
pub struct Participant {
    /// Transport identity
    pub id: String,

    /// Display name (may be empty if the participant set none)
    pub name: String,

    /// Role in the meeting
    pub role: ParticipantRole,

    /// Whether this entry describes the local user
    pub is_local: bool,
}

impl Participant {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        role: ParticipantRole,
        is_local: bool,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            role,
            is_local,
        }
    }
}

/// Registry of room participants
#[derive(Debug, Default)]
pub struct ParticipantRoster {
    /// Participants by identity
    participants: HashMap<String, Participant>,

    /// Join order, used for stable palette color assignment
    join_order: Vec<String>,
}

impl ParticipantRoster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or update a participant
    pub fn add(&mut self, participant: Participant) {
        let id = participant.id.clone();
        if !self.participants.contains_key(&id) {
            self.join_order.push(id.clone());
            info!("Participant joined: {} ({})", participant.name, id);
        }
        self.participants.insert(id, participant);
    }

    /// Remove a participant by identity
    pub fn remove(&mut self, participant_id: &str) -> Option<Participant> {
        let removed = self.participants.remove(participant_id);
        if removed.is_some() {
            self.join_order.retain(|id| id != participant_id);
            debug!("Participant left: {}", participant_id);
        }
        removed
    }

    /// Get a participant by identity
    pub fn get(&self, participant_id: &str) -> Option<&Participant> {
        self.participants.get(participant_id)
    }

    /// Resolve a display name, falling back to the raw identity
    pub fn display_name(&self, participant_id: &str) -> String {
        match self.participants.get(participant_id) {
            Some(p) if !p.name.is_empty() => p.name.clone(),
            _ => participant_id.to_string(),
        }
    }

    /// The palette color assigned to a participant
    ///
    /// Stable for the lifetime of the participant's presence: based on join
    /// order, wrapping around the palette. Unknown identities get the first
    /// palette entry.
    pub fn color_for(&self, participant_id: &str) -> Color {
        let index = self
            .join_order
            .iter()
            .position(|id| id == participant_id)
            .unwrap_or(0);
        Color::PALETTE[index % Color::PALETTE.len()]
    }

    /// Check if a participant is the host
    pub fn is_host(&self, participant_id: &str) -> bool {
        self.participants
            .get(participant_id)
            .map(|p| p.role == ParticipantRole::Host)
            .unwrap_or(false)
    }

    /// All participants, in join order
    pub fn participants(&self) -> impl Iterator<Item = &Participant> {
        self.join_order
            .iter()
            .filter_map(|id| self.participants.get(id))
    }

    /// Number of participants
    pub fn len(&self) -> usize {
        self.participants.len()
    }

    /// Check if the roster is empty
    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }
}
