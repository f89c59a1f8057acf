//! In-process loopback room
//!
//! A stand-in for the real room transport used by the demo binary and the
//! tests: data payloads broadcast by one participant are queued for every
//! other participant, preserving per-sender order, which is exactly the
//! ordering guarantee the protocol relies on.

use crate::client::MeetingClient;
use std::collections::{HashMap, VecDeque};
use telestrate_protocol::RoomEvent;
use tracing::debug;

/// One queued delivery
#[derive(Debug, Clone)]
struct Delivery {
    sender_id: String,
    topic: String,
    payload: Vec<u8>,
}

/// In-memory room bus
#[derive(Debug, Default)]
pub struct LoopbackRoom {
    inboxes: HashMap<String, VecDeque<Delivery>>,
}

impl LoopbackRoom {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a participant inbox
    pub fn join(&mut self, participant_id: &str) {
        self.inboxes.entry(participant_id.to_string()).or_default();
        debug!("{} joined the loopback room", participant_id);
    }

    /// Drop a participant inbox
    pub fn leave(&mut self, participant_id: &str) {
        self.inboxes.remove(participant_id);
    }

    /// Queue a payload for every participant except the sender
    pub fn broadcast(&mut self, sender_id: &str, topic: &str, payload: Vec<u8>) {
        for (id, inbox) in self.inboxes.iter_mut() {
            if id != sender_id {
                inbox.push_back(Delivery {
                    sender_id: sender_id.to_string(),
                    topic: topic.to_string(),
                    payload: payload.clone(),
                });
            }
        }
    }

    /// Take all queued deliveries for a participant, in arrival order
    pub fn drain(&mut self, participant_id: &str) -> Vec<RoomEvent> {
        let Some(inbox) = self.inboxes.get_mut(participant_id) else {
            return Vec::new();
        };

        inbox
            .drain(..)
            .map(|d| RoomEvent::DataReceived {
                sender_id: d.sender_id,
                topic: d.topic,
                payload: d.payload,
            })
            .collect()
    }
}

/// Shuttle traffic between clients until nothing moves
///
/// Repeats because a delivery can provoke replies (a state request draws
/// snapshots).
pub fn pump(room: &mut LoopbackRoom, clients: &mut [&mut MeetingClient]) {
    loop {
        let mut moved = false;

        for client in clients.iter_mut() {
            let sender = client.local_id().to_string();
            for (topic, payload) in client.drain_outbound() {
                room.broadcast(&sender, &topic, payload);
                moved = true;
            }
        }

        for client in clients.iter_mut() {
            for event in room.drain(client.local_id()) {
                client.handle_room_event(event);
                moved = true;
            }
        }

        if !moved {
            break;
        }
    }
}
