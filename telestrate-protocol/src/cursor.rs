//! Remote cursor presence
//!
//! While a screen is shared, each participant broadcasts their pointer
//! position over a dedicated topic so everyone can see where others are
//! pointing. This is visual feedback only; no input is simulated on the
//! sharer's machine.

use crate::error::Result;
use crate::stroke::Color;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Data-channel topic carrying cursor traffic
pub const CURSOR_TOPIC: &str = "cursors";

/// Cursor appearance, following the sender's selected tool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CursorStyle {
    Default,
    Pen,
    Highlighter,
    Eraser,
    Hidden,
}

/// A cursor presence message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CursorMessage {
    /// Pointer moved (or was hidden) on the shared screen
    Move { x: f32, y: f32, visible: bool },

    /// Cursor style changed with the sender's tool selection
    Style { style: CursorStyle },
}

impl CursorMessage {
    /// Encode to UTF-8 JSON bytes
    pub fn encode(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }

    /// Decode a cursor message from raw bytes
    pub fn decode(bytes: &[u8]) -> Result<CursorMessage> {
        Ok(serde_json::from_slice(bytes)?)
    }
}

/// Live cursor state for one remote participant
#[derive(Debug, Clone, PartialEq)]
pub struct RemoteCursor {
    pub participant_id: String,
    pub x: f32,
    pub y: f32,
    pub visible: bool,
    pub style: CursorStyle,
    pub color: Color,
}

/// Tracks remote cursor positions, keyed by participant
#[derive(Debug, Default)]
pub struct CursorTracker {
    cursors: HashMap<String, RemoteCursor>,
}

impl CursorTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a position update, creating the cursor entry on first sight
    pub fn update_position(
        &mut self,
        participant_id: &str,
        x: f32,
        y: f32,
        visible: bool,
        color: Color,
    ) {
        if let Some(cursor) = self.cursors.get_mut(participant_id) {
            cursor.x = x;
            cursor.y = y;
            cursor.visible = visible;
        } else {
            self.cursors.insert(
                participant_id.to_string(),
                RemoteCursor {
                    participant_id: participant_id.to_string(),
                    x,
                    y,
                    visible,
                    style: CursorStyle::Default,
                    color,
                },
            );
        }
    }

    /// Apply a style update
    ///
    /// No-op until the participant's first position update; a style without
    /// a position has nothing to render.
    pub fn set_style(&mut self, participant_id: &str, style: CursorStyle) {
        if let Some(cursor) = self.cursors.get_mut(participant_id) {
            cursor.style = style;
        }
    }

    /// Drop a participant's cursor when they leave the room
    pub fn remove(&mut self, participant_id: &str) -> Option<RemoteCursor> {
        self.cursors.remove(participant_id)
    }

    /// Get a cursor by participant
    pub fn get(&self, participant_id: &str) -> Option<&RemoteCursor> {
        self.cursors.get(participant_id)
    }

    /// All tracked cursors
    pub fn cursors(&self) -> impl Iterator<Item = &RemoteCursor> {
        self.cursors.values()
    }

    /// Number of tracked cursors
    pub fn len(&self) -> usize {
        self.cursors.len()
    }

    /// Check if no cursors are tracked
    pub fn is_empty(&self) -> bool {
        self.cursors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_round_trip() {
        let messages = vec![
            CursorMessage::Move {
                x: 0.25,
                y: 0.75,
                visible: true,
            },
            CursorMessage::Style {
                style: CursorStyle::Eraser,
            },
        ];
        for message in messages {
            let bytes = message.encode().unwrap();
            assert_eq!(CursorMessage::decode(&bytes).unwrap(), message);
        }
    }

    #[test]
    fn test_decode_garbage_is_invalid() {
        assert!(CursorMessage::decode(b"garbage").is_err());
    }

    #[test]
    fn test_cursor_lifecycle() {
        let mut tracker = CursorTracker::new();

        tracker.update_position("p1", 0.1, 0.2, true, Color::RED);
        assert_eq!(tracker.len(), 1);
        let cursor = tracker.get("p1").unwrap();
        assert_eq!(cursor.style, CursorStyle::Default);
        assert_eq!(cursor.color, Color::RED);

        tracker.update_position("p1", 0.3, 0.4, true, Color::BLUE);
        let cursor = tracker.get("p1").unwrap();
        assert_eq!((cursor.x, cursor.y), (0.3, 0.4));
        // Color is assigned on first sight and kept.
        assert_eq!(cursor.color, Color::RED);

        tracker.set_style("p1", CursorStyle::Pen);
        assert_eq!(tracker.get("p1").unwrap().style, CursorStyle::Pen);

        assert!(tracker.remove("p1").is_some());
        assert!(tracker.is_empty());
        assert!(tracker.remove("p1").is_none());
    }

    #[test]
    fn test_style_before_position_is_noop() {
        let mut tracker = CursorTracker::new();
        tracker.set_style("p1", CursorStyle::Highlighter);
        assert!(tracker.get("p1").is_none());
    }
}
