//! Integration tests for annotation synchronization
//!
//! These tests wire multiple sessions together through the encoded wire
//! format, simulating the room's reliable ordered data channel: every
//! outbound message of one session is encoded to bytes and delivered to the
//! others in order.

use std::time::Duration;
use telestrate_protocol::{AnnotationMessage, AnnotationSession, Point, Tool};

/// Create a session with authoring enabled and throttling disabled
fn session(id: &str) -> AnnotationSession {
    let mut session = AnnotationSession::new(id);
    session.set_share_active(true);
    session.set_update_interval(Duration::ZERO);
    session.set_snapshot_wait(Duration::ZERO);
    session
}

/// Deliver every queued message of `from` to all `others`, preserving order
fn pump(from: &mut AnnotationSession, others: &mut [&mut AnnotationSession]) {
    let sender = from.local_id().to_string();
    for message in from.drain_outbound() {
        let bytes = message.encode().expect("encode failed");
        for other in others.iter_mut() {
            other.handle_message(&sender, &bytes);
        }
    }
}

#[test]
fn test_stroke_replicates_to_peer() {
    let mut alice = session("alice");
    let mut bob = session("bob");

    alice.pointer_down(Point::new(0.1, 0.1)).unwrap();
    alice.pointer_move(Point::new(0.5, 0.5)).unwrap();
    alice.pointer_move(Point::new(0.9, 0.9)).unwrap();
    alice.pointer_up();

    pump(&mut alice, &mut [&mut bob]);

    assert_eq!(bob.store().len(), 1);
    let stroke = bob.store().strokes()[0];
    assert_eq!(stroke.author_id, "alice");
    assert_eq!(stroke.points.len(), 3);
    assert!(stroke.complete);
    assert_eq!(bob.store().remote_active_strokes().count(), 0);
}

#[test]
fn test_in_progress_stroke_mirrors_before_completion() {
    let mut alice = session("alice");
    let mut bob = session("bob");

    alice.pointer_down(Point::new(0.1, 0.1)).unwrap();
    alice.pointer_move(Point::new(0.2, 0.2)).unwrap();
    pump(&mut alice, &mut [&mut bob]);

    // Bob sees the stroke in progress, not yet completed.
    assert_eq!(bob.store().len(), 0);
    assert_eq!(bob.store().remote_active_strokes().count(), 1);

    alice.pointer_up();
    pump(&mut alice, &mut [&mut bob]);

    assert_eq!(bob.store().len(), 1);
    assert_eq!(bob.store().remote_active_strokes().count(), 0);
}

#[test]
fn test_erase_replicates() {
    let mut alice = session("alice");
    let mut bob = session("bob");

    alice.pointer_down(Point::new(0.4, 0.5)).unwrap();
    alice.pointer_move(Point::new(0.6, 0.5)).unwrap();
    alice.pointer_up();
    pump(&mut alice, &mut [&mut bob]);
    assert_eq!(bob.store().len(), 1);

    // Bob erases Alice's stroke.
    bob.set_tool(Tool::Eraser);
    bob.pointer_down(Point::new(0.5, 0.5)).unwrap();
    pump(&mut bob, &mut [&mut alice]);

    assert!(alice.store().is_empty());
    assert!(bob.store().is_empty());
}

#[test]
fn test_interleaved_authors_do_not_collide() {
    let mut alice = session("alice");
    let mut bob = session("bob");
    let mut carol = session("carol");

    alice.pointer_down(Point::new(0.1, 0.1)).unwrap();
    bob.pointer_down(Point::new(0.9, 0.9)).unwrap();

    pump(&mut alice, &mut [&mut bob, &mut carol]);
    pump(&mut bob, &mut [&mut alice, &mut carol]);

    // Carol mirrors two independent in-progress strokes.
    assert_eq!(carol.store().remote_active_strokes().count(), 2);

    alice.pointer_up();
    bob.pointer_up();
    pump(&mut alice, &mut [&mut bob, &mut carol]);
    pump(&mut bob, &mut [&mut alice, &mut carol]);

    assert_eq!(carol.store().len(), 2);
    assert_eq!(alice.store().len(), 2);
    assert_eq!(bob.store().len(), 2);
}

#[test]
fn test_late_joiner_catches_up() {
    let mut alice = session("alice");
    let mut bob = session("bob");

    // Alice draws before Bob joins.
    for y in [0.2f32, 0.4, 0.6] {
        alice.pointer_down(Point::new(0.1, y)).unwrap();
        alice.pointer_move(Point::new(0.9, y)).unwrap();
        alice.pointer_up();
    }
    alice.drain_outbound();

    // Bob joins late and requests state.
    bob.request_state();
    pump(&mut bob, &mut [&mut alice]);
    pump(&mut alice, &mut [&mut bob]);

    assert!(bob.sync_complete());
    assert_eq!(bob.store().len(), 3);
}

#[test]
fn test_late_joiner_first_snapshot_wins() {
    let mut alice = session("alice");
    let mut bob = session("bob");
    let mut carol = session("carol");

    // Both existing participants hold the same replicated state.
    alice.pointer_down(Point::new(0.3, 0.3)).unwrap();
    alice.pointer_up();
    pump(&mut alice, &mut [&mut bob]);
    assert_eq!(bob.store().len(), 1);

    // Carol's request reaches both; both answer.
    carol.request_state();
    pump(&mut carol, &mut [&mut alice, &mut bob]);

    pump(&mut alice, &mut [&mut carol, &mut bob]);
    assert!(carol.sync_complete());
    assert_eq!(carol.store().len(), 1);

    // Bob's snapshot arrives second and is ignored; the replies are
    // idempotent full snapshots, so state is unchanged either way.
    pump(&mut bob, &mut [&mut carol, &mut alice]);
    assert_eq!(carol.store().len(), 1);
}

#[test]
fn test_late_joiner_empty_room_times_out() {
    let mut bob = session("bob");
    bob.request_state();
    bob.drain_outbound();

    // Nobody answers; the wait window (zero in tests) expires on poll.
    bob.poll();
    assert!(bob.sync_complete());
    assert!(bob.store().is_empty());
}

#[test]
fn test_clear_all_replicates() {
    let mut alice = session("alice");
    let mut bob = session("bob");

    alice.pointer_down(Point::new(0.2, 0.2)).unwrap();
    alice.pointer_up();
    bob.pointer_down(Point::new(0.8, 0.8)).unwrap();
    bob.pointer_up();
    pump(&mut alice, &mut [&mut bob]);
    pump(&mut bob, &mut [&mut alice]);
    assert_eq!(alice.store().len(), 2);

    alice.clear_all();
    pump(&mut alice, &mut [&mut bob]);

    assert!(alice.store().is_empty());
    assert!(bob.store().is_empty());
}

#[test]
fn test_duplicate_delivery_is_idempotent() {
    let mut alice = session("alice");
    let mut bob = session("bob");

    alice.pointer_down(Point::new(0.4, 0.5)).unwrap();
    alice.pointer_move(Point::new(0.6, 0.5)).unwrap();
    alice.pointer_up();

    // At-least-once delivery: everything arrives twice.
    let sender = alice.local_id().to_string();
    let messages: Vec<AnnotationMessage> = alice.drain_outbound();
    for _ in 0..2 {
        for message in &messages {
            bob.handle_message(&sender, &message.encode().unwrap());
        }
    }

    assert_eq!(bob.store().len(), 1);
    assert_eq!(bob.store().strokes()[0].points.len(), 3);
}

#[test]
fn test_abandoned_stroke_leaves_orphan_until_author_leaves() {
    let mut alice = session("alice");
    let mut bob = session("bob");

    alice.pointer_down(Point::new(0.1, 0.1)).unwrap();
    alice.pointer_move(Point::new(0.2, 0.2)).unwrap();
    pump(&mut alice, &mut [&mut bob]);
    assert_eq!(bob.store().remote_active_strokes().count(), 1);

    // Alice's permission is revoked mid-draw: the stroke is abandoned and
    // no completion is ever sent.
    alice.set_annotations_enabled(false);
    alice.pointer_up();
    pump(&mut alice, &mut [&mut bob]);
    assert_eq!(bob.store().len(), 0);
    assert_eq!(bob.store().remote_active_strokes().count(), 1);

    // The orphan is dropped when its author leaves the room.
    bob.participant_left("alice");
    assert_eq!(bob.store().remote_active_strokes().count(), 0);
}

#[test]
fn test_complete_supersedes_lost_updates() {
    let mut alice = session("alice");
    let mut bob = session("bob");

    alice.pointer_down(Point::new(0.1, 0.1)).unwrap();
    let first_batch = alice.drain_outbound();

    alice.pointer_move(Point::new(0.2, 0.2)).unwrap();
    let lost = alice.drain_outbound();
    assert!(!lost.is_empty());

    alice.pointer_move(Point::new(0.3, 0.3)).unwrap();
    alice.pointer_up();
    let rest = alice.drain_outbound();

    // Deliver everything except the middle update.
    for message in first_batch.iter().chain(rest.iter()) {
        bob.handle_message("alice", &message.encode().unwrap());
    }

    // The completion carried the authoritative full path.
    assert_eq!(bob.store().strokes()[0].points.len(), 3);
}
