mod capture;
mod client;
mod config;
mod loopback;

use anyhow::{Context, Result};
use capture::HeadlessCapture;
use clap::Parser;
use client::MeetingClient;
use loopback::{pump, LoopbackRoom};
use std::path::PathBuf;
use std::time::Duration;
use telestrate_protocol::{
    Participant, ParticipantInfo, ParticipantRole, RoomEvent, Tool, TrackSource,
};
use tracing::info;

use config::Config;

/// Telestrate meeting client
///
/// Without a room server configured this runs a scripted two-participant
/// session over an in-process loopback room, demonstrating annotation sync
/// and screen-share arbitration end to end.
#[derive(Debug, Parser)]
#[command(name = "telestrate-client", version)]
struct Args {
    /// Path to an alternative configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the configured display name
    #[arg(long)]
    name: Option<String>,
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    // Load configuration
    let mut config = match args.config {
        Some(path) => Config::load_from(path).context("Failed to load configuration")?,
        None => Config::load().context("Failed to load configuration")?,
    };
    if let Some(name) = args.name {
        config.participant.name = name;
    }

    info!("Participant name: {}", config.participant.name);
    info!("Update interval: {} ms", config.sync.update_interval_ms);

    run_loopback_demo(&config)
}

/// Scripted two-participant session over the loopback room
fn run_loopback_demo(config: &Config) -> Result<()> {
    info!("Starting loopback demonstration");

    let mut room = LoopbackRoom::new();

    let host_id = config.participant_id();
    let mut host = MeetingClient::new(
        host_id.clone(),
        config.participant.name.clone(),
        ParticipantRole::Host,
        Box::<HeadlessCapture>::default(),
    );
    host.session_mut()
        .set_update_interval(Duration::from_millis(config.sync.update_interval_ms));

    let mut guest = MeetingClient::new(
        "guest",
        "Guest",
        ParticipantRole::Participant,
        Box::<HeadlessCapture>::default(),
    );

    room.join(&host_id);
    room.join("guest");

    // Introduce the participants to each other.
    host.handle_room_event(RoomEvent::ParticipantJoined {
        participant: Participant::new("guest", "Guest", ParticipantRole::Participant, false),
    });
    guest.handle_room_event(RoomEvent::ParticipantJoined {
        participant: Participant::new(
            host_id.clone(),
            config.participant.name.clone(),
            ParticipantRole::Host,
            false,
        ),
    });

    // The host shares a screen; the transport reports the track to both
    // sides, including the host's own synthetic identity echo.
    host.start_share("screen-0")?;
    info!(
        "Sharing locally: {} ({} participants in roster)",
        host.share_state().is_local_sharing,
        host.roster().len()
    );
    for effect in host.drain_effects() {
        info!("[host effect] {:?}", effect);
    }
    let track = ParticipantInfo::new(format!("{host_id}-screenshare"), "").with_metadata(
        format!(r#"{{"parentId":"{host_id}","isScreenShare":true}}"#),
    );
    host.handle_room_event(RoomEvent::TrackSubscribed {
        source: TrackSource::Screen,
        participant: track.clone(),
    });
    guest.handle_room_event(RoomEvent::TrackSubscribed {
        source: TrackSource::Screen,
        participant: track,
    });

    for notification in guest.drain_notifications() {
        info!("[guest] {}", notification.text);
    }

    // The guest annotates the shared screen.
    guest.pointer_down(192.0, 108.0, 1920.0, 1080.0, None)?;
    guest.pointer_move(960.0, 540.0, 1920.0, 1080.0, None)?;
    guest.pointer_move(1728.0, 972.0, 1920.0, 1080.0, None)?;
    guest.pointer_up();
    guest.cursor_moved(1728.0, 972.0, 1920.0, 1080.0);
    host.poll();
    guest.poll();
    pump(&mut room, &mut [&mut host, &mut guest]);

    info!(
        "Host sees {} stroke(s), guest cursor at {:?}",
        host.session().store().len(),
        host.cursors()
            .get("guest")
            .map(|c| (c.x, c.y))
            .unwrap_or_default()
    );

    // The host erases the guest's stroke.
    host.set_tool(Tool::Eraser);
    host.pointer_down(960.0, 540.0, 1920.0, 1080.0, None)?;
    pump(&mut room, &mut [&mut host, &mut guest]);

    info!(
        "After erase: host {} stroke(s), guest {} stroke(s)",
        host.session().store().len(),
        guest.session().store().len()
    );

    // Revoking annotation rights rejects further drawing locally.
    guest.set_annotations_enabled(false);
    let _ = guest.pointer_down(960.0, 540.0, 1920.0, 1080.0, None);
    for notification in guest.drain_notifications() {
        info!("[guest] {}", notification.text);
    }

    // The host wipes the canvas and ends the session.
    host.clear_annotations()?;
    guest.cursor_hidden();
    pump(&mut room, &mut [&mut host, &mut guest]);

    host.stop_share();
    for effect in host.drain_effects() {
        info!("[host effect] {:?}", effect);
    }

    // The guest hangs up.
    room.leave("guest");
    host.handle_room_event(RoomEvent::ParticipantLeft {
        participant_id: "guest".to_string(),
    });
    info!("{} participant(s) remain", host.roster().len());

    info!("Loopback demonstration complete");
    Ok(())
}
