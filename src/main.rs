mod config;
mod controller;
mod error;
mod logging;
mod media;
mod model;
mod view;

use std::io;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{Event, EventStream},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc::{self, UnboundedReceiver};

use config::{Args, Config, SimulationConfig};
use controller::{action_for_key, AudioSource, HostAction, SyncController, SyncEvent, VideoSource};
use media::{SimulatedAudio, SimulatedVideo};
use model::SeekUnit;
use view::{AppView, ViewState};

type Controller = SyncController<SimulatedVideo, SimulatedAudio>;

/// How often the simulated sources are advanced.
const TICK_INTERVAL: Duration = Duration::from_millis(50);

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    if let Err(e) = logging::init_logging(&args.log_dir) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::info!("=== avsync starting ===");

    let config = Config::load(&args).context("Failed to load configuration")?;

    // Both sources report into one channel; only the loop below touches the controller.
    let (event_tx, event_rx) = mpsc::unbounded_channel();

    let mut controller = Controller::new(config.sync.clone());
    controller.attach_video(SimulatedVideo::new(
        config.sync.video_url.clone(),
        &config.simulation,
        event_tx.clone(),
    ));
    controller.attach_audio(SimulatedAudio::new(
        config.sync.audio_url.clone(),
        &config.simulation,
        event_tx,
    ));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut controller, event_rx, &config.simulation).await;

    controller.pause();
    if let (Some(video), Some(audio)) = (controller.detach_video(), controller.detach_audio()) {
        tracing::info!(
            video_position = video.current_time(),
            audio_position = audio.current_time(),
            skips = controller.status().skips_performed,
            "Sources detached"
        );
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = ?err, "Application error");
        return Err(err);
    }

    tracing::info!("avsync shutting down");
    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    controller: &mut Controller,
    mut events: UnboundedReceiver<SyncEvent>,
    simulation: &SimulationConfig,
) -> Result<()> {
    let mut keys = EventStream::new();
    let mut ticker = tokio::time::interval(TICK_INTERVAL);
    let started = Instant::now();
    let mut loading_warned = false;

    loop {
        let state = view_state(controller);
        terminal.draw(|f| AppView::render(f, &state))?;

        tokio::select! {
            _ = ticker.tick() => {
                let now = Instant::now();
                if let Some(video) = controller.video_mut() {
                    video.tick(now);
                }
                if let Some(audio) = controller.audio_mut() {
                    audio.tick(now);
                }

                if !loading_warned && controller.is_loading() {
                    if let Some(limit) = simulation.loading_warn_after() {
                        if started.elapsed() >= limit {
                            loading_warned = true;
                            tracing::warn!(
                                waited_secs = limit.as_secs(),
                                readiness = ?controller.status().readiness,
                                "Still loading; playback stays disabled until both streams are ready"
                            );
                        }
                    }
                }
            }
            Some(event) = events.recv() => apply(controller, event),
            key = keys.next() => match key {
                Some(Ok(Event::Key(key))) => {
                    if let Some(action) = action_for_key(key) {
                        if handle_action(controller, action) {
                            break;
                        }
                    }
                }
                Some(Ok(_)) => {}
                Some(Err(e)) => return Err(e.into()),
                None => break,
            },
        }

        // Apply everything already queued, in arrival order, before redrawing.
        while let Ok(event) = events.try_recv() {
            apply(controller, event);
        }
    }

    Ok(())
}

/// Dispatches one event, then mirrors the resulting playback state onto the
/// video surface.
fn apply(controller: &mut Controller, event: SyncEvent) {
    tracing::trace!(?event, "Dispatching");
    controller.dispatch(event);

    let playing = controller.playback_state().is_playing();
    if let Some(video) = controller.video_mut() {
        video.set_playing(playing);
    }
}

/// Returns `true` when the host should quit.
fn handle_action(controller: &mut Controller, action: HostAction) -> bool {
    match action {
        HostAction::Dispatch(event) => apply(controller, event),
        HostAction::Scrub(delta) => {
            if let Some(video) = controller.video_mut() {
                video.scrub(delta);
            }
        }
        HostAction::ScrubToFraction(fraction) => {
            if let Some(video) = controller.video_mut() {
                video.scrub_to(fraction, SeekUnit::Fraction);
            }
        }
        HostAction::VideoVolumeStep(step) => {
            let volume = controller.volume().video + step;
            apply(controller, SyncEvent::SetVideoVolume(volume));
        }
        HostAction::AudioVolumeStep(step) => {
            let volume = controller.volume().audio + step;
            apply(controller, SyncEvent::SetAudioVolume(volume));
        }
        HostAction::Quit => return true,
    }
    false
}

fn view_state(controller: &Controller) -> ViewState<'_> {
    let status = controller.status();
    let config = controller.config();

    ViewState {
        status,
        video_playing: controller.video().is_some_and(|video| video.is_playing()),
        audio_playing: controller.audio().is_some_and(|audio| audio.is_playing()),
        video_volume: controller.video().map(|video| video.volume()),
        audio_volume: controller.audio().map(|audio| audio.volume()),
        video_url: &config.video_url,
        audio_url: &config.audio_url,
        skip_ranges: controller.skip_table().ranges(),
        video_position: controller
            .video()
            .map(|video| video.current_time())
            .unwrap_or(status.video_position),
        audio_position: controller
            .audio()
            .map(|audio| audio.current_time())
            .unwrap_or_default(),
        duration: controller.video().map(|video| video.duration()).unwrap_or_default(),
    }
}
