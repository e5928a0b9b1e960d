// Framework bootstrap for a headless session host.

use crate::domain::tuning::SessionTuning;
use crate::domain::{InputEvent, Key};
use crate::frameworks::config;
use crate::use_cases::{GameEvent, SessionSettings, SessionState, start_session};
use std::io::Result;
use std::time::Duration;
use tokio::sync::mpsc;

pub fn init_runtime() {
    let _ = dotenvy::dotenv();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

/// Runs one session for `run_for`, feeding it a scripted play-through.
pub async fn run(settings: SessionSettings, run_for: Duration) -> Result<SessionState> {
    let handle = start_session(settings, SessionTuning::default());
    let mut snapshots = handle.subscribe();

    let script = tokio::spawn(play_script(handle.event_tx.clone(), run_for));

    let report = tokio::time::sleep(run_for);
    tokio::pin!(report);
    let mut last_logged_second = 0;
    loop {
        tokio::select! {
            _ = &mut report => break,
            changed = snapshots.changed() => {
                if changed.is_err() {
                    break;
                }
                let snapshot = snapshots.borrow_and_update().clone();
                let second = (snapshot.elapsed_ms / 1000.0) as u64;
                if second > last_logged_second {
                    last_logged_second = second;
                    tracing::info!(
                        tick = snapshot.tick,
                        player_x = snapshot.player.x,
                        player_y = snapshot.player.y,
                        bullets = snapshot.bullets.len(),
                        "session progress"
                    );
                    if let Ok(json) = serde_json::to_string(&snapshot) {
                        tracing::debug!(%json, "snapshot");
                    }
                }
            }
        }
    }

    script.abort();
    handle.destroy().await.map_err(std::io::Error::other)
}

pub async fn run_with_config() -> Result<()> {
    init_runtime();

    let settings = SessionSettings {
        event_channel_capacity: config::EVENT_CHANNEL_CAPACITY,
        tick_interval: config::tick_interval(),
    };
    let run_for = config::run_duration();
    tracing::info!(?settings, ?run_for, "starting headless session");

    let session = run(settings, run_for).await.inspect_err(|e| {
        tracing::error!(error = %e, "session failed");
    })?;

    tracing::info!(
        shots_fired = session.shots_fired,
        shots_dropped = session.shots_dropped,
        player_x = session.player.entity.x,
        player_y = session.player.entity.y,
        "session finished"
    );
    Ok(())
}

// Walks down-right, sweeps the reticle while firing, then lets go.
async fn play_script(event_tx: mpsc::Sender<GameEvent>, run_for: Duration) {
    let step = run_for / 8;
    let steps = [
        vec![
            InputEvent::KeyDown(Key::D),
            InputEvent::KeyDown(Key::S),
            InputEvent::PointerDown,
        ],
        vec![
            InputEvent::PointerMove {
                movement_x: 120.0,
                movement_y: -40.0,
            },
            InputEvent::PointerDown,
        ],
        vec![InputEvent::KeyUp(Key::S), InputEvent::KeyDown(Key::W)],
        vec![
            InputEvent::PointerMove {
                movement_x: -300.0,
                movement_y: 80.0,
            },
            InputEvent::PointerDown,
        ],
        vec![InputEvent::KeyUp(Key::D), InputEvent::KeyUp(Key::W)],
        vec![InputEvent::KeyDown(Key::Q)],
    ];

    for events in steps {
        for event in events {
            if event_tx.send(event.into()).await.is_err() {
                return;
            }
        }
        tokio::time::sleep(step).await;
    }
}
