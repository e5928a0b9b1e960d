// Session orchestration: spawns the fixed-step loop and hands back its channels.

use super::scene::{Scene, ShooterScene};
use super::session::SessionState;
use super::types::{GameEvent, SessionSnapshot};
use crate::domain::tuning::SessionTuning;
use crate::interface_adapters::engine::EngineAdapter;
use crate::interface_adapters::headless::HeadlessEngine;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc::error::TryRecvError;
use tokio::sync::{Notify, mpsc, watch};
use tokio::task::{JoinError, JoinHandle};
use tracing::{debug, info};

/// Runtime settings for a session loop.
#[derive(Debug, Clone)]
pub struct SessionSettings {
    /// Capacity for inbound input/despawn events. Zero is treated as one.
    pub event_channel_capacity: usize,
    /// Fixed tick interval for the loop.
    pub tick_interval: Duration,
}

/// Channels into and out of a running session.
#[derive(Debug)]
pub struct SessionHandle {
    /// Sender for events into the session task.
    pub event_tx: mpsc::Sender<GameEvent>,
    snapshot_rx: watch::Receiver<SessionSnapshot>,
    shutdown: Arc<Notify>,
    task: JoinHandle<SessionState>,
}

impl SessionHandle {
    /// Receiver holding the snapshot published after the most recent tick.
    pub fn subscribe(&self) -> watch::Receiver<SessionSnapshot> {
        self.snapshot_rx.clone()
    }

    pub fn latest(&self) -> SessionSnapshot {
        self.snapshot_rx.borrow().clone()
    }

    /// Stops the loop and returns the final session state.
    pub async fn destroy(self) -> Result<SessionState, JoinError> {
        self.shutdown.notify_one();
        self.task.await
    }
}

/// Creates a session on the headless engine and spawns its loop.
pub fn start_session(settings: SessionSettings, tuning: SessionTuning) -> SessionHandle {
    start_session_with(settings, tuning, HeadlessEngine::new())
}

pub fn start_session_with<E>(
    settings: SessionSettings,
    tuning: SessionTuning,
    engine: E,
) -> SessionHandle
where
    E: EngineAdapter + Send + 'static,
{
    let capacity = settings.event_channel_capacity.max(1);
    let (event_tx, event_rx) = mpsc::channel::<GameEvent>(capacity);
    let scene = ShooterScene::new(tuning);
    let (snapshot_tx, snapshot_rx) = watch::channel(scene.session().snapshot(0));
    let shutdown = Arc::new(Notify::new());

    let task = tokio::spawn(session_task(
        scene,
        engine,
        event_rx,
        snapshot_tx,
        settings.tick_interval,
        shutdown.clone(),
    ));

    SessionHandle {
        event_tx,
        snapshot_rx,
        shutdown,
        task,
    }
}

pub async fn session_task<E: EngineAdapter>(
    mut scene: ShooterScene,
    mut engine: E,
    mut event_rx: mpsc::Receiver<GameEvent>,
    snapshot_tx: watch::Sender<SessionSnapshot>,
    tick_interval: Duration,
    shutdown: Arc<Notify>,
) -> SessionState {
    scene.on_load(&mut engine);
    scene.on_init(&mut engine);

    let delta_ms = tick_interval.as_secs_f32() * 1000.0;
    let mut interval = tokio::time::interval(tick_interval);
    let mut tick: u64 = 0;
    info!(tick_ms = delta_ms, "session started");

    'session: loop {
        tokio::select! {
            _ = shutdown.notified() => {
                break;
            }
            _ = interval.tick() => {}
        }

        // Events apply in arrival order, before the tick that follows them.
        loop {
            match event_rx.try_recv() {
                Ok(event) => scene.on_event(&mut engine, event),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    debug!("event senders dropped; stopping session");
                    break 'session;
                }
            }
        }

        scene.on_tick(&mut engine, delta_ms);

        tick += 1;
        let _ = snapshot_tx.send(scene.session().snapshot(tick));
    }

    let session = scene.into_session();
    info!(
        tick,
        shots_fired = session.shots_fired,
        shots_dropped = session.shots_dropped,
        "session torn down"
    );
    session
}
