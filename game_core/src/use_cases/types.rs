// Use-case level inputs/outputs for the session loop.

use crate::domain::{BulletId, BulletSnapshot, EntitySnapshot, InputEvent};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    Input(InputEvent),
    // Explicit bullet removal, e.g. when the engine reports a collision.
    Despawn { id: BulletId },
}

impl From<InputEvent> for GameEvent {
    fn from(input: InputEvent) -> Self {
        GameEvent::Input(input)
    }
}

/// Requests the session hands back to the scene for the engine to carry out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineRequest {
    PointerLock,
    ReleasePointerLock,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionSnapshot {
    pub tick: u64,
    pub elapsed_ms: f64,
    pub player: EntitySnapshot,
    pub reticle: EntitySnapshot,
    pub bullets: Vec<BulletSnapshot>,
    pub pointer_locked: bool,
}
