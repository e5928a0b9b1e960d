// Scene lifecycle: asset registration, world setup, per-frame update and event handling.

use super::session::SessionState;
use super::types::{EngineRequest, GameEvent};
use crate::domain::tuning::SessionTuning;
use crate::interface_adapters::engine::{EngineAdapter, FrameSize, WorldBounds};
use tracing::{debug, info};

pub const PLAYER_SHEET_KEY: &str = "player_handgun";
pub const RETICLE_IMAGE_KEY: &str = "target";
pub const BACKGROUND_IMAGE_KEY: &str = "background";
pub const BULLET_IMAGE_KEY: &str = "bullet";

/// Lifecycle hooks the host engine calls on a scene.
pub trait Scene {
    /// Registers assets. Called once before `on_init`.
    fn on_load(&mut self, engine: &mut dyn EngineAdapter);

    fn on_init(&mut self, engine: &mut dyn EngineAdapter);

    fn on_event(&mut self, engine: &mut dyn EngineAdapter, event: GameEvent);

    /// One frame. `delta_ms` is the time elapsed since the previous frame.
    fn on_tick(&mut self, engine: &mut dyn EngineAdapter, delta_ms: f32);
}

/// Single-player top-down shooter scene.
#[derive(Debug)]
pub struct ShooterScene {
    session: SessionState,
}

impl ShooterScene {
    pub fn new(tuning: SessionTuning) -> Self {
        Self {
            session: SessionState::new(tuning),
        }
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut SessionState {
        &mut self.session
    }

    pub fn into_session(self) -> SessionState {
        self.session
    }

    fn apply(&mut self, engine: &mut dyn EngineAdapter, request: EngineRequest) {
        match request {
            EngineRequest::PointerLock => {
                let granted = engine.request_pointer_lock();
                debug!(granted, "pointer lock requested");
                self.session.set_pointer_locked(granted);
            }
            EngineRequest::ReleasePointerLock => {
                engine.release_pointer_lock();
                debug!("pointer lock released");
                self.session.set_pointer_locked(false);
            }
        }
    }
}

impl Scene for ShooterScene {
    fn on_load(&mut self, engine: &mut dyn EngineAdapter) {
        let tuning = self.session.tuning().player;
        engine.load_spritesheet(
            PLAYER_SHEET_KEY,
            "GFS.png",
            FrameSize {
                width: tuning.frame_width,
                height: tuning.frame_height,
            },
        );
        engine.load_image(RETICLE_IMAGE_KEY, "crosshair.png");
        engine.load_image(BACKGROUND_IMAGE_KEY, "floor.png");
        engine.load_image(BULLET_IMAGE_KEY, "bullet6.png");
    }

    fn on_init(&mut self, engine: &mut dyn EngineAdapter) {
        let world = self.session.tuning().world;
        engine.set_world_bounds(WorldBounds::from_origin(world.width, world.height));
        engine.set_camera_zoom(world.camera_zoom);

        let player = &self.session.player.entity;
        engine.camera_follow(player.x, player.y);
        info!(
            width = world.width,
            height = world.height,
            "scene initialized"
        );
    }

    fn on_event(&mut self, engine: &mut dyn EngineAdapter, event: GameEvent) {
        match event {
            GameEvent::Input(input) => {
                if let Some(request) = self.session.handle_input(input) {
                    self.apply(engine, request);
                }
            }
            GameEvent::Despawn { id } => {
                if !self.session.despawn(id) {
                    debug!(
                        slot = id.slot,
                        generation = id.generation,
                        "despawn ignored; bullet no longer live"
                    );
                }
            }
        }
    }

    fn on_tick(&mut self, engine: &mut dyn EngineAdapter, delta_ms: f32) {
        engine.step_body(&mut self.session.player.entity, delta_ms);
        engine.step_body(&mut self.session.reticle, delta_ms);

        let expired = self.session.tick(delta_ms);
        if expired > 0 {
            debug!(expired, "bullets expired");
        }

        let player = &self.session.player.entity;
        engine.camera_follow(player.x, player.y);
    }
}
