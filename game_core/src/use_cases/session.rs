// Explicit per-session state. Input handlers and the tick read and write only through it.

use super::types::{EngineRequest, SessionSnapshot};
use crate::domain::systems::{aim_player, constrain_reticle_within, constrain_velocity, fire};
use crate::domain::tuning::SessionTuning;
use crate::domain::{
    BulletId, BulletPool, BulletSnapshot, Entity2D, EntitySnapshot, InputEvent, Key, Player,
};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct SessionState {
    pub player: Player,
    pub reticle: Entity2D,
    pub bullets: BulletPool,
    pub pointer_locked: bool,
    pub elapsed_ms: f64,

    pub shots_fired: u64,
    pub shots_dropped: u64,

    tuning: SessionTuning,
}

impl SessionState {
    pub fn new(tuning: SessionTuning) -> Self {
        let mut player = Entity2D::with_body(tuning.player.spawn_x, tuning.player.spawn_y);
        if let Some(body) = player.body.as_mut() {
            body.drag_x = tuning.player.drag;
            body.drag_y = tuning.player.drag;
            body.collide_world_bounds = true;
        }

        let mut reticle = Entity2D::with_body(tuning.reticle.spawn_x, tuning.reticle.spawn_y);
        if let Some(body) = reticle.body.as_mut() {
            body.collide_world_bounds = true;
        }

        Self {
            player: Player::new(player),
            reticle,
            bullets: BulletPool::new(tuning.bullet.pool_capacity),
            pointer_locked: false,
            elapsed_ms: 0.0,
            shots_fired: 0,
            shots_dropped: 0,
            tuning,
        }
    }

    pub fn tuning(&self) -> &SessionTuning {
        &self.tuning
    }

    /// Applies one input event. Pointer-lock changes are returned for the engine to perform.
    pub fn handle_input(&mut self, event: InputEvent) -> Option<EngineRequest> {
        match event {
            InputEvent::KeyDown(Key::Q) => {
                self.pointer_locked.then_some(EngineRequest::ReleasePointerLock)
            }
            InputEvent::KeyDown(key) => {
                self.player.keys.press(key);
                self.apply_key_down(key);
                None
            }
            InputEvent::KeyUp(key) => {
                self.player.keys.release(key);
                self.apply_key_up(key);
                None
            }
            InputEvent::PointerDown => {
                self.fire();
                (!self.pointer_locked).then_some(EngineRequest::PointerLock)
            }
            InputEvent::PointerMove {
                movement_x,
                movement_y,
            } => {
                if self.pointer_locked {
                    self.reticle.x += movement_x;
                    self.reticle.y += movement_y;
                }
                None
            }
        }
    }

    pub fn set_pointer_locked(&mut self, locked: bool) {
        self.pointer_locked = locked;
    }

    // Most recent key press decides the axis.
    fn apply_key_down(&mut self, key: Key) {
        let accel = self.tuning.player.acceleration;
        let Some(body) = self.player.entity.body.as_mut() else {
            return;
        };
        match key {
            Key::W => body.ay = -accel,
            Key::S => body.ay = accel,
            Key::A => body.ax = -accel,
            Key::D => body.ax = accel,
            Key::Q => {}
        }
    }

    // Releasing a key zeroes its axis unless the opposite key is still held, in which
    // case the axis keeps its current acceleration.
    fn apply_key_up(&mut self, key: Key) {
        let keys = self.player.keys;
        let Some(body) = self.player.entity.body.as_mut() else {
            return;
        };
        match key {
            Key::W if !keys.down => body.ay = 0.0,
            Key::S if !keys.up => body.ay = 0.0,
            Key::A if !keys.right => body.ax = 0.0,
            Key::D if !keys.left => body.ax = 0.0,
            _ => {}
        }
    }

    /// Fires from the player toward the reticle. Returns the id of the bullet, if any.
    pub fn fire(&mut self) -> Option<BulletId> {
        if !self.player.active {
            return None;
        }

        let Some((id, bullet)) = self.bullets.acquire() else {
            self.shots_dropped += 1;
            debug!(
                capacity = self.bullets.capacity(),
                "bullet pool exhausted; shot dropped"
            );
            return None;
        };

        *bullet = fire(&self.player.entity, &self.reticle, self.tuning.bullet.speed);
        bullet.lifetime = self.tuning.bullet.lifetime_ms;
        self.shots_fired += 1;
        Some(id)
    }

    pub fn despawn(&mut self, id: BulletId) -> bool {
        self.bullets.release(id)
    }

    /// Runs one update step in a fixed order:
    /// aim, reticle velocity sync, player speed cap, reticle containment, bullets.
    ///
    /// Returns the number of bullets that expired during the step.
    pub fn tick(&mut self, delta_ms: f32) -> usize {
        self.player.entity.rotation = aim_player(&self.player.entity, &self.reticle);

        let (vx, vy) = self.player.entity.velocity();
        self.reticle.set_velocity(vx, vy);

        constrain_velocity(&mut self.player.entity, self.tuning.player.max_velocity);

        constrain_reticle_within(
            &mut self.reticle,
            &self.player.entity,
            self.tuning.reticle.max_offset_x,
            self.tuning.reticle.max_offset_y,
        );

        let expired = self.bullets.advance_all(delta_ms);
        self.elapsed_ms += f64::from(delta_ms);
        expired
    }

    pub fn snapshot(&self, tick: u64) -> SessionSnapshot {
        SessionSnapshot {
            tick,
            elapsed_ms: self.elapsed_ms,
            player: EntitySnapshot::from(&self.player.entity),
            reticle: EntitySnapshot::from(&self.reticle),
            bullets: self.bullets.iter_active().map(BulletSnapshot::from).collect(),
            pointer_locked: self.pointer_locked,
        }
    }
}
