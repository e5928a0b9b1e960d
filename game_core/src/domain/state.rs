// Domain-level session entities and snapshot types.

use serde::Serialize;

use super::input::MoveKeys;
use super::pool::BulletId;

/// Physics body state integrated by the engine adapter.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Body {
    pub vx: f32, // units/s
    pub vy: f32, // units/s

    // Acceleration set from input (units/s^2).
    pub ax: f32,
    pub ay: f32,

    // Linear drag applied on an axis while its acceleration is zero.
    pub drag_x: f32,
    pub drag_y: f32,

    pub collide_world_bounds: bool,
}

/// Minimal 2D object: position, optional velocity body, rotation in radians.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Entity2D {
    pub x: f32,
    pub y: f32,
    pub rotation: f32,
    pub body: Option<Body>,
}

impl Entity2D {
    /// Entity with a resting physics body.
    pub fn with_body(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            rotation: 0.0,
            body: Some(Body::default()),
        }
    }

    /// Entity the engine never integrates.
    pub fn without_body(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            rotation: 0.0,
            body: None,
        }
    }

    pub fn velocity(&self) -> (f32, f32) {
        self.body.map(|b| (b.vx, b.vy)).unwrap_or((0.0, 0.0))
    }

    pub fn set_velocity(&mut self, vx: f32, vy: f32) {
        if let Some(body) = self.body.as_mut() {
            body.vx = vx;
            body.vy = vy;
        }
    }
}

/// The controlled entity plus the movement keys currently held.
#[derive(Debug, Clone)]
pub struct Player {
    pub entity: Entity2D,
    pub keys: MoveKeys,
    pub active: bool,
}

impl Player {
    pub fn new(entity: Entity2D) -> Self {
        Self {
            entity,
            keys: MoveKeys::default(),
            active: true,
        }
    }
}

/// Straight-line projectile. Not engine-integrated; `advance_bullet` moves it.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BulletState {
    pub x: f32,
    pub y: f32,
    pub rotation: f32,

    pub speed: f32,     // units/ms
    pub direction: f32, // radians, measured from the vertical axis
    pub vx: f32,        // units/ms
    pub vy: f32,        // units/ms

    pub age: f32,      // ms since fired
    pub lifetime: f32, // ms
    pub active: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EntitySnapshot {
    pub x: f32,
    pub y: f32,
    pub rot: f32,
    pub vx: f32,
    pub vy: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BulletSnapshot {
    pub slot: usize,
    pub generation: u32,
    pub x: f32,
    pub y: f32,
    pub rot: f32,
    pub age: f32,
}

impl From<&Entity2D> for EntitySnapshot {
    fn from(e: &Entity2D) -> Self {
        let (vx, vy) = e.velocity();
        Self {
            x: e.x,
            y: e.y,
            rot: e.rotation,
            vx,
            vy,
        }
    }
}

impl From<(BulletId, &BulletState)> for BulletSnapshot {
    fn from((id, b): (BulletId, &BulletState)) -> Self {
        Self {
            slot: id.slot,
            generation: id.generation,
            x: b.x,
            y: b.y,
            rot: b.rotation,
            age: b.age,
        }
    }
}
