// Engine adapter with no renderer: records scene requests and integrates bodies arcade-style.

use crate::domain::Entity2D;
use crate::interface_adapters::engine::{EngineAdapter, FrameSize, WorldBounds};
use tracing::debug;

#[derive(Debug, Clone, PartialEq)]
pub enum LoadedAsset {
    Image {
        key: String,
        path: String,
    },
    Spritesheet {
        key: String,
        path: String,
        frame: FrameSize,
    },
}

#[derive(Debug)]
pub struct HeadlessEngine {
    assets: Vec<LoadedAsset>,
    world_bounds: Option<WorldBounds>,
    camera_zoom: f32,
    camera_target: Option<(f32, f32)>,
    pointer_locked: bool,
}

impl Default for HeadlessEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl HeadlessEngine {
    pub fn new() -> Self {
        Self {
            assets: Vec::new(),
            world_bounds: None,
            camera_zoom: 1.0,
            camera_target: None,
            pointer_locked: false,
        }
    }

    pub fn assets(&self) -> &[LoadedAsset] {
        &self.assets
    }

    pub fn world_bounds(&self) -> Option<WorldBounds> {
        self.world_bounds
    }

    pub fn camera_zoom(&self) -> f32 {
        self.camera_zoom
    }

    pub fn camera_target(&self) -> Option<(f32, f32)> {
        self.camera_target
    }

    pub fn is_pointer_locked(&self) -> bool {
        self.pointer_locked
    }
}

impl EngineAdapter for HeadlessEngine {
    fn load_image(&mut self, key: &str, path: &str) {
        debug!(key, path, "image registered");
        self.assets.push(LoadedAsset::Image {
            key: key.to_string(),
            path: path.to_string(),
        });
    }

    fn load_spritesheet(&mut self, key: &str, path: &str, frame: FrameSize) {
        debug!(key, path, frame.width, frame.height, "spritesheet registered");
        self.assets.push(LoadedAsset::Spritesheet {
            key: key.to_string(),
            path: path.to_string(),
            frame,
        });
    }

    fn set_world_bounds(&mut self, bounds: WorldBounds) {
        self.world_bounds = Some(bounds);
    }

    fn set_camera_zoom(&mut self, zoom: f32) {
        self.camera_zoom = zoom;
    }

    fn camera_follow(&mut self, x: f32, y: f32) {
        self.camera_target = Some((x, y));
    }

    fn request_pointer_lock(&mut self) -> bool {
        // Nothing to negotiate with; the lock is always granted.
        self.pointer_locked = true;
        true
    }

    fn release_pointer_lock(&mut self) {
        self.pointer_locked = false;
    }

    fn step_body(&mut self, entity: &mut Entity2D, delta_ms: f32) {
        let Some(body) = entity.body.as_mut() else {
            return;
        };

        let dt = delta_ms / 1000.0;
        body.vx = integrate_axis(body.vx, body.ax, body.drag_x, dt);
        body.vy = integrate_axis(body.vy, body.ay, body.drag_y, dt);

        entity.x += body.vx * dt;
        entity.y += body.vy * dt;

        if !body.collide_world_bounds {
            return;
        }
        let Some(bounds) = self.world_bounds else {
            return;
        };

        // Stop dead against the edge (no bounce).
        if entity.x < bounds.x {
            entity.x = bounds.x;
            body.vx = 0.0;
        } else if entity.x > bounds.x + bounds.width {
            entity.x = bounds.x + bounds.width;
            body.vx = 0.0;
        }

        if entity.y < bounds.y {
            entity.y = bounds.y;
            body.vy = 0.0;
        } else if entity.y > bounds.y + bounds.height {
            entity.y = bounds.y + bounds.height;
            body.vy = 0.0;
        }
    }
}

// Acceleration wins over drag; drag only bleeds speed toward zero, never past it.
fn integrate_axis(velocity: f32, acceleration: f32, drag: f32, dt: f32) -> f32 {
    if acceleration != 0.0 {
        return velocity + acceleration * dt;
    }
    if drag <= 0.0 {
        return velocity;
    }

    let drag = drag * dt;
    if velocity - drag > 0.0 {
        velocity - drag
    } else if velocity + drag < 0.0 {
        velocity + drag
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Body;

    const EPS: f32 = 1e-3;

    fn body(vx: f32, vy: f32, ax: f32, ay: f32, drag: f32) -> Entity2D {
        Entity2D {
            x: 100.0,
            y: 100.0,
            rotation: 0.0,
            body: Some(Body {
                vx,
                vy,
                ax,
                ay,
                drag_x: drag,
                drag_y: drag,
                collide_world_bounds: true,
            }),
        }
    }

    #[test]
    fn acceleration_builds_velocity_then_moves_the_entity() {
        let mut engine = HeadlessEngine::new();
        let mut e = body(0.0, 0.0, 800.0, -800.0, 500.0);

        engine.step_body(&mut e, 500.0);

        assert_eq!(e.velocity(), (400.0, -400.0));
        assert!((e.x - 300.0).abs() < EPS);
        assert!((e.y + 100.0).abs() < EPS);
    }

    #[test]
    fn drag_slows_an_unaccelerated_axis_without_reversing_it() {
        let mut engine = HeadlessEngine::new();
        let mut e = body(100.0, -10.0, 0.0, 0.0, 500.0);

        engine.step_body(&mut e, 100.0);

        let (vx, vy) = e.velocity();
        assert!((vx - 50.0).abs() < EPS);
        assert_eq!(vy, 0.0);
    }

    #[test]
    fn world_bounds_clamp_position_and_stop_the_axis() {
        let mut engine = HeadlessEngine::new();
        engine.set_world_bounds(WorldBounds::from_origin(200.0, 200.0));
        let mut e = body(1000.0, -1000.0, 0.0, 0.0, 0.0);

        engine.step_body(&mut e, 1000.0);

        assert_eq!((e.x, e.y), (200.0, 0.0));
        assert_eq!(e.velocity(), (0.0, 0.0));
    }

    #[test]
    fn entity_without_body_is_not_integrated() {
        let mut engine = HeadlessEngine::new();
        let mut e = Entity2D::without_body(1.0, 2.0);

        engine.step_body(&mut e, 1000.0);

        assert_eq!(e, Entity2D::without_body(1.0, 2.0));
    }

    #[test]
    fn pointer_lock_round_trip() {
        let mut engine = HeadlessEngine::new();
        assert!(!engine.is_pointer_locked());

        assert!(engine.request_pointer_lock());
        assert!(engine.is_pointer_locked());

        engine.release_pointer_lock();
        assert!(!engine.is_pointer_locked());
    }
}
