// Boundary between scenes and the host engine.

use crate::domain::Entity2D;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldBounds {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl WorldBounds {
    pub fn from_origin(width: f32, height: f32) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width,
            height,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameSize {
    pub width: u32,
    pub height: u32,
}

/// What a scene may ask of the host engine.
///
/// Rendering, sprite transforms and asset decoding stay on the engine side; the scene only
/// registers what it needs and hands over bodies for integration once per frame.
pub trait EngineAdapter {
    fn load_image(&mut self, key: &str, path: &str);

    fn load_spritesheet(&mut self, key: &str, path: &str, frame: FrameSize);

    fn set_world_bounds(&mut self, bounds: WorldBounds);

    fn set_camera_zoom(&mut self, zoom: f32);

    /// Centers the camera on a world position.
    fn camera_follow(&mut self, x: f32, y: f32);

    /// Returns whether the lock was granted.
    fn request_pointer_lock(&mut self) -> bool;

    fn release_pointer_lock(&mut self);

    /// Integrates one body over `delta_ms`. Entities without a body are left alone.
    fn step_body(&mut self, entity: &mut Entity2D, delta_ms: f32);
}
