// Gameplay tuning for the player sprite.
// Keep this separate from runtime configuration (tick rates, channel sizes, etc.).

#[derive(Debug, Clone, Copy)]
pub struct PlayerTuning {
    /// Speed cap enforced every tick, in units per second.
    pub max_velocity: f32,

    /// Per-axis acceleration while a movement key is held, in units per second squared.
    pub acceleration: f32,

    /// Linear drag applied on an axis with no acceleration, in units per second squared.
    pub drag: f32,

    /// Spawn position in world space.
    pub spawn_x: f32,
    pub spawn_y: f32,

    /// Spritesheet frame size in pixels.
    pub frame_width: u32,
    pub frame_height: u32,
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self {
            max_velocity: 500.0,
            acceleration: 800.0,
            drag: 500.0,
            spawn_x: 800.0,
            spawn_y: 600.0,
            frame_width: 66,
            frame_height: 60,
        }
    }
}
