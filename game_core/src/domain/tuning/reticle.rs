// Gameplay tuning for the aim reticle.

/// Largest horizontal offset the reticle may have from the player.
pub const RETICLE_MAX_OFFSET_X: f32 = 800.0;
/// Largest vertical offset the reticle may have from the player.
pub const RETICLE_MAX_OFFSET_Y: f32 = 600.0;

#[derive(Debug, Clone, Copy)]
pub struct ReticleTuning {
    pub max_offset_x: f32,
    pub max_offset_y: f32,

    pub spawn_x: f32,
    pub spawn_y: f32,
}

impl Default for ReticleTuning {
    fn default() -> Self {
        Self {
            max_offset_x: RETICLE_MAX_OFFSET_X,
            max_offset_y: RETICLE_MAX_OFFSET_Y,
            spawn_x: 800.0,
            spawn_y: 700.0,
        }
    }
}
