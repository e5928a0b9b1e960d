// Gameplay tuning for bullets.

/// Milliseconds a bullet stays active after being fired.
pub const BULLET_LIFETIME_MS: f32 = 1800.0;

#[derive(Debug, Clone, Copy)]
pub struct BulletTuning {
    /// Bullet speed in units per millisecond.
    pub speed: f32,

    /// Lifetime in milliseconds before the bullet returns to the pool.
    pub lifetime_ms: f32,

    /// Number of bullet slots preallocated per session.
    pub pool_capacity: usize,
}

impl Default for BulletTuning {
    fn default() -> Self {
        Self {
            speed: 1.0,
            lifetime_ms: BULLET_LIFETIME_MS,
            pool_capacity: 64,
        }
    }
}
