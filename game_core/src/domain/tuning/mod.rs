// Gameplay tuning, kept apart from runtime configuration.

pub mod bullet;
pub mod player;
pub mod reticle;
pub mod world;

use bullet::BulletTuning;
use player::PlayerTuning;
use reticle::ReticleTuning;
use world::WorldTuning;

/// Everything a session needs to know about gameplay numbers.
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionTuning {
    pub player: PlayerTuning,
    pub reticle: ReticleTuning,
    pub bullet: BulletTuning,
    pub world: WorldTuning,
}
