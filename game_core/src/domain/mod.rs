// Domain layer: core session types and rules.

pub mod input;
pub mod pool;
pub mod state;
pub mod systems;
pub mod tuning;

pub use input::{InputEvent, Key, MoveKeys};
pub use pool::{BulletId, BulletPool};
pub use state::{Body, BulletSnapshot, BulletState, Entity2D, EntitySnapshot, Player};
