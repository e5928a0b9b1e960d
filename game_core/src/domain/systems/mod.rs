// Per-tick motion and aim rules. Pure functions over entity state; no I/O.

pub mod motion;
pub mod projectiles;

pub use motion::{aim_player, constrain_reticle, constrain_reticle_within, constrain_velocity};
pub use projectiles::{advance_bullet, fire};
