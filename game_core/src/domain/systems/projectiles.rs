use crate::domain::state::{BulletState, Entity2D};
use crate::domain::tuning::bullet::BULLET_LIFETIME_MS;

/// Fires a bullet from `shooter` toward `target`.
///
/// The direction is measured from the vertical axis as `atan(dx / dy)`; this is not the
/// `atan2` convention used for aiming, and trajectories depend on it. When shooter and
/// target share a y coordinate the ratio divides by zero. A non-zero dx still yields a
/// horizontal shot, coincident points yield NaN velocity, which is propagated as-is.
pub fn fire(shooter: &Entity2D, target: &Entity2D, bullet_speed: f32) -> BulletState {
    let direction = ((target.x - shooter.x) / (target.y - shooter.y)).atan();

    // Flip when the target is above so travel still points at it.
    let (vx, vy) = if target.y >= shooter.y {
        (bullet_speed * direction.sin(), bullet_speed * direction.cos())
    } else {
        (-bullet_speed * direction.sin(), -bullet_speed * direction.cos())
    };

    BulletState {
        x: shooter.x,
        y: shooter.y,
        // Visual facing follows the shooter, not the travel direction.
        rotation: shooter.rotation,
        speed: bullet_speed,
        direction,
        vx,
        vy,
        age: 0.0,
        lifetime: BULLET_LIFETIME_MS,
        active: true,
    }
}

/// Moves an active bullet by `delta_ms` and ages it.
///
/// Returns whether the bullet is still active. A bullet whose age reaches its lifetime is
/// deactivated on that call and stays inert until fired again.
pub fn advance_bullet(b: &mut BulletState, delta_ms: f32) -> bool {
    if !b.active {
        return false;
    }

    b.x += b.vx * delta_ms;
    b.y += b.vy * delta_ms;
    b.age += delta_ms;

    if b.age >= b.lifetime {
        b.active = false;
    }

    b.active
}
