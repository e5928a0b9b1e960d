use crate::domain::state::Entity2D;
use crate::domain::tuning::reticle::{RETICLE_MAX_OFFSET_X, RETICLE_MAX_OFFSET_Y};

/// Rescales the entity's velocity to `max_velocity` when it is faster than that.
///
/// Entities without a body are left untouched. A speed exactly at the cap is not rescaled.
pub fn constrain_velocity(e: &mut Entity2D, max_velocity: f32) {
    let Some(body) = e.body.as_mut() else {
        return;
    };

    let (vx, vy) = (body.vx, body.vy);
    let curr_velocity_sq = vx * vx + vy * vy;

    if curr_velocity_sq > max_velocity * max_velocity {
        let angle = vy.atan2(vx);
        body.vx = angle.cos() * max_velocity;
        body.vy = angle.sin() * max_velocity;
    }
}

/// Keeps the reticle inside the default on-screen window around the player.
pub fn constrain_reticle(reticle: &mut Entity2D, player: &Entity2D) {
    constrain_reticle_within(reticle, player, RETICLE_MAX_OFFSET_X, RETICLE_MAX_OFFSET_Y);
}

/// Per-axis rectangular clamp of the reticle to `player ± (max_dx, max_dy)`.
pub fn constrain_reticle_within(
    reticle: &mut Entity2D,
    player: &Entity2D,
    max_dx: f32,
    max_dy: f32,
) {
    let dist_x = reticle.x - player.x;
    let dist_y = reticle.y - player.y;

    if dist_x > max_dx {
        reticle.x = player.x + max_dx;
    } else if dist_x < -max_dx {
        reticle.x = player.x - max_dx;
    }

    if dist_y > max_dy {
        reticle.y = player.y + max_dy;
    } else if dist_y < -max_dy {
        reticle.y = player.y - max_dy;
    }
}

/// World-space angle from the player to the reticle (`atan2(dy, dx)`).
pub fn aim_player(player: &Entity2D, reticle: &Entity2D) -> f32 {
    (reticle.y - player.y).atan2(reticle.x - player.x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    const EPS: f32 = 1e-3;

    fn moving(vx: f32, vy: f32) -> Entity2D {
        let mut e = Entity2D::with_body(0.0, 0.0);
        e.set_velocity(vx, vy);
        e
    }

    #[test]
    fn velocity_under_the_cap_is_unchanged() {
        for (vx, vy) in [(0.0, 0.0), (100.0, -200.0), (-499.0, 0.0), (250.0, 250.0)] {
            let mut e = moving(vx, vy);
            constrain_velocity(&mut e, 500.0);
            assert_eq!(e.velocity(), (vx, vy));
        }
    }

    #[test]
    fn velocity_exactly_at_the_cap_is_not_rescaled() {
        let mut e = moving(300.0, 400.0);
        constrain_velocity(&mut e, 500.0);
        assert_eq!(e.velocity(), (300.0, 400.0));
    }

    #[test]
    fn diagonal_velocity_over_the_cap_is_rescaled_to_the_cap() {
        let mut e = moving(400.0, 400.0);
        constrain_velocity(&mut e, 500.0);

        let (vx, vy) = e.velocity();
        assert!((vx - 353.553).abs() < EPS);
        assert!((vy - 353.553).abs() < EPS);
        assert!(((vx * vx + vy * vy).sqrt() - 500.0).abs() < EPS);
    }

    #[test]
    fn rescaling_keeps_the_direction() {
        let cases: [(f32, f32); 4] = [(900.0, -10.0), (-600.0, -800.0), (0.0, 1200.0), (-3000.0, 5.0)];
        for (vx, vy) in cases {
            let before = vy.atan2(vx);
            let mut e = moving(vx, vy);
            constrain_velocity(&mut e, 500.0);

            let (nvx, nvy) = e.velocity();
            assert!((nvy.atan2(nvx) - before).abs() < EPS);
            assert!(((nvx * nvx + nvy * nvy) - 250_000.0).abs() < 1.0);
        }
    }

    #[test]
    fn entity_without_body_is_ignored() {
        let mut e = Entity2D::without_body(5.0, 6.0);
        constrain_velocity(&mut e, 1.0);
        assert_eq!(e, Entity2D::without_body(5.0, 6.0));
    }

    #[test]
    fn reticle_far_right_is_clamped_to_the_horizontal_bound() {
        let player = Entity2D::with_body(800.0, 600.0);
        let mut reticle = Entity2D::with_body(2000.0, 600.0);

        constrain_reticle(&mut reticle, &player);

        assert_eq!(reticle.x, 1600.0);
        assert_eq!(reticle.y, 600.0);
    }

    #[test]
    fn reticle_is_clamped_on_each_side_independently() {
        let player = Entity2D::with_body(0.0, 0.0);

        let mut reticle = Entity2D::with_body(-900.0, 700.0);
        constrain_reticle(&mut reticle, &player);
        assert_eq!((reticle.x, reticle.y), (-800.0, 600.0));

        let mut reticle = Entity2D::with_body(10.0, -601.0);
        constrain_reticle(&mut reticle, &player);
        assert_eq!((reticle.x, reticle.y), (10.0, -600.0));
    }

    #[test]
    fn reticle_inside_the_window_is_untouched() {
        let player = Entity2D::with_body(100.0, 100.0);
        let mut reticle = Entity2D::with_body(900.0, -500.0);

        constrain_reticle(&mut reticle, &player);

        assert_eq!((reticle.x, reticle.y), (900.0, -500.0));
    }

    #[test]
    fn reticle_clamp_is_idempotent() {
        let player = Entity2D::with_body(123.25, -47.5);
        let mut once = Entity2D::with_body(5000.0, -5000.0);
        constrain_reticle(&mut once, &player);

        let mut twice = once;
        constrain_reticle(&mut twice, &player);

        assert_eq!(once, twice);
        assert_eq!((once.x, once.y), (123.25 + 800.0, -47.5 - 600.0));
    }

    #[test]
    fn custom_window_is_respected() {
        let player = Entity2D::with_body(0.0, 0.0);
        let mut reticle = Entity2D::with_body(50.0, 50.0);

        constrain_reticle_within(&mut reticle, &player, 10.0, 20.0);

        assert_eq!((reticle.x, reticle.y), (10.0, 20.0));
    }

    #[test]
    fn aim_uses_standard_atan2_convention() {
        let player = Entity2D::with_body(10.0, 10.0);

        let right = Entity2D::with_body(20.0, 10.0);
        let below = Entity2D::with_body(10.0, 20.0);
        let left = Entity2D::with_body(0.0, 10.0);

        assert!(aim_player(&player, &right).abs() < EPS);
        assert!((aim_player(&player, &below) - FRAC_PI_2).abs() < EPS);
        assert!((aim_player(&player, &left) - PI).abs() < EPS);
    }
}
