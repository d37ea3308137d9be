use glam::Vec2;
use crate::components::body::Body;

/// Clamp `pos` into `[0, max]` and bounce `vel` off whichever edge it crossed.
fn bounce_axis(pos: &mut f32, vel: &mut f32, max: f32, restitution: f32) {
    let max = max.max(0.0);
    if *pos < 0.0 {
        *pos = 0.0;
        *vel = vel.abs() * restitution;
    } else if *pos > max {
        *pos = max;
        *vel = -vel.abs() * restitution;
    }
}

/// Keep a body's bounding box inside the viewport.
///
/// Axes are independent, so a corner hit reflects both components in the
/// same tick. A viewport smaller than the body pins it to 0.
pub fn resolve_walls(body: &mut Body, viewport: Vec2, restitution: f32) {
    let limit = viewport - Vec2::splat(body.diameter());
    let mut pos = body.pos;
    let mut vel = body.velocity();
    bounce_axis(&mut pos.x, &mut vel.x, limit.x, restitution);
    bounce_axis(&mut pos.y, &mut vel.y, limit.y, restitution);
    body.pos = pos;
    // A dragged body has no velocity to bounce.
    if let Some(v) = body.velocity_mut() {
        *v = vel;
    }
}

/// Clamp a body back into the viewport without touching its velocity.
/// Runs after collision separation, which may push bodies past an edge.
pub fn clamp_to_viewport(body: &mut Body, viewport: Vec2) {
    let limit = (viewport - Vec2::splat(body.diameter())).max(Vec2::ZERO);
    body.pos = body.pos.clamp(Vec2::ZERO, limit);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::BodyId;

    fn body_at(pos: Vec2, vel: Vec2) -> Body {
        Body::new(BodyId(1), 100.0, pos).with_velocity(vel)
    }

    #[test]
    fn left_wall_bounce_loses_energy() {
        let mut b = body_at(Vec2::new(-5.0, 300.0), Vec2::new(-3.0, 0.0));
        resolve_walls(&mut b, Vec2::new(1000.0, 800.0), 0.7);
        assert_eq!(b.pos.x, 0.0);
        assert!((b.velocity().x - 2.1).abs() < 1e-6);
    }

    #[test]
    fn far_walls_use_diameter() {
        let mut b = body_at(Vec2::new(950.0, 760.0), Vec2::new(2.0, 1.0));
        resolve_walls(&mut b, Vec2::new(1000.0, 800.0), 0.5);
        assert_eq!(b.pos, Vec2::new(900.0, 700.0));
        assert_eq!(b.velocity(), Vec2::new(-1.0, -0.5));
    }

    #[test]
    fn corner_hit_reflects_both_axes() {
        let mut b = body_at(Vec2::new(-1.0, -2.0), Vec2::new(-4.0, -4.0));
        resolve_walls(&mut b, Vec2::new(1000.0, 800.0), 1.0);
        assert_eq!(b.pos, Vec2::ZERO);
        assert_eq!(b.velocity(), Vec2::new(4.0, 4.0));
    }

    #[test]
    fn tiny_viewport_pins_to_origin() {
        let mut b = body_at(Vec2::new(30.0, 30.0), Vec2::new(1.0, 1.0));
        resolve_walls(&mut b, Vec2::new(50.0, 0.0), 0.7);
        assert_eq!(b.pos, Vec2::ZERO);
    }

    #[test]
    fn clamp_keeps_velocity() {
        let mut b = body_at(Vec2::new(-3.0, 750.0), Vec2::new(-1.0, 2.0));
        clamp_to_viewport(&mut b, Vec2::new(1000.0, 800.0));
        assert_eq!(b.pos, Vec2::new(0.0, 700.0));
        assert_eq!(b.velocity(), Vec2::new(-1.0, 2.0));
    }

    #[test]
    fn dragged_body_is_clamped_without_velocity() {
        let mut b = body_at(Vec2::new(-20.0, 10.0), Vec2::ZERO);
        b.start_drag();
        resolve_walls(&mut b, Vec2::new(1000.0, 800.0), 0.7);
        assert_eq!(b.pos.x, 0.0);
        assert!(b.is_dragging());
    }
}
