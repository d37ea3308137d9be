use glam::Vec2;
use crate::api::config::Tuning;
use crate::components::body::Body;
use crate::core::rng::Rng;
use crate::systems::walls::resolve_walls;

/// Force model for one free body: hover braking, or drift plus smart
/// friction plus the speed cap.
pub fn apply_forces(velocity: &mut Vec2, hovered: bool, tuning: &Tuning, rng: &mut Rng) {
    if hovered {
        *velocity *= tuning.hover_damping;
        if velocity.x.abs() < tuning.stop_epsilon {
            velocity.x = 0.0;
        }
        if velocity.y.abs() < tuning.stop_epsilon {
            velocity.y = 0.0;
        }
        return;
    }

    // Random walk
    velocity.x += rng.centered(tuning.float_force);
    velocity.y += rng.centered(tuning.float_force);

    let speed = velocity.length();
    if speed > tuning.fast_speed {
        *velocity *= tuning.friction;
    } else {
        *velocity *= tuning.ambient_friction;
        if speed < tuning.min_speed {
            *velocity += rng.direction(tuning.float_boost);
        }
    }

    let speed = velocity.length();
    if speed > tuning.max_speed {
        *velocity *= tuning.max_speed / speed;
    }
}

/// Force and integration pass: forces, explicit Euler step, walls.
/// Dragged bodies are skipped; the pointer owns their position.
pub fn integrate(bodies: &mut [Body], viewport: Vec2, tuning: &Tuning, rng: &mut Rng) {
    for body in bodies.iter_mut() {
        let hovered = body.hovered;
        let Some(velocity) = body.velocity_mut() else {
            continue;
        };
        apply_forces(velocity, hovered, tuning, rng);
        let step = *velocity;
        body.pos += step;
        resolve_walls(body, viewport, tuning.restitution);
    }
}
