use std::f32::consts::TAU;
use glam::Vec2;
use crate::api::config::Tuning;
use crate::components::body::Body;
use crate::renderer::traits::{BubbleTransform, VisualHandle};

/// Advance the breathing phase, wrapping into [0, 2π).
pub fn advance_phase(body: &mut Body, tuning: &Tuning) {
    body.phase = (body.phase + tuning.breathing_step).rem_euclid(TAU);
}

/// Transform for one body: enlarged and raised while active, otherwise a
/// gentle sinusoidal pulse around 1.0.
pub fn bubble_transform(body: &Body, tuning: &Tuning) -> BubbleTransform {
    let (scale, z_index) = if body.is_active() {
        (tuning.active_scale, tuning.z_active)
    } else {
        (1.0 + body.phase.sin() * tuning.breathing_amplitude, tuning.z_base)
    };
    BubbleTransform {
        pos: body.pos,
        scale,
        z_index,
    }
}

/// Render pass: breathe every body and push its transform to its handle.
pub fn render_bodies<'a, H: VisualHandle + 'a>(
    bodies: impl Iterator<Item = (&'a mut Body, &'a mut H)>,
    tuning: &Tuning,
) {
    for (body, handle) in bodies {
        advance_phase(body, tuning);
        handle.apply(&bubble_transform(body, tuning));
    }
}

/// Placeholder transform for a body that has not been rendered yet.
pub fn initial_transform(pos: Vec2, tuning: &Tuning) -> BubbleTransform {
    BubbleTransform {
        pos,
        scale: 1.0,
        z_index: tuning.z_base,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::BodyId;
    use crate::renderer::traits::RecordedVisual;

    #[test]
    fn idle_bubbles_breathe_gently() {
        let tuning = Tuning::default();
        let mut b = Body::new(BodyId(1), 100.0, Vec2::new(5.0, 6.0));
        for _ in 0..500 {
            advance_phase(&mut b, &tuning);
            let t = bubble_transform(&b, &tuning);
            assert!((t.scale - 1.0).abs() <= tuning.breathing_amplitude + 1e-6);
            assert_eq!(t.z_index, tuning.z_base);
            assert!(b.phase >= 0.0 && b.phase < TAU);
        }
    }

    #[test]
    fn active_bubbles_are_enlarged_and_on_top() {
        let tuning = Tuning::default();
        let mut b = Body::new(BodyId(1), 100.0, Vec2::ZERO);
        b.hovered = true;
        let t = bubble_transform(&b, &tuning);
        assert_eq!((t.scale, t.z_index), (1.1, 1000));

        b.hovered = false;
        b.start_drag();
        let t = bubble_transform(&b, &tuning);
        assert_eq!((t.scale, t.z_index), (1.1, 1000));
    }

    #[test]
    fn render_writes_every_handle() {
        let tuning = Tuning::default();
        let mut bodies = vec![
            Body::new(BodyId(1), 100.0, Vec2::new(1.0, 2.0)),
            Body::new(BodyId(2), 100.0, Vec2::new(3.0, 4.0)),
        ];
        let mut handles = vec![RecordedVisual::default(), RecordedVisual::default()];
        render_bodies(bodies.iter_mut().zip(handles.iter_mut()), &tuning);
        assert_eq!(handles[1].last.unwrap().pos, Vec2::new(3.0, 4.0));
        assert!((bodies[0].phase - tuning.breathing_step).abs() < 1e-6);
    }
}
