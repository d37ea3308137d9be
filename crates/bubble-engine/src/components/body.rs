use glam::Vec2;
use crate::api::types::BodyId;

/// How a body is currently being moved.
///
/// A dragged body's position is owned by the pointer, so it carries no
/// velocity at all. It gets one back only when it is released.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Motion {
    Free { velocity: Vec2 },
    Dragging,
}

/// One simulated bubble.
#[derive(Debug, Clone)]
pub struct Body {
    id: BodyId,
    /// Top-left corner of the bounding box, in px.
    pub pos: Vec2,
    pub motion: Motion,
    radius: f32,
    mass: f32,
    /// Pointer is over the bubble's element.
    pub hovered: bool,
    /// Breathing animation phase, kept in [0, 2π).
    pub phase: f32,
}

impl Body {
    /// Create a free body of the given diameter at `pos`.
    /// Non-positive or non-finite diameters are clamped to 1 px.
    pub fn new(id: BodyId, diameter: f32, pos: Vec2) -> Self {
        let diameter = if diameter.is_finite() && diameter > 0.0 { diameter } else { 1.0 };
        let radius = diameter / 2.0;
        Self {
            id,
            pos,
            motion: Motion::Free { velocity: Vec2::ZERO },
            radius,
            // Simplistic density model: mass tracks radius.
            mass: radius,
            hovered: false,
            phase: 0.0,
        }
    }

    // -- Builder pattern --

    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.motion = Motion::Free { velocity };
        self
    }

    pub fn with_phase(mut self, phase: f32) -> Self {
        self.phase = phase.rem_euclid(std::f32::consts::TAU);
        self
    }

    pub fn id(&self) -> BodyId {
        self.id
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn diameter(&self) -> f32 {
        self.radius * 2.0
    }

    pub fn mass(&self) -> f32 {
        self.mass
    }

    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::splat(self.radius)
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.motion, Motion::Dragging)
    }

    /// Hovered or dragged bubbles are drawn enlarged and on top.
    pub fn is_active(&self) -> bool {
        self.hovered || self.is_dragging()
    }

    /// Current velocity; always zero while dragging.
    pub fn velocity(&self) -> Vec2 {
        match self.motion {
            Motion::Free { velocity } => velocity,
            Motion::Dragging => Vec2::ZERO,
        }
    }

    /// Mutable velocity, `None` while dragging.
    pub fn velocity_mut(&mut self) -> Option<&mut Vec2> {
        match &mut self.motion {
            Motion::Free { velocity } => Some(velocity),
            Motion::Dragging => None,
        }
    }

    pub(crate) fn start_drag(&mut self) {
        self.motion = Motion::Dragging;
    }

    /// Leave the drag with the given launch velocity.
    pub(crate) fn release(&mut self, velocity: Vec2) {
        self.motion = Motion::Free { velocity };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mass_equals_radius() {
        let b = Body::new(BodyId(1), 120.0, Vec2::ZERO);
        assert_eq!(b.radius(), 60.0);
        assert_eq!(b.mass(), b.radius());
        assert_eq!(b.center(), Vec2::new(60.0, 60.0));
    }

    #[test]
    fn degenerate_diameter_stays_positive() {
        for d in [0.0, -10.0, f32::NAN] {
            let b = Body::new(BodyId(1), d, Vec2::ZERO);
            assert!(b.radius() > 0.0);
            assert!(b.mass() > 0.0);
        }
    }

    #[test]
    fn dragging_has_no_velocity() {
        let mut b = Body::new(BodyId(1), 40.0, Vec2::ZERO).with_velocity(Vec2::new(3.0, -2.0));
        b.start_drag();
        assert_eq!(b.velocity(), Vec2::ZERO);
        assert!(b.velocity_mut().is_none());
        b.release(Vec2::new(1.0, 1.0));
        assert!(!b.is_dragging());
        assert_eq!(b.velocity(), Vec2::new(1.0, 1.0));
    }

    #[test]
    fn phase_is_wrapped() {
        let b = Body::new(BodyId(1), 40.0, Vec2::ZERO).with_phase(7.0);
        assert!(b.phase >= 0.0 && b.phase < std::f32::consts::TAU);
    }
}
