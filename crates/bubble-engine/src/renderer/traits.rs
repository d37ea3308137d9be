//! Output contract between the engine and whatever draws the bubbles.
//!
//! The engine never reads from a visual; it only pushes a transform into it
//! once per tick. In the browser that is a DOM element's inline style.

use glam::Vec2;

/// Where and how large one bubble is drawn this tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BubbleTransform {
    /// Top-left translation in px.
    pub pos: Vec2,
    /// Uniform scale around the element's center.
    pub scale: f32,
    /// Stacking order; active bubbles sit above the rest.
    pub z_index: i32,
}

impl BubbleTransform {
    /// CSS `transform` value, e.g. `translate(10px, 20px) scale(1.1)`.
    pub fn css_transform(&self) -> String {
        format!(
            "translate({}px, {}px) scale({})",
            self.pos.x, self.pos.y, self.scale
        )
    }
}

/// A drawable driven by one body.
pub trait VisualHandle {
    fn apply(&mut self, transform: &BubbleTransform);
}

/// Keeps the last transform it was given. Useful headless and in tests.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordedVisual {
    pub last: Option<BubbleTransform>,
    pub writes: u32,
}

impl VisualHandle for RecordedVisual {
    fn apply(&mut self, transform: &BubbleTransform) {
        self.last = Some(*transform);
        self.writes += 1;
    }
}

impl VisualHandle for () {
    fn apply(&mut self, _transform: &BubbleTransform) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_transform_format() {
        let t = BubbleTransform { pos: Vec2::new(12.5, -3.0), scale: 1.1, z_index: 1000 };
        assert_eq!(t.css_transform(), "translate(12.5px, -3px) scale(1.1)");
    }

    #[test]
    fn recorded_visual_counts_writes() {
        let mut v = RecordedVisual::default();
        let t = BubbleTransform { pos: Vec2::ZERO, scale: 1.0, z_index: 1 };
        v.apply(&t);
        v.apply(&t);
        assert_eq!(v.writes, 2);
        assert_eq!(v.last, Some(t));
    }
}
