use glam::{Vec2, Vec3};
use crate::api::types::BodyId;

/// Input intents the engine understands.
///
/// Element-level DOM events (`mousedown`, `touchstart`, `mouseenter`,
/// `mouseleave`) carry the id of the bubble they fired on; document-level
/// events (moves, releases, device motion) do not.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Mouse button pressed on a bubble, at client coordinates `pos`.
    PointerDown { body: BodyId, pos: Vec2 },
    /// Mouse moved anywhere in the document.
    PointerMove { pos: Vec2 },
    /// Mouse button released anywhere in the document.
    PointerUp,
    /// A touch began on a bubble. `touch` is the platform touch identifier.
    TouchStart { body: BodyId, touch: i32, pos: Vec2 },
    TouchMove { touch: i32, pos: Vec2 },
    TouchEnd { touch: i32 },
    HoverEnter { body: BodyId },
    HoverLeave { body: BodyId },
    /// Acceleration including gravity, with the event timestamp in ms.
    DeviceMotion { accel: Vec3, time_ms: f64 },
}

impl InputEvent {
    /// The body this intent is addressed to, if any.
    pub fn body(&self) -> Option<BodyId> {
        match *self {
            InputEvent::PointerDown { body, .. }
            | InputEvent::TouchStart { body, .. }
            | InputEvent::HoverEnter { body }
            | InputEvent::HoverLeave { body } => Some(body),
            _ => None,
        }
    }
}

/// A queue of input intents.
/// JS pushes events as they arrive; the engine drains them at the start of each tick.
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(32),
        }
    }

    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Take all pending events, leaving the queue empty.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    /// Forget queued intents addressed to bodies that no longer exist.
    pub fn retain_bodies(&mut self, mut exists: impl FnMut(BodyId) -> bool) {
        self.events.retain(|e| e.body().map_or(true, &mut exists));
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_drain() {
        let mut q = InputQueue::new();
        q.push(InputEvent::PointerDown { body: BodyId(1), pos: Vec2::new(10.0, 20.0) });
        q.push(InputEvent::PointerUp);
        assert_eq!(q.len(), 2);
        let events = q.drain();
        assert_eq!(events.len(), 2);
        assert!(q.is_empty());
    }

    #[test]
    fn retain_bodies_keeps_untargeted_events() {
        let mut q = InputQueue::new();
        q.push(InputEvent::HoverEnter { body: BodyId(3) });
        q.push(InputEvent::PointerMove { pos: Vec2::ONE });
        q.push(InputEvent::HoverLeave { body: BodyId(4) });
        q.retain_bodies(|id| id == BodyId(4));
        let events = q.drain();
        assert_eq!(
            events,
            vec![
                InputEvent::PointerMove { pos: Vec2::ONE },
                InputEvent::HoverLeave { body: BodyId(4) },
            ]
        );
    }
}
