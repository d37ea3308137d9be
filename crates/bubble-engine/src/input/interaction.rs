//! Drag-and-throw state machine: Idle → Dragging(one body) → Idle.
//!
//! The tracker only knows pointer coordinates and which body is held; the
//! engine applies the positions and velocities it hands back.

use glam::Vec2;
use crate::api::types::BodyId;

/// Which pointer drives a drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerSource {
    Mouse,
    /// Platform touch identifier.
    Touch(i32),
}

/// An active drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Drag {
    pub body: BodyId,
    pub source: PointerSource,
    /// Body top-left minus pointer at drag start.
    pub offset: Vec2,
    /// Total pointer distance covered since the drag started.
    pub travel: f32,
}

/// Result of releasing a drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Release {
    pub body: BodyId,
    pub velocity: Vec2,
    pub travel: f32,
}

#[derive(Debug, Clone, Default)]
pub struct PointerTracker {
    current: Vec2,
    previous: Vec2,
    drag: Option<Drag>,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Vec2 {
        self.current
    }

    pub fn previous(&self) -> Vec2 {
        self.previous
    }

    pub fn drag(&self) -> Option<&Drag> {
        self.drag.as_ref()
    }

    pub fn dragged_body(&self) -> Option<BodyId> {
        self.drag.map(|d| d.body)
    }

    /// Start dragging `body`, whose top-left is at `anchor`.
    /// Returns `false` and changes nothing when a drag is already active.
    pub fn begin(&mut self, body: BodyId, anchor: Vec2, source: PointerSource, pointer: Vec2) -> bool {
        if self.drag.is_some() {
            return false;
        }
        // Both samples at the press point, so an immediate release throws nothing.
        self.current = pointer;
        self.previous = pointer;
        self.drag = Some(Drag {
            body,
            source,
            offset: anchor - pointer,
            travel: 0.0,
        });
        true
    }

    /// Record a pointer move. Returns the dragged body and its new top-left
    /// when this source drives the active drag.
    ///
    /// Moves from a source other than the one holding the drag are ignored,
    /// so a second finger cannot steer the bubble.
    pub fn moved(&mut self, source: PointerSource, pointer: Vec2) -> Option<(BodyId, Vec2)> {
        if let Some(drag) = &self.drag {
            if drag.source != source {
                return None;
            }
        }
        self.previous = self.current;
        self.current = pointer;
        let drag = self.drag.as_mut()?;
        drag.travel += (self.current - self.previous).length();
        Some((drag.body, pointer + drag.offset))
    }

    /// End the drag held by `source`, computing the throw velocity from the
    /// last pointer delta.
    pub fn released(&mut self, source: PointerSource, throw_multiplier: f32) -> Option<Release> {
        match self.drag {
            Some(drag) if drag.source == source => {
                self.drag = None;
                Some(Release {
                    body: drag.body,
                    velocity: (self.current - self.previous) * throw_multiplier,
                    travel: drag.travel,
                })
            }
            _ => None,
        }
    }

    /// Drop the drag without throwing, e.g. when its body is cleared away.
    pub fn cancel(&mut self) -> Option<Drag> {
        self.drag.take()
    }
}
