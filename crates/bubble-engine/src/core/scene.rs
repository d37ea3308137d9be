use crate::api::types::BodyId;
use crate::components::body::Body;

/// Body storage: a flat Vec of bodies with their visual handles alongside.
/// Designed for tens of bubbles, so lookups are linear scans.
pub struct BodySet<H> {
    bodies: Vec<Body>,
    handles: Vec<H>,
}

impl<H> BodySet<H> {
    pub fn new() -> Self {
        Self::with_capacity(64)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bodies: Vec::with_capacity(capacity),
            handles: Vec::with_capacity(capacity),
        }
    }

    /// Add a body and the handle it drives.
    pub fn insert(&mut self, body: Body, handle: H) {
        self.bodies.push(body);
        self.handles.push(handle);
    }

    pub fn get(&self, id: BodyId) -> Option<&Body> {
        self.bodies.iter().find(|b| b.id() == id)
    }

    pub fn get_mut(&mut self, id: BodyId) -> Option<&mut Body> {
        self.bodies.iter_mut().find(|b| b.id() == id)
    }

    pub fn handle(&self, id: BodyId) -> Option<&H> {
        let idx = self.bodies.iter().position(|b| b.id() == id)?;
        self.handles.get(idx)
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn bodies_mut(&mut self) -> &mut [Body] {
        &mut self.bodies
    }

    /// Bodies paired with their handles, for the render pass.
    pub fn iter_with_handles_mut(&mut self) -> impl Iterator<Item = (&mut Body, &mut H)> {
        self.bodies.iter_mut().zip(self.handles.iter_mut())
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Drop every body and handle.
    pub fn clear(&mut self) {
        self.bodies.clear();
        self.handles.clear();
    }
}

impl<H> Default for BodySet<H> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn insert_and_get() {
        let mut set = BodySet::new();
        set.insert(Body::new(BodyId(1), 40.0, Vec2::new(10.0, 20.0)), "a");
        set.insert(Body::new(BodyId(2), 40.0, Vec2::ZERO), "b");
        assert_eq!(set.get(BodyId(1)).unwrap().pos, Vec2::new(10.0, 20.0));
        assert_eq!(set.handle(BodyId(2)), Some(&"b"));
        assert!(set.get(BodyId(3)).is_none());
    }

    #[test]
    fn clear_drops_handles_too() {
        let mut set = BodySet::new();
        set.insert(Body::new(BodyId(1), 40.0, Vec2::ZERO), ());
        set.clear();
        assert!(set.is_empty());
        assert_eq!(set.iter_with_handles_mut().count(), 0);
        set.clear();
        assert_eq!(set.len(), 0);
    }
}
