use glam::Vec2;

/// Supplies the current viewport size in px.
/// Queried every tick, so resizes take effect on the next wall check.
pub trait Viewport {
    fn size(&self) -> Vec2;
}

/// A viewport of constant size, for headless use and tests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedViewport(pub Vec2);

impl FixedViewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self(Vec2::new(width, height))
    }
}

impl Viewport for FixedViewport {
    fn size(&self) -> Vec2 {
        self.0
    }
}

impl<V: Viewport + ?Sized> Viewport for &V {
    fn size(&self) -> Vec2 {
        (**self).size()
    }
}
