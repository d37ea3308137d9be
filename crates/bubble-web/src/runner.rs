use bubble_engine::{
    BodyId, BubbleEngine, EngineConfig, EventRecord, EveryFrame, FixedTimestep,
    InputEvent, TickSource, Viewport, VisualHandle,
};

/// Wires the engine to a display loop.
///
/// The page creates one runner (held in a `thread_local!` by the exports in
/// `lib.rs`, because wasm-bindgen cannot export generic structs), forwards
/// DOM events with [`BubbleRunner::push_input`], and calls
/// [`BubbleRunner::tick`] from `requestAnimationFrame`.
pub struct BubbleRunner<V: Viewport, H: VisualHandle> {
    engine: BubbleEngine<V, H>,
    clock: Box<dyn TickSource>,
    /// Flat copy of this frame's events for pointer reads from JS.
    event_buffer: Vec<EventRecord>,
}

impl<V: Viewport, H: VisualHandle> BubbleRunner<V, H> {
    pub fn new(viewport: V, config: EngineConfig) -> Self {
        let clock: Box<dyn TickSource> = match config.fixed_dt {
            Some(dt) => Box::new(FixedTimestep::with_max_ticks(dt, config.max_ticks_per_frame)),
            None => Box::new(EveryFrame),
        };
        Self {
            engine: BubbleEngine::new(viewport, config),
            clock,
            event_buffer: Vec::with_capacity(16),
        }
    }

    pub fn add(&mut self, handle: H, size_hint: Option<&str>) -> BodyId {
        self.engine.add(handle, size_hint)
    }

    pub fn clear(&mut self) {
        self.engine.clear();
    }

    pub fn push_input(&mut self, event: InputEvent) {
        self.engine.push_input(event);
    }

    /// Run one display frame and repack the event buffer.
    pub fn tick(&mut self, dt: f32) {
        self.engine.clear_events();
        self.engine.advance(dt, self.clock.as_mut());

        self.event_buffer.clear();
        self.event_buffer
            .extend(self.engine.events().iter().map(|e| e.to_record()));
    }

    pub fn engine(&self) -> &BubbleEngine<V, H> {
        &self.engine
    }

    pub fn body_count(&self) -> u32 {
        self.engine.len() as u32
    }

    // ---- Pointer accessors for direct memory reads ----

    pub fn events_ptr(&self) -> *const f32 {
        self.event_buffer.as_ptr() as *const f32
    }

    /// Number of events (each `EventRecord::FLOATS` floats) this frame.
    pub fn events_len(&self) -> u32 {
        self.event_buffer.len() as u32
    }

    pub fn events(&self) -> &[EventRecord] {
        &self.event_buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bubble_engine::{BubbleEvent, FixedViewport, RecordedVisual};
    use glam::Vec2;

    fn runner(config: EngineConfig) -> BubbleRunner<FixedViewport, RecordedVisual> {
        BubbleRunner::new(FixedViewport::new(1000.0, 800.0), config)
    }

    #[test]
    fn tick_renders_every_bubble() {
        let mut r = runner(EngineConfig::default());
        let a = r.add(RecordedVisual::default(), Some("140px"));
        let b = r.add(RecordedVisual::default(), Some("180px"));
        r.tick(1.0 / 60.0);
        assert_eq!(r.engine().handle(a).unwrap().writes, 2);
        assert_eq!(r.engine().handle(b).unwrap().writes, 2);
        assert_eq!(r.body_count(), 2);
    }

    #[test]
    fn events_last_one_frame() {
        let mut r = runner(EngineConfig::default());
        let id = r.add(RecordedVisual::default(), Some("140px"));
        r.push_input(InputEvent::PointerDown { body: id, pos: Vec2::new(50.0, 50.0) });
        r.push_input(InputEvent::PointerUp);
        r.tick(1.0 / 60.0);
        assert_eq!(r.events_len(), 1);
        assert_eq!(r.events()[0], BubbleEvent::Tapped(id).to_record());

        r.tick(1.0 / 60.0);
        assert_eq!(r.events_len(), 0);
    }

    #[test]
    fn fixed_rate_config_uses_accumulator() {
        let config = EngineConfig { fixed_dt: Some(1.0 / 60.0), ..EngineConfig::default() };
        let mut r = runner(config);
        r.add(RecordedVisual::default(), None);
        r.tick(0.004);
        assert_eq!(r.engine().ticks(), 0);
        r.tick(0.02);
        assert_eq!(r.engine().ticks(), 1);
    }

    #[test]
    fn clear_then_tick_is_empty() {
        let mut r = runner(EngineConfig::default());
        r.add(RecordedVisual::default(), None);
        r.add(RecordedVisual::default(), None);
        r.clear();
        r.tick(1.0 / 60.0);
        assert_eq!(r.body_count(), 0);
        assert_eq!(r.events_len(), 0);
    }
}
