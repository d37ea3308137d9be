use glam::{Vec2, Vec3};
use crate::api::config::{EngineConfig, Tuning};
use crate::api::sizing::diameter_from_hint;
use crate::api::types::{BodyId, BubbleEvent};
use crate::components::body::Body;
use crate::core::rng::Rng;
use crate::core::scene::BodySet;
use crate::core::time::TickSource;
use crate::core::viewport::Viewport;
use crate::input::interaction::{PointerSource, PointerTracker};
use crate::input::motion::ShakeDetector;
use crate::input::queue::{InputEvent, InputQueue};
use crate::renderer::traits::VisualHandle;
use crate::systems::collision::resolve_collisions;
use crate::systems::integrate::integrate;
use crate::systems::render::{initial_transform, render_bodies};
use crate::systems::walls::clamp_to_viewport;

/// The bubble simulation.
///
/// Owned by its caller; nothing here is global. The caller supplies the
/// viewport and one visual handle per body, pushes input intents, and drives
/// ticks either one at a time with [`BubbleEngine::step`] or per display
/// frame with [`BubbleEngine::advance`].
pub struct BubbleEngine<V: Viewport, H: VisualHandle> {
    config: EngineConfig,
    viewport: V,
    bodies: BodySet<H>,
    pointer: PointerTracker,
    shake: ShakeDetector,
    input: InputQueue,
    rng: Rng,
    events: Vec<BubbleEvent>,
    next_id: u32,
    ticks: u64,
}

impl<V: Viewport, H: VisualHandle> BubbleEngine<V, H> {
    pub fn new(viewport: V, config: EngineConfig) -> Self {
        Self {
            rng: Rng::new(config.seed),
            config,
            viewport,
            bodies: BodySet::new(),
            pointer: PointerTracker::new(),
            shake: ShakeDetector::new(),
            input: InputQueue::new(),
            events: Vec::new(),
            next_id: 1,
            ticks: 0,
        }
    }

    // -- Lifecycle --

    /// Register a bubble. `size_hint` is the element's CSS width
    /// (e.g. `"140px"`); missing or malformed hints use the default diameter.
    ///
    /// The body spawns at a random spot inside the padded viewport with a
    /// small random velocity and takes part in the next tick.
    pub fn add(&mut self, mut handle: H, size_hint: Option<&str>) -> BodyId {
        let diameter = diameter_from_hint(size_hint, self.config.default_diameter);
        let padding = self.config.spawn_padding;
        let safe = (self.viewport.size() - Vec2::splat(diameter + padding * 2.0)).max(Vec2::ZERO);
        let pos = Vec2::new(
            self.rng.range(padding, safe.x),
            self.rng.range(padding, safe.y),
        );
        let spread = self.config.tuning.initial_speed;
        let velocity = Vec2::new(self.rng.centered(spread), self.rng.centered(spread));
        let phase = self.rng.angle();

        let id = BodyId(self.next_id);
        self.next_id += 1;

        handle.apply(&initial_transform(pos, &self.config.tuning));
        let body = Body::new(id, diameter, pos)
            .with_velocity(velocity)
            .with_phase(phase);
        self.bodies.insert(body, handle);
        log::debug!("added bubble {:?} ({}px) at {:?}", id, diameter, pos);
        id
    }

    /// Remove every body. Any drag in progress and any queued intent aimed
    /// at a removed body are dropped. Ids are not reused afterwards.
    pub fn clear(&mut self) {
        if self.bodies.is_empty() && self.pointer.drag().is_none() {
            return;
        }
        log::debug!("clearing {} bubbles", self.bodies.len());
        self.bodies.clear();
        self.pointer.cancel();
        self.input.retain_bodies(|_| false);
    }

    // -- Input --

    /// Queue an intent for the next tick.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Apply an intent right away, between ticks.
    pub fn apply(&mut self, event: InputEvent) {
        match event {
            InputEvent::PointerDown { body, pos } => self.begin_drag(body, PointerSource::Mouse, pos),
            InputEvent::TouchStart { body, touch, pos } => {
                self.begin_drag(body, PointerSource::Touch(touch), pos)
            }
            InputEvent::PointerMove { pos } => self.move_pointer(PointerSource::Mouse, pos),
            InputEvent::TouchMove { touch, pos } => self.move_pointer(PointerSource::Touch(touch), pos),
            InputEvent::PointerUp => self.end_drag(PointerSource::Mouse),
            InputEvent::TouchEnd { touch } => self.end_drag(PointerSource::Touch(touch)),
            InputEvent::HoverEnter { body } => self.set_hovered(body, true),
            InputEvent::HoverLeave { body } => self.set_hovered(body, false),
            InputEvent::DeviceMotion { accel, time_ms } => self.device_motion(accel, time_ms),
        }
    }

    fn begin_drag(&mut self, id: BodyId, source: PointerSource, pointer: Vec2) {
        let Some(body) = self.bodies.get_mut(id) else {
            log::trace!("drag start on unknown bubble {:?}", id);
            return;
        };
        if self.pointer.begin(id, body.pos, source, pointer) {
            body.start_drag();
        } else {
            log::trace!("bubble {:?} already dragged, ignoring {:?}", self.pointer.dragged_body(), id);
        }
    }

    fn move_pointer(&mut self, source: PointerSource, pointer: Vec2) {
        let Some((id, pos)) = self.pointer.moved(source, pointer) else {
            return;
        };
        if let Some(body) = self.bodies.get_mut(id) {
            body.pos = pos;
        }
    }

    fn end_drag(&mut self, source: PointerSource) {
        let Some(release) = self.pointer.released(source, self.config.tuning.throw_multiplier) else {
            return;
        };
        let Some(body) = self.bodies.get_mut(release.body) else {
            return;
        };
        body.release(release.velocity);
        let event = if release.travel < self.config.tuning.tap_slop {
            BubbleEvent::Tapped(release.body)
        } else {
            BubbleEvent::Thrown {
                id: release.body,
                speed: release.velocity.length(),
            }
        };
        self.events.push(event);
    }

    fn set_hovered(&mut self, id: BodyId, hovered: bool) {
        match self.bodies.get_mut(id) {
            Some(body) => body.hovered = hovered,
            None => log::trace!("hover change on unknown bubble {:?}", id),
        }
    }

    fn device_motion(&mut self, accel: Vec3, time_ms: f64) {
        let Some(strength) = self.shake.sample(accel, time_ms, &self.config.tuning) else {
            return;
        };
        log::debug!("shake detected (strength {:.1})", strength);
        let kick = self.config.tuning.shake_impulse;
        for body in self.bodies.bodies_mut() {
            if let Some(v) = body.velocity_mut() {
                *v += self.rng.direction(kick);
            }
        }
        self.events.push(BubbleEvent::Shaken);
    }

    // -- Simulation --

    /// Run one tick: queued input, forces and integration with wall bounces,
    /// pairwise collisions, then the render pass.
    pub fn step(&mut self) {
        for event in self.input.drain() {
            self.apply(event);
        }
        self.ticks += 1;
        if self.bodies.is_empty() {
            return;
        }

        let viewport = self.viewport.size();
        let tuning = &self.config.tuning;
        integrate(self.bodies.bodies_mut(), viewport, tuning, &mut self.rng);
        resolve_collisions(self.bodies.bodies_mut(), tuning);
        for body in self.bodies.bodies_mut() {
            clamp_to_viewport(body, viewport);
        }
        render_bodies(self.bodies.iter_with_handles_mut(), tuning);
    }

    /// Run as many ticks as `source` allots for a frame of `frame_dt` seconds.
    /// Returns the number of ticks run.
    pub fn advance(&mut self, frame_dt: f32, source: &mut dyn TickSource) -> u32 {
        let ticks = source.ticks(frame_dt);
        for _ in 0..ticks {
            self.step();
        }
        ticks
    }

    // -- Accessors --

    pub fn body(&self, id: BodyId) -> Option<&Body> {
        self.bodies.get(id)
    }

    pub fn bodies(&self) -> &[Body] {
        self.bodies.bodies()
    }

    pub fn handle(&self, id: BodyId) -> Option<&H> {
        self.bodies.handle(id)
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn dragged_body(&self) -> Option<BodyId> {
        self.pointer.dragged_body()
    }

    /// Events emitted since the last [`BubbleEngine::clear_events`].
    pub fn events(&self) -> &[BubbleEvent] {
        &self.events
    }

    pub fn clear_events(&mut self) {
        self.events.clear();
    }

    pub fn pending_input(&self) -> usize {
        self.input.len()
    }

    /// Ticks run since construction.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn tuning(&self) -> &Tuning {
        &self.config.tuning
    }

    pub fn viewport(&self) -> &V {
        &self.viewport
    }
}
