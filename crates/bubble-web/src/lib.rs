//! WASM bridge for the bubble view.
//!
//! The page owns the DOM and the event listeners; this crate owns the
//! simulation. Typical wiring on the JS side:
//!
//! ```text
//! bubbles_init();                       // once
//! bubbles_clear();                      // before re-rendering the list
//! const id = bubbles_add(el);           // per bubble element (reads style.width)
//! el.onmousedown  = e => bubbles_pointer_down(id, e.clientX, e.clientY);
//! el.ontouchstart = e => { const t = e.changedTouches[0];
//!                          bubbles_touch_start(id, t.identifier, t.clientX, t.clientY); };
//! el.onmouseenter = () => bubbles_hover_enter(id);
//! el.onmouseleave = () => bubbles_hover_leave(id);
//! document: mousemove/mouseup/touchmove/touchend → bubbles_pointer_* / bubbles_touch_*
//! window:   devicemotion → bubbles_device_motion(ax, ay, az, e.timeStamp)
//! requestAnimationFrame loop → bubbles_tick(dtSeconds), then read events
//! ```

pub mod dom;
pub mod runner;

pub use dom::{DomBubble, WindowViewport};
pub use runner::BubbleRunner;

use std::cell::RefCell;

use bubble_engine::{bubble_diameter, BodyId, EngineConfig, InputEvent, Viewport};
use glam::{Vec2, Vec3};
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

thread_local! {
    static RUNNER: RefCell<Option<BubbleRunner<WindowViewport, DomBubble>>> = RefCell::new(None);
}

fn with_runner<R>(f: impl FnOnce(&mut BubbleRunner<WindowViewport, DomBubble>) -> R) -> R {
    RUNNER.with(|cell| {
        let mut borrow = cell.borrow_mut();
        let runner = borrow
            .as_mut()
            .expect("Bubbles not initialized. Call bubbles_init() first.");
        f(runner)
    })
}

fn push(event: InputEvent) {
    with_runner(|r| r.push_input(event));
}

/// Create the simulation. `config_json` is an optional `EngineConfig` in
/// JSON; without it the defaults are used with a random seed.
#[wasm_bindgen]
pub fn bubbles_init(config_json: Option<String>) {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let config = match config_json {
        Some(json) => EngineConfig::from_json(&json).unwrap_or_else(|err| {
            log::warn!("bubbles: bad config ({}), using defaults", err);
            EngineConfig::default()
        }),
        None => EngineConfig {
            seed: (js_sys::Math::random() * u32::MAX as f64) as u64,
            ..EngineConfig::default()
        },
    };

    let runner = BubbleRunner::new(WindowViewport, config);
    RUNNER.with(|cell| {
        *cell.borrow_mut() = Some(runner);
    });
    log::info!("bubbles: initialized");
}

/// Register a bubble element. Without `size_hint`, the element's inline
/// `style.width` is used. Returns the id used by the input functions.
#[wasm_bindgen]
pub fn bubbles_add(element: HtmlElement, size_hint: Option<String>) -> u32 {
    let handle = DomBubble::new(element);
    let hint = size_hint.or_else(|| handle.style_width());
    with_runner(|r| r.add(handle, hint.as_deref()).0)
}

#[wasm_bindgen]
pub fn bubbles_clear() {
    with_runner(|r| r.clear());
}

/// Advance one display frame of `dt` seconds.
#[wasm_bindgen]
pub fn bubbles_tick(dt: f32) {
    with_runner(|r| r.tick(dt));
}

// ---- Input ----

#[wasm_bindgen]
pub fn bubbles_pointer_down(body: u32, x: f32, y: f32) {
    push(InputEvent::PointerDown { body: BodyId(body), pos: Vec2::new(x, y) });
}

#[wasm_bindgen]
pub fn bubbles_pointer_move(x: f32, y: f32) {
    push(InputEvent::PointerMove { pos: Vec2::new(x, y) });
}

#[wasm_bindgen]
pub fn bubbles_pointer_up() {
    push(InputEvent::PointerUp);
}

#[wasm_bindgen]
pub fn bubbles_touch_start(body: u32, touch: i32, x: f32, y: f32) {
    push(InputEvent::TouchStart { body: BodyId(body), touch, pos: Vec2::new(x, y) });
}

#[wasm_bindgen]
pub fn bubbles_touch_move(touch: i32, x: f32, y: f32) {
    push(InputEvent::TouchMove { touch, pos: Vec2::new(x, y) });
}

#[wasm_bindgen]
pub fn bubbles_touch_end(touch: i32) {
    push(InputEvent::TouchEnd { touch });
}

#[wasm_bindgen]
pub fn bubbles_hover_enter(body: u32) {
    push(InputEvent::HoverEnter { body: BodyId(body) });
}

#[wasm_bindgen]
pub fn bubbles_hover_leave(body: u32) {
    push(InputEvent::HoverLeave { body: BodyId(body) });
}

/// Forward a `devicemotion` sample (acceleration including gravity).
#[wasm_bindgen]
pub fn bubbles_device_motion(x: f32, y: f32, z: f32, time_ms: f64) {
    push(InputEvent::DeviceMotion { accel: Vec3::new(x, y, z), time_ms });
}

// ---- Data accessors ----

/// Bubble diameter for a confession with `likes` likes at the current window width.
#[wasm_bindgen]
pub fn bubbles_diameter(likes: u32) -> f32 {
    bubble_diameter(likes, WindowViewport.size().x)
}

#[wasm_bindgen]
pub fn bubbles_body_count() -> u32 {
    with_runner(|r| r.body_count())
}

#[wasm_bindgen]
pub fn get_bubble_events_ptr() -> *const f32 {
    with_runner(|r| r.events_ptr())
}

#[wasm_bindgen]
pub fn get_bubble_events_len() -> u32 {
    with_runner(|r| r.events_len())
}
