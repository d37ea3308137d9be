//! Browser implementations of the engine's viewport and visual contracts.

use bubble_engine::{BubbleTransform, Viewport, VisualHandle};
use glam::Vec2;
use web_sys::HtmlElement;

/// A bubble element positioned through its inline style.
pub struct DomBubble {
    element: HtmlElement,
}

impl DomBubble {
    pub fn new(element: HtmlElement) -> Self {
        Self { element }
    }

    /// The element's inline CSS width, which the board sets to the bubble size.
    pub fn style_width(&self) -> Option<String> {
        self.element
            .style()
            .get_property_value("width")
            .ok()
            .filter(|w| !w.is_empty())
    }
}

impl VisualHandle for DomBubble {
    fn apply(&mut self, transform: &BubbleTransform) {
        let style = self.element.style();
        if let Err(err) = style.set_property("transform", &transform.css_transform()) {
            log::warn!("failed to set bubble transform: {:?}", err);
        }
        if let Err(err) = style.set_property("z-index", &transform.z_index.to_string()) {
            log::warn!("failed to set bubble z-index: {:?}", err);
        }
    }
}

/// `window.innerWidth` × `window.innerHeight`, or zero outside a browser.
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowViewport;

impl Viewport for WindowViewport {
    fn size(&self) -> Vec2 {
        let Some(window) = web_sys::window() else {
            return Vec2::ZERO;
        };
        let read = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
            v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32
        };
        Vec2::new(read(window.inner_width()), read(window.inner_height()))
    }
}
