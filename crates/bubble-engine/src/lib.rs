//! Floating-bubble physics for the confession board.
//!
//! Each confession is a circular body that drifts, bounces off the viewport
//! edges and off other bubbles, slows to a stop under the cursor, and can be
//! dragged and thrown. Shaking a phone kicks every free bubble.
//!
//! The crate is headless: the caller provides a [`Viewport`] and one
//! [`VisualHandle`] per bubble, feeds [`InputEvent`]s, and drives ticks.
//! `bubble-web` does this for the browser.

pub mod api;
pub mod core;
pub mod components;
pub mod systems;
pub mod renderer;
pub mod input;

// Re-export key types at crate root for convenience
pub use crate::api::config::{EngineConfig, Tuning};
pub use crate::api::engine::BubbleEngine;
pub use crate::api::sizing::{bubble_diameter, diameter_from_hint, size_hint};
pub use crate::api::types::{BodyId, BubbleEvent, EventRecord};
pub use crate::components::body::{Body, Motion};
pub use crate::core::time::{EveryFrame, FixedTimestep, TickSource};
pub use crate::core::viewport::{FixedViewport, Viewport};
pub use crate::input::queue::{InputEvent, InputQueue};
pub use crate::renderer::traits::{BubbleTransform, RecordedVisual, VisualHandle};
