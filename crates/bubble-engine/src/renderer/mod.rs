pub mod traits;

pub use traits::{BubbleTransform, RecordedVisual, VisualHandle};
