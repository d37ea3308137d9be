pub mod interaction;
pub mod motion;
pub mod queue;
