pub mod config;
pub mod engine;
pub mod sizing;
pub mod types;
