pub mod collision;
pub mod integrate;
pub mod render;
pub mod walls;
