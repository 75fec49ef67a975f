pub mod actions;
pub mod camera;
pub mod config;
pub mod data;
pub mod fractals;
pub mod palette;
pub mod util;
