//! Windowed explorer: winit for the window and keyboard, pixels for the
//! framebuffer and egui for the HUD.

pub mod app;
pub mod commands;
