//! Input adapters that drive the explorer from outside the core.

#[cfg(feature = "gui")]
pub mod gui;
