//! Text rendering module
//! 
//! This module turns the application state into the plain-text frame drawn
//! on every redraw.

pub mod format;
pub mod frame;

// Re-export main items
pub use format::format_duration;
pub use frame::Frame;
