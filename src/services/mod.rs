//! External program module
//! 
//! This module launches the desktop notification program used when a
//! queued task finishes.

pub mod notification;

// Re-export main items
pub use notification::*;
