//! Redraw loop module
//! 
//! This module contains the single-threaded loop that turns ticks and key
//! presses into state transitions and redraws.

pub mod input;
pub mod redraw_loop;

// Re-export main items
pub use input::{key_event, key_events};
pub use redraw_loop::{redraw_loop, Screen};
