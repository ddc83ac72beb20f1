//! Utility functions module
//! 
//! This module contains utility functions used throughout the application.

pub mod duration;
pub mod signals;
pub mod terminal;

// Re-export main functions
pub use duration::parse_duration;
pub use signals::shutdown_signal;
pub use terminal::Terminal;
