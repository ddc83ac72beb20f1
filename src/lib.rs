//! taskclock - terminal stopwatch, countdown and task-queue timers
//! 
//! This library provides the timer state machine with pause/resume
//! accounting, the fixed-interval redraw loop that drives it, and the
//! collaborators around them: frame rendering, the desktop notification
//! launcher, terminal handling and command-line configuration.

pub mod config;
pub mod runtime;
pub mod services;
pub mod state;
pub mod utils;
pub mod view;

// Re-export commonly used types
pub use config::Config;
pub use runtime::redraw_loop;
pub use state::{AppState, Effect, Event, Task, TimerState, Variant};
pub use utils::signals::shutdown_signal;
