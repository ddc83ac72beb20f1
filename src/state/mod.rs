//! State management module
//! 
//! This module contains the timer state machine: pause accounting, the
//! task queue and the event/effect transition function.

pub mod app_state;
pub mod task;
pub mod timer_state;

// Re-export main types
pub use app_state::{AppState, Effect, Event, Variant};
pub use task::Task;
pub use timer_state::TimerState;
