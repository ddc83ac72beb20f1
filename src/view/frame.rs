//! Plain-text frame structure

use std::fmt;

use super::format_duration;
use crate::state::{AppState, Variant};

const HELP_BASIC: &str = "<q> quit <space> pause";
const HELP_TASKS: &str = "<q> quit <space> pause <enter> next task";

/// One rendered screen, one field per line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub lines: Vec<String>,
}

impl Frame {
    /// Render the current state
    pub fn render(state: &AppState) -> Self {
        let timer = state.timer();
        let mut lines = Vec::new();

        match state.variant() {
            Variant::Stopwatch => {
                lines.push(format!("Elapsed: {}", format_duration(timer.elapsed())));
            }
            Variant::Countdown | Variant::TaskQueue => {
                let remaining = timer.remaining().unwrap_or_default();
                lines.push(format!("Remaining: {}", format_duration(remaining)));
            }
        }

        lines.push(format!("Paused: {}", timer.is_paused()));

        if state.variant() == Variant::TaskQueue {
            match state.current_task() {
                Some(task) => lines.push(format!(
                    "Current Task: {} for {}",
                    task.name,
                    format_duration(task.duration)
                )),
                None => lines.push("Current Task: (none)".to_string()),
            }

            lines.push("Tasks:".to_string());
            for (i, task) in state.pending_tasks().iter().enumerate() {
                lines.push(format!("    {}. {}", i + 1, task));
            }
            lines.push(HELP_TASKS.to_string());
        } else {
            lines.push(HELP_BASIC.to_string());
        }

        Self { lines }
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Event, Task};
    use std::time::Duration;
    use tokio::time::Instant;

    fn secs(n: u64) -> Duration {
        Duration::from_secs(n)
    }

    #[test]
    fn task_queue_frame_lists_pending_with_ordinals() {
        let state = AppState::task_queue(Instant::now(), Task::default_queue());

        assert_eq!(
            Frame::render(&state).to_string(),
            "Remaining: 45:00\n\
             Paused: false\n\
             Current Task: code for 45:00\n\
             Tasks:\n    1. stare - 0:13\n    2. read - 25:00\n\
             <q> quit <space> pause <enter> next task\n"
        );
    }

    #[test]
    fn remaining_is_truncated_to_seconds() {
        let t0 = Instant::now();
        let mut state = AppState::task_queue(t0, Task::default_queue());
        state.handle(Event::Tick, t0 + Duration::from_millis(200));

        assert_eq!(Frame::render(&state).lines[0], "Remaining: 44:59");
    }

    #[test]
    fn exhausted_queue_shows_placeholder() {
        let t0 = Instant::now();
        let mut state = AppState::task_queue(t0, vec![Task::new("read", secs(60))]);
        state.advance_task(t0);

        let frame = Frame::render(&state);
        assert_eq!(frame.lines[0], "Remaining: 0:00");
        assert_eq!(frame.lines[2], "Current Task: (none)");
        assert_eq!(frame.lines[3], "Tasks:");
        assert_eq!(frame.lines[4], HELP_TASKS);
    }

    #[test]
    fn stopwatch_shows_elapsed_and_pause_flag() {
        let t0 = Instant::now();
        let mut state = AppState::stopwatch(t0);
        state.handle(Event::TogglePause, t0 + secs(3725));

        assert_eq!(
            Frame::render(&state).lines,
            ["Elapsed: 1:02:05", "Paused: true", HELP_BASIC]
        );
    }

    #[test]
    fn countdown_shows_remaining() {
        let t0 = Instant::now();
        let mut state = AppState::countdown(t0, secs(90));
        state.handle(Event::Tick, t0 + secs(30));

        assert_eq!(Frame::render(&state).lines[0], "Remaining: 1:00");
    }
}
