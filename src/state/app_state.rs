//! Main application state and its transition function

use std::{collections::VecDeque, time::Duration};
use tokio::time::Instant;
use tracing::{debug, info, warn};

use super::{Task, TimerState};

/// Which of the three timers is running
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// Counts up with no target
    Stopwatch,
    /// Counts down one fixed duration and exits when it runs out
    Countdown,
    /// Counts down each queued task in turn, notifying on completion
    TaskQueue,
}

impl Variant {
    /// Fixed redraw quantum for this variant
    pub fn redraw_interval(self) -> Duration {
        match self {
            Variant::Stopwatch => Duration::from_millis(25),
            Variant::Countdown | Variant::TaskQueue => Duration::from_millis(200),
        }
    }
}

/// Input delivered to the state machine by the redraw loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Tick,
    TogglePause,
    NextTask,
    Quit,
}

/// What the redraw loop has to do after an event was handled
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Nothing until the next tick
    Idle,
    /// Draw the current state
    Render,
    /// The task finished: notify for it, then call [`AppState::advance_task`]
    Complete(Task),
    /// Stop the loop
    Exit,
}

/// State owned by the redraw loop for the lifetime of the process
#[derive(Debug, Clone)]
pub struct AppState {
    variant: Variant,
    timer: TimerState,
    current_task: Option<Task>,
    pending_tasks: VecDeque<Task>,
    /// Fatal notification failure, reported once the loop has ended
    error: Option<String>,
}

impl AppState {
    pub fn stopwatch(now: Instant) -> Self {
        Self {
            variant: Variant::Stopwatch,
            timer: TimerState::stopwatch(now),
            current_task: None,
            pending_tasks: VecDeque::new(),
            error: None,
        }
    }

    pub fn countdown(now: Instant, duration: Duration) -> Self {
        Self {
            variant: Variant::Countdown,
            timer: TimerState::countdown(now, duration),
            current_task: None,
            pending_tasks: VecDeque::new(),
            error: None,
        }
    }

    /// Start the task-queue timer on the head of `tasks`
    pub fn task_queue(now: Instant, tasks: impl IntoIterator<Item = Task>) -> Self {
        let mut pending_tasks: VecDeque<Task> = tasks.into_iter().collect();
        let current_task = pending_tasks.pop_front();
        let timer = TimerState::new(now, current_task.as_ref().map(|task| task.duration));

        match &current_task {
            Some(task) => info!("Starting task \"{}\" for {:?}", task.name, task.duration),
            None => warn!("Task queue is empty, nothing to time"),
        }

        Self {
            variant: Variant::TaskQueue,
            timer,
            current_task,
            pending_tasks,
            error: None,
        }
    }

    /// Apply one event at instant `now` and report the resulting effect
    pub fn handle(&mut self, event: Event, now: Instant) -> Effect {
        match event {
            Event::Tick => self.tick(now),
            Event::TogglePause => {
                self.timer.toggle_pause(now);
                debug!("Timer {}", if self.timer.is_paused() { "paused" } else { "resumed" });
                Effect::Idle
            }
            Event::NextTask => match (&self.variant, &self.current_task) {
                (Variant::TaskQueue, Some(task)) => {
                    info!("Skipping ahead from task \"{}\"", task.name);
                    Effect::Complete(task.clone())
                }
                _ => Effect::Idle,
            },
            Event::Quit => Effect::Exit,
        }
    }

    fn tick(&mut self, now: Instant) -> Effect {
        if self.variant == Variant::TaskQueue && self.current_task.is_none() {
            return Effect::Render;
        }

        self.timer.recompute(now);
        if !self.timer.is_overdue() {
            return Effect::Render;
        }

        match (&self.variant, &self.current_task) {
            (Variant::TaskQueue, Some(task)) => {
                info!("Task \"{}\" ran out of time", task.name);
                Effect::Complete(task.clone())
            }
            _ => {
                info!("Countdown finished");
                Effect::Exit
            }
        }
    }

    /// Move on to the next pending task, or to the no-task state when the
    /// queue is empty. The timer restarts from scratch either way.
    pub fn advance_task(&mut self, now: Instant) {
        self.current_task = self.pending_tasks.pop_front();
        self.timer.reset(now, self.current_task.as_ref().map(|task| task.duration));

        match &self.current_task {
            Some(task) => info!("Starting task \"{}\" for {:?}", task.name, task.duration),
            None => info!("All tasks complete"),
        }
    }

    /// Store a fatal error to be reported after the loop ends
    pub fn record_failure(&mut self, error: String) {
        warn!("Recording fatal error: {}", error);
        self.error = Some(error);
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn timer(&self) -> &TimerState {
        &self.timer
    }

    pub fn current_task(&self) -> Option<&Task> {
        self.current_task.as_ref()
    }

    pub fn pending_tasks(&self) -> &VecDeque<Task> {
        &self.pending_tasks
    }
}
