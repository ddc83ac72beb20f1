//! Timer state structure and pause accounting
//!
//! All operations take the current instant as an argument so the
//! bookkeeping can be driven by a real clock, tokio's paused test clock,
//! or hand-built instants.

use std::time::Duration;
use tokio::time::Instant;

/// Elapsed/remaining bookkeeping for one timer run
#[derive(Debug, Clone)]
pub struct TimerState {
    start_time: Instant,
    paused: bool,
    /// Where the running clock stood when the current pause began, expressed
    /// as `start_time + elapsed`. Everything after it is pause.
    paused_at: Instant,
    accumulated_pause: Duration,
    elapsed: Duration,
    target: Option<Duration>,
}

impl TimerState {
    /// Create a running timer starting at `now`
    pub fn new(now: Instant, target: Option<Duration>) -> Self {
        Self {
            start_time: now,
            paused: false,
            paused_at: now,
            accumulated_pause: Duration::ZERO,
            elapsed: Duration::ZERO,
            target,
        }
    }

    /// Timer with no target that counts up forever
    pub fn stopwatch(now: Instant) -> Self {
        Self::new(now, None)
    }

    /// Timer counting down from `target`
    pub fn countdown(now: Instant, target: Duration) -> Self {
        Self::new(now, Some(target))
    }

    /// Reset every field as if the timer was newly created at `now`
    pub fn reset(&mut self, now: Instant, target: Option<Duration>) {
        *self = Self::new(now, target);
    }

    /// Flip between running and paused.
    ///
    /// The timer is brought up to date first, so pausing and resuming at
    /// the same instant leaves `elapsed` untouched.
    pub fn toggle_pause(&mut self, now: Instant) {
        self.recompute(now);
        self.paused = !self.paused;
        if self.paused {
            self.paused_at = self.start_time + self.elapsed;
        }
    }

    /// Bring the derived values up to date with `now`
    pub fn recompute(&mut self, now: Instant) {
        if self.paused {
            self.accumulated_pause = now.saturating_duration_since(self.paused_at);
        } else {
            self.elapsed = now.saturating_duration_since(self.start_time + self.accumulated_pause);
        }
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn is_running(&self) -> bool {
        !self.paused
    }

    pub fn start_time(&self) -> Instant {
        self.start_time
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn accumulated_pause(&self) -> Duration {
        self.accumulated_pause
    }

    pub fn target(&self) -> Option<Duration> {
        self.target
    }

    /// Time left until the target, clamped at zero. `None` for a stopwatch.
    pub fn remaining(&self) -> Option<Duration> {
        self.target.map(|target| target.saturating_sub(self.elapsed))
    }

    /// True once `target - elapsed` has gone negative
    pub fn is_overdue(&self) -> bool {
        matches!(self.target, Some(target) if self.elapsed > target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secs(n: u64) -> Duration {
        Duration::from_secs(n)
    }

    #[test]
    fn elapsed_tracks_wall_clock_while_running() {
        let t0 = Instant::now();
        let mut timer = TimerState::stopwatch(t0);

        timer.recompute(t0 + secs(3));
        assert_eq!(timer.elapsed(), secs(3));
        assert!(timer.is_running());
        assert_eq!(timer.remaining(), None);
    }

    #[test]
    fn elapsed_is_frozen_while_paused() {
        let t0 = Instant::now();
        let mut timer = TimerState::countdown(t0, secs(60));

        timer.toggle_pause(t0 + secs(10));
        timer.recompute(t0 + secs(25));

        assert!(timer.is_paused());
        assert_eq!(timer.elapsed(), secs(10));
        assert_eq!(timer.accumulated_pause(), secs(15));
        assert_eq!(timer.remaining(), Some(secs(50)));
    }

    #[test]
    fn pause_then_resume_at_same_instant_changes_nothing() {
        let t0 = Instant::now();
        let mut timer = TimerState::countdown(t0, secs(60));
        timer.recompute(t0 + secs(7));
        let before = (timer.elapsed(), timer.remaining());

        timer.toggle_pause(t0 + secs(7));
        timer.toggle_pause(t0 + secs(7));
        timer.recompute(t0 + secs(7));

        assert_eq!((timer.elapsed(), timer.remaining()), before);
        assert!(timer.is_running());
    }

    #[test]
    fn repeated_pauses_accumulate_without_double_counting() {
        let t0 = Instant::now();
        let mut timer = TimerState::stopwatch(t0);

        // run 2, pause 5, run 1, pause 4, run 3
        timer.toggle_pause(t0 + secs(2));
        timer.recompute(t0 + secs(5));
        timer.toggle_pause(t0 + secs(7));
        timer.toggle_pause(t0 + secs(8));
        timer.recompute(t0 + secs(10));
        timer.toggle_pause(t0 + secs(12));
        timer.recompute(t0 + secs(15));

        assert_eq!(timer.accumulated_pause(), secs(9));
        assert_eq!(timer.elapsed(), secs(6));
    }

    #[test]
    fn resume_without_intermediate_tick_still_counts_pause() {
        let t0 = Instant::now();
        let mut timer = TimerState::stopwatch(t0);

        timer.toggle_pause(t0 + secs(1));
        timer.toggle_pause(t0 + secs(6));
        timer.recompute(t0 + secs(8));

        assert_eq!(timer.elapsed(), secs(3));
    }

    #[test]
    fn overdue_only_once_remaining_is_negative() {
        let t0 = Instant::now();
        let mut timer = TimerState::countdown(t0, secs(13));

        timer.recompute(t0 + secs(13));
        assert_eq!(timer.remaining(), Some(Duration::ZERO));
        assert!(!timer.is_overdue());

        timer.recompute(t0 + secs(13) + Duration::from_millis(1));
        assert_eq!(timer.remaining(), Some(Duration::ZERO));
        assert!(timer.is_overdue());
    }

    #[test]
    fn reset_clears_all_fields() {
        let t0 = Instant::now();
        let mut timer = TimerState::countdown(t0, secs(10));
        timer.toggle_pause(t0 + secs(4));
        timer.recompute(t0 + secs(9));

        let t1 = t0 + secs(20);
        timer.reset(t1, Some(secs(30)));

        assert!(timer.is_running());
        assert_eq!(timer.start_time(), t1);
        assert_eq!(timer.elapsed(), Duration::ZERO);
        assert_eq!(timer.accumulated_pause(), Duration::ZERO);
        assert_eq!(timer.remaining(), Some(secs(30)));
    }
}
