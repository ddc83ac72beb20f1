//! Named task durations for the task-queue timer

use std::{fmt, str::FromStr, time::Duration};

use crate::utils::duration::parse_duration;
use crate::view::format_duration;

/// A named block of work with a fixed time budget
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub name: String,
    pub duration: Duration,
}

impl Task {
    /// Create a new task
    pub fn new(name: impl Into<String>, duration: Duration) -> Self {
        Self {
            name: name.into(),
            duration,
        }
    }

    /// Task list used when none is given on the command line
    pub fn default_queue() -> Vec<Task> {
        vec![
            Task::new("code", Duration::from_secs(45 * 60)),
            Task::new("stare", Duration::from_secs(13)),
            Task::new("read", Duration::from_secs(25 * 60)),
        ]
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.name, format_duration(self.duration))
    }
}

/// Parses `NAME=DURATION`, e.g. `code=45m`
impl FromStr for Task {
    type Err = String;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let (name, duration) = input
            .rsplit_once('=')
            .ok_or_else(|| format!("Expected NAME=DURATION, got \"{}\"", input))?;

        let name = name.trim();
        if name.is_empty() {
            return Err("Task name must not be empty".to_string());
        }

        Ok(Task::new(name, parse_duration(duration)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_name_and_duration() {
        let task: Task = "code=45m".parse().unwrap();
        assert_eq!(task, Task::new("code", Duration::from_secs(2700)));
    }

    #[test]
    fn name_may_contain_spaces_and_equals() {
        let task: Task = "stare at wall=13s".parse().unwrap();
        assert_eq!(task.name, "stare at wall");

        let task: Task = "a=b=1m".parse().unwrap();
        assert_eq!(task.name, "a=b");
        assert_eq!(task.duration, Duration::from_secs(60));
    }

    #[test]
    fn rejects_missing_parts() {
        assert!("code".parse::<Task>().is_err());
        assert!("=5m".parse::<Task>().is_err());
        assert!("code=".parse::<Task>().is_err());
        assert!("code=0s".parse::<Task>().is_err());
    }

    #[test]
    fn displays_as_pending_entry() {
        assert_eq!(Task::new("stare", Duration::from_secs(13)).to_string(), "stare - 0:13");
        assert_eq!(Task::new("read", Duration::from_secs(1500)).to_string(), "read - 25:00");
    }
}
