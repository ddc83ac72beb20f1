//! Configuration and CLI argument handling

use std::{path::PathBuf, time::Duration};
use clap::{Parser, Subcommand};
use tokio::time::Instant;

use crate::{
    services::DEFAULT_NOTIFY_PROGRAM,
    state::{AppState, Task},
    utils::parse_duration,
};

/// CLI argument parsing structure
#[derive(Parser, Debug)]
#[command(name = "taskclock")]
#[command(about = "Terminal stopwatch, countdown and task-queue timers")]
#[command(version)]
pub struct Config {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Program launched with a title and body when a task completes
    #[arg(long, global = true, default_value = DEFAULT_NOTIFY_PROGRAM)]
    pub notify_program: PathBuf,

    /// Append logs to this file; logs are discarded otherwise
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Timer variants
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Count up until you quit
    Stopwatch,
    /// Count down a fixed duration, then exit
    Countdown {
        /// Duration such as 25m, 90s or 1h30m
        #[arg(short, long, default_value = "25m", value_parser = parse_duration)]
        duration: Duration,
    },
    /// Work through a queue of named tasks (the default)
    Tasks {
        /// Task as NAME=DURATION, repeat for each task in order
        #[arg(short = 't', long = "task", value_name = "NAME=DURATION")]
        tasks: Vec<Task>,
    },
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }

    /// Build the timer selected on the command line, starting at `now`
    pub fn initial_state(&self, now: Instant) -> AppState {
        match &self.command {
            Some(Command::Stopwatch) => AppState::stopwatch(now),
            Some(Command::Countdown { duration }) => AppState::countdown(now, *duration),
            Some(Command::Tasks { tasks }) if !tasks.is_empty() => {
                AppState::task_queue(now, tasks.iter().cloned())
            }
            Some(Command::Tasks { .. }) | None => AppState::task_queue(now, Task::default_queue()),
        }
    }
}
