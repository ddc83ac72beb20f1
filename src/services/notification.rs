//! Desktop notification launcher

use std::{future::Future, path::PathBuf};
use tokio::process::Command;
use tracing::{debug, info};

use crate::state::Task;

/// Title shown on every completion notification
pub const NOTIFICATION_TITLE: &str = "Task Complete";

/// Program launched when none is configured
pub const DEFAULT_NOTIFY_PROGRAM: &str = "notify-send";

/// Something that can tell the user a task has finished
pub trait Notifier {
    fn notify(&self, task: &Task) -> impl Future<Output = Result<(), String>>;
}

/// Body text naming the completed task
pub fn completion_message(task: &Task) -> String {
    format!("Completed task: \"{}\"", task.name)
}

/// Runs `<program> "Task Complete" <body>` and waits for it to exit
#[derive(Debug, Clone)]
pub struct DesktopNotifier {
    pub program: PathBuf,
}

impl DesktopNotifier {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for DesktopNotifier {
    fn default() -> Self {
        Self::new(DEFAULT_NOTIFY_PROGRAM)
    }
}

impl Notifier for DesktopNotifier {
    async fn notify(&self, task: &Task) -> Result<(), String> {
        let body = completion_message(task);
        debug!("Launching {} for task \"{}\"", self.program.display(), task.name);

        let output = Command::new(&self.program)
            .args([NOTIFICATION_TITLE, body.as_str()])
            .output()
            .await
            .map_err(|e| format!("Failed to execute {}: {}", self.program.display(), e))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(format!(
                "{} failed ({}): {}",
                self.program.display(),
                output.status,
                stderr.trim()
            ));
        }

        info!("Notification sent for task \"{}\"", task.name);
        Ok(())
    }
}
