//! taskclock - terminal stopwatch, countdown and task-queue timers
//! 
//! This is the main entry point for the taskclock application.

use std::{fs::OpenOptions, io, sync::Mutex};
use anyhow::{bail, Context};
use tokio::time::Instant;
use tracing::{error, info};

use taskclock::{
    config::Config,
    runtime::{key_events, redraw_loop},
    services::DesktopNotifier,
    utils::{shutdown_signal, Terminal},
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();
    init_tracing(&config)?;

    info!("Starting taskclock v{}", env!("CARGO_PKG_VERSION"));
    info!("Configuration: command={:?}, notify_program={}",
          config.command, config.notify_program.display());

    let mut state = config.initial_state(Instant::now());
    let variant = state.variant();
    let notifier = DesktopNotifier::new(&config.notify_program);

    {
        let mut terminal = Terminal::enter().context("Failed to set up terminal")?;
        redraw_loop(
            &mut state,
            key_events(variant),
            &notifier,
            &mut terminal,
            shutdown_signal(),
        )
        .await
        .context("Failed to draw to terminal")?;
    }

    // Terminal is restored by now, so the error is readable
    if let Some(e) = state.error() {
        error!("Exiting after fatal error: {}", e);
        bail!("{}", e);
    }

    info!("Shutdown complete");
    Ok(())
}

/// Logs go to `--log-file` when given; the frame owns the terminal otherwise
fn init_tracing(config: &Config) -> anyhow::Result<()> {
    let filter = format!("taskclock={}", config.log_level());

    match &config.log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;

            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(io::sink)
                .init();
        }
    }

    Ok(())
}
