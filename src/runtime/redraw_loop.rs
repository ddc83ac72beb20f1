//! Tick/key/shutdown redraw loop

use std::{future::Future, io};
use futures::{Stream, StreamExt};
use tokio::time::{interval, Instant, MissedTickBehavior};
use tracing::{debug, error, info};

use crate::{
    services::Notifier,
    state::{AppState, Effect, Event},
    view::Frame,
};

/// Where frames are drawn
pub trait Screen {
    fn draw(&mut self, frame: &Frame) -> io::Result<()>;
}

/// Drive `state` until a quit condition is reached.
///
/// Every redraw quantum a `Tick` is delivered and the frame redrawn. Events
/// from `input` are applied as they arrive; `shutdown` completing acts like
/// a quit key. A notification failure is stored on `state` and ends the
/// loop. Only drawing errors are returned.
pub async fn redraw_loop<I, N, S, F>(
    state: &mut AppState,
    input: I,
    notifier: &N,
    screen: &mut S,
    shutdown: F,
) -> io::Result<()>
where
    I: Stream<Item = Event>,
    N: Notifier,
    S: Screen,
    F: Future<Output = ()>,
{
    let quantum = state.variant().redraw_interval();
    info!("Starting {:?} redraw loop every {:?}", state.variant(), quantum);

    let mut ticker = interval(quantum);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    let input = input.fuse();
    tokio::pin!(input);
    tokio::pin!(shutdown);

    loop {
        let event = tokio::select! {
            _ = ticker.tick() => Event::Tick,
            Some(event) = input.next() => {
                debug!("Input event: {:?}", event);
                event
            }
            _ = &mut shutdown => {
                info!("Shutdown signal received");
                Event::Quit
            }
        };

        match state.handle(event, Instant::now()) {
            Effect::Idle => {}
            Effect::Render => screen.draw(&Frame::render(state))?,
            Effect::Complete(task) => match notifier.notify(&task).await {
                Ok(()) => {
                    state.advance_task(Instant::now());
                    screen.draw(&Frame::render(state))?;
                }
                Err(e) => {
                    error!("Notification for task \"{}\" failed: {}", task.name, e);
                    state.record_failure(e);
                    break;
                }
            },
            Effect::Exit => break,
        }
    }

    info!("Redraw loop finished");
    Ok(())
}
