//! Key bindings

use crossterm::event::{Event as TermEvent, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use futures::{future, Stream, StreamExt};
use tracing::warn;

use crate::state::{Event, Variant};

/// Map a key press to a state machine event. Unbound keys yield `None`.
pub fn key_event(variant: Variant, key: KeyEvent) -> Option<Event> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Event::Quit),
        KeyCode::Char('q') => Some(Event::Quit),
        KeyCode::Char(' ') => Some(Event::TogglePause),
        KeyCode::Enter if variant == Variant::TaskQueue => Some(Event::NextTask),
        _ => None,
    }
}

/// Key events read from the terminal.
///
/// A read error ends the session with `Quit`, since no further input could
/// be serviced.
pub fn key_events(variant: Variant) -> impl Stream<Item = Event> {
    EventStream::new().filter_map(move |result| {
        future::ready(match result {
            Ok(TermEvent::Key(key)) => key_event(variant, key),
            Ok(_) => None,
            Err(e) => {
                warn!("Failed to read terminal event: {}", e);
                Some(Event::Quit)
            }
        })
    })
}
