//! Key mapping from terminal events to a stop request.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Check if a key asks the animation to stop.
pub fn is_stop_key(key: KeyEvent) -> bool {
    if key.kind == KeyEventKind::Release {
        return false;
    }
    matches!(
        key.code,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc
    ) || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Drain pending terminal events, waiting at most `timeout` for the first.
///
/// Returns `true` if any drained event was a stop key. Non-key events
/// (resize, focus, mouse) are discarded.
pub fn poll_stop(timeout: Duration) -> Result<bool> {
    let mut stop = false;
    let mut wait = timeout;
    while event::poll(wait)? {
        if let Event::Key(key) = event::read()? {
            stop |= is_stop_key(key);
        }
        wait = Duration::ZERO;
    }
    Ok(stop)
}
