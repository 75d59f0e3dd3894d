//! Synchronous terminal event pump.
//!
//! Blocking crossterm `poll`/`read` — no background task, no runtime.
//! The session model is one user input event per orchestrator iteration,
//! so a blocking pump with an idle tick is all the form needs.

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind};

/// Events delivered to the form app.
#[derive(Debug)]
pub enum Event {
    /// A key was pressed.
    Key(KeyEvent),
    /// Terminal was resized to (cols, rows).
    Resize(u16, u16),
    /// Nothing happened within the poll interval.
    Tick,
}

/// Blocking event reader with an idle tick.
pub struct EventReader {
    tick_rate: Duration,
}

impl EventReader {
    pub fn new(tick_rate: Duration) -> Self {
        Self { tick_rate }
    }

    /// Wait for the next event, emitting [`Event::Tick`] when idle.
    pub fn next(&self) -> io::Result<Event> {
        loop {
            if !event::poll(self.tick_rate)? {
                return Ok(Event::Tick);
            }
            match event::read()? {
                CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                    return Ok(Event::Key(key));
                }
                CrosstermEvent::Resize(w, h) => return Ok(Event::Resize(w, h)),
                // Ignore key release/repeat, mouse, focus, and paste events
                _ => {}
            }
        }
    }
}
