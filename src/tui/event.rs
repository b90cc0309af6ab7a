//! Keyboard events and the timed wait on standard input.

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::core::action::Action;
use crate::core::viewport::Direction;
use crate::tui::resize::ResizeFlag;

/// TUI-specific input events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TuiEvent {
    Quit,
    CursorUp,
    CursorDown,
    ToggleDebug,
    Refresh,
    Help,
    /// A key (or key release) with no binding. Still counts as input.
    Unbound,
}

impl TuiEvent {
    pub fn from_key(key_event: KeyEvent) -> Self {
        if key_event.kind != KeyEventKind::Press {
            return TuiEvent::Unbound;
        }
        match (key_event.modifiers, key_event.code) {
            // Raw mode swallows SIGINT, so Ctrl+C arrives as a key
            (KeyModifiers::CONTROL, KeyCode::Char('c')) => TuiEvent::Quit,
            (_, KeyCode::Char('q' | 'Q')) => TuiEvent::Quit,
            (_, KeyCode::Char('d' | 'D')) => TuiEvent::ToggleDebug,
            (_, KeyCode::Char('r' | 'R')) => TuiEvent::Refresh,
            (_, KeyCode::Char('h' | 'H')) => TuiEvent::Help,
            (_, KeyCode::Up) => TuiEvent::CursorUp,
            (_, KeyCode::Down) => TuiEvent::CursorDown,
            _ => TuiEvent::Unbound,
        }
    }

    pub fn action(self) -> Option<Action> {
        match self {
            TuiEvent::Quit => Some(Action::Quit),
            TuiEvent::CursorUp => Some(Action::Navigate(Direction::Up)),
            TuiEvent::CursorDown => Some(Action::Navigate(Direction::Down)),
            TuiEvent::ToggleDebug => Some(Action::ToggleDebug),
            TuiEvent::Refresh => Some(Action::Refresh),
            TuiEvent::Help => Some(Action::Help),
            TuiEvent::Unbound => None,
        }
    }
}

/// Result of one bounded wait on the input stream.
#[derive(Debug)]
pub enum WaitOutcome {
    /// Input arrived; carries the event that was read.
    Ready(TuiEvent),
    /// Nothing happened within the timeout. This is the refresh tick.
    Timeout,
    /// The wait was cut short by a resize notification.
    Interrupted,
    /// Anything else. Fatal.
    Error(io::Error),
}

/// Blocks for at most `timeout` waiting on keyboard input.
///
/// This is the only place the event loop is allowed to block.
pub trait InputWaiter {
    fn wait(&mut self, timeout: Duration) -> WaitOutcome;
}

/// [`InputWaiter`] over crossterm's event queue on standard input.
///
/// The timeout is handed to `poll` by value on every call, so nothing from a
/// previous wait leaks into the next one.
pub struct CrosstermWaiter {
    resize: ResizeFlag,
}

impl CrosstermWaiter {
    /// `resize` is raised when crossterm reports a resize itself, which
    /// covers platforms where no signal handler could be installed.
    pub fn new(resize: ResizeFlag) -> Self {
        Self { resize }
    }
}

impl InputWaiter for CrosstermWaiter {
    fn wait(&mut self, timeout: Duration) -> WaitOutcome {
        match event::poll(timeout) {
            Ok(true) => match event::read() {
                Ok(Event::Key(key_event)) => {
                    log::debug!(
                        "Key event: {:?} with modifiers {:?}",
                        key_event.code,
                        key_event.modifiers
                    );
                    WaitOutcome::Ready(TuiEvent::from_key(key_event))
                }
                Ok(Event::Resize(cols, rows)) => {
                    log::debug!("Resize event on input stream: {}x{}", cols, rows);
                    self.resize.raise();
                    WaitOutcome::Interrupted
                }
                Ok(_) => WaitOutcome::Ready(TuiEvent::Unbound),
                Err(e) => classify_error(e),
            },
            Ok(false) => WaitOutcome::Timeout,
            Err(e) => classify_error(e),
        }
    }
}

fn classify_error(err: io::Error) -> WaitOutcome {
    if err.kind() == io::ErrorKind::Interrupted {
        WaitOutcome::Interrupted
    } else {
        WaitOutcome::Error(err)
    }
}
