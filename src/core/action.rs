//! # Actions
//!
//! Everything the user can ask for becomes an `Action`.
//! Pressing Down? That's `Action::Navigate(Direction::Down)`.
//! Pressing `q`? That's `Action::Quit`.
//!
//! The `update()` function takes the current state and an action and mutates
//! the state. No I/O here; drawing and waiting happen in the TUI layer.
//!
//! ```text
//! State + Action  →  update()  →  New State (+ Effect)
//! ```

use log::debug;

use crate::core::state::{App, LoopState};
use crate::core::viewport::Direction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Navigate(Direction),
    /// Flip the debug panel. Takes effect on the next frame's geometry.
    ToggleDebug,
    /// Start a new cycle right away with a fresh snapshot.
    Refresh,
    /// Reserved for a help overlay; currently does nothing.
    Help,
    Quit,
}

/// What the event loop should do after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("Action: {:?}", action);
    match action {
        Action::Navigate(direction) => {
            let rows = app.navigation_rows();
            app.viewport.navigate(direction, app.snapshot.len(), rows);
            Effect::None
        }
        Action::ToggleDebug => {
            app.debug_visible = !app.debug_visible;
            Effect::None
        }
        Action::Refresh | Action::Help => Effect::None,
        Action::Quit => {
            app.state = LoopState::Terminating;
            Effect::Quit
        }
    }
}
