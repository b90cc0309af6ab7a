//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::collections::VecDeque;
use std::io;
use std::time::Duration;

use ratatui::backend::{Backend, ClearType, TestBackend, WindowSize};
use ratatui::buffer::{Buffer, Cell};
use ratatui::layout::{Position, Size};

use crate::collect::{MonitoredEntity, ProviderError, Snapshot, TaskProvider, TaskState};
use crate::tui::event::{InputWaiter, WaitOutcome};

/// Snapshot of `len` entities labelled `task-0`, `task-1`, ...
pub fn snapshot_of(len: usize) -> Snapshot {
    let entities = (0..len)
        .map(|i| {
            let state = if i % 3 == 0 { TaskState::Running } else { TaskState::Sleeping };
            MonitoredEntity::new(1000 + i as u32, 1000 + i as u32, &format!("task-{i}"), state)
        })
        .collect();
    Snapshot::from_entities(entities)
}

/// Provider returning a fixed number of tasks, optionally failing.
pub struct FixedProvider {
    pub len: usize,
    pub fail: bool,
    pub calls: usize,
}

impl FixedProvider {
    pub fn new(len: usize) -> Self {
        Self {
            len,
            fail: false,
            calls: 0,
        }
    }
}

impl TaskProvider for FixedProvider {
    fn name(&self) -> &str {
        "fixed"
    }

    fn list(&mut self) -> Result<Snapshot, ProviderError> {
        self.calls += 1;
        if self.fail {
            return Err(ProviderError::Io(io::Error::from_raw_os_error(2)));
        }
        Ok(snapshot_of(self.len))
    }
}

/// Waiter that replays a scripted list of outcomes, then times out forever.
#[derive(Default)]
pub struct ScriptedWaiter {
    pub outcomes: VecDeque<WaitOutcome>,
    pub timeouts_seen: Vec<Duration>,
}

impl ScriptedWaiter {
    pub fn new(outcomes: impl IntoIterator<Item = WaitOutcome>) -> Self {
        Self {
            outcomes: outcomes.into_iter().collect(),
            timeouts_seen: Vec::new(),
        }
    }
}

impl InputWaiter for ScriptedWaiter {
    fn wait(&mut self, timeout: Duration) -> WaitOutcome {
        self.timeouts_seen.push(timeout);
        self.outcomes.pop_front().unwrap_or(WaitOutcome::Timeout)
    }
}

/// `TestBackend` whose size query can be made to fail.
pub struct FlakyBackend {
    pub inner: TestBackend,
    pub fail_size: bool,
}

impl FlakyBackend {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            inner: TestBackend::new(width, height),
            fail_size: false,
        }
    }
}

impl Backend for FlakyBackend {
    type Error = io::Error;

    fn draw<'a, I>(&mut self, content: I) -> io::Result<()>
    where
        I: Iterator<Item = (u16, u16, &'a Cell)>,
    {
        self.inner.draw(content).map_err(|e| match e {})
    }

    fn hide_cursor(&mut self) -> io::Result<()> {
        self.inner.hide_cursor().map_err(|e| match e {})
    }

    fn show_cursor(&mut self) -> io::Result<()> {
        self.inner.show_cursor().map_err(|e| match e {})
    }

    fn get_cursor_position(&mut self) -> io::Result<Position> {
        self.inner.get_cursor_position().map_err(|e| match e {})
    }

    fn set_cursor_position<P: Into<Position>>(&mut self, position: P) -> io::Result<()> {
        self.inner
            .set_cursor_position(position)
            .map_err(|e| match e {})
    }

    fn clear(&mut self) -> io::Result<()> {
        self.inner.clear().map_err(|e| match e {})
    }

    fn clear_region(&mut self, clear_type: ClearType) -> io::Result<()> {
        self.inner.clear_region(clear_type).map_err(|e| match e {})
    }

    fn size(&self) -> io::Result<Size> {
        if self.fail_size {
            return Err(io::Error::other("terminal size unavailable"));
        }
        self.inner.size().map_err(|e| match e {})
    }

    fn window_size(&mut self) -> io::Result<WindowSize> {
        self.inner.window_size().map_err(|e| match e {})
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush().map_err(|e| match e {})
    }
}

/// Every cell symbol in row-major order.
pub fn buffer_text(buffer: &Buffer) -> String {
    buffer.content().iter().map(|c| c.symbol()).collect()
}

/// One string per buffer row.
pub fn buffer_lines(buffer: &Buffer) -> Vec<String> {
    let area = buffer.area;
    (area.top()..area.bottom())
        .map(|y| {
            (area.left()..area.right())
                .map(|x| buffer[(x, y)].symbol())
                .collect()
        })
        .collect()
}
