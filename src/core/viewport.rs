//! # Viewport
//!
//! Selection and scroll position over the current snapshot.
//!
//! The one invariant everything here protects:
//!
//! ```text
//! scroll_offset <= selected < scroll_offset + visible_rows
//! ```
//!
//! Navigation keeps it by scrolling exactly enough to follow the selection.
//! Geometry or snapshot changes can break it from outside (a window shrink,
//! a task list that got shorter), so [`ViewportState::sync`] re-establishes
//! it every frame rather than trusting navigation alone.

use std::ops::Range;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewportState {
    /// `None` only while the snapshot is empty.
    pub selected: Option<usize>,
    pub scroll_offset: usize,
}

impl ViewportState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves the selection one step. No wraparound; no-op on an empty list.
    ///
    /// `visible_rows` of zero is treated as one so a collapsed window never
    /// produces a negative offset.
    pub fn navigate(&mut self, direction: Direction, len: usize, visible_rows: usize) {
        let Some(mut selected) = self.selected else {
            return;
        };
        if len == 0 {
            return;
        }
        let rows = visible_rows.max(1);

        match direction {
            Direction::Up => {
                if selected > 0 {
                    selected -= 1;
                    if selected < self.scroll_offset {
                        self.scroll_offset = selected;
                    }
                }
            }
            Direction::Down => {
                if selected + 1 < len {
                    selected += 1;
                    if selected >= self.scroll_offset + rows {
                        self.scroll_offset = selected + 1 - rows;
                    }
                }
            }
        }

        self.selected = Some(selected);
    }

    /// Fits selection and scroll to a new list length and page height.
    ///
    /// Called after every snapshot replacement and geometry recompute.
    pub fn sync(&mut self, len: usize, visible_rows: usize) {
        if len == 0 {
            self.selected = None;
            self.scroll_offset = 0;
            return;
        }
        let rows = visible_rows.max(1);
        let selected = self.selected.unwrap_or(0).min(len - 1);

        let max_offset = len.saturating_sub(rows);
        let mut offset = self.scroll_offset.min(max_offset);
        if selected < offset {
            offset = selected;
        } else if selected >= offset + rows {
            offset = selected + 1 - rows;
        }

        self.selected = Some(selected);
        self.scroll_offset = offset;
    }

    /// Snapshot indices currently on screen.
    pub fn visible_range(&self, len: usize, visible_rows: usize) -> Range<usize> {
        let start = self.scroll_offset.min(len);
        let end = (start + visible_rows).min(len);
        start..end
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selected == Some(index)
    }
}
