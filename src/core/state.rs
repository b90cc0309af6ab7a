//! # Application State
//!
//! Everything the dashboard knows between frames, in one place.
//!
//! ```text
//! App
//! ├── snapshot: Snapshot          // tasks shown this cycle
//! ├── viewport: ViewportState     // selection + scroll
//! ├── geometry: LayoutGeometry    // rows per section, this frame
//! ├── debug_visible: bool         // debug panel toggle
//! ├── stats: SessionStats         // counters for debug panel + summary
//! ├── state: LoopState            // Running / Draining / Terminating
//! └── source_name: String         // provider shown in the header
//! ```
//!
//! State changes from user input only happen through `update(app, action)`
//! in action.rs. The event loop owns the rest of the lifecycle.

use crate::collect::Snapshot;
use crate::core::geometry::LayoutGeometry;
use crate::core::stats::SessionStats;
use crate::core::viewport::ViewportState;

/// Event loop lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    /// Between clearing the resize flag and finishing the backend re-sync.
    Draining,
    Terminating,
}

pub struct App {
    pub snapshot: Snapshot,
    pub viewport: ViewportState,
    pub geometry: LayoutGeometry,
    pub debug_visible: bool,
    pub stats: SessionStats,
    pub state: LoopState,
    pub source_name: String,
}

impl App {
    pub fn new(source_name: impl Into<String>, debug_visible: bool) -> Self {
        Self {
            snapshot: Snapshot::new(),
            viewport: ViewportState::new(),
            geometry: LayoutGeometry::default(),
            debug_visible,
            stats: SessionStats::new(),
            state: LoopState::Running,
            source_name: source_name.into(),
        }
    }

    /// Recomputes the geometry for a terminal of `rows` x `cols` and
    /// re-fits the viewport to it.
    pub fn apply_dimensions(&mut self, rows: u16, cols: u16) {
        self.geometry = LayoutGeometry::compute(rows, cols, self.debug_visible);
        self.viewport
            .sync(self.snapshot.len(), usize::from(self.geometry.visible_rows));
    }

    /// Swaps in a fresh snapshot and re-fits the viewport to its length.
    pub fn replace_snapshot(&mut self, snapshot: Snapshot) {
        self.snapshot = snapshot;
        self.viewport
            .sync(self.snapshot.len(), usize::from(self.geometry.visible_rows));
    }

    /// Page height for navigation, from the current dimensions and the
    /// debug flag as it stands right now.
    pub fn navigation_rows(&self) -> usize {
        LayoutGeometry::compute(self.geometry.rows, self.geometry.cols, self.debug_visible)
            .scroll_rows()
    }

    pub fn is_terminating(&self) -> bool {
        self.state == LoopState::Terminating
    }
}
