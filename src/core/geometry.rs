//! # Layout Geometry
//!
//! How many rows each screen section takes, derived from the terminal size
//! and whether the debug panel is showing. Recomputed every frame.
//!
//! ```text
//! ┌──────────────────────────────┐
//! │ title / clock                │ header_lines (2)
//! │ ──────────────────────────── │
//! │ PID  TID  COMMAND  STATE     │ table_header_lines (2)
//! │ ──────────────────────────── │
//! │ ...                          │ visible_rows
//! │ ┌ Debug ───────────────────┐ │ debug_lines (0 or 6)
//! │ └──────────────────────────┘ │
//! │ Keys: ...                    │ footer_lines (1)
//! └──────────────────────────────┘
//! ```

pub const HEADER_LINES: u16 = 2;
pub const TABLE_HEADER_LINES: u16 = 2;
pub const DEBUG_LINES: u16 = 6;
pub const FOOTER_LINES: u16 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LayoutGeometry {
    pub rows: u16,
    pub cols: u16,
    pub header_lines: u16,
    pub table_header_lines: u16,
    pub debug_lines: u16,
    pub footer_lines: u16,
    /// Data rows left for the task table. Zero means the window is too
    /// small and the content section is suppressed.
    pub visible_rows: u16,
}

impl LayoutGeometry {
    pub fn compute(rows: u16, cols: u16, debug_visible: bool) -> Self {
        let debug_lines = if debug_visible { DEBUG_LINES } else { 0 };
        let fixed = HEADER_LINES + TABLE_HEADER_LINES + debug_lines + FOOTER_LINES;

        Self {
            rows,
            cols,
            header_lines: HEADER_LINES,
            table_header_lines: TABLE_HEADER_LINES,
            debug_lines,
            footer_lines: FOOTER_LINES,
            visible_rows: rows.saturating_sub(fixed),
        }
    }

    /// Whether the task table gets drawn at all.
    pub fn shows_content(&self) -> bool {
        self.visible_rows > 0
    }

    /// Page height used by scroll math; never below one.
    pub fn scroll_rows(&self) -> usize {
        usize::from(self.visible_rows.max(1))
    }
}
