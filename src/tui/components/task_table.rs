//! # Task Table Component
//!
//! The scrollable content section: a column header, a separator, then one
//! row per visible task.
//!
//! Follows the props-in-struct pattern with borrowed state:
//! - `ViewportState` lives in `App` and is only read here
//! - `TaskTable` is created each frame around the current snapshot
//!
//! Scrolling is owned by the viewport model rather than ratatui's
//! `ListState`, so the rows drawn are exactly `viewport.visible_range()`.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::collect::types::LABEL_MAX_WIDTH;
use crate::collect::{MonitoredEntity, Snapshot, TaskState};
use crate::core::viewport::ViewportState;
use crate::tui::component::Component;

const ID_WIDTH: usize = 7;
const STATE_WIDTH: usize = 10;
const COLUMN_GAP: &str = "  ";

pub struct TaskTable<'a> {
    pub snapshot: &'a Snapshot,
    pub viewport: &'a ViewportState,
    pub visible_rows: usize,
}

impl<'a> TaskTable<'a> {
    pub fn new(snapshot: &'a Snapshot, viewport: &'a ViewportState, visible_rows: usize) -> Self {
        Self {
            snapshot,
            viewport,
            visible_rows,
        }
    }

    /// "current/total", only when the list does not fit on one page.
    fn scroll_indicator(&self) -> Option<String> {
        if self.snapshot.len() <= self.visible_rows {
            return None;
        }
        let current = self.viewport.selected.map_or(0, |i| i + 1);
        Some(format!("{}/{}", current, self.snapshot.len()))
    }

    fn column_header() -> String {
        format!(
            "{:>id$}{gap}{:>id$}{gap}{}{gap}{}",
            "PID",
            "TID",
            pad_to_width("COMMAND", LABEL_MAX_WIDTH),
            pad_to_width("STATE", STATE_WIDTH),
            id = ID_WIDTH,
            gap = COLUMN_GAP,
        )
    }
}

impl Component for TaskTable<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        if area.height == 0 {
            return;
        }
        let width = usize::from(area.width);
        let header_style = Style::default().add_modifier(Modifier::BOLD);

        let mut lines = vec![Line::from(Span::styled(Self::column_header(), header_style))];
        lines.push(Line::from("─".repeat(width)));

        let range = self.viewport.visible_range(self.snapshot.len(), self.visible_rows);
        let first = range.start;
        for (offset, entity) in self.snapshot.slice(range).iter().enumerate() {
            let text = format_row(entity);
            let line = if self.viewport.is_selected(first + offset) {
                Line::from(Span::styled(
                    pad_to_width(&text, width),
                    Style::default().add_modifier(Modifier::BOLD | Modifier::REVERSED),
                ))
            } else {
                Line::from(Span::styled(text, state_style(entity.state())))
            };
            lines.push(line);
        }

        if self.snapshot.is_empty() && area.height > 2 {
            lines.push(Line::from(Span::styled(
                "(no tasks)",
                Style::default().fg(Color::DarkGray),
            )));
        }

        frame.render_widget(Paragraph::new(lines), area);

        if let Some(indicator) = self.scroll_indicator() {
            let header_row = Rect { height: 1, ..area };
            let indicator = Paragraph::new(Line::from(Span::styled(indicator, header_style)).right_aligned());
            frame.render_widget(indicator, header_row);
        }
    }
}

/// One fixed-width table row: PID, TID, COMMAND, STATE.
pub fn format_row(entity: &MonitoredEntity) -> String {
    format!(
        "{:>id$}{gap}{:>id$}{gap}{}{gap}{}",
        entity.primary_id(),
        entity.sub_id(),
        pad_to_width(entity.label().as_str(), LABEL_MAX_WIDTH),
        pad_to_width(entity.state().label(), STATE_WIDTH),
        id = ID_WIDTH,
        gap = COLUMN_GAP,
    )
}

/// Pads (or cuts) `text` to exactly `width` terminal columns.
///
/// Uses display width rather than char count so wide characters in
/// command names do not push the STATE column out of line.
fn pad_to_width(text: &str, width: usize) -> String {
    let mut out = String::with_capacity(width);
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        out.push(c);
        used += w;
    }
    out.extend(std::iter::repeat_n(' ', width - used));
    debug_assert_eq!(out.width(), width);
    out
}

/// Color coding for non-selected rows.
fn state_style(state: TaskState) -> Style {
    match state {
        TaskState::Running => Style::default().fg(Color::Green),
        TaskState::Sleeping => Style::default(),
        TaskState::DiskWait => Style::default().fg(Color::Yellow),
        TaskState::Zombie => Style::default().fg(Color::Red),
        TaskState::Stopped => Style::default().fg(Color::Magenta),
        TaskState::Unknown => Style::default().fg(Color::DarkGray),
    }
}
