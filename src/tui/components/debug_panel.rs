//! # Debug Panel Component
//!
//! Bordered box with the session counters, toggled with `d`. Shows how the
//! event loop has been woken up so far (resize signals, timeouts, keys) and
//! the last fault it recorded.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::core::geometry::LayoutGeometry;
use crate::core::state::LoopState;
use crate::core::stats::SessionStats;
use crate::tui::component::Component;

pub struct DebugPanel<'a> {
    pub stats: &'a SessionStats,
    pub geometry: &'a LayoutGeometry,
    pub state: LoopState,
}

impl<'a> DebugPanel<'a> {
    pub fn new(stats: &'a SessionStats, geometry: &'a LayoutGeometry, state: LoopState) -> Self {
        Self {
            stats,
            geometry,
            state,
        }
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let label = Style::default().fg(Color::DarkGray);
        let error_style = if self.stats.has_error() {
            Style::default().fg(Color::Red)
        } else {
            Style::default()
        };
        vec![
            Line::from(vec![
                Span::styled("signals   ", label),
                Span::raw(format!(
                    "resizes: {}  interrupts: {}",
                    self.stats.resize_count, self.stats.interrupt_count
                )),
            ]),
            Line::from(vec![
                Span::styled("waits     ", label),
                Span::raw(format!(
                    "timeouts: {}  inputs: {}  loop: {}",
                    self.stats.timeout_count,
                    self.stats.input_count,
                    state_name(self.state)
                )),
            ]),
            Line::from(vec![
                Span::styled("last err  ", label),
                Span::styled(self.stats.last_error_description(), error_style),
            ]),
            Line::from(vec![
                Span::styled("layout    ", label),
                Span::raw(format!(
                    "{}x{}  visible rows: {}  provider faults: {}",
                    self.geometry.cols,
                    self.geometry.rows,
                    self.geometry.visible_rows,
                    self.stats.provider_fault_count
                )),
            ]),
        ]
    }
}

fn state_name(state: LoopState) -> &'static str {
    match state {
        LoopState::Running => "running",
        LoopState::Draining => "draining",
        LoopState::Terminating => "terminating",
    }
}

impl Component for DebugPanel<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow))
            .title(" Debug ");
        frame.render_widget(Paragraph::new(self.lines()).block(block), area);
    }
}
