//! # Header Component
//!
//! Top two rows of the dashboard: title and live status on the first row,
//! a separator on the second.
//!
//! ## Stateless Component
//!
//! Header is purely presentational. It receives all data as props:
//!
//! ```rust,ignore
//! let mut header = Header::new("mock", 123, "12:04:51".to_string());
//! header.render(frame, area);
//! ```
//!
//! ## Narrow Terminals
//!
//! The status text is right-aligned and drawn first, then the title on top
//! of it, so the title survives when the two overlap.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;

pub const APP_TITLE: &str = "ProcessExplorerLite";

pub struct Header {
    /// Provider name, e.g. "mock" or "proc"
    pub source_name: String,
    pub task_count: usize,
    /// Wall-clock time formatted for display
    pub clock: String,
}

impl Header {
    pub fn new(source_name: impl Into<String>, task_count: usize, clock: String) -> Self {
        Self {
            source_name: source_name.into(),
            task_count,
            clock,
        }
    }

    fn status_text(&self) -> String {
        format!(
            "{} tasks | source: {} | {} | Press 'q' to quit",
            self.task_count, self.source_name, self.clock
        )
    }
}

impl Component for Header {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        if area.height == 0 {
            return;
        }
        let accent = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
        let title_row = Rect { height: 1, ..area };

        let status = Paragraph::new(Line::from(Span::styled(self.status_text(), accent)).right_aligned());
        frame.render_widget(status, title_row);
        frame.render_widget(Span::styled(APP_TITLE, accent), title_row);

        if area.height > 1 {
            let separator_row = Rect {
                y: area.y + 1,
                height: 1,
                ..area
            };
            let separator = "─".repeat(usize::from(area.width));
            frame.render_widget(Span::raw(separator), separator_row);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::buffer_text;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_header_shows_title_and_status() {
        let mut terminal = Terminal::new(TestBackend::new(100, 2)).unwrap();
        let mut header = Header::new("mock", 123, "09:15:00".to_string());

        terminal.draw(|f| header.render(f, f.area())).unwrap();

        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains(APP_TITLE));
        assert!(text.contains("123 tasks"));
        assert!(text.contains("source: mock"));
        assert!(text.contains("09:15:00"));
        assert!(text.contains("Press 'q' to quit"));
        assert!(text.contains("────"));
    }

    #[test]
    fn test_header_title_wins_when_narrow() {
        let mut terminal = Terminal::new(TestBackend::new(24, 2)).unwrap();
        let mut header = Header::new("proc", 5, "00:00:00".to_string());

        terminal.draw(|f| header.render(f, f.area())).unwrap();

        let text = buffer_text(terminal.backend().buffer());
        assert!(text.starts_with(APP_TITLE));
    }

    #[test]
    fn test_header_single_row_skips_separator() {
        let mut terminal = Terminal::new(TestBackend::new(80, 1)).unwrap();
        let mut header = Header::new("mock", 0, "00:00:00".to_string());

        terminal.draw(|f| header.render(f, f.area())).unwrap();

        let text = buffer_text(terminal.backend().buffer());
        assert!(!text.contains('─'));
    }
}
