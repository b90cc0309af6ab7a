use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Span;

use crate::tui::component::Component;

pub const KEY_LEGEND: &str = "Keys: [↑/↓] navigate | [d]ebug | [r]efresh | [h]elp | [q]uit";

/// Bottom-anchored key legend.
pub struct Footer;

impl Component for Footer {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(
            Span::styled(KEY_LEGEND, Style::default().fg(Color::Green)),
            area,
        );
    }
}
