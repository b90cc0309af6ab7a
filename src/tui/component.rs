use ratatui::Frame;
use ratatui::layout::Rect;

/// A reusable UI component.
///
/// Components in this architecture follow the React pattern:
/// - They receive data via props (struct fields).
/// - They render to a `Frame` within a given `Rect`.
///
/// Every section of the dashboard (header, task table, debug panel, footer)
/// is a component handed its own disjoint rows by the layout.
pub trait Component {
    /// Render the component into the given area.
    ///
    /// Takes `&mut self` so stateful components can update presentation
    /// caches during the render pass, as ratatui's `StatefulWidget` does.
    fn render(&mut self, frame: &mut Frame, area: Rect);
}
