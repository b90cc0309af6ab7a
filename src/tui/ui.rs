use chrono::Local;
use ratatui::Frame;
use ratatui::layout::Rect;

use crate::core::geometry::LayoutGeometry;
use crate::core::state::App;
use crate::tui::component::Component;
use crate::tui::components::{DebugPanel, Footer, Header, TaskTable};

/// Rows assigned to each section for one frame. Sections that do not fit
/// are `None` and simply not drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameAreas {
    pub header: Rect,
    pub content: Option<Rect>,
    pub debug: Option<Rect>,
    pub footer: Option<Rect>,
}

/// Splits `area` top to bottom into disjoint section rects.
///
/// Header first, footer pinned to the last row, then content and the debug
/// panel from whatever is left. The debug panel is all or nothing; a
/// window too small for any task row gets no content section at all.
pub fn frame_areas(geometry: &LayoutGeometry, area: Rect) -> FrameAreas {
    let header_height = geometry.header_lines.min(area.height);
    let header = Rect {
        height: header_height,
        ..area
    };
    let mut remaining = area.height - header_height;
    let mut y = area.y + header_height;

    let footer = if geometry.footer_lines > 0 && remaining >= geometry.footer_lines {
        remaining -= geometry.footer_lines;
        Some(Rect {
            y: area.bottom() - geometry.footer_lines,
            height: geometry.footer_lines,
            ..area
        })
    } else {
        None
    };

    let content = if geometry.shows_content() && remaining > geometry.table_header_lines {
        let height = (geometry.table_header_lines + geometry.visible_rows).min(remaining);
        let rect = Rect { y, height, ..area };
        y += height;
        remaining -= height;
        Some(rect)
    } else {
        None
    };

    let debug = if geometry.debug_lines > 0 && remaining >= geometry.debug_lines {
        Some(Rect {
            y,
            height: geometry.debug_lines,
            ..area
        })
    } else {
        None
    };

    FrameAreas {
        header,
        content,
        debug,
        footer,
    }
}

/// Draws one full frame from the current application state.
///
/// Every section is rebuilt from scratch each call; ratatui then flushes
/// the finished buffer in one go, so the viewer never sees a half-drawn
/// frame.
pub fn draw_ui(frame: &mut Frame, app: &App) {
    let areas = frame_areas(&app.geometry, frame.area());

    let clock = Local::now().format("%H:%M:%S").to_string();
    Header::new(app.source_name.as_str(), app.snapshot.len(), clock).render(frame, areas.header);

    if let Some(content) = areas.content {
        TaskTable::new(
            &app.snapshot,
            &app.viewport,
            usize::from(app.geometry.visible_rows),
        )
        .render(frame, content);
    }

    if let Some(debug) = areas.debug {
        DebugPanel::new(&app.stats, &app.geometry, app.state).render(frame, debug);
    }

    if let Some(footer) = areas.footer {
        Footer.render(frame, footer);
    }
}
