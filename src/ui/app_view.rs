// Application View
// Main application layout and rendering

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{render_page, Styles};
use crate::core::{App, Document};

const HEADER_ROWS: u16 = 3;
const FOOTER_ROWS: u16 = 3;
const PANEL_COLUMNS: u16 = 36;

/// Cells available to the page canvas in a terminal of `columns` x `rows`
pub fn canvas_size(columns: u16, rows: u16) -> (u16, u16) {
    let width = columns.saturating_sub(PANEL_COLUMNS + 2).max(1);
    let height = rows.saturating_sub(HEADER_ROWS + FOOTER_ROWS + 2).max(1);
    (width, height)
}

/// Render the entire application
pub fn render_app(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_ROWS), // Header
            Constraint::Min(0),              // Main content
            Constraint::Length(FOOTER_ROWS), // Footer
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);
    render_main_content(f, app, chunks[1]);
    render_footer(f, chunks[2]);
}

/// Render the header bar
fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let header = Paragraph::new(app.config.application.title.as_str())
        .style(Styles::header())
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, area);
}

/// Render the page canvas and the info panel
fn render_main_content(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(PANEL_COLUMNS)])
        .split(area);

    render_page(f, app, chunks[0]);
    render_info_panel(f, app, chunks[1]);
}

fn field(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:<10}", label), Styles::label()),
        Span::styled(value, Styles::value()),
    ])
}

/// Sticky and navigation state, plus the writes of the last event
fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let page = &app.page;
    let mut lines = vec![
        Line::from(Span::styled("Viewport", Styles::section_title())),
        field("width", format!("{:.0}px", page.body_width())),
        field("height", format!("{:.0}px", page.viewport_height())),
        field("scroll", format!("{:.0}px", page.scroll_top())),
        Line::from(""),
        Line::from(Span::styled("Sticky", Styles::section_title())),
    ];

    for sidebar in &app.sidebars {
        let status = if sidebar.is_initialized() {
            format!("{} bound", sidebar.instances().len())
        } else {
            "deferred".to_string()
        };
        lines.push(field(sidebar.selector(), status));
    }
    if let Some(mode) = app.sticky_mode() {
        lines.push(field("mode", mode.as_str().to_string()));
    }
    for result in &app.last_results {
        if let Some(top) = result.placement.top {
            lines.push(field("top", format!("{:.0}px", top)));
        }
        for write in &result.writes {
            let value = if write.value.is_empty() { "\"\"" } else { write.value.as_str() };
            lines.push(Line::from(Span::styled(format!("  {}: {}", write.property, value), Styles::write())));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("Navigation", Styles::section_title())));
    lines.push(field("state", app.navigation.state().to_string()));
    lines.push(field("filter", app.navigation.filter().unwrap_or("-").to_string()));
    lines.push(field("scroll", if app.scroll_locked() { "locked" } else { "free" }.to_string()));

    let panel = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Styles::border_unfocused())
            .title("State"),
    );
    f.render_widget(panel, area);
}

/// Render the footer bar
fn render_footer(f: &mut Frame, area: Rect) {
    let help_text = "q: Quit | ↑/↓: Scroll | PgUp/PgDn | Home/End | m: Menu | 1-9: Item | n: Screen | b: Back | /: Search | g: Region | f: Filter | Esc: Close";

    let footer = Paragraph::new(help_text)
        .style(Styles::footer())
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(footer, area);
}
