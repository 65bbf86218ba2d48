// UI Styles
// Color schemes and styling for the TUI

use ratatui::style::{Color, Modifier, Style};

use crate::sticky::PositionMode;

/// Application color scheme and styles
pub struct Styles;

impl Styles {
    // === Header / Footer ===

    pub fn header() -> Style {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    }

    pub fn footer() -> Style {
        Style::default().fg(Color::Yellow)
    }

    // === Page Boxes ===

    pub fn page_header() -> Style {
        Style::default().fg(Color::Blue)
    }

    pub fn page_footer() -> Style {
        Style::default().fg(Color::Blue)
    }

    pub fn content() -> Style {
        Style::default().fg(Color::Gray)
    }

    /// Sidebar outline (the element that keeps its place in flow)
    pub fn sidebar() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn widget() -> Style {
        Style::default().fg(Color::White)
    }

    /// Inner wrapper, colored by its position mode
    pub fn inner(mode: PositionMode) -> Style {
        let color = match mode {
            PositionMode::Static => Color::Gray,
            PositionMode::Fixed => Color::Green,
            PositionMode::Absolute => Color::Yellow,
        };
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    }

    // === Navigation Overlays ===

    pub fn popup() -> Style {
        Style::default().fg(Color::White).bg(Color::Rgb(30, 30, 46))
    }

    pub fn popup_border() -> Style {
        Style::default().fg(Color::Magenta)
    }

    pub fn item_current() -> Style {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD | Modifier::REVERSED)
    }

    pub fn item_normal() -> Style {
        Style::default()
    }

    // === Info Panel ===

    pub fn label() -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn value() -> Style {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    }

    pub fn write() -> Style {
        Style::default().fg(Color::Green)
    }

    pub fn section_title() -> Style {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    }

    // === Border Styles ===

    pub fn border_focused() -> Style {
        Style::default().fg(Color::Cyan)
    }

    pub fn border_unfocused() -> Style {
        Style::default().fg(Color::Gray)
    }
}
