// Event Handling
// Page events driving the behaviors, and the terminal key map of the demo

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind};

use super::dom::ElementId;

/// Events a page delivers to the sticky sidebars and the navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageEvent {
    /// The document scrolled
    Scroll,

    /// The window changed size
    Resize,

    /// The size of an element's content changed
    ContentResized(ElementId),

    /// An element was clicked
    Click(ElementId),
}

/// Application events that can be handled
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// Quit the application
    Quit,

    /// Scroll up by a number of steps
    ScrollUp(u16),

    /// Scroll down by a number of steps
    ScrollDown(u16),

    /// Page up
    PageUp,

    /// Page down
    PageDown,

    /// Jump to the top of the page
    Home,

    /// Jump to the bottom of the page
    End,

    /// Terminal resized to columns x rows
    Resize(u16, u16),

    /// Open or close the menu
    ToggleMenu,

    /// Nav item by 0-based position
    NavItem(usize),

    /// Open the second screen of the current item
    SecondScreen,

    /// Back from the second screen
    Back,

    /// Toggle the search popup
    Search,

    /// Toggle the language popup
    Globe,

    /// Select the next product filter
    CycleFilter,

    /// Close whatever is open
    Dismiss,

    /// No operation
    None,
}

/// Event handler that converts terminal events to application events
pub struct EventHandler;

impl EventHandler {
    /// Convert a crossterm event to an application event
    pub fn handle(event: Event) -> AppEvent {
        match event {
            Event::Key(key) => Self::handle_key(key),
            Event::Mouse(mouse) => Self::handle_mouse(mouse),
            Event::Resize(columns, rows) => AppEvent::Resize(columns, rows),
            _ => AppEvent::None,
        }
    }

    /// Handle keyboard events
    fn handle_key(key: KeyEvent) -> AppEvent {
        // Only handle key press events
        if key.kind != KeyEventKind::Press {
            return AppEvent::None;
        }

        match key.code {
            // Quit
            KeyCode::Char('q') => AppEvent::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => AppEvent::Quit,

            // Scrolling
            KeyCode::Up | KeyCode::Char('k') => AppEvent::ScrollUp(1),
            KeyCode::Down | KeyCode::Char('j') => AppEvent::ScrollDown(1),
            KeyCode::PageUp => AppEvent::PageUp,
            KeyCode::PageDown => AppEvent::PageDown,
            KeyCode::Home => AppEvent::Home,
            KeyCode::End => AppEvent::End,

            // Navigation
            KeyCode::Char('m') => AppEvent::ToggleMenu,
            KeyCode::Char(c @ '1'..='9') => AppEvent::NavItem(c as usize - '1' as usize),
            KeyCode::Char('n') => AppEvent::SecondScreen,
            KeyCode::Char('b') => AppEvent::Back,
            KeyCode::Char('/') => AppEvent::Search,
            KeyCode::Char('g') => AppEvent::Globe,
            KeyCode::Char('f') => AppEvent::CycleFilter,
            KeyCode::Esc => AppEvent::Dismiss,

            _ => AppEvent::None,
        }
    }

    /// Handle mouse events
    fn handle_mouse(mouse: MouseEvent) -> AppEvent {
        match mouse.kind {
            MouseEventKind::ScrollUp => AppEvent::ScrollUp(1),
            MouseEventKind::ScrollDown => AppEvent::ScrollDown(1),
            _ => AppEvent::None,
        }
    }
}
