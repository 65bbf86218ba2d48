// UI module
// TUI views of the storefront demo

pub mod app_view;
pub mod page_view;
pub mod styles;

use anyhow::Result;
use crossterm::event;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::Stdout;
use std::time::Duration;

use crate::core::{App, AppEvent, EventHandler};

pub use app_view::{canvas_size, render_app};
pub use page_view::render_page;
pub use styles::Styles;

/// Run the main application event loop
pub fn run_app(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
) -> Result<()> {
    loop {
        // Render the UI
        terminal.draw(|f| render_app(f, app))?;

        // Handle events
        if event::poll(Duration::from_millis(250))? {
            let event = event::read()?;
            let app_event = EventHandler::handle(event);

            handle_event(app, app_event);
        }

        // Check if we should quit
        if app.should_quit {
            return Ok(());
        }
    }
}

/// Handle an application event
pub fn handle_event(app: &mut App, event: AppEvent) {
    match event {
        AppEvent::Quit => app.quit(),
        AppEvent::ScrollUp(steps) => app.scroll_up(steps),
        AppEvent::ScrollDown(steps) => app.scroll_down(steps),
        AppEvent::PageUp => app.page_up(),
        AppEvent::PageDown => app.page_down(),
        AppEvent::Home => app.home(),
        AppEvent::End => app.end(),
        AppEvent::Resize(columns, rows) => {
            let (columns, rows) = canvas_size(columns, rows);
            app.resize(columns, rows);
        }
        AppEvent::ToggleMenu => app.toggle_menu(),
        AppEvent::NavItem(index) => app.nav_item(index),
        AppEvent::SecondScreen => app.second_screen(),
        AppEvent::Back => app.back(),
        AppEvent::Search => app.search(),
        AppEvent::Globe => app.globe(),
        AppEvent::CycleFilter => app.cycle_filter(),
        AppEvent::Dismiss => app.dismiss(),
        AppEvent::None => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::core::Document;
    use crate::nav::NavState;

    #[test]
    fn test_events_drive_the_app() {
        let config = SiteConfig::load(&SiteConfig::default_path()).unwrap();
        let mut app = App::new(config, 120, 40).unwrap();

        handle_event(&mut app, AppEvent::ScrollDown(5));
        assert_eq!(app.page.scroll_top(), 200.0);

        handle_event(&mut app, AppEvent::ToggleMenu);
        assert!(app.navigation.state().menu_open());
        handle_event(&mut app, AppEvent::Dismiss);
        assert_eq!(app.navigation.state(), &NavState::Closed);

        // 158 x 48 terminal cells leave a 120 x 40 canvas
        handle_event(&mut app, AppEvent::Resize(158, 48));
        assert_eq!(app.page.body_width(), 1200.0);

        handle_event(&mut app, AppEvent::Quit);
        assert!(app.should_quit);
    }
}
