// Site Behaviors
// Terminal demo: a storefront page with a sticky sidebar and the mobile navigation

// IMPORTS ------------------>>

use anyhow::{Context, Result};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{self, disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::{Path, PathBuf};
use tracing::{error, info};

use site_behaviors::config_validation::load_and_validate_config;
use site_behaviors::core::App;
use site_behaviors::ui::{canvas_size, run_app};
use site_behaviors::utilities::init_file_logging;

//--------------------------------------------------------<<

// ┌──────────────────────────────────────────────────────────────────────────────────────────────────────────────────┐
// │                                                 MAIN ENTRY POINT                                                 │
// └──────────────────────────────────────────────────────────────────────────────────────────────────────────────────┘

fn main() -> Result<()> {
    // Optional config path as the only argument
    let config_path = std::env::args_os().nth(1).map(PathBuf::from);

    // Load and validate configuration from YAML file
    let config = load_and_validate_config(config_path)?;

    if let Some(log_file) = &config.application.log_file {
        init_file_logging(Path::new(log_file))?;
    }

    let (columns, rows) = terminal::size().context("Failed to read terminal size")?;
    let (columns, rows) = canvas_size(columns, rows);
    let mut app = App::new(config, columns, rows)?;
    info!(columns, rows, "starting demo");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(ref e) = result {
        error!(error = %e, "demo failed");
    }

    result
}
