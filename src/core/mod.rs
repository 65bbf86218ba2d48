// Core infrastructure module
// Document abstraction, the in-memory page, events, errors and the demo application state

pub mod app;
pub mod app_config;
pub mod dom;
pub mod error;
pub mod events;
pub mod page;

pub use app::App;
pub use dom::{Document, ElementId};
pub use error::ConfigError;
pub use events::{AppEvent, EventHandler, PageEvent};
pub use page::{Edges, PageModel};
