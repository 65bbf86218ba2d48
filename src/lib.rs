// Site Behaviors Library
// Sticky sidebar positioning engine and mobile navigation state machine,
// driven through a small Document abstraction

// Core infrastructure - document model, events, errors, demo state
pub mod core;

// Sticky sidebar - options, pure engine, bound instances
pub mod sticky;

// Navigation - state machine and class rendering
pub mod nav;

// Runtime configuration (config.yaml)
pub mod config;
pub mod config_validation;

// Demo storefront page
pub mod storefront;

// UI - TUI views of the demo
pub mod ui;

// Utilities - CSS values, logging
pub mod utilities;

// Application constants
pub mod constants;

// Re-export commonly used items for convenience
pub use config::SiteConfig;
pub use crate::core::{App, ConfigError, Document, ElementId, PageEvent, PageModel};
pub use nav::{NavEvent, NavState, NavigationController};
pub use sticky::{compute, Placement, PositionMode, StickyInstance, StickyOptions, StickySidebar};
