// Navigation module
// Mobile navigation: menu, second-level screens, search and language popups, product filters

pub mod controller;
pub mod state;

pub use controller::{ClickAction, NavClasses, NavigationController};
pub use state::{NavEvent, NavState};
