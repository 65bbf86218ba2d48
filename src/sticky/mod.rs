// Sticky sidebar module
// Keeps a sidebar in view while a taller sibling scrolls, bounded by its container

pub mod engine;
pub mod instance;
pub mod options;
pub mod sidebar;

pub use engine::{
    compute, BoxMetrics, InnerStyle, Measurements, Placement, PositionMode, ProbeFlags, SidebarHeight, StickyState,
};
pub use instance::{Recompute, StickyInstance, StyleWrite};
pub use options::{CssPosition, PixelInput, SidebarBehavior, StickyOptions, StickyOptionsYaml};
pub use sidebar::StickySidebar;
