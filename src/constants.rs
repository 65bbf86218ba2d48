// Application constants
// DOM contract names and engine tolerances

// ┌────────────────────────────────────────────────────────────────────────────────────────────────┐
// │                                         Sticky Sidebar                                         │
// └────────────────────────────────────────────────────────────────────────────────────────────────┘

/// Class of the wrapper created inside every sticky sidebar
pub const INNER_CLASS: &str = "sticky-sidebar-inner";

/// Id prefix of the injected stylesheet; the namespace is appended
pub const STYLESHEET_ID_PREFIX: &str = "sticky-sidebar-stylesheet-";

/// Width slack before a sidebar counts as stacked on a responsive layout
pub const RESPONSIVE_WIDTH_TOLERANCE: f64 = 50.0;

/// Padding used by the collapsing margin probe
pub const PROBE_PADDING: f64 = 1.0;

/// Placeholder min-height written on reset
pub const MIN_HEIGHT_PLACEHOLDER: &str = "1px";

/// Clears floated content inside the wrapper
pub fn clearfix_css() -> String {
    format!(".{}:after {{content: \"\"; display: table; clear: both;}}", INNER_CLASS)
}

// ┌────────────────────────────────────────────────────────────────────────────────────────────────┐
// │                                           Navigation                                           │
// └────────────────────────────────────────────────────────────────────────────────────────────────┘

pub const CLASS_MENU_OPEN: &str = "menu-open";
pub const CLASS_SCREEN_OPEN: &str = "screen-open";
pub const CLASS_FILTER_SELECTED: &str = "filter-selected";
pub const CLASS_CURRENT_ITEM: &str = "current-item";
pub const CLASS_OPEN: &str = "open";
pub const CLASS_SELECTED: &str = "selected";
pub const CLASS_NO_SCROLL: &str = "noScroll";

pub const CLASS_NAVIGATION: &str = "site-navigation";
pub const CLASS_NAV_ITEM: &str = "site-nav-item";
pub const CLASS_TOGGLE_ICON: &str = "site-nav-icon-toggle";
pub const CLASS_ANIMATED_ICON: &str = "animated-toggle-icon";
pub const CLASS_MENU: &str = "site-menu";
pub const CLASS_MENU_CATEGORY: &str = "site-menu-category";
pub const CLASS_FIRST_SCREEN: &str = "site-menu-first-screen";
pub const CLASS_SECOND_SCREEN: &str = "site-menu-second-screen";
pub const CLASS_SECOND_SCREEN_ITEM: &str = "site-menu-second-screen-item";
pub const CLASS_MOBILE_TOP_LINKS: &str = "site-menu-mobile-toplinks";
pub const CLASS_GLOBE_POPUP: &str = "site-menu-lang";
pub const CLASS_GLOBE_ICON: &str = "site-nav-icon-lang";
pub const CLASS_SEARCH_POPUP: &str = "site-menu-search";
pub const CLASS_SEARCH_ICON: &str = "site-nav-icon-search";
pub const CLASS_BLACKOUT: &str = "site-nav-blackout";
pub const CLASS_PRODUCT_FILTERS: &str = "site-menu-product-filters";
pub const CLASS_FILTER_CONTENT: &str = "site-menu-filter-content";

/// Attribute carrying the item name of menu entries and filters
pub const ATTR_ITEM: &str = "data-item";
