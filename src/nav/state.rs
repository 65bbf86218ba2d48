// Navigation State Machine
// Menu, second screen and popups as one explicit state; every event is a total transition

use std::fmt;

/// Where the navigation currently is
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum NavState {
    /// Nothing open
    #[default]
    Closed,
    /// Menu open, optionally on a selected item
    MenuOpen { item: Option<String> },
    /// Menu open on the second-level screen of an item
    SecondScreen { item: String },
    SearchOpen,
    GlobeOpen,
}

/// Inputs of the state machine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavEvent {
    /// Hamburger icon
    ToggleMenu,
    /// Top-level nav item (or its menu category)
    NavItemClicked(String),
    /// First-screen top link of an item
    SecondScreenRequested(String),
    /// Second-screen back link
    BackRequested,
    SearchToggled,
    GlobeToggled,
    /// Click outside the navigation and the menu
    OutsideClicked { on_blackout: bool },
    /// Close everything (Escape)
    Dismiss,
}

impl NavState {
    /// The state after `event`; unchanged when the event has no meaning here
    pub fn next(&self, event: &NavEvent) -> NavState {
        use NavEvent as E;
        use NavState as S;

        match (self, event) {
            // Menu toggling: any menu state closes, anything else opens a bare menu
            (S::MenuOpen { .. } | S::SecondScreen { .. }, E::ToggleMenu) => S::Closed,
            (_, E::ToggleMenu) => S::MenuOpen { item: None },

            // Clicking the current item again closes the menu
            (S::MenuOpen { item: Some(current) }, E::NavItemClicked(item)) if current == item => S::Closed,
            (S::SecondScreen { item: current }, E::NavItemClicked(item)) if current == item => S::Closed,
            (S::SecondScreen { .. }, E::NavItemClicked(item)) => S::SecondScreen { item: item.clone() },
            (_, E::NavItemClicked(item)) => S::MenuOpen {
                item: Some(item.clone()),
            },

            (S::MenuOpen { .. } | S::SecondScreen { .. }, E::SecondScreenRequested(item)) => {
                S::SecondScreen { item: item.clone() }
            }

            (S::SecondScreen { item }, E::BackRequested) => S::MenuOpen {
                item: Some(item.clone()),
            },

            // Popups are exclusive with each other and with the menu
            (S::SearchOpen, E::SearchToggled) => S::Closed,
            (_, E::SearchToggled) => S::SearchOpen,
            (S::GlobeOpen, E::GlobeToggled) => S::Closed,
            (_, E::GlobeToggled) => S::GlobeOpen,

            // Outside clicks always close the menu; popups only close on the blackout
            (S::MenuOpen { .. } | S::SecondScreen { .. }, E::OutsideClicked { .. }) => S::Closed,
            (S::SearchOpen | S::GlobeOpen, E::OutsideClicked { on_blackout: true }) => S::Closed,

            (_, E::Dismiss) => S::Closed,

            (state, _) => state.clone(),
        }
    }

    /// Whether the menu (first or second screen) is shown
    pub fn menu_open(&self) -> bool {
        matches!(self, NavState::MenuOpen { .. } | NavState::SecondScreen { .. })
    }

    /// Item highlighted in the nav bar and the menu
    pub fn current_item(&self) -> Option<&str> {
        match self {
            NavState::MenuOpen { item } => item.as_deref(),
            NavState::SecondScreen { item } => Some(item),
            _ => None,
        }
    }

    pub fn second_screen_open(&self) -> bool {
        matches!(self, NavState::SecondScreen { .. })
    }

    pub fn search_open(&self) -> bool {
        matches!(self, NavState::SearchOpen)
    }

    pub fn globe_open(&self) -> bool {
        matches!(self, NavState::GlobeOpen)
    }

    /// The page is dimmed while a popup is open
    pub fn blackout(&self) -> bool {
        self.search_open() || self.globe_open()
    }

    /// Page scrolling is locked while the menu covers it
    pub fn no_scroll(&self) -> bool {
        self.menu_open()
    }
}

impl fmt::Display for NavState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavState::Closed => write!(f, "closed"),
            NavState::MenuOpen { item: None } => write!(f, "menu"),
            NavState::MenuOpen { item: Some(item) } => write!(f, "menu ({})", item),
            NavState::SecondScreen { item } => write!(f, "menu > {}", item),
            NavState::SearchOpen => write!(f, "search"),
            NavState::GlobeOpen => write!(f, "language"),
        }
    }
}
