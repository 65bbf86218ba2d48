// Navigation Controller
// Maps clicks to state machine events and renders the state as CSS classes
//
// Rendering is declarative: after every event the full class set is written from the
// current state, so the page never drifts from the machine.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::*;
use crate::core::{Document, ElementId};

use super::state::{NavEvent, NavState};

/// Class names of the navigation markup and its state classes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavClasses {
    pub menu_open: String,
    pub screen_open: String,
    pub filter_selected: String,
    pub current_item: String,
    pub open: String,
    pub selected: String,
    pub no_scroll: String,

    pub navigation: String,
    pub nav_item: String,
    pub toggle_icon: String,
    pub animated_icon: String,
    pub menu: String,
    pub menu_category: String,
    pub first_screen: String,
    pub second_screen: String,
    pub second_screen_item: String,
    pub mobile_top_links: String,
    pub globe_popup: String,
    pub globe_icon: String,
    pub search_popup: String,
    pub search_icon: String,
    pub blackout: String,
    pub product_filters: String,
    pub filter_content: String,
}

impl Default for NavClasses {
    fn default() -> Self {
        Self {
            menu_open: CLASS_MENU_OPEN.to_string(),
            screen_open: CLASS_SCREEN_OPEN.to_string(),
            filter_selected: CLASS_FILTER_SELECTED.to_string(),
            current_item: CLASS_CURRENT_ITEM.to_string(),
            open: CLASS_OPEN.to_string(),
            selected: CLASS_SELECTED.to_string(),
            no_scroll: CLASS_NO_SCROLL.to_string(),
            navigation: CLASS_NAVIGATION.to_string(),
            nav_item: CLASS_NAV_ITEM.to_string(),
            toggle_icon: CLASS_TOGGLE_ICON.to_string(),
            animated_icon: CLASS_ANIMATED_ICON.to_string(),
            menu: CLASS_MENU.to_string(),
            menu_category: CLASS_MENU_CATEGORY.to_string(),
            first_screen: CLASS_FIRST_SCREEN.to_string(),
            second_screen: CLASS_SECOND_SCREEN.to_string(),
            second_screen_item: CLASS_SECOND_SCREEN_ITEM.to_string(),
            mobile_top_links: CLASS_MOBILE_TOP_LINKS.to_string(),
            globe_popup: CLASS_GLOBE_POPUP.to_string(),
            globe_icon: CLASS_GLOBE_ICON.to_string(),
            search_popup: CLASS_SEARCH_POPUP.to_string(),
            search_icon: CLASS_SEARCH_ICON.to_string(),
            blackout: CLASS_BLACKOUT.to_string(),
            product_filters: CLASS_PRODUCT_FILTERS.to_string(),
            filter_content: CLASS_FILTER_CONTENT.to_string(),
        }
    }
}

impl NavClasses {
    /// Top links of the first screen (open a second screen)
    fn top_links_selector(&self) -> String {
        format!(".{} .{} li", self.first_screen, self.mobile_top_links)
    }

    /// Top links of the second screen (back)
    fn back_links_selector(&self) -> String {
        format!(".{} .{} li", self.second_screen, self.mobile_top_links)
    }

    fn filter_items_selector(&self) -> String {
        format!(".{} li", self.product_filters)
    }

    fn search_input_selector(&self) -> String {
        format!(".{} input", self.search_popup)
    }
}

/// What a click means
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickAction {
    Nav(NavEvent),
    /// Product filter chosen
    Filter(String),
}

#[derive(Debug, Clone, Default)]
pub struct NavigationController {
    classes: NavClasses,
    state: NavState,
    filter: Option<String>,
}

impl NavigationController {
    pub fn new(classes: NavClasses) -> Self {
        Self {
            classes,
            state: NavState::Closed,
            filter: None,
        }
    }

    pub fn state(&self) -> &NavState {
        &self.state
    }

    pub fn filter(&self) -> Option<&str> {
        self.filter.as_deref()
    }

    pub fn classes(&self) -> &NavClasses {
        &self.classes
    }

    /// Apply an event and re-render; true when the state changed
    pub fn dispatch(&mut self, doc: &mut dyn Document, event: NavEvent) -> bool {
        let next = self.state.next(&event);
        let changed = next != self.state;

        if changed {
            debug!(from = %self.state, to = %next, event = ?event, "navigation transition");
        }

        let search_was_open = self.state.search_open();
        self.state = next;
        self.render(doc);

        if let Some(input) = doc.query_all(&self.classes.search_input_selector()).first().copied() {
            match (search_was_open, self.state.search_open()) {
                (false, true) => doc.focus(input),
                (true, false) => doc.blur(input),
                _ => {}
            }
        }

        changed
    }

    /// Select a product filter; independent of the menu state
    pub fn select_filter(&mut self, doc: &mut dyn Document, item: &str) {
        debug!(item, "product filter selected");
        self.filter = Some(item.to_string());
        self.render_filters(doc);
    }

    /// Translate a click on `target` into an action, if it means anything
    pub fn event_for_click(&self, doc: &dyn Document, target: ElementId) -> Option<ClickAction> {
        let c = &self.classes;

        if let Some(link) = hit(doc, target, &c.top_links_selector()) {
            return Some(ClickAction::Nav(NavEvent::SecondScreenRequested(item_of(doc, link))));
        }
        if hit(doc, target, &c.back_links_selector()).is_some() {
            return Some(ClickAction::Nav(NavEvent::BackRequested));
        }
        if let Some(filter) = hit(doc, target, &c.filter_items_selector()) {
            return Some(ClickAction::Filter(item_of(doc, filter)));
        }
        if hit(doc, target, &class_selector(&c.search_icon)).is_some() {
            return Some(ClickAction::Nav(NavEvent::SearchToggled));
        }
        if hit(doc, target, &class_selector(&c.globe_icon)).is_some() {
            return Some(ClickAction::Nav(NavEvent::GlobeToggled));
        }
        if hit(doc, target, &class_selector(&c.toggle_icon)).is_some() {
            return Some(ClickAction::Nav(NavEvent::ToggleMenu));
        }
        if let Some(item) = hit(doc, target, &class_selector(&c.nav_item)) {
            return Some(ClickAction::Nav(NavEvent::NavItemClicked(item_of(doc, item))));
        }

        // Clicks inside the menu or on the animated icon are not outside clicks
        let inside = [&c.animated_icon, &c.menu]
            .iter()
            .any(|class| hit(doc, target, &class_selector(class)).is_some());
        if inside {
            return None;
        }

        Some(ClickAction::Nav(NavEvent::OutsideClicked {
            on_blackout: doc.has_class(target, &c.blackout),
        }))
    }

    /// Handle a click end to end; true when anything changed
    pub fn handle_click(&mut self, doc: &mut dyn Document, target: ElementId) -> bool {
        match self.event_for_click(doc, target) {
            Some(ClickAction::Nav(event)) => self.dispatch(doc, event),
            Some(ClickAction::Filter(item)) => {
                let changed = self.filter.as_deref() != Some(item.as_str());
                self.select_filter(doc, &item);
                changed
            }
            None => false,
        }
    }

    /// Write every state class from the current state
    pub fn render(&self, doc: &mut dyn Document) {
        let c = &self.classes;
        let state = &self.state;

        set_all(doc, &c.navigation, &c.menu_open, state.menu_open());
        set_all(doc, &c.animated_icon, &c.open, state.menu_open());
        set_all(doc, &c.second_screen, &c.screen_open, state.second_screen_open());

        let current = state.current_item();
        for group in [&c.nav_item, &c.menu_category, &c.second_screen_item] {
            for element in doc.query_all(&class_selector(group)) {
                let is_current = current.is_some() && doc.attribute(element, ATTR_ITEM).as_deref() == current;
                doc.set_class(element, &c.current_item, is_current);
            }
        }

        set_all(doc, &c.search_popup, &c.open, state.search_open());
        set_all(doc, &c.search_icon, &c.selected, state.search_open());
        set_all(doc, &c.globe_popup, &c.open, state.globe_open());
        set_all(doc, &c.globe_icon, &c.selected, state.globe_open());
        set_all(doc, &c.blackout, &c.open, state.blackout());

        let root = doc.root();
        doc.set_class(root, &c.no_scroll, state.no_scroll());

        self.render_filters(doc);
    }

    fn render_filters(&self, doc: &mut dyn Document) {
        let c = &self.classes;
        let selected = self.filter.as_deref();

        let mut targets = doc.query_all(&c.filter_items_selector());
        targets.extend(doc.query_all(&class_selector(&c.filter_content)));
        for element in targets {
            let is_selected = selected.is_some() && doc.attribute(element, ATTR_ITEM).as_deref() == selected;
            doc.set_class(element, &c.filter_selected, is_selected);
        }
    }
}

fn class_selector(class: &str) -> String {
    format!(".{}", class)
}

/// Innermost element matching `selector` that contains `target`
fn hit(doc: &dyn Document, target: ElementId, selector: &str) -> Option<ElementId> {
    doc.query_all(selector)
        .into_iter()
        .filter(|element| doc.is_within(target, *element))
        .last()
}

fn item_of(doc: &dyn Document, element: ElementId) -> String {
    doc.attribute(element, ATTR_ITEM).unwrap_or_default()
}

fn set_all(doc: &mut dyn Document, class: &str, state_class: &str, enabled: bool) {
    for element in doc.query_all(&class_selector(class)) {
        doc.set_class(element, state_class, enabled);
    }
}
