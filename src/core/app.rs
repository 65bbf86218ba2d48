// Application State
// Demo application: the storefront page, its sticky sidebars and the navigation controller

use anyhow::Result;
use tracing::{debug, info};

use super::dom::{Document, ElementId};
use super::events::PageEvent;
use super::page::PageModel;
use crate::config::{ApplicationConfig, SiteConfig};
use crate::constants::ATTR_ITEM;
use crate::nav::{NavEvent, NavigationController};
use crate::sticky::{PositionMode, Recompute, StickySidebar};
use crate::storefront::Storefront;

/// Main application state
#[derive(Debug)]
pub struct App {
    /// Runtime configuration (config.yaml)
    pub config: SiteConfig,

    /// The simulated document
    pub page: PageModel,

    /// Handles of the storefront elements
    pub storefront: Storefront,

    /// One binding per configured selector
    pub sidebars: Vec<StickySidebar>,

    pub navigation: NavigationController,

    /// Recomputes triggered by the last page event
    pub last_results: Vec<Recompute>,

    /// Whether the application should quit
    pub should_quit: bool,
}

impl App {
    /// Create the application for a canvas of `columns` x `rows` cells
    pub fn new(config: SiteConfig, columns: u16, rows: u16) -> Result<Self> {
        let (width, height) = Self::viewport_for(&config.application, columns, rows);
        Self::with_viewport(config, width, height)
    }

    /// Create the application for a viewport given in CSS pixels
    pub fn with_viewport(config: SiteConfig, width: f64, height: f64) -> Result<Self> {
        let bindings = config.resolve_bindings()?;
        let (mut page, storefront) = Storefront::build(&config, width, height);

        let sidebars = bindings
            .into_iter()
            .map(|(selector, options)| StickySidebar::attach(&mut page, &selector, options))
            .collect();

        let navigation = NavigationController::new(config.navigation.classes.clone());
        navigation.render(&mut page);

        info!(width, height, "storefront ready");

        Ok(Self {
            config,
            page,
            storefront,
            sidebars,
            navigation,
            last_results: Vec::new(),
            should_quit: false,
        })
    }

    /// CSS pixel size of a canvas of `columns` x `rows` cells
    pub fn viewport_for(application: &ApplicationConfig, columns: u16, rows: u16) -> (f64, f64) {
        (
            f64::from(columns) * application.px_per_column,
            f64::from(rows) * application.px_per_row,
        )
    }

    /// Deliver a page event to the navigation and every binding
    pub fn fire(&mut self, event: PageEvent) {
        if let PageEvent::Click(target) = event {
            self.navigation.handle_click(&mut self.page, target);
        }

        let mut results = Vec::new();
        for sidebar in &mut self.sidebars {
            results.extend(sidebar.handle_event(&mut self.page, event));
        }
        self.last_results = results;
    }

    // ┌────────────────────────────────────────────────────────────────────────────────────────────┐
    // │                                          Viewport                                          │
    // └────────────────────────────────────────────────────────────────────────────────────────────┘

    /// Whether the open navigation locks page scrolling
    pub fn scroll_locked(&self) -> bool {
        self.page.has_class(self.page.root(), &self.navigation.classes().no_scroll)
    }

    /// Largest scroll offset of the current layout
    pub fn max_scroll(&self) -> f64 {
        self.storefront.max_scroll(&self.page)
    }

    /// Scroll to an absolute offset, clamped to the page
    pub fn scroll_to(&mut self, top: f64) {
        self.last_results.clear();
        if self.scroll_locked() {
            debug!(top, "scroll ignored while the navigation is open");
            return;
        }

        let top = top.clamp(0.0, self.max_scroll());
        if top == self.page.scroll_top() {
            return;
        }
        self.page.scroll_to(top, 0.0);
        self.fire(PageEvent::Scroll);
    }

    pub fn scroll_by(&mut self, delta: f64) {
        self.scroll_to(self.page.scroll_top() + delta);
    }

    pub fn scroll_up(&mut self, steps: u16) {
        self.scroll_by(-f64::from(steps) * self.config.application.scroll_step);
    }

    pub fn scroll_down(&mut self, steps: u16) {
        self.scroll_by(f64::from(steps) * self.config.application.scroll_step);
    }

    /// One viewport less one scroll step, so a strip stays visible
    fn page_distance(&self) -> f64 {
        (self.page.viewport_height() - self.config.application.scroll_step).max(self.config.application.scroll_step)
    }

    pub fn page_up(&mut self) {
        self.scroll_by(-self.page_distance());
    }

    pub fn page_down(&mut self) {
        self.scroll_by(self.page_distance());
    }

    pub fn home(&mut self) {
        self.scroll_to(0.0);
    }

    pub fn end(&mut self) {
        self.scroll_to(self.max_scroll());
    }

    /// Resize to a canvas of `columns` x `rows` cells
    pub fn resize(&mut self, columns: u16, rows: u16) {
        let (width, height) = Self::viewport_for(&self.config.application, columns, rows);
        self.resize_px(width, height);
    }

    pub fn resize_px(&mut self, width: f64, height: f64) {
        self.last_results.clear();
        if width == self.page.body_width() && height == self.page.viewport_height() {
            return;
        }

        self.page.resize(width, height);
        self.storefront.relayout(&mut self.page);

        // A smaller page may leave the scroll offset past the end
        let max = self.max_scroll();
        if self.page.scroll_top() > max {
            self.page.scroll_to(max, 0.0);
        }
        self.fire(PageEvent::Resize);
    }

    // ┌────────────────────────────────────────────────────────────────────────────────────────────┐
    // │                                         Navigation                                         │
    // └────────────────────────────────────────────────────────────────────────────────────────────┘

    /// Click the first element matching `selector`; false when nothing matches
    fn click_first(&mut self, selector: &str) -> bool {
        match self.page.query_all(selector).first().copied() {
            Some(target) => {
                self.click(target);
                true
            }
            None => false,
        }
    }

    pub fn click(&mut self, target: ElementId) {
        self.fire(PageEvent::Click(target));
    }

    pub fn toggle_menu(&mut self) {
        let selector = format!(".{}", self.navigation.classes().toggle_icon);
        self.click_first(&selector);
    }

    /// Click the nav item at `index` (0-based)
    pub fn nav_item(&mut self, index: usize) {
        let selector = format!(".{}", self.navigation.classes().nav_item);
        if let Some(target) = self.page.query_all(&selector).get(index).copied() {
            self.click(target);
        }
    }

    /// Open the second screen of the current item, or of the first one
    pub fn second_screen(&mut self) {
        let classes = self.navigation.classes();
        let selector = format!(".{} .{} li", classes.first_screen, classes.mobile_top_links);
        let links = self.page.query_all(&selector);

        let current = self.navigation.state().current_item();
        let target = links
            .iter()
            .copied()
            .find(|link| current.is_some() && self.page.attribute(*link, ATTR_ITEM).as_deref() == current)
            .or_else(|| links.first().copied());

        if let Some(target) = target {
            self.click(target);
        }
    }

    pub fn back(&mut self) {
        let classes = self.navigation.classes();
        let selector = format!(".{} .{} li", classes.second_screen, classes.mobile_top_links);
        self.click_first(&selector);
    }

    pub fn search(&mut self) {
        let selector = format!(".{}", self.navigation.classes().search_icon);
        self.click_first(&selector);
    }

    pub fn globe(&mut self) {
        let selector = format!(".{}", self.navigation.classes().globe_icon);
        self.click_first(&selector);
    }

    /// Select the product filter after the current one, wrapping around
    pub fn cycle_filter(&mut self) {
        let selector = format!(".{} li", self.navigation.classes().product_filters);
        let filters = self.page.query_all(&selector);
        if filters.is_empty() {
            return;
        }

        let current = self.navigation.filter();
        let next = filters
            .iter()
            .position(|f| current.is_some() && self.page.attribute(*f, ATTR_ITEM).as_deref() == current)
            .map_or(0, |index| (index + 1) % filters.len());
        self.click(filters[next]);
    }

    pub fn dismiss(&mut self) {
        self.navigation.dispatch(&mut self.page, NavEvent::Dismiss);
    }

    // ┌────────────────────────────────────────────────────────────────────────────────────────────┐
    // │                                         Inspection                                         │
    // └────────────────────────────────────────────────────────────────────────────────────────────┘

    /// Mode of the first bound sidebar, if any is bound
    pub fn sticky_mode(&self) -> Option<PositionMode> {
        self.sidebars
            .iter()
            .flat_map(|sidebar| sidebar.instances())
            .next()
            .map(|instance| instance.mode(&self.page))
    }

    /// Quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}
