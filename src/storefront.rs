// Storefront Page
// Builds the demo storefront (header with navigation, sidebar + content container, footer)
// as a PageModel from the page and navigation sections of config.yaml

use crate::config::SiteConfig;
use crate::constants::ATTR_ITEM;
use crate::core::{Document, Edges, ElementId, PageModel};
use crate::nav::NavClasses;

/// Handles of the elements the demo draws
#[derive(Debug, Clone)]
pub struct Storefront {
    pub header: ElementId,
    pub navigation: ElementId,
    pub container: ElementId,
    pub sidebar: ElementId,
    pub widgets: Vec<ElementId>,
    pub content: ElementId,
    pub footer: ElementId,
    pub blackout: ElementId,
    /// Content column left edge, relative to the body
    content_left: f64,
    content_height: f64,
    gutter: f64,
}

impl Storefront {
    /// Lay out the page for a viewport
    pub fn build(config: &SiteConfig, body_width: f64, viewport_height: f64) -> (PageModel, Storefront) {
        let geometry = &config.page;
        let classes = &config.navigation.classes;
        let mut page = PageModel::new(body_width, viewport_height);
        let body = page.body();

        let header = page.add(body, "header", &["site-header"]);
        page.place(header, 0.0, 0.0);
        page.set_size(header, None, Some(geometry.header_height));
        let navigation = build_navigation(&mut page, header, config);

        let search = page.add(body, "div", &[classes.search_popup.as_str()]);
        page.add(search, "input", &[]);
        page.add(body, "div", &[classes.globe_popup.as_str()]);
        let blackout = page.add(body, "div", &[classes.blackout.as_str()]);

        let container = page.add(body, "div", &["page-container"]);
        page.place(container, geometry.header_height, 0.0);
        page.set_size(container, None, Some(geometry.container_height));

        let sidebar = page.add(container, "aside", &["left-sidebar"]);
        page.place(sidebar, geometry.header_height, geometry.gutter);
        page.set_size(sidebar, Some(geometry.sidebar.width), None);
        page.set_padding(
            sidebar,
            Edges::vertical(geometry.sidebar.padding_top, geometry.sidebar.padding_bottom),
        );

        let widgets = geometry
            .sidebar
            .widgets
            .iter()
            .enumerate()
            .map(|(index, height)| {
                let widget = page.add(sidebar, "div", &["widget"]);
                page.set_size(widget, None, Some(*height));
                page.set_attribute(widget, ATTR_ITEM, &format!("widget-{}", index + 1));
                widget
            })
            .collect();

        let content_left = geometry.gutter * 2.0 + geometry.sidebar.width;
        let content = page.add(container, "main", &["content"]);
        page.place(content, geometry.header_height, content_left);
        page.set_size(content, None, Some(geometry.container_height));

        let footer = page.add(body, "footer", &["site-footer"]);
        page.place(footer, geometry.header_height + geometry.container_height, 0.0);
        page.set_size(footer, None, Some(geometry.footer_height));

        let storefront = Storefront {
            header,
            navigation,
            container,
            sidebar,
            widgets,
            content,
            footer,
            blackout,
            content_left,
            content_height: geometry.container_height,
            gutter: geometry.gutter,
        };
        storefront.relayout(&mut page);
        (page, storefront)
    }

    /// Fit the content column to the current body width
    pub fn relayout(&self, page: &mut PageModel) {
        let width = (page.body_width() - self.content_left - self.gutter).max(0.0);
        page.set_size(self.content, Some(width), Some(self.content_height));
    }

    /// Largest useful scroll offset
    pub fn max_scroll(&self, page: &PageModel) -> f64 {
        (page.document_height() - page.viewport_height()).max(0.0)
    }
}

/// Nav bar, menu with both screens and product filters
fn build_navigation(page: &mut PageModel, header: ElementId, config: &SiteConfig) -> ElementId {
    let c: &NavClasses = &config.navigation.classes;
    let items = &config.navigation.items;

    let navigation = page.add(header, "nav", &[c.navigation.as_str()]);
    for item in items {
        let link = page.add(navigation, "a", &[c.nav_item.as_str()]);
        page.set_attribute(link, ATTR_ITEM, item);
    }
    let toggle = page.add(navigation, "button", &[c.toggle_icon.as_str()]);
    page.add(toggle, "span", &[c.animated_icon.as_str()]);
    page.add(navigation, "button", &[c.search_icon.as_str()]);
    page.add(navigation, "button", &[c.globe_icon.as_str()]);

    let menu = page.add(navigation, "div", &[c.menu.as_str()]);

    let first = page.add(menu, "div", &[c.first_screen.as_str()]);
    let top_links = page.add(first, "ul", &[c.mobile_top_links.as_str()]);
    for item in items {
        let link = page.add(top_links, "li", &[]);
        page.set_attribute(link, ATTR_ITEM, item);
        let category = page.add(first, "div", &[c.menu_category.as_str()]);
        page.set_attribute(category, ATTR_ITEM, item);
    }

    let second = page.add(menu, "div", &[c.second_screen.as_str()]);
    let back_links = page.add(second, "ul", &[c.mobile_top_links.as_str()]);
    page.add(back_links, "li", &["back"]);
    for item in items {
        let screen_item = page.add(second, "div", &[c.second_screen_item.as_str()]);
        page.set_attribute(screen_item, ATTR_ITEM, item);
    }

    let filters = page.add(second, "ul", &[c.product_filters.as_str()]);
    for filter in &config.navigation.filters {
        let entry = page.add(filters, "li", &[]);
        page.set_attribute(entry, ATTR_ITEM, filter);
        let content = page.add(second, "div", &[c.filter_content.as_str()]);
        page.set_attribute(content, ATTR_ITEM, filter);
    }

    navigation
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> SiteConfig {
        SiteConfig::load(&SiteConfig::default_path()).unwrap()
    }

    #[test]
    fn test_layout() {
        let config = config();
        let (page, store) = Storefront::build(&config, 1200.0, 800.0);

        assert_eq!(page.offset_top(store.sidebar), 240.0);
        assert_eq!(page.offset_left(store.sidebar), 40.0);
        assert_eq!(page.outer_height(store.sidebar), 20.0 + 560.0 + 20.0);
        assert_eq!(page.offset_top(store.widgets[1]), 240.0 + 20.0 + 180.0);
        assert_eq!(page.width(store.container), 1200.0);
        assert_eq!(page.width(store.content), 1200.0 - 400.0 - 40.0);
        assert_eq!(page.offset_top(store.footer), 2640.0);
        assert_eq!(store.max_scroll(&page), 2640.0);
    }

    #[test]
    fn test_navigation_markup() {
        let config = config();
        let (page, _) = Storefront::build(&config, 1200.0, 800.0);

        assert_eq!(page.query_all(".site-nav-item").len(), 3);
        assert_eq!(page.query_all(".site-menu-first-screen .site-menu-mobile-toplinks li").len(), 3);
        assert_eq!(page.query_all(".site-menu-product-filters li").len(), 3);
        assert_eq!(page.query_all(".site-menu-search input").len(), 1);
        assert_eq!(page.query_all(".site-nav-blackout").len(), 1);
    }

    #[test]
    fn test_relayout_follows_body_width() {
        let config = config();
        let (mut page, store) = Storefront::build(&config, 1200.0, 800.0);
        page.resize(900.0, 600.0);
        store.relayout(&mut page);

        assert_eq!(page.width(store.container), 900.0);
        assert_eq!(page.width(store.content), 900.0 - 400.0 - 40.0);
        assert_eq!(page.height(store.content), 2400.0);
    }
}
