// Page View
// Draws the visible part of the storefront page, one terminal cell per
// px_per_column x px_per_row CSS pixels

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::Styles;
use crate::constants::ATTR_ITEM;
use crate::core::{App, Document, ElementId};

/// Render the page canvas inside a bordered block
pub fn render_page(f: &mut Frame, app: &App, area: Rect) {
    let title = format!(" scroll {:.0} / {:.0} ", app.page.scroll_top(), app.max_scroll());
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Styles::border_focused())
        .title(title);
    let canvas = block.inner(area);
    f.render_widget(block, area);

    let store = &app.storefront;
    draw_box(f, app, canvas, store.header, " header ", Styles::page_header());
    draw_box(f, app, canvas, store.content, " content ", Styles::content());
    draw_box(f, app, canvas, store.sidebar, " sidebar ", Styles::sidebar());

    for instance in app.sidebars.iter().flat_map(|s| s.instances()) {
        let mode = instance.mode(&app.page);
        let title = format!(" {} ", mode.as_str());
        draw_box(f, app, canvas, instance.inner(), &title, Styles::inner(mode));
    }
    for widget in &store.widgets {
        let title = app.page.attribute(*widget, ATTR_ITEM).unwrap_or_default();
        draw_box(f, app, canvas, *widget, &title, Styles::widget());
    }

    draw_box(f, app, canvas, store.footer, " footer ", Styles::page_footer());

    render_overlays(f, app, canvas);
}

/// Project a document rectangle onto the canvas; None when nothing is visible
fn project(app: &App, canvas: Rect, top: f64, left: f64, height: f64, width: f64) -> Option<Rect> {
    let scale = &app.config.application;
    let scroll_top = app.page.scroll_top();

    let y0 = ((top - scroll_top) / scale.px_per_row).floor().max(0.0);
    let y1 = ((top + height - scroll_top) / scale.px_per_row).ceil().min(f64::from(canvas.height));
    let x0 = (left / scale.px_per_column).floor().max(0.0);
    let x1 = ((left + width) / scale.px_per_column).ceil().min(f64::from(canvas.width));

    if y1 - y0 < 1.0 || x1 - x0 < 1.0 {
        return None;
    }

    Some(Rect {
        x: canvas.x + x0 as u16,
        y: canvas.y + y0 as u16,
        width: (x1 - x0) as u16,
        height: (y1 - y0) as u16,
    })
}

fn draw_box(f: &mut Frame, app: &App, canvas: Rect, element: ElementId, title: &str, style: Style) {
    if !app.page.is_visible(element) {
        return;
    }

    let page = &app.page;
    let projected = project(
        app,
        canvas,
        page.offset_top(element),
        page.offset_left(element),
        page.outer_height(element),
        page.outer_width(element, false),
    );

    if let Some(rect) = projected {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(style)
            .title(Span::styled(title.to_string(), style));
        f.render_widget(Clear, rect);
        f.render_widget(block, rect);
    }
}

// ┌────────────────────────────────────────────────────────────────────────────────────────────────┐
// │                                      Navigation Overlays                                       │
// └────────────────────────────────────────────────────────────────────────────────────────────────┘

/// Menu and popups, read back from the classes the controller rendered
fn render_overlays(f: &mut Frame, app: &App, canvas: Rect) {
    let page = &app.page;
    let classes = app.navigation.classes();

    let menu_open = page.has_class(app.storefront.navigation, &classes.menu_open);
    if menu_open {
        render_menu(f, app, canvas);
    }

    let search_open = first_with(app, &classes.search_popup, &classes.open).is_some();
    if search_open {
        let input = page.query_all(&format!(".{} input", classes.search_popup)).first().copied();
        let focused = input.is_some() && page.focused() == input;
        let text = if focused { "Search: _" } else { "Search:" };
        render_popup(f, centered(canvas, 40, 3), " search ", vec![Line::from(text)]);
    }

    if first_with(app, &classes.globe_popup, &classes.open).is_some() {
        let lines = vec![Line::from("Choose your region"), Line::from("Esc to close")];
        render_popup(f, centered(canvas, 30, 4), " region ", lines);
    }
}

fn render_menu(f: &mut Frame, app: &App, canvas: Rect) {
    let page = &app.page;
    let classes = app.navigation.classes();
    let second_open = first_with(app, &classes.second_screen, &classes.screen_open).is_some();

    let mut lines = Vec::new();
    if second_open {
        lines.push(Line::from("< back (b)"));
        for item in page.query_all(&format!(".{}", classes.second_screen_item)) {
            lines.push(item_line(app, item, &classes.current_item));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled("filters (f)", Styles::label())));
        for filter in page.query_all(&format!(".{} li", classes.product_filters)) {
            lines.push(item_line(app, filter, &classes.filter_selected));
        }
    } else {
        for category in page.query_all(&format!(".{}", classes.menu_category)) {
            lines.push(item_line(app, category, &classes.current_item));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled("n: open item", Styles::label())));
    }

    let height = (lines.len() as u16 + 2).min(canvas.height);
    let width = 28u16.min(canvas.width);
    let rect = Rect {
        x: canvas.x,
        y: canvas.y,
        width,
        height,
    };
    let title = if second_open { " menu > screen " } else { " menu " };
    render_popup(f, rect, title, lines);
}

fn item_line(app: &App, element: ElementId, marker_class: &str) -> Line<'static> {
    let name = app.page.attribute(element, ATTR_ITEM).unwrap_or_default();
    let style = if app.page.has_class(element, marker_class) {
        Styles::item_current()
    } else {
        Styles::item_normal()
    };
    Line::from(Span::styled(format!(" {} ", name), style))
}

fn render_popup(f: &mut Frame, rect: Rect, title: &str, lines: Vec<Line<'static>>) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Styles::popup_border())
        .title(title.to_string());
    let paragraph = Paragraph::new(lines).style(Styles::popup()).block(block);
    f.render_widget(Clear, rect);
    f.render_widget(paragraph, rect);
}

/// First element of `class` carrying `state_class`
fn first_with(app: &App, class: &str, state_class: &str) -> Option<ElementId> {
    app.page
        .query_all(&format!(".{}", class))
        .into_iter()
        .find(|element| app.page.has_class(*element, state_class))
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;

    fn app() -> App {
        let config = SiteConfig::load(&SiteConfig::default_path()).unwrap();
        App::with_viewport(config, 1200.0, 800.0).unwrap()
    }

    #[test]
    fn test_project_scales_and_scrolls() {
        let mut app = app();
        let canvas = Rect::new(1, 1, 120, 40);

        let sidebar = project(&app, canvas, 240.0, 40.0, 600.0, 320.0).unwrap();
        assert_eq!(sidebar, Rect::new(5, 13, 32, 28));

        app.scroll_to(400.0);
        let sidebar = project(&app, canvas, 240.0, 40.0, 600.0, 320.0).unwrap();
        assert_eq!(sidebar.y, 1);
        assert_eq!(sidebar.height, 22);

        assert!(project(&app, canvas, 0.0, 0.0, 240.0, 1200.0).is_none());
    }

    #[test]
    fn test_centered_fits_small_areas() {
        let rect = centered(Rect::new(0, 0, 20, 2), 40, 3);
        assert_eq!(rect, Rect::new(0, 0, 20, 2));
    }
}
