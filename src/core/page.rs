// Page Model
// In-memory document with a small block layout, used by the terminal demo,
// the trace tool and the tests
//
// Usage:
//   let mut page = PageModel::new(1200.0, 800.0);
//   let sidebar = page.add(page.body(), "aside", &["left-sidebar"]);
//   page.place(sidebar, 20.0, 0.0);
//   page.scroll_to(50.0, 0.0);
//   let top = page.offset_top(sidebar);

use std::collections::{BTreeMap, HashMap};

use super::dom::{Document, ElementId};
use crate::utilities::{format_px, parse_px, parse_translate_y};

/// Box edge sizes (padding or margin)
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Edges {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Edges {
    /// Top and bottom only
    pub const fn vertical(top: f64, bottom: f64) -> Self {
        Self { top, right: 0.0, bottom, left: 0.0 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Top,
    Right,
    Bottom,
    Left,
}

impl Side {
    fn of(self, edges: &Edges) -> f64 {
        match self {
            Side::Top => edges.top,
            Side::Right => edges.right,
            Side::Bottom => edges.bottom,
            Side::Left => edges.left,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Side::Top => "top",
            Side::Right => "right",
            Side::Bottom => "bottom",
            Side::Left => "left",
        }
    }
}

/// A single element of the page
#[derive(Debug, Clone)]
struct Node {
    tag: String,
    classes: Vec<String>,
    attributes: BTreeMap<String, String>,
    styles: BTreeMap<String, String>,
    parent: Option<ElementId>,
    children: Vec<ElementId>,
    /// Explicit border-box position in document coordinates (top, left)
    placed: Option<(f64, f64)>,
    /// Explicit content width
    width: Option<f64>,
    /// Explicit content height
    height: Option<f64>,
    padding: Edges,
    margin: Edges,
    hidden: bool,
}

impl Node {
    fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            classes: Vec::new(),
            attributes: BTreeMap::new(),
            styles: BTreeMap::new(),
            parent: None,
            children: Vec::new(),
            placed: None,
            width: None,
            height: None,
            padding: Edges::default(),
            margin: Edges::default(),
            hidden: false,
        }
    }
}

/// One compound selector (`div.a.b#id`)
#[derive(Debug, Default)]
struct Compound<'s> {
    tag: Option<&'s str>,
    id: Option<&'s str>,
    classes: Vec<&'s str>,
}

impl<'s> Compound<'s> {
    fn parse(text: &'s str) -> Self {
        let mut compound = Compound::default();
        let mut rest = text;

        let tag_end = rest.find(['.', '#']).unwrap_or(rest.len());
        if tag_end > 0 {
            compound.tag = Some(&rest[..tag_end]);
        }
        rest = &rest[tag_end..];

        while let Some(marker) = rest.chars().next() {
            let body = &rest[1..];
            let end = body.find(['.', '#']).unwrap_or(body.len());
            let name = &body[..end];
            if marker == '.' {
                compound.classes.push(name);
            } else {
                compound.id = Some(name);
            }
            rest = &body[end..];
        }

        compound
    }

    fn matches(&self, node: &Node) -> bool {
        if let Some(tag) = self.tag {
            if tag != "*" && !node.tag.eq_ignore_ascii_case(tag) {
                return false;
            }
        }
        if let Some(id) = self.id {
            if node.attributes.get("id").map(String::as_str) != Some(id) {
                return false;
            }
        }
        self.classes.iter().all(|c| node.classes.iter().any(|n| n == c))
    }
}

/// In-memory page implementing [`Document`]
#[derive(Debug, Clone)]
pub struct PageModel {
    nodes: HashMap<ElementId, Node>,
    next_id: u64,
    root: ElementId,
    head: ElementId,
    body: ElementId,
    stylesheets: BTreeMap<String, String>,
    scroll_top: f64,
    scroll_left: f64,
    body_width: f64,
    viewport_height: f64,
    focused: Option<ElementId>,
    bounding_rect_available: bool,
}

impl PageModel {
    /// Create an empty page (`html > head + body`) with the given viewport
    pub fn new(body_width: f64, viewport_height: f64) -> Self {
        let mut page = Self {
            nodes: HashMap::new(),
            next_id: 0,
            root: ElementId(0),
            head: ElementId(0),
            body: ElementId(0),
            stylesheets: BTreeMap::new(),
            scroll_top: 0.0,
            scroll_left: 0.0,
            body_width,
            viewport_height,
            focused: None,
            bounding_rect_available: true,
        };

        page.root = page.create_element("html");
        page.head = page.add(page.root, "head", &[]);
        page.body = page.add(page.root, "body", &[]);
        page.place(page.root, 0.0, 0.0);
        page.place(page.body, 0.0, 0.0);
        page.set_size(page.root, Some(body_width), None);
        page.set_size(page.body, Some(body_width), None);
        page
    }

    pub fn head(&self) -> ElementId {
        self.head
    }

    pub fn body(&self) -> ElementId {
        self.body
    }

    // === Building ===

    /// Create an element with classes and append it to `parent`
    pub fn add(&mut self, parent: ElementId, tag: &str, classes: &[&str]) -> ElementId {
        let element = self.create_element(tag);
        for class in classes {
            self.add_class(element, class);
        }
        self.append_child(parent, element);
        element
    }

    /// Pin the border box at a document position
    pub fn place(&mut self, element: ElementId, top: f64, left: f64) {
        if let Some(node) = self.nodes.get_mut(&element) {
            node.placed = Some((top, left));
        }
    }

    /// Set explicit content sizes (None = derived from parent / children)
    pub fn set_size(&mut self, element: ElementId, width: Option<f64>, height: Option<f64>) {
        if let Some(node) = self.nodes.get_mut(&element) {
            node.width = width;
            node.height = height;
        }
    }

    pub fn set_padding(&mut self, element: ElementId, padding: Edges) {
        if let Some(node) = self.nodes.get_mut(&element) {
            node.padding = padding;
        }
    }

    pub fn set_margin(&mut self, element: ElementId, margin: Edges) {
        if let Some(node) = self.nodes.get_mut(&element) {
            node.margin = margin;
        }
    }

    pub fn set_attribute(&mut self, element: ElementId, name: &str, value: &str) {
        if let Some(node) = self.nodes.get_mut(&element) {
            node.attributes.insert(name.to_string(), value.to_string());
        }
    }

    pub fn set_hidden(&mut self, element: ElementId, hidden: bool) {
        if let Some(node) = self.nodes.get_mut(&element) {
            node.hidden = hidden;
        }
    }

    /// Simulate a bounding-rectangle measurement failure
    pub fn set_bounding_rect_available(&mut self, available: bool) {
        self.bounding_rect_available = available;
    }

    // === Viewport ===

    pub fn scroll_to(&mut self, top: f64, left: f64) {
        self.scroll_top = top.max(0.0);
        self.scroll_left = left.max(0.0);
    }

    /// Change the viewport size; the body follows the new width
    pub fn resize(&mut self, body_width: f64, viewport_height: f64) {
        self.body_width = body_width;
        self.viewport_height = viewport_height;
        let (root, body) = (self.root, self.body);
        self.set_size(root, Some(body_width), None);
        self.set_size(body, Some(body_width), None);
    }

    // === Inspection ===

    pub fn focused(&self) -> Option<ElementId> {
        self.focused
    }

    /// CSS text of an injected stylesheet
    pub fn stylesheet(&self, id: &str) -> Option<&str> {
        self.stylesheets.get(id).map(String::as_str)
    }

    pub fn stylesheet_count(&self) -> usize {
        self.stylesheets.len()
    }

    pub fn contains(&self, element: ElementId) -> bool {
        self.nodes.contains_key(&element)
    }

    /// Bottom edge of the lowest element, i.e. the scrollable height
    pub fn document_height(&self) -> f64 {
        self.nodes
            .keys()
            .filter(|id| **id != self.root && **id != self.body)
            .map(|id| self.offset_top(*id) + self.outer_height(*id))
            .fold(self.viewport_height, f64::max)
    }

    // === Layout internals ===

    fn node(&self, element: ElementId) -> Option<&Node> {
        self.nodes.get(&element)
    }

    fn position_of(&self, element: ElementId) -> String {
        self.style(element, "position").unwrap_or_else(|| "static".to_string())
    }

    fn in_flow(&self, element: ElementId) -> bool {
        let Some(node) = self.node(element) else {
            return false;
        };
        !node.hidden
            && node.placed.is_none()
            && matches!(self.position_of(element).as_str(), "static" | "relative")
    }

    fn padding(&self, element: ElementId, side: Side) -> f64 {
        self.style(element, &format!("padding-{}", side.name()))
            .and_then(|v| parse_px(&v))
            .or_else(|| self.node(element).map(|n| side.of(&n.padding)))
            .unwrap_or(0.0)
    }

    fn margin(&self, element: ElementId, side: Side) -> f64 {
        self.node(element).map(|n| side.of(&n.margin)).unwrap_or(0.0)
    }

    fn flow_children(&self, element: ElementId) -> Vec<ElementId> {
        self.children(element)
            .into_iter()
            .filter(|c| self.in_flow(*c))
            .collect()
    }

    /// Margin of the first flow child escaping through an unpadded top edge
    fn escaped_margin_top(&self, element: ElementId) -> f64 {
        if self.padding(element, Side::Top) != 0.0 {
            return 0.0;
        }
        self.flow_children(element)
            .first()
            .map(|c| self.margin(*c, Side::Top))
            .unwrap_or(0.0)
    }

    /// Margin of the last flow child escaping through an unpadded bottom edge
    fn escaped_margin_bottom(&self, element: ElementId) -> f64 {
        if self.padding(element, Side::Bottom) != 0.0 {
            return 0.0;
        }
        self.flow_children(element)
            .last()
            .map(|c| self.margin(*c, Side::Bottom))
            .unwrap_or(0.0)
    }

    fn content_top(&self, element: ElementId) -> f64 {
        self.offset_top(element) + self.padding(element, Side::Top)
    }

    fn content_left(&self, element: ElementId) -> f64 {
        self.offset_left(element) + self.padding(element, Side::Left)
    }

    /// Border-box top ignoring positioning and transforms
    fn static_top(&self, element: ElementId) -> f64 {
        let Some(node) = self.node(element) else {
            return 0.0;
        };

        let base = if let Some((top, _)) = node.placed {
            top
        } else if let Some(parent) = node.parent {
            let mut top = self.content_top(parent);
            let siblings = self.flow_children(parent);
            let collapses_into_parent = self.padding(parent, Side::Top) == 0.0;
            for (index, sibling) in siblings.iter().enumerate() {
                let margin_top = self.margin(*sibling, Side::Top);
                let skip_margin = index == 0 && collapses_into_parent;
                if *sibling == element {
                    if !skip_margin {
                        top += margin_top;
                    }
                    break;
                }
                if !skip_margin {
                    top += margin_top;
                }
                top += self.outer_height(*sibling) + self.margin(*sibling, Side::Bottom);
            }
            top
        } else {
            0.0
        };

        base + self.escaped_margin_top(element)
    }

    fn static_left(&self, element: ElementId) -> f64 {
        let Some(node) = self.node(element) else {
            return 0.0;
        };
        match (node.placed, node.parent) {
            (Some((_, left)), _) => left,
            (None, Some(parent)) => self.content_left(parent) + node.margin.left,
            (None, None) => 0.0,
        }
    }

    fn containing_block(&self, element: ElementId) -> ElementId {
        let mut current = self.parent(element);
        while let Some(ancestor) = current {
            if self.position_of(ancestor) != "static" {
                return ancestor;
            }
            current = self.parent(ancestor);
        }
        self.root
    }

    fn translate(&self, element: ElementId) -> f64 {
        self.style(element, "transform")
            .and_then(|t| parse_translate_y(&t))
            .unwrap_or(0.0)
    }

    fn style_px(&self, element: ElementId, property: &str) -> Option<f64> {
        self.style(element, property).and_then(|v| parse_px(&v))
    }

    fn is_hidden(&self, element: ElementId) -> bool {
        self.node(element).map(|n| n.hidden).unwrap_or(true)
            || self.style(element, "display").as_deref() == Some("none")
    }

    fn matches_selector(&self, element: ElementId, parts: &[Compound<'_>]) -> bool {
        let Some((last, ancestors)) = parts.split_last() else {
            return false;
        };
        let Some(node) = self.node(element) else {
            return false;
        };
        if !last.matches(node) {
            return false;
        }

        // Match the remaining compounds against ancestors, right to left
        let mut pending = ancestors.iter().rev().peekable();
        let mut current = node.parent;
        while let (Some(compound), Some(ancestor)) = (pending.peek(), current) {
            if let Some(ancestor_node) = self.node(ancestor) {
                if compound.matches(ancestor_node) {
                    pending.next();
                }
            }
            current = self.parent(ancestor);
        }
        pending.peek().is_none()
    }

    fn collect_descendants(&self, element: ElementId, out: &mut Vec<ElementId>) {
        for child in self.children(element) {
            out.push(child);
            self.collect_descendants(child, out);
        }
    }

    fn detach(&mut self, element: ElementId) {
        let parent = self.nodes.get(&element).and_then(|n| n.parent);
        if let Some(parent) = parent {
            if let Some(parent_node) = self.nodes.get_mut(&parent) {
                parent_node.children.retain(|c| *c != element);
            }
        }
        if let Some(node) = self.nodes.get_mut(&element) {
            node.parent = None;
        }
    }
}

impl Document for PageModel {
    fn body_width(&self) -> f64 {
        self.body_width
    }

    fn viewport_height(&self) -> f64 {
        self.viewport_height
    }

    fn scroll_top(&self) -> f64 {
        self.scroll_top
    }

    fn scroll_left(&self) -> f64 {
        self.scroll_left
    }

    fn root(&self) -> ElementId {
        self.root
    }

    fn query_within(&self, scope: ElementId, selector: &str) -> Vec<ElementId> {
        let parts: Vec<Compound<'_>> = selector.split_whitespace().map(Compound::parse).collect();
        let mut candidates = Vec::new();
        self.collect_descendants(scope, &mut candidates);
        candidates
            .into_iter()
            .filter(|c| self.matches_selector(*c, &parts))
            .collect()
    }

    fn parent(&self, element: ElementId) -> Option<ElementId> {
        self.node(element).and_then(|n| n.parent)
    }

    fn children(&self, element: ElementId) -> Vec<ElementId> {
        self.node(element).map(|n| n.children.clone()).unwrap_or_default()
    }

    fn tag_name(&self, element: ElementId) -> Option<String> {
        self.node(element).map(|n| n.tag.clone())
    }

    fn attribute(&self, element: ElementId, name: &str) -> Option<String> {
        self.node(element).and_then(|n| n.attributes.get(name).cloned())
    }

    fn create_element(&mut self, tag: &str) -> ElementId {
        let id = ElementId(self.next_id);
        self.next_id += 1;
        self.nodes.insert(id, Node::new(tag));
        id
    }

    fn append_child(&mut self, parent: ElementId, child: ElementId) {
        if !self.nodes.contains_key(&parent) || self.is_within(parent, child) {
            return;
        }
        self.detach(child);
        if let Some(node) = self.nodes.get_mut(&child) {
            node.parent = Some(parent);
        }
        if let Some(parent_node) = self.nodes.get_mut(&parent) {
            parent_node.children.push(child);
        }
    }

    fn remove(&mut self, element: ElementId) {
        if element == self.root {
            return;
        }
        self.detach(element);
        let mut doomed = vec![element];
        self.collect_descendants(element, &mut doomed);
        for id in doomed {
            self.nodes.remove(&id);
            if self.focused == Some(id) {
                self.focused = None;
            }
        }
    }

    fn has_class(&self, element: ElementId, class: &str) -> bool {
        self.node(element)
            .map(|n| n.classes.iter().any(|c| c == class))
            .unwrap_or(false)
    }

    fn add_class(&mut self, element: ElementId, class: &str) {
        if let Some(node) = self.nodes.get_mut(&element) {
            if !node.classes.iter().any(|c| c == class) {
                node.classes.push(class.to_string());
            }
        }
    }

    fn remove_class(&mut self, element: ElementId, class: &str) {
        if let Some(node) = self.nodes.get_mut(&element) {
            node.classes.retain(|c| c != class);
        }
    }

    fn style(&self, element: ElementId, property: &str) -> Option<String> {
        self.node(element).and_then(|n| n.styles.get(property).cloned())
    }

    fn set_style(&mut self, element: ElementId, property: &str, value: &str) {
        if let Some(node) = self.nodes.get_mut(&element) {
            if value.is_empty() {
                node.styles.remove(property);
            } else {
                node.styles.insert(property.to_string(), value.to_string());
            }
        }
    }

    fn computed_style(&self, element: ElementId, property: &str) -> Option<String> {
        if let Some(value) = self.style(element, property) {
            return Some(value);
        }
        let node = self.node(element)?;
        let side = |name: &str| match name {
            "top" => Some(Side::Top),
            "right" => Some(Side::Right),
            "bottom" => Some(Side::Bottom),
            "left" => Some(Side::Left),
            _ => None,
        };

        if let Some(name) = property.strip_prefix("padding-") {
            return side(name).map(|s| format_px(s.of(&node.padding)));
        }
        if let Some(name) = property.strip_prefix("margin-") {
            return side(name).map(|s| format_px(s.of(&node.margin)));
        }
        match property {
            "position" => Some("static".to_string()),
            "float" => Some("none".to_string()),
            "display" => Some(if node.hidden { "none" } else { "block" }.to_string()),
            "width" => Some(format_px(self.width(element))),
            "height" => Some(format_px(self.height(element))),
            _ => None,
        }
    }

    fn has_stylesheet(&self, id: &str) -> bool {
        self.stylesheets.contains_key(id)
    }

    fn inject_stylesheet(&mut self, id: &str, css: &str) {
        self.stylesheets.insert(id.to_string(), css.to_string());
        let head = self.head;
        let style = self.add(head, "style", &[]);
        self.set_attribute(style, "id", id);
    }

    fn is_visible(&self, element: ElementId) -> bool {
        let mut current = Some(element);
        while let Some(node) = current {
            if self.is_hidden(node) {
                return false;
            }
            current = self.parent(node);
        }
        true
    }

    fn offset_top(&self, element: ElementId) -> f64 {
        let base = match self.position_of(element).as_str() {
            "fixed" => self.scroll_top + self.style_px(element, "top").unwrap_or(0.0),
            "absolute" => match self.style_px(element, "top") {
                Some(top) => {
                    let block = self.containing_block(element);
                    self.offset_top(block) + top
                }
                None => self.static_top(element),
            },
            _ => self.static_top(element),
        };
        base + self.translate(element)
    }

    fn offset_left(&self, element: ElementId) -> f64 {
        match self.position_of(element).as_str() {
            "fixed" => {
                self.scroll_left + self.style_px(element, "left").unwrap_or_else(|| self.static_left(element))
            }
            "absolute" => match self.style_px(element, "left") {
                Some(left) => {
                    let block = self.containing_block(element);
                    self.offset_left(block) + left
                }
                None => self.static_left(element),
            },
            _ => self.static_left(element),
        }
    }

    fn outer_height(&self, element: ElementId) -> f64 {
        self.height(element) + self.padding(element, Side::Top) + self.padding(element, Side::Bottom)
    }

    fn outer_width(&self, element: ElementId, include_margin: bool) -> f64 {
        let mut width = self.width(element) + self.padding(element, Side::Left) + self.padding(element, Side::Right);
        if include_margin {
            width += self.margin(element, Side::Left) + self.margin(element, Side::Right);
        }
        width
    }

    fn width(&self, element: ElementId) -> f64 {
        if let Some(width) = self.style_px(element, "width") {
            return width;
        }
        let Some(node) = self.node(element) else {
            return 0.0;
        };
        if let Some(width) = node.width {
            return width;
        }
        let Some(parent) = node.parent else {
            return self.body_width;
        };
        let available = self.width(parent)
            - self.padding(element, Side::Left)
            - self.padding(element, Side::Right)
            - node.margin.left
            - node.margin.right;
        available.max(0.0)
    }

    fn height(&self, element: ElementId) -> f64 {
        let Some(node) = self.node(element) else {
            return 0.0;
        };
        let min_height = self.style_px(element, "min-height").unwrap_or(0.0);
        if let Some(height) = node.height {
            return height.max(min_height);
        }

        let children = self.flow_children(element);
        let extent: f64 = children
            .iter()
            .map(|c| self.margin(*c, Side::Top) + self.outer_height(*c) + self.margin(*c, Side::Bottom))
            .sum();
        let content = extent - self.escaped_margin_top(element) - self.escaped_margin_bottom(element);
        content.max(min_height)
    }

    fn bounding_width(&self, element: ElementId) -> Option<f64> {
        if !self.bounding_rect_available || !self.contains(element) {
            return None;
        }
        Some(self.outer_width(element, false))
    }

    fn focus(&mut self, element: ElementId) {
        if self.contains(element) {
            self.focused = Some(element);
        }
    }

    fn blur(&mut self, element: ElementId) {
        if self.focused == Some(element) {
            self.focused = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sidebar_page() -> (PageModel, ElementId, ElementId) {
        let mut page = PageModel::new(1200.0, 800.0);
        let body = page.body();
        let container = page.add(body, "div", &["page"]);
        page.place(container, 20.0, 0.0);
        page.set_size(container, Some(1200.0), Some(2000.0));
        let sidebar = page.add(container, "aside", &["left-sidebar"]);
        page.place(sidebar, 20.0, 0.0);
        page.set_size(sidebar, Some(300.0), None);
        let widget = page.add(sidebar, "div", &["widget"]);
        page.set_size(widget, None, Some(400.0));
        (page, sidebar, widget)
    }

    #[test]
    fn test_flow_layout() {
        let (mut page, sidebar, widget) = sidebar_page();
        let second = page.add(sidebar, "div", &["widget"]);
        page.set_size(second, None, Some(100.0));

        assert_eq!(page.offset_top(widget), 20.0);
        assert_eq!(page.offset_top(second), 420.0);
        assert_eq!(page.outer_height(sidebar), 500.0);
        assert_eq!(page.width(widget), 300.0);
    }

    #[test]
    fn test_fixed_and_absolute_offsets() {
        let (mut page, sidebar, widget) = sidebar_page();
        page.set_style(sidebar, "position", "relative");
        page.scroll_to(500.0, 0.0);

        page.set_style(widget, "position", "fixed");
        page.set_style(widget, "top", "0px");
        page.set_style(widget, "transform", "translateY(150px)");
        assert_eq!(page.offset_top(widget), 650.0);

        page.set_style(widget, "position", "absolute");
        page.set_style(widget, "transform", "translateY(1000px)");
        assert_eq!(page.offset_top(widget), 1020.0);
    }

    #[test]
    fn test_margin_collapses_through_unpadded_box() {
        let (mut page, sidebar, widget) = sidebar_page();
        page.set_margin(widget, Edges::vertical(10.0, 6.0));

        // Child margins escape the sidebar: its box moves down and does not grow
        assert_eq!(page.offset_top(sidebar), 30.0);
        assert_eq!(page.outer_height(sidebar), 400.0);

        page.set_style(sidebar, "padding-top", "1px");
        page.set_style(sidebar, "padding-bottom", "1px");
        assert_eq!(page.offset_top(sidebar), 20.0);
        assert_eq!(page.outer_height(sidebar), 418.0);
    }

    #[test]
    fn test_selectors() {
        let (mut page, sidebar, widget) = sidebar_page();
        page.set_attribute(sidebar, "id", "filters");
        let input = page.add(widget, "input", &["query"]);

        assert_eq!(page.query_all(".left-sidebar"), vec![sidebar]);
        assert_eq!(page.query_all("#filters"), vec![sidebar]);
        assert_eq!(page.query_all("aside.left-sidebar"), vec![sidebar]);
        assert_eq!(page.query_all(".left-sidebar input"), vec![input]);
        assert_eq!(page.query_all(".page .widget input.query"), vec![input]);
        assert!(page.query_all(".widget .left-sidebar").is_empty());
        assert_eq!(page.query_within(sidebar, ".widget"), vec![widget]);
    }

    #[test]
    fn test_visibility_follows_ancestors() {
        let (mut page, sidebar, widget) = sidebar_page();
        assert!(page.is_visible(widget));
        page.set_hidden(sidebar, true);
        assert!(!page.is_visible(widget));
        page.set_hidden(sidebar, false);
        page.set_style(widget, "display", "none");
        assert!(!page.is_visible(widget));
    }

    #[test]
    fn test_remove_and_reparent() {
        let (mut page, sidebar, widget) = sidebar_page();
        let wrapper = page.create_element("div");
        page.append_child(wrapper, widget);
        page.append_child(sidebar, wrapper);
        assert_eq!(page.children(sidebar), vec![wrapper]);
        assert_eq!(page.parent(widget), Some(wrapper));

        page.remove(wrapper);
        assert!(!page.contains(widget));
        assert!(page.children(sidebar).is_empty());
    }

    #[test]
    fn test_bounding_width_can_fail() {
        let (mut page, sidebar, _) = sidebar_page();
        assert_eq!(page.bounding_width(sidebar), Some(300.0));
        page.set_bounding_rect_available(false);
        assert_eq!(page.bounding_width(sidebar), None);
    }
}
