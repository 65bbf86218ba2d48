// Sticky Instance
// One bound sidebar: wraps its children, caches box metrics and applies computed placements
//
// The instance owns no geometry of its own besides the cached metrics; every recompute
// measures the document, runs the engine and writes the resulting styles.

use tracing::{debug, warn};

use crate::constants::{INNER_CLASS, PROBE_PADDING};
use crate::core::{Document, ElementId};
use crate::utilities::{format_px, is_javascript_mime, parse_translate_y, parse_whole_px};

use super::engine::{self, BoxMetrics, Measurements, Placement, PositionMode, ProbeFlags, StickyState};
use super::options::StickyOptions;

/// A single inline style write
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleWrite {
    pub element: ElementId,
    pub property: &'static str,
    /// Empty when the property is cleared
    pub value: String,
}

/// What one recompute decided and wrote
#[derive(Debug, Clone, PartialEq)]
pub struct Recompute {
    pub sidebar: ElementId,
    pub placement: Placement,
    /// Only the writes that changed a value
    pub writes: Vec<StyleWrite>,
}

#[derive(Debug, Clone)]
pub struct StickyInstance {
    sidebar: ElementId,
    container: ElementId,
    inner: ElementId,
    options: StickyOptions,
    metrics: BoxMetrics,
    flags: ProbeFlags,
    state: StickyState,
}

impl StickyInstance {
    /// Bind a sidebar: normalize its box, find or create the inner wrapper,
    /// cache metrics and run the collapsing margin probe
    ///
    /// The sidebar is left in the reset state; call [`StickyInstance::recompute`] to position it.
    pub fn bind(doc: &mut dyn Document, sidebar: ElementId, options: StickyOptions) -> Self {
        let container = resolve_container(doc, sidebar, &options);

        doc.set_style(sidebar, "position", options.default_position.as_str());
        doc.set_style(sidebar, "overflow", "visible");
        doc.set_style(sidebar, "box-sizing", "border-box");

        let inner = find_or_create_inner(doc, sidebar);

        let metrics = BoxMetrics {
            padding_top: whole_px(doc, sidebar, "padding-top"),
            padding_bottom: whole_px(doc, sidebar, "padding-bottom"),
            margin_bottom: whole_px(doc, sidebar, "margin-bottom"),
        };
        let flags = probe_collapsing_margins(doc, inner);

        let instance = Self {
            sidebar,
            container,
            inner,
            options,
            metrics,
            flags,
            state: StickyState::default(),
        };
        instance.reset(doc);

        debug!(
            sidebar = sidebar.id(),
            inner = inner.id(),
            probe_top = flags.padding_top,
            probe_bottom = flags.padding_bottom,
            "bound sticky sidebar"
        );
        instance
    }

    pub fn sidebar(&self) -> ElementId {
        self.sidebar
    }

    pub fn container(&self) -> ElementId {
        self.container
    }

    pub fn inner(&self) -> ElementId {
        self.inner
    }

    pub fn options(&self) -> &StickyOptions {
        &self.options
    }

    pub fn metrics(&self) -> BoxMetrics {
        self.metrics
    }

    pub fn probe_flags(&self) -> ProbeFlags {
        self.flags
    }

    pub fn state(&self) -> StickyState {
        self.state
    }

    /// Current mode as encoded in the inner element's CSS
    pub fn mode(&self, doc: &dyn Document) -> PositionMode {
        PositionMode::from_css(doc.computed_style(self.inner, "position").as_deref())
    }

    /// Measure, decide and apply
    pub fn recompute(&mut self, doc: &mut dyn Document) -> Recompute {
        let measurements = self.measure(doc);
        let (state, placement) = engine::compute(&self.options, &self.metrics, &self.flags, &self.state, &measurements);

        if placement.mode != measurements.inner_mode {
            debug!(
                sidebar = self.sidebar.id(),
                from = measurements.inner_mode.as_str(),
                to = placement.mode.as_str(),
                scroll_top = measurements.scroll_top,
                "sticky mode change"
            );
        }

        let writes = self.apply(doc, &placement);
        self.state = state;

        Recompute {
            sidebar: self.sidebar,
            placement,
            writes,
        }
    }

    /// Window resize: drop back into flow before measuring
    pub fn on_resize(&mut self, doc: &mut dyn Document) -> Recompute {
        doc.set_style(self.inner, "position", "static");
        self.recompute(doc)
    }

    /// Put the sidebar back into its natural static state
    pub fn reset(&self, doc: &mut dyn Document) -> Vec<StyleWrite> {
        self.apply(doc, &Placement::reset())
    }

    /// Read the live geometry the engine needs
    pub fn measure(&self, doc: &dyn Document) -> Measurements {
        let sidebar_floats = doc
            .computed_style(self.sidebar, "float")
            .map(|f| f != "none")
            .unwrap_or(false);

        Measurements {
            inner_visible: doc.is_visible(self.inner),
            body_width: doc.body_width(),
            viewport_height: doc.viewport_height(),
            scroll_top: doc.scroll_top(),
            scroll_left: doc.scroll_left(),
            sidebar_outer_width: doc.outer_width(self.sidebar, !sidebar_floats),
            sidebar_top: doc.offset_top(self.sidebar),
            sidebar_left: doc.offset_left(self.sidebar),
            sidebar_padding_left: whole_px(doc, self.sidebar, "padding-left"),
            container_width: doc.width(self.container),
            container_height: doc.height(self.container),
            container_cleared_height: cleared_height(doc, self.container),
            inner_top: doc.offset_top(self.inner),
            inner_height: doc.outer_height(self.inner),
            inner_width: doc
                .bounding_width(self.inner)
                .unwrap_or_else(|| doc.width(self.inner)),
            inner_mode: self.mode(doc),
            inner_translate_y: doc
                .style(self.inner, "transform")
                .and_then(|t| parse_translate_y(&t)),
        }
    }

    fn apply(&self, doc: &mut dyn Document, placement: &Placement) -> Vec<StyleWrite> {
        let mut writes = Vec::new();

        if let Some(min_height) = placement.sidebar_min_height.css() {
            write_style(doc, self.sidebar, "min-height", min_height, &mut writes);
        }
        for (property, value) in placement.inner.declarations() {
            write_style(doc, self.inner, property, value, &mut writes);
        }

        writes
    }
}

/// Set a style only when it differs from the current inline value
fn write_style(
    doc: &mut dyn Document,
    element: ElementId,
    property: &'static str,
    value: String,
    writes: &mut Vec<StyleWrite>,
) {
    let current = doc.style(element, property).unwrap_or_default();
    if current == value {
        return;
    }
    doc.set_style(element, property, &value);
    writes.push(StyleWrite { element, property, value });
}

fn resolve_container(doc: &dyn Document, sidebar: ElementId, options: &StickyOptions) -> ElementId {
    let parent = doc.parent(sidebar).unwrap_or(sidebar);
    let Some(selector) = options.container_selector.as_deref() else {
        return parent;
    };

    match doc.query_all(selector).first() {
        Some(container) => *container,
        None => {
            warn!(selector, "container selector matched nothing, using the sidebar's parent");
            parent
        }
    }
}

/// Reuse an existing wrapper, or move the sidebar's children into a new one
fn find_or_create_inner(doc: &mut dyn Document, sidebar: ElementId) -> ElementId {
    if let Some(existing) = doc.query_within(sidebar, &format!(".{}", INNER_CLASS)).first() {
        return *existing;
    }

    // Scripts would run again once re-attached
    for script in doc.query_within(sidebar, "script") {
        let script_type = doc.attribute(script, "type").unwrap_or_default();
        if is_javascript_mime(&script_type) {
            doc.remove(script);
        }
    }

    let inner = doc.create_element("div");
    doc.add_class(inner, INNER_CLASS);
    for child in doc.children(sidebar) {
        doc.append_child(inner, child);
    }
    doc.append_child(sidebar, inner);
    inner
}

/// Force 1px vertical padding and keep it only on edges where a margin was collapsing
fn probe_collapsing_margins(doc: &mut dyn Document, inner: ElementId) -> ProbeFlags {
    let top_before = doc.offset_top(inner);
    let height_before = doc.outer_height(inner);

    let probe = format_px(PROBE_PADDING);
    doc.set_style(inner, "padding-top", &probe);
    doc.set_style(inner, "padding-bottom", &probe);

    let top_collapse = top_before - doc.offset_top(inner);
    let bottom_collapse = doc.outer_height(inner) - height_before - 2.0 * PROBE_PADDING - top_collapse;

    let flags = ProbeFlags {
        padding_top: top_collapse != 0.0,
        padding_bottom: bottom_collapse != 0.0,
    };
    if !flags.padding_top {
        doc.set_style(inner, "padding-top", "0px");
    }
    if !flags.padding_bottom {
        doc.set_style(inner, "padding-bottom", "0px");
    }
    flags
}

/// Height of an element with one level of floated children cleared
fn cleared_height(doc: &dyn Document, element: ElementId) -> f64 {
    doc.children(element)
        .into_iter()
        .map(|child| doc.height(child))
        .fold(doc.height(element), f64::max)
}

fn whole_px(doc: &dyn Document, element: ElementId, property: &str) -> f64 {
    doc.computed_style(element, property)
        .and_then(|v| parse_whole_px(&v))
        .map(|n| n as f64)
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Edges, PageModel};

    /// Container 2000px tall at the top of the page, sidebar 300px wide with one 400px widget
    fn page() -> (PageModel, ElementId, ElementId) {
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

    fn scroll(page: &mut PageModel, instance: &mut StickyInstance, top: f64) -> Recompute {
        page.scroll_to(top, 0.0);
        instance.recompute(page)
    }

    #[test]
    fn test_bind_wraps_children() {
        let (mut page, sidebar, widget) = page();
        let instance = StickyInstance::bind(&mut page, sidebar, StickyOptions::default());

        let inner = instance.inner();
        assert_eq!(page.children(sidebar), vec![inner]);
        assert_eq!(page.parent(widget), Some(inner));
        assert!(page.has_class(inner, INNER_CLASS));
        assert_eq!(page.style(sidebar, "position").as_deref(), Some("relative"));
        assert_eq!(page.style(sidebar, "overflow").as_deref(), Some("visible"));
        assert_eq!(page.style(sidebar, "min-height").as_deref(), Some("1px"));
        assert_eq!(page.style(inner, "transform").as_deref(), Some("none"));
        assert_eq!(instance.container(), page.parent(sidebar).unwrap());
    }

    #[test]
    fn test_rebinding_reuses_wrapper() {
        let (mut page, sidebar, _) = page();
        let first = StickyInstance::bind(&mut page, sidebar, StickyOptions::default());
        let second = StickyInstance::bind(&mut page, sidebar, StickyOptions::default());

        assert_eq!(first.inner(), second.inner());
        assert_eq!(page.query_within(sidebar, ".sticky-sidebar-inner").len(), 1);
    }

    #[test]
    fn test_executable_scripts_are_stripped() {
        let (mut page, sidebar, _) = page();
        let inline = page.add(sidebar, "script", &[]);
        let module = page.add(sidebar, "script", &[]);
        page.set_attribute(module, "type", "application/x-ecmascript");
        let template = page.add(sidebar, "script", &[]);
        page.set_attribute(template, "type", "text/template");

        let instance = StickyInstance::bind(&mut page, sidebar, StickyOptions::default());

        assert!(!page.contains(inline));
        assert!(!page.contains(module));
        assert_eq!(page.parent(template), Some(instance.inner()));
    }

    #[test]
    fn test_probe_keeps_padding_only_where_margins_collapse() {
        let (mut page, sidebar, widget) = page();
        page.set_margin(widget, Edges::vertical(10.0, 6.0));
        let instance = StickyInstance::bind(&mut page, sidebar, StickyOptions::default());
        assert_eq!(instance.probe_flags(), ProbeFlags { padding_top: true, padding_bottom: true });
        assert_eq!(page.style(instance.inner(), "padding-top").as_deref(), Some("1px"));

        let (mut page, sidebar, _) = self::page();
        let instance = StickyInstance::bind(&mut page, sidebar, StickyOptions::default());
        assert_eq!(instance.probe_flags(), ProbeFlags::default());
        assert_eq!(page.style(instance.inner(), "padding-top").as_deref(), Some("0px"));
        assert_eq!(page.style(instance.inner(), "padding-bottom").as_deref(), Some("0px"));
    }

    #[test]
    fn test_metrics_are_cached_at_bind() {
        let (mut page, sidebar, _) = page();
        page.set_padding(sidebar, Edges::vertical(12.0, 8.0));
        page.set_margin(sidebar, Edges::vertical(0.0, 30.0));
        let instance = StickyInstance::bind(&mut page, sidebar, StickyOptions::default());

        assert_eq!(
            instance.metrics(),
            BoxMetrics { padding_top: 12.0, padding_bottom: 8.0, margin_bottom: 30.0 }
        );

        // Later padding changes are not picked up
        page.set_padding(sidebar, Edges::vertical(40.0, 40.0));
        assert_eq!(instance.metrics().padding_top, 12.0);
    }

    #[test]
    fn test_scroll_through_container() {
        let (mut page, sidebar, _) = page();
        let mut instance = StickyInstance::bind(&mut page, sidebar, StickyOptions::default());
        let inner = instance.inner();

        let result = scroll(&mut page, &mut instance, 0.0);
        assert_eq!(result.placement.mode, PositionMode::Static);
        assert!(result.writes.is_empty());

        let result = scroll(&mut page, &mut instance, 50.0);
        assert_eq!(result.placement.mode, PositionMode::Fixed);
        assert_eq!(page.style(inner, "position").as_deref(), Some("fixed"));
        assert_eq!(page.style(inner, "transform").as_deref(), Some("translateY(0px)"));
        assert_eq!(page.style(inner, "width").as_deref(), Some("300px"));
        assert_eq!(page.style(inner, "left").as_deref(), Some("0px"));
        assert_eq!(page.style(sidebar, "min-height").as_deref(), Some("430px"));
        assert_eq!(page.offset_top(inner), 50.0);

        let result = scroll(&mut page, &mut instance, 1700.0);
        assert_eq!(result.placement.mode, PositionMode::Absolute);
        assert_eq!(page.style(inner, "transform").as_deref(), Some("translateY(1600px)"));
        assert_eq!(page.style(inner, "left"), None);
        assert_eq!(page.offset_top(inner) + page.outer_height(inner), 2020.0);
        assert_eq!(page.style(sidebar, "min-height").as_deref(), Some("2000px"));
        assert_eq!(instance.state().previous_scroll_top, Some(1700.0));
    }

    #[test]
    fn test_repeated_recompute_writes_nothing() {
        let (mut page, sidebar, _) = page();
        let mut instance = StickyInstance::bind(&mut page, sidebar, StickyOptions::default());

        for top in [50.0, 1700.0] {
            let first = scroll(&mut page, &mut instance, top);
            assert!(!first.writes.is_empty());
            let second = instance.recompute(&mut page);
            assert!(second.writes.is_empty(), "scroll {}: {:?}", top, second.writes);
            assert_eq!(first.placement.mode, second.placement.mode);
        }
    }

    #[test]
    fn test_narrow_resize_reverts_to_static() {
        let (mut page, sidebar, _) = page();
        page.resize(1024.0, 800.0);
        let options = StickyOptions::default().with_min_width(768);
        let mut instance = StickyInstance::bind(&mut page, sidebar, options);
        let inner = instance.inner();

        let result = scroll(&mut page, &mut instance, 300.0);
        assert_eq!(result.placement.mode, PositionMode::Fixed);

        page.resize(600.0, 800.0);
        let result = instance.on_resize(&mut page);
        assert_eq!(result.placement, Placement::reset());
        assert_eq!(page.style(inner, "position").as_deref(), Some("static"));
        assert_eq!(page.style(inner, "width"), None);
        assert_eq!(page.style(inner, "transform").as_deref(), Some("none"));
        assert_eq!(page.style(sidebar, "min-height").as_deref(), Some("1px"));
    }

    #[test]
    fn test_hidden_sidebar_is_reset() {
        let (mut page, sidebar, _) = page();
        let mut instance = StickyInstance::bind(&mut page, sidebar, StickyOptions::default());
        scroll(&mut page, &mut instance, 50.0);

        page.set_hidden(sidebar, true);
        let result = scroll(&mut page, &mut instance, 60.0);
        assert_eq!(result.placement.mode, PositionMode::Static);
        assert_eq!(instance.state().previous_scroll_top, Some(50.0));
    }

    #[test]
    fn test_missing_bounding_rect_falls_back_to_content_width() {
        let (mut page, sidebar, _) = page();
        page.set_bounding_rect_available(false);
        let mut instance = StickyInstance::bind(&mut page, sidebar, StickyOptions::default());

        scroll(&mut page, &mut instance, 50.0);
        assert_eq!(page.style(instance.inner(), "width").as_deref(), Some("300px"));
    }

    #[test]
    fn test_unmatched_container_selector_uses_parent() {
        let (mut page, sidebar, _) = page();
        let options = StickyOptions::default().with_container_selector(".missing");
        let instance = StickyInstance::bind(&mut page, sidebar, options);
        assert_eq!(Some(instance.container()), page.parent(sidebar));

        let wrapper = page.add(page.body(), "main", &["content"]);
        let options = StickyOptions::default().with_container_selector("main.content");
        let instance = StickyInstance::bind(&mut page, sidebar, options);
        assert_eq!(instance.container(), wrapper);
    }
}
