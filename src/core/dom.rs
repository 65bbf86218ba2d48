// Document Abstraction
// The DOM surface the sticky engine and the navigation controller read and mutate
//
// Usage:
//   let sidebars = doc.query_all(".left-sidebar");
//   let top = doc.offset_top(sidebars[0]);
//   doc.set_style(sidebars[0], "min-height", "1px");

/// Handle to an element of a document (stable for the element's lifetime)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub(crate) u64);

impl ElementId {
    /// Get the internal ID of this handle
    pub fn id(&self) -> u64 {
        self.0
    }
}

/// Operations a page must provide
///
/// Geometry is in CSS pixels. Offsets are document coordinates (relative to
/// the top-left of the page, not the viewport), matching what a sticky
/// engine would read from `offset()` in a browser.
pub trait Document {
    // === Viewport ===

    /// Width of the body element
    fn body_width(&self) -> f64;

    /// Height of the visible viewport
    fn viewport_height(&self) -> f64;

    /// Vertical scroll offset of the document
    fn scroll_top(&self) -> f64;

    /// Horizontal scroll offset of the document
    fn scroll_left(&self) -> f64;

    // === Tree ===

    /// The document root (`html`)
    fn root(&self) -> ElementId;

    /// Elements below `scope` matching a selector, in document order
    fn query_within(&self, scope: ElementId, selector: &str) -> Vec<ElementId>;

    /// Elements of the whole document matching a selector
    fn query_all(&self, selector: &str) -> Vec<ElementId> {
        self.query_within(self.root(), selector)
    }

    fn parent(&self, element: ElementId) -> Option<ElementId>;

    fn children(&self, element: ElementId) -> Vec<ElementId>;

    /// Check whether `element` is `ancestor` or lies below it
    fn is_within(&self, element: ElementId, ancestor: ElementId) -> bool {
        let mut current = Some(element);
        while let Some(node) = current {
            if node == ancestor {
                return true;
            }
            current = self.parent(node);
        }
        false
    }

    fn tag_name(&self, element: ElementId) -> Option<String>;

    fn attribute(&self, element: ElementId, name: &str) -> Option<String>;

    /// Create a detached element
    fn create_element(&mut self, tag: &str) -> ElementId;

    /// Append `child` to `parent`, detaching it from its current parent first
    fn append_child(&mut self, parent: ElementId, child: ElementId);

    /// Remove an element and its subtree
    fn remove(&mut self, element: ElementId);

    // === Classes ===

    fn has_class(&self, element: ElementId, class: &str) -> bool;

    fn add_class(&mut self, element: ElementId, class: &str);

    fn remove_class(&mut self, element: ElementId, class: &str);

    /// Add or remove a class depending on `enabled`
    fn set_class(&mut self, element: ElementId, class: &str, enabled: bool) {
        if enabled {
            self.add_class(element, class);
        } else {
            self.remove_class(element, class);
        }
    }

    // === Styles ===

    /// Inline style value, if set
    fn style(&self, element: ElementId, property: &str) -> Option<String>;

    /// Set an inline style; an empty value clears it
    fn set_style(&mut self, element: ElementId, property: &str, value: &str);

    /// Computed style value (inline value or the layout's value)
    fn computed_style(&self, element: ElementId, property: &str) -> Option<String>;

    fn has_stylesheet(&self, id: &str) -> bool;

    fn inject_stylesheet(&mut self, id: &str, css: &str);

    // === Layout ===

    /// Whether the element and all its ancestors are displayed
    fn is_visible(&self, element: ElementId) -> bool;

    /// Top of the border box in document coordinates
    fn offset_top(&self, element: ElementId) -> f64;

    /// Left of the border box in document coordinates
    fn offset_left(&self, element: ElementId) -> f64;

    /// Border box height
    fn outer_height(&self, element: ElementId) -> f64;

    /// Border box width, optionally including horizontal margins
    fn outer_width(&self, element: ElementId, include_margin: bool) -> f64;

    /// Content box width
    fn width(&self, element: ElementId) -> f64;

    /// Content box height
    fn height(&self, element: ElementId) -> f64;

    /// Bounding rectangle width; None when the measurement is unavailable
    fn bounding_width(&self, element: ElementId) -> Option<f64>;

    // === Focus ===

    fn focus(&mut self, element: ElementId);

    fn blur(&mut self, element: ElementId);
}
