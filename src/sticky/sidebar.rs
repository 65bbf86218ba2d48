// Sticky Sidebar Binding
// Binds a selector to sticky instances, deferring until the body is wide enough
//
// Usage:
//   let mut binding = StickySidebar::attach(&mut page, ".left-sidebar", options);
//   page.scroll_to(300.0, 0.0);
//   binding.handle_event(&mut page, PageEvent::Scroll);

use tracing::info;

use crate::constants::clearfix_css;
use crate::core::{Document, PageEvent};

use super::instance::{Recompute, StickyInstance};
use super::options::StickyOptions;

/// One `selector + options` binding and the instances it created
#[derive(Debug, Clone)]
pub struct StickySidebar {
    selector: String,
    options: StickyOptions,
    initialized: bool,
    instances: Vec<StickyInstance>,
}

impl StickySidebar {
    /// Bind now, or wait for a scroll / resize that brings the body to `min_width`
    pub fn attach(doc: &mut dyn Document, selector: &str, options: StickyOptions) -> Self {
        let mut binding = Self {
            selector: selector.to_string(),
            options,
            initialized: false,
            instances: Vec::new(),
        };

        if !binding.try_init(doc) {
            info!(
                selector,
                body_width = doc.body_width(),
                min_width = binding.options.min_width,
                "body width smaller than min_width, init is delayed"
            );
        }
        binding
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn selector(&self) -> &str {
        &self.selector
    }

    pub fn options(&self) -> &StickyOptions {
        &self.options
    }

    pub fn instances(&self) -> &[StickyInstance] {
        &self.instances
    }

    /// Initialize once the width guard passes; true when initialized
    pub fn try_init(&mut self, doc: &mut dyn Document) -> bool {
        if self.initialized {
            return true;
        }
        if doc.body_width() < f64::from(self.options.min_width) {
            return false;
        }

        self.init(doc);
        true
    }

    fn init(&mut self, doc: &mut dyn Document) {
        self.initialized = true;

        let stylesheet_id = self.options.stylesheet_id();
        if !doc.has_stylesheet(&stylesheet_id) {
            doc.inject_stylesheet(&stylesheet_id, &clearfix_css());
        }

        for sidebar in doc.query_all(&self.selector) {
            let mut instance = StickyInstance::bind(doc, sidebar, self.options.clone());
            instance.recompute(doc);
            self.instances.push(instance);
        }

        info!(
            selector = %self.selector,
            count = self.instances.len(),
            namespace = %self.options.namespace,
            "sticky sidebar initialized"
        );
    }

    /// Route a page event to the instances
    ///
    /// Before initialization, scroll and resize only retry the init.
    pub fn handle_event(&mut self, doc: &mut dyn Document, event: PageEvent) -> Vec<Recompute> {
        if !self.initialized {
            if matches!(event, PageEvent::Scroll | PageEvent::Resize) {
                self.try_init(doc);
            }
            return Vec::new();
        }

        match event {
            PageEvent::Scroll => self.instances.iter_mut().map(|i| i.recompute(doc)).collect(),
            PageEvent::Resize => self.instances.iter_mut().map(|i| i.on_resize(doc)).collect(),
            PageEvent::ContentResized(element) => {
                let mut results = Vec::new();
                for instance in &mut self.instances {
                    if doc.is_within(element, instance.inner()) {
                        results.push(instance.recompute(doc));
                    }
                }
                results
            }
            PageEvent::Click(_) => Vec::new(),
        }
    }
}
