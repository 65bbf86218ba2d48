// Sticky Positioning Engine
// Pure position decision: (options, cached metrics, state, measurements) -> (state, placement)
//
// All coordinates are CSS pixels. "Document" offsets are measured from the top of the
// page, "viewport" offsets from the top of the visible window.

use crate::constants::{MIN_HEIGHT_PLACEHOLDER, RESPONSIVE_WIDTH_TOLERANCE};
use crate::utilities::{format_px, translate_y};

use super::options::{SidebarBehavior, StickyOptions};

/// How the inner element is positioned
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PositionMode {
    /// Normal document flow
    #[default]
    Static,
    /// Pinned to the viewport
    Fixed,
    /// Frozen inside the sidebar near the container bottom
    Absolute,
}

impl PositionMode {
    /// Read the mode back from a CSS `position` value
    pub fn from_css(value: Option<&str>) -> Self {
        match value {
            Some("fixed") => PositionMode::Fixed,
            Some("absolute") => PositionMode::Absolute,
            _ => PositionMode::Static,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PositionMode::Static => "static",
            PositionMode::Fixed => "fixed",
            PositionMode::Absolute => "absolute",
        }
    }
}

/// Sidebar measurements cached once at bind time
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BoxMetrics {
    pub padding_top: f64,
    pub padding_bottom: f64,
    pub margin_bottom: f64,
}

/// Result of the collapsing margin probe: whether the inner element keeps 1px padding
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProbeFlags {
    pub padding_top: bool,
    pub padding_bottom: bool,
}

impl ProbeFlags {
    /// Total probe padding kept on the inner element
    pub fn total(&self) -> f64 {
        f64::from(u8::from(self.padding_top)) + f64::from(u8::from(self.padding_bottom))
    }
}

/// The only state carried from one recompute to the next
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StickyState {
    pub previous_scroll_top: Option<f64>,
}

/// Live geometry read from the document for one recompute
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Measurements {
    pub inner_visible: bool,
    pub body_width: f64,
    pub viewport_height: f64,
    pub scroll_top: f64,
    pub scroll_left: f64,
    /// Sidebar border box width, margins included when it does not float
    pub sidebar_outer_width: f64,
    pub sidebar_top: f64,
    pub sidebar_left: f64,
    pub sidebar_padding_left: f64,
    pub container_width: f64,
    pub container_height: f64,
    /// Container height with one level of floated children cleared
    pub container_cleared_height: f64,
    /// Inner element document top
    pub inner_top: f64,
    pub inner_height: f64,
    /// Inner element bounding width (falls back to content width)
    pub inner_width: f64,
    /// Mode currently encoded in the inner element's CSS
    pub inner_mode: PositionMode,
    /// Translation currently applied to the inner element
    pub inner_translate_y: Option<f64>,
}

/// Style set written to the inner element
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InnerStyle {
    /// Natural static position, no width, no transform
    Reset,
    Fixed { width: f64, translate_y: f64, left: f64 },
    Absolute { width: f64, translate_y: f64 },
}

impl InnerStyle {
    /// CSS declarations in write order; an empty value clears the property
    pub fn declarations(&self) -> Vec<(&'static str, String)> {
        match *self {
            InnerStyle::Reset => vec![
                ("position", "static".to_string()),
                ("width", String::new()),
                ("transform", "none".to_string()),
            ],
            InnerStyle::Fixed { width, translate_y: offset, left } => vec![
                ("position", "fixed".to_string()),
                ("width", format_px(width)),
                ("transform", translate_y(offset)),
                ("left", format_px(left)),
                ("top", "0px".to_string()),
            ],
            InnerStyle::Absolute { width, translate_y: offset } => vec![
                ("position", "absolute".to_string()),
                ("transform", translate_y(offset)),
                ("top", "0px".to_string()),
                ("width", format_px(width)),
                ("left", String::new()),
            ],
        }
    }
}

/// Min-height written to the outer sidebar
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SidebarHeight {
    /// Leave the current value
    Unchanged,
    /// The 1px reset placeholder
    Placeholder,
    /// Rendered extent of the detached inner element
    Extent(f64),
}

impl SidebarHeight {
    pub fn css(&self) -> Option<String> {
        match self {
            SidebarHeight::Unchanged => None,
            SidebarHeight::Placeholder => Some(MIN_HEIGHT_PLACEHOLDER.to_string()),
            SidebarHeight::Extent(height) => Some(format_px(*height)),
        }
    }
}

/// Outcome of one recompute
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub mode: PositionMode,
    /// Viewport-relative top of the inner element, when it was computed
    pub top: Option<f64>,
    pub inner: InnerStyle,
    pub sidebar_min_height: SidebarHeight,
}

impl Placement {
    /// The reset state: static flow, placeholder height
    pub fn reset() -> Self {
        Self {
            mode: PositionMode::Static,
            top: None,
            inner: InnerStyle::Reset,
            sidebar_min_height: SidebarHeight::Placeholder,
        }
    }
}

/// Why a recompute bailed out before computing a position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disabled {
    Hidden,
    BelowMinWidth,
    ResponsiveLayout,
}

/// Check the guards that disable stickiness for this recompute
pub fn disabled_reason(options: &StickyOptions, m: &Measurements) -> Option<Disabled> {
    if !m.inner_visible {
        return Some(Disabled::Hidden);
    }
    if m.body_width < f64::from(options.min_width) {
        return Some(Disabled::BelowMinWidth);
    }
    if options.disable_on_responsive_layouts
        && m.sidebar_outer_width + RESPONSIVE_WIDTH_TOLERANCE > m.container_width
    {
        return Some(Disabled::ResponsiveLayout);
    }
    None
}

/// Decide the position of the inner element
///
/// Disabled recomputes reset the sidebar and leave the scroll history untouched;
/// every other recompute records the current scroll offset.
pub fn compute(
    options: &StickyOptions,
    metrics: &BoxMetrics,
    flags: &ProbeFlags,
    state: &StickyState,
    m: &Measurements,
) -> (StickyState, Placement) {
    if disabled_reason(options, m).is_some() {
        return (*state, Placement::reset());
    }

    let next_state = StickyState {
        previous_scroll_top: Some(m.scroll_top),
    };

    let margin_top = f64::from(options.additional_margin_top);
    let margin_bottom = f64::from(options.additional_margin_bottom);
    let scroll_top = m.scroll_top;

    // Not scrolled far enough for the sidebar's top to be clipped
    if scroll_top < m.sidebar_top + (metrics.padding_top - margin_top) {
        return (next_state, Placement::reset());
    }

    let offset_top = metrics.padding_top + margin_top;
    let offset_bottom = metrics.padding_bottom + metrics.margin_bottom + margin_bottom;

    let container_top = m.sidebar_top;
    let container_bottom = m.sidebar_top + m.container_cleared_height;

    let window_offset_top = margin_top;
    let window_offset_bottom = if m.inner_height + offset_top + offset_bottom < m.viewport_height {
        window_offset_top + m.inner_height
    } else {
        m.viewport_height - metrics.margin_bottom - metrics.padding_bottom - margin_bottom
    };
    let bottom_anchor = window_offset_bottom - m.inner_height;

    let static_limit_top = container_top - scroll_top + metrics.padding_top;
    let static_limit_bottom = container_bottom - scroll_top - metrics.padding_bottom - metrics.margin_bottom;

    let mut top = m.inner_top - scroll_top;
    let scroll_delta = state.previous_scroll_top.unwrap_or(0.0) - scroll_top;

    // A fixed element does not move with the page, so replay the scroll on it
    if m.inner_mode == PositionMode::Fixed && options.sidebar_behavior == SidebarBehavior::Modern {
        top += scroll_delta;
    }

    match options.sidebar_behavior {
        SidebarBehavior::StickToTop => top = window_offset_top,
        SidebarBehavior::StickToBottom => top = bottom_anchor,
        SidebarBehavior::Modern => {}
    }

    if scroll_delta > 0.0 {
        top = top.min(window_offset_top);
    } else {
        top = top.max(bottom_anchor);
    }

    top = top.max(static_limit_top);
    top = top.min(static_limit_bottom - m.inner_height);

    let same_height_as_container = m.container_height == m.inner_height;

    let mode = if !same_height_as_container && (top == window_offset_top || top == bottom_anchor) {
        PositionMode::Fixed
    } else if scroll_top + top - m.sidebar_top - metrics.padding_top <= margin_top {
        PositionMode::Static
    } else {
        PositionMode::Absolute
    };

    let placement = match mode {
        PositionMode::Static => Placement::reset(),
        PositionMode::Fixed => {
            let inner_top_after = scroll_top + top;
            Placement {
                mode,
                top: Some(top),
                inner: InnerStyle::Fixed {
                    width: m.inner_width,
                    translate_y: top,
                    left: m.sidebar_left + m.sidebar_padding_left - m.scroll_left,
                },
                sidebar_min_height: sidebar_height(options, metrics, m, inner_top_after),
            }
        }
        PositionMode::Absolute => {
            // Keep the frozen translation while already absolute
            let offset = match (m.inner_mode, m.inner_translate_y) {
                (PositionMode::Absolute, Some(current)) => current,
                _ => scroll_top + top - m.sidebar_top - flags.total(),
            };
            Placement {
                mode,
                top: Some(top),
                inner: InnerStyle::Absolute {
                    width: m.inner_width,
                    translate_y: offset,
                },
                sidebar_min_height: sidebar_height(options, metrics, m, m.sidebar_top + offset),
            }
        }
    };

    (next_state, placement)
}

fn sidebar_height(options: &StickyOptions, metrics: &BoxMetrics, m: &Measurements, inner_top_after: f64) -> SidebarHeight {
    if !options.update_sidebar_height {
        return SidebarHeight::Unchanged;
    }
    SidebarHeight::Extent(m.inner_height + inner_top_after - m.sidebar_top + metrics.padding_bottom)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Container 2000px tall, inner 400px, viewport 800px, sidebar top at 20px
    fn scenario() -> Measurements {
        Measurements {
            inner_visible: true,
            body_width: 1200.0,
            viewport_height: 800.0,
            scroll_top: 0.0,
            scroll_left: 0.0,
            sidebar_outer_width: 300.0,
            sidebar_top: 20.0,
            sidebar_left: 40.0,
            sidebar_padding_left: 0.0,
            container_width: 1200.0,
            container_height: 2000.0,
            container_cleared_height: 2000.0,
            inner_top: 20.0,
            inner_height: 400.0,
            inner_width: 300.0,
            inner_mode: PositionMode::Static,
            inner_translate_y: None,
        }
    }

    /// Feed a placement back into the measurements, as the document would
    fn apply(m: &mut Measurements, metrics: &BoxMetrics, placement: &Placement) {
        match placement.inner {
            InnerStyle::Reset => {
                m.inner_mode = PositionMode::Static;
                m.inner_translate_y = None;
                m.inner_top = m.sidebar_top + metrics.padding_top;
            }
            InnerStyle::Fixed { translate_y, .. } => {
                m.inner_mode = PositionMode::Fixed;
                m.inner_translate_y = Some(translate_y);
                m.inner_top = m.scroll_top + translate_y;
            }
            InnerStyle::Absolute { translate_y, .. } => {
                m.inner_mode = PositionMode::Absolute;
                m.inner_translate_y = Some(translate_y);
                m.inner_top = m.sidebar_top + translate_y;
            }
        }
    }

    fn step(
        options: &StickyOptions,
        state: &mut StickyState,
        m: &mut Measurements,
        scroll_top: f64,
    ) -> Placement {
        step_with(options, &BoxMetrics::default(), state, m, scroll_top)
    }

    fn step_with(
        options: &StickyOptions,
        metrics: &BoxMetrics,
        state: &mut StickyState,
        m: &mut Measurements,
        scroll_top: f64,
    ) -> Placement {
        let delta = scroll_top - m.scroll_top;
        m.scroll_top = scroll_top;
        if m.inner_mode == PositionMode::Fixed {
            // Fixed elements keep their viewport position
            m.inner_top += delta;
        }
        let (next, placement) = compute(options, metrics, &ProbeFlags::default(), state, m);
        *state = next;
        apply(m, metrics, &placement);
        placement
    }

    #[test]
    fn test_scenario_static_fixed_absolute() {
        let options = StickyOptions::default();
        let mut state = StickyState::default();
        let mut m = scenario();

        let placement = step(&options, &mut state, &mut m, 0.0);
        assert_eq!(placement.mode, PositionMode::Static);
        assert_eq!(placement.sidebar_min_height, SidebarHeight::Placeholder);

        let placement = step(&options, &mut state, &mut m, 50.0);
        assert_eq!(placement.mode, PositionMode::Fixed);
        assert_eq!(placement.top, Some(0.0));
        assert_eq!(
            placement.inner,
            InnerStyle::Fixed { width: 300.0, translate_y: 0.0, left: 40.0 }
        );

        let placement = step(&options, &mut state, &mut m, 1700.0);
        assert_eq!(placement.mode, PositionMode::Absolute);
        let InnerStyle::Absolute { translate_y, .. } = placement.inner else {
            panic!("expected absolute style, got {:?}", placement.inner);
        };
        // Inner bottom flush with the container bottom (20 + 2000)
        assert_eq!(m.sidebar_top + translate_y + m.inner_height, 2020.0);
        assert_eq!(placement.sidebar_min_height, SidebarHeight::Extent(2000.0));
    }

    #[test]
    fn test_inner_box_stays_within_container() {
        let options = StickyOptions::default();
        let mut state = StickyState::default();
        let mut m = scenario();
        let container_top = m.sidebar_top;
        let container_bottom = m.sidebar_top + m.container_cleared_height;

        for scroll in (0..=1600).step_by(37) {
            let placement = step(&options, &mut state, &mut m, f64::from(scroll));
            if let Some(top) = placement.top {
                let document_top = m.scroll_top + top;
                assert!(document_top >= container_top, "scroll {}: top {}", scroll, document_top);
                assert!(
                    document_top + m.inner_height <= container_bottom,
                    "scroll {}: bottom {}",
                    scroll,
                    document_top + m.inner_height
                );
            }
        }
    }

    #[test]
    fn test_recompute_is_idempotent() {
        let options = StickyOptions::default();
        for scroll in [0.0, 50.0, 900.0, 1700.0] {
            let mut state = StickyState::default();
            let mut m = scenario();
            let first = step(&options, &mut state, &mut m, scroll);
            let state_after_first = state;
            let second = step(&options, &mut state, &mut m, scroll);
            assert_eq!(first.inner.declarations(), second.inner.declarations(), "scroll {}", scroll);
            assert_eq!(first.sidebar_min_height, second.sidebar_min_height);
            assert_eq!(state, state_after_first);
        }
    }

    #[test]
    fn test_scrolling_down_never_returns_to_static() {
        let options = StickyOptions::default();
        let mut state = StickyState::default();
        let mut m = scenario();
        let mut left_static = false;

        for scroll in (0..=1900).step_by(25) {
            let placement = step(&options, &mut state, &mut m, f64::from(scroll));
            if placement.mode != PositionMode::Static {
                left_static = true;
            } else {
                assert!(!left_static, "fell back to static at {}", scroll);
            }
        }
        assert!(left_static);
    }

    #[test]
    fn test_tall_sidebar_pins_to_viewport_bottom() {
        let options = StickyOptions::default();
        let mut state = StickyState::default();
        let mut m = scenario();
        m.inner_height = 1200.0;

        // Until the inner bottom reaches the viewport bottom it scrolls with the page
        let placement = step(&options, &mut state, &mut m, 200.0);
        assert_eq!(placement.mode, PositionMode::Static);

        let placement = step(&options, &mut state, &mut m, 600.0);
        assert_eq!(placement.mode, PositionMode::Fixed);
        assert_eq!(placement.top, Some(800.0 - 1200.0));

        // Scrolling back up releases the bottom pin; the sidebar freezes in place
        let placement = step(&options, &mut state, &mut m, 550.0);
        assert_eq!(placement.mode, PositionMode::Absolute);
        assert_eq!(placement.top, Some(-400.0 + 50.0));
    }

    #[test]
    fn test_stick_to_top_uses_margin() {
        let options = StickyOptions::default()
            .with_behavior(SidebarBehavior::StickToTop)
            .with_additional_margin_top(30);
        let mut state = StickyState::default();
        let mut m = scenario();

        for scroll in [100.0, 400.0, 1000.0] {
            let placement = step(&options, &mut state, &mut m, scroll);
            assert_eq!(placement.mode, PositionMode::Fixed, "scroll {}", scroll);
            assert_eq!(placement.top, Some(30.0));
        }

        // Container clamp still wins near the bottom
        let placement = step(&options, &mut state, &mut m, 1800.0);
        assert_eq!(placement.mode, PositionMode::Absolute);
        assert_eq!(placement.top, Some(2020.0 - 1800.0 - 400.0));
    }

    #[test]
    fn test_stick_to_bottom_pins_tall_sidebar() {
        let options = StickyOptions::default().with_behavior(SidebarBehavior::StickToBottom);
        let mut state = StickyState::default();
        let mut m = scenario();
        m.inner_height = 1200.0;

        // Inner bottom still below the viewport bottom
        let placement = step(&options, &mut state, &mut m, 100.0);
        assert_eq!(placement.mode, PositionMode::Static);

        // Pinned at viewport height - inner height
        let placement = step(&options, &mut state, &mut m, 600.0);
        assert_eq!(placement.mode, PositionMode::Fixed);
        assert_eq!(placement.top, Some(800.0 - 1200.0));

        // Unlike modern, scrolling back up keeps the bottom pin
        let placement = step(&options, &mut state, &mut m, 550.0);
        assert_eq!(placement.mode, PositionMode::Fixed);
        assert_eq!(placement.top, Some(-400.0));

        let placement = step(&options, &mut state, &mut m, 1500.0);
        assert_eq!(placement.mode, PositionMode::Absolute);
        assert_eq!(placement.top, Some(2020.0 - 1500.0 - 1200.0));
        assert_eq!(m.inner_top + m.inner_height, 2020.0);
    }

    #[test]
    fn test_additional_margin_bottom_raises_bottom_pin() {
        let options = StickyOptions::default().with_additional_margin_bottom(25);
        let mut state = StickyState::default();
        let mut m = scenario();
        m.inner_height = 1200.0;

        step(&options, &mut state, &mut m, 0.0);
        let placement = step(&options, &mut state, &mut m, 600.0);
        assert_eq!(placement.mode, PositionMode::Fixed);
        assert_eq!(placement.top, Some(800.0 - 25.0 - 1200.0));

        // A margin that no longer fits turns a short sidebar into a bottom-pinned one
        let options = StickyOptions::default().with_additional_margin_bottom(450);
        let mut state = StickyState::default();
        let mut m = scenario();

        step(&options, &mut state, &mut m, 0.0);
        let placement = step(&options, &mut state, &mut m, 600.0);
        assert_eq!(placement.mode, PositionMode::Fixed);
        assert_eq!(placement.top, Some(800.0 - 450.0 - 400.0));
    }

    #[test]
    fn test_sidebar_paddings_and_margin_bound_the_inner_box() {
        let options = StickyOptions::default();
        let metrics = BoxMetrics {
            padding_top: 15.0,
            padding_bottom: 10.0,
            margin_bottom: 5.0,
        };
        let mut state = StickyState::default();
        let mut m = scenario();
        m.inner_top = m.sidebar_top + metrics.padding_top;

        // Stays in flow until the padded inner top reaches the viewport top
        let placement = step_with(&options, &metrics, &mut state, &mut m, 30.0);
        assert_eq!(placement.mode, PositionMode::Static);

        let placement = step_with(&options, &metrics, &mut state, &mut m, 50.0);
        assert_eq!(placement.mode, PositionMode::Fixed);
        assert_eq!(placement.top, Some(0.0));
        // 30px below the sidebar top, plus the inner box and the bottom padding
        assert_eq!(placement.sidebar_min_height, SidebarHeight::Extent(30.0 + 400.0 + 10.0));

        // Container bottom 2020, less padding-bottom and margin-bottom
        let placement = step_with(&options, &metrics, &mut state, &mut m, 1700.0);
        assert_eq!(placement.mode, PositionMode::Absolute);
        assert_eq!(placement.top, Some(2005.0 - 1700.0 - 400.0));
        assert_eq!(
            placement.inner,
            InnerStyle::Absolute { width: 300.0, translate_y: 1585.0 }
        );
        assert_eq!(m.inner_top + m.inner_height, 2005.0);
        assert_eq!(placement.sidebar_min_height, SidebarHeight::Extent(1995.0));
    }

    #[test]
    fn test_below_min_width_resets_without_touching_history() {
        let options = StickyOptions::default().with_min_width(768);
        let mut state = StickyState::default();
        let mut m = scenario();
        m.body_width = 1024.0;

        let placement = step(&options, &mut state, &mut m, 300.0);
        assert_eq!(placement.mode, PositionMode::Fixed);
        assert_eq!(state.previous_scroll_top, Some(300.0));

        m.body_width = 600.0;
        let placement = step(&options, &mut state, &mut m, 320.0);
        assert_eq!(placement, Placement::reset());
        assert_eq!(
            placement.inner.declarations(),
            vec![
                ("position", "static".to_string()),
                ("width", String::new()),
                ("transform", "none".to_string()),
            ]
        );
        assert_eq!(state.previous_scroll_top, Some(300.0));
    }

    #[test]
    fn test_responsive_layout_disables() {
        let options = StickyOptions::default();
        let mut m = scenario();
        m.container_width = 320.0;
        assert_eq!(disabled_reason(&options, &m), Some(Disabled::ResponsiveLayout));

        let options = options.with_disable_on_responsive_layouts(false);
        assert_eq!(disabled_reason(&options, &m), None);

        m.inner_visible = false;
        assert_eq!(disabled_reason(&options, &m), Some(Disabled::Hidden));
    }

    #[test]
    fn test_same_height_as_container_is_never_fixed() {
        let options = StickyOptions::default();
        let mut state = StickyState::default();
        let mut m = scenario();
        m.inner_height = 2000.0;

        for scroll in [50.0, 500.0] {
            let placement = step(&options, &mut state, &mut m, scroll);
            assert_ne!(placement.mode, PositionMode::Fixed);
        }
    }

    #[test]
    fn test_min_height_is_left_alone_when_disabled() {
        let options = StickyOptions::default().with_update_sidebar_height(false);
        let mut state = StickyState::default();
        let mut m = scenario();
        let placement = step(&options, &mut state, &mut m, 50.0);
        assert_eq!(placement.mode, PositionMode::Fixed);
        assert_eq!(placement.sidebar_min_height, SidebarHeight::Unchanged);
    }

    #[test]
    fn test_absolute_keeps_frozen_translation() {
        let options = StickyOptions::default();
        let mut state = StickyState::default();
        let mut m = scenario();
        step(&options, &mut state, &mut m, 50.0);
        let first = step(&options, &mut state, &mut m, 1700.0);
        let second = step(&options, &mut state, &mut m, 1750.0);
        assert_eq!(first.inner, second.inner);
    }

    #[test]
    fn test_probe_padding_shifts_absolute_translation() {
        let options = StickyOptions::default();
        let flags = ProbeFlags { padding_top: true, padding_bottom: true };
        let mut m = scenario();
        m.scroll_top = 1700.0;
        m.inner_mode = PositionMode::Fixed;
        m.inner_top = 1700.0;
        let state = StickyState { previous_scroll_top: Some(50.0) };

        let (_, placement) = compute(&options, &BoxMetrics::default(), &flags, &state, &m);
        assert_eq!(
            placement.inner,
            InnerStyle::Absolute { width: 300.0, translate_y: 1598.0 }
        );
    }
}
