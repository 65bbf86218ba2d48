// Sticky Sidebar Options
// Per-binding options, merged with the compiled-in defaults and validated up front

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::app_config::compiled;
use crate::core::ConfigError;
use crate::utilities::parse_whole_px;

/// How the sidebar anchors itself while the page scrolls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SidebarBehavior {
    /// Follow the scroll direction: pin to the top while scrolling up, to the bottom while scrolling down
    #[default]
    Modern,
    /// Always pin to the top anchor
    StickToTop,
    /// Always pin to the bottom anchor
    StickToBottom,
}

impl SidebarBehavior {
    pub fn as_str(&self) -> &'static str {
        match self {
            SidebarBehavior::Modern => "modern",
            SidebarBehavior::StickToTop => "stick-to-top",
            SidebarBehavior::StickToBottom => "stick-to-bottom",
        }
    }
}

impl FromStr for SidebarBehavior {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "modern" => Ok(SidebarBehavior::Modern),
            "stick-to-top" => Ok(SidebarBehavior::StickToTop),
            "stick-to-bottom" => Ok(SidebarBehavior::StickToBottom),
            other => Err(ConfigError::UnknownBehavior(other.to_string())),
        }
    }
}

impl fmt::Display for SidebarBehavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// CSS `position` value applied to the outer sidebar at bind time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CssPosition {
    Static,
    #[default]
    Relative,
    Absolute,
    Fixed,
}

impl CssPosition {
    pub fn as_str(&self) -> &'static str {
        match self {
            CssPosition::Static => "static",
            CssPosition::Relative => "relative",
            CssPosition::Absolute => "absolute",
            CssPosition::Fixed => "fixed",
        }
    }
}

impl FromStr for CssPosition {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "static" => Ok(CssPosition::Static),
            "relative" => Ok(CssPosition::Relative),
            "absolute" => Ok(CssPosition::Absolute),
            "fixed" => Ok(CssPosition::Fixed),
            other => Err(ConfigError::UnknownPosition(other.to_string())),
        }
    }
}

/// A length as written in YAML: `150`, `150.5` or `"150px"`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PixelInput {
    Whole(i64),
    Fractional(f64),
    Text(String),
}

impl PixelInput {
    /// Coerce to whole pixels, rejecting anything that is not a length
    pub fn to_whole(&self, field: &str) -> Result<i32, ConfigError> {
        let value = match self {
            PixelInput::Whole(n) => Some(*n),
            PixelInput::Fractional(n) if n.is_finite() => Some(n.trunc() as i64),
            PixelInput::Fractional(_) => None,
            PixelInput::Text(text) => parse_whole_px(text),
        };

        value
            .and_then(|n| i32::try_from(n).ok())
            .ok_or_else(|| ConfigError::invalid_pixels(field, self))
    }
}

impl fmt::Display for PixelInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PixelInput::Whole(n) => write!(f, "{}", n),
            PixelInput::Fractional(n) => write!(f, "{}", n),
            PixelInput::Text(s) => write!(f, "{:?}", s),
        }
    }
}

/// Options as read from YAML; every field is optional and falls back to the defaults
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StickyOptionsYaml {
    pub container_selector: Option<String>,
    pub additional_margin_top: Option<PixelInput>,
    pub additional_margin_bottom: Option<PixelInput>,
    pub update_sidebar_height: Option<bool>,
    pub min_width: Option<i64>,
    pub disable_on_responsive_layouts: Option<bool>,
    pub sidebar_behavior: Option<String>,
    pub default_position: Option<String>,
    pub namespace: Option<String>,
}

impl StickyOptionsYaml {
    /// Merge with the defaults and validate every field
    pub fn resolve(&self) -> Result<StickyOptions, ConfigError> {
        let mut options = StickyOptions::default();

        if let Some(selector) = &self.container_selector {
            let selector = selector.trim();
            options.container_selector = (!selector.is_empty()).then(|| selector.to_string());
        }
        if let Some(margin) = &self.additional_margin_top {
            options.additional_margin_top = margin.to_whole("additional_margin_top")?;
        }
        if let Some(margin) = &self.additional_margin_bottom {
            options.additional_margin_bottom = margin.to_whole("additional_margin_bottom")?;
        }
        if let Some(update) = self.update_sidebar_height {
            options.update_sidebar_height = update;
        }
        if let Some(min_width) = self.min_width {
            options.min_width = u32::try_from(min_width).map_err(|_| ConfigError::NegativeWidth {
                field: "min_width".to_string(),
                value: min_width,
            })?;
        }
        if let Some(disable) = self.disable_on_responsive_layouts {
            options.disable_on_responsive_layouts = disable;
        }
        if let Some(behavior) = &self.sidebar_behavior {
            options.sidebar_behavior = behavior.parse()?;
        }
        if let Some(position) = &self.default_position {
            options.default_position = position.parse()?;
        }
        if let Some(namespace) = &self.namespace {
            options.namespace = validate_namespace(namespace)?;
        }

        Ok(options)
    }
}

/// Validated options for one sticky sidebar binding
#[derive(Debug, Clone, PartialEq)]
pub struct StickyOptions {
    /// Selector of the bounding container (None = the sidebar's parent)
    pub container_selector: Option<String>,
    /// Extra clearance below the viewport top
    pub additional_margin_top: i32,
    /// Extra clearance above the viewport bottom
    pub additional_margin_bottom: i32,
    /// Keep the sidebar's min-height in sync with the detached inner element
    pub update_sidebar_height: bool,
    /// Body width below which the sidebar stays in normal flow
    pub min_width: u32,
    /// Disable when the sidebar is about as wide as its container
    pub disable_on_responsive_layouts: bool,
    pub sidebar_behavior: SidebarBehavior,
    pub default_position: CssPosition,
    /// Suffix of the injected stylesheet id
    pub namespace: String,
}

impl Default for StickyOptions {
    fn default() -> Self {
        Self {
            container_selector: None,
            additional_margin_top: compiled::ADDITIONAL_MARGIN_TOP,
            additional_margin_bottom: compiled::ADDITIONAL_MARGIN_BOTTOM,
            update_sidebar_height: compiled::UPDATE_SIDEBAR_HEIGHT,
            min_width: compiled::MIN_WIDTH,
            disable_on_responsive_layouts: compiled::DISABLE_ON_RESPONSIVE_LAYOUTS,
            sidebar_behavior: compiled::SIDEBAR_BEHAVIOR,
            default_position: compiled::DEFAULT_POSITION,
            namespace: compiled::NAMESPACE.to_string(),
        }
    }
}

impl StickyOptions {
    pub fn with_container_selector(mut self, selector: &str) -> Self {
        self.container_selector = Some(selector.to_string());
        self
    }

    pub fn with_additional_margin_top(mut self, margin: i32) -> Self {
        self.additional_margin_top = margin;
        self
    }

    pub fn with_additional_margin_bottom(mut self, margin: i32) -> Self {
        self.additional_margin_bottom = margin;
        self
    }

    pub fn with_update_sidebar_height(mut self, update: bool) -> Self {
        self.update_sidebar_height = update;
        self
    }

    pub fn with_min_width(mut self, min_width: u32) -> Self {
        self.min_width = min_width;
        self
    }

    pub fn with_disable_on_responsive_layouts(mut self, disable: bool) -> Self {
        self.disable_on_responsive_layouts = disable;
        self
    }

    pub fn with_behavior(mut self, behavior: SidebarBehavior) -> Self {
        self.sidebar_behavior = behavior;
        self
    }

    pub fn with_default_position(mut self, position: CssPosition) -> Self {
        self.default_position = position;
        self
    }

    pub fn with_namespace(mut self, namespace: &str) -> Result<Self, ConfigError> {
        self.namespace = validate_namespace(namespace)?;
        Ok(self)
    }

    /// Id of the `<style>` element shared by every binding in this namespace
    pub fn stylesheet_id(&self) -> String {
        format!("{}{}", crate::constants::STYLESHEET_ID_PREFIX, self.namespace)
    }
}

fn validate_namespace(namespace: &str) -> Result<String, ConfigError> {
    let namespace = namespace.trim();
    let valid = !namespace.is_empty()
        && namespace
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');

    if valid {
        Ok(namespace.to_string())
    } else {
        Err(ConfigError::InvalidNamespace(namespace.to_string()))
    }
}
