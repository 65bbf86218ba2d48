// Configuration loading module
// Runtime settings read from config.yaml: demo application, sticky bindings, navigation, page geometry

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::ConfigError;
use crate::nav::NavClasses;
use crate::sticky::{StickyOptions, StickyOptionsYaml};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Sticky sidebar bindings, applied in order
    #[serde(default)]
    pub bindings: Vec<BindingConfig>,

    #[serde(default)]
    pub navigation: NavigationConfig,

    #[serde(default)]
    pub page: PageConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApplicationConfig {
    pub title: String,

    /// Pixels scrolled per arrow key or wheel notch
    pub scroll_step: f64,

    /// CSS pixels represented by one terminal row
    pub px_per_row: f64,

    /// CSS pixels represented by one terminal column
    pub px_per_column: f64,

    /// Log file of the terminal demo (None = no logging)
    pub log_file: Option<String>,
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            title: "Storefront".to_string(),
            scroll_step: 40.0,
            px_per_row: 20.0,
            px_per_column: 10.0,
            log_file: None,
        }
    }
}

/// One sticky sidebar binding
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BindingConfig {
    pub selector: String,

    #[serde(default)]
    pub options: StickyOptionsYaml,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    /// Top-level nav items (`data-item` values)
    pub items: Vec<String>,

    /// Product filter names
    pub filters: Vec<String>,

    /// Class-name overrides
    pub classes: NavClasses,
}

/// Geometry of the demo storefront page, in CSS pixels
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub header_height: f64,
    pub container_height: f64,
    pub gutter: f64,
    pub sidebar: SidebarConfig,
    pub footer_height: f64,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            header_height: 240.0,
            container_height: 2400.0,
            gutter: 40.0,
            sidebar: SidebarConfig::default(),
            footer_height: 800.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SidebarConfig {
    pub width: f64,
    pub padding_top: f64,
    pub padding_bottom: f64,

    /// Heights of the stacked widgets
    pub widgets: Vec<f64>,
}

impl Default for SidebarConfig {
    fn default() -> Self {
        Self {
            width: 320.0,
            padding_top: 20.0,
            padding_bottom: 20.0,
            widgets: vec![180.0, 260.0, 120.0],
        }
    }
}

impl SiteConfig {
    /// Default config location: src/config.yaml of this crate
    pub fn default_path() -> PathBuf {
        let mut default_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        default_path.push("src");
        default_path.push("config.yaml");
        default_path
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;

        Self::from_yaml(&content).with_context(|| format!("Failed to parse config: {}", path.display()))
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        let config: SiteConfig = serde_yaml::from_str(content).context("Failed to parse config YAML")?;
        Ok(config)
    }

    /// Resolve every binding's options against the compiled defaults
    pub fn resolve_bindings(&self) -> Result<Vec<(String, StickyOptions)>, ConfigError> {
        self.bindings
            .iter()
            .enumerate()
            .map(|(index, binding)| {
                let selector = binding.selector.trim();
                if selector.is_empty() {
                    return Err(ConfigError::EmptySelector(index));
                }
                Ok((selector.to_string(), binding.options.resolve()?))
            })
            .collect()
    }
}

impl PageConfig {
    /// Reject geometry the page model cannot lay out
    pub fn validate(&self) -> Result<(), ConfigError> {
        let lengths = [
            ("page.header_height", self.header_height),
            ("page.container_height", self.container_height),
            ("page.gutter", self.gutter),
            ("page.footer_height", self.footer_height),
            ("page.sidebar.padding_top", self.sidebar.padding_top),
            ("page.sidebar.padding_bottom", self.sidebar.padding_bottom),
        ];
        for (field, value) in lengths {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::geometry(field, format!("must be a non-negative length, got {}", value)));
            }
        }

        if !(self.sidebar.width.is_finite() && self.sidebar.width > 0.0) {
            return Err(ConfigError::geometry("page.sidebar.width", "must be positive"));
        }
        if self.container_height <= 0.0 {
            return Err(ConfigError::geometry("page.container_height", "must be positive"));
        }
        if let Some(index) = self.sidebar.widgets.iter().position(|h| !h.is_finite() || *h <= 0.0) {
            return Err(ConfigError::geometry(
                format!("page.sidebar.widgets[{}]", index),
                "widget heights must be positive",
            ));
        }
        if self.sidebar.widgets.is_empty() {
            return Err(ConfigError::geometry("page.sidebar.widgets", "at least one widget is required"));
        }

        Ok(())
    }

    /// Height of the sidebar's content in flow
    pub fn sidebar_content_height(&self) -> f64 {
        self.sidebar.widgets.iter().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sticky::SidebarBehavior;

    #[test]
    fn test_bundled_config_parses() {
        let config = SiteConfig::load(&SiteConfig::default_path()).unwrap();
        assert_eq!(config.application.title, "Storefront");
        assert_eq!(config.bindings.len(), 1);
        assert_eq!(config.navigation.items, vec!["products", "showroom", "support"]);
        assert!(config.page.validate().is_ok());

        let bindings = config.resolve_bindings().unwrap();
        assert_eq!(bindings[0].0, ".left-sidebar");
        assert_eq!(bindings[0].1.additional_margin_top, 150);
        assert_eq!(bindings[0].1.min_width, 768);
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config = SiteConfig::from_yaml("bindings:\n  - selector: aside\n").unwrap();
        assert_eq!(config.application.scroll_step, 40.0);
        assert_eq!(config.page.sidebar.widgets.len(), 3);
        assert_eq!(config.navigation.classes, NavClasses::default());

        let bindings = config.resolve_bindings().unwrap();
        assert_eq!(bindings[0].1, StickyOptions::default());
    }

    #[test]
    fn test_binding_options() {
        let yaml = "bindings:\n  - selector: \".a\"\n    options:\n      sidebar_behavior: stick-to-top\n      additional_margin_bottom: \"12px\"\n";
        let bindings = SiteConfig::from_yaml(yaml).unwrap().resolve_bindings().unwrap();
        assert_eq!(bindings[0].1.sidebar_behavior, SidebarBehavior::StickToTop);
        assert_eq!(bindings[0].1.additional_margin_bottom, 12);
    }

    #[test]
    fn test_invalid_bindings() {
        let config = SiteConfig::from_yaml("bindings:\n  - selector: \" \"\n").unwrap();
        assert_eq!(config.resolve_bindings().unwrap_err(), ConfigError::EmptySelector(0));

        let config = SiteConfig::from_yaml("bindings:\n  - selector: aside\n    options:\n      min_width: -1\n").unwrap();
        assert!(matches!(
            config.resolve_bindings().unwrap_err(),
            ConfigError::NegativeWidth { .. }
        ));

        assert!(SiteConfig::from_yaml("bindings:\n  - selector: aside\n    options:\n      typo: 1\n").is_err());
    }

    #[test]
    fn test_geometry_validation() {
        let mut page = PageConfig::default();
        page.sidebar.widgets.push(0.0);
        assert!(matches!(
            page.validate().unwrap_err(),
            ConfigError::InvalidGeometry { ref field, .. } if field == "page.sidebar.widgets[3]"
        ));

        let mut page = PageConfig::default();
        page.gutter = -1.0;
        assert!(page.validate().is_err());

        let mut page = PageConfig::default();
        page.sidebar.width = 0.0;
        assert!(page.validate().is_err());
    }
}
