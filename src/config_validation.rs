// Configuration validation module

use anyhow::{bail, Context, Result};
use std::path::PathBuf;
use tracing::warn;

use crate::config::SiteConfig;
use crate::core::ConfigError;

/// Load the configuration and check everything the demo and the trace tool rely on
pub fn load_and_validate_config(config_path: Option<PathBuf>) -> Result<SiteConfig> {
    let path = config_path.unwrap_or_else(SiteConfig::default_path);

    let config = SiteConfig::load(&path)?;
    validate_config(&config).with_context(|| format!("Invalid configuration: {}", path.display()))?;

    Ok(config)
}

/// Validate an already parsed configuration
pub fn validate_config(config: &SiteConfig) -> Result<()> {
    if config.bindings.is_empty() {
        bail!("at least one sticky sidebar binding is required");
    }

    for (index, binding) in config.bindings.iter().enumerate() {
        if binding.selector.trim().is_empty() {
            return Err(ConfigError::EmptySelector(index).into());
        }
        binding
            .options
            .resolve()
            .with_context(|| format!("binding #{} ({})", index, binding.selector))?;
    }

    config.page.validate()?;

    let app = &config.application;
    for (field, value) in [
        ("application.scroll_step", app.scroll_step),
        ("application.px_per_row", app.px_per_row),
        ("application.px_per_column", app.px_per_column),
    ] {
        if !(value.is_finite() && value > 0.0) {
            bail!("{} must be positive, got {}", field, value);
        }
    }

    // Only items 1-9 have a key in the demo
    if config.navigation.items.len() > 9 {
        warn!(
            count = config.navigation.items.len(),
            "more than 9 navigation items, the rest are reachable by click only"
        );
    }

    Ok(())
}
