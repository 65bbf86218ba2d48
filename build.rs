// Build script - reads config.yaml at compile time and generates sticky sidebar defaults
// This allows changing defaults during development without editing source code
// An invalid value in the defaults section fails the build

use std::env;
use std::fs;
use std::path::Path;

fn main() {
    // Tell Cargo to rerun if config.yaml changes
    println!("cargo:rerun-if-changed=src/config.yaml");

    let out_dir = env::var("OUT_DIR").expect("OUT_DIR is set by cargo");
    let dest_path = Path::new(&out_dir).join("compiled_config.rs");

    // Try to read config.yaml from src/, fall back to hardcoded defaults if not found
    let config = if Path::new("src/config.yaml").exists() {
        let content = fs::read_to_string("src/config.yaml")
            .expect("Failed to read src/config.yaml");
        parse_config(&content)
    } else {
        CompiledDefaults::default()
    };

    let generated = format!(
        r#"// Auto-generated from config.yaml at compile time
// Do not edit - modify config.yaml and rebuild instead

pub const ADDITIONAL_MARGIN_TOP: i32 = {additional_margin_top};
pub const ADDITIONAL_MARGIN_BOTTOM: i32 = {additional_margin_bottom};
pub const UPDATE_SIDEBAR_HEIGHT: bool = {update_sidebar_height};
pub const MIN_WIDTH: u32 = {min_width};
pub const DISABLE_ON_RESPONSIVE_LAYOUTS: bool = {disable_on_responsive_layouts};
pub const SIDEBAR_BEHAVIOR: crate::sticky::SidebarBehavior = crate::sticky::SidebarBehavior::{sidebar_behavior};
pub const DEFAULT_POSITION: crate::sticky::CssPosition = crate::sticky::CssPosition::{default_position};
pub const NAMESPACE: &str = {namespace:?};
"#,
        additional_margin_top = config.additional_margin_top,
        additional_margin_bottom = config.additional_margin_bottom,
        update_sidebar_height = config.update_sidebar_height,
        min_width = config.min_width,
        disable_on_responsive_layouts = config.disable_on_responsive_layouts,
        sidebar_behavior = config.sidebar_behavior,
        default_position = config.default_position,
        namespace = config.namespace,
    );

    fs::write(&dest_path, generated).expect("Failed to write compiled config");
}

struct CompiledDefaults {
    additional_margin_top: i32,
    additional_margin_bottom: i32,
    update_sidebar_height: bool,
    min_width: u32,
    disable_on_responsive_layouts: bool,
    /// Variant name of SidebarBehavior
    sidebar_behavior: &'static str,
    /// Variant name of CssPosition
    default_position: &'static str,
    namespace: String,
}

impl Default for CompiledDefaults {
    fn default() -> Self {
        Self {
            additional_margin_top: 0,
            additional_margin_bottom: 0,
            update_sidebar_height: true,
            min_width: 0,
            disable_on_responsive_layouts: true,
            sidebar_behavior: "Modern",
            default_position: "Relative",
            namespace: "TSS".to_string(),
        }
    }
}

fn parse_config(content: &str) -> CompiledDefaults {
    let mut config = CompiledDefaults::default();

    // Simple YAML parsing (avoiding external dependencies in build script)
    let mut in_defaults = false;

    for line in content.lines() {
        let trimmed = line.trim();

        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        // A non-indented line starts a new top-level section
        if !line.starts_with(' ') && !line.starts_with('\t') {
            in_defaults = trimmed.starts_with("defaults:");
            continue;
        }

        if !in_defaults {
            continue;
        }

        if let Some((key, value)) = parse_kv(trimmed) {
            match key {
                "additional_margin_top" => config.additional_margin_top = parse_pixels(key, value),
                "additional_margin_bottom" => config.additional_margin_bottom = parse_pixels(key, value),
                "update_sidebar_height" => config.update_sidebar_height = parse_bool(key, value),
                "min_width" => config.min_width = parse_min_width(key, value),
                "disable_on_responsive_layouts" => {
                    config.disable_on_responsive_layouts = parse_bool(key, value)
                }
                "sidebar_behavior" => config.sidebar_behavior = parse_behavior(key, value),
                "default_position" => config.default_position = parse_position(key, value),
                "namespace" => config.namespace = parse_namespace(key, value),
                _ => invalid(key, value, "unknown option"),
            }
        }
    }

    config
}

fn parse_kv(line: &str) -> Option<(&str, &str)> {
    let colon_pos = line.find(':')?;
    let key = line[..colon_pos].trim();
    let mut value = line[colon_pos + 1..].trim();

    // Remove inline comments
    if let Some(comment_pos) = value.find(" #") {
        value = value[..comment_pos].trim();
    }

    // Skip if value is empty (section header)
    if value.is_empty() {
        return None;
    }

    Some((key, value))
}

fn invalid(key: &str, value: &str, expected: &str) -> ! {
    panic!("src/config.yaml defaults.{}: invalid value {:?} ({})", key, value, expected)
}

fn unquote(s: &str) -> &str {
    let s = s.trim();
    for quote in ['"', '\''] {
        if let Some(inner) = s.strip_prefix(quote).and_then(|rest| rest.strip_suffix(quote)) {
            return inner;
        }
    }
    s
}

/// Same forms the runtime accepts: integer, float (truncated), `<n>px`
fn parse_pixels(key: &str, value: &str) -> i32 {
    let text = unquote(value).trim();
    let number = text.strip_suffix("px").unwrap_or(text).trim();
    let parsed = number
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .map(|n| n.trunc())
        .filter(|n| *n >= f64::from(i32::MIN) && *n <= f64::from(i32::MAX));

    match parsed {
        Some(n) => n as i32,
        None => invalid(key, value, "expected an integer, a float or \"<n>px\""),
    }
}

fn parse_min_width(key: &str, value: &str) -> u32 {
    unquote(value)
        .parse()
        .unwrap_or_else(|_| invalid(key, value, "expected a non-negative integer"))
}

fn parse_bool(key: &str, value: &str) -> bool {
    match unquote(value) {
        "true" => true,
        "false" => false,
        _ => invalid(key, value, "expected true or false"),
    }
}

fn parse_behavior(key: &str, value: &str) -> &'static str {
    match unquote(value) {
        "modern" => "Modern",
        "stick-to-top" => "StickToTop",
        "stick-to-bottom" => "StickToBottom",
        _ => invalid(key, value, "expected modern, stick-to-top or stick-to-bottom"),
    }
}

fn parse_position(key: &str, value: &str) -> &'static str {
    match unquote(value) {
        "static" => "Static",
        "relative" => "Relative",
        "absolute" => "Absolute",
        "fixed" => "Fixed",
        _ => invalid(key, value, "expected static, relative, absolute or fixed"),
    }
}

fn parse_namespace(key: &str, value: &str) -> String {
    let namespace = unquote(value);
    let valid = !namespace.is_empty()
        && namespace
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if !valid {
        invalid(key, value, "use letters, digits, '-' or '_'");
    }
    namespace.to_string()
}
