// CSS Value Utilities
// Parsing and formatting of the handful of CSS values the engines read and write

/// Parse a pixel length such as `"12px"`, `"12.5px"` or `"12"`
/// Returns None for keywords (`auto`, `none`) and empty strings
pub fn parse_px(value: &str) -> Option<f64> {
    let value = value.trim();
    let number = value.strip_suffix("px").unwrap_or(value).trim();

    if number.is_empty() {
        return None;
    }

    number.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Parse a pixel length and truncate it to whole pixels
pub fn parse_whole_px(value: &str) -> Option<i64> {
    parse_px(value).map(|n| n.trunc() as i64)
}

/// Format a length in pixels, dropping a trailing `.0`
pub fn format_px(value: f64) -> String {
    format!("{}px", format_number(value))
}

/// Format a vertical translation transform
pub fn translate_y(value: f64) -> String {
    format!("translateY({}px)", format_number(value))
}

/// Extract the offset from a `translateY(...)` transform
pub fn parse_translate_y(value: &str) -> Option<f64> {
    let inner = value
        .trim()
        .strip_prefix("translateY(")?
        .strip_suffix(')')?;
    parse_px(inner)
}

/// Check whether a `<script>` type attribute denotes executable JavaScript
/// An empty type is executable, as are text/application javascript and ecmascript types
pub fn is_javascript_mime(script_type: &str) -> bool {
    let script_type = script_type.trim().to_ascii_lowercase();
    if script_type.is_empty() {
        return true;
    }

    let Some(subtype) = script_type
        .strip_prefix("text/")
        .or_else(|| script_type.strip_prefix("application/"))
    else {
        return false;
    };

    let subtype = subtype.strip_prefix("x-").unwrap_or(subtype);
    subtype.starts_with("javascript") || subtype.starts_with("ecmascript")
}

fn format_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}
