// Error Types
// Validation errors for sticky options and page configuration

/// Error type for configuration parsing and validation
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A length option was not an integer, a float or a `<n>px` string
    #[error("invalid pixel value for '{field}': {value}")]
    InvalidPixels { field: String, value: String },

    /// A width threshold below zero
    #[error("'{field}' must be a non-negative integer, got {value}")]
    NegativeWidth { field: String, value: i64 },

    /// Namespace empty or containing characters unusable in an element id
    #[error("invalid namespace '{0}': use letters, digits, '-' or '_'")]
    InvalidNamespace(String),

    /// Unknown `sidebar_behavior`
    #[error("unknown sidebar behavior '{0}' (expected modern, stick-to-top or stick-to-bottom)")]
    UnknownBehavior(String),

    /// Unknown `default_position`
    #[error("unknown position '{0}' (expected static, relative, absolute or fixed)")]
    UnknownPosition(String),

    /// Selector that cannot match anything
    #[error("empty selector for binding #{0}")]
    EmptySelector(usize),

    /// Page geometry that cannot be laid out
    #[error("invalid page geometry at '{field}': {message}")]
    InvalidGeometry { field: String, message: String },
}

impl ConfigError {
    pub fn invalid_pixels(field: impl Into<String>, value: impl ToString) -> Self {
        Self::InvalidPixels {
            field: field.into(),
            value: value.to_string(),
        }
    }

    pub fn geometry(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidGeometry {
            field: field.into(),
            message: message.into(),
        }
    }
}
