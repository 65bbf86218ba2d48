// Utilities module
// CSS value helpers and logging setup

pub mod css;
pub mod logging;

pub use css::{format_px, is_javascript_mime, parse_px, parse_translate_y, parse_whole_px, translate_y};
pub use logging::{init_file_logging, init_stderr_logging};
