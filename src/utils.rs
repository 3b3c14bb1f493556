//! Shared helpers for stderr message prefixes.

use owo_colors::OwoColorize;

fn colors_enabled() -> bool {
    std::env::var_os("NO_COLOR").is_none()
}

/// Prefix for fatal error lines on stderr.
pub fn error_prefix() -> String {
    if colors_enabled() {
        "✖ error:".red().bold().to_string()
    } else {
        "✖ error:".to_string()
    }
}

/// Prefix for informational notes on stderr.
pub fn note_prefix() -> String {
    if colors_enabled() {
        "◆ note:".blue().bold().to_string()
    } else {
        "◆ note:".to_string()
    }
}
