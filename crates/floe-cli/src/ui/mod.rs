//! Terminal UI utilities for formatted status output.
//!
//! Handles environment detection (CI, TTY) and degrades gracefully when
//! terminal features aren't available.

mod messages;

pub use messages::{error, info, success, warning};

/// Check if color output should be enabled.
///
/// Respects NO_COLOR and FORCE_COLOR environment variables, falls back
/// to terminal capability detection.
pub fn should_use_color() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    if std::env::var("FORCE_COLOR").is_ok() {
        return true;
    }

    // Status messages go to stderr
    console::user_attended_stderr()
}

/// Initialize color support based on environment.
///
/// Should be called early in the application lifecycle. `owo-colors`
/// respects NO_COLOR and terminal capabilities on its own; this hook
/// exists for explicit initialization and future extensibility.
pub fn init_colors() {
    let _ = should_use_color();
}
