//! Application constants
//!
//! Centralized location for magic strings and configuration defaults.

/// Application name
pub const APP_NAME: &str = "AppState TUI";

/// Application version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Log file written next to the working directory
pub const LOG_FILE: &str = "appstate.log";

/// How long the UI loop waits for a key before checking for new frames
pub const POLL_INTERVAL_MS: u64 = 50;

/// Value every freshly mounted provider starts from
pub const INITIAL_COUNT: i64 = 0;

/// Key binding reference shown in the help popup
pub const HELP_LINES: &[&str] = &[
    "",
    " COUNTER",
    "   + / k / Up      Increment",
    "   - / j / Down    Decrement",
    "   0-9             Set the count",
    "   =               Assign the current value again",
    "",
    " PROVIDER",
    "   r               Remount (fresh instance, count 0)",
    "",
    " GENERAL",
    "   ?               Toggle this help",
    "   q / Ctrl+C      Quit",
    "",
    " Press any key to close...",
];
