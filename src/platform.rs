//! Platform-specific key hints

/// Submit shortcut display for form help text.
/// Ctrl+S works on all platforms.
pub const SUBMIT_SHORTCUT: &str = "Ctrl+S";

/// Quit shortcut display
pub const QUIT_SHORTCUT: &str = "Ctrl+C";

/// Symbol shown before the focused element
#[cfg(target_os = "windows")]
pub const FOCUS_MARKER: &str = ">";

#[cfg(not(target_os = "windows"))]
pub const FOCUS_MARKER: &str = "▸";
