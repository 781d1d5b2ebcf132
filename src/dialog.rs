//! Native Dialogs
//!
//! Blocking browser dialogs for failure alerts and destructive confirms.

/// Alert naming the failed action, e.g. "Failed to load data"
pub fn alert(message: &str) {
    if let Some(win) = web_sys::window() {
        let _ = win.alert_with_message(message);
    }
}

/// Confirmation dialog; false when dismissed
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|win| win.confirm_with_message(message).ok())
        .unwrap_or(false)
}
