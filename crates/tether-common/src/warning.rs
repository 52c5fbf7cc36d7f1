//! Diagnostic warnings with colored terminal output.
//!
//! Provides deduplication so a layout that is measured every frame does not
//! spam the same warning. Used by the positioning engine to report
//! measurements that degenerate to zero rectangles.

use std::collections::HashSet;
use std::sync::Mutex;

use owo_colors::OwoColorize;

/// Global set of warnings we've already printed (to deduplicate)
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

/// Warn about a suspicious measurement (prints once per unique message).
///
/// # Example
/// ```ignore
/// warn_once("Position", "measured detached element NodeId(7)");
/// ```
pub fn warn_once(component: &str, message: &str) {
    if record(component, message) {
        eprintln!("{}", format!("[Tether {component}] ⚠ {message}").yellow());
    }
}

/// Remember a warning; returns `false` if it was already recorded.
///
/// A poisoned lock is recovered, since the set only ever holds strings.
fn record(component: &str, message: &str) -> bool {
    let mut warned = WARNED
        .lock()
        .unwrap_or_else(std::sync::PoisonError::into_inner);
    warned
        .get_or_insert_with(HashSet::new)
        .insert(format!("[{component}] {message}"))
}

/// Clear all recorded warnings (call when loading a new scene).
pub fn clear_warnings() {
    let mut guard = WARNED
        .lock()
        .unwrap_or_else(std::sync::PoisonError::into_inner);
    if let Some(set) = guard.as_mut() {
        set.clear();
    }
}
