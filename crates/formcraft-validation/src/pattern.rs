// File: formcraft-validation/src/pattern.rs
// Purpose: User-supplied regex patterns, compiled once and cached

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;
use std::sync::Mutex;

// Patterns that failed to compile are cached as `None`
static PATTERN_CACHE: Lazy<Mutex<HashMap<String, Option<Regex>>>> =
    Lazy::new(|| Mutex::new(HashMap::new()));

fn compile(pattern: &str) -> Option<Regex> {
    match Regex::new(pattern) {
        Ok(regex) => Some(regex),
        Err(e) => {
            tracing::warn!("Ignoring invalid validation pattern {:?}: {}", pattern, e);
            None
        }
    }
}

/// Check if `value` contains a match for `pattern`.
///
/// The search is unanchored; patterns wanting a full match spell out `^...$`.
/// Patterns use `regex` syntax, which has no lookaround or backreferences.
/// A pattern that does not compile never matches.
pub fn matches_pattern(value: &str, pattern: &str) -> bool {
    let mut cache = match PATTERN_CACHE.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    };

    cache
        .entry(pattern.to_string())
        .or_insert_with(|| compile(pattern))
        .as_ref()
        .map(|regex| regex.is_match(value))
        .unwrap_or(false)
}
