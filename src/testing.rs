//! Deterministic collaborator substitutes for tests.
//!
//! These replace the three production collaborators so tests can pin the
//! build mode, capture emitted lines, and fix the resolved caller name.

use std::sync::{Arc, Mutex};

use crate::caller::CallerResolver;
use crate::mode::BuildMode;
use crate::sink::Sink;

/// A sink that records every emitted line for assertion.
///
/// Clones share the same buffer, so a test can hand one clone to a
/// [`crate::Logger`] and keep another for inspection.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    lines: Arc<Mutex<Vec<(String, Option<String>)>>>,
}

impl MemorySink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All `(text, name)` pairs emitted so far.
    #[must_use]
    pub fn lines(&self) -> Vec<(String, Option<String>)> {
        self.lines.lock().map(|l| l.clone()).unwrap_or_default()
    }

    /// Emitted texts only, tags dropped.
    #[must_use]
    pub fn texts(&self) -> Vec<String> {
        self.lines()
            .into_iter()
            .map(|(text, _)| text)
            .collect()
    }

    /// Whether any emitted text contains `needle`.
    #[must_use]
    pub fn contains(&self, needle: &str) -> bool {
        self.texts().iter().any(|t| t.contains(needle))
    }
}

impl Sink for MemorySink {
    fn emit(&self, text: &str, name: Option<&str>) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.push((text.to_string(), name.map(String::from)));
        }
    }
}

/// A build-mode oracle pinned to fixed facts.
///
/// The fields are public so tests can also construct contradictory
/// combinations (several facts true, or none).
#[derive(Debug, Clone, Copy)]
pub struct FixedMode {
    pub debug: bool,
    pub profile: bool,
    pub release: bool,
}

impl FixedMode {
    #[must_use]
    pub fn new_debug() -> Self {
        Self {
            debug: true,
            profile: false,
            release: false,
        }
    }

    #[must_use]
    pub fn new_profile() -> Self {
        Self {
            debug: false,
            profile: true,
            release: false,
        }
    }

    #[must_use]
    pub fn new_release() -> Self {
        Self {
            debug: false,
            profile: false,
            release: true,
        }
    }

    /// No fact set; exercises the warning fallback.
    #[must_use]
    pub fn new_unset() -> Self {
        Self {
            debug: false,
            profile: false,
            release: false,
        }
    }
}

impl BuildMode for FixedMode {
    fn is_debug(&self) -> bool {
        self.debug
    }

    fn is_profile(&self) -> bool {
        self.profile
    }

    fn is_release(&self) -> bool {
        self.release
    }
}

/// A resolver that always reports the same caller name.
#[derive(Debug, Clone, Copy)]
pub struct FixedCaller(pub &'static str);

impl CallerResolver for FixedCaller {
    fn caller(&self) -> String {
        self.0.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_sink_records_lines() {
        let sink = MemorySink::new();
        sink.emit("one", None);
        sink.emit("two", Some("tag"));

        assert_eq!(
            sink.lines(),
            vec![
                ("one".to_string(), None),
                ("two".to_string(), Some("tag".to_string())),
            ]
        );
        assert_eq!(sink.texts(), vec!["one", "two"]);
        assert!(sink.contains("wo"));
        assert!(!sink.contains("three"));
    }

    #[test]
    fn test_memory_sink_clones_share_buffer() {
        let sink = MemorySink::new();
        let clone = sink.clone();
        clone.emit("shared", None);
        assert!(sink.contains("shared"));
    }

    #[test]
    fn test_fixed_mode_constructors() {
        assert!(FixedMode::new_debug().is_debug());
        assert!(FixedMode::new_profile().is_profile());
        assert!(FixedMode::new_release().is_release());

        let unset = FixedMode::new_unset();
        assert!(!unset.is_debug() && !unset.is_profile() && !unset.is_release());
    }

    #[test]
    fn test_fixed_caller() {
        assert_eq!(FixedCaller("handler").caller(), "handler");
    }
}
