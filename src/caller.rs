//! Best-effort caller-name detection.
//!
//! Walks the live call stack to find the method that invoked the logger.
//! Frame text is platform and runtime dependent, so everything here is
//! best-effort: shallow stacks, unparseable frames, and stripped symbols
//! all resolve to [`UNKNOWN_CALLER`] rather than failing.

use std::backtrace::Backtrace;
use std::sync::OnceLock;

use regex::Regex;

/// Sentinel reported when the calling method cannot be determined.
pub const UNKNOWN_CALLER: &str = "unknown";

/// Matched frames to step over between the capture point and the frame
/// the caller name should come from: the resolver itself and the logger
/// operation that invoked it.
const SKIPPED_FRAMES: usize = 2;

/// Resolves the name of the method that invoked the logger.
pub trait CallerResolver: Send + Sync {
    fn caller(&self) -> String;
}

/// Default resolver backed by `std::backtrace`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BacktraceResolver;

impl CallerResolver for BacktraceResolver {
    fn caller(&self) -> String {
        caller_from_text(&Backtrace::force_capture().to_string())
    }
}

/// A numbered frame marker, whitespace, then the symbol captured up to an
/// opening parenthesis or end of line. `at file:line` continuation lines
/// do not match.
fn frame_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(r"(?m)^\s*\d+:\s+([^(\n]+)").ok())
        .as_ref()
}

/// Extract the caller symbol from rendered backtrace text.
///
/// Capture-machinery frames are discarded, then [`SKIPPED_FRAMES`] more
/// are stepped over to land on the logger's caller.
pub(crate) fn caller_from_text(text: &str) -> String {
    let Some(pattern) = frame_pattern() else {
        return UNKNOWN_CALLER.to_string();
    };
    pattern
        .captures_iter(text)
        .filter_map(|captures| captures.get(1))
        .map(|m| m.as_str().trim())
        .filter(|symbol| !is_capture_machinery(symbol))
        .nth(SKIPPED_FRAMES)
        .map(short_name)
        .unwrap_or_else(|| UNKNOWN_CALLER.to_string())
}

fn is_capture_machinery(symbol: &str) -> bool {
    symbol.starts_with("std::backtrace") || symbol.starts_with("backtrace")
}

/// Trim a fully qualified symbol to its final path segment, dropping the
/// monomorphization hash rustc appends in some build configurations.
fn short_name(symbol: &str) -> String {
    let mut segments: Vec<&str> = symbol.split("::").collect();
    if segments.last().is_some_and(|s| is_symbol_hash(s)) {
        segments.pop();
    }
    segments
        .last()
        .map_or_else(|| UNKNOWN_CALLER.to_string(), |s| (*s).to_string())
}

fn is_symbol_hash(segment: &str) -> bool {
    segment.len() == 17
        && segment.starts_with('h')
        && segment[1..].chars().all(|c| c.is_ascii_hexdigit())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
   0: std::backtrace::Backtrace::force_capture
   1: <devlog::caller::BacktraceResolver as devlog::caller::CallerResolver>::caller
   2: devlog::logger::Logger::write
             at ./src/logger.rs:80:9
   3: myapp::handlers::login::h0123456789abcdef
             at ./src/handlers.rs:14:5
   4: std::rt::lang_start
";

    #[test]
    fn test_caller_from_sample_trace() {
        assert_eq!(caller_from_text(SAMPLE), "login");
    }

    #[test]
    fn test_shallow_stack_resolves_to_unknown() {
        let shallow = "   0: resolver::caller\n   1: logger::write\n";
        assert_eq!(caller_from_text(shallow), UNKNOWN_CALLER);
    }

    #[test]
    fn test_empty_text_resolves_to_unknown() {
        assert_eq!(caller_from_text(""), UNKNOWN_CALLER);
    }

    #[test]
    fn test_non_frame_text_resolves_to_unknown() {
        assert_eq!(caller_from_text("not a backtrace at all"), UNKNOWN_CALLER);
    }

    #[test]
    fn test_symbol_without_hash_kept_whole() {
        let trace = "\
   0: a::caller
   1: b::write
   2: myapp::startup
";
        assert_eq!(caller_from_text(trace), "startup");
    }

    #[test]
    fn test_hash_only_suffix_is_stripped() {
        assert_eq!(short_name("m::f::h0000000000000000"), "f");
        // A segment that merely looks hash-like but has the wrong length stays.
        assert_eq!(short_name("m::habc"), "habc");
    }

    #[test]
    fn test_backtrace_resolver_always_returns_a_name() {
        let name = BacktraceResolver.caller();
        assert!(!name.is_empty());
    }

    #[test]
    fn test_capture_machinery_is_filtered() {
        assert!(is_capture_machinery("std::backtrace::Backtrace::create"));
        assert!(is_capture_machinery("backtrace::backtrace::trace"));
        assert!(!is_capture_machinery("myapp::backtrack"));
    }
}
