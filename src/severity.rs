//! Severity levels and their terminal colors.
//!
//! Severity selects an output color only; there is no threshold filtering.
//! The color table is fixed for the process lifetime and safe to read from
//! any thread.

use std::fmt;

/// Log importance level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Debug,
    Info,
    Warning,
    Error,
}

impl Severity {
    /// The color bound to this severity.
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            Self::Debug => Color::Green,
            Self::Info => Color::Blue,
            Self::Warning => Color::Yellow,
            Self::Error => Color::Red,
        }
    }

    /// Lowercase name used as the line's mode tag.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Terminal color with its fixed ANSI SGR code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Green,
    Blue,
    Yellow,
    Red,
}

/// Escape sequence that restores the default terminal style.
pub const RESET: &str = "\x1b[0m";

impl Color {
    /// Raw SGR code for this color.
    #[must_use]
    pub fn code(self) -> u8 {
        match self {
            Self::Green => 32,
            Self::Blue => 34,
            Self::Yellow => 33,
            Self::Red => 31,
        }
    }

    /// Wrap `text` in this color's escape sequence.
    #[must_use]
    pub fn paint(self, text: &str) -> String {
        paint_code(self.code(), text)
    }
}

/// Wrap `text` in the escape sequence for a raw SGR code.
#[must_use]
pub fn paint_code(code: u8, text: &str) -> String {
    format!("\x1b[{code}m{text}{RESET}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_color_mapping() {
        assert_eq!(Severity::Debug.color(), Color::Green);
        assert_eq!(Severity::Info.color(), Color::Blue);
        assert_eq!(Severity::Warning.color(), Color::Yellow);
        assert_eq!(Severity::Error.color(), Color::Red);
    }

    #[test]
    fn test_color_codes() {
        assert_eq!(Color::Green.code(), 32);
        assert_eq!(Color::Blue.code(), 34);
        assert_eq!(Color::Yellow.code(), 33);
        assert_eq!(Color::Red.code(), 31);
    }

    #[test]
    fn test_severity_display() {
        assert_eq!(Severity::Debug.to_string(), "debug");
        assert_eq!(Severity::Info.to_string(), "info");
        assert_eq!(Severity::Warning.to_string(), "warning");
        assert_eq!(Severity::Error.to_string(), "error");
    }

    #[test]
    fn test_paint_wraps_in_escape_sequence() {
        assert_eq!(Color::Green.paint("hello"), "\x1b[32mhello\x1b[0m");
        assert_eq!(Color::Red.paint("boom"), "\x1b[31mboom\x1b[0m");
    }

    #[test]
    fn test_paint_code_raw() {
        assert_eq!(paint_code(33, "careful"), "\x1b[33mcareful\x1b[0m");
    }

    #[test]
    fn test_paint_empty_text() {
        assert_eq!(Color::Blue.paint(""), "\x1b[34m\x1b[0m");
    }
}
