//! The [`Logger`] value object and its operations.

use std::sync::Arc;
use std::time::Instant;

use chrono::Local;
use serde::Serialize;
use serde_json::Value;

use crate::caller::{BacktraceResolver, CallerResolver};
use crate::error::PrettyPrintError;
use crate::mode::{BuildMode, CargoBuildMode};
use crate::severity::{Severity, paint_code};
use crate::sink::{ConsoleSink, Sink};

/// Line timestamp format: unpadded day, zero-padded month, hour, minute
/// and second, four digit year.
const TIMESTAMP_FORMAT: &str = "%-d-%m-%Y %H:%M:%S";

/// A named logging handle for one logical subsystem.
///
/// Holds its title plus handles to the three collaborators: the build-mode
/// oracle, the output sink, and the caller resolver. All operations are
/// stateless given those; a `Logger` can be shared freely across threads.
///
/// # Example
///
/// ```ignore
/// use devlog::{Logger, Severity};
///
/// let log = Logger::new("auth");
/// log.write("session opened", Severity::Info);
/// let token = log.log_execution_time("mint token", || mint_token());
/// ```
pub struct Logger {
    title: String,
    mode: Arc<dyn BuildMode>,
    sink: Arc<dyn Sink>,
    resolver: Arc<dyn CallerResolver>,
}

impl Logger {
    /// Create a logger with the production collaborators: cargo build
    /// mode, stderr sink, backtrace caller resolution.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            mode: Arc::new(CargoBuildMode),
            sink: Arc::new(ConsoleSink),
            resolver: Arc::new(BacktraceResolver),
        }
    }

    /// Replace the build-mode oracle.
    #[must_use]
    pub fn with_mode(mut self, mode: impl BuildMode + 'static) -> Self {
        self.mode = Arc::new(mode);
        self
    }

    /// Replace the output sink.
    #[must_use]
    pub fn with_sink(mut self, sink: impl Sink + 'static) -> Self {
        self.sink = Arc::new(sink);
        self
    }

    /// Replace the caller resolver.
    #[must_use]
    pub fn with_resolver(mut self, resolver: impl CallerResolver + 'static) -> Self {
        self.resolver = Arc::new(resolver);
        self
    }

    /// The title this logger was created with.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Format and emit `message` at `severity`.
    ///
    /// A no-op in release builds; the gate runs before any formatting
    /// work. The emitted line is
    /// `[timestamp] [mode] title::method -> message` wrapped in the
    /// severity's color.
    pub fn write(&self, message: &str, severity: Severity) {
        if self.mode.is_release() {
            return;
        }
        let line = self.compose(message, severity, &self.resolver.caller());
        self.sink.emit(&line, None);
    }

    /// Like [`Logger::write`], but routes the composed line through the
    /// JSON pretty path.
    ///
    /// The line is already colorized and prefixed by the time it reaches
    /// that path, so a non-JSON message lands on the
    /// `Failed to pretty print JSON:` fallback. Kept for parity with the
    /// plain path's formatting.
    pub fn write_pretty(&self, message: &str, severity: Severity) {
        if self.mode.is_release() {
            return;
        }
        let line = self.compose(message, severity, &self.resolver.caller());
        self.emit_pretty_json(pretty_parsed(&line));
    }

    /// Emit `title : message` wrapped in the given raw SGR color code.
    ///
    /// Debug builds only; no timestamp or caller context.
    /// [`crate::Color::Green`]'s code (32) is the conventional choice.
    pub fn log_with_color(&self, message: &str, color: u8) {
        if !self.mode.is_debug() {
            return;
        }
        let line = paint_code(color, &format!("{} : {message}", self.title));
        self.sink.emit(&line, None);
    }

    /// Pretty-print a JSON payload with 2-space indentation, tagged with
    /// this logger's title.
    ///
    /// Raw strings are parsed first; structured values serialize
    /// directly. Debug builds only. Failures become a
    /// `Failed to pretty print JSON:` line instead of an error.
    pub fn log_json(&self, payload: impl Into<JsonPayload>) {
        if !self.mode.is_debug() {
            return;
        }
        let rendered = match payload.into() {
            JsonPayload::Raw(raw) => pretty_parsed(&raw),
            JsonPayload::Structured(value) => pretty(&value),
        };
        self.emit_pretty_json(rendered);
    }

    /// Pretty-print a list of JSON values. Debug builds only.
    pub fn log_json_list(&self, list: &[Value]) {
        if !self.mode.is_debug() {
            return;
        }
        match pretty(list) {
            Ok(text) => self.sink.emit(&text, Some(&self.title)),
            Err(err) => self.sink.emit(
                &format!("Failed to pretty print JSON list: {err}"),
                Some(&self.title),
            ),
        }
    }

    /// Pretty-print any serializable list, optionally under a `[label]`
    /// heading. Debug builds only.
    pub fn log_pretty_list<T: Serialize>(&self, list: &[T], label: Option<&str>) {
        if !self.mode.is_debug() {
            return;
        }
        let prefix = label.map(|l| format!("[{l}]\n")).unwrap_or_default();
        match pretty(list) {
            Ok(text) => self.sink.emit(&format!("{prefix}{text}"), Some(&self.title)),
            Err(err) => self.sink.emit(
                &format!("Failed to pretty print list: {err}"),
                Some(&self.title),
            ),
        }
    }

    /// Run `op`, returning its result unchanged, and log how long it took
    /// at debug severity.
    ///
    /// `op` is invoked synchronously exactly once. If it panics, the
    /// panic propagates and no timing line is emitted.
    pub fn log_execution_time<T>(&self, label: &str, op: impl FnOnce() -> T) -> T {
        let start = Instant::now();
        let result = op();
        let elapsed = start.elapsed().as_millis();
        self.write(
            &format!("{label} executed in {elapsed} ms"),
            Severity::Debug,
        );
        result
    }

    /// The severity used as the line's mode tag.
    ///
    /// The mapping is not 1:1 on purpose: profile builds tag as `info`
    /// and release builds as `error`, with `warning` when no mode fact is
    /// set. The first true fact wins, so a misbehaving oracle reporting
    /// several facts still maps deterministically.
    #[must_use]
    pub fn app_mode(&self) -> Severity {
        if self.mode.is_debug() {
            Severity::Debug
        } else if self.mode.is_profile() {
            Severity::Info
        } else if self.mode.is_release() {
            Severity::Error
        } else {
            Severity::Warning
        }
    }

    fn compose(&self, message: &str, severity: Severity, method: &str) -> String {
        let timestamp = Local::now().format(TIMESTAMP_FORMAT);
        let mode = self.app_mode();
        severity.color().paint(&format!(
            "[{timestamp}] [{mode}] {}::{method} -> {message}",
            self.title
        ))
    }

    // Shared tail of `write_pretty` and `log_json`; gating belongs to the
    // public operations.
    fn emit_pretty_json(&self, rendered: Result<String, PrettyPrintError>) {
        match rendered {
            Ok(text) => self.sink.emit(&text, Some(&self.title)),
            Err(err) => self.sink.emit(
                &format!("Failed to pretty print JSON: {err}"),
                Some(&self.title),
            ),
        }
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger").field("title", &self.title).finish()
    }
}

/// Input accepted by [`Logger::log_json`]: raw text to be parsed first,
/// or an already structured value.
#[derive(Debug, Clone)]
pub enum JsonPayload {
    Raw(String),
    Structured(Value),
}

impl From<&str> for JsonPayload {
    fn from(raw: &str) -> Self {
        Self::Raw(raw.to_string())
    }
}

impl From<String> for JsonPayload {
    fn from(raw: String) -> Self {
        Self::Raw(raw)
    }
}

impl From<Value> for JsonPayload {
    fn from(value: Value) -> Self {
        Self::Structured(value)
    }
}

fn pretty_parsed(raw: &str) -> Result<String, PrettyPrintError> {
    let value: Value = serde_json::from_str(raw)?;
    pretty(&value)
}

fn pretty<T: Serialize + ?Sized>(value: &T) -> Result<String, PrettyPrintError> {
    Ok(serde_json::to_string_pretty(value)?)
}
