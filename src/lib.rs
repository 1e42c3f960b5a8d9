#![forbid(unsafe_code)]
//! Severity-colored developer logging with caller context, pretty JSON
//! output, and execution timing.
//!
//! The crate is one thin formatting/dispatch component: a [`Logger`]
//! holds a subsystem title and renders messages into timestamped,
//! color-coded lines, pretty-prints structured data, and measures how
//! long closures take. Output is suppressed entirely in release builds.
//!
//! Three collaborators sit behind traits so tests can substitute them:
//! the build-mode oracle ([`BuildMode`]), the output sink ([`Sink`]),
//! and the caller-name resolver ([`CallerResolver`]). The production
//! defaults consult the cargo build configuration, write to stderr, and
//! inspect the live call stack.
//!
//! # Example
//!
//! ```ignore
//! use devlog::{Logger, Severity};
//!
//! let log = Logger::new("auth");
//! log.write("session opened", Severity::Info);
//! log.log_json(r#"{"id": 1, "name": "John", "role": "admin"}"#);
//! let users = log.log_execution_time("load users", || load_users());
//! ```

pub mod caller;
pub mod error;
pub mod logger;
pub mod mode;
pub mod severity;
pub mod sink;
pub mod testing;

pub use caller::{BacktraceResolver, CallerResolver, UNKNOWN_CALLER};
pub use error::PrettyPrintError;
pub use logger::{JsonPayload, Logger};
pub use mode::{BuildMode, CargoBuildMode};
pub use severity::{Color, Severity};
pub use sink::{ConsoleSink, Sink};
