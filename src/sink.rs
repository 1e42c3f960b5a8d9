//! Output sink seam.

/// Receives formatted lines and performs the actual output.
///
/// Nothing upstream assumes anything about the sink's buffering, ordering
/// across processes, or delivery guarantees; emission is fire-and-forget.
pub trait Sink: Send + Sync {
    /// Emit one line of text, optionally tagged with a source name.
    fn emit(&self, text: &str, name: Option<&str>);
}

/// Default sink: writes to stderr, the conventional diagnostics stream.
///
/// A name tag renders as a `[name]` prefix on the line.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSink;

impl Sink for ConsoleSink {
    fn emit(&self, text: &str, name: Option<&str>) {
        match name {
            Some(tag) => eprintln!("[{tag}] {text}"),
            None => eprintln!("{text}"),
        }
    }
}
