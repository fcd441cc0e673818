//! Diagnostic report trait

/// Side channel for human-readable status lines
///
/// The sensor poller emits temperature readings and connection
/// failures here. The stream is fire-and-forget; implementations must
/// not block indefinitely and must not fail loudly.
pub trait ReportSink {
    /// Emit one line of diagnostic text
    fn report(&mut self, line: &str);
}
