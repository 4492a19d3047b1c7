use std::error::Error;

/// Destination for serialized log lines.
///
/// Implementations receive one compact JSON object per call, without
/// trailing newline, and decide how lines are delimited (stdout, a file,
/// an in-memory buffer, a `tracing` subscriber, etc).
pub trait LogSink: Send + Sync {
    /// Write a single line.
    ///
    /// **Parameters**
    /// - `line`: the fully serialized record.
    ///
    /// **Returns**
    /// - `Ok(())` once the line was handed to the underlying writer.
    /// - `Err(..)` if the writer failed. The logger returns this to the
    ///   caller as [`LoggerError::Sink`](crate::error::LoggerError::Sink)
    ///   and does not retry.
    ///
    /// Called synchronously on the logging thread, once per successful
    /// log call. Implementations should not block for long.
    fn write_line(&self, line: &str) -> Result<(), Box<dyn Error + Send + Sync>>;
}
