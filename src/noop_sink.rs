use crate::sink::LogSink;
use std::error::Error;

/// A sink that simply drops all lines.
///
/// Useful for measuring the cost of record assembly without any I/O.
#[derive(Clone, Default)]
pub struct NoopSink;

impl LogSink for NoopSink {
    fn write_line(&self, _line: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
        Ok(())
    }
}
