use crate::sink::LogSink;
use std::error::Error;
use std::io::{self, Write};

/// Default sink: one line per record on standard output.
///
/// The stdout lock is held for the whole line, so records written from
/// several threads never interleave.
#[derive(Clone, Copy, Debug, Default)]
pub struct StdoutSink;

impl LogSink for StdoutSink {
    fn write_line(&self, line: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
        let mut out = io::stdout().lock();
        writeln!(out, "{line}")?;
        Ok(())
    }
}
