use crate::sink::LogSink;
use std::error::Error;
use std::io::Write;
use std::sync::{Mutex, PoisonError};

/// Sink over any [`Write`] implementation (a file, stderr, a socket).
///
/// Each line is written and flushed while holding an internal mutex.
pub struct WriterSink<W> {
    writer: Mutex<W>,
}

impl<W: Write + Send> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    /// Recover the wrapped writer.
    pub fn into_inner(self) -> W {
        self.writer.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<W: Write + Send> LogSink for WriterSink<W> {
    fn write_line(&self, line: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
        let mut writer = self
            .writer
            .lock()
            .map_err(|_| "log writer mutex poisoned")?;
        writer.write_all(line.as_bytes())?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn lines_are_newline_terminated() {
        let sink = WriterSink::new(Vec::new());
        sink.write_line(r#"{"a":1}"#).unwrap();
        sink.write_line(r#"{"b":2}"#).unwrap();
        assert_eq!(String::from_utf8(sink.into_inner()).unwrap(), "{\"a\":1}\n{\"b\":2}\n");
    }

    #[test]
    fn writer_errors_are_reported() {
        let sink = WriterSink::new(BrokenPipe);
        let err = sink.write_line("{}").unwrap_err();
        assert!(err.to_string().contains("pipe closed"));
    }
}
