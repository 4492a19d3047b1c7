use crate::sink::LogSink;
use serde_json::Value;
use std::error::Error;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Sink that keeps every line in memory.
///
/// Clones share the same buffer, so a test can hand one clone to the
/// logger and inspect the other.
#[derive(Clone, Debug, Default)]
pub struct MemorySink {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    fn buffer(&self) -> MutexGuard<'_, Vec<String>> {
        self.lines.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn lines(&self) -> Vec<String> {
        self.buffer().clone()
    }

    /// Captured lines parsed back into JSON. Lines that fail to parse are
    /// skipped.
    pub fn records(&self) -> Vec<Value> {
        self.buffer()
            .iter()
            .filter_map(|line| serde_json::from_str(line).ok())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.buffer().len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer().is_empty()
    }

    pub fn clear(&self) {
        self.buffer().clear();
    }
}

impl LogSink for MemorySink {
    fn write_line(&self, line: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.buffer().push(line.to_string());
        Ok(())
    }
}
