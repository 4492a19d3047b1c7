use crate::severity::Severity;
use crate::sink::LogSink;
use serde::Deserialize;
use std::error::Error;
use tracing::Level;

/// `tracing` target used for forwarded records.
pub const TRACING_TARGET: &str = "twiglet::record";

/// Sink that forwards each line as a `tracing` event, so records can be
/// routed through an existing subscriber stack.
///
/// The event level follows the record's `log.level` (critical maps to
/// `ERROR`); the line itself is attached as the `record` field.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

#[derive(Deserialize)]
struct RecordLevel {
    log: LevelField,
}

#[derive(Deserialize)]
struct LevelField {
    level: Severity,
}

fn severity_of(line: &str) -> Severity {
    serde_json::from_str::<RecordLevel>(line)
        .map(|record| record.log.level)
        .unwrap_or(Severity::Info)
}

impl LogSink for TracingSink {
    fn write_line(&self, line: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
        // `event!` needs a level known at compile time.
        let level = severity_of(line).tracing_level();
        if level == Level::ERROR {
            tracing::error!(target: TRACING_TARGET, record = %line);
        } else if level == Level::WARN {
            tracing::warn!(target: TRACING_TARGET, record = %line);
        } else if level == Level::INFO {
            tracing::info!(target: TRACING_TARGET, record = %line);
        } else {
            tracing::debug!(target: TRACING_TARGET, record = %line);
        }
        Ok(())
    }
}
