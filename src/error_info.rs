use serde::Serialize;
use serde_json::{Map, Value};
use std::any::type_name;
use std::backtrace::{Backtrace, BacktraceStatus};
use std::error::Error;

/// Error enrichment written under the `error` key of a record.
///
/// `stack_trace` is never empty: its first line is always
/// `"<type>: <message>"`, followed by one `caused by:` line per error
/// source and, when backtraces are enabled through `RUST_BACKTRACE` or
/// `RUST_LIB_BACKTRACE`, the frames captured at the log call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorInfo {
    pub message: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub stack_trace: Vec<String>,
}

impl ErrorInfo {
    /// Build enrichment from explicit parts, e.g. for errors coming from
    /// another process. An empty `stack_trace` gets the header line.
    pub fn new(kind: impl Into<String>, message: impl Into<String>, stack_trace: Vec<String>) -> Self {
        let kind = kind.into();
        let message = message.into();
        let stack_trace = if stack_trace.is_empty() {
            vec![header(&kind, &message)]
        } else {
            stack_trace
        };
        Self { message, kind, stack_trace }
    }

    /// Build enrichment from a concrete error type. `error.type` is the
    /// Rust type name of `E`.
    pub fn from_error<E: Error + 'static>(err: &E) -> Self {
        Self::from_dyn(type_name::<E>(), err)
    }

    /// Same as [`ErrorInfo::from_error`] for trait objects, where the
    /// concrete type is unknown and the caller names the kind.
    pub fn from_dyn(kind: &str, err: &(dyn Error + 'static)) -> Self {
        let message = err.to_string();
        let mut stack_trace = vec![header(kind, &message)];

        let mut source = err.source();
        while let Some(cause) = source {
            stack_trace.push(format!("caused by: {cause}"));
            source = cause.source();
        }

        let backtrace = Backtrace::capture();
        if backtrace.status() == BacktraceStatus::Captured {
            stack_trace.extend(backtrace.to_string().lines().map(str::to_string));
        }

        Self {
            message,
            kind: kind.to_string(),
            stack_trace,
        }
    }

    /// The `{"error": {...}}` layer merged into the record.
    pub(crate) fn to_layer(&self) -> serde_json::Result<Map<String, Value>> {
        let mut layer = Map::new();
        layer.insert("error".to_string(), serde_json::to_value(self)?);
        Ok(layer)
    }
}

fn header(kind: &str, message: &str) -> String {
    format!("{kind}: {message}")
}
