use std::error::Error;

/// Errors returned by [`Logger`](crate::logger::Logger) construction,
/// scoping and log calls.
///
/// Every variant is returned synchronously to the caller. A call that
/// fails never writes a partial record to the sink.
#[derive(thiserror::Error, Debug)]
pub enum LoggerError {
    /// Invalid constructor arguments, e.g. an empty service name.
    #[error("invalid logger configuration: {0}")]
    Configuration(String),

    /// The log message is empty or whitespace only.
    #[error("validation failed: {0}")]
    Validation(String),

    /// The message is neither a string nor an object with a string
    /// `message` field.
    #[error("invalid log message: {0}")]
    InvalidMessage(String),

    /// Context passed to `with` is not a JSON object.
    #[error("scope context must be a JSON object, got {0}")]
    InvalidContext(&'static str),

    #[error("failed to serialize log record")]
    Serialize(#[from] serde_json::Error),

    /// The sink refused the line.
    #[error("log sink write failed")]
    Sink(#[source] Box<dyn Error + Send + Sync>),
}

pub type Result<T> = std::result::Result<T, LoggerError>;

/// Short name of a JSON value's type, used in error messages.
pub(crate) fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
