use crate::error::{json_type_name, LoggerError, Result};
use crate::merge::nest_dotted_map;
use serde_json::{Map, Value};

/// The human-facing part of a log call.
///
/// Every variant is validated by [`Message::into_payload`] before the
/// record is assembled:
/// - `Text` must be non-empty after trimming.
/// - `Structured` must carry a `message` key holding a non-blank string.
/// - `Json` is untyped input and is routed to one of the above, or
///   rejected when it is neither a string nor an object.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    Text(String),
    Structured(Map<String, Value>),
    Json(Value),
}

impl Message {
    /// Expand dotted keys of object input. Must run before validation so
    /// a key like `"message.detail"` cannot replace the message string.
    pub(crate) fn nested(self) -> Self {
        match self {
            Message::Structured(fields) | Message::Json(Value::Object(fields)) => {
                Message::Structured(nest_dotted_map(&fields))
            }
            other => other,
        }
    }

    /// Validate and normalize into the payload object merged last into
    /// the record.
    pub fn into_payload(self) -> Result<Map<String, Value>> {
        match self {
            Message::Text(text) => {
                ensure_not_blank(&text, "there must be a non-empty message")?;
                let mut payload = Map::new();
                payload.insert("message".to_string(), Value::String(text));
                Ok(payload)
            }
            Message::Structured(fields) => {
                match fields.get("message") {
                    Some(Value::String(text)) => ensure_not_blank(
                        text,
                        "the message property of a log object must not be empty",
                    )?,
                    Some(other) => {
                        return Err(LoggerError::InvalidMessage(format!(
                            "the message property must be a string, got {}",
                            json_type_name(other)
                        )))
                    }
                    None => {
                        return Err(LoggerError::InvalidMessage(
                            "log object must have a message property".to_string(),
                        ))
                    }
                }
                Ok(fields)
            }
            Message::Json(Value::String(text)) => Message::Text(text).into_payload(),
            Message::Json(Value::Object(fields)) => Message::Structured(fields).into_payload(),
            Message::Json(other) => Err(LoggerError::InvalidMessage(format!(
                "message must be either an object or a string, got {}",
                json_type_name(&other)
            ))),
        }
    }
}

fn ensure_not_blank(text: &str, reason: &str) -> Result<()> {
    if text.trim().is_empty() {
        return Err(LoggerError::Validation(reason.to_string()));
    }
    Ok(())
}

impl From<&str> for Message {
    fn from(text: &str) -> Self {
        Message::Text(text.to_string())
    }
}

impl From<String> for Message {
    fn from(text: String) -> Self {
        Message::Text(text)
    }
}

impl From<Map<String, Value>> for Message {
    fn from(fields: Map<String, Value>) -> Self {
        Message::Structured(fields)
    }
}

impl From<Value> for Message {
    fn from(value: Value) -> Self {
        Message::Json(value)
    }
}
