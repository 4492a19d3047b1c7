use crate::clock::Clock;
use crate::error::{json_type_name, LoggerError, Result};
use crate::error_info::ErrorInfo;
use crate::init::LoggerConfig;
use crate::merge::{merge_maps, nest_dotted_map};
use crate::message::Message;
use crate::record::LogRecord;
use crate::severity::Severity;
use crate::sink::LogSink;
use serde_json::{Map, Value};
use std::error::Error;
use std::fmt;
use std::sync::Arc;

/// An immutable, scoped ECS logger.
///
/// A root logger is created once from a [`LoggerConfig`]; [`Logger::with`]
/// derives children carrying extra context. Derivation never touches the
/// receiver, so siblings created from the same parent never see each
/// other's fields. Clock and sink are shared with every descendant.
///
/// Each log call assembles one record, lowest precedence first:
/// 1. the envelope (`ecs.version`, `log.level`, `@timestamp`,
///    `service.name`);
/// 2. this logger's scope;
/// 3. error enrichment, if any;
/// 4. the call payload.
///
/// The record is then serialized to one line and handed to the sink.
/// Invalid input fails the call before anything is written.
#[derive(Clone)]
pub struct Logger {
    service_name: Arc<str>,
    scope: Arc<Map<String, Value>>,
    clock: Arc<dyn Clock>,
    sink: Arc<dyn LogSink>,
    nest_dotted_keys: bool,
}

impl Logger {
    /// Build a root logger.
    ///
    /// Fails with [`LoggerError::Configuration`] when the service name is
    /// blank or the default properties are not a JSON object.
    pub fn new(config: LoggerConfig) -> Result<Self> {
        if config.service_name.trim().is_empty() {
            return Err(LoggerError::Configuration(
                "configuration must have a service name".to_string(),
            ));
        }
        let properties = match config.default_properties {
            Value::Object(properties) => properties,
            other => {
                return Err(LoggerError::Configuration(format!(
                    "default properties must be a JSON object, got {}",
                    json_type_name(&other)
                )))
            }
        };

        let scope = if config.nest_dotted_keys {
            nest_dotted_map(&properties)
        } else {
            properties
        };

        tracing::debug!(service = %config.service_name, "created root logger");

        Ok(Self {
            service_name: Arc::from(config.service_name),
            scope: Arc::new(scope),
            clock: config.clock,
            sink: config.sink,
            nest_dotted_keys: config.nest_dotted_keys,
        })
    }

    /// Derive a logger whose scope is this logger's scope deep-merged
    /// with `more`.
    ///
    /// `more` must be a JSON object, otherwise
    /// [`LoggerError::InvalidContext`] is returned.
    pub fn with(&self, more: Value) -> Result<Self> {
        let more = match more {
            Value::Object(more) => more,
            other => return Err(LoggerError::InvalidContext(json_type_name(&other))),
        };
        Ok(self.with_fields(&more))
    }

    /// Infallible form of [`Logger::with`] for callers that already hold
    /// an object.
    pub fn with_fields(&self, more: &Map<String, Value>) -> Self {
        let scope = if self.nest_dotted_keys {
            merge_maps(&self.scope, &nest_dotted_map(more))
        } else {
            merge_maps(&self.scope, more)
        };

        tracing::trace!(service = %self.service_name, keys = more.len(), "derived scoped logger");

        Self {
            service_name: Arc::clone(&self.service_name),
            scope: Arc::new(scope),
            clock: Arc::clone(&self.clock),
            sink: Arc::clone(&self.sink),
            nest_dotted_keys: self.nest_dotted_keys,
        }
    }

    pub fn service_name(&self) -> &str {
        &self.service_name
    }

    /// Context merged into every record from this logger.
    pub fn scope(&self) -> &Map<String, Value> {
        &self.scope
    }

    /// Assemble a record without writing it.
    ///
    /// Runs the same validation as [`Logger::log`] and reads the clock
    /// once.
    pub fn build_record(
        &self,
        severity: Severity,
        message: impl Into<Message>,
        error: Option<&ErrorInfo>,
    ) -> Result<LogRecord> {
        let message = message.into();
        let message = if self.nest_dotted_keys {
            message.nested()
        } else {
            message
        };
        let payload = message.into_payload()?;

        let mut record = LogRecord::envelope(severity, self.clock.now(), &self.service_name);
        record.merge_layer(&self.scope);
        if let Some(error) = error {
            record.merge_layer(&error.to_layer()?);
        }
        record.merge_layer(&payload);
        Ok(record)
    }

    /// Assemble a record and write it to the sink.
    pub fn log(
        &self,
        severity: Severity,
        message: impl Into<Message>,
        error: Option<&ErrorInfo>,
    ) -> Result<()> {
        let record = self.build_record(severity, message, error)?;
        let line = record.to_line()?;

        tracing::trace!(service = %self.service_name, level = %severity, "emitting record");

        self.sink.write_line(&line).map_err(|e| {
            tracing::warn!(service = %self.service_name, error = %e, "log sink write failed");
            LoggerError::Sink(e)
        })
    }

    /// Log with error enrichment built from `err`.
    pub fn log_with_error<E: Error + 'static>(
        &self,
        severity: Severity,
        message: impl Into<Message>,
        err: &E,
    ) -> Result<()> {
        let info = ErrorInfo::from_error(err);
        self.log(severity, message, Some(&info))
    }

    pub fn debug(&self, message: impl Into<Message>) -> Result<()> {
        self.log(Severity::Debug, message, None)
    }

    pub fn info(&self, message: impl Into<Message>) -> Result<()> {
        self.log(Severity::Info, message, None)
    }

    pub fn warning(&self, message: impl Into<Message>) -> Result<()> {
        self.log(Severity::Warning, message, None)
    }

    /// Alias of [`Logger::warning`].
    pub fn warn(&self, message: impl Into<Message>) -> Result<()> {
        self.warning(message)
    }

    pub fn error(&self, message: impl Into<Message>) -> Result<()> {
        self.log(Severity::Error, message, None)
    }

    /// Error-level record enriched with `err`.
    pub fn error_with<E: Error + 'static>(&self, message: impl Into<Message>, err: &E) -> Result<()> {
        self.log_with_error(Severity::Error, message, err)
    }

    pub fn critical(&self, message: impl Into<Message>) -> Result<()> {
        self.log(Severity::Critical, message, None)
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("service_name", &self.service_name)
            .field("scope", &self.scope)
            .field("nest_dotted_keys", &self.nest_dotted_keys)
            .finish_non_exhaustive()
    }
}
