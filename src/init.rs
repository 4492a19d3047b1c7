use crate::clock::{Clock, SystemClock};
use crate::env::{env_flag, env_or, TWIGLET_NEST_DOTTED_KEYS_ENV, TWIGLET_SERVICE_NAME_ENV};
use crate::error::Result;
use crate::logger::Logger;
use crate::sink::LogSink;
use crate::stdout_sink::StdoutSink;
use serde_json::{Map, Value};
use std::fmt;
use std::sync::Arc;

/// Configuration of a root [`Logger`].
///
/// **Fields**
/// - `service_name`: written into `service.name` of every record. Must be
///   non-empty; checked by [`Logger::new`].
/// - `default_properties`: initial scope merged into every record. Must
///   be a JSON object.
/// - `clock`: source of `@timestamp`. Defaults to [`SystemClock`].
/// - `sink`: destination of serialized lines. Defaults to [`StdoutSink`].
/// - `nest_dotted_keys`: if `true` (default), keys such as
///   `"service.name"` in contributed context are expanded into nested
///   objects before merging; if `false` they stay literal keys.
#[derive(Clone)]
pub struct LoggerConfig {
    pub service_name: String,
    pub default_properties: Value,
    pub clock: Arc<dyn Clock>,
    pub sink: Arc<dyn LogSink>,
    pub nest_dotted_keys: bool,
}

impl LoggerConfig {
    pub fn new(service_name: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
            default_properties: Value::Object(Map::new()),
            clock: Arc::new(SystemClock),
            sink: Arc::new(StdoutSink),
            nest_dotted_keys: true,
        }
    }

    /// Build a configuration from `TWIGLET_*` environment variables.
    ///
    /// A missing service name is not reported here; it surfaces as a
    /// configuration error from [`Logger::new`].
    pub fn from_env() -> Self {
        let mut config = Self::new(env_or(TWIGLET_SERVICE_NAME_ENV, ""));
        config.nest_dotted_keys = env_flag(TWIGLET_NEST_DOTTED_KEYS_ENV, true);
        config
    }

    pub fn default_properties(mut self, properties: Value) -> Self {
        self.default_properties = properties;
        self
    }

    pub fn clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    pub fn sink(mut self, sink: impl LogSink + 'static) -> Self {
        self.sink = Arc::new(sink);
        self
    }

    /// Use a sink that is already shared with other loggers.
    pub fn shared_sink(mut self, sink: Arc<dyn LogSink>) -> Self {
        self.sink = sink;
        self
    }

    pub fn nest_dotted_keys(mut self, enabled: bool) -> Self {
        self.nest_dotted_keys = enabled;
        self
    }
}

impl fmt::Debug for LoggerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggerConfig")
            .field("service_name", &self.service_name)
            .field("default_properties", &self.default_properties)
            .field("nest_dotted_keys", &self.nest_dotted_keys)
            .finish_non_exhaustive()
    }
}

/// Build a root logger from the provided [`LoggerConfig`].
///
/// **Returns**
/// - the root [`Logger`], or a configuration error if the service name
///   is empty or `default_properties` is not an object.
pub fn init_logger_with_config(config: LoggerConfig) -> Result<Logger> {
    Logger::new(config)
}

/// Build a root logger writing to stdout with the system clock.
///
/// Equivalent to calling [`init_logger_with_config`] with
/// [`LoggerConfig::new`]. This is the recommended entrypoint for
/// typical microservices.
pub fn init_logger(service_name: impl Into<String>) -> Result<Logger> {
    init_logger_with_config(LoggerConfig::new(service_name))
}

/// Build a root logger from `TWIGLET_*` environment variables.
pub fn init_logger_from_env() -> Result<Logger> {
    init_logger_with_config(LoggerConfig::from_env())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LoggerError;
    use crate::memory_sink::MemorySink;

    #[test]
    fn builder_overrides_defaults() {
        let sink = MemorySink::new();
        let config = LoggerConfig::new("petshop")
            .default_properties(serde_json::json!({"region": "eu"}))
            .clock(|| "fixed".to_string())
            .sink(sink.clone())
            .nest_dotted_keys(false);

        assert_eq!(config.service_name, "petshop");
        assert_eq!(config.clock.now(), "fixed");
        assert!(!config.nest_dotted_keys);

        let logger = init_logger_with_config(config).unwrap();
        logger.info("hello").unwrap();
        assert_eq!(sink.records()[0]["region"], "eu");
    }

    #[test]
    fn empty_service_name_is_a_configuration_error() {
        assert!(matches!(init_logger(""), Err(LoggerError::Configuration(_))));
    }

    #[test]
    fn from_env_reads_service_name_and_nesting_flag() {
        std::env::set_var(TWIGLET_SERVICE_NAME_ENV, "envsvc");
        std::env::set_var(TWIGLET_NEST_DOTTED_KEYS_ENV, "false");

        let config = LoggerConfig::from_env();
        assert_eq!(config.service_name, "envsvc");
        assert!(!config.nest_dotted_keys);

        let logger = init_logger_from_env().unwrap();
        assert_eq!(logger.service_name(), "envsvc");

        std::env::remove_var(TWIGLET_SERVICE_NAME_ENV);
        std::env::remove_var(TWIGLET_NEST_DOTTED_KEYS_ENV);

        let config = LoggerConfig::from_env();
        assert!(config.nest_dotted_keys);
        assert!(matches!(init_logger_from_env(), Err(LoggerError::Configuration(_))));
    }

    #[test]
    fn roots_can_share_one_sink() {
        let memory = MemorySink::new();
        let shared: Arc<dyn LogSink> = Arc::new(memory.clone());

        let orders =
            init_logger_with_config(LoggerConfig::new("orders").shared_sink(Arc::clone(&shared)))
                .unwrap();
        let billing =
            init_logger_with_config(LoggerConfig::new("billing").shared_sink(shared)).unwrap();
        orders.info("order placed").unwrap();
        billing.info("invoice sent").unwrap();

        let services: Vec<Value> = memory
            .records()
            .iter()
            .map(|record| record["service"]["name"].clone())
            .collect();
        assert_eq!(services, [Value::from("orders"), Value::from("billing")]);
    }

    #[test]
    fn debug_output_names_the_service() {
        let rendered = format!("{:?}", LoggerConfig::new("petshop"));
        assert!(rendered.contains("petshop"));
    }
}
