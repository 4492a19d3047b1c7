//! Scoped, immutable loggers emitting single-line ECS JSON records.
//!
//! ```
//! use serde_json::json;
//! use twiglet::{init::LoggerConfig, logger::Logger, memory_sink::MemorySink};
//!
//! let sink = MemorySink::new();
//! let log = Logger::new(LoggerConfig::new("petshop").sink(sink.clone()))?;
//!
//! let request_log = log.with(json!({"trace": {"id": "126bb6fa"}}))?;
//! request_log.error(json!({"message": "DB connection failed."}))?;
//!
//! let records = sink.records();
//! let record = &records[0];
//! assert_eq!(record["service"]["name"], "petshop");
//! assert_eq!(record["trace"]["id"], "126bb6fa");
//! # Ok::<(), twiglet::error::LoggerError>(())
//! ```

pub mod clock;
pub mod error;
pub mod error_info;
pub mod logger;
pub mod merge;
pub mod message;
pub mod record;
pub mod severity;
pub mod sink;

pub mod env;
pub mod init;
pub mod memory_sink;
pub mod noop_sink;
pub mod stdout_sink;
pub mod tracing_sink;
pub mod writer_sink;

pub use error::{LoggerError, Result};
pub use init::LoggerConfig;
pub use logger::Logger;
pub use severity::Severity;
