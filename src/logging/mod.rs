//! Structured logging primitives.
//!
//! Levels, reserved field names, message templates, records, sinks and the
//! process-wide configuration. The request-scoped façade built on top of
//! these lives in [`crate::context`] and [`crate::handle`].

pub mod config;
pub mod fields;
pub mod free;
pub mod level;
pub mod record;
pub mod sink;
pub mod template;

pub use config::{
    configure_from_env, configure_logger, configure_logger_with, ConfigError, LogTarget,
    LoggerConfig,
};
pub use level::Level;
pub use record::LogRecord;
pub use sink::{default_sink, LogSink, MemorySink, Sink, SinkLogger, SINK_TARGET};
