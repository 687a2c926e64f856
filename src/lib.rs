//! correlog - Structured logging with per-request correlation
//!
//! Every record is one JSON line. Requests get a handle bound to their
//! correlation id; callers chain one-shot enrichment onto the next call:
//!
//! 1. **Correlation** - `correlationId` written on every record of a request
//! 2. **Enrichment** - `additionalInfo` and `stackTrace` for one call only
//! 3. **Safety** - logging never fails the caller
//!
//! ## Architecture
//!
//! The crate is organized into modules:
//! - `logging` - Levels, field names, templates, records, sinks, configuration
//! - `context` - Correlation id binding and handle lookup
//! - `handle` - The chainable per-request handle
//!
//! ## Usage
//!
//! ```no_run
//! use correlog_core::{bind_correlation_id, configure_logger, handle_from_context, RequestContext};
//!
//! configure_logger(true);
//! correlog_core::info("Info log without context", &[]);
//!
//! let ctx = bind_correlation_id(&RequestContext::background(), "cid-123897123");
//! let mut log = handle_from_context(&ctx);
//! log.info("Info Log : %s", &[&"some info"]);
//! log.additional_info([("some_key", "some_value")])
//!     .stack_trace(std::io::Error::new(std::io::ErrorKind::Other, "stack trace"))
//!     .error("Error Log with additionalInfo", &[]);
//! ```

pub mod context;
pub mod handle;
pub mod logging;

pub use context::{bind_correlation_id, handle_from_context, LoggerCarrier, RequestContext};
pub use handle::{HandleState, LogHandle};
pub use logging::free::{debug, error, fatal, info};
pub use logging::{
    configure_from_env, configure_logger, configure_logger_with, default_sink, fields,
    ConfigError, Level, LogRecord, LogSink, LogTarget, LoggerConfig, MemorySink, Sink,
    SinkLogger,
};
