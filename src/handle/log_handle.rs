//! The request-scoped logging handle.

use std::fmt::{self, Display};
use std::mem;
use std::time::{Duration, Instant};

use serde_json::{Map, Value};

use super::pending::PendingState;
use crate::logging::fields;
use crate::logging::level::Level;
use crate::logging::sink::SinkLogger;
use crate::logging::template;

/// Whether enrichment is waiting for the next emission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandleState {
    Idle,
    Pending,
}

/// Chainable logging façade for one request path.
///
/// Enrichment (`additional_info`, `stack_trace`, `prefix`) applies to the
/// next emission only; every leveled call clears it, whether or not the
/// level is enabled. Handles are not shared between threads: derive one per
/// request with [`handle_from_context`](crate::context::handle_from_context).
///
/// ```
/// use std::sync::Arc;
/// use correlog_core::{bind_correlation_id, handle_from_context, MemorySink, RequestContext};
///
/// let sink = Arc::new(MemorySink::new());
/// let ctx = bind_correlation_id(&RequestContext::with_sink(sink.clone()), "cid-1");
/// let mut log = handle_from_context(&ctx);
///
/// log.additional_info([("user", "42")]).info("login from %s", &[&"10.0.0.1"]);
///
/// let record = sink.last().unwrap();
/// assert_eq!(record.message, "login from 10.0.0.1");
/// assert_eq!(record.correlation_id(), Some("cid-1"));
/// ```
pub struct LogHandle {
    logger: SinkLogger,
    started_at: Instant,
    pending: PendingState,
}

impl Default for LogHandle {
    fn default() -> Self {
        Self::new(SinkLogger::default())
    }
}

impl fmt::Debug for LogHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogHandle")
            .field("logger", &self.logger)
            .field("state", &self.state())
            .finish()
    }
}

impl LogHandle {
    pub fn new(logger: SinkLogger) -> Self {
        Self {
            logger,
            started_at: Instant::now(),
            pending: PendingState::default(),
        }
    }

    pub fn logger(&self) -> &SinkLogger {
        &self.logger
    }

    /// Time since the handle was created.
    pub fn elapsed(&self) -> Duration {
        self.started_at.elapsed()
    }

    pub fn state(&self) -> HandleState {
        if self.pending.is_idle() {
            HandleState::Idle
        } else {
            HandleState::Pending
        }
    }

    /// Merge key/value pairs into the pending `additionalInfo` map.
    pub fn additional_info<I, K, V>(&mut self, info: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        self.pending.merge_info(info);
        self
    }

    /// Capture an error to be rendered under `additionalInfo.stackTrace`.
    /// Replaces any previously captured error.
    pub fn stack_trace(&mut self, err: impl Into<anyhow::Error>) -> &mut Self {
        self.pending.capture(err.into());
        self
    }

    /// Prefix the next message, separated by a space.
    pub fn prefix(&mut self, prefix: impl Into<String>) -> &mut Self {
        self.pending.set_prefix(prefix.into());
        self
    }

    pub fn debug(&mut self, tmpl: &str, args: &[&dyn Display]) {
        self.write(Level::Debug, tmpl, args);
    }

    pub fn info(&mut self, tmpl: &str, args: &[&dyn Display]) {
        self.write(Level::Info, tmpl, args);
    }

    pub fn warn(&mut self, tmpl: &str, args: &[&dyn Display]) {
        self.write(Level::Warn, tmpl, args);
    }

    pub fn error(&mut self, tmpl: &str, args: &[&dyn Display]) {
        self.write(Level::Error, tmpl, args);
    }

    /// Emit a `FATAL` record, then flush and exit with status 1.
    pub fn fatal(&mut self, tmpl: &str, args: &[&dyn Display]) -> ! {
        self.write(Level::Fatal, tmpl, args);
        self.logger.terminate()
    }

    /// Emit at `level`. `Fatal` exits the process; `Panic` panics with the
    /// rendered message after the record is written.
    pub fn log(&mut self, level: Level, tmpl: &str, args: &[&dyn Display]) {
        match level {
            Level::Fatal => self.fatal(tmpl, args),
            Level::Panic => {
                let message = self.write(level, tmpl, args);
                panic!("{}", message);
            }
            _ => {
                self.write(level, tmpl, args);
            }
        }
    }

    /// Consume the pending state and emit. Returns the final message, which
    /// is empty when the level was filtered out.
    fn write(&mut self, level: Level, tmpl: &str, args: &[&dyn Display]) -> String {
        let pending = mem::take(&mut self.pending);

        if !self.logger.accepts(level) {
            return String::new();
        }

        let message = pending.apply_prefix(template::render(tmpl, args));

        let mut extra = Map::new();
        if let Some(info) = pending.into_additional_info() {
            extra.insert(fields::ADDITIONAL_INFO.to_string(), Value::Object(info));
        }

        self.logger.emit_with(level, &message, extra);
        message
    }
}
