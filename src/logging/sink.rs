//! Sinks and sink bindings.
//!
//! A [`Sink`] filters by level and writes records. The process-wide default
//! is [`LogSink`], which hands JSON lines to the `log` facade (rendered by
//! `env_logger` once [`configure_logger`](super::config::configure_logger)
//! has run). A [`SinkLogger`] is a sink plus the fields pre-populated on
//! every record it writes, e.g. `correlationId`.

use std::fmt;
use std::sync::Arc;

use lazy_static::lazy_static;
use parking_lot::Mutex;
use serde_json::{Map, Value};

use super::level::Level;
use super::record::LogRecord;

/// `log` target used for records produced by this crate's sinks.
pub const SINK_TARGET: &str = "correlog";

/// Backend that filters and writes records.
pub trait Sink: Send + Sync {
    fn enabled(&self, level: Level) -> bool;

    /// Write one record. Must not fail; I/O errors are swallowed.
    fn emit(&self, record: &LogRecord);

    fn flush(&self) {}
}

lazy_static! {
    static ref DEFAULT_SINK: Arc<dyn Sink> = Arc::new(LogSink);
}

/// The process-wide default sink.
pub fn default_sink() -> Arc<dyn Sink> {
    Arc::clone(&DEFAULT_SINK)
}

/// Forwards records to the `log` facade as JSON lines.
///
/// Filtering follows `log::max_level()`, which `configure_logger` sets.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl Sink for LogSink {
    fn enabled(&self, level: Level) -> bool {
        log::log_enabled!(target: SINK_TARGET, level.as_log())
    }

    fn emit(&self, record: &LogRecord) {
        let line = record.to_json_line();
        log::logger().log(
            &log::Record::builder()
                .args(format_args!("{}", line))
                .level(record.level.as_log())
                .target(SINK_TARGET)
                .build(),
        );
    }

    fn flush(&self) {
        log::logger().flush();
    }
}

/// Keeps records in memory. Intended for tests of code that logs.
#[derive(Debug)]
pub struct MemorySink {
    min_level: Level,
    records: Mutex<Vec<LogRecord>>,
}

impl Default for MemorySink {
    fn default() -> Self {
        Self::new()
    }
}

impl MemorySink {
    /// Accepts every level.
    pub fn new() -> Self {
        Self::with_min_level(Level::Debug)
    }

    pub fn with_min_level(min_level: Level) -> Self {
        Self {
            min_level,
            records: Mutex::new(Vec::new()),
        }
    }

    /// Snapshot of everything written so far.
    pub fn records(&self) -> Vec<LogRecord> {
        self.records.lock().clone()
    }

    /// Drain the captured records.
    pub fn take(&self) -> Vec<LogRecord> {
        std::mem::take(&mut *self.records.lock())
    }

    pub fn last(&self) -> Option<LogRecord> {
        self.records.lock().last().cloned()
    }

    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }
}

impl Sink for MemorySink {
    fn enabled(&self, level: Level) -> bool {
        level >= self.min_level
    }

    fn emit(&self, record: &LogRecord) {
        self.records.lock().push(record.clone());
    }
}

/// A sink binding with pre-populated fields.
///
/// Cloning copies the fields and shares the sink.
#[derive(Clone)]
pub struct SinkLogger {
    sink: Arc<dyn Sink>,
    fields: Map<String, Value>,
}

impl Default for SinkLogger {
    /// The default sink with no fields.
    fn default() -> Self {
        Self::new(default_sink())
    }
}

impl fmt::Debug for SinkLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SinkLogger")
            .field("fields", &self.fields)
            .finish_non_exhaustive()
    }
}

impl SinkLogger {
    pub fn new(sink: Arc<dyn Sink>) -> Self {
        Self {
            sink,
            fields: Map::new(),
        }
    }

    /// Add or overwrite a field written on every record.
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    pub fn field(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    pub fn sink(&self) -> &Arc<dyn Sink> {
        &self.sink
    }

    pub fn enabled(&self, level: Level) -> bool {
        self.sink.enabled(level)
    }

    /// Whether a record at `level` is written: `FATAL` and `PANIC` always
    /// are, everything else follows the sink's filter.
    pub fn accepts(&self, level: Level) -> bool {
        level >= Level::Fatal || self.sink.enabled(level)
    }

    pub fn emit(&self, level: Level, message: &str) {
        self.emit_with(level, message, Map::new());
    }

    /// Emit with `extra` fields layered over the bound ones.
    pub fn emit_with(&self, level: Level, message: &str, extra: Map<String, Value>) {
        if !self.accepts(level) {
            return;
        }
        let mut fields = self.fields.clone();
        fields.extend(extra);
        self.sink.emit(&LogRecord::new(level, message).with_fields(fields));
    }

    /// Flush the sink and exit with status 1. Called after a `FATAL` record.
    pub fn terminate(&self) -> ! {
        self.sink.flush();
        std::process::exit(1)
    }
}
