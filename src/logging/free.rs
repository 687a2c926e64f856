//! Emission without a request context.
//!
//! These write straight to the default sink: no `correlationId`, no
//! enrichment. Use a [`LogHandle`](crate::handle::LogHandle) when either is
//! needed.

use std::fmt::Display;

use super::level::Level;
use super::sink::SinkLogger;
use super::template;

fn emit(logger: &SinkLogger, level: Level, tmpl: &str, args: &[&dyn Display]) {
    if logger.accepts(level) {
        logger.emit(level, &template::render(tmpl, args));
    }
}

pub fn debug(tmpl: &str, args: &[&dyn Display]) {
    emit(&SinkLogger::default(), Level::Debug, tmpl, args);
}

/// Log info level without context.
pub fn info(tmpl: &str, args: &[&dyn Display]) {
    emit(&SinkLogger::default(), Level::Info, tmpl, args);
}

/// Log error level without context.
pub fn error(tmpl: &str, args: &[&dyn Display]) {
    emit(&SinkLogger::default(), Level::Error, tmpl, args);
}

/// Log fatal level without context, then exit with status 1.
pub fn fatal(tmpl: &str, args: &[&dyn Display]) -> ! {
    let logger = SinkLogger::default();
    emit(&logger, Level::Fatal, tmpl, args);
    logger.terminate()
}
