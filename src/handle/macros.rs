//! Shorthand for leveled calls on a [`LogHandle`](crate::handle::LogHandle).
//!
//! `log_info!(log, "Info Log : %s", value)` is `log.info("Info Log : %s", &[&value])`.

/// Log an info message through a handle.
#[macro_export]
macro_rules! log_info {
    ($handle:expr, $tmpl:expr $(, $arg:expr)* $(,)?) => {
        $handle.info($tmpl, &[$(&$arg as &dyn ::std::fmt::Display),*])
    };
}

/// Log a warning message through a handle.
#[macro_export]
macro_rules! log_warn {
    ($handle:expr, $tmpl:expr $(, $arg:expr)* $(,)?) => {
        $handle.warn($tmpl, &[$(&$arg as &dyn ::std::fmt::Display),*])
    };
}

/// Log an error message through a handle.
#[macro_export]
macro_rules! log_error {
    ($handle:expr, $tmpl:expr $(, $arg:expr)* $(,)?) => {
        $handle.error($tmpl, &[$(&$arg as &dyn ::std::fmt::Display),*])
    };
}

/// Log a debug message through a handle.
#[macro_export]
macro_rules! log_debug {
    ($handle:expr, $tmpl:expr $(, $arg:expr)* $(,)?) => {
        $handle.debug($tmpl, &[$(&$arg as &dyn ::std::fmt::Display),*])
    };
}

/// Log a fatal message through a handle and exit.
#[macro_export]
macro_rules! log_fatal {
    ($handle:expr, $tmpl:expr $(, $arg:expr)* $(,)?) => {
        $handle.fatal($tmpl, &[$(&$arg as &dyn ::std::fmt::Display),*])
    };
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::handle::LogHandle;
    use crate::logging::level::Level;
    use crate::logging::sink::{MemorySink, SinkLogger};

    #[test]
    fn test_macros_forward_arguments() {
        let sink = Arc::new(MemorySink::new());
        let mut log = LogHandle::new(SinkLogger::new(sink.clone()));
        let count = 2;

        log_info!(log, "Info Log : %s", "some info");
        log_debug!(log, "Debug Log : %s", "some debug");
        log_warn!(log, "%d of %d", count, 5,);
        log_error!(log.additional_info([("k", "v")]), "no args");

        let records = sink.records();
        let summary: Vec<(Level, &str)> = records
            .iter()
            .map(|r| (r.level, r.message.as_str()))
            .collect();
        assert_eq!(
            summary,
            vec![
                (Level::Info, "Info Log : some info"),
                (Level::Debug, "Debug Log : some debug"),
                (Level::Warn, "2 of 5"),
                (Level::Error, "no args"),
            ]
        );
        assert!(records[3].additional_info().is_some());
    }
}
