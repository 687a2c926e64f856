//! Process-wide level configuration. Kept in its own binary because it
//! changes global state. Output checks re-run the test in a child process
//! selected by `CORRELOG_CONFIGURE_CHILD` and read its stderr.

use std::process::{Command, Output};

use correlog_core::{
    bind_correlation_id, configure_logger, handle_from_context, Level, LogSink, RequestContext,
    Sink,
};
use serde_json::Value;

const CHILD_ENV: &str = "CORRELOG_CONFIGURE_CHILD";

fn run_child(test_name: &str) -> Output {
    Command::new(std::env::current_exe().unwrap())
        .args([test_name, "--exact", "--nocapture", "--test-threads=1"])
        .env(CHILD_ENV, test_name)
        .output()
        .unwrap()
}

fn is_child(test_name: &str) -> bool {
    std::env::var(CHILD_ENV).map(|v| v == test_name).unwrap_or(false)
}

/// JSON lines written by the child; test harness chatter is skipped.
fn json_lines(output: &Output) -> Vec<Value> {
    String::from_utf8_lossy(&output.stderr)
        .lines()
        .filter_map(|line| serde_json::from_str::<Value>(line).ok())
        .filter(|value| value.is_object())
        .collect()
}

fn find<'a>(lines: &'a [Value], message: &str) -> Option<&'a Value> {
    lines.iter().find(|line| line["message"] == message)
}

#[test]
fn debug_flag_controls_minimum_level() {
    let sink = LogSink;

    configure_logger(false);
    assert_eq!(log::max_level(), log::LevelFilter::Info);
    assert!(!sink.enabled(Level::Debug));
    assert!(sink.enabled(Level::Info));
    assert!(sink.enabled(Level::Warn));
    assert!(sink.enabled(Level::Error));
    assert!(sink.enabled(Level::Fatal));

    configure_logger(true);
    assert_eq!(log::max_level(), log::LevelFilter::Debug);
    assert!(sink.enabled(Level::Debug));

    // Repeated calls only re-apply the level.
    configure_logger(true);
    assert!(sink.enabled(Level::Debug));
    configure_logger(false);
    assert!(!sink.enabled(Level::Debug));
}

#[test]
fn configured_level_filters_written_lines() {
    let name = "configured_level_filters_written_lines";
    if is_child(name) {
        configure_logger(false);
        correlog_core::info("Info log without context", &[]);
        correlog_core::debug("Debug log without context", &[]);
        correlog_core::error("Error log without context", &[]);

        let ctx = bind_correlation_id(&RequestContext::background(), "cid-cfg");
        let mut log = handle_from_context(&ctx);
        log.debug("handle debug while off", &[]);
        log.info("handle info while off", &[]);

        configure_logger(true);
        correlog_core::debug("Debug log after enabling", &[]);
        log.debug("handle debug after enabling", &[]);
        return;
    }

    let output = run_child(name);
    assert!(output.status.success(), "child failed: {:?}", output);
    let lines = json_lines(&output);

    let info = find(&lines, "Info log without context").expect("info line");
    assert_eq!(info["level"], "INFO");
    assert!(info.get("correlationId").is_none());
    let error = find(&lines, "Error log without context").expect("error line");
    assert_eq!(error["level"], "ERROR");

    assert!(find(&lines, "Debug log without context").is_none());
    assert!(find(&lines, "handle debug while off").is_none());

    let handle_info = find(&lines, "handle info while off").expect("handle info line");
    assert_eq!(handle_info["correlationId"], "cid-cfg");

    let debug = find(&lines, "Debug log after enabling").expect("debug line");
    assert_eq!(debug["level"], "DEBUG");
    let handle_debug = find(&lines, "handle debug after enabling").expect("handle debug line");
    assert_eq!(handle_debug["level"], "DEBUG");
    assert_eq!(handle_debug["correlationId"], "cid-cfg");
}
