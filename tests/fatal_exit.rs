//! `fatal` writes its record and exits with status 1. Each test re-runs
//! itself in a child process selected by `CORRELOG_FATAL_CHILD`.

use std::process::{Command, Output};

use correlog_core::{bind_correlation_id, configure_logger, handle_from_context, RequestContext};

const CHILD_ENV: &str = "CORRELOG_FATAL_CHILD";

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

#[test]
fn handle_fatal_exits_with_status_one() {
    let name = "handle_fatal_exits_with_status_one";
    if is_child(name) {
        configure_logger(false);
        let ctx = bind_correlation_id(&RequestContext::background(), "cid-fatal");
        handle_from_context(&ctx)
            .additional_info([("phase", "startup")])
            .fatal("cannot continue: %s", &[&"disk full"]);
    }

    let output = run_child(name);
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains(r#""level":"FATAL""#), "stderr: {}", stderr);
    assert!(stderr.contains(r#""correlationId":"cid-fatal""#), "stderr: {}", stderr);
    assert!(stderr.contains(r#""message":"cannot continue: disk full""#), "stderr: {}", stderr);
}

#[test]
fn free_fatal_exits_with_status_one() {
    let name = "free_fatal_exits_with_status_one";
    if is_child(name) {
        configure_logger(false);
        correlog_core::fatal("free fatal", &[]);
    }

    let output = run_child(name);
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains(r#""level":"FATAL""#), "stderr: {}", stderr);
    assert!(stderr.contains(r#""message":"free fatal""#), "stderr: {}", stderr);
}
