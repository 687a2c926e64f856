//! Emission throughput into an in-memory sink.
//!
//! ```text
//! cargo bench --bench emit_bench
//! ```

use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use correlog_core::{bind_correlation_id, handle_from_context, MemorySink, RequestContext};

fn bench_emit(c: &mut Criterion) {
    let sink = Arc::new(MemorySink::new());
    let ctx = bind_correlation_id(&RequestContext::with_sink(sink.clone()), "cid-bench");
    let mut log = handle_from_context(&ctx);

    let mut group = c.benchmark_group("emit");

    group.bench_function("plain", |b| {
        b.iter(|| {
            log.info(black_box("Info Log : %s"), &[&"some info"]);
            sink.take();
        })
    });

    group.bench_function("enriched", |b| {
        b.iter(|| {
            log.additional_info([("some_key", "some_value"), ("attempt", "3")])
                .prefix("[bench]")
                .error(black_box("request failed after %d ms"), &[&42]);
            sink.take();
        })
    });

    group.bench_function("filtered", |b| {
        let quiet = Arc::new(MemorySink::with_min_level(correlog_core::Level::Info));
        let ctx = bind_correlation_id(&RequestContext::with_sink(quiet), "cid-bench");
        let mut log = handle_from_context(&ctx);
        b.iter(|| {
            log.additional_info([("k", "v")])
                .debug(black_box("dropped %s"), &[&"value"]);
        })
    });

    group.finish();
}

criterion_group!(benches, bench_emit);
criterion_main!(benches);
