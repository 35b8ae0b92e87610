//! Performance benchmarks for binding and triggering

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use event_dispatcher::{
    unique_listeners, ActionResult, Dispatcher, EventDispatcher, Listener, ListenerRef, Result,
};
use serde_json::{json, Value};

/// Listener that only counts calls, so repeated firing does not accumulate logs
struct CountingListener {
    calls: AtomicUsize,
    stop: bool,
}

impl CountingListener {
    fn new(stop: bool) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            stop,
        }
    }
}

impl Listener for CountingListener {
    fn fire(&self, _event: &str, params: &[Value]) -> Result<ActionResult> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        Ok(ActionResult::Done(params.first().cloned().unwrap_or(Value::Null)))
    }

    fn stop_propagation(&self) -> bool {
        self.stop
    }
}

fn listeners(count: usize) -> Vec<ListenerRef> {
    (0..count)
        .map(|_| Arc::new(CountingListener::new(false)) as ListenerRef)
        .collect()
}

fn benchmark_bind(c: &mut Criterion) {
    let mut group = c.benchmark_group("bind");

    for count in [1, 10, 100] {
        let pool = listeners(count);

        group.bench_with_input(BenchmarkId::new("bind", count), &pool, |b, pool| {
            b.iter(|| {
                let mut dispatcher = Dispatcher::new();
                dispatcher.bind(black_box(pool), ["saved", "opened"]);
                black_box(dispatcher)
            })
        });

        group.bench_with_input(BenchmarkId::new("bind_all_twice", count), &pool, |b, pool| {
            b.iter(|| {
                let mut dispatcher = Dispatcher::new();
                dispatcher.bind_all(black_box(pool)).bind_all(black_box(pool));
                black_box(dispatcher)
            })
        });
    }

    group.finish();
}

fn benchmark_trigger(c: &mut Criterion) {
    let mut group = c.benchmark_group("trigger");
    let params = [json!("/tmp/notes.txt")];

    for count in [1, 10, 100] {
        let mut dispatcher = Dispatcher::new();
        dispatcher.bind(listeners(count), ["saved"]);

        group.bench_with_input(BenchmarkId::new("per_event", count), &dispatcher, |b, d| {
            b.iter(|| d.trigger(black_box("saved"), black_box(&params)).is_ok())
        });

        let mut dispatcher = Dispatcher::new();
        dispatcher
            .bind_all(listeners(count / 2 + 1))
            .bind(listeners(count / 2 + 1), ["saved"]);

        group.bench_with_input(BenchmarkId::new("mixed", count), &dispatcher, |b, d| {
            b.iter(|| d.trigger(black_box("saved"), black_box(&params)).is_ok())
        });
    }

    let guard: ListenerRef = Arc::new(CountingListener::new(true));
    let mut dispatcher = Dispatcher::new();
    dispatcher.bind_all(&guard).bind(listeners(100), ["saved"]);

    group.bench_function("stopped_early", |b| {
        b.iter(|| dispatcher.trigger(black_box("saved"), black_box(&params)).is_ok())
    });

    group.finish();
}

fn benchmark_unique_listeners(c: &mut Criterion) {
    let pool = listeners(50);
    let repeated: Vec<ListenerRef> = pool.iter().chain(pool.iter()).cloned().collect();

    c.bench_function("unique_listeners_100_with_repeats", |b| {
        b.iter(|| black_box(unique_listeners(black_box(repeated.clone()))))
    });
}

criterion_group!(
    benches,
    benchmark_bind,
    benchmark_trigger,
    benchmark_unique_listeners
);
criterion_main!(benches);
