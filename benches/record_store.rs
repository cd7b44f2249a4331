//! Record store benchmarks

use std::sync::Arc;

use criterion::{Criterion, criterion_group, criterion_main};
use minilink::generator::CodeGenerator;
use minilink::store::{MemoryStore, RecordStore};

fn prefilled_store(rt: &tokio::runtime::Runtime, count: usize) -> Arc<MemoryStore> {
    let store = Arc::new(MemoryStore::new(CodeGenerator::new(6, 32)));
    rt.block_on(async {
        for i in 0..count {
            store
                .create(Some(format!("c{:05}", i)), "https://example.com/target".to_string())
                .await
                .unwrap();
        }
    });
    store
}

fn bench_create_generated(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let store = prefilled_store(&rt, 1000);

    c.bench_function("store/create_generated", |b| {
        b.to_async(&rt).iter(|| {
            let store = Arc::clone(&store);
            async move {
                store
                    .create(None, "https://example.com/new".to_string())
                    .await
                    .unwrap();
            }
        });
    });
}

fn bench_resolve_hit(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let store = prefilled_store(&rt, 1000);

    c.bench_function("store/resolve_hit", |b| {
        b.to_async(&rt).iter(|| {
            let store = Arc::clone(&store);
            async move {
                store.resolve("c00500").await.unwrap();
            }
        });
    });
}

fn bench_stats_read(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let store = prefilled_store(&rt, 1000);

    c.bench_function("store/stats_read", |b| {
        b.to_async(&rt).iter(|| {
            let store = Arc::clone(&store);
            async move {
                store.stats("c00500").await.unwrap();
            }
        });
    });
}

criterion_group!(
    benches,
    bench_create_generated,
    bench_resolve_hit,
    bench_stats_read
);
criterion_main!(benches);
