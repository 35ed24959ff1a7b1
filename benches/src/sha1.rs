//! SHA-1 compression benchmarks.
use criterion::{criterion_group, criterion_main, BenchmarkId, Throughput};
use sha1_compress::{Backend, H0};
use std::hint::black_box;

mod utils;
use utils::{config, message, Benchmarker};

fn bench(c: &mut Benchmarker) {
    let mut group = c.benchmark_group("sha1");

    for size in &[64, 1024, 16384] {
        let buf = message(*size);

        group.throughput(Throughput::Bytes(*size as u64));

        for backend in Backend::ALL.into_iter().filter(|b| b.is_available()) {
            group.bench_function(BenchmarkId::new(backend.name(), size), |b| {
                let mut state = H0;
                b.iter(|| backend.compress(&mut state, black_box(&buf)));
            });
        }
    }

    group.finish();
}

criterion_group!(
    name = benches;
    config = config();
    targets = bench
);

criterion_main!(benches);
