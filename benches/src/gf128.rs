//! GF(2^128) multiplication benchmarks.
use criterion::{criterion_group, criterion_main, BenchmarkId, Throughput};
use gf128::{Backend, Block, BLOCK_SIZE};
use std::hint::black_box;

mod utils;
use utils::{block, config, Benchmarker};

fn bench(c: &mut Benchmarker) {
    let mut group = c.benchmark_group("gf128");
    let h: Block = block(0x42);
    let x: Block = block(0x17);

    group.throughput(Throughput::Bytes(BLOCK_SIZE as u64));

    for backend in Backend::ALL.into_iter().filter(|b| b.is_available()) {
        group.bench_function(BenchmarkId::new("multiply", backend.name()), |b| {
            b.iter(|| backend.multiply(black_box(&x), black_box(&h)));
        });
    }

    group.finish();
}

criterion_group!(
    name = benches;
    config = config();
    targets = bench
);

criterion_main!(benches);
