//! SHA-256 and SHA-512 compression benchmarks.
use criterion::{criterion_group, criterion_main, BenchmarkId, Throughput};
use sha2_compress::{consts, sha256, sha512};
use std::hint::black_box;

mod utils;
use utils::{config, message, Benchmarker};

const SIZES: [usize; 3] = [128, 1024, 16384];

fn bench_sha256(c: &mut Benchmarker) {
    let mut group = c.benchmark_group("sha256");

    for size in SIZES {
        let buf = message(size);

        group.throughput(Throughput::Bytes(size as u64));

        for backend in sha256::Backend::ALL.into_iter().filter(|b| b.is_available()) {
            group.bench_function(BenchmarkId::new(backend.name(), size), |b| {
                let mut state = consts::H256;
                b.iter(|| backend.compress(&mut state, black_box(&buf)));
            });
        }
    }

    group.finish();
}

fn bench_sha512(c: &mut Benchmarker) {
    let mut group = c.benchmark_group("sha512");

    for size in SIZES {
        let buf = message(size);

        group.throughput(Throughput::Bytes(size as u64));

        for backend in sha512::Backend::ALL.into_iter().filter(|b| b.is_available()) {
            group.bench_function(BenchmarkId::new(backend.name(), size), |b| {
                let mut state = consts::H512;
                b.iter(|| backend.compress(&mut state, black_box(&buf)));
            });
        }
    }

    group.finish();
}

criterion_group!(
    name = benches;
    config = config();
    targets = bench_sha256, bench_sha512
);

criterion_main!(benches);
