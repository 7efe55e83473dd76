//! Criterion benchmarks for the byte transforms.
//!
//! Each transform is measured encoding and decoding text-like and random
//! buffers of a few sizes.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use oxiform_core::Transform;
use oxiform_transform::{BlockSort, Bwt, Complement, Cube, Delta, Mtf, PairSubstitution, Rle};
use std::hint::black_box;

const SIZES: [usize; 3] = [1024, 16 * 1024, 128 * 1024];

fn text_like(size: usize) -> Vec<u8> {
    b"The quick brown fox jumps over the lazy dog. \
      Pack my box with five dozen liquor jugs. "
        .iter()
        .copied()
        .cycle()
        .take(size)
        .collect()
}

fn random(size: usize) -> Vec<u8> {
    let mut seed: u64 = 0x123456789ABCDEF0;
    (0..size)
        .map(|_| {
            seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
            (seed >> 32) as u8
        })
        .collect()
}

fn transforms() -> Vec<Box<dyn Transform>> {
    vec![
        Box::new(Delta),
        Box::new(Rle),
        Box::new(Mtf),
        Box::new(Cube),
        Box::new(Complement),
        Box::new(BlockSort),
        Box::new(Bwt),
        Box::new(PairSubstitution),
    ]
}

fn bench_encode(c: &mut Criterion) {
    for transform in transforms() {
        let mut group = c.benchmark_group(format!("{}_encode", transform.name()));
        for size in SIZES {
            for (pattern, data) in [("text", text_like(size)), ("random", random(size))] {
                group.throughput(Throughput::Bytes(size as u64));
                group.bench_with_input(BenchmarkId::new(pattern, size), &data, |b, data| {
                    b.iter(|| transform.encode(black_box(data)))
                });
            }
        }
        group.finish();
    }
}

fn bench_decode(c: &mut Criterion) {
    for transform in transforms() {
        let mut group = c.benchmark_group(format!("{}_decode", transform.name()));
        for size in SIZES {
            let data = text_like(size);
            let Ok(encoded) = transform.encode(&data) else {
                continue;
            };
            group.throughput(Throughput::Bytes(size as u64));
            group.bench_with_input(BenchmarkId::new("text", size), &encoded, |b, encoded| {
                b.iter(|| transform.decode(black_box(encoded)))
            });
        }
        group.finish();
    }
}

criterion_group!(benches, bench_encode, bench_decode);
criterion_main!(benches);
