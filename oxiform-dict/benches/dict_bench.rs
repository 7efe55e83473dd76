//! Performance benchmarks for the dictionary coders.
//!
//! Measures compression and decompression throughput of LZ77, LZ78 and LZW
//! across data patterns that stress different parts of each coder.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use oxiform_core::Transform;
use oxiform_dict::{Lz77, Lz78, Lzw};
use std::hint::black_box;

/// Type alias for pattern generator functions
type PatternGenerator = fn(usize) -> Vec<u8>;

mod test_data {
    /// Uniform data - all bytes are the same
    pub fn uniform(size: usize) -> Vec<u8> {
        vec![0xAA; size]
    }

    /// Random data - no patterns
    pub fn random(size: usize) -> Vec<u8> {
        let mut seed: u64 = 0x123456789ABCDEF0;
        (0..size)
            .map(|_| {
                seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
                (seed >> 32) as u8
            })
            .collect()
    }

    /// Short repeating pattern
    pub fn repetitive(size: usize) -> Vec<u8> {
        b"TOBEORNOTTOBEORTOBEORNOT"
            .iter()
            .copied()
            .cycle()
            .take(size)
            .collect()
    }

    /// Text-like data
    pub fn text_like(size: usize) -> Vec<u8> {
        b"The quick brown fox jumps over the lazy dog. \
          Pack my box with five dozen liquor jugs. \
          How vexingly quick daft zebras jump! "
            .iter()
            .copied()
            .cycle()
            .take(size)
            .collect()
    }
}

const SIZES: [(&str, usize); 2] = [("16KB", 16 * 1024), ("128KB", 128 * 1024)];

const PATTERNS: [(&str, PatternGenerator); 4] = [
    ("uniform", test_data::uniform as PatternGenerator),
    ("random", test_data::random as PatternGenerator),
    ("repetitive", test_data::repetitive as PatternGenerator),
    ("text", test_data::text_like as PatternGenerator),
];

fn coders() -> Vec<Box<dyn Transform>> {
    vec![Box::new(Lz77::default()), Box::new(Lz78), Box::new(Lzw)]
}

/// Benchmark compression speed
fn bench_compression_speed(c: &mut Criterion) {
    for coder in coders() {
        let mut group = c.benchmark_group(format!("{}_compress", coder.name()));
        // The sliding-window search is slow on large inputs.
        group.sample_size(10);

        for (size_name, size) in SIZES {
            for (pattern_name, generator) in PATTERNS {
                let data = generator(size);
                let id = format!("{}/{}", size_name, pattern_name);

                group.throughput(Throughput::Bytes(size as u64));
                group.bench_with_input(BenchmarkId::from_parameter(&id), &data, |b, data| {
                    b.iter(|| black_box(coder.encode(black_box(data))));
                });
            }
        }

        group.finish();
    }
}

/// Benchmark decompression speed
fn bench_decompression_speed(c: &mut Criterion) {
    for coder in coders() {
        let mut group = c.benchmark_group(format!("{}_decompress", coder.name()));

        for (size_name, size) in SIZES {
            for (pattern_name, generator) in PATTERNS {
                let Ok(compressed) = coder.encode(&generator(size)) else {
                    continue;
                };
                let id = format!("{}/{}", size_name, pattern_name);

                group.throughput(Throughput::Bytes(size as u64));
                group.bench_with_input(
                    BenchmarkId::from_parameter(&id),
                    &compressed,
                    |b, compressed| {
                        b.iter(|| black_box(coder.decode(black_box(compressed))));
                    },
                );
            }
        }

        group.finish();
    }
}

criterion_group!(benches, bench_compression_speed, bench_decompression_speed);
criterion_main!(benches);
