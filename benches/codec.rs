//! Criterion benchmarks for the Yaz0 compress/decompress API.
//!
//! Run with:
//!   cargo bench --bench codec

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

/// Returns compressible synthetic data of the given size.
///
/// Highly repetitive lorem-ipsum filler, so throughput numbers reflect the
/// codec's scan loop rather than incidental data-dependent branching.
fn synthetic_data(size: usize) -> Vec<u8> {
    const LOREM: &[u8] = b"Lorem ipsum dolor sit amet, consectetur adipiscing elit, \
        sed do eiusmod tempor incididunt ut labore et dolore magna aliqua. \
        Ut enim ad minim veniam, quis nostrud exercitation ullamco laboris nisi \
        ut aliquip ex ea commodo consequat.";

    let mut out = Vec::with_capacity(size);
    while out.len() < size {
        let rem = size - out.len();
        let take = rem.min(LOREM.len());
        out.extend_from_slice(&LOREM[..take]);
    }
    out
}

fn bench_compress_decompress(c: &mut Criterion) {
    let mut group = c.benchmark_group("compress_decompress");

    for &size in &[16_384usize, 262_144] {
        let input = synthetic_data(size);
        let bound = yaz0::bound(input.len());

        {
            let mut dst = vec![0u8; bound];
            group.throughput(Throughput::Bytes(size as u64));
            group.bench_with_input(BenchmarkId::new("compress", size), &input, |b, input| {
                b.iter(|| yaz0::compress_into(input, &mut dst).unwrap())
            });
        }

        {
            let compressed = yaz0::compress(&input).unwrap();
            let mut dst = vec![0u8; size];
            group.throughput(Throughput::Bytes(size as u64));
            group.bench_with_input(
                BenchmarkId::new("decompress", size),
                &compressed,
                |b, compressed| b.iter(|| yaz0::decompress_into(compressed, &mut dst).unwrap()),
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_compress_decompress);
criterion_main!(benches);
