//! Modulation benchmarks

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ping_modem::*;

fn message(len: usize) -> Vec<Bit> {
    (0..len).map(|i| Bit::from_value(((i * 7 + 3) % 5 % 2) as u8)).collect()
}

fn benchmark_psk_transmit(c: &mut Criterion) {
    let bits = message(256);
    let config = ModulatorConfig::default();

    c.bench_function("psk_transmit_256_bits", |b| {
        b.iter(|| black_box(transmit(&bits, &config)))
    });
}

fn benchmark_qpsk_hamming_transmit(c: &mut Criterion) {
    let bits = message(264);
    let config = ModulatorConfig {
        coding: Coding::Hamming { n: 4 },
        modulation: Modulation::qpsk(20_000.0),
        ..Default::default()
    };

    c.bench_function("qpsk_hamming15_transmit_264_bits", |b| {
        b.iter(|| black_box(transmit(&bits, &config)))
    });
}

fn benchmark_synthesize(c: &mut Criterion) {
    let segments: Vec<WaveSegment> = (0..100)
        .map(|i| WaveSegment::new(0.001, 20_000.0, 1.0, (i % 4) as f64 * 90.0))
        .collect();

    c.bench_function("synthesize_100_segments", |b| {
        b.iter(|| black_box(synthesize(&segments, 1000)))
    });
}

criterion_group!(
    benches,
    benchmark_psk_transmit,
    benchmark_qpsk_hamming_transmit,
    benchmark_synthesize
);
criterion_main!(benches);
