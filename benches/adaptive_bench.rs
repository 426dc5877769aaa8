use criterion::{criterion_group, criterion_main, Criterion};
use fgk::adaptive::{AdaptiveDecoder, AdaptiveEncoder};
use fgk::elias::EliasDelta;
use fgk::lzw::Lzw;

fn sample_input() -> Vec<u8> {
    // Skewed distribution so the tree actually restructures.
    (0..8192u32)
        .map(|i| match i % 11 {
            0..=5 => b'a',
            6..=8 => b'b',
            9 => b'c',
            _ => (i % 251) as u8,
        })
        .collect()
}

fn bench_adaptive(c: &mut Criterion) {
    let mut group = c.benchmark_group("adaptive");
    let input = sample_input();

    group.bench_function("encode", |b| {
        b.iter(|| AdaptiveEncoder::new().encode(&input))
    });

    let bits = AdaptiveEncoder::new().encode(&input);
    group.bench_function("decode", |b| {
        b.iter(|| AdaptiveDecoder::new().decode(&bits).unwrap())
    });
}

fn bench_lzw_delta(c: &mut Criterion) {
    let mut group = c.benchmark_group("lzw_delta");
    let input = sample_input();
    let coder = Lzw::new(EliasDelta);

    group.bench_function("encode", |b| b.iter(|| coder.encode(&input).unwrap()));

    let bits = coder.encode(&input).unwrap();
    group.bench_function("decode", |b| b.iter(|| coder.decode(&bits).unwrap()));
}

criterion_group!(benches, bench_adaptive, bench_lzw_delta);
criterion_main!(benches);
