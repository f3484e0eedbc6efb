use criterion::{criterion_group, criterion_main, Criterion};
use slotpaste_codec::{
    compress_deltas, compress_intervals, decode, encode, AvailabilityMap, CodecConfig, Strategy,
};
use std::hint::black_box;

/// A week of 09:00-17:00 availability in 15-minute slots.
fn working_week() -> AvailabilityMap {
    let mut map = AvailabilityMap::new();
    for day in 0..7i64 {
        for slot in 0..32i64 {
            let available = (slot / 4 + day) % 3 != 0;
            map.insert(1_767_603_600 + day * 86_400 + slot * 900, available);
        }
    }
    map
}

fn bench_compress(c: &mut Criterion) {
    let map = working_week();
    c.bench_function("compress_intervals_week", |b| {
        b.iter(|| compress_intervals(black_box(&map), 900))
    });
    c.bench_function("compress_deltas_week", |b| {
        b.iter(|| compress_deltas(black_box(&map), 900))
    });
}

fn bench_text(c: &mut Criterion) {
    let map = working_week();
    let runs = CodecConfig {
        max_chars: None,
        ..CodecConfig::default()
    };
    let deltas = CodecConfig {
        strategy: Strategy::DeltaList,
        ..runs.clone()
    };

    let runs_text = encode(&map, &runs).unwrap_or_default();
    let deltas_text = encode(&map, &deltas).unwrap_or_default();
    println!(
        "week schedule: interval-run {} chars, delta-list {} chars",
        runs_text.len(),
        deltas_text.len()
    );

    c.bench_function("encode_text_week", |b| b.iter(|| encode(black_box(&map), &runs)));
    c.bench_function("decode_text_week", |b| b.iter(|| decode(black_box(&runs_text))));
}

criterion_group!(benches, bench_compress, bench_text);
criterion_main!(benches);
