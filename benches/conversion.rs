//! Criterion benchmarks for the conversion hot paths.

use argb_color_types::ArgbColor;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_to_hsb(c: &mut Criterion) {
    let color = ArgbColor::from_packed(0x7f60_bfa7);
    c.bench_function("to_hsb", |b| b.iter(|| black_box(color).to_hsb()));
}

fn bench_from_hsb(c: &mut Criterion) {
    c.bench_function("from_hsb", |b| {
        b.iter(|| {
            ArgbColor::from_hsb_with_opacity(
                black_box(165.0),
                black_box(0.5),
                black_box(0.75),
                black_box(0.5),
            )
        })
    });
}

fn bench_to_hsl(c: &mut Criterion) {
    let color = ArgbColor::from_packed(0x7f60_bfa7);
    c.bench_function("to_hsl", |b| b.iter(|| black_box(color).to_hsl()));
}

fn bench_parse(c: &mut Criterion) {
    c.bench_function("parse_hex", |b| {
        b.iter(|| black_box("#7F60BFA7").parse::<ArgbColor>())
    });
}

criterion_group!(
    benches,
    bench_to_hsb,
    bench_from_hsb,
    bench_to_hsl,
    bench_parse
);
criterion_main!(benches);
