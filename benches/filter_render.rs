// SPDX-License-Identifier: MPL-2.0
use criterion::{criterion_group, criterion_main, Criterion};
use iced_tint::media::filter_render;
use std::hint::black_box;

fn filter_render_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_render");

    group.bench_function("parse_noir_transform", |b| {
        b.iter(|| {
            let matrix = filter_render::parse_transform(black_box("grayscale(1) contrast(1.15)"))
                .expect("builtin transform parses");
            black_box(matrix)
        });
    });

    // A 1280x720 frame, the size a capped preview works at.
    let matrix = filter_render::parse_transform("sepia(0.8)").expect("builtin transform parses");
    let frame = vec![127_u8; 1280 * 720 * 4];

    group.bench_function("apply_sepia_720p", |b| {
        b.iter(|| {
            let mut pixels = frame.clone();
            filter_render::apply_to_rgba(&mut pixels, black_box(&matrix));
            black_box(pixels)
        });
    });

    group.finish();
}

criterion_group!(benches, filter_render_benchmark);
criterion_main!(benches);
