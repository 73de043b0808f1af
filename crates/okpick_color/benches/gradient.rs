//! Criterion benchmarks for slider gradient sampling.
//!
//! Gradients are regenerated on every slider drag, so one full set of three
//! should stay well under a frame budget.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use okpick_color::css::linear_gradient;
use okpick_color::{
    chroma_gradient, hex_to_rgb, hue_gradient, lightness_gradient, oklch_to_rgb, ColorSpace, Oklch,
    PickerState,
};

fn bench_conversions(c: &mut Criterion) {
    let mut group = c.benchmark_group("convert");

    group.bench_function("oklch_to_rgb", |b| {
        b.iter(|| oklch_to_rgb(black_box(Oklch::opaque(0.7, 0.1, 104.0))));
    });

    group.bench_function("hex_to_rgb", |b| {
        b.iter(|| hex_to_rgb(black_box("#a9a25480")));
    });

    group.finish();
}

fn bench_gradients(c: &mut Criterion) {
    let mut group = c.benchmark_group("gradient");

    for space in [ColorSpace::Oklch, ColorSpace::Lch] {
        let (l, ch, h) = match space {
            ColorSpace::Oklch => (0.7, 0.1, 104.0),
            ColorSpace::Lch => (70.0, 37.5, 104.0),
        };

        group.bench_function(format!("slider_set/{space}"), |b| {
            b.iter(|| {
                black_box(lightness_gradient(black_box(ch), black_box(h), space));
                black_box(chroma_gradient(black_box(l), black_box(h), space));
                black_box(hue_gradient(black_box(l), black_box(ch), space));
            });
        });
    }

    group.bench_function("hue_css", |b| {
        b.iter(|| linear_gradient(&hue_gradient(black_box(0.7), black_box(0.1), ColorSpace::Oklch)));
    });

    group.bench_function("picker_state_gradients", |b| {
        let state = PickerState::default();
        b.iter(|| black_box(state.gradients()));
    });

    group.finish();
}

criterion_group!(benches, bench_conversions, bench_gradients);
criterion_main!(benches);
