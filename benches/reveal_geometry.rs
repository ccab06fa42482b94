// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for the stroke-reveal geometry computed on every icon frame.
//!
//! Measures:
//! - Trimming the checkmark and X-mark polylines at partial progress
//! - Sampling the reveal spring across a full animation

use criterion::{criterion_group, criterion_main, Criterion};
use iced_toast::ui::alert::reveal::trim_polyline;
use iced_toast::ui::alert::{Shape, Spring};
use iced_toast::ui::design_tokens::sizing;
use std::hint::black_box;
use std::time::Duration;

/// Benchmark trimming both shapes at a mid-animation fraction.
fn bench_trim(c: &mut Criterion) {
    let mut group = c.benchmark_group("reveal_geometry");

    for shape in [Shape::Checkmark, Shape::XMark] {
        let polylines = shape.polylines(sizing::ICON_XL);
        group.bench_function(format!("trim_{shape:?}"), |b| {
            b.iter(|| {
                for polyline in &polylines {
                    black_box(trim_polyline(black_box(polyline), black_box(0.6)));
                }
            });
        });
    }

    group.finish();
}

/// Benchmark sampling the reveal spring at 60 fps until it settles.
fn bench_spring(c: &mut Criterion) {
    let mut group = c.benchmark_group("reveal_geometry");
    let spring = Spring::REVEAL;
    let frames = (spring.settle_time().as_secs_f32() * 60.0).ceil() as u32;

    group.bench_function("spring_samples", |b| {
        b.iter(|| {
            for frame in 0..frames {
                black_box(spring.value(Duration::from_millis(u64::from(frame) * 16)));
            }
        });
    });

    group.finish();
}

criterion_group!(benches, bench_trim, bench_spring);
criterion_main!(benches);
