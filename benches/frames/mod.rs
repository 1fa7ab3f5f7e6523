//! Benchmarks for frame rendering.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use volmix::{
    pulse::parse,
    render::render,
    MixerConfig, MixerState,
};

use crate::{status_text, STREAM_COUNTS};

pub fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("frames/render");

    for &count in STREAM_COUNTS {
        let state = MixerState::new(parse(&status_text(count)), MixerConfig::default());

        group.bench_with_input(BenchmarkId::new("streams", count), &state, |b, state| {
            b.iter(|| render(black_box(state)))
        });
    }

    group.finish();
}
