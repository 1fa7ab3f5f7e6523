//! Benchmarks for status text parsing.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput};
use volmix::pulse::parse;

use crate::{status_text, STREAM_COUNTS};

pub fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("pulse/parse");

    for &count in STREAM_COUNTS {
        let text = status_text(count);
        group.throughput(Throughput::Bytes(text.len() as u64));

        group.bench_with_input(BenchmarkId::new("sink_inputs", count), &text, |b, text| {
            b.iter(|| parse(black_box(text)))
        });
    }

    group.finish();
}
