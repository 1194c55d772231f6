use crate::common::{bare_policy, chain, configure_criterion};
use criterion::{criterion_group, BenchmarkId, Criterion};
use error_stamp::render::{render, TerminalPresenter};
use std::hint::black_box;
use std::io;

pub fn bench_render_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("rendering/chain");

    for depth in [1, 5, 20] {
        let err = bare_policy().stamp(chain(depth));
        group.bench_with_input(BenchmarkId::new("plain", depth), &err, |b, err| {
            b.iter(|| render(err, &TerminalPresenter::plain(), &mut io::sink()))
        });
        group.bench_with_input(BenchmarkId::new("color", depth), &err, |b, err| {
            b.iter(|| render(err, &TerminalPresenter::new(true), &mut io::sink()))
        });
    }
    group.finish();
}

pub fn bench_display(c: &mut Criterion) {
    let err = chain(5);
    c.bench_function("rendering/display", |b| b.iter(|| black_box(err.to_string())));
}

criterion_group! {
    name = rendering_benches;
    config = configure_criterion();
    targets = bench_render_chain, bench_display
}
