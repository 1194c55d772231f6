use crate::common::{chain, configure_criterion};
use criterion::{criterion_group, BenchmarkId, Criterion};
use error_stamp::{annotation, Annotation, Container, Severity};
use std::hint::black_box;

pub fn bench_container_creation(c: &mut Criterion) {
    c.bench_function("core/container_creation", |b| {
        b.iter(|| {
            black_box(
                Container::new(Severity::ERROR, "connection pool exhausted")
                    .annotate(Annotation::quoted("host", "db-primary-01"))
                    .annotate(Annotation::uint("pool_size", 32u32))
                    .annotate(annotation!("query", "SELECT * FROM {}", "users"))
                    .with_description("all connections are checked out"),
            )
        })
    });
}

pub fn bench_lazy_annotation(c: &mut Criterion) {
    let err = Container::new(Severity::WARN, "slow query")
        .annotate(annotation!("plan", "{:?}", [1u32, 2, 3, 4, 5]));

    c.bench_function("core/lazy_annotation_discarded", |b| {
        b.iter(|| {
            black_box(
                Container::new(Severity::WARN, "slow query").annotate(annotation!("n", "{}", 42)),
            )
        })
    });

    c.bench_function("core/lazy_annotation_rendered", |b| b.iter(|| black_box(err.to_string())));
}

pub fn bench_chain_traversal(c: &mut Criterion) {
    let mut group = c.benchmark_group("core/walk");

    for depth in [1, 5, 20] {
        let err = chain(depth);
        group.bench_with_input(BenchmarkId::from_parameter(depth), &err, |b, err| {
            b.iter(|| {
                let mut links = 0;
                err.walk(|link, _| {
                    black_box(link);
                    links += 1;
                });
                black_box(links)
            })
        });
    }
    group.finish();
}

criterion_group! {
    name = core_benches;
    config = configure_criterion();
    targets = bench_container_creation, bench_lazy_annotation, bench_chain_traversal
}
