use criterion::{Criterion, criterion_group, criterion_main};
use mobilekit_engine::parse_links;
mod common;

fn bench_parse_links(c: &mut Criterion) {
    let mut group = c.benchmark_group("links");
    group.sample_size(10);

    let linked = common::generate_linked_text(1_000);
    group.bench_function("well_formed", |b| {
        b.iter(|| std::hint::black_box(parse_links(std::hint::black_box(&linked))));
    });

    let broken = common::generate_broken_brackets(1_000);
    group.bench_function("unbalanced", |b| {
        b.iter(|| std::hint::black_box(parse_links(std::hint::black_box(&broken))));
    });

    group.finish();
}

criterion_group!(benches, bench_parse_links);
criterion_main!(benches);
