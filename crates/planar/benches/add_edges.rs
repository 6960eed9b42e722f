use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use planar::{Graph, REJECT_THRESHOLD, add_edges, from_fn, parse_sequence};
use std::hint::black_box;
use std::time::Duration;

fn synthetic_score(l: &u32, r: &u32, distance: usize) -> f64 {
    // Cheap deterministic hash so ties and rejections both occur.
    let h = l.wrapping_mul(2_654_435_761) ^ r.wrapping_mul(40_503);
    if h % 13 == 0 {
        return REJECT_THRESHOLD;
    }
    f64::from(h % 97) / (distance as f64)
}

fn bench_add_edges(c: &mut Criterion) {
    let mut group = c.benchmark_group("add_edges");
    group.measurement_time(Duration::from_secs(5));
    for n in [16u32, 64, 128] {
        let items: Vec<u32> = (0..n).collect();
        let scorer = from_fn(synthetic_score);
        group.bench_with_input(BenchmarkId::new("unbounded", n), &items, |b, items| {
            b.iter(|| {
                let g = add_edges(&Graph::new(), black_box(items.as_slice()), &scorer, -1i64);
                black_box(g.len())
            })
        });
        group.bench_with_input(BenchmarkId::new("parse_sequence", n), &items, |b, items| {
            b.iter(|| {
                let g = parse_sequence(black_box(items.as_slice()), &scorer, -1i64);
                black_box(g.len())
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_add_edges);
criterion_main!(benches);
