//! Benchmarks for route resolution and detail lookup
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use folio::catalog::{Dataset, Project};
use folio::detail::DetailView;
use folio::routing::SiteRouter;

fn create_dataset(count: usize) -> Dataset {
    Dataset::from_projects(
        (0..count)
            .map(|i| Project::new(format!("project-{}", i), format!("Project {}", i)).year(2020))
            .collect(),
    )
}

fn bench_routing(c: &mut Criterion) {
    let mut group = c.benchmark_group("routing");
    let router = SiteRouter::new();

    for path in ["/", "/projects", "/projects/trex", "/projects/t%20rex?tab=1", "/missing"] {
        group.bench_function(format!("resolve {}", path), |b| {
            b.iter(|| router.resolve(black_box(path)))
        });
    }

    group.finish();
}

fn bench_detail(c: &mut Criterion) {
    let mut group = c.benchmark_group("detail");

    for size in [10, 100, 1000] {
        let dataset = create_dataset(size);
        let last = format!("project-{}", size - 1);

        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(format!("resolve_last_{}", size), |b| {
            b.iter(|| {
                let mut view = DetailView::new();
                view.resolve(black_box(&dataset), black_box(&last));
                view
            })
        });

        group.bench_function(format!("cards_{}", size), |b| {
            b.iter(|| folio::cards(black_box(&dataset)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_routing, bench_detail);
criterion_main!(benches);
