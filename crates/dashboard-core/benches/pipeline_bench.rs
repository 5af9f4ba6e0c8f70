use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use dashboard_core::{analyze, build_chart, export_csv, generate, ChartMode};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline");
    for &n in &[50usize, 500usize] {
        group.bench_with_input(BenchmarkId::new("generate", n), &n, |b, &n| {
            let mut rng = StdRng::seed_from_u64(1);
            b.iter(|| black_box(generate(n, &mut rng)));
        });

        let ds = generate(n, &mut StdRng::seed_from_u64(2));
        group.bench_with_input(BenchmarkId::new("analyze", n), &ds, |b, ds| {
            b.iter(|| black_box(analyze(ds)));
        });
        for mode in ChartMode::ALL {
            group.bench_with_input(BenchmarkId::new(format!("chart_{mode}"), n), &ds, |b, ds| {
                b.iter(|| black_box(build_chart(mode, ds, 30)));
            });
        }
        group.bench_with_input(BenchmarkId::new("export_csv", n), &ds, |b, ds| {
            b.iter(|| black_box(export_csv(ds)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_pipeline);
criterion_main!(benches);
