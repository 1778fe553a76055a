use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pipe_profile_core::{InstrumentGeometry, Offset, ProfileCorrector, ScanTable};

fn scan_table(corrector: &ProfileCorrector, rows: usize) -> ScanTable {
    let radius = corrector.geometry().nominal_radius();
    let offset = Offset::new(0.7, -0.4);
    let rows: Vec<Vec<f64>> = (0..rows)
        .map(|r| {
            corrector
                .basis()
                .directions()
                .iter()
                .enumerate()
                .map(|(i, d)| radius - offset.projection(d) + 0.01 * ((i + r) % 5) as f64)
                .collect()
        })
        .collect();
    ScanTable::from_rows(corrector.basis().len(), rows).expect("table")
}

fn bench_run(c: &mut Criterion) {
    let corrector = ProfileCorrector::new(InstrumentGeometry::default()).expect("corrector");
    let mut group = c.benchmark_group("estimate_and_correct");
    for rows in [100usize, 10_000, 100_000] {
        let table = scan_table(&corrector, rows);
        group.bench_with_input(BenchmarkId::from_parameter(rows), &table, |b, table| {
            b.iter(|| corrector.run(black_box(table)).expect("run"))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_run);
criterion_main!(benches);
