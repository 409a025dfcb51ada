// File: crates/ridgeline-core/benches/scene_bench.rs
// Purpose: Benchmark layout + scene composition for large sample counts.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ridgeline_core::{Chart, ChartDataSource, CharCellMeasurer, Size};

struct SineWave {
    n: usize,
}

impl ChartDataSource for SineWave {
    fn series_count(&self) -> usize {
        2
    }
    fn values_for_series(&self, index: usize) -> Vec<f64> {
        let phase = index as f64 * 0.5;
        (0..self.n)
            .map(|i| (i as f64 * 0.01 + phase).sin() * 10.0 + i as f64 * 0.0001)
            .collect()
    }
}

fn bench_scene(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout_and_scene");
    for &n in &[10_000usize, 50_000usize] {
        group.bench_function(format!("samples_{n}"), |b| {
            let mut chart = Chart::new(Box::new(SineWave { n }));
            chart.options.show_dots = false;
            chart.options.show_values = false;
            let bounds = Size::new(800.0, 500.0);
            b.iter(|| {
                let frame = chart.layout(bounds, &CharCellMeasurer);
                let scene = frame.scene(&CharCellMeasurer);
                black_box(scene);
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_scene);
criterion_main!(benches);
