// File: crates/demo/src/main.rs
// Summary: Demo loads series from CSV (or a built-in sample) and renders chart PNGs,
// including a simulated touch drag with the value popup.

use anyhow::{Context, Result};
use ridgeline_core::{
    Chart, ChartDataSource, Color, Point, Size, TouchController, TouchPhase,
};
use ridgeline_render_skia::SkiaRenderer;
use std::path::{Path, PathBuf};

/// In-memory data source: one `Vec` per series, alternating red/blue strokes.
struct VecData {
    series: Vec<Vec<f64>>,
}

impl VecData {
    fn sample() -> Self {
        Self {
            series: vec![
                vec![15.0, 22.0, 7.0, 17.0, 31.0],
                vec![11.0, 14.0, 2.0, -5.0, 27.0],
            ],
        }
    }
}

impl ChartDataSource for VecData {
    fn series_count(&self) -> usize {
        self.series.len()
    }
    fn values_for_series(&self, index: usize) -> Vec<f64> {
        self.series[index].clone()
    }
    fn color_for_series(&self, index: usize) -> Option<Color> {
        Some(if index % 2 == 0 { Color::RED } else { Color::BLUE })
    }
    fn name_for_series(&self, index: usize) -> Option<String> {
        Some(format!("series {index}"))
    }
}

fn main() -> Result<()> {
    // Accept a CSV path from the CLI (one column per series) or fall back
    // to the built-in two-series sample.
    let data = match std::env::args().nth(1) {
        Some(raw) => {
            let path = PathBuf::from(&raw);
            let data = load_columns_csv(&path)
                .with_context(|| format!("failed to load CSV '{}'", path.display()))?;
            println!("Using input file: {} ({} series)", path.display(), data.series.len());
            data
        }
        None => {
            println!("No input file given; using the built-in sample");
            VecData::sample()
        }
    };

    if data.series.iter().all(|s| s.is_empty()) {
        anyhow::bail!("no samples loaded — check the CSV contents.");
    }

    let renderer = SkiaRenderer::new();
    let bounds = Size::new(640.0, 400.0);
    let background = Color::rgb(250, 250, 252);

    // 1) Plain lines with dots and value labels (the defaults).
    let chart = Chart::new(Box::new(data));
    let frame = chart.layout(bounds, renderer.text_measurer());
    let scene = frame.scene(renderer.text_measurer());
    let out = Path::new("out/lines.png");
    renderer.render_to_png(&scene, bounds, background, out)?;
    println!("Wrote {}", out.display());

    // 2) Decorated: left labels plus both grids.
    let mut chart = chart;
    chart.options.show_left_labels = true;
    chart.options.show_horizontal_grid = true;
    chart.options.set_grid_y_spacing(40.0);
    let frame = chart.layout(bounds, renderer.text_measurer());
    let scene = frame.scene(renderer.text_measurer());
    let out = Path::new("out/lines_decorated.png");
    renderer.render_to_png(&scene, bounds, background, out)?;
    println!("Wrote {}", out.display());

    // 3) Simulated touch drag with the popup overlay.
    chart.options.show_popup_on_touch = true;
    chart.options.popup_background = Color::rgba(255, 255, 255, 230);
    let frame = chart.layout(bounds, renderer.text_measurer());
    let scene = frame.scene(renderer.text_measurer());

    let mut touch = TouchController::new();
    let mut popup = None;
    for (i, step) in [0.15f32, 0.40, 0.65, 0.90].iter().enumerate() {
        let point = Point::new(bounds.width * step, bounds.height * 0.4);
        let phase = if i == 0 { TouchPhase::Began } else { TouchPhase::Moved };
        popup = touch.handle(&frame, phase, point, renderer.text_measurer());
        let values = frame.values_at(frame.clamp_touch(point).x);
        println!(
            "touch x = {:6.1} -> {}",
            point.x,
            values
                .iter()
                .map(|v| format!("{v:.2}"))
                .collect::<Vec<_>>()
                .join(", ")
        );
    }

    let bytes = renderer.render_with_popup_to_png_bytes(&scene, popup.as_ref(), bounds, background)?;
    let out = Path::new("out/lines_popup.png");
    if let Some(parent) = out.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(out, bytes)?;
    println!("Wrote {}", out.display());

    touch.handle(&frame, TouchPhase::Ended, Point::new(0.0, 0.0), renderer.text_measurer());
    Ok(())
}

/// Read a CSV where every column is one series. A non-numeric first row is
/// treated as a header and skipped.
fn load_columns_csv(path: &Path) -> Result<VecData> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)?;

    let mut series: Vec<Vec<f64>> = Vec::new();
    for (row_index, record) in reader.records().enumerate() {
        let record = record?;
        let parsed: Vec<Option<f64>> = record.iter().map(|f| f.parse::<f64>().ok()).collect();
        if row_index == 0 && parsed.iter().any(|v| v.is_none()) {
            continue; // header row
        }
        for (column, value) in parsed.into_iter().enumerate() {
            if series.len() <= column {
                series.resize_with(column + 1, Vec::new);
            }
            if let Some(value) = value {
                series[column].push(value);
            }
        }
    }
    Ok(VecData { series })
}
