// File: crates/ridgeline-render-skia/tests/render.rs
// Purpose: Basic end-to-end render smoke test writing and decoding a PNG.

use ridgeline_core::{Chart, ChartDataSource, Color, Size};
use ridgeline_render_skia::SkiaRenderer;

struct Zigzag;

impl ChartDataSource for Zigzag {
    fn series_count(&self) -> usize {
        1
    }
    fn values_for_series(&self, _index: usize) -> Vec<f64> {
        vec![0.0, 2.0, 1.0, 3.5, 2.5]
    }
}

#[test]
fn render_smoke_png() {
    let renderer = SkiaRenderer::new();
    let chart = Chart::new(Box::new(Zigzag));
    let bounds = Size::new(320.0, 200.0);

    let frame = chart.layout(bounds, renderer.text_measurer());
    let scene = frame.scene(renderer.text_measurer());

    let bytes = renderer
        .render_to_png_bytes(&scene, bounds, Color::rgb(250, 250, 252))
        .expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");

    let decoded = image::load_from_memory(&bytes).expect("decodable PNG");
    assert_eq!(decoded.width(), 320);
    assert_eq!(decoded.height(), 200);

    // Also verify the file-writing API works
    let out = std::path::PathBuf::from("target/test_out/smoke.png");
    chart_render_to_file(&renderer, &scene, bounds, &out);
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");
}

fn chart_render_to_file(
    renderer: &SkiaRenderer,
    scene: &ridgeline_core::Scene,
    bounds: Size,
    out: &std::path::Path,
) {
    renderer
        .render_to_png(scene, bounds, Color::rgb(250, 250, 252), out)
        .expect("render should succeed");
}
