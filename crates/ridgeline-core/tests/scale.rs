// File: crates/ridgeline-core/tests/scale.rs
// Purpose: Validate the coordinate mapper over normal and degenerate input.

use ridgeline_core::{max_sample_count, point_for_sample, SampleScale, ValueScale};

const EPS: f32 = 1e-4;

#[test]
fn endpoints_land_on_margin_and_right_edge() {
    // 5 samples across a 260 px drawable area behind a 40 px margin.
    let xs = SampleScale::from_layout(5, 260.0, 40.0);
    let ys = ValueScale::from_series(&[vec![1.0, 2.0, 3.0, 4.0, 5.0]], 100.0);
    let values = vec![1.0, 2.0, 3.0, 4.0, 5.0];

    let first = point_for_sample(&values, 0, &xs, &ys);
    let last = point_for_sample(&values, 4, &xs, &ys);
    assert!((first.x - 40.0).abs() < EPS, "first sample at the margin, got {}", first.x);
    assert!((last.x - 300.0).abs() < EPS, "last sample at the right edge, got {}", last.x);
}

#[test]
fn single_sample_collapses_spacing_to_zero() {
    let xs = SampleScale::from_layout(1, 300.0, 10.0);
    assert_eq!(xs.spacing, 0.0);
    assert_eq!(xs.to_px(0), 10.0);
    assert_eq!(xs.to_px(7), 10.0);
    // Zero spacing always brackets index 0.
    assert_eq!(xs.index_below(123.0), 0);
}

#[test]
fn empty_input_yields_zero_scales() {
    let xs = SampleScale::from_layout(0, 300.0, 0.0);
    assert_eq!(xs.spacing, 0.0);

    let ys = ValueScale::from_series(&[], 200.0);
    assert_eq!(ys.max, 0.0);
    assert_eq!(ys.min, 0.0);
    assert_eq!(ys.px_per_unit, 0.0);
    assert_eq!(ys.to_px(42.0), 0.0);
}

#[test]
fn all_zero_range_yields_zero_px_per_unit() {
    let ys = ValueScale::from_series(&[vec![0.0, 0.0, 0.0]], 200.0);
    assert_eq!(ys.adjusted_max(), 0.0);
    assert_eq!(ys.px_per_unit, 0.0);
    assert_eq!(ys.to_px(0.0), 0.0);
}

#[test]
fn negative_values_fold_into_display_range() {
    let series = vec![vec![15.0, 22.0, 7.0, 17.0, 31.0], vec![11.0, 14.0, 2.0, -5.0, 27.0]];
    let ys = ValueScale::from_series(&series, 200.0);

    assert_eq!(ys.max, 31.0);
    assert_eq!(ys.min, -5.0);
    assert_eq!(ys.adjusted_max(), 36.0);
    assert!((ys.px_per_unit - 200.0 / 36.0).abs() < 1e-9);
}

#[test]
fn larger_values_plot_nearer_the_top() {
    let ys = ValueScale::from_series(&[vec![0.0, 10.0]], 100.0);
    assert!(ys.to_px(10.0) < ys.to_px(0.0));
    assert!((ys.to_px(10.0) - 0.0).abs() < EPS);
    assert!((ys.to_px(0.0) - 100.0).abs() < EPS);
}

#[test]
fn widest_series_spans_the_domain() {
    let series = vec![vec![1.0], vec![1.0, 2.0, 3.0], vec![]];
    assert_eq!(max_sample_count(&series), 3);
    assert_eq!(max_sample_count(&[]), 0);
}
