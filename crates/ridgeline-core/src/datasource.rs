// File: crates/ridgeline-core/src/datasource.rs
// Summary: Data-provider trait supplying series values, colors, and names.

use crate::types::Color;

/// Supplies chart data. Implementations must be cheap: every method is
/// called synchronously once per layout, and layouts can happen many times
/// per second during a drag gesture.
pub trait ChartDataSource {
    /// Number of series to draw.
    fn series_count(&self) -> usize;

    /// Samples for one series, in drawing order. Series may have
    /// different lengths; the widget spans the longest one.
    fn values_for_series(&self, index: usize) -> Vec<f64>;

    /// Stroke color for one series. `None` falls back to the configured
    /// default line color.
    fn color_for_series(&self, _index: usize) -> Option<Color> {
        None
    }

    /// Display name for one series. Unused by the numeric core; only
    /// consulted when a host renders a legend.
    fn name_for_series(&self, _index: usize) -> Option<String> {
        None
    }
}
