// File: crates/ridgeline-core/src/scale.rs
// Summary: Sample (X) and Value (Y) scale transforms mapping data to pixel space.

use crate::types::Point;

/// Horizontal scale: evenly spaces sample indices across the drawable width,
/// starting after the left label margin.
#[derive(Clone, Copy, Debug)]
pub struct SampleScale {
    pub left_px: f32,
    pub spacing: f32,
}

impl SampleScale {
    /// Build from the widest series. With fewer than two samples the
    /// spacing is 0: everything lands on the left margin instead of a
    /// non-finite division result.
    pub fn from_layout(max_samples: usize, drawable_width: f32, left_px: f32) -> Self {
        let spacing = if max_samples > 1 {
            drawable_width / (max_samples - 1) as f32
        } else {
            0.0
        };
        Self { left_px, spacing }
    }

    #[inline]
    pub fn to_px(&self, index: usize) -> f32 {
        self.left_px + index as f32 * self.spacing
    }

    /// Sample index at or left of `px`. Zero-spacing collapses to index 0.
    #[inline]
    pub fn index_below(&self, px: f32) -> usize {
        if self.spacing <= 0.0 {
            return 0;
        }
        (((px - self.left_px) / self.spacing).floor()).max(0.0) as usize
    }
}

/// Vertical scale. Negative ranges are folded into a single non-negative
/// display range: the divisor is `max + min.abs()`, not `max - min`.
#[derive(Clone, Copy, Debug)]
pub struct ValueScale {
    pub px_per_unit: f64,
    pub max: f64,
    pub min: f64,
}

impl ValueScale {
    /// Scan every sample of every series for the raw value range. Empty
    /// input yields a zero range; a zero adjusted range yields a zero
    /// px-per-unit, collapsing all points onto y = 0.
    pub fn from_series(series: &[Vec<f64>], drawable_height: f32) -> Self {
        let mut max = series.first().and_then(|s| s.first()).copied().unwrap_or(0.0);
        let mut min = max;
        for values in series {
            for &v in values {
                if v > max {
                    max = v;
                }
                if v < min {
                    min = v;
                }
            }
        }
        let adjusted = max + min.abs();
        let px_per_unit = if adjusted == 0.0 {
            0.0
        } else {
            drawable_height as f64 / adjusted
        };
        Self { px_per_unit, max, min }
    }

    /// Display range after folding negatives.
    #[inline]
    pub fn adjusted_max(&self) -> f64 {
        self.max + self.min.abs()
    }

    /// Pixel y for a value. Inverts against the raw max so larger values
    /// plot nearer the top; with a negative min the result can leave the
    /// chart rect (the divisor uses the adjusted max). Long-standing
    /// behavior, kept.
    #[inline]
    pub fn to_px(&self, value: f64) -> f32 {
        ((self.max - value - self.min.abs()) * self.px_per_unit) as f32
    }
}

/// Widest series length; the shared horizontal sample domain.
pub fn max_sample_count(series: &[Vec<f64>]) -> usize {
    series.iter().map(|s| s.len()).max().unwrap_or(0)
}

/// Pixel point for one sample. Pure function of its inputs.
#[inline]
pub fn point_for_sample(values: &[f64], index: usize, xs: &SampleScale, ys: &ValueScale) -> Point {
    Point::new(xs.to_px(index), ys.to_px(values[index]))
}
