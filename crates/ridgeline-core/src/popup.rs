// File: crates/ridgeline-core/src/popup.rs
// Summary: Touch popup query engine: interpolated values, label layout, placement.

use crate::scale::SampleScale;
use crate::scene::TextLabel;
use crate::text::{TextMeasurer, LABEL_FONT_SIZE};
use crate::types::{Color, Point, Size};

/// Popup contents never shrink below this width.
const MIN_POPUP_WIDTH: f32 = 50.0;

/// One interpolated value per series at a touch x, in input order.
///
/// The bracketing pair is `(from, from + 1)` with `from` the sample index
/// at or left of the touch. A series with no valid bracket (touch past its
/// last sample, or the series shorter than the widest one) contributes
/// `0.0`, not its last known value.
///
/// The interpolation fraction is measured from the chart origin, not the
/// label margin; with left labels enabled the fraction is shifted by that
/// margin. Kept as-is to reproduce the established numeric behavior.
pub fn values_at(series: &[Vec<f64>], touch_x: f32, xs: &SampleScale) -> Vec<f64> {
    let from = xs.index_below(touch_x);
    let from_px = from as f32 * xs.spacing;

    let mut values = Vec::with_capacity(series.len());
    for line in series {
        if from + 1 < line.len() {
            if xs.spacing > 0.0 {
                let from_value = line[from];
                let value_per_px = (line[from + 1] - from_value) / xs.spacing as f64;
                values.push(from_value + (touch_x - from_px) as f64 * value_per_px);
            } else {
                // Zero-width bracket: the touch sits on the sample itself.
                values.push(line[from]);
            }
        } else {
            values.push(0.0);
        }
    }
    values
}

/// Laid-out popup contents: one label per series, stacked top to bottom.
#[derive(Clone, Debug)]
pub struct PopupLayout {
    pub labels: Vec<TextLabel>,
    pub size: Size,
}

/// Stack one two-decimal label per value. The popup is as wide as its
/// widest label, never narrower than [`MIN_POPUP_WIDTH`], and as tall as
/// the labels it holds.
pub fn layout_popup(values: &[f64], colors: &[Color], measurer: &dyn TextMeasurer) -> PopupLayout {
    let mut labels = Vec::with_capacity(values.len());
    let mut y = 0.0f32;
    let mut width = MIN_POPUP_WIDTH;

    for (index, &value) in values.iter().enumerate() {
        let text = format!("{value:.2}");
        let text_size = measurer.measure(&text, LABEL_FONT_SIZE);
        if text_size.width > width {
            width = text_size.width;
        }
        labels.push(TextLabel {
            text,
            origin: Point::new(0.0, y),
            color: colors.get(index).copied().unwrap_or(Color::BLACK),
        });
        y += text_size.height;
    }

    PopupLayout { labels, size: Size::new(width, y) }
}

/// Popup origin near the touch, pulled back so it never extends past the
/// right or bottom edge. Not guarded against negative origins: a popup
/// larger than the bounds escapes the top/left instead (known limitation).
pub fn place_popup(touch: Point, popup: Size, bounds: Size) -> Point {
    let x = if touch.x + popup.width > bounds.width {
        bounds.width - popup.width
    } else {
        touch.x
    };
    let y = if touch.y + popup.height > bounds.height {
        bounds.height - popup.height
    } else {
        touch.y
    };
    Point::new(x, y)
}
