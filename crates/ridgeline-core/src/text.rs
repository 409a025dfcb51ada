// File: crates/ridgeline-core/src/text.rs
// Summary: Text measurement seam and numeric label formatting.

use crate::types::Size;

/// Font size used for every label the widget emits.
pub const LABEL_FONT_SIZE: f32 = 12.0;

/// Measures rendered text. Backends implement this over their font stack;
/// headless hosts and tests can use [`CharCellMeasurer`].
pub trait TextMeasurer {
    fn measure(&self, text: &str, size: f32) -> Size;
}

/// Deterministic fixed-cell metrics: each char is 0.6em wide, lines are
/// 1.2em tall. Close enough for layout decisions when no font stack is
/// available.
#[derive(Clone, Copy, Debug, Default)]
pub struct CharCellMeasurer;

impl TextMeasurer for CharCellMeasurer {
    fn measure(&self, text: &str, size: f32) -> Size {
        Size::new(text.chars().count() as f32 * size * 0.6, size * 1.2)
    }
}

/// Whole values print without decimals, everything else with two.
pub fn format_value(value: f64) -> String {
    if value == value.floor() {
        format!("{value:.0}")
    } else {
        format!("{value:.2}")
    }
}
