// File: crates/ridgeline-core/src/lib.rs
// Summary: Core library entry point; exports the widget API for chart layout and touch.

pub mod chart;
pub mod datasource;
pub mod popup;
pub mod scale;
pub mod scene;
pub mod text;
pub mod touch;
pub mod types;

pub use chart::{Chart, ChartFrame, ChartOptions};
pub use datasource::ChartDataSource;
pub use popup::{layout_popup, place_popup, values_at, PopupLayout};
pub use scale::{max_sample_count, point_for_sample, SampleScale, ValueScale};
pub use scene::{Dot, Polyline, Scene, Segment, TextLabel};
pub use text::{format_value, CharCellMeasurer, TextMeasurer, LABEL_FONT_SIZE};
pub use touch::{PopupFrame, TouchController, TouchPhase};
pub use types::{Color, Point, Rect, Size, MIN_GRID_SPACING};
