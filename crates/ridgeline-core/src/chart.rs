// File: crates/ridgeline-core/src/chart.rs
// Summary: Chart widget: options, per-render frame snapshot, and scene composition.

use crate::datasource::ChartDataSource;
use crate::scale::{max_sample_count, point_for_sample, SampleScale, ValueScale};
use crate::scene::{Dot, Polyline, Scene, Segment, TextLabel};
use crate::text::{format_value, TextMeasurer, LABEL_FONT_SIZE};
use crate::types::{Color, Point, Size, MIN_GRID_SPACING};

/// Padding between the widest left label and the chart area.
const LEFT_LABEL_PADDING: f32 = 20.0;
/// Dot marker radius.
const DOT_RADIUS: f32 = 2.0;
/// Series and grid stroke width.
const STROKE_WIDTH: f32 = 1.0;

/// Widget configuration. Grid spacings clamp to [`MIN_GRID_SPACING`] on
/// write so grid loops can never degenerate.
#[derive(Clone, Debug)]
pub struct ChartOptions {
    /// Stroke color for series without a data-source color.
    pub default_line_color: Color,
    /// Show value ticks along the left edge.
    pub show_left_labels: bool,
    pub grid_color: Color,
    pub show_vertical_grid: bool,
    grid_x_spacing: f32,
    pub show_horizontal_grid: bool,
    grid_y_spacing: f32,
    /// Show a value label next to every point.
    pub show_values: bool,
    /// Show a dot marker on every point.
    pub show_dots: bool,
    /// Track touches with a value popup.
    pub show_popup_on_touch: bool,
    pub popup_background: Color,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            default_line_color: Color::BLACK,
            show_left_labels: false,
            grid_color: Color::LIGHT_GRAY,
            show_vertical_grid: true,
            grid_x_spacing: 60.0,
            show_horizontal_grid: false,
            grid_y_spacing: 60.0,
            show_values: true,
            show_dots: true,
            show_popup_on_touch: false,
            popup_background: Color::CLEAR,
        }
    }
}

impl ChartOptions {
    pub fn grid_x_spacing(&self) -> f32 {
        self.grid_x_spacing
    }

    /// Distance between vertical grid lines, clamped to the minimum.
    pub fn set_grid_x_spacing(&mut self, spacing: f32) {
        self.grid_x_spacing = spacing.max(MIN_GRID_SPACING);
    }

    pub fn grid_y_spacing(&self) -> f32 {
        self.grid_y_spacing
    }

    /// Distance between horizontal grid lines, clamped to the minimum.
    pub fn set_grid_y_spacing(&mut self, spacing: f32) {
        self.grid_y_spacing = spacing.max(MIN_GRID_SPACING);
    }
}

/// The chart widget. Holds the injected data source and configuration;
/// every render cycle snapshots both into a [`ChartFrame`].
pub struct Chart {
    pub options: ChartOptions,
    source: Box<dyn ChartDataSource>,
}

impl Chart {
    pub fn new(source: Box<dyn ChartDataSource>) -> Self {
        Self { options: ChartOptions::default(), source }
    }

    pub fn with_options(source: Box<dyn ChartDataSource>, options: ChartOptions) -> Self {
        Self { options, source }
    }

    /// Snapshot the data source and compute scales for one render cycle.
    ///
    /// Everything downstream (scene building, touch queries) works off the
    /// returned frame, so a query mid-gesture is answered consistently
    /// against the data that was drawn. Hosts call this again whenever the
    /// data or the bounds change (e.g. on an orientation change).
    pub fn layout(&self, bounds: Size, text: &dyn TextMeasurer) -> ChartFrame {
        let count = self.source.series_count();
        let mut series = Vec::with_capacity(count);
        let mut colors = Vec::with_capacity(count);
        for index in 0..count {
            series.push(self.source.values_for_series(index));
            colors.push(
                self.source
                    .color_for_series(index)
                    .unwrap_or(self.options.default_line_color),
            );
        }

        // The value scale spans the full view height; only the horizontal
        // domain shrinks when left labels claim a margin.
        let ys = ValueScale::from_series(&series, bounds.height);
        let left_margin = if self.options.show_left_labels {
            let max_label = format_value(ys.adjusted_max());
            text.measure(&max_label, LABEL_FONT_SIZE).width + LEFT_LABEL_PADDING
        } else {
            0.0
        };
        let xs = SampleScale::from_layout(
            max_sample_count(&series),
            bounds.width - left_margin,
            left_margin,
        );

        ChartFrame { bounds, options: self.options.clone(), series, colors, xs, ys }
    }
}

/// Immutable per-render snapshot: series values, resolved colors, and the
/// two scales. Owned by the caller; rebuilt from scratch each cycle.
#[derive(Clone, Debug)]
pub struct ChartFrame {
    pub bounds: Size,
    pub options: ChartOptions,
    pub series: Vec<Vec<f64>>,
    pub colors: Vec<Color>,
    pub xs: SampleScale,
    pub ys: ValueScale,
}

impl ChartFrame {
    /// Compose the display list: left labels, grid, then one polyline per
    /// series with optional dots and value labels.
    pub fn scene(&self, text: &dyn TextMeasurer) -> Scene {
        let mut scene = Scene::new();
        if self.options.show_left_labels {
            self.push_left_labels(&mut scene, text);
        }
        self.push_grid(&mut scene);
        self.push_lines(&mut scene, text);
        scene
    }

    /// Interpolated per-series values at a touch x (see [`crate::popup`]).
    pub fn values_at(&self, touch_x: f32) -> Vec<f64> {
        crate::popup::values_at(&self.series, touch_x, &self.xs)
    }

    /// Clamp a touch into the chart rectangle: x into
    /// `[left_margin, width]`, y into `[0, height]`.
    pub fn clamp_touch(&self, touch: Point) -> Point {
        let x = if touch.x < self.xs.left_px {
            self.xs.left_px
        } else if touch.x > self.bounds.width {
            self.bounds.width
        } else {
            touch.x
        };
        let y = if touch.y < 0.0 {
            0.0
        } else if touch.y > self.bounds.height {
            self.bounds.height
        } else {
            touch.y
        };
        Point::new(x, y)
    }

    fn push_left_labels(&self, scene: &mut Scene, text: &dyn TextMeasurer) {
        let adjusted_max = self.ys.adjusted_max();
        let label_height = text
            .measure(&format_value(adjusted_max), LABEL_FONT_SIZE)
            .height;

        let label_count = self.bounds.height / self.options.grid_y_spacing();
        let value_per_label = adjusted_max / label_count as f64;

        let mut label_index: f32 = 0.0;
        while label_index < label_count {
            let value = value_per_label * label_index as f64;
            let origin = Point::new(
                0.0,
                self.bounds.height - label_height / 2.0 - label_index * self.options.grid_y_spacing(),
            );
            scene.labels.push(TextLabel {
                text: format_value(value),
                origin,
                color: self.options.grid_color,
            });
            label_index += 1.0;
        }
    }

    fn push_grid(&self, scene: &mut Scene) {
        let color = self.options.grid_color;

        if self.options.show_vertical_grid {
            let mut x = self.xs.left_px;
            while x < self.bounds.width {
                scene.grid.push(Segment {
                    from: Point::new(x, 0.0),
                    to: Point::new(x, self.bounds.height),
                    color,
                });
                x += self.options.grid_x_spacing();
            }
        }

        if self.options.show_horizontal_grid {
            let mut y = self.bounds.height;
            while y > 0.0 {
                scene.grid.push(Segment {
                    from: Point::new(self.xs.left_px, y),
                    to: Point::new(self.bounds.width, y),
                    color,
                });
                y -= self.options.grid_y_spacing();
            }
        }
    }

    fn push_lines(&self, scene: &mut Scene, text: &dyn TextMeasurer) {
        for (line_index, values) in self.series.iter().enumerate() {
            let color = self.colors[line_index];
            let mut points = Vec::with_capacity(values.len());

            for index in 0..values.len() {
                let point = point_for_sample(values, index, &self.xs, &self.ys);
                points.push(point);

                if self.options.show_dots {
                    scene.dots.push(Dot { center: point, radius: DOT_RADIUS, color });
                }
                if self.options.show_values {
                    scene.labels.push(self.value_label(values[index], point, color, text));
                }
            }

            scene.lines.push(Polyline { points, color, width: STROKE_WIDTH });
        }
    }

    /// Value label for one point, nudged back inside the view when it
    /// would escape the right or bottom edge.
    fn value_label(
        &self,
        value: f64,
        point: Point,
        color: Color,
        text: &dyn TextMeasurer,
    ) -> TextLabel {
        let string = format_value(value);
        let string_size = text.measure(&string, LABEL_FONT_SIZE);

        let mut origin = point;
        if origin.x + string_size.width >= self.bounds.width - self.xs.left_px {
            origin.x = self.bounds.width - self.xs.left_px - string_size.width;
        }
        if origin.y + string_size.height >= self.bounds.height {
            origin.y = self.bounds.height - string_size.height;
        }

        TextLabel { text: string, origin, color }
    }
}
