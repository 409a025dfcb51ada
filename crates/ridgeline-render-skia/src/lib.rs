// File: crates/ridgeline-render-skia/src/lib.rs
// Summary: Skia CPU raster backend: strokes core scenes and popups, encodes PNG.

use skia_safe as skia;
use skia::textlayout::{FontCollection, ParagraphBuilder, ParagraphStyle, TextStyle};

use ridgeline_core::{Color, PopupFrame, Scene, Size, TextLabel, TextMeasurer};

/// Failures raised while rasterizing a scene.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("failed to create raster surface ({width}x{height})")]
    Surface { width: i32, height: i32 },
    #[error("PNG encode failed")]
    Encode,
}

fn to_skia(color: Color) -> skia::Color {
    skia::Color::from_argb(color.a, color.r, color.g, color.b)
}

/// Text measurer backed by Skia textlayout over the system font manager.
pub struct SkiaTextMeasurer {
    fonts: FontCollection,
}

impl SkiaTextMeasurer {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn layout(&self, text: &str, size: f32, color: skia::Color) -> skia::textlayout::Paragraph {
        let pstyle = ParagraphStyle::new();
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        let mut style = TextStyle::new();
        style.set_font_size(size.max(1.0));
        style.set_color(color);
        style.set_font_families(&["Segoe UI", "Arial", "Helvetica", "Roboto", "DejaVu Sans", "sans-serif"]);
        builder.push_style(&style);
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    fn draw(&self, canvas: &skia::Canvas, label: &TextLabel, size: f32, offset: (f32, f32)) {
        let mut paragraph = self.layout(&label.text, size, to_skia(label.color));
        paragraph.paint(canvas, (label.origin.x + offset.0, label.origin.y + offset.1));
    }
}

impl TextMeasurer for SkiaTextMeasurer {
    fn measure(&self, text: &str, size: f32) -> Size {
        let paragraph = self.layout(text, size, skia::Color::from_argb(0, 0, 0, 0));
        Size::new(paragraph.longest_line(), paragraph.height())
    }
}

impl Default for SkiaTextMeasurer {
    fn default() -> Self {
        Self::new()
    }
}

/// Rasterizes core scenes onto CPU surfaces. Holds the font collection so
/// repeated renders share shaped-font caches.
pub struct SkiaRenderer {
    text: SkiaTextMeasurer,
}

impl SkiaRenderer {
    pub fn new() -> Self {
        Self { text: SkiaTextMeasurer::new() }
    }

    /// Measurer to pass into core layout so label metrics match what gets
    /// painted.
    pub fn text_measurer(&self) -> &SkiaTextMeasurer {
        &self.text
    }

    /// Render a scene to PNG bytes on a CPU raster surface.
    pub fn render_to_png_bytes(
        &self,
        scene: &Scene,
        bounds: Size,
        background: Color,
    ) -> Result<Vec<u8>, RenderError> {
        self.render_with_popup_to_png_bytes(scene, None, bounds, background)
    }

    /// Render a scene and an optional popup overlay to PNG bytes.
    pub fn render_with_popup_to_png_bytes(
        &self,
        scene: &Scene,
        popup: Option<&PopupFrame>,
        bounds: Size,
        background: Color,
    ) -> Result<Vec<u8>, RenderError> {
        let (width, height) = (bounds.width.round() as i32, bounds.height.round() as i32);
        let mut surface = skia::surfaces::raster_n32_premul((width, height))
            .ok_or(RenderError::Surface { width, height })?;
        let canvas = surface.canvas();

        canvas.clear(to_skia(background));
        self.draw_scene(canvas, scene);
        if let Some(popup) = popup {
            self.draw_popup(canvas, popup);
        }

        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or(RenderError::Encode)?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render a scene to a PNG file, creating parent directories.
    pub fn render_to_png(
        &self,
        scene: &Scene,
        bounds: Size,
        background: Color,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> anyhow::Result<()> {
        let bytes = self.render_to_png_bytes(scene, bounds, background)?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_png_path, bytes)?;
        Ok(())
    }

    /// Stroke a scene in paint order: grid, lines, dots, labels.
    pub fn draw_scene(&self, canvas: &skia::Canvas, scene: &Scene) {
        let mut grid_paint = skia::Paint::default();
        grid_paint.set_anti_alias(true);
        grid_paint.set_style(skia::paint::Style::Stroke);
        grid_paint.set_stroke_width(1.0);
        for segment in &scene.grid {
            grid_paint.set_color(to_skia(segment.color));
            canvas.draw_line(
                (segment.from.x, segment.from.y),
                (segment.to.x, segment.to.y),
                &grid_paint,
            );
        }

        let mut stroke = skia::Paint::default();
        stroke.set_anti_alias(true);
        stroke.set_style(skia::paint::Style::Stroke);
        for line in &scene.lines {
            if line.points.is_empty() {
                continue;
            }
            let mut path = skia::Path::new();
            path.move_to((line.points[0].x, line.points[0].y));
            for point in line.points.iter().skip(1) {
                path.line_to((point.x, point.y));
            }
            stroke.set_stroke_width(line.width);
            stroke.set_color(to_skia(line.color));
            canvas.draw_path(&path, &stroke);
        }

        let mut fill = skia::Paint::default();
        fill.set_anti_alias(true);
        fill.set_style(skia::paint::Style::Fill);
        for dot in &scene.dots {
            fill.set_color(to_skia(dot.color));
            canvas.draw_circle((dot.center.x, dot.center.y), dot.radius, &fill);
        }

        for label in &scene.labels {
            self.text.draw(canvas, label, ridgeline_core::LABEL_FONT_SIZE, (0.0, 0.0));
        }
    }

    /// Paint a popup overlay: background rect, then its stacked labels
    /// offset by the popup origin.
    pub fn draw_popup(&self, canvas: &skia::Canvas, popup: &PopupFrame) {
        let mut fill = skia::Paint::default();
        fill.set_anti_alias(true);
        fill.set_style(skia::paint::Style::Fill);
        fill.set_color(to_skia(popup.background));
        let rect = skia::Rect::from_xywh(
            popup.origin.x,
            popup.origin.y,
            popup.size.width,
            popup.size.height,
        );
        canvas.draw_rect(rect, &fill);

        for label in &popup.labels {
            self.text.draw(
                canvas,
                label,
                ridgeline_core::LABEL_FONT_SIZE,
                (popup.origin.x, popup.origin.y),
            );
        }
    }
}

impl Default for SkiaRenderer {
    fn default() -> Self {
        Self::new()
    }
}
