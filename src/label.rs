use crate::colour::{colours, Colour};
use crate::composite::blend_over;
use crate::encode::encode_png;
use crate::font::{Face, Font, GlyphMetrics};
use crate::layout::{baselines, fit, row_height_px, FitParameters, Offsets};
use crate::units::Pt;
use crate::WatermarkError;
use image::RgbaImage;
use std::sync::Arc;

/// The raster a label is drawn into. Created fresh for every label.
pub type LabelCanvas = RgbaImage;

/// How label text is drawn
#[derive(Debug, Clone, PartialEq)]
pub struct LabelStyle {
    pub foreground: Colour,
    pub background: Colour,
    pub dpi: f64,
    /// Baseline-to-baseline distance as a multiple of the font's pixel size
    pub row_spacing: f64,
    /// Rows start `horizontal` pixels from the left edge, which is also kept clear on
    /// the right while fitting; `vertical` is reserved off the label height
    pub text_offsets: Offsets,
}

impl Default for LabelStyle {
    fn default() -> Self {
        LabelStyle {
            foreground: colours::BLACK,
            background: colours::WHITE,
            dpi: 72.0,
            row_spacing: 1.0,
            text_offsets: Offsets::empty(),
        }
    }
}

/// Draw `rows` at `size` onto a fresh `width` x `height` canvas filled with the
/// background colour.
///
/// Every row is left aligned at the horizontal text offset. The first baseline is one
/// row height below the top edge and each following row moves down by another row
/// height; empty rows draw nothing but still take up their row.
pub fn render_label<M: GlyphMetrics, S: AsRef<str>>(
    rows: &[S],
    size: Pt,
    metrics: &M,
    style: &LabelStyle,
    width: u32,
    height: u32,
) -> LabelCanvas {
    let mut canvas = RgbaImage::from_pixel(width, height, style.background.into());

    let face = metrics.face(size, style.dpi);
    let row_height = row_height_px(size, style.dpi, style.row_spacing);
    for (row, baseline) in rows.iter().zip(baselines(rows.len(), row_height)) {
        draw_row(
            &mut canvas,
            &face,
            row.as_ref(),
            (style.text_offsets.horizontal, baseline),
            style.foreground,
        );
    }

    canvas
}

fn draw_row<F: Face>(canvas: &mut LabelCanvas, face: &F, text: &str, pen: (i32, i32), colour: Colour) {
    let (width, height) = (i64::from(canvas.width()), i64::from(canvas.height()));
    let (mut x, baseline) = (pen.0 as f32, pen.1);

    let mut previous: Option<char> = None;
    for ch in text.chars() {
        let Some(glyph) = face.glyph(ch) else {
            continue;
        };
        if let Some(left) = previous {
            x += face.kern(left, ch);
        }
        previous = Some(ch);

        let left = x.round() as i64 + i64::from(glyph.xmin);
        let top = i64::from(baseline) - i64::from(glyph.ymin) - glyph.height as i64;
        for (i, &coverage) in glyph.coverage.iter().enumerate() {
            if coverage == 0 {
                continue;
            }
            let px = left + (i % glyph.width) as i64;
            let py = top + (i / glyph.width) as i64;
            if px < 0 || py < 0 || px >= width || py >= height {
                continue;
            }

            let alpha = colour.a as f32 / 255.0 * coverage as f32 / 255.0;
            blend_over(canvas.get_pixel_mut(px as u32, py as u32), colour, alpha);
        }

        x += glyph.advance;
    }
}

/// Turns rows of text into encoded label images with a fixed font and style. The
/// font is shared, so a generator is cheap to clone and safe to use from many threads.
#[derive(Clone)]
pub struct LabelGenerator {
    font: Arc<Font>,
    style: LabelStyle,
    max_size: Pt,
}

impl LabelGenerator {
    /// Create a generator, rejecting styles that can't produce a layout (non-positive
    /// DPI or row spacing, or a non-positive size cap)
    pub fn new(font: Arc<Font>, style: LabelStyle, max_size: Pt) -> Result<Self, WatermarkError> {
        let generator = LabelGenerator {
            font,
            style,
            max_size,
        };
        generator.fit_parameters(0, 0).validate()?;
        Ok(generator)
    }

    pub fn font(&self) -> &Font {
        &self.font
    }

    pub fn style(&self) -> &LabelStyle {
        &self.style
    }

    pub fn max_size(&self) -> Pt {
        self.max_size
    }

    /// The fit constraints for a label of the given size
    pub fn fit_parameters(&self, width: u32, height: u32) -> FitParameters {
        FitParameters {
            box_width: width,
            box_height: height,
            row_spacing: self.style.row_spacing,
            dpi: self.style.dpi,
            max_size: self.max_size,
            offsets: self.style.text_offsets,
        }
    }

    /// The font size `rows` would be drawn at in a `width` x `height` label
    pub fn fit<S: AsRef<str>>(&self, rows: &[S], width: u32, height: u32) -> Pt {
        fit(rows, self.font.as_ref(), &self.fit_parameters(width, height))
    }

    /// Fit and draw `rows` into a `width` x `height` canvas
    pub fn render<S: AsRef<str>>(&self, rows: &[S], width: u32, height: u32) -> LabelCanvas {
        let size = self.fit(rows, width, height);
        render_label(rows, size, self.font.as_ref(), &self.style, width, height)
    }

    /// Fit, draw, and PNG-encode `rows` as a `width` x `height` label
    pub fn label_from_text<S: AsRef<str>>(
        &self,
        rows: &[S],
        width: u32,
        height: u32,
    ) -> Result<Vec<u8>, WatermarkError> {
        encode_png(&self.render(rows, width, height))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::fake::{BlockMetrics, UNMAPPED};
    use crate::layout::width_of_text;
    use image::Rgba;

    const FG: Rgba<u8> = Rgba([0, 0, 0, 255]);
    const BG: Rgba<u8> = Rgba([255, 255, 255, 255]);

    fn style() -> LabelStyle {
        LabelStyle {
            text_offsets: Offsets::new(4, 0),
            ..LabelStyle::default()
        }
    }

    #[test]
    fn empty_block_is_pure_background() {
        let rows: [&str; 0] = [];
        let canvas = render_label(&rows, Pt(10.0), &BlockMetrics, &style(), 30, 20);
        assert_eq!(canvas.dimensions(), (30, 20));
        assert!(canvas.pixels().all(|p| *p == BG));
    }

    #[test]
    fn rows_sit_on_evenly_spaced_baselines() {
        // 10pt at 72dpi: 10px rows, glyphs 5px wide and 7px tall
        let canvas = render_label(&["a", "", "aa"], Pt(10.0), &BlockMetrics, &style(), 40, 40);

        // first row: rows 3..10, columns 4..9
        assert_eq!(canvas.get_pixel(4, 3), &FG);
        assert_eq!(canvas.get_pixel(8, 9), &FG);
        assert_eq!(canvas.get_pixel(4, 2), &BG);
        assert_eq!(canvas.get_pixel(3, 5), &BG);
        assert_eq!(canvas.get_pixel(9, 5), &BG);
        assert_eq!(canvas.get_pixel(4, 10), &BG);

        // the empty row still takes up 10..20
        assert!((10..20).all(|y| canvas.get_pixel(4, y) == &BG));

        // third row: rows 23..30, two glyphs side by side
        assert_eq!(canvas.get_pixel(4, 23), &FG);
        assert_eq!(canvas.get_pixel(13, 29), &FG);
        assert_eq!(canvas.get_pixel(14, 29), &BG);
    }

    #[test]
    fn unresolvable_characters_take_no_space() {
        let plain = render_label(&["aa"], Pt(10.0), &BlockMetrics, &style(), 40, 20);
        let with_unmapped = format!("a{UNMAPPED}a");
        let mixed = render_label(&[with_unmapped], Pt(10.0), &BlockMetrics, &style(), 40, 20);
        assert_eq!(plain, mixed);
    }

    #[test]
    fn kerned_pairs_draw_closer_together() {
        // second glyph starts at 4 + 5 = 9, or 7 when kerned
        let plain = render_label(&["AA"], Pt(10.0), &BlockMetrics, &style(), 40, 20);
        assert_eq!(plain.get_pixel(12, 5), &FG);
        assert_eq!(plain.get_pixel(13, 5), &FG);

        let kerned = render_label(&["AV"], Pt(10.0), &BlockMetrics, &style(), 40, 20);
        assert_eq!(kerned.get_pixel(11, 5), &FG);
        assert_eq!(kerned.get_pixel(12, 5), &BG);

        // measurement ignores kerning
        let face = BlockMetrics.face(Pt(10.0), 72.0);
        assert_eq!(width_of_text("AV", &face), width_of_text("AA", &face));
    }

    #[test]
    fn glyphs_past_the_edges_are_clipped() {
        let style = LabelStyle {
            text_offsets: Offsets::new(-3, 0),
            ..style()
        };
        let canvas = render_label(&["aaaaaaaaaa"; 4], Pt(10.0), &BlockMetrics, &style, 12, 15);
        assert_eq!(canvas.dimensions(), (12, 15));
        assert_eq!(canvas.get_pixel(0, 5), &FG);
        assert_eq!(canvas.get_pixel(11, 14), &FG);
    }

    #[test]
    fn translucent_foreground_blends_with_the_background() {
        let style = LabelStyle {
            foreground: colours::BLACK.with_alpha(0),
            ..style()
        };
        let canvas = render_label(&["aaaa"], Pt(10.0), &BlockMetrics, &style, 30, 20);
        assert!(canvas.pixels().all(|p| *p == BG));
    }

    #[test]
    fn rendering_is_repeatable() {
        let rows = ["abc", "", "de"];
        let first = render_label(&rows, Pt(12.5), &BlockMetrics, &style(), 64, 64);
        let second = render_label(&rows, Pt(12.5), &BlockMetrics, &style(), 64, 64);
        assert_eq!(first.as_raw(), second.as_raw());
    }
}
