use crate::composite::composite;
use crate::encode::{decode, encode_jpeg};
use crate::font::Font;
use crate::label::LabelGenerator;
use crate::options::{Options, Settings};
use crate::WatermarkError;
use image::{DynamicImage, ImageFormat, RgbaImage};
use std::path::Path;
use std::sync::Arc;

/// Stamps photos with a translucent text label in their bottom-left corner.
///
/// The label is sized as a fraction of each photo, its font size is fitted to the text,
/// and it is blended over the photo with a uniform opacity before the result is
/// re-encoded as JPEG.
#[derive(Clone)]
pub struct Watermark {
    settings: Settings,
    labels: LabelGenerator,
}

impl Watermark {
    /// Load the font at `font_path` and resolve `options`
    pub fn new<P: AsRef<Path>>(font_path: P, options: &Options) -> Result<Watermark, WatermarkError> {
        let font = Font::load_from_path(font_path)?;
        Self::with_font(Arc::new(font), options)
    }

    /// Build a watermark around an already loaded font
    pub fn with_font(font: Arc<Font>, options: &Options) -> Result<Watermark, WatermarkError> {
        let settings = Settings::resolve(options)?;
        let labels = LabelGenerator::new(font, settings.label_style(), settings.max_font_size)?;

        log::info!(
            "watermark ready: {:.0}% x {:.0}% of the photo, opacity {}, max {}",
            settings.watermark_width_ratio * 100.0,
            settings.watermark_height_ratio * 100.0,
            settings.opacity,
            settings.max_font_size
        );
        Ok(Watermark { settings, labels })
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn label_generator(&self) -> &LabelGenerator {
        &self.labels
    }

    /// Size of the label for a photo of the given size. Fractional pixels are dropped.
    pub fn watermark_size(&self, image_width: u32, image_height: u32) -> (u32, u32) {
        let width = f64::from(image_width) * self.settings.watermark_width_ratio;
        let height = f64::from(image_height) * self.settings.watermark_height_ratio;
        (width as u32, height as u32)
    }

    /// Decode `input_image`, stamp `text` onto it (one row per entry), and encode the
    /// result as JPEG
    pub fn add_from_text<S: AsRef<str>>(
        &self,
        input_image: &[u8],
        text: &[S],
    ) -> Result<Vec<u8>, WatermarkError> {
        let photo = decode(input_image, self.settings.auto_orientation)?;
        let stamped = self.apply(&photo, text)?;
        encode_jpeg(stamped, self.settings.jpeg_quality)
    }

    /// Stamp `text` onto an already decoded photo
    pub fn apply<S: AsRef<str>>(
        &self,
        photo: &DynamicImage,
        text: &[S],
    ) -> Result<RgbaImage, WatermarkError> {
        let (image_width, image_height) = (photo.width(), photo.height());
        let (label_width, label_height) = self.watermark_size(image_width, image_height);
        log::debug!(
            "stamping {} rows onto {image_width}x{image_height} photo with a {label_width}x{label_height} label",
            text.len()
        );

        let label_bytes = self.labels.label_from_text(text, label_width, label_height)?;
        let label = image::load_from_memory_with_format(&label_bytes, ImageFormat::Png)
            .map_err(WatermarkError::Decode)?
            .to_rgba8();

        let offsets = self.settings.watermark_offsets;
        let offset = (
            i64::from(offsets.horizontal),
            i64::from(image_height) - (i64::from(label_height) + i64::from(offsets.vertical)),
        );

        let mut stamped = photo.to_rgba8();
        composite(&mut stamped, &label, self.settings.opacity, offset);
        Ok(stamped)
    }
}
