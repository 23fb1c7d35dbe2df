use crate::colour::{colours, Colour};
use crate::error::ensure_positive;
use crate::label::LabelStyle;
use crate::layout::Offsets;
use crate::units::Pt;
use crate::WatermarkError;

pub const DEFAULT_TEXT_COLOUR: Colour = colours::BLACK;
pub const DEFAULT_BACKGROUND_COLOUR: Colour = colours::WHITE;
pub const DEFAULT_OPACITY: u8 = 128;
pub const DEFAULT_JPEG_QUALITY: u8 = 95;
pub const DEFAULT_MAX_FONT_SIZE: Pt = Pt(200.0);

/// Caller-facing watermark configuration. Anything left at its default value is
/// filled in by [Settings::resolve].
///
/// Note that an `opacity` of 0 means "unset" and resolves to [DEFAULT_OPACITY]; a fully
/// transparent watermark can't be configured. The same goes for a `max_font_size` of 0.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Options {
    /// Watermark height as a fraction of the photo height
    pub watermark_height_ratio: f64,
    /// Watermark width as a fraction of the photo width
    pub watermark_width_ratio: f64,
    /// Distance of the watermark from the photo's left and bottom edges, in pixels
    pub watermark_offsets: Offsets,
    /// Text offset inside the watermark, in pixels
    pub text_offsets: Offsets,
    pub text_colour: Option<Colour>,
    pub background_colour: Option<Colour>,
    pub opacity: u8,
    pub jpeg_quality: Option<u8>,
    /// Rotate photos upright according to their EXIF orientation before watermarking
    pub auto_orientation: bool,
    pub row_spacing: f64,
    pub dpi: f64,
    /// Largest font size in points
    pub max_font_size: f64,
}

/// Fully resolved and validated configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub watermark_height_ratio: f64,
    pub watermark_width_ratio: f64,
    pub watermark_offsets: Offsets,
    pub text_offsets: Offsets,
    pub text_colour: Colour,
    pub background_colour: Colour,
    pub opacity: u8,
    pub jpeg_quality: u8,
    pub auto_orientation: bool,
    pub row_spacing: f64,
    pub dpi: f64,
    pub max_font_size: Pt,
}

impl Settings {
    /// Apply defaults to everything left unset, then reject values no watermark can
    /// be produced with
    pub fn resolve(options: &Options) -> Result<Settings, WatermarkError> {
        let settings = Settings {
            watermark_height_ratio: options.watermark_height_ratio,
            watermark_width_ratio: options.watermark_width_ratio,
            watermark_offsets: options.watermark_offsets,
            text_offsets: options.text_offsets,
            text_colour: options.text_colour.unwrap_or(DEFAULT_TEXT_COLOUR),
            background_colour: options.background_colour.unwrap_or(DEFAULT_BACKGROUND_COLOUR),
            opacity: match options.opacity {
                0 => DEFAULT_OPACITY,
                opacity => opacity,
            },
            jpeg_quality: options.jpeg_quality.unwrap_or(DEFAULT_JPEG_QUALITY),
            auto_orientation: options.auto_orientation,
            row_spacing: options.row_spacing,
            dpi: options.dpi,
            max_font_size: if options.max_font_size == 0.0 {
                DEFAULT_MAX_FONT_SIZE
            } else {
                Pt(options.max_font_size)
            },
        };

        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), WatermarkError> {
        ensure_positive("watermark_height_ratio", self.watermark_height_ratio)?;
        ensure_positive("watermark_width_ratio", self.watermark_width_ratio)?;
        ensure_positive("row_spacing", self.row_spacing)?;
        ensure_positive("dpi", self.dpi)?;
        ensure_positive("max_font_size", self.max_font_size.0)?;
        if !(1..=100).contains(&self.jpeg_quality) {
            return Err(WatermarkError::InvalidOption {
                option: "jpeg_quality",
                reason: "must be between 1 and 100",
            });
        }
        Ok(())
    }

    /// The label style these settings describe
    pub fn label_style(&self) -> LabelStyle {
        LabelStyle {
            foreground: self.text_colour,
            background: self.background_colour,
            dpi: self.dpi,
            row_spacing: self.row_spacing,
            text_offsets: self.text_offsets,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> Options {
        Options {
            watermark_height_ratio: 0.1,
            watermark_width_ratio: 0.9,
            row_spacing: 1.5,
            dpi: 100.0,
            ..Options::default()
        }
    }

    #[test]
    fn unset_values_take_defaults() {
        let settings = Settings::resolve(&options()).expect("options are valid");
        assert_eq!(settings.text_colour, colours::BLACK);
        assert_eq!(settings.background_colour, colours::WHITE);
        assert_eq!(settings.opacity, 128);
        assert_eq!(settings.jpeg_quality, 95);
        assert_eq!(settings.max_font_size, Pt(200.0));
        assert!(!settings.auto_orientation);
    }

    #[test]
    fn zero_opacity_means_unset() {
        let settings = Settings::resolve(&Options {
            opacity: 0,
            ..options()
        })
        .expect("options are valid");
        assert_eq!(settings.opacity, DEFAULT_OPACITY);
    }

    #[test]
    fn explicit_values_are_kept() {
        let settings = Settings::resolve(&Options {
            text_colour: Some(colours::RED),
            background_colour: Some(colours::BLUE),
            opacity: 255,
            jpeg_quality: Some(40),
            max_font_size: 24.0,
            text_offsets: Offsets::new(20, 20),
            ..options()
        })
        .expect("options are valid");
        assert_eq!(settings.opacity, 255);
        assert_eq!(settings.jpeg_quality, 40);
        assert_eq!(settings.max_font_size, Pt(24.0));

        let style = settings.label_style();
        assert_eq!(style.foreground, colours::RED);
        assert_eq!(style.background, colours::BLUE);
        assert_eq!(style.text_offsets, Offsets::new(20, 20));
        assert_eq!(style.dpi, 100.0);
        assert_eq!(style.row_spacing, 1.5);
    }

    #[test]
    fn rejects_unusable_values() {
        let cases = [
            (Options { dpi: 0.0, ..options() }, "dpi"),
            (Options { row_spacing: -1.5, ..options() }, "row_spacing"),
            (Options { max_font_size: f64::INFINITY, ..options() }, "max_font_size"),
            (Options { watermark_width_ratio: 0.0, ..options() }, "watermark_width_ratio"),
            (Options { jpeg_quality: Some(0), ..options() }, "jpeg_quality"),
        ];
        for (options, expected) in cases {
            match Settings::resolve(&options) {
                Err(WatermarkError::InvalidOption { option, .. }) => assert_eq!(option, expected),
                other => panic!("expected {expected} to be rejected, got {other:?}"),
            }
        }
    }
}
