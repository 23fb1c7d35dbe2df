use crate::label::LabelCanvas;
use crate::WatermarkError;
use image::codecs::jpeg::JpegEncoder;
use image::metadata::Orientation;
use image::{DynamicImage, ImageDecoder, ImageFormat, ImageReader, RgbaImage};
use std::io::Cursor;

/// Serialize a label canvas as PNG
pub fn encode_png(canvas: &LabelCanvas) -> Result<Vec<u8>, WatermarkError> {
    let mut bytes: Vec<u8> = Vec::new();
    canvas
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .map_err(|e| {
            log::error!("failed to encode {}x{} label: {e}", canvas.width(), canvas.height());
            WatermarkError::Encode(e)
        })?;
    Ok(bytes)
}

/// Flatten an image onto its colour channels and serialize it as JPEG at the given
/// quality (1 to 100)
pub fn encode_jpeg(image: RgbaImage, quality: u8) -> Result<Vec<u8>, WatermarkError> {
    let rgb = DynamicImage::ImageRgba8(image).to_rgb8();

    let mut bytes: Vec<u8> = Vec::new();
    JpegEncoder::new_with_quality(&mut bytes, quality)
        .encode_image(&rgb)
        .map_err(|e| {
            log::error!("failed to encode {}x{} jpeg: {e}", rgb.width(), rgb.height());
            WatermarkError::Encode(e)
        })?;
    Ok(bytes)
}

/// Decode an image in any supported format, optionally rotating and flipping it
/// upright according to its EXIF orientation
pub fn decode(bytes: &[u8], auto_orientation: bool) -> Result<DynamicImage, WatermarkError> {
    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| WatermarkError::Decode(e.into()))?;
    let mut decoder = reader.into_decoder().map_err(WatermarkError::Decode)?;

    let orientation = if auto_orientation {
        decoder.orientation().map_err(WatermarkError::Decode)?
    } else {
        Orientation::NoTransforms
    };

    let mut image = DynamicImage::from_decoder(decoder).map_err(WatermarkError::Decode)?;
    image.apply_orientation(orientation);
    Ok(image)
}
