use thiserror::Error;

/// All errors that the crate can generate
#[derive(Error, Debug)]
pub enum WatermarkError {
    #[error(transparent)]
    /// An I/O error occurred
    Io(#[from] std::io::Error),

    #[error(transparent)]
    /// [owned_ttf_parser] failed to parse the font
    FaceParsing(#[from] owned_ttf_parser::FaceParsingError),

    #[error("font rasterizer rejected the font: {0}")]
    /// [fontdue] failed to prepare the font for rasterization
    Rasterizer(&'static str),

    #[error("failed to encode image: {0}")]
    /// [image] failed to encode the label or the watermarked photo
    Encode(#[source] image::ImageError),

    #[error("failed to decode image: {0}")]
    /// [image] failed to decode the photo or the generated label
    Decode(#[source] image::ImageError),

    #[error("invalid option `{option}`: {reason}")]
    /// A configuration value was rejected when resolving options
    InvalidOption {
        option: &'static str,
        reason: &'static str,
    },
}

/// Reject anything that isn't a finite, strictly positive number
pub(crate) fn ensure_positive(option: &'static str, value: f64) -> Result<(), WatermarkError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(WatermarkError::InvalidOption {
            option,
            reason: "must be a finite number greater than zero",
        })
    }
}
