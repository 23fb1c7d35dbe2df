use crate::{units::Pt, WatermarkError};
use owned_ttf_parser::{AsFaceRef, GlyphId, OwnedFace};
use std::path::Path;

/// A parsed font object. Fonts can be TTF or OTF fonts and are parsed exactly once,
/// when loaded; afterwards the font is immutable and can be shared freely (usually
/// behind an [std::sync::Arc]) between any number of label generators and threads.
///
/// Metrics (advances, names, em size) are read through [owned_ttf_parser], while glyph
/// coverage bitmaps are produced by [fontdue] from the same font bytes. Both backends
/// stay private; [Font::ttf_face] exposes the parsed tables for read-only queries.
pub struct Font {
    tables: OwnedFace,
    raster: fontdue::Font,
}

impl Font {
    /// Load a font from raw bytes, parsing the font and returning an error if the font
    /// could not be parsed
    pub fn load(bytes: Vec<u8>) -> Result<Font, WatermarkError> {
        let tables = OwnedFace::from_vec(bytes, 0)?;
        let raster = fontdue::Font::from_bytes(tables.as_slice(), fontdue::FontSettings::default())
            .map_err(WatermarkError::Rasterizer)?;

        let font = Font { tables, raster };
        log::info!(
            "loaded font {} ({} units per em)",
            font.name().as_deref().unwrap_or("<unnamed>"),
            font.units_per_em()
        );
        Ok(font)
    }

    /// Read and parse a font file from disk
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Font, WatermarkError> {
        let bytes = std::fs::read(path)?;
        Self::load(bytes)
    }

    /// The parsed font tables
    pub fn ttf_face(&self) -> &owned_ttf_parser::Face<'_> {
        self.tables.as_face_ref()
    }

    /// Obtain the full name of the font, if it carries one
    pub fn name(&self) -> Option<String> {
        self.ttf_face()
            .names()
            .into_iter()
            .find(|name| name.name_id == owned_ttf_parser::name_id::FULL_NAME && name.is_unicode())
            .and_then(|name| name.to_string())
    }

    /// Obtain the family name of the font, if it carries one
    pub fn family(&self) -> Option<String> {
        self.ttf_face()
            .names()
            .into_iter()
            .find(|name| name.name_id == owned_ttf_parser::name_id::FAMILY && name.is_unicode())
            .and_then(|name| name.to_string())
    }

    pub fn units_per_em(&self) -> u16 {
        self.ttf_face().units_per_em()
    }

    pub fn glyph_id(&self, ch: char) -> Option<u16> {
        self.ttf_face().glyph_index(ch).map(|i| i.0)
    }
}

/// A single rasterized glyph: an 8-bit coverage bitmap plus its placement relative
/// to the pen position on the baseline
#[derive(Debug, Clone, PartialEq)]
pub struct Glyph {
    /// Horizontal offset of the bitmap's left edge from the pen
    pub xmin: i32,
    /// Offset of the bitmap's bottom edge above the baseline (negative for descenders)
    pub ymin: i32,
    pub width: usize,
    pub height: usize,
    /// Row-major coverage, `width * height` entries, top row first
    pub coverage: Vec<u8>,
    /// How far to move the pen after drawing, in pixels
    pub advance: f32,
}

/// A font bound to a concrete pixel size
pub trait Face {
    /// The horizontal advance of `ch` rounded to whole pixels, or `None` if the font
    /// can't resolve the character
    fn advance(&self, ch: char) -> Option<i32>;

    /// Rasterize `ch`, or `None` if the font has no glyph for it
    fn glyph(&self, ch: char) -> Option<Glyph>;

    /// Extra pen movement in pixels between `left` and `right` when drawn next to
    /// each other. Only applied while drawing; row widths are measured without it.
    fn kern(&self, _left: char, _right: char) -> f32 {
        0.0
    }
}

/// Anything that can measure and build sized faces for text. [Font] is the real
/// implementation; layout code only depends on this trait.
pub trait GlyphMetrics {
    type Face<'a>: Face
    where
        Self: 'a;

    /// Build a face for `size` rendered at `dpi`
    fn face(&self, size: Pt, dpi: f64) -> Self::Face<'_>;

    /// Rounded pixel advance of a single character at `size` and `dpi`
    fn advance_of(&self, ch: char, size: Pt, dpi: f64) -> Option<i32> {
        self.face(size, dpi).advance(ch)
    }
}

/// A [Font] at a specific pixel-per-em scale
#[derive(Copy, Clone)]
pub struct FontFace<'a> {
    font: &'a Font,
    px_per_em: f64,
}

impl<'a> FontFace<'a> {
    pub fn px_per_em(&self) -> f64 {
        self.px_per_em
    }

    fn scaling(&self) -> f64 {
        self.px_per_em / self.font.units_per_em() as f64
    }
}

impl Face for FontFace<'_> {
    fn advance(&self, ch: char) -> Option<i32> {
        let face = self.font.ttf_face();
        let gid = face.glyph_index(ch)?;
        let advance = face.glyph_hor_advance(gid)?;
        Some((advance as f64 * self.scaling()).round() as i32)
    }

    fn glyph(&self, ch: char) -> Option<Glyph> {
        let GlyphId(index) = self.font.ttf_face().glyph_index(ch)?;
        let (metrics, coverage) = self
            .font
            .raster
            .rasterize_indexed(index, self.px_per_em as f32);

        Some(Glyph {
            xmin: metrics.xmin,
            ymin: metrics.ymin,
            width: metrics.width,
            height: metrics.height,
            coverage,
            advance: metrics.advance_width,
        })
    }

    fn kern(&self, left: char, right: char) -> f32 {
        self.font
            .raster
            .horizontal_kern(left, right, self.px_per_em as f32)
            .unwrap_or(0.0)
    }
}

impl GlyphMetrics for Font {
    type Face<'a> = FontFace<'a>;

    fn face(&self, size: Pt, dpi: f64) -> FontFace<'_> {
        FontFace {
            font: self,
            px_per_em: size.to_px(dpi),
        }
    }
}

/// Deterministic stand-in metrics for layout tests
#[cfg(test)]
pub(crate) mod fake {
    use super::*;

    /// A character the fake font can't resolve
    pub const UNMAPPED: char = '\u{E000}';

    /// Every mapped character is a solid block half an em wide and 0.7em tall,
    /// sitting on the baseline. "AV" is kerned 2px tighter.
    pub struct BlockMetrics;

    pub struct BlockFace {
        px_per_em: f64,
    }

    impl Face for BlockFace {
        fn advance(&self, ch: char) -> Option<i32> {
            (ch != UNMAPPED).then(|| (self.px_per_em * 0.5).round() as i32)
        }

        fn glyph(&self, ch: char) -> Option<Glyph> {
            let width = self.advance(ch)? as usize;
            let height = (self.px_per_em * 0.7).round() as usize;
            Some(Glyph {
                xmin: 0,
                ymin: 0,
                width,
                height,
                coverage: vec![255; width * height],
                advance: width as f32,
            })
        }

        fn kern(&self, left: char, right: char) -> f32 {
            if (left, right) == ('A', 'V') {
                -2.0
            } else {
                0.0
            }
        }
    }

    impl GlyphMetrics for BlockMetrics {
        type Face<'a> = BlockFace;

        fn face(&self, size: Pt, dpi: f64) -> BlockFace {
            BlockFace {
                px_per_em: size.to_px(dpi),
            }
        }
    }
}
