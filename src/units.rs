use derive_more::{Add, AddAssign, Display, Div, From, Into, Mul, MulAssign, Sub, Sum};

/// Number of typographic points in one inch
pub const POINTS_PER_INCH: f64 = 72.0;

/// A font size (or any other length) expressed in typographic points, 1/72 of an inch.
/// Points are resolution-independent; use [Pt::to_px] and [Pt::from_px] to move
/// between points and the pixels of a raster at a given DPI.
#[derive(
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    PartialOrd,
    Add,
    AddAssign,
    Sub,
    Mul,
    MulAssign,
    Div,
    Sum,
    From,
    Into,
    Display,
)]
#[display("{_0}pt")]
pub struct Pt(pub f64);

impl Pt {
    /// Convert to pixels at the given resolution
    pub fn to_px(self, dpi: f64) -> f64 {
        self.0 / POINTS_PER_INCH * dpi
    }

    /// Convert a pixel length at the given resolution to points
    pub fn from_px(px: f64, dpi: f64) -> Pt {
        Pt((px * POINTS_PER_INCH) / dpi)
    }

    /// The smaller of two sizes. NaN loses to any number.
    pub fn min(self, other: Pt) -> Pt {
        Pt(self.0.min(other.0))
    }
}
