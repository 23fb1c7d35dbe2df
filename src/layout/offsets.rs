/// Pixel offsets used when placing things inside a raster. Depending on where they are
/// used they act as margins (text inside a label) or as distances from an anchor edge
/// (a label inside a photo).
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct Offsets {
    pub horizontal: i32,
    pub vertical: i32,
}

impl Offsets {
    pub fn new(horizontal: i32, vertical: i32) -> Offsets {
        Offsets {
            horizontal,
            vertical,
        }
    }

    /// Create offsets where both values are equal
    pub fn all(value: i32) -> Offsets {
        Offsets::new(value, value)
    }

    /// Create offsets where both values are 0
    pub fn empty() -> Offsets {
        Offsets::new(0, 0)
    }
}
