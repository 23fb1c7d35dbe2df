use image::Rgba;

/// A straight (non-premultiplied) RGBA colour with 8 bits per channel
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// Opacity; 255 is fully opaque
    pub a: u8,
}

impl Colour {
    /// Create a new opaque colour. r, g, and b range from 0.0 to 1.0
    pub fn new_rgb(r: f32, g: f32, b: f32) -> Colour {
        Colour::new_rgba(r, g, b, 1.0)
    }

    /// Create a new colour. r, g, b, and a range from 0.0 to 1.0
    pub fn new_rgba(r: f32, g: f32, b: f32, a: f32) -> Colour {
        Colour {
            r: unit_to_byte(r),
            g: unit_to_byte(g),
            b: unit_to_byte(b),
            a: unit_to_byte(a),
        }
    }

    /// Create a new opaque colour. r, g, and b range from 0 to 255
    pub const fn new_rgb_bytes(r: u8, g: u8, b: u8) -> Colour {
        Colour { r, g, b, a: 255 }
    }

    /// Create a new colour. r, g, b, and a range from 0 to 255
    pub const fn new_rgba_bytes(r: u8, g: u8, b: u8, a: u8) -> Colour {
        Colour { r, g, b, a }
    }

    /// Create a new opaque grey, g ranges from 0.0 to 1.0
    pub fn new_grey(g: f32) -> Colour {
        let g = unit_to_byte(g);
        Colour::new_rgb_bytes(g, g, g)
    }

    /// Create a new opaque grey, g ranges from 0 to 255
    pub const fn new_grey_bytes(g: u8) -> Colour {
        Colour::new_rgb_bytes(g, g, g)
    }

    /// The same colour with its alpha channel replaced
    pub const fn with_alpha(self, a: u8) -> Colour {
        Colour { a, ..self }
    }
}

fn unit_to_byte(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

impl From<(u8, u8, u8)> for Colour {
    fn from(c: (u8, u8, u8)) -> Self {
        Colour::new_rgb_bytes(c.0, c.1, c.2)
    }
}

impl From<[u8; 3]> for Colour {
    fn from(c: [u8; 3]) -> Self {
        let [r, g, b] = c;
        Colour::new_rgb_bytes(r, g, b)
    }
}

impl From<(u8, u8, u8, u8)> for Colour {
    fn from(c: (u8, u8, u8, u8)) -> Self {
        Colour::new_rgba_bytes(c.0, c.1, c.2, c.3)
    }
}

impl From<[u8; 4]> for Colour {
    fn from(c: [u8; 4]) -> Self {
        let [r, g, b, a] = c;
        Colour::new_rgba_bytes(r, g, b, a)
    }
}

impl From<Rgba<u8>> for Colour {
    fn from(p: Rgba<u8>) -> Self {
        p.0.into()
    }
}

impl From<Colour> for Rgba<u8> {
    fn from(c: Colour) -> Self {
        Rgba([c.r, c.g, c.b, c.a])
    }
}

/// A list of pre-defined colour constants
pub mod colours {
    use super::*;

    pub const BLACK: Colour = Colour::new_grey_bytes(0);
    pub const WHITE: Colour = Colour::new_grey_bytes(255);
    pub const RED: Colour = Colour::new_rgb_bytes(255, 0, 0);
    pub const GREEN: Colour = Colour::new_rgb_bytes(0, 255, 0);
    pub const BLUE: Colour = Colour::new_rgb_bytes(0, 0, 255);
    pub const TRANSPARENT: Colour = Colour::new_rgba_bytes(0, 0, 0, 0);
}
