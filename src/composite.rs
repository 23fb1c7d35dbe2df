use crate::colour::Colour;
use image::{Rgba, RgbaImage};

/// Paint `src` over `dst` with the given effective alpha (0.0 to 1.0), using the
/// "source over" operator on straight-alpha pixels
pub fn blend_over(dst: &mut Rgba<u8>, src: Colour, alpha: f32) {
    let alpha = alpha.clamp(0.0, 1.0);
    if alpha <= 0.0 {
        return;
    }

    let dst_alpha = dst[3] as f32 / 255.0;
    let out_alpha = alpha + dst_alpha * (1.0 - alpha);
    let channel = |s: u8, d: u8| {
        let v = (s as f32 * alpha + d as f32 * dst_alpha * (1.0 - alpha)) / out_alpha;
        v.round().clamp(0.0, 255.0) as u8
    };

    *dst = Rgba([
        channel(src.r, dst[0]),
        channel(src.g, dst[1]),
        channel(src.b, dst[2]),
        (out_alpha * 255.0).round() as u8,
    ]);
}

/// Lay `label` over `target` with its top-left corner at `offset`, treating every label
/// pixel as opaque and fading the whole label uniformly by `opacity` (255 is fully
/// opaque). Parts of the label that fall outside the target are clipped.
pub fn composite(target: &mut RgbaImage, label: &RgbaImage, opacity: u8, offset: (i64, i64)) {
    let alpha = opacity as f32 / 255.0;
    let (width, height) = (i64::from(target.width()), i64::from(target.height()));

    for (lx, ly, pixel) in label.enumerate_pixels() {
        let x = offset.0 + i64::from(lx);
        let y = offset.1 + i64::from(ly);
        if x < 0 || y < 0 || x >= width || y >= height {
            continue;
        }

        let src = Colour::from(*pixel).with_alpha(255);
        blend_over(target.get_pixel_mut(x as u32, y as u32), src, alpha);
    }
}
