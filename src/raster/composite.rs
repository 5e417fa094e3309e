use crate::foundation::core::Rgba8;
use crate::foundation::error::{ShotframeError, ShotframeResult};

pub type PremulRgba8 = [u8; 4];

/// Porter-Duff source-over on premultiplied pixels.
pub fn over(dst: PremulRgba8, src: PremulRgba8) -> PremulRgba8 {
    let sa = src[3];
    if sa == 0 {
        return dst;
    }

    let inv = 255u16 - u16::from(sa);

    let mut out = [0u8; 4];
    out[3] = add_sat_u8(sa, mul_div255(u16::from(dst[3]), inv));
    for i in 0..3 {
        let dc = mul_div255(u16::from(dst[i]), inv);
        out[i] = add_sat_u8(src[i], dc);
    }
    out
}

/// Source-over for straight-alpha pixels.
pub fn over_straight(dst: Rgba8, src: Rgba8) -> Rgba8 {
    if src[3] == 0 {
        return dst;
    }
    if src[3] == 255 {
        return src;
    }
    unpremultiply(over(premultiply(dst), premultiply(src)))
}

/// Move every channel of `dst` toward `src` by `mask / 255`.
///
/// Alpha is interpolated like the color channels, so a paste through a
/// partial mask onto a transparent canvas attenuates the source alpha too.
pub fn lerp_masked(dst: Rgba8, src: Rgba8, mask: u8) -> Rgba8 {
    match mask {
        0 => dst,
        255 => src,
        m => {
            let m = u16::from(m);
            let im = 255 - m;
            let mut out = [0u8; 4];
            for i in 0..4 {
                out[i] = add_sat_u8(
                    mul_div255(u16::from(src[i]), m),
                    mul_div255(u16::from(dst[i]), im),
                );
            }
            out
        }
    }
}

pub fn premultiply(px: Rgba8) -> PremulRgba8 {
    let a = u16::from(px[3]);
    match a {
        0 => [0, 0, 0, 0],
        255 => px,
        _ => [
            mul_div255(u16::from(px[0]), a),
            mul_div255(u16::from(px[1]), a),
            mul_div255(u16::from(px[2]), a),
            px[3],
        ],
    }
}

pub fn unpremultiply(px: PremulRgba8) -> Rgba8 {
    let a = u32::from(px[3]);
    match a {
        0 => [0, 0, 0, 0],
        255 => px,
        _ => {
            let un = |c: u8| ((u32::from(c) * 255 + a / 2) / a).min(255) as u8;
            [un(px[0]), un(px[1]), un(px[2]), px[3]]
        }
    }
}

pub fn premultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let out = premultiply([px[0], px[1], px[2], px[3]]);
        px.copy_from_slice(&out);
    }
}

pub fn unpremultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let out = unpremultiply([px[0], px[1], px[2], px[3]]);
        px.copy_from_slice(&out);
    }
}

/// Straight-alpha source-over of `src` onto `dst`, pixel for pixel.
pub fn over_straight_in_place(dst: &mut [u8], src: &[u8]) -> ShotframeResult<()> {
    if dst.len() != src.len() || !dst.len().is_multiple_of(4) {
        return Err(ShotframeError::validation(
            "over_straight_in_place expects equal-length rgba8 buffers",
        ));
    }
    for (d, s) in dst.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
        let out = over_straight([d[0], d[1], d[2], d[3]], [s[0], s[1], s[2], s[3]]);
        d.copy_from_slice(&out);
    }
    Ok(())
}

pub(crate) fn mul_div255(x: u16, y: u16) -> u8 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u8
}

fn add_sat_u8(a: u8, b: u8) -> u8 {
    a.saturating_add(b)
}

#[cfg(test)]
#[path = "../../tests/unit/raster/composite.rs"]
mod tests;
