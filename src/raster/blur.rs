//! Gaussian blur approximated by three successive box blurs per axis.
//!
//! Each box pass keeps a running sum along the line, so the cost per pixel is
//! constant no matter how wide the shadow blur is.

use crate::foundation::error::{ShotframeError, ShotframeResult};

const CHANNELS: usize = 4;
const PASSES: usize = 3;

/// Radii of the three boxes whose combined variance is closest to `sigma²`.
///
/// Boxes have odd widths `wl` or `wl + 2`; the first `m` use the smaller width.
pub fn box_radii_for_sigma(sigma: f32) -> [u32; PASSES] {
    if !sigma.is_finite() || sigma <= 0.0 {
        return [0; PASSES];
    }
    let var12 = 12.0 * f64::from(sigma) * f64::from(sigma);
    let n = PASSES as f64;

    let mut wl = (var12 / n + 1.0).sqrt().floor() as i64;
    if wl % 2 == 0 {
        wl -= 1;
    }
    let wl = wl.max(1);
    let wlf = wl as f64;
    let m = ((var12 - n * wlf * wlf - 4.0 * n * wlf - 3.0 * n) / (-4.0 * wlf - 4.0))
        .round()
        .clamp(0.0, n) as usize;

    let mut radii = [0u32; PASSES];
    for (i, r) in radii.iter_mut().enumerate() {
        let width = if i < m { wl } else { wl + 2 };
        *r = ((width - 1) / 2) as u32;
    }
    radii
}

/// Blur premultiplied RGBA8 in place. Pixels past the border repeat the edge pixel.
pub fn box_blur_rgba8_premul(
    buf: &mut [u8],
    width: u32,
    height: u32,
    sigma: f32,
) -> ShotframeResult<()> {
    let (w, h) = (width as usize, height as usize);
    let expected_len = w
        .checked_mul(h)
        .and_then(|v| v.checked_mul(CHANNELS))
        .ok_or_else(|| ShotframeError::validation("blur buffer size overflow"))?;
    if buf.len() != expected_len {
        return Err(ShotframeError::validation(format!(
            "blur expects {width}x{height} rgba8 ({expected_len} bytes), got {}",
            buf.len()
        )));
    }

    let radii = box_radii_for_sigma(sigma);
    if expected_len == 0 || radii.iter().all(|&r| r == 0) {
        return Ok(());
    }

    let longest = w.max(h) * CHANNELS;
    let mut line = vec![0u8; longest];
    let mut scratch = vec![0u8; longest];

    let stride = w * CHANNELS;
    for row in buf.chunks_exact_mut(stride) {
        blur_line(row, &mut scratch, &radii);
    }

    let column = &mut line[..h * CHANNELS];
    for x in 0..w {
        for (y, px) in column.chunks_exact_mut(CHANNELS).enumerate() {
            let at = y * stride + x * CHANNELS;
            px.copy_from_slice(&buf[at..at + CHANNELS]);
        }
        blur_line(column, &mut scratch, &radii);
        for (y, px) in column.chunks_exact(CHANNELS).enumerate() {
            let at = y * stride + x * CHANNELS;
            buf[at..at + CHANNELS].copy_from_slice(px);
        }
    }
    Ok(())
}

/// Run every box pass over one interleaved line; the result ends up in `line`.
fn blur_line(line: &mut [u8], scratch: &mut [u8], radii: &[u32; PASSES]) {
    let scratch = &mut scratch[..line.len()];
    for &r in radii {
        if r == 0 {
            continue;
        }
        box_pass(line, scratch, r as usize);
        line.copy_from_slice(scratch);
    }
}

fn box_pass(src: &[u8], dst: &mut [u8], radius: usize) {
    let len = src.len() / CHANNELS;
    let last = len as isize - 1;
    let window = (2 * radius + 1) as u32;
    let at = |i: isize| i.clamp(0, last) as usize * CHANNELS;

    let mut sum = [0u32; CHANNELS];
    for i in -(radius as isize)..=radius as isize {
        let p = at(i);
        for c in 0..CHANNELS {
            sum[c] += u32::from(src[p + c]);
        }
    }

    for i in 0..len {
        let out = i * CHANNELS;
        for c in 0..CHANNELS {
            dst[out + c] = ((sum[c] + window / 2) / window) as u8;
        }
        let enter = at(i as isize + radius as isize + 1);
        let leave = at(i as isize - radius as isize);
        for c in 0..CHANNELS {
            sum[c] = sum[c] + u32::from(src[enter + c]) - u32::from(src[leave + c]);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/raster/blur.rs"]
mod tests;
