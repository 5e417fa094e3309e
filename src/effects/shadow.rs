use crate::foundation::core::{Offset, Rgba8, Size};
use crate::foundation::error::ShotframeResult;
use crate::raster::canvas::Canvas;
use crate::raster::mask::rounded_mask;

fn shadow_black(alpha: u8) -> Rgba8 {
    [0, 0, 0, alpha]
}

/// Translucent dark band hugging the inside of a rounded rectangle.
///
/// The base shape is filled with black at `intensity` alpha, then a copy of
/// the shape shrunk by `band_width` on every side (corner radius reduced by
/// the same amount) is erased from the middle. The band is softened with a
/// Gaussian blur of `band_width`.
///
/// Shapes no larger than `2 * band_width` on an axis have no interior, so the
/// whole shape stays dark instead of the file being rejected as unprocessable.
pub fn inner_shadow(
    size: Size,
    radius: u32,
    band_width: u32,
    intensity: u8,
) -> ShotframeResult<Canvas> {
    let base = rounded_mask(size, f64::from(radius));

    let mut layer = Canvas::new(size);
    layer.fill_masked(shadow_black(intensity), Offset::ZERO, &base);

    match size.shrink(band_width) {
        Some(inner_size) => {
            let inner_radius = radius.saturating_sub(band_width);
            let inner = rounded_mask(inner_size, f64::from(inner_radius));
            let inset = i64::from(band_width);
            layer.fill_masked(shadow_black(0), Offset::splat(inset), &inner);
        }
        None => {
            tracing::debug!(
                width = size.width(),
                height = size.height(),
                band_width,
                "inner shadow has no interior, skipping cutout"
            );
        }
    }

    layer.gaussian_blur(band_width)
}

/// Soft silhouette of a rounded rectangle, grown by `expansion` on every side
/// so the blur has room to fade out.
pub fn outer_shadow(
    size: Size,
    radius: u32,
    expansion: u32,
    blur: u32,
    fill_alpha: u8,
) -> ShotframeResult<Canvas> {
    let canvas_size = size.grow(expansion)?;
    let silhouette = rounded_mask(size, f64::from(radius));

    let mut layer = Canvas::new(canvas_size);
    layer.fill_masked(
        shadow_black(fill_alpha),
        Offset::splat(i64::from(expansion)),
        &silhouette,
    );

    layer.gaussian_blur(blur)
}

#[cfg(test)]
#[path = "../../tests/unit/effects/shadow.rs"]
mod tests;
