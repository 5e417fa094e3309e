use std::path::{Path, PathBuf};

use crate::effects::shadow::{inner_shadow, outer_shadow};
use crate::foundation::config::FrameStyle;
use crate::foundation::core::Offset;
use crate::foundation::error::{ShotframeError, ShotframeResult};
use crate::raster::canvas::Canvas;
use crate::raster::mask::rounded_mask;

/// Frame `source` with the default [`FrameStyle`].
pub fn composite(source: &image::DynamicImage) -> ShotframeResult<Canvas> {
    composite_with(source, &FrameStyle::default())
}

/// Frame a decoded image of any pixel layout; see [`frame_canvas`].
pub fn composite_with(
    source: &image::DynamicImage,
    style: &FrameStyle,
) -> ShotframeResult<Canvas> {
    frame_canvas(Canvas::from_dynamic(source)?, style)
}

/// Round the corners of `source`, darken its inner edge and drop it onto a
/// padded transparent canvas above a soft shadow.
///
/// The output is `source + 2 * style.padding` in both axes. The shadow is laid
/// down before the image so the image covers it where they overlap.
#[tracing::instrument(skip_all, fields(width = source.width(), height = source.height()))]
pub fn frame_canvas(source: Canvas, style: &FrameStyle) -> ShotframeResult<Canvas> {
    let size = source.size();

    let clip = rounded_mask(size, f64::from(style.corner_radius));
    let mut foreground = Canvas::new(size);
    foreground.paste(&source, Offset::ZERO, &clip)?;
    drop(source);

    let inner = inner_shadow(
        size,
        style.corner_radius,
        style.inner_band,
        style.inner_alpha,
    )?;
    foreground.alpha_composite(&inner)?;

    let shadow = outer_shadow(
        size,
        style.corner_radius,
        style.outer_expansion,
        style.outer_blur,
        style.outer_alpha,
    )?;

    let mut out = Canvas::new(size.grow(style.padding)?);
    out.paste_self_masked(&shadow, Offset::splat(style.shadow_origin()));
    out.paste_self_masked(&foreground, Offset::splat(i64::from(style.padding)));

    tracing::debug!(
        out_width = out.width(),
        out_height = out.height(),
        "composited frame"
    );
    Ok(out)
}

/// Output path for `input` inside `output_dir`: same stem, always `.png`.
pub fn output_path_for(input: &Path, output_dir: &Path) -> ShotframeResult<PathBuf> {
    let stem = input.file_stem().ok_or_else(|| {
        ShotframeError::validation(format!("'{}' has no file name", input.display()))
    })?;
    let mut name = stem.to_os_string();
    name.push(".png");
    Ok(output_dir.join(name))
}

/// Load `input`, frame it and save it as `<stem>.png` in `output_dir`.
pub fn process_file(
    input: &Path,
    output_dir: &Path,
    style: &FrameStyle,
) -> ShotframeResult<PathBuf> {
    let out_path = output_path_for(input, output_dir)?;

    let source = Canvas::load(input)?;
    let framed = frame_canvas(source, style)?;
    framed.save_png(&out_path)?;
    Ok(out_path)
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
