use std::path::Path;

use anyhow::Context as _;

use crate::foundation::core::{Offset, Rgba8, Size};
use crate::foundation::error::{ShotframeError, ShotframeResult};
use crate::raster::blur::box_blur_rgba8_premul;
use crate::raster::composite::{
    lerp_masked, over_straight_in_place, premultiply_rgba8_in_place, unpremultiply_rgba8_in_place,
};
use crate::raster::mask::Mask;

/// Straight-alpha RGBA8 pixel buffer. Never empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Canvas {
    size: Size,
    data: image::RgbaImage,
}

impl Canvas {
    /// Fully transparent canvas.
    pub fn new(size: Size) -> Self {
        Self {
            size,
            data: image::RgbaImage::new(size.width(), size.height()),
        }
    }

    /// Canvas where every pixel is `color`.
    pub fn filled(size: Size, color: Rgba8) -> Self {
        Self {
            size,
            data: image::RgbaImage::from_pixel(size.width(), size.height(), image::Rgba(color)),
        }
    }

    pub fn from_rgba_image(data: image::RgbaImage) -> ShotframeResult<Self> {
        let (width, height) = data.dimensions();
        let size = Size::new(width, height)?;
        Ok(Self { size, data })
    }

    /// Convert any decoded image to RGBA8.
    pub fn from_dynamic(img: &image::DynamicImage) -> ShotframeResult<Self> {
        Self::from_rgba_image(img.to_rgba8())
    }

    /// Decode an image file, sniffing the format from its contents.
    ///
    /// Multi-frame formats yield their first frame.
    pub fn load(path: &Path) -> ShotframeResult<Self> {
        Self::from_dynamic(&decode_image_file(path)?)
    }

    pub fn save_png(&self, path: &Path) -> ShotframeResult<()> {
        self.data
            .save_with_format(path, image::ImageFormat::Png)
            .with_context(|| format!("write png '{}'", path.display()))?;
        Ok(())
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn width(&self) -> u32 {
        self.size.width()
    }

    pub fn height(&self) -> u32 {
        self.size.height()
    }

    pub fn get(&self, x: u32, y: u32) -> Rgba8 {
        self.data.get_pixel(x, y).0
    }

    pub fn put(&mut self, x: u32, y: u32, px: Rgba8) {
        self.data.put_pixel(x, y, image::Rgba(px));
    }

    pub fn as_raw(&self) -> &[u8] {
        self.data.as_raw()
    }

    /// Paste `src` with its top-left corner at `at`, blending through `mask`.
    ///
    /// `mask` must match `src` in size. Pixels falling outside `self` are dropped.
    pub fn paste(&mut self, src: &Canvas, at: Offset, mask: &Mask) -> ShotframeResult<()> {
        ensure_mask_fits(src.size, mask)?;
        self.blend_region(src.size, at, |x, y, dst| {
            lerp_masked(dst, src.get(x, y), mask.get(x, y))
        });
        Ok(())
    }

    /// Paste `src` at `at` using its own alpha channel as the mask.
    pub fn paste_self_masked(&mut self, src: &Canvas, at: Offset) {
        self.blend_region(src.size, at, |x, y, dst| {
            let px = src.get(x, y);
            lerp_masked(dst, px, px[3])
        });
    }

    /// Paste a solid `color` through `mask`, with the mask's top-left corner at `at`.
    pub fn fill_masked(&mut self, color: Rgba8, at: Offset, mask: &Mask) {
        self.blend_region(mask.size(), at, |x, y, dst| {
            lerp_masked(dst, color, mask.get(x, y))
        });
    }

    /// Straight-alpha source-over of a same-sized `src` onto `self`.
    pub fn alpha_composite(&mut self, src: &Canvas) -> ShotframeResult<()> {
        if src.size != self.size {
            return Err(ShotframeError::validation(format!(
                "alpha_composite size mismatch: {}x{} over {}x{}",
                src.width(),
                src.height(),
                self.width(),
                self.height()
            )));
        }
        over_straight_in_place(&mut *self.data, src.as_raw())
    }

    /// Gaussian blur with standard deviation `radius` pixels.
    ///
    /// Works in premultiplied space so transparent neighbours do not bleed
    /// their color into the result.
    pub fn gaussian_blur(&self, radius: u32) -> ShotframeResult<Canvas> {
        if radius == 0 {
            return Ok(self.clone());
        }
        let mut out = self.data.as_raw().clone();
        premultiply_rgba8_in_place(&mut out);
        box_blur_rgba8_premul(&mut out, self.width(), self.height(), radius as f32)?;
        unpremultiply_rgba8_in_place(&mut out);

        let data = image::RgbaImage::from_raw(self.width(), self.height(), out)
            .ok_or_else(|| ShotframeError::validation("blur output size mismatch"))?;
        Ok(Self {
            size: self.size,
            data,
        })
    }

    /// Apply `blend(src_x, src_y, dst_px)` over the part of a `region`-sized
    /// layer placed at `at` that overlaps this canvas.
    fn blend_region(
        &mut self,
        region: Size,
        at: Offset,
        mut blend: impl FnMut(u32, u32, Rgba8) -> Rgba8,
    ) {
        let (dw, dh) = (i64::from(self.width()), i64::from(self.height()));
        let x0 = at.x.max(0);
        let y0 = at.y.max(0);
        let x1 = (at.x + i64::from(region.width())).min(dw);
        let y1 = (at.y + i64::from(region.height())).min(dh);
        if x0 >= x1 || y0 >= y1 {
            return;
        }
        for dy in y0..y1 {
            let sy = (dy - at.y) as u32;
            for dx in x0..x1 {
                let sx = (dx - at.x) as u32;
                let (dx, dy) = (dx as u32, dy as u32);
                let out = blend(sx, sy, self.get(dx, dy));
                self.put(dx, dy, out);
            }
        }
    }
}

/// Decode an image file, trusting its contents over its extension.
fn decode_image_file(path: &Path) -> ShotframeResult<image::DynamicImage> {
    let img = image::ImageReader::open(path)
        .with_context(|| format!("open image '{}'", path.display()))?
        .with_guessed_format()
        .with_context(|| format!("read image '{}'", path.display()))?
        .decode()
        .with_context(|| format!("decode image '{}'", path.display()))?;
    Ok(img)
}

fn ensure_mask_fits(size: Size, mask: &Mask) -> ShotframeResult<()> {
    if mask.size() != size {
        return Err(ShotframeError::validation(format!(
            "mask is {}x{} but layer is {}x{}",
            mask.width(),
            mask.height(),
            size.width(),
            size.height()
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/raster/canvas.rs"]
mod tests;
