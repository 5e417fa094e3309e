use kurbo::Shape;

use crate::foundation::core::Size;

/// Single-channel coverage buffer. 255 keeps a pixel, 0 drops it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mask {
    size: Size,
    data: image::GrayImage,
}

impl Mask {
    /// Fully transparent mask of `size`.
    pub fn empty(size: Size) -> Self {
        Self {
            size,
            data: image::GrayImage::new(size.width(), size.height()),
        }
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

    /// Coverage at `(x, y)`. Panics when out of bounds, like `image::GrayImage`.
    pub fn get(&self, x: u32, y: u32) -> u8 {
        self.data.get_pixel(x, y).0[0]
    }

    pub fn set(&mut self, x: u32, y: u32, v: u8) {
        self.data.put_pixel(x, y, image::Luma([v]));
    }

    pub fn as_raw(&self) -> &[u8] {
        self.data.as_raw()
    }
}

/// Corner radius actually drawn for `size`.
///
/// Radii above `min(w, h) / 2` collapse to a pill (or a circle for square
/// sizes) instead of overlapping corners. Negative or non-finite values draw
/// square corners.
pub fn clamp_radius(size: Size, radius: f64) -> f64 {
    if !radius.is_finite() || radius <= 0.0 {
        return 0.0;
    }
    radius.min(f64::from(size.min_side()) / 2.0)
}

/// Hard-edged rounded rectangle covering the whole `size`, corner radius `radius`.
///
/// The shape spans the pixel area `[0, w] x [0, h]`, so the outermost row and
/// column are covered along the straight edges. A pixel is on when its center
/// falls inside the shape.
pub fn rounded_mask(size: Size, radius: f64) -> Mask {
    let radius = clamp_radius(size, radius);
    let rr = kurbo::RoundedRect::new(
        0.0,
        0.0,
        f64::from(size.width()),
        f64::from(size.height()),
        radius,
    );

    let mut mask = Mask::empty(size);
    for y in 0..size.height() {
        let cy = f64::from(y) + 0.5;
        for x in 0..size.width() {
            let p = kurbo::Point::new(f64::from(x) + 0.5, cy);
            if rr.contains(p) {
                mask.set(x, y, 255);
            }
        }
    }
    mask
}

#[cfg(test)]
#[path = "../../tests/unit/raster/mask.rs"]
mod tests;
