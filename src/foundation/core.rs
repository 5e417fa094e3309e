use crate::foundation::error::{ShotframeError, ShotframeResult};

/// Pixel dimensions of a canvas or mask. Both axes are always >= 1.
///
/// The fields are private so every `Size` goes through [`Size::new`] or one of
/// the checked constructors below.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Size {
    width: u32,
    height: u32,
}

impl Size {
    pub fn new(width: u32, height: u32) -> ShotframeResult<Self> {
        if width == 0 || height == 0 {
            return Err(ShotframeError::validation(format!(
                "size must be non-empty, got {width}x{height}"
            )));
        }
        Ok(Self { width, height })
    }

    pub fn width(self) -> u32 {
        self.width
    }

    pub fn height(self) -> u32 {
        self.height
    }

    /// Grow by `margin` on every side (`+2*margin` per axis).
    pub fn grow(self, margin: u32) -> ShotframeResult<Self> {
        let extra = margin
            .checked_mul(2)
            .ok_or_else(|| ShotframeError::validation("margin overflow"))?;
        let width = self
            .width
            .checked_add(extra)
            .ok_or_else(|| ShotframeError::validation("width overflow"))?;
        let height = self
            .height
            .checked_add(extra)
            .ok_or_else(|| ShotframeError::validation("height overflow"))?;
        Ok(Self { width, height })
    }

    /// Shrink by `margin` on every side. `None` once either axis would reach zero.
    pub fn shrink(self, margin: u32) -> Option<Self> {
        let extra = margin.checked_mul(2)?;
        let width = self.width.checked_sub(extra).filter(|&w| w > 0)?;
        let height = self.height.checked_sub(extra).filter(|&h| h > 0)?;
        Some(Self { width, height })
    }

    pub fn min_side(self) -> u32 {
        self.width.min(self.height)
    }
}

/// Signed placement of a layer's top-left corner inside a larger canvas.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Offset {
    pub x: i64,
    pub y: i64,
}

impl Offset {
    pub const ZERO: Self = Self { x: 0, y: 0 };

    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    pub fn splat(v: i64) -> Self {
        Self { x: v, y: v }
    }
}

/// Straight (non-premultiplied) RGBA8 color.
pub type Rgba8 = [u8; 4];

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
