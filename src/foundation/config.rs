/// Rounded-corner radius applied to every source image.
pub const CORNER_RADIUS: u32 = 15;
/// Width of the dark band left by the inner shadow.
pub const INNER_SHADOW_BAND: u32 = 3;
/// Alpha of the inner shadow band before blurring.
pub const INNER_SHADOW_ALPHA: u8 = 30;
/// Gaussian blur radius of the drop shadow.
pub const OUTER_SHADOW_BLUR: u32 = 25;
/// Extra room around the drop shadow silhouette so the blur is not cut off.
pub const OUTER_SHADOW_EXPANSION: u32 = 60;
/// Alpha of the drop shadow silhouette before blurring.
pub const OUTER_SHADOW_ALPHA: u8 = 60;
/// Transparent border added on every side of the output.
pub const CANVAS_PADDING: u32 = 60;
/// Drop shadow displacement, down and to the right.
pub const SHADOW_OFFSET: u32 = 15;

/// Geometry of the frame drawn around each image.
///
/// Values are fixed at compile time; [`FrameStyle::default`] is what the CLI
/// uses. The struct exists so tests and library callers can pass explicit
/// parameters through the pipeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameStyle {
    pub corner_radius: u32,
    pub inner_band: u32,
    pub inner_alpha: u8,
    pub outer_blur: u32,
    pub outer_expansion: u32,
    pub outer_alpha: u8,
    pub padding: u32,
    pub shadow_offset: u32,
}

impl Default for FrameStyle {
    fn default() -> Self {
        Self {
            corner_radius: CORNER_RADIUS,
            inner_band: INNER_SHADOW_BAND,
            inner_alpha: INNER_SHADOW_ALPHA,
            outer_blur: OUTER_SHADOW_BLUR,
            outer_expansion: OUTER_SHADOW_EXPANSION,
            outer_alpha: OUTER_SHADOW_ALPHA,
            padding: CANVAS_PADDING,
            shadow_offset: SHADOW_OFFSET,
        }
    }
}

impl FrameStyle {
    /// Where the top-left corner of the drop shadow layer lands on the output canvas.
    pub fn shadow_origin(&self) -> i64 {
        i64::from(self.padding) - i64::from(self.outer_expansion) + i64::from(self.shadow_offset)
    }
}
