//! shotframe turns a folder of screenshots into framed PNGs.
//!
//! Every image gets rounded corners, a faint inner shadow along its edge and
//! a soft drop shadow, and is placed on a transparent canvas with padding on
//! every side.
//!
//! # Pipeline overview
//!
//! 1. **Mask**: [`rounded_mask`] clips the source to a rounded rectangle.
//! 2. **Shadows**: [`inner_shadow`] darkens the inside edge, [`outer_shadow`]
//!    builds the blurred silhouette that sits underneath.
//! 3. **Composite**: [`composite`] stacks shadow and image on the padded
//!    canvas.
//! 4. **Batch**: [`process_folder`] runs the above for each image in a folder,
//!    isolating per-file failures.
//!
//! Geometry is fixed by [`FrameStyle::default`]. Pixels are straight-alpha
//! RGBA8; blurs run in premultiplied space internally.
#![forbid(unsafe_code)]

mod batch;
mod effects;
mod foundation;
mod raster;
mod render;

pub use batch::folder::{
    BatchReport, FileEvent, FileFailure, OUTPUT_DIR_SUFFIX, SUPPORTED_EXTENSIONS,
    default_output_dir, display_name, is_supported_image, process_folder, process_folder_with,
};
pub use effects::shadow::{inner_shadow, outer_shadow};
pub use foundation::config::FrameStyle;
pub use foundation::core::{Offset, Rgba8, Size};
pub use foundation::error::{ShotframeError, ShotframeResult};
pub use raster::canvas::Canvas;
pub use raster::mask::{Mask, clamp_radius, rounded_mask};
pub use render::pipeline::{composite, composite_with, frame_canvas, output_path_for, process_file};
