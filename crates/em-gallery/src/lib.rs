//! Renderer boundary: turn f32 maps into displayable panels and compose the
//! 2x2 comparison grid.
//!
//! Every panel is min-max stretched independently, so the signed gradient
//! maps and the non-negative magnitude all use the full 8-bit range. The
//! gradient panels are two pixels smaller than the original (valid
//! convolution); they are anchored at their cell origin over a black
//! background rather than resampled.

mod montage;
mod stretch;

pub use montage::render_grid;
pub use stretch::{stretch_panel, stretch_to_u8};
