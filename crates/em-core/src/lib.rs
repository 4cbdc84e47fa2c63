//! Foundational primitives for the edgemap pipeline.
//!
//! ## Image Views and Stride
//! Images use element stride (not byte stride). `stride` is the distance, in
//! elements, between adjacent row starts and may be greater than `width`.
//! This allows borrowed views over padded buffers.
//!
//! ## Intensity Normalization
//! Pixel intensities enter the pipeline as 8-bit values in `[0, 255]` and are
//! rescaled once to `[0.0, 1.0]` by dividing by 255. Normalization is not
//! idempotent; it is applied exactly once per run, right after decode.

mod error;
mod image;
mod norm;

pub use error::Error;
pub use image::{Image, ImageView, to_f32};
pub use norm::{normalize_f32, normalize_u8};
