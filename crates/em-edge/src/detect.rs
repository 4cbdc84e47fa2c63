use em_core::{Error, Image, ImageView};
use log::debug;

use crate::conv2d::convolve3x3_valid;
use crate::kernels::EdgeFilterBank;

/// The three maps produced from one normalized image.
///
/// `vertical` and `horizontal` are signed gradient responses; `magnitude` is
/// their per-pixel Euclidean combination and is non-negative everywhere.
/// All three share the `(H-2) x (W-2)` valid-convolution shape.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeMaps {
    pub vertical: Image<f32>,
    pub horizontal: Image<f32>,
    pub magnitude: Image<f32>,
}

/// Convolves `img` with both kernels and combines the responses.
///
/// Pure function of its inputs: `img` and `bank` are never mutated and the
/// result is deterministic. Fails only when the input is below the 3x3
/// kernel support.
pub fn detect_edges(img: &ImageView<'_, f32>, bank: &EdgeFilterBank) -> Result<EdgeMaps, Error> {
    let vertical = convolve3x3_valid(img, &bank.vertical)?;
    let horizontal = convolve3x3_valid(img, &bank.horizontal)?;

    let mut mag = Vec::with_capacity(vertical.data().len());
    for (&v, &h) in vertical.data().iter().zip(horizontal.data()) {
        mag.push((v * v + h * h).sqrt());
    }
    let magnitude = Image::from_vec(vertical.width(), vertical.height(), mag)?;

    debug!(
        "detect_edges: {}x{} -> {}x{} maps",
        img.width(),
        img.height(),
        magnitude.width(),
        magnitude.height()
    );

    Ok(EdgeMaps {
        vertical,
        horizontal,
        magnitude,
    })
}
