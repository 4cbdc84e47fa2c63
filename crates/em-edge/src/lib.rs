//! Fixed-kernel gradient maps for the edgemap pipeline.
//!
//! Conventions:
//! - Kernels are applied as a *cross-correlation* (no kernel flip), matching
//!   the usual deep-learning convolution semantics.
//! - Convolution is *valid*: the kernel is applied only where it fully
//!   overlaps the input, so output maps are `(H-2) x (W-2)` for a 3x3
//!   kernel. The shrink is deliberate; there is no padding or border policy.
//! - Inputs are expected in normalized `[0, 1]` intensity. The gradient maps
//!   are then signed with range roughly `[-3, 3]` (each kernel's positive
//!   taps sum to 3); the combined magnitude is non-negative.

pub mod conv2d;
pub mod detect;
pub mod kernels;

pub use conv2d::convolve3x3_valid;
pub use detect::{EdgeMaps, detect_edges};
pub use kernels::{EdgeFilterBank, Kernel3x3};
