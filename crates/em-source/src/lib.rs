//! Image source boundary: fetch bytes over HTTP and decode to grayscale.
//!
//! The fetch is synchronous (the whole pipeline is a single-threaded
//! script) and the decode accepts whatever container format the `image`
//! crate recognizes, converting to 8-bit luma. Failures wrap the underlying
//! transport or decode cause; there are no retries.

mod error;
mod fetch;

pub use error::SourceError;
pub use fetch::{decode_grayscale, fetch_grayscale};
