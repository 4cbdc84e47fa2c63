use std::io::Read;

use em_core::Image;
use log::debug;

use crate::error::SourceError;

/// Upper bound on the fetched body, in bytes. Far above any realistic
/// photo; bodies past the cap surface as a truncated decode failure.
const MAX_BODY_BYTES: u64 = 64 * 1024 * 1024;

/// Fetches `url` and decodes the response body to 8-bit grayscale.
pub fn fetch_grayscale(url: &str) -> Result<Image<u8>, SourceError> {
    debug!("fetching {url}");
    let response = ureq::get(url).call()?;

    let mut bytes = Vec::new();
    response
        .into_reader()
        .take(MAX_BODY_BYTES)
        .read_to_end(&mut bytes)?;
    debug!("fetched {} bytes", bytes.len());

    decode_grayscale(&bytes)
}

/// Decodes an in-memory image and converts it to 8-bit luma.
///
/// Split out of [`fetch_grayscale`] so the decode path is exercisable
/// without a network.
pub fn decode_grayscale(bytes: &[u8]) -> Result<Image<u8>, SourceError> {
    let luma = image::load_from_memory(bytes)?.into_luma8();
    let (w, h) = luma.dimensions();
    let data = luma.into_raw();

    debug!("decoded {w}x{h} grayscale image");
    Ok(Image::from_vec(w as usize, h as usize, data)?)
}
