use core::fmt;

/// Failure to retrieve or decode the source image.
///
/// Each variant keeps its cause so callers can inspect or re-wrap it; the
/// pipeline itself treats any of these as fatal.
#[derive(Debug)]
pub enum SourceError {
    Fetch(Box<ureq::Error>),
    Read(std::io::Error),
    Decode(image::ImageError),
    Layout(em_core::Error),
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fetch(e) => write!(f, "failed to fetch image: {e}"),
            Self::Read(e) => write!(f, "failed to read image bytes: {e}"),
            Self::Decode(e) => write!(f, "failed to decode image: {e}"),
            Self::Layout(e) => write!(f, "decoded image has an invalid layout: {e}"),
        }
    }
}

impl std::error::Error for SourceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Fetch(e) => Some(e.as_ref()),
            Self::Read(e) => Some(e),
            Self::Decode(e) => Some(e),
            Self::Layout(e) => Some(e),
        }
    }
}

impl From<ureq::Error> for SourceError {
    fn from(e: ureq::Error) -> Self {
        Self::Fetch(Box::new(e))
    }
}

impl From<std::io::Error> for SourceError {
    fn from(e: std::io::Error) -> Self {
        Self::Read(e)
    }
}

impl From<image::ImageError> for SourceError {
    fn from(e: image::ImageError) -> Self {
        Self::Decode(e)
    }
}

impl From<em_core::Error> for SourceError {
    fn from(e: em_core::Error) -> Self {
        Self::Layout(e)
    }
}
