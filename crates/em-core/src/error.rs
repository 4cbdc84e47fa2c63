use core::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    SizeMismatch { expected: usize, actual: usize },
    InvalidStride,
    Empty,
    TooSmall { width: usize, height: usize, min: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SizeMismatch { expected, actual } => {
                write!(f, "size mismatch: expected {expected}, got {actual}")
            }
            Self::InvalidStride => write!(f, "invalid stride"),
            Self::Empty => write!(f, "empty image (zero width or height)"),
            Self::TooSmall { width, height, min } => {
                write!(f, "image {width}x{height} is below the {min}x{min} kernel support")
            }
        }
    }
}

impl std::error::Error for Error {}
