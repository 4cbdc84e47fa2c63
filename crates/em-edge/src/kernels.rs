/// Fixed 3x3 gradient kernel.
///
/// Conventions:
/// - Coefficients are cross-correlation weights; `coeffs[ky][kx]` multiplies
///   the input sample at `(x + kx, y + ky)` relative to the output pixel.
/// - Each kernel's coefficients sum to zero, so constant regions produce a
///   zero response.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Kernel3x3 {
    pub coeffs: [[f32; 3]; 3],
}

impl Kernel3x3 {
    /// Responds to left-to-right intensity transitions, i.e. vertical edges.
    pub const VERTICAL: Self = Self {
        coeffs: [[1.0, 0.0, -1.0], [1.0, 0.0, -1.0], [1.0, 0.0, -1.0]],
    };

    /// Responds to top-to-bottom intensity transitions, i.e. horizontal edges.
    pub const HORIZONTAL: Self = Self {
        coeffs: [[1.0, 1.0, 1.0], [0.0, 0.0, 0.0], [-1.0, -1.0, -1.0]],
    };

    pub fn sum(&self) -> f32 {
        self.coeffs.iter().flatten().sum()
    }
}

/// The two constant kernels applied to every image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeFilterBank {
    pub vertical: Kernel3x3,
    pub horizontal: Kernel3x3,
}

impl Default for EdgeFilterBank {
    fn default() -> Self {
        Self {
            vertical: Kernel3x3::VERTICAL,
            horizontal: Kernel3x3::HORIZONTAL,
        }
    }
}
