use em_core::{Error, Image, ImageView};

use crate::kernels::Kernel3x3;

/// Valid 2D cross-correlation of `src` with a 3x3 kernel, stride 1.
///
/// The kernel is applied only where it fully overlaps the input, so the
/// output is `(H-2) x (W-2)`. Inputs below 3x3 in either dimension are
/// rejected.
pub fn convolve3x3_valid(
    src: &ImageView<'_, f32>,
    kernel: &Kernel3x3,
) -> Result<Image<f32>, Error> {
    let w = src.width();
    let h = src.height();
    if w < 3 || h < 3 {
        return Err(Error::TooSmall {
            width: w,
            height: h,
            min: 3,
        });
    }

    let out_w = w - 2;
    let out_h = h - 2;
    let k = &kernel.coeffs;

    let mut out = Vec::with_capacity(out_w * out_h);
    for y in 0..out_h {
        let r0 = src.row(y);
        let r1 = src.row(y + 1);
        let r2 = src.row(y + 2);

        for x in 0..out_w {
            let acc = k[0][0] * r0[x]
                + k[0][1] * r0[x + 1]
                + k[0][2] * r0[x + 2]
                + k[1][0] * r1[x]
                + k[1][1] * r1[x + 1]
                + k[1][2] * r1[x + 2]
                + k[2][0] * r2[x]
                + k[2][1] * r2[x + 1]
                + k[2][2] * r2[x + 2];
            out.push(acc);
        }
    }

    Image::from_vec(out_w, out_h, out)
}
