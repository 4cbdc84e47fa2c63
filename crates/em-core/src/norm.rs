use crate::Error;
use crate::image::{Image, ImageView};

/// Rescales 8-bit intensities from `[0, 255]` to `[0.0, 1.0]`.
///
/// This is a plain division by 255 and is applied exactly once per run:
/// re-applying it to already-normalized data shifts values into
/// `[0, 1/255]` and is a pipeline bug, not a no-op.
pub fn normalize_u8(img: &ImageView<'_, u8>) -> Result<Image<f32>, Error> {
    if img.width() == 0 || img.height() == 0 {
        return Err(Error::Empty);
    }

    let mut out = Vec::with_capacity(img.width() * img.height());
    for y in 0..img.height() {
        for &px in img.row(y) {
            out.push(px as f32 / 255.0);
        }
    }

    Image::from_vec(img.width(), img.height(), out)
}

/// Same rescaling for float inputs already widened to `f32`.
pub fn normalize_f32(img: &ImageView<'_, f32>) -> Result<Image<f32>, Error> {
    if img.width() == 0 || img.height() == 0 {
        return Err(Error::Empty);
    }

    let mut out = Vec::with_capacity(img.width() * img.height());
    for y in 0..img.height() {
        for &px in img.row(y) {
            out.push(px / 255.0);
        }
    }

    Image::from_vec(img.width(), img.height(), out)
}

#[cfg(test)]
mod tests {
    use super::{normalize_f32, normalize_u8};
    use crate::image::{Image, ImageView};
    use crate::Error;

    #[test]
    fn u8_values_map_to_unit_range() {
        let img = Image::from_vec(2, 2, vec![0u8, 51, 204, 255]).expect("valid image");
        let norm = normalize_u8(&img.as_view()).expect("non-empty image");

        assert_eq!(norm.width(), 2);
        assert_eq!(norm.height(), 2);

        let expected = [0.0, 0.2, 0.8, 1.0];
        for (&got, &want) in norm.data().iter().zip(&expected) {
            assert!((got - want).abs() < 1e-6);
        }
    }

    #[test]
    fn empty_input_is_rejected() {
        let data: [u8; 0] = [];
        let view = ImageView::from_slice(0, 0, 0, &data).expect("valid empty view");
        assert_eq!(normalize_u8(&view), Err(Error::Empty));

        let data_f: [f32; 0] = [];
        let view_f = ImageView::from_slice(4, 0, 4, &data_f).expect("valid empty view");
        assert_eq!(normalize_f32(&view_f), Err(Error::Empty));
    }

    #[test]
    fn normalization_is_not_idempotent() {
        let img = Image::from_vec(1, 2, vec![255.0f32, 127.5]).expect("valid image");

        let once = normalize_f32(&img.as_view()).expect("non-empty image");
        let twice = normalize_f32(&once.as_view()).expect("non-empty image");

        assert!((once.data()[0] - 1.0).abs() < 1e-6);
        assert!((twice.data()[0] - 1.0 / 255.0).abs() < 1e-9);
        assert_ne!(once.data(), twice.data());
    }
}
