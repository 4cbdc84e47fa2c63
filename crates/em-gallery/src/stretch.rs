use em_core::ImageView;
use image::GrayImage;

/// Min-max stretches a float panel into the displayable `[0, 255]` range.
///
/// A flat panel (max == min) maps to all zeros.
pub fn stretch_to_u8(data: &[f32]) -> Vec<u8> {
    if data.is_empty() {
        return Vec::new();
    }

    let mut min_v = f32::INFINITY;
    let mut max_v = f32::NEG_INFINITY;
    for &v in data {
        if v < min_v {
            min_v = v;
        }
        if v > max_v {
            max_v = v;
        }
    }

    if (max_v - min_v).abs() < 1e-12 {
        return vec![0u8; data.len()];
    }

    let scale = 255.0 / (max_v - min_v);
    data.iter()
        .map(|&v| ((v - min_v) * scale).round().clamp(0.0, 255.0) as u8)
        .collect()
}

/// Stretches one map into a displayable grayscale panel.
pub fn stretch_panel(img: &ImageView<'_, f32>) -> GrayImage {
    let mut data = Vec::with_capacity(img.width() * img.height());
    for y in 0..img.height() {
        data.extend_from_slice(img.row(y));
    }

    let bytes = stretch_to_u8(&data);
    GrayImage::from_raw(img.width() as u32, img.height() as u32, bytes)
        .expect("panel buffer length matches its dimensions")
}
