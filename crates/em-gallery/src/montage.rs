use em_core::{ImageView, to_f32};
use em_edge::EdgeMaps;
use image::{GrayImage, imageops};

use crate::stretch::stretch_panel;

/// Gap between panels, in pixels.
const PANEL_GAP: u32 = 4;

/// Composes the 2x2 comparison grid: original (top-left), vertical edges
/// (top-right), horizontal edges (bottom-left), combined magnitude
/// (bottom-right). Each panel is stretched independently; the smaller
/// gradient panels sit at their cell origin over a black background.
pub fn render_grid(original: &ImageView<'_, u8>, maps: &EdgeMaps) -> GrayImage {
    let panels = [
        stretch_panel(&to_f32(original).as_view()),
        stretch_panel(&maps.vertical.as_view()),
        stretch_panel(&maps.horizontal.as_view()),
        stretch_panel(&maps.magnitude.as_view()),
    ];

    let cell_w = panels.iter().map(|p| p.width()).max().unwrap_or(0);
    let cell_h = panels.iter().map(|p| p.height()).max().unwrap_or(0);

    let mut canvas = GrayImage::new(2 * cell_w + PANEL_GAP, 2 * cell_h + PANEL_GAP);
    for (i, panel) in panels.iter().enumerate() {
        let x = (i as u32 % 2) * (cell_w + PANEL_GAP);
        let y = (i as u32 / 2) * (cell_h + PANEL_GAP);
        imageops::replace(&mut canvas, panel, i64::from(x), i64::from(y));
    }

    canvas
}

#[cfg(test)]
mod tests {
    use em_core::Image;
    use em_edge::{EdgeFilterBank, detect_edges};

    use crate::montage::{PANEL_GAP, render_grid};

    fn step_image(width: usize, height: usize) -> Image<u8> {
        let mut data = vec![0u8; width * height];
        for y in 0..height {
            for x in width / 2..width {
                data[y * width + x] = 255;
            }
        }
        Image::from_vec(width, height, data).expect("valid image")
    }

    #[test]
    fn grid_is_two_cells_per_axis_plus_gap() {
        let original = step_image(6, 6);
        let normalized = em_core::normalize_u8(&original.as_view()).expect("non-empty image");
        let maps =
            detect_edges(&normalized.as_view(), &EdgeFilterBank::default()).expect("valid input");

        let grid = render_grid(&original.as_view(), &maps);
        assert_eq!(grid.dimensions(), (12 + PANEL_GAP, 12 + PANEL_GAP));
    }

    #[test]
    fn panels_land_at_their_cell_origins() {
        let original = step_image(6, 6);
        let normalized = em_core::normalize_u8(&original.as_view()).expect("non-empty image");
        let maps =
            detect_edges(&normalized.as_view(), &EdgeFilterBank::default()).expect("valid input");

        let grid = render_grid(&original.as_view(), &maps);
        let cell = 6 + PANEL_GAP;

        // Original panel: stretched step keeps its dark left half.
        assert_eq!(grid.get_pixel(0, 0).0[0], 0);
        assert_eq!(grid.get_pixel(5, 0).0[0], 255);

        // Vertical-edge panel occupies the top-right cell; its response is
        // strongest at the step, so the stretched panel is not flat.
        let tr: Vec<u8> = (0..4).map(|x| grid.get_pixel(cell + x, 0).0[0]).collect();
        assert!(tr.iter().any(|&v| v > 0));

        // Gradient panels are 4x4 inside 6x6 cells: rows 4-5 of the
        // bottom-right cell stay background black.
        assert_eq!(grid.get_pixel(cell, cell + 4).0[0], 0);
        assert_eq!(grid.get_pixel(cell, cell + 5).0[0], 0);
    }

    #[test]
    fn pipeline_normalizes_exactly_once() {
        // A 0 -> 255 step normalized once swings the vertical response to
        // exactly -3; a second normalization would shrink it to -3/255.
        let original = step_image(6, 6);
        let normalized = em_core::normalize_u8(&original.as_view()).expect("non-empty image");
        let maps =
            detect_edges(&normalized.as_view(), &EdgeFilterBank::default()).expect("valid input");

        let min = maps
            .vertical
            .data()
            .iter()
            .cloned()
            .fold(f32::INFINITY, f32::min);
        assert_eq!(min, -3.0);
    }

    #[test]
    fn gap_columns_stay_black() {
        let original = step_image(8, 8);
        let normalized = em_core::normalize_u8(&original.as_view()).expect("non-empty image");
        let maps =
            detect_edges(&normalized.as_view(), &EdgeFilterBank::default()).expect("valid input");

        let grid = render_grid(&original.as_view(), &maps);
        for y in 0..grid.height() {
            for gx in 0..PANEL_GAP {
                assert_eq!(grid.get_pixel(8 + gx, y).0[0], 0);
            }
        }
    }
}
