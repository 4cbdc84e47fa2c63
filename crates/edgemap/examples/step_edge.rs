//! Example: edge maps of a synthetic slanted step, no network needed.
//!
//! Builds a step image whose boundary is tilted 20 degrees off vertical,
//! normalizes it, runs both gradient kernels, and prints map shapes,
//! response extrema, and timing.
//!
//! Run from the workspace root:
//!   cargo run -p edgemap --example step_edge

use std::time::Instant;

use edgemap::{EdgeFilterBank, Image, detect_edges, normalize_u8};

fn build_slanted_step(width: usize, height: usize, theta_deg: f32) -> Image<u8> {
    let th = theta_deg.to_radians();
    let nx = th.cos();
    let ny = th.sin();
    let t = nx * (0.5 * width as f32) + ny * (0.5 * height as f32);

    let mut data = vec![0u8; width * height];
    for y in 0..height {
        for x in 0..width {
            let d = nx * x as f32 + ny * y as f32 - t;
            data[y * width + x] = if d >= 0.0 { 255 } else { 0 };
        }
    }

    Image::from_vec(width, height, data).expect("valid image")
}

fn extrema(data: &[f32]) -> (f32, f32) {
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
    (min_v, max_v)
}

fn main() {
    let (w, h) = (640usize, 480usize);
    let img = build_slanted_step(w, h, 20.0);
    let normalized = normalize_u8(&img.as_view()).expect("non-empty image");

    let t0 = Instant::now();
    let maps = detect_edges(&normalized.as_view(), &EdgeFilterBank::default())
        .expect("input exceeds kernel support");
    let elapsed_ms = t0.elapsed().as_secs_f64() * 1e3;

    println!(
        "input {w}x{h} -> maps {}x{}  ({elapsed_ms:.2} ms)",
        maps.magnitude.width(),
        maps.magnitude.height()
    );

    for (name, map) in [
        ("vertical", &maps.vertical),
        ("horizontal", &maps.horizontal),
        ("magnitude", &maps.magnitude),
    ] {
        let (min_v, max_v) = extrema(map.data());
        let active = map.data().iter().filter(|&&v| v != 0.0).count();
        println!("  {name:>10}: range [{min_v:+.2}, {max_v:+.2}], {active} non-zero px");
    }
}
