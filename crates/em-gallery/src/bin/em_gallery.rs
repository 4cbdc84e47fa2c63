//! Edge-map gallery demo.
//!
//! Linear synchronous script: fetch one image over HTTP, convert to
//! grayscale, normalize to [0, 1], run the two fixed gradient kernels,
//! combine them into a magnitude map, and write the 2x2 comparison grid
//! (original / vertical / horizontal / combined) as a PNG in the working
//! directory.
//!
//! There are no CLI flags; the source URL is fixed. Any failure aborts the
//! run with its cause attached.

use std::time::Instant;

use anyhow::{Context, Result};
use em_core::normalize_u8;
use em_edge::{EdgeFilterBank, detect_edges};
use em_gallery::render_grid;
use em_source::fetch_grayscale;

/// Demo image: chess-piece silhouettes with strong edges in both
/// orientations.
const SOURCE_URL: &str = "https://media.istockphoto.com/vectors/chess-silhouettes-vector-id165635822?b=1&k=20&m=165635822&s=612x612&w=0&h=pmf6FVa--nzyWCKb0SyTkIi3xdaHaamJuaR-FIjw1iI=";

const OUTPUT_PATH: &str = "edge_maps.png";

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let t_fetch = Instant::now();
    let original =
        fetch_grayscale(SOURCE_URL).with_context(|| format!("fetching {SOURCE_URL}"))?;
    println!(
        "fetched {}x{} grayscale image ({:.0} ms)",
        original.width(),
        original.height(),
        elapsed_ms(t_fetch)
    );

    let normalized = normalize_u8(&original.as_view()).context("normalizing image")?;

    let t_detect = Instant::now();
    let maps = detect_edges(&normalized.as_view(), &EdgeFilterBank::default())
        .context("detecting edges")?;
    println!(
        "edge maps {}x{} ({:.2} ms)",
        maps.magnitude.width(),
        maps.magnitude.height(),
        elapsed_ms(t_detect)
    );

    let grid = render_grid(&original.as_view(), &maps);
    grid.save(OUTPUT_PATH)
        .with_context(|| format!("saving {OUTPUT_PATH}"))?;
    println!("wrote {OUTPUT_PATH} ({}x{})", grid.width(), grid.height());

    Ok(())
}

fn elapsed_ms(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1e3
}
