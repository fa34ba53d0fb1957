//! identicon-pipeline: Pure identicon pipeline (sans-IO).
//!
//! Derives a symmetric 5x5 pixel-art avatar from an input string through:
//! hash -> color -> mirrored grid -> pixel map -> render -> PNG encode.
//!
//! This crate has **no I/O dependencies** -- it returns encoded PNG bytes
//! and structured data. Writing files lives in `identicon-io`.

pub mod color;
pub mod grid;
pub mod hash;
pub mod pipeline;
pub mod pixel_map;
pub mod raster;
pub mod types;

pub use color::pick_color;
pub use grid::build_grid;
pub use hash::hash;
pub use pipeline::Pipeline;
pub use pixel_map::build_pixel_map;
pub use raster::{encode_png, render};
pub use types::{
    CELL_COUNT, Color, DIGEST_LEN, Digest, Dimensions, FilledCells, GRID_SIZE, Grid, Identicon,
    IdenticonConfig, PipelineError, PixelMap, Point, Rect,
};

/// Run the full identicon pipeline.
///
/// # Pipeline steps
///
/// 1. MD5-hash the input
/// 2. Take digest bytes 0..3 as the foreground color
/// 3. Mirror digest bytes 0..15 into a 5x5 grid and keep the even cells
/// 4. Map filled cells to canvas rectangles
/// 5. Paint them on a white canvas
/// 6. Encode the canvas as PNG
///
/// # Errors
///
/// Returns [`PipelineError::InvalidConfig`] if `config.cell_size` is out
/// of range. Returns [`PipelineError::ImageEncode`] if PNG encoding fails.
pub fn generate(input: &str, config: &IdenticonConfig) -> Result<Identicon, PipelineError> {
    config.validate()?;

    // 1. Hash.
    let digest = hash(input);

    // 2. Color.
    let color = pick_color(&digest);

    // 3. Grid.
    let cells = build_grid(&digest);

    // 4. Pixel map.
    let pixel_map = build_pixel_map(&cells, config.cell_size);

    // 5-6. Render and encode.
    let canvas = render(color, &pixel_map, config.canvas_size());
    let png = encode_png(&canvas)?;

    log::debug!(
        "identicon {input:?}: digest {digest}, {} filled cells, {} PNG bytes",
        cells.len(),
        png.len(),
    );

    Ok(Identicon {
        input: input.to_owned(),
        digest,
        color,
        cells,
        pixel_map,
        dimensions: config.dimensions(),
        png,
    })
}
