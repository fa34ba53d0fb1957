//! Shared types for the identicon pipeline.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Re-export `RgbImage` so downstream crates can reference the
/// rendered canvas without depending on `image` directly.
pub use image::RgbImage;

/// Number of bytes in a [`Digest`].
pub const DIGEST_LEN: usize = 16;

/// Side length of the logical grid, in cells.
pub const GRID_SIZE: u32 = 5;

/// Total number of cells in the logical grid.
pub const CELL_COUNT: usize = (GRID_SIZE * GRID_SIZE) as usize;

/// Fixed-length hash of the input string.
///
/// Serialized as a lowercase hex string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Digest(#[serde(serialize_with = "hex::serde::serialize")] [u8; DIGEST_LEN]);

impl Digest {
    /// Wrap raw digest bytes.
    #[must_use]
    pub const fn new(bytes: [u8; DIGEST_LEN]) -> Self {
        Self(bytes)
    }

    /// The raw digest bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }

    /// Lowercase hex encoding, two characters per byte.
    #[must_use]
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// The single foreground color of an identicon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    /// Red channel.
    pub red: u8,
    /// Green channel.
    pub green: u8,
    /// Blue channel.
    pub blue: u8,
}

impl Color {
    /// Create a new color.
    #[must_use]
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Convert to an `image` RGB pixel.
    #[must_use]
    pub const fn to_rgb(self) -> image::Rgb<u8> {
        image::Rgb([self.red, self.green, self.blue])
    }
}

/// The mirrored 5x5 grid of digest values, row-major.
///
/// Every row is a palindrome: column 0 equals column 4 and column 1
/// equals column 3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Grid([u8; CELL_COUNT]);

impl Grid {
    pub(crate) const fn new(values: [u8; CELL_COUNT]) -> Self {
        Self(values)
    }

    /// All 25 values in row-major order.
    #[must_use]
    pub const fn values(&self) -> &[u8; CELL_COUNT] {
        &self.0
    }

    /// Iterate over the grid one row at a time.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.0.chunks_exact(GRID_SIZE as usize)
    }
}

/// Ascending grid indices of the cells that get painted.
///
/// Only the grid builder constructs this, so every index is unique and
/// within `0..CELL_COUNT`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct FilledCells(Vec<usize>);

impl FilledCells {
    pub(crate) const fn new(indices: Vec<usize>) -> Self {
        Self(indices)
    }

    /// Returns `true` if no cell is filled.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of filled cells.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// The filled indices, ascending.
    #[must_use]
    pub fn indices(&self) -> &[usize] {
        &self.0
    }
}

/// A pixel coordinate on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    /// Pixels from the left edge.
    pub x: u32,
    /// Pixels from the top edge.
    pub y: u32,
}

impl Point {
    /// Create a new point.
    #[must_use]
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle covering `[top_left, bottom_right)`.
///
/// A rectangle whose bottom-right corner is not below and right of its
/// top-left corner is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Rect {
    /// Inclusive top-left corner.
    pub top_left: Point,
    /// Exclusive bottom-right corner.
    pub bottom_right: Point,
}

impl Rect {
    /// Create a rectangle from its two corners.
    #[must_use]
    pub const fn new(top_left: Point, bottom_right: Point) -> Self {
        Self {
            top_left,
            bottom_right,
        }
    }

    /// Width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.bottom_right.x.saturating_sub(self.top_left.x)
    }

    /// Height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.bottom_right.y.saturating_sub(self.top_left.y)
    }
}

/// One rectangle per filled cell, in the same order as [`FilledCells`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct PixelMap(Vec<Rect>);

impl PixelMap {
    pub(crate) const fn new(rects: Vec<Rect>) -> Self {
        Self(rects)
    }

    /// Returns `true` if there is nothing to paint.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of rectangles.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// All rectangles in paint order.
    #[must_use]
    pub fn rects(&self) -> &[Rect] {
        &self.0
    }
}

/// Image dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

/// Configuration for the identicon pipeline.
///
/// The grid is always [`GRID_SIZE`] cells wide; only the size of each
/// cell can be changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IdenticonConfig {
    /// Side length of one grid cell in pixels.
    ///
    /// Must be in `1..=`[`Self::MAX_CELL_SIZE`].
    pub cell_size: u32,
}

impl IdenticonConfig {
    /// Default cell size (50 px, giving a 250x250 canvas).
    pub const DEFAULT_CELL_SIZE: u32 = 50;

    /// Largest accepted cell size. Keeps every canvas coordinate
    /// representable as an `i32` for the rasterizer.
    pub const MAX_CELL_SIZE: u32 = 4096;

    /// Side length of the square canvas in pixels.
    #[must_use]
    pub const fn canvas_size(&self) -> u32 {
        GRID_SIZE.saturating_mul(self.cell_size)
    }

    /// Canvas dimensions in pixels.
    #[must_use]
    pub const fn dimensions(&self) -> Dimensions {
        let side = self.canvas_size();
        Dimensions {
            width: side,
            height: side,
        }
    }

    /// Check that the configuration can be rendered.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::InvalidConfig`] if `cell_size` is zero or
    /// larger than [`Self::MAX_CELL_SIZE`].
    pub fn validate(&self) -> Result<(), PipelineError> {
        if self.cell_size == 0 {
            return Err(PipelineError::InvalidConfig(
                "cell_size must be at least 1".to_string(),
            ));
        }
        if self.cell_size > Self::MAX_CELL_SIZE {
            return Err(PipelineError::InvalidConfig(format!(
                "cell_size must be at most {}, got {}",
                Self::MAX_CELL_SIZE,
                self.cell_size,
            )));
        }
        Ok(())
    }
}

impl Default for IdenticonConfig {
    fn default() -> Self {
        Self {
            cell_size: Self::DEFAULT_CELL_SIZE,
        }
    }
}

/// Everything the pipeline produced for one input.
///
/// The PNG bytes are not serialized; the JSON form is a summary of how
/// the image was derived.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Identicon {
    /// The input string the identicon was derived from.
    pub input: String,
    /// Hash of `input`.
    pub digest: Digest,
    /// Foreground color.
    pub color: Color,
    /// Painted grid cells.
    pub cells: FilledCells,
    /// Canvas rectangles for `cells`.
    pub pixel_map: PixelMap,
    /// Canvas dimensions.
    pub dimensions: Dimensions,
    /// Encoded PNG image.
    #[serde(skip)]
    pub png: Vec<u8>,
}

/// Errors that can occur while building an identicon.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// Pipeline configuration is invalid.
    #[error("invalid identicon configuration: {0}")]
    InvalidConfig(String),

    /// The PNG encoder rejected the canvas.
    #[error("failed to encode image: {0}")]
    ImageEncode(#[from] image::ImageError),
}
