//! Incremental pipeline: advance stage-by-stage, inspecting each
//! intermediate result before continuing.
//!
//! Unlike [`crate::generate`] which runs the entire pipeline in one
//! call, [`Pipeline`] lets the caller drive execution one step at a time:
//!
//! ```rust
//! # use identicon_pipeline::{IdenticonConfig, Pipeline, PipelineError};
//! # fn run() -> Result<(), PipelineError> {
//! let identicon = Pipeline::new("hey ho", IdenticonConfig::default())?
//!     .hash()
//!     .pick_color()
//!     .build_grid()
//!     .map_pixels()
//!     .render()
//!     .encode()?
//!     .into_result();
//!
//! assert_eq!(identicon.cells.len(), 12);
//! # Ok(())
//! # }
//! ```
//!
//! Each stage method consumes `self` and returns the next pipeline state
//! (or `Result` for encoding), carrying everything computed so far.
//! The configuration is checked once, in [`Pipeline::new`], so an
//! invalid cell size fails before any hashing, as with
//! [`crate::generate`]. A stage cannot run before its inputs exist because the method
//! that runs it only exists on the preceding state.

use crate::types::{
    Color, Digest, FilledCells, Grid, Identicon, IdenticonConfig, PipelineError, PixelMap,
    RgbImage,
};

/// Total number of stages in the pipeline.
pub const STAGE_COUNT: usize = 7;

/// Implemented by every pipeline state.
pub trait PipelineStage {
    /// Human-readable name of this stage (e.g. `"hash"`, `"render"`).
    const NAME: &str;

    /// Zero-based index of this stage (`0` for [`Pending`] through `6`
    /// for [`Encoded`]).
    const INDEX: usize;
}

fn reached<S: PipelineStage>(input: &str) {
    log::debug!(
        "identicon {input:?}: stage {}/{} ({})",
        S::INDEX,
        STAGE_COUNT - 1,
        S::NAME,
    );
}

// ───────────────────────── Stage 0: Pending ──────────────────────────

/// Pipeline state before any processing has occurred.
///
/// Call [`hash`](Self::hash) to advance to the next stage.
#[must_use = "pipeline stages are consumed by advancing; call .hash() to continue"]
pub struct Pending {
    config: IdenticonConfig,
    input: String,
}

impl Pending {
    /// The input string.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Hash the input and advance to the [`Hashed`] stage.
    pub fn hash(self) -> Hashed {
        let digest = crate::hash::hash(&self.input);
        reached::<Hashed>(&self.input);
        Hashed {
            config: self.config,
            input: self.input,
            digest,
        }
    }
}

impl PipelineStage for Pending {
    const NAME: &str = "source";
    const INDEX: usize = 0;
}

// ───────────────────────── Stage 1: Hashed ───────────────────────────

/// Pipeline state after hashing the input.
///
/// Call [`pick_color`](Self::pick_color) to advance to the next stage.
#[must_use = "pipeline stages are consumed by advancing; call .pick_color() to continue"]
pub struct Hashed {
    config: IdenticonConfig,
    input: String,
    digest: Digest,
}

impl Hashed {
    /// The input digest.
    #[must_use]
    pub const fn digest(&self) -> &Digest {
        &self.digest
    }

    /// Advance to the color selection stage.
    pub fn pick_color(self) -> Colored {
        let color = crate::color::pick_color(&self.digest);
        reached::<Colored>(&self.input);
        Colored {
            config: self.config,
            input: self.input,
            digest: self.digest,
            color,
        }
    }
}

impl PipelineStage for Hashed {
    const NAME: &str = "hash";
    const INDEX: usize = 1;
}

// ───────────────────────── Stage 2: Colored ──────────────────────────

/// Pipeline state after choosing the foreground color.
///
/// Call [`build_grid`](Self::build_grid) to advance to the next stage.
#[must_use = "pipeline stages are consumed by advancing; call .build_grid() to continue"]
pub struct Colored {
    config: IdenticonConfig,
    input: String,
    digest: Digest,
    color: Color,
}

impl Colored {
    /// The foreground color.
    #[must_use]
    pub const fn color(&self) -> Color {
        self.color
    }

    /// Advance to the grid stage.
    pub fn build_grid(self) -> Gridded {
        let grid = crate::grid::mirror_grid(&self.digest);
        let cells = crate::grid::filled_cells(&grid);
        reached::<Gridded>(&self.input);
        Gridded {
            config: self.config,
            input: self.input,
            digest: self.digest,
            color: self.color,
            grid,
            cells,
        }
    }
}

impl PipelineStage for Colored {
    const NAME: &str = "color";
    const INDEX: usize = 2;
}

// ───────────────────────── Stage 3: Gridded ──────────────────────────

/// Pipeline state after mirroring the digest into a grid and selecting
/// the filled cells.
///
/// Call [`map_pixels`](Self::map_pixels) to advance to the next stage.
#[must_use = "pipeline stages are consumed by advancing; call .map_pixels() to continue"]
pub struct Gridded {
    config: IdenticonConfig,
    input: String,
    digest: Digest,
    color: Color,
    grid: Grid,
    cells: FilledCells,
}

impl Gridded {
    /// The mirrored 5x5 grid.
    #[must_use]
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The filled cells.
    #[must_use]
    pub const fn cells(&self) -> &FilledCells {
        &self.cells
    }

    /// Advance to the pixel mapping stage.
    pub fn map_pixels(self) -> Mapped {
        let pixel_map = crate::pixel_map::build_pixel_map(&self.cells, self.config.cell_size);
        reached::<Mapped>(&self.input);
        Mapped {
            config: self.config,
            input: self.input,
            digest: self.digest,
            color: self.color,
            cells: self.cells,
            pixel_map,
        }
    }
}

impl PipelineStage for Gridded {
    const NAME: &str = "grid";
    const INDEX: usize = 3;
}

// ───────────────────────── Stage 4: Mapped ───────────────────────────

/// Pipeline state after converting filled cells to canvas rectangles.
///
/// Call [`render`](Self::render) to advance to the next stage.
#[must_use = "pipeline stages are consumed by advancing; call .render() to continue"]
pub struct Mapped {
    config: IdenticonConfig,
    input: String,
    digest: Digest,
    color: Color,
    cells: FilledCells,
    pixel_map: PixelMap,
}

impl Mapped {
    /// The canvas rectangles, one per filled cell.
    #[must_use]
    pub const fn pixel_map(&self) -> &PixelMap {
        &self.pixel_map
    }

    /// Advance to the render stage.
    pub fn render(self) -> Rendered {
        let canvas =
            crate::raster::render(self.color, &self.pixel_map, self.config.canvas_size());
        reached::<Rendered>(&self.input);
        Rendered {
            config: self.config,
            input: self.input,
            digest: self.digest,
            color: self.color,
            cells: self.cells,
            pixel_map: self.pixel_map,
            canvas,
        }
    }
}

impl PipelineStage for Mapped {
    const NAME: &str = "pixel map";
    const INDEX: usize = 4;
}

// ───────────────────────── Stage 5: Rendered ─────────────────────────

/// Pipeline state after painting the canvas.
///
/// Call [`encode`](Self::encode) to advance to the final stage.
#[must_use = "pipeline stages are consumed by advancing; call .encode() to continue"]
pub struct Rendered {
    config: IdenticonConfig,
    input: String,
    digest: Digest,
    color: Color,
    cells: FilledCells,
    pixel_map: PixelMap,
    canvas: RgbImage,
}

impl Rendered {
    /// The painted canvas.
    #[must_use]
    pub const fn canvas(&self) -> &RgbImage {
        &self.canvas
    }

    /// Encode the canvas as PNG, the final pipeline step.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::ImageEncode`] if the PNG encoder fails.
    pub fn encode(self) -> Result<Encoded, PipelineError> {
        let png = crate::raster::encode_png(&self.canvas)?;
        reached::<Encoded>(&self.input);
        Ok(Encoded {
            config: self.config,
            input: self.input,
            digest: self.digest,
            color: self.color,
            cells: self.cells,
            pixel_map: self.pixel_map,
            png,
        })
    }
}

impl PipelineStage for Rendered {
    const NAME: &str = "render";
    const INDEX: usize = 5;
}

// ───────────────────────── Stage 6: Encoded ──────────────────────────

/// Pipeline state after PNG encoding. This is the final stage.
///
/// Call [`into_result`](Self::into_result) to extract the [`Identicon`].
#[must_use = "call .into_result() to extract the Identicon"]
pub struct Encoded {
    config: IdenticonConfig,
    input: String,
    digest: Digest,
    color: Color,
    cells: FilledCells,
    pixel_map: PixelMap,
    png: Vec<u8>,
}

impl Encoded {
    /// The encoded PNG bytes.
    #[must_use]
    pub fn png(&self) -> &[u8] {
        &self.png
    }

    /// Consume the pipeline and return the finished [`Identicon`].
    #[must_use]
    pub fn into_result(self) -> Identicon {
        Identicon {
            input: self.input,
            digest: self.digest,
            color: self.color,
            cells: self.cells,
            pixel_map: self.pixel_map,
            dimensions: self.config.dimensions(),
            png: self.png,
        }
    }
}

impl PipelineStage for Encoded {
    const NAME: &str = "encode";
    const INDEX: usize = 6;
}

// ───────────────────────── Entry point ───────────────────────────────

/// Namespace for starting an incremental pipeline run.
pub struct Pipeline;

impl Pipeline {
    /// Create a new pipeline for `input`.
    ///
    /// Only the configuration is checked. Call
    /// [`.hash()`](Pending::hash) to begin.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::InvalidConfig`] if the configured cell
    /// size is out of range.
    #[allow(clippy::new_ret_no_self)]
    pub fn new(
        input: impl Into<String>,
        config: IdenticonConfig,
    ) -> Result<Pending, PipelineError> {
        config.validate()?;
        Ok(Pending {
            config,
            input: input.into(),
        })
    }
}
