//! identicon-io: Filesystem output for identicons.
//!
//! Runs the pure `identicon-pipeline` and writes the resulting PNG to
//! disk. This is the only crate in the workspace that touches the
//! filesystem.

pub mod writer;

use std::path::{Path, PathBuf};

use identicon_pipeline::{Identicon, IdenticonConfig, PipelineError};

pub use writer::{WriteError, output_path, save, save_in};

/// Errors that can occur while generating and saving an identicon.
#[derive(Debug, thiserror::Error)]
pub enum IdenticonError {
    /// The pipeline rejected the configuration or failed to encode.
    #[error(transparent)]
    Pipeline(#[from] PipelineError),

    /// The PNG could not be written.
    #[error(transparent)]
    Write(#[from] WriteError),
}

/// Generate the identicon for `input` and save it as `<input>.png` in
/// the current working directory, overwriting any existing file.
///
/// Returns the path that was written.
///
/// # Errors
///
/// Returns [`IdenticonError::Write`] if the file cannot be written.
pub fn generate_identicon(input: &str) -> Result<PathBuf, IdenticonError> {
    let (_, path) = generate_identicon_with(input, &IdenticonConfig::default(), Path::new(""))?;
    Ok(path)
}

/// Generate the identicon for `input` with `config` and save it as
/// `<input>.png` inside `dir`.
///
/// Returns the finished [`Identicon`] together with the written path.
///
/// # Errors
///
/// Returns [`IdenticonError::Pipeline`] if `config` is invalid or
/// encoding fails, and [`IdenticonError::Write`] if the file cannot be
/// written. Nothing is written when the pipeline fails.
pub fn generate_identicon_with(
    input: &str,
    config: &IdenticonConfig,
    dir: &Path,
) -> Result<(Identicon, PathBuf), IdenticonError> {
    let identicon = identicon_pipeline::generate(input, config)?;
    let path = save_in(dir, &identicon.png, input)?;
    Ok((identicon, path))
}
