//! Writing encoded identicons to disk.
//!
//! The file name is the raw input string with a `.png` extension. It is
//! not sanitized: an input containing path separators writes outside
//! the target directory, and an input that is not a valid file name
//! fails with a [`WriteError`].

use std::path::{Path, PathBuf};

/// File extension appended to every identicon name.
pub const EXTENSION: &str = "png";

/// A failed identicon write.
#[derive(Debug, thiserror::Error)]
#[error("failed to write {}: {source}", .path.display())]
pub struct WriteError {
    /// The destination that could not be written.
    pub path: PathBuf,
    /// The underlying I/O error.
    pub source: std::io::Error,
}

/// Destination of the identicon named `name` inside `dir`.
#[must_use]
pub fn output_path(dir: &Path, name: &str) -> PathBuf {
    dir.join(format!("{name}.{EXTENSION}"))
}

/// Write `png` to `<name>.png` in the current working directory,
/// overwriting any existing file.
///
/// # Errors
///
/// Returns [`WriteError`] if the file cannot be created or written.
pub fn save(png: &[u8], name: &str) -> Result<PathBuf, WriteError> {
    save_in(Path::new(""), png, name)
}

/// Write `png` to `<name>.png` inside `dir`, overwriting any existing
/// file. The directory must already exist.
///
/// # Errors
///
/// Returns [`WriteError`] if the file cannot be created or written.
pub fn save_in(dir: &Path, png: &[u8], name: &str) -> Result<PathBuf, WriteError> {
    let path = output_path(dir, name);
    match std::fs::write(&path, png) {
        Ok(()) => {
            log::info!("wrote {} ({} bytes)", path.display(), png.len());
            Ok(path)
        }
        Err(source) => {
            log::debug!("write to {} failed: {source}", path.display());
            Err(WriteError { path, source })
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("identicon-writer-{name}-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn output_path_appends_extension() {
        assert_eq!(
            output_path(Path::new("out"), "hey ho"),
            PathBuf::from("out/hey ho.png")
        );
        assert_eq!(output_path(Path::new(""), "alice"), PathBuf::from("alice.png"));
    }

    #[test]
    fn output_path_keeps_input_verbatim() {
        assert_eq!(
            output_path(Path::new("out"), "a.b"),
            PathBuf::from("out/a.b.png")
        );
    }

    #[test]
    fn save_in_writes_bytes() {
        let dir = scratch_dir("writes");
        let path = save_in(&dir, b"not really a png", "alice").unwrap();
        assert_eq!(path, dir.join("alice.png"));
        assert_eq!(std::fs::read(&path).unwrap(), b"not really a png");
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn save_in_overwrites_existing_file() {
        let dir = scratch_dir("overwrite");
        save_in(&dir, b"first, and longer", "bob").unwrap();
        let path = save_in(&dir, b"second", "bob").unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), b"second");
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn missing_directory_surfaces_error() {
        let root = scratch_dir("missing");
        let dir = root.join("does-not-exist");
        let err = save_in(&dir, b"png", "carol").unwrap_err();
        assert_eq!(err.path, dir.join("carol.png"));
        assert_eq!(err.source.kind(), std::io::ErrorKind::NotFound);
        assert!(!err.path.exists());
        std::fs::remove_dir_all(&root).ok();
    }

    #[test]
    fn error_display_names_path() {
        let err = WriteError {
            path: PathBuf::from("nowhere/dave.png"),
            source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        };
        assert!(err.to_string().starts_with("failed to write nowhere/dave.png: "));
    }
}
