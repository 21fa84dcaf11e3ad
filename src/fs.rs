//! Filesystem access used by the materializer.

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// Filesystem operations needed to lay out a generated project.
pub trait FileSystem {
    /// Whether anything exists at `path`.
    fn exists(&self, path: &Path) -> bool;

    /// Creates `path` and all missing parents.
    fn create_dir_all(&self, path: &Path) -> Result<()>;

    /// Writes `content` to `path`, replacing any existing file.
    fn write(&self, path: &Path, content: &str) -> Result<()>;
}

/// [`FileSystem`] backed by `std::fs`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalFileSystem;

impl FileSystem for LocalFileSystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn create_dir_all(&self, path: &Path) -> Result<()> {
        fs::create_dir_all(path)
            .map_err(|source| Error::CreateDirError { path: path.to_path_buf(), source })
    }

    fn write(&self, path: &Path, content: &str) -> Result<()> {
        fs::write(path, content)
            .map_err(|source| Error::WriteError { path: path.to_path_buf(), source })
    }
}
