//! Dependency manifest handle.
//!
//! The manifest's format belongs to the package manager. appboot only
//! tracks where it lives and whether it can be read.

use std::fs::File;
use std::path::{Path, PathBuf};

/// The file listing the application's dependencies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
    path: PathBuf,
}

impl Manifest {
    /// Manifest at `path`, resolved against `project_root` when relative.
    pub fn new(project_root: &Path, path: &Path) -> Self {
        let path = if path.is_absolute() {
            path.to_path_buf()
        } else {
            project_root.join(path)
        };
        Self { path }
    }

    /// Absolute or project-rooted path to the manifest.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the manifest exists and can be opened for reading.
    pub fn is_readable(&self) -> bool {
        self.path.is_file() && File::open(&self.path).is_ok()
    }
}
