//! Executable lookup on the search path.
//!
//! Lookup walks the `PATH` entries directly instead of shelling out to
//! `which`, whose behavior varies across systems and is sometimes a shell
//! builtin with inconsistent error handling.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Ordered list of directories searched for executables.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchPath {
    entries: Vec<PathBuf>,
    extensions: Vec<OsString>,
}

impl SearchPath {
    /// Read the search path from the current process environment.
    pub fn from_env() -> Self {
        let entries = std::env::var_os("PATH")
            .map(|path| std::env::split_paths(&path).collect())
            .unwrap_or_default();

        Self {
            entries,
            extensions: executable_extensions(),
        }
    }

    /// Build a search path from explicit entries.
    pub fn from_entries(entries: Vec<PathBuf>) -> Self {
        Self {
            entries,
            extensions: executable_extensions(),
        }
    }

    /// Resolve `name` to an absolute path to an executable file.
    ///
    /// Names containing a path separator are taken relative to `base`, the
    /// directory the program will later run in. Bare names are looked up in
    /// each entry in order and the first executable match wins.
    pub fn resolve(&self, name: &str, base: &Path) -> Option<PathBuf> {
        if name.is_empty() {
            return None;
        }

        let as_path = Path::new(name);
        let found = if as_path.components().count() > 1 || as_path.is_absolute() {
            self.find_in(&base.join(as_path))
        } else {
            self.entries
                .iter()
                // An empty PATH entry means the current directory.
                .map(|dir| {
                    if dir.as_os_str().is_empty() {
                        Path::new(".").join(name)
                    } else {
                        dir.join(name)
                    }
                })
                .find_map(|candidate| self.find_in(&candidate))
        }?;

        // Children run from the project root, so relative hits must not stay relative.
        Some(std::path::absolute(&found).unwrap_or(found))
    }

    fn find_in(&self, candidate: &Path) -> Option<PathBuf> {
        if is_executable(candidate) {
            return Some(candidate.to_path_buf());
        }

        self.extensions.iter().find_map(|ext| {
            let mut with_ext = candidate.as_os_str().to_os_string();
            with_ext.push(ext);
            let with_ext = PathBuf::from(with_ext);
            is_executable(&with_ext).then_some(with_ext)
        })
    }
}

/// Check whether a path is a regular file with executable permission bits set.
#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

/// On Windows, executability is determined by file extension, not permission bits.
#[cfg(not(unix))]
pub fn is_executable(path: &Path) -> bool {
    path.is_file()
}

#[cfg(windows)]
fn executable_extensions() -> Vec<OsString> {
    std::env::var("PATHEXT")
        .unwrap_or_else(|_| ".COM;.EXE;.BAT;.CMD".to_string())
        .split(';')
        .filter(|e| !e.is_empty())
        .map(OsString::from)
        .collect()
}

#[cfg(not(windows))]
fn executable_extensions() -> Vec<OsString> {
    Vec::new()
}
