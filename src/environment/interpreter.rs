//! Interpreter verification.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use regex::Regex;

use super::path::SearchPath;
use crate::error::{AppbootError, Result};
use crate::shell::execute_quiet;
use crate::ui::UserInterface;

/// Shown when the interpreter runs but its version cannot be read.
pub const UNKNOWN_VERSION: &str = "unknown";

/// An interpreter that was found on the search path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interpreter {
    /// Resolved executable path.
    pub path: PathBuf,
    /// First line the version query printed, e.g. `Python 3.12.1`.
    pub version: String,
}

impl Interpreter {
    /// Dotted version number extracted from the version string, if any.
    pub fn version_number(&self) -> Option<&str> {
        extract_version(&self.version)
    }

    /// Write the two diagnostic lines: resolved path, then version.
    pub fn report(&self, ui: &mut dyn UserInterface) {
        ui.message(&format!("Using interpreter: {}", self.path.display()));
        ui.message(&self.version);
    }
}

/// Locate `name` on `search_path` and query its version.
///
/// Path-like names are taken relative to `project_root`, where the
/// interpreter will run. Fails with [`AppbootError::InterpreterNotFound`]
/// when nothing resolves. A version query that cannot run or prints nothing is not fatal.
pub fn verify_interpreter(
    name: &str,
    version_args: &[String],
    search_path: &SearchPath,
    project_root: &Path,
) -> Result<Interpreter> {
    let path = search_path
        .resolve(name, project_root)
        .ok_or_else(|| AppbootError::InterpreterNotFound {
            name: name.to_string(),
        })?;

    let version = query_version(&path, version_args).unwrap_or_else(|| {
        tracing::warn!(interpreter = %path.display(), "could not read interpreter version");
        UNKNOWN_VERSION.to_string()
    });

    let interpreter = Interpreter { path, version };

    tracing::debug!(
        path = %interpreter.path.display(),
        version = interpreter.version_number().unwrap_or(UNKNOWN_VERSION),
        "interpreter verified"
    );

    Ok(interpreter)
}

/// Run the version query and return its first non-empty line.
///
/// Stdout is preferred; older interpreters print their version to stderr.
fn query_version(path: &Path, version_args: &[String]) -> Option<String> {
    let result = execute_quiet(path, version_args).ok()?;
    if !result.success {
        return None;
    }

    first_line(&result.stdout).or_else(|| first_line(&result.stderr))
}

fn first_line(text: &str) -> Option<String> {
    text.lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .map(str::to_string)
}

/// Extract a dotted version number from version output.
pub fn extract_version(output: &str) -> Option<&str> {
    static VERSION: OnceLock<Option<Regex>> = OnceLock::new();
    let re = VERSION
        .get_or_init(|| Regex::new(r"(\d+\.\d+(?:\.\d+)?)").ok())
        .as_ref()?;
    re.captures(output)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}
