//! Environment verification.
//!
//! Resolves the interpreter on the inherited search path and reads its
//! version. Nothing here mutates the environment.

pub mod interpreter;
pub mod path;

pub use interpreter::{extract_version, verify_interpreter, Interpreter, UNKNOWN_VERSION};
pub use path::{is_executable, SearchPath};
