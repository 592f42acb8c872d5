//! Configuration loading.
//!
//! appboot reads an optional `appboot.yml` from the project root. Command
//! line flags are applied on top by [`crate::cli`].

pub mod loader;
pub mod schema;

pub use loader::{discover_config, load_config, load_config_file, CONFIG_FILE_NAME};
pub use schema::{AppbootConfig, LaunchMode, MANIFEST_PLACEHOLDER};
