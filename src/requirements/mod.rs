//! Dependency installation.
//!
//! # Modules
//!
//! - [`manifest`] - Location and readability of the dependency manifest
//! - [`installer`] - Package manager invocation and failure classification

pub mod installer;
pub mod manifest;

pub use installer::{install, InstallPlan};
pub use manifest::Manifest;
