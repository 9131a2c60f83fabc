//! Registry implementations for fetching package metadata

pub mod npm;

pub use npm::{DEFAULT_REGISTRY, NpmRegistry, ORIGINAL_REGISTRY, default_registry};
