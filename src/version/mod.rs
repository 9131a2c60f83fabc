//! Version resolution layer for update checks
//!
//! Fetches package metadata from an npm-compatible registry, filters the
//! published versions against the running version, and decides whether an
//! update is available.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  Registry   │────▶│  Resolver   │────▶│   Semver    │
//! │  (fetch)    │     │  (filter)   │     │  (compare)  │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!        │
//!        ▼
//! ┌─────────────┐
//! │ Registries  │
//! │   (npm)     │
//! └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`registry`]: Registry trait for fetching package metadata
//! - [`registries`]: Concrete registry implementations (npm)
//! - [`resolver`]: Compatible-version filtering and update checks
//! - [`semver`]: Version parsing, precedence and caret matching
//! - [`error`]: Error types for registry operations
//! - [`types`]: `RegistryMetadata` and `UpdateStatus`

pub mod error;
pub mod registries;
pub mod registry;
pub mod resolver;
pub mod semver;
pub mod types;

pub use resolver::{VersionResolver, filter_compatible_newer};
pub use types::{RegistryMetadata, UpdateStatus};
