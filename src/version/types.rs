//! Common types shared by the registry client and the resolver

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Package document returned by a registry lookup
///
/// Only the key set of `versions` is consumed. `IndexMap` keeps the
/// registry's own key order. A document without `versions` fails to parse.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RegistryMetadata {
    #[serde(default)]
    pub name: Option<String>,
    pub versions: IndexMap<String, serde_json::Value>,
}

impl RegistryMetadata {
    /// Published version strings in registry order
    pub fn version_keys(&self) -> Vec<String> {
        self.versions.keys().cloned().collect()
    }
}

/// Outcome of an update check
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStatus {
    pub update_available: bool,
    pub latest: Option<String>,
}
