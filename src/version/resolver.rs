//! Compatible-version resolution against a remote registry
//!
//! Answers "which published version of a package is compatible with the
//! current one" and "is it newer than what is running".

use std::sync::Arc;

use crate::version::error::RegistryError;
use crate::version::registries::{NpmRegistry, default_registry};
use crate::version::registry::Registry;
use crate::version::semver::{caret_of, cmp_precedence, greater_than, parse_version};
use crate::version::types::{RegistryMetadata, UpdateStatus};

/// Keep the versions that satisfy `^base_version`, sorted ascending by
/// semver precedence.
///
/// Unparseable entries are dropped. The sort is stable, so versions that
/// differ only in build metadata keep their input order.
pub fn filter_compatible_newer(base_version: &str, versions: &[String]) -> Vec<String> {
    let Some(base) = parse_version(base_version) else {
        return Vec::new();
    };
    let caret = caret_of(&base);

    let mut compatible: Vec<_> = versions
        .iter()
        .filter_map(|v| parse_version(v).map(|parsed| (v, parsed)))
        .filter(|(_, parsed)| caret.matches(parsed))
        .collect();

    compatible.sort_by(|(_, a), (_, b)| cmp_precedence(a, b));

    compatible.into_iter().map(|(v, _)| v.clone()).collect()
}

/// Resolves versions of a package published in one registry
#[derive(Clone)]
pub struct VersionResolver {
    registry: Arc<dyn Registry>,
}

impl VersionResolver {
    pub fn new(registry: Arc<dyn Registry>) -> Self {
        Self { registry }
    }

    /// Resolver backed by the npm registry at `endpoint`, or the default
    /// mirror when none is given
    pub fn for_endpoint(endpoint: Option<&str>) -> Result<Self, RegistryError> {
        let endpoint = endpoint.unwrap_or_else(|| default_registry(false));
        Ok(Self::new(Arc::new(NpmRegistry::new(endpoint)?)))
    }

    pub async fn fetch_metadata(
        &self,
        package_name: &str,
    ) -> Result<Option<RegistryMetadata>, RegistryError> {
        self.registry.fetch_metadata(package_name).await
    }

    /// All published versions in the registry's own order
    pub async fn list_versions(&self, package_name: &str) -> Result<Vec<String>, RegistryError> {
        Ok(self
            .fetch_metadata(package_name)
            .await?
            .map(|metadata| metadata.version_keys())
            .unwrap_or_default())
    }

    /// First entry of the ascending compatible set.
    ///
    /// This is the smallest compatible version, not the largest. Callers that
    /// offer it as an upgrade rely on this order.
    pub async fn resolve_latest_compatible(
        &self,
        base_version: &str,
        package_name: &str,
    ) -> Result<Option<String>, RegistryError> {
        let versions = self.list_versions(package_name).await?;
        Ok(filter_compatible_newer(base_version, &versions)
            .into_iter()
            .next())
    }

    pub async fn check_for_update(
        &self,
        current_version: &str,
        package_name: &str,
    ) -> Result<UpdateStatus, RegistryError> {
        let latest = self
            .resolve_latest_compatible(current_version, package_name)
            .await?;

        let update_available = latest
            .as_deref()
            .is_some_and(|latest| greater_than(latest, current_version));

        Ok(UpdateStatus {
            update_available,
            latest,
        })
    }
}
