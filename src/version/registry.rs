//! Registry trait for fetching package metadata from a remote source

#[cfg(test)]
use mockall::automock;

use crate::version::error::RegistryError;
use crate::version::types::RegistryMetadata;

/// Trait for fetching package metadata from a registry
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait Registry: Send + Sync {
    /// Fetches the metadata document for a package
    ///
    /// # Arguments
    /// * `package_name` - The name of the package (e.g., "lodash" or "@types/node")
    ///
    /// # Returns
    /// * `Ok(Some(RegistryMetadata))` - The registry answered 200 with a document
    /// * `Ok(None)` - Empty package name or a non-200 status
    /// * `Err(RegistryError)` - Transport failure or an unparseable body
    async fn fetch_metadata(
        &self,
        package_name: &str,
    ) -> Result<Option<RegistryMetadata>, RegistryError>;
}
