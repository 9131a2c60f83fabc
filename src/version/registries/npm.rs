//! npm registry API implementation

use reqwest::StatusCode;

use crate::version::error::RegistryError;
use crate::version::registry::Registry;
use crate::version::types::RegistryMetadata;

/// Public mirror queried when no registry is configured
pub const DEFAULT_REGISTRY: &str = "https://registry.npmmirror.com";

/// The upstream npm registry
pub const ORIGINAL_REGISTRY: &str = "https://registry.npmjs.org";

/// Select the registry endpoint used when the caller supplies none.
pub fn default_registry(original: bool) -> &'static str {
    if original {
        ORIGINAL_REGISTRY
    } else {
        DEFAULT_REGISTRY
    }
}

/// Registry implementation for npm-compatible registry APIs
#[derive(Clone)]
pub struct NpmRegistry {
    client: reqwest::Client,
    base_url: String,
}

impl NpmRegistry {
    /// Creates a new NpmRegistry bound to `base_url`
    pub fn new(base_url: &str) -> Result<Self, RegistryError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("cli-core/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.to_string(),
        })
    }

    /// Encode package name for URL (handles scoped packages)
    fn encode_package_name(package_name: &str) -> String {
        if package_name.starts_with('@') {
            // Scoped package: @scope/name -> @scope%2Fname
            package_name.replace('/', "%2F")
        } else {
            package_name.to_string()
        }
    }

    /// Join the base URL and the package name with exactly one `/`
    fn package_url(&self, package_name: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let name = Self::encode_package_name(package_name.trim_start_matches('/'));
        format!("{}/{}", base, name)
    }
}

#[async_trait::async_trait]
impl Registry for NpmRegistry {
    async fn fetch_metadata(
        &self,
        package_name: &str,
    ) -> Result<Option<RegistryMetadata>, RegistryError> {
        if package_name.is_empty() {
            return Ok(None);
        }

        let url = self.package_url(package_name);
        let response = self.client.get(&url).send().await?;

        if response.status() != StatusCode::OK {
            return Ok(None);
        }

        let body = response.text().await?;
        let metadata: RegistryMetadata = serde_json::from_str(&body)?;

        Ok(Some(metadata))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;
    use rstest::rstest;

    #[rstest]
    #[case(false, DEFAULT_REGISTRY)]
    #[case(true, ORIGINAL_REGISTRY)]
    fn default_registry_selects_endpoint(#[case] original: bool, #[case] expected: &str) {
        assert_eq!(default_registry(original), expected);
    }

    #[rstest]
    #[case("https://registry.npmjs.org", "lodash", "https://registry.npmjs.org/lodash")]
    #[case("https://registry.npmjs.org/", "lodash", "https://registry.npmjs.org/lodash")]
    #[case("https://registry.npmjs.org//", "/lodash", "https://registry.npmjs.org/lodash")]
    #[case(
        "https://mirror.example.com/npm/",
        "@types/node",
        "https://mirror.example.com/npm/@types%2Fnode"
    )]
    fn package_url_normalizes_slashes(
        #[case] base_url: &str,
        #[case] package_name: &str,
        #[case] expected: &str,
    ) {
        let registry = NpmRegistry::new(base_url).unwrap();
        assert_eq!(registry.package_url(package_name), expected);
    }

    #[tokio::test]
    async fn fetch_metadata_returns_versions_in_registry_order() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/lodash")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{
                    "name": "lodash",
                    "versions": {
                        "4.17.21": {},
                        "4.17.19": {},
                        "4.17.20": {}
                    }
                }"#,
            )
            .create_async()
            .await;

        let registry = NpmRegistry::new(&server.url()).unwrap();
        let metadata = registry.fetch_metadata("lodash").await.unwrap().unwrap();

        mock.assert_async().await;
        assert_eq!(
            metadata.version_keys(),
            vec!["4.17.21", "4.17.19", "4.17.20"]
        );
    }

    #[tokio::test]
    async fn fetch_metadata_tolerates_trailing_slash_in_endpoint() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/lodash")
            .with_status(200)
            .with_body(r#"{"versions": {"1.0.0": {}}}"#)
            .create_async()
            .await;

        let registry = NpmRegistry::new(&format!("{}/", server.url())).unwrap();
        let metadata = registry.fetch_metadata("lodash").await.unwrap();

        mock.assert_async().await;
        assert!(metadata.is_some());
    }

    #[tokio::test]
    async fn fetch_metadata_handles_scoped_package() {
        let mut server = Server::new_async().await;

        // Scoped packages use URL encoding: @types/node -> @types%2Fnode
        let mock = server
            .mock("GET", "/@types%2Fnode")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"name": "@types/node", "versions": {"20.0.0": {}, "18.0.0": {}}}"#)
            .create_async()
            .await;

        let registry = NpmRegistry::new(&server.url()).unwrap();
        let metadata = registry
            .fetch_metadata("@types/node")
            .await
            .unwrap()
            .unwrap();

        mock.assert_async().await;
        assert_eq!(metadata.version_keys(), vec!["20.0.0", "18.0.0"]);
    }

    #[rstest]
    #[case(404)]
    #[case(500)]
    #[case(403)]
    #[tokio::test]
    async fn fetch_metadata_returns_none_for_non_ok_status(#[case] status: usize) {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/missing-package")
            .with_status(status)
            .with_body(r#"{"error": "Not found"}"#)
            .create_async()
            .await;

        let registry = NpmRegistry::new(&server.url()).unwrap();
        let result = registry.fetch_metadata("missing-package").await.unwrap();

        mock.assert_async().await;
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn fetch_metadata_skips_network_for_empty_package_name() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", mockito::Matcher::Any)
            .expect(0)
            .create_async()
            .await;

        let registry = NpmRegistry::new(&server.url()).unwrap();
        let result = registry.fetch_metadata("").await.unwrap();

        mock.assert_async().await;
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn fetch_metadata_propagates_parse_failure() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/broken")
            .with_status(200)
            .with_header("content-type", "text/html")
            .with_body("<html>gateway</html>")
            .create_async()
            .await;

        let registry = NpmRegistry::new(&server.url()).unwrap();
        let result = registry.fetch_metadata("broken").await;

        mock.assert_async().await;
        assert!(matches!(result, Err(RegistryError::InvalidResponse(_))));
    }

    #[tokio::test]
    async fn fetch_metadata_rejects_document_without_versions() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/pkgX")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"error":"gone"}"#)
            .create_async()
            .await;

        let registry = NpmRegistry::new(&server.url()).unwrap();
        let result = registry.fetch_metadata("pkgX").await;

        mock.assert_async().await;
        assert!(matches!(result, Err(RegistryError::InvalidResponse(_))));
    }

    #[tokio::test]
    async fn fetch_metadata_propagates_connection_refused() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let registry = NpmRegistry::new(&format!("http://127.0.0.1:{}", port)).unwrap();
        let result = registry.fetch_metadata("lodash").await;

        assert!(matches!(result, Err(RegistryError::Network(_))));
    }
}
