//! Registry test utilities

use mockito::{Mock, Server, ServerGuard};

/// npm-compatible registry served by mockito
pub struct RegistryServer {
    server: ServerGuard,
}

impl RegistryServer {
    pub async fn start() -> Self {
        Self {
            server: Server::new_async().await,
        }
    }

    pub fn url(&self) -> String {
        self.server.url()
    }

    /// Serve a package document whose `versions` keys appear in the given order
    pub async fn with_versions(&mut self, package: &str, versions: &[&str]) -> Mock {
        // Written by hand: serde_json's default map would sort the keys
        let versions = versions
            .iter()
            .map(|v| format!(r#""{v}": {{"version": "{v}"}}"#))
            .collect::<Vec<_>>()
            .join(", ");
        let body = format!(r#"{{"name": "{package}", "versions": {{{versions}}}}}"#);

        self.server
            .mock("GET", format!("/{}", package).as_str())
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create_async()
            .await
    }

    /// Serve an arbitrary 200 JSON document
    pub async fn with_document(&mut self, package: &str, body: &str) -> Mock {
        self.server
            .mock("GET", format!("/{}", package).as_str())
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create_async()
            .await
    }

    pub async fn with_status(&mut self, package: &str, status: usize) -> Mock {
        self.server
            .mock("GET", format!("/{}", package).as_str())
            .with_status(status)
            .create_async()
            .await
    }
}

/// Endpoint on a local port nothing listens on
pub fn unreachable_endpoint() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}", port)
}
