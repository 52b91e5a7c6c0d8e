//! reqwest-backed provider for native targets.

use crate::config::ProviderConfig;
use crate::error::ProviderError;
use crate::provider::LocationProvider;
use crate::request::Scope;
use async_trait::async_trait;
use log::{info, warn};
use reqwest::Client;

#[derive(Debug, Clone)]
pub struct HttpProvider {
    client: Client,
    config: ProviderConfig,
}

impl HttpProvider {
    pub fn new(config: ProviderConfig) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ProviderError::Transport(e.to_string()))?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }

    /// GET the scope's endpoint and decode a JSON array of names.
    ///
    /// Any status outside 2xx is an error, whatever the body says.
    async fn get_names(&self, scope: &Scope) -> Result<Vec<String>, ProviderError> {
        let url = self.config.url_for(scope);
        info!("GET {}", url);

        let response = self.client.get(&url).send().await.map_err(|e| {
            warn!("Request for {} failed: {}", scope, e);
            ProviderError::Transport(e.to_string())
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!("Bad response status for {}: {}", scope, status);
            return Err(ProviderError::Status {
                status: status.as_u16(),
            });
        }

        response
            .json::<Vec<String>>()
            .await
            .map_err(|e| ProviderError::Decode(e.to_string()))
    }
}

#[async_trait(?Send)]
impl LocationProvider for HttpProvider {
    async fn countries(&self) -> Result<Vec<String>, ProviderError> {
        self.get_names(&Scope::Countries).await
    }

    async fn states(&self, country: &str) -> Result<Vec<String>, ProviderError> {
        self.get_names(&Scope::States {
            country: country.to_string(),
        })
        .await
    }

    async fn cities(&self, country: &str, state: &str) -> Result<Vec<String>, ProviderError> {
        self.get_names(&Scope::Cities {
            country: country.to_string(),
            state: state.to_string(),
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serve one canned HTTP response and return the base URL plus the request line.
    async fn serve_once(
        status_line: &'static str,
        body: &'static str,
    ) -> (String, tokio::task::JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = vec![0u8; 4096];
            let n = socket.read(&mut buf).await.unwrap();
            let request = String::from_utf8_lossy(&buf[..n]).to_string();
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
            request.lines().next().unwrap_or_default().to_string()
        });
        (format!("http://{}", addr), handle)
    }

    #[tokio::test]
    async fn decodes_names_in_order() {
        let (base_url, server) = serve_once("200 OK", r#"["Karnataka","Maharashtra"]"#).await;
        let provider = HttpProvider::new(ProviderConfig::new(base_url)).unwrap();

        let states = provider.states("India").await.unwrap();
        assert_eq!(states, vec!["Karnataka".to_string(), "Maharashtra".to_string()]);

        let request_line = server.await.unwrap();
        assert!(request_line.starts_with("GET /country=India/states "));
    }

    #[tokio::test]
    async fn non_success_status_is_an_error() {
        let (base_url, server) = serve_once("503 Service Unavailable", "[]").await;
        let provider = HttpProvider::new(ProviderConfig::new(base_url)).unwrap();

        let err = provider.countries().await.unwrap_err();
        assert_eq!(err, ProviderError::Status { status: 503 });
        server.await.unwrap();
    }

    #[tokio::test]
    async fn malformed_body_is_a_decode_error() {
        let (base_url, server) = serve_once("200 OK", r#"{"error":"nope"}"#).await;
        let provider = HttpProvider::new(ProviderConfig::new(base_url)).unwrap();

        let err = provider.cities("India", "Goa").await.unwrap_err();
        assert!(matches!(err, ProviderError::Decode(_)));
        server.await.unwrap();
    }

    #[test]
    fn provider_keeps_its_config() {
        let config = ProviderConfig::new("http://127.0.0.1:9");
        let provider = HttpProvider::new(config.clone()).unwrap();
        assert_eq!(provider.config(), &config);
    }

    #[tokio::test]
    async fn unreachable_host_is_a_transport_error() {
        // Port 9 (discard) is closed on test machines; connect fails fast.
        let config = ProviderConfig::new("http://127.0.0.1:9")
            .with_timeout(std::time::Duration::from_secs(2));
        let provider = HttpProvider::new(config).unwrap();
        let err = provider.countries().await.unwrap_err();
        assert!(matches!(err, ProviderError::Transport(_)));
    }
}
