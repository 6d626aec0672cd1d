//! HTTP client for network-based API calls

use reqwest::{Client, Method, StatusCode, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::{ClientConfig, ClientError, ClientResult};

/// HTTP client for making requests to the products API
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let base_url = config.base_url.trim_end_matches('/').to_string();
        Url::parse(&base_url)
            .map_err(|e| ClientError::Config(format!("invalid base URL {base_url:?}: {e}")))?;

        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout_duration() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self { client, base_url })
    }

    /// Get the base URL (without trailing slash)
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Make a GET request and decode the JSON body
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let url = self.url(path);
        tracing::debug!(%url, "GET");
        let response = self.client.get(&url).send().await?;
        Self::handle_json(response).await
    }

    /// Make a request with a JSON body; any 2xx is success and the body is dropped
    pub async fn send_json<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> ClientResult<StatusCode> {
        let url = self.url(path);
        tracing::debug!(%url, %method, "sending JSON body");
        let response = self.client.request(method, &url).json(body).send().await?;
        Self::handle_status(response).await
    }

    /// Make a DELETE request that must answer with exactly `expected`
    pub async fn delete(&self, path: &str, expected: StatusCode) -> ClientResult<()> {
        let url = self.url(path);
        tracing::debug!(%url, "DELETE");
        let response = self.client.delete(&url).send().await?;
        let status = Self::handle_status(response).await?;
        if status != expected {
            return Err(ClientError::UnexpectedStatus {
                expected,
                actual: status,
            });
        }
        Ok(())
    }

    /// Fail on non-success status, returning the status otherwise
    async fn handle_status(response: reqwest::Response) -> ClientResult<StatusCode> {
        let status = response.status();
        if !status.is_success() {
            return Err(Self::status_error(response).await);
        }
        Ok(status)
    }

    /// Handle the HTTP response, decoding the body as JSON
    async fn handle_json<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        if !response.status().is_success() {
            return Err(Self::status_error(response).await);
        }
        let text = response.text().await?;
        serde_json::from_str(&text).map_err(Into::into)
    }

    async fn status_error(response: reqwest::Response) -> ClientError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        match status {
            StatusCode::NOT_FOUND => ClientError::NotFound(body),
            _ => ClientError::Status { status, body },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joining() {
        let client = HttpClient::new(&ClientConfig::new("http://localhost:8000/")).unwrap();
        assert_eq!(client.base_url(), "http://localhost:8000");
        assert_eq!(client.url("productos/"), "http://localhost:8000/productos/");
        assert_eq!(client.url("/productos/3"), "http://localhost:8000/productos/3");
    }

    #[test]
    fn test_invalid_base_url() {
        let err = HttpClient::new(&ClientConfig::new("not a url")).unwrap_err();
        assert!(matches!(err, ClientError::Config(_)));
    }
}
