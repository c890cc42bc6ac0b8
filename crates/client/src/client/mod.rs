//! The VibeFlow API client

pub mod agent;
pub mod auth;
pub mod datasets;
pub mod models;
pub mod projects;
pub mod training;

use std::sync::{Arc, Mutex};
use std::time::Duration;

use reqwest::{header, Client, ClientBuilder, Method};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::StorageKeys;
use crate::error::ClientError;
use crate::response::ApiResponse;
use crate::storage::TokenStorage;
use crate::types::HealthResponse;

const DEFAULT_USER_AGENT: &str = "vibeflow-client/0.1.0";

/// HTTP gateway to the VibeFlow backend
///
/// Owns the bearer token: `login` stores it, `clear_token` drops it, and every
/// request carries it while one is held. Endpoint methods return
/// [`ApiResponse`] and never fail any other way.
pub struct ApiClient {
    http: Client,
    base_url: String,
    token: Mutex<Option<String>>,
    storage: Option<Arc<dyn TokenStorage>>,
}

impl ApiClient {
    /// Create a client with default configuration and no persistence
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        Self::builder().base_url(base_url).build()
    }

    /// Create a client builder
    pub fn builder() -> ApiClientBuilder {
        ApiClientBuilder::default()
    }

    /// The configured base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The bearer token currently held, if any
    pub fn token(&self) -> Option<String> {
        self.token.lock().expect("token lock poisoned").clone()
    }

    /// Replace the bearer token and persist it when storage is attached
    pub fn set_token(&self, token: impl Into<String>) {
        let token = token.into();
        *self.token.lock().expect("token lock poisoned") = Some(token.clone());
        if let Some(storage) = &self.storage {
            storage.set(StorageKeys::ACCESS_TOKEN, &token);
        }
    }

    /// Drop the bearer token and remove both persisted token entries
    ///
    /// Idempotent: clearing an already-clear client changes nothing.
    pub fn clear_token(&self) {
        *self.token.lock().expect("token lock poisoned") = None;
        if let Some(storage) = &self.storage {
            storage.remove(StorageKeys::ACCESS_TOKEN);
            storage.remove(StorageKeys::REFRESH_TOKEN);
        }
    }

    pub(crate) fn storage(&self) -> Option<&Arc<dyn TokenStorage>> {
        self.storage.as_ref()
    }

    /// Create a request builder for `path` with the standard headers
    ///
    /// The caller supplies a leading slash; the path is appended to the base
    /// URL verbatim. The `Authorization` header is present iff a token is
    /// held.
    pub fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self
            .http
            .request(method, url)
            .header(header::CONTENT_TYPE, "application/json");

        if let Some(token) = self.token() {
            request = request.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }

        request
    }

    /// Execute a request, normalizing every failure into the error arm
    ///
    /// The body is parsed as JSON regardless of status. Non-2xx responses
    /// yield the server's `detail` field or `"Request failed"`; transport
    /// failures yield the underlying error message. This method does not
    /// panic and does not return early with a `Result`.
    pub async fn execute<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> ApiResponse<T> {
        let response = match request.send().await {
            Ok(response) => response,
            Err(error) => {
                warn!(%error, "request transport failure");
                return ApiResponse::Error(error.to_string());
            }
        };

        let status = response.status();
        debug!(%status, "response received");

        let body = match response.text().await {
            Ok(body) => body,
            Err(error) => return ApiResponse::Error(error.to_string()),
        };

        let value: Value = match serde_json::from_str(&body) {
            Ok(value) => value,
            Err(error) => return ApiResponse::Error(error.to_string()),
        };

        if !status.is_success() {
            let message = match value.get("detail") {
                Some(Value::String(detail)) => detail.clone(),
                Some(detail) => detail.to_string(),
                None => "Request failed".to_string(),
            };
            return ApiResponse::Error(message);
        }

        match serde_json::from_value(value) {
            Ok(data) => ApiResponse::Data(data),
            Err(error) => ApiResponse::Error(error.to_string()),
        }
    }

    /// Check backend liveness
    pub async fn health(&self) -> ApiResponse<HealthResponse> {
        let request = self.request(Method::GET, "/health");
        self.execute(request).await
    }
}

/// Builder for [`ApiClient`]
#[derive(Default)]
pub struct ApiClientBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
    storage: Option<Arc<dyn TokenStorage>>,
}

impl ApiClientBuilder {
    /// Set the base URL (required)
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Attach a persistence backend for tokens
    ///
    /// A previously persisted access token is adopted at build time, so a
    /// rebuilt client resumes the stored session.
    pub fn storage(mut self, storage: Arc<dyn TokenStorage>) -> Self {
        self.storage = Some(storage);
        self
    }

    /// Build the client
    pub fn build(self) -> Result<ApiClient, ClientError> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::Configuration("base_url is required".into()))?;

        // Ensure base_url ends without a trailing slash
        let base_url = base_url.trim_end_matches('/').to_string();

        let mut client_builder = ClientBuilder::new();

        if let Some(timeout) = self.timeout {
            client_builder = client_builder.timeout(timeout);
        }

        client_builder = client_builder.user_agent(
            self.user_agent
                .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
        );

        let http = client_builder.build()?;

        let token = self
            .storage
            .as_ref()
            .and_then(|storage| storage.get(StorageKeys::ACCESS_TOKEN));

        Ok(ApiClient {
            http,
            base_url,
            token: Mutex::new(token),
            storage: self.storage,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    #[test]
    fn builder_trims_trailing_slash() {
        let client = ApiClient::new("http://localhost:8001/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:8001");
    }

    #[test]
    fn builder_requires_base_url() {
        let result = ApiClient::builder().build();
        assert!(matches!(result, Err(ClientError::Configuration(_))));
    }

    #[test]
    fn stored_token_is_adopted_at_build() {
        let storage = Arc::new(MemoryStorage::new());
        storage.set(StorageKeys::ACCESS_TOKEN, "tok-123");

        let client = ApiClient::builder()
            .base_url("http://localhost:8001")
            .storage(storage)
            .build()
            .unwrap();

        assert_eq!(client.token(), Some("tok-123".into()));
    }

    #[test]
    fn without_storage_client_starts_logged_out() {
        let client = ApiClient::new("http://localhost:8001").unwrap();
        assert_eq!(client.token(), None);
    }

    #[test]
    fn set_and_clear_token_stay_in_sync_with_storage() {
        let storage = Arc::new(MemoryStorage::new());
        let client = ApiClient::builder()
            .base_url("http://localhost:8001")
            .storage(storage.clone())
            .build()
            .unwrap();

        client.set_token("abc");
        assert_eq!(client.token(), Some("abc".into()));
        assert_eq!(storage.get(StorageKeys::ACCESS_TOKEN), Some("abc".into()));

        client.clear_token();
        client.clear_token(); // idempotent
        assert_eq!(client.token(), None);
        assert_eq!(storage.get(StorageKeys::ACCESS_TOKEN), None);
        assert_eq!(storage.get(StorageKeys::REFRESH_TOKEN), None);
    }
}
