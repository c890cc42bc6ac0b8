//! Authentication endpoints

use reqwest::Method;

use super::ApiClient;
use crate::config::StorageKeys;
use crate::response::ApiResponse;
use crate::types::{LoginRequest, RegisterRequest, TokenResponse};

impl ApiClient {
    /// Create an account
    ///
    /// The backend answers with a token pair, but registration does not log
    /// the client in; callers follow up with [`ApiClient::login`].
    pub async fn register(&self, email: &str, password: &str) -> ApiResponse<TokenResponse> {
        let request = self
            .request(Method::POST, "/api/auth/register")
            .json(&RegisterRequest {
                email: email.to_string(),
                password: password.to_string(),
            });
        self.execute(request).await
    }

    /// Exchange credentials for a token pair
    ///
    /// On success the access token becomes the client's bearer token and the
    /// refresh token is persisted alongside it. The refresh token is write-only
    /// from this client's point of view.
    pub async fn login(&self, email: &str, password: &str) -> ApiResponse<TokenResponse> {
        let request = self
            .request(Method::POST, "/api/auth/login")
            .json(&LoginRequest {
                email: email.to_string(),
                password: password.to_string(),
            });
        let response: ApiResponse<TokenResponse> = self.execute(request).await;

        if let ApiResponse::Data(tokens) = &response {
            self.set_token(tokens.access_token.as_str());
            if let Some(storage) = self.storage() {
                storage.set(StorageKeys::REFRESH_TOKEN, &tokens.refresh_token);
            }
        }

        response
    }

    /// End the session locally
    ///
    /// No backend call is made; the bearer token and both persisted token
    /// entries are dropped.
    pub fn logout(&self) {
        self.clear_token();
    }
}
