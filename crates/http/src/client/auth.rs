//! Authentication API client methods

use super::{ApiClient, ClientError};
use crate::config::AuthConfig;
use crate::types::{Credentials, RegisteredUser, TokenResponse, UserProfile};
use reqwest::{Method, header};

impl ApiClient {
    /// Create an account (public endpoint, answers `201 Created`)
    pub async fn register(&self, credentials: &Credentials) -> Result<RegisteredUser, ClientError> {
        let req = self
            .request(Method::POST, &self.routes.register)
            .json(credentials);
        self.execute(req).await
    }

    /// Exchange credentials for a token pair (public endpoint)
    pub async fn login(&self, credentials: &Credentials) -> Result<TokenResponse, ClientError> {
        let req = self.request(Method::POST, &self.routes.login).json(credentials);
        self.execute(req).await
    }

    /// Mint a new token pair from the refresh token
    pub async fn refresh(&self, refresh_token: &str) -> Result<TokenResponse, ClientError> {
        let req = self
            .request(Method::PATCH, &self.routes.refresh)
            .header(header::COOKIE, refresh_cookie(refresh_token))
            .json(&serde_json::json!({}));
        self.execute(req).await
    }

    /// Revoke the refresh token server-side (requires authentication)
    pub async fn logout(&self, refresh_token: &str) -> Result<(), ClientError> {
        let req = self
            .request(Method::DELETE, &self.routes.logout)
            .header(header::COOKIE, refresh_cookie(refresh_token));
        self.execute_empty(req).await
    }

    /// Get current user info (requires authentication)
    pub async fn me(&self) -> Result<UserProfile, ClientError> {
        let req = self.request(Method::GET, &self.routes.me);
        self.execute(req).await
    }
}

fn refresh_cookie(refresh_token: &str) -> String {
    format!("{}={refresh_token}", AuthConfig::REFRESH_COOKIE)
}
