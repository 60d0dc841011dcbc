//! Auth API client

pub mod auth;
pub mod error;

use crate::config::{ApiRoutes, ClientConfig};
use error::{ApiError, ClientError};
use reqwest::{Client, ClientBuilder, header};
use std::sync::{Arc, PoisonError, RwLock};
use std::time::Duration;

/// Auth API client.
///
/// Clones share the default bearer header, so setting it once after login
/// applies to every handle.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    routes: ApiRoutes,
    bearer: Arc<RwLock<Option<String>>>,
}

impl ApiClient {
    /// Create a new client with default routes
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        Self::builder().base_url(base_url).build()
    }

    /// Create a client from runtime configuration
    pub fn from_config(config: &ClientConfig) -> Result<Self, ClientError> {
        let mut builder = Self::builder()
            .base_url(config.base_url.clone())
            .routes(config.routes.clone());
        if let Some(timeout_ms) = config.timeout_ms {
            builder = builder.timeout(Duration::from_millis(timeout_ms));
        }
        builder.build()
    }

    /// Create a new client builder
    pub fn builder() -> ApiClientBuilder {
        ApiClientBuilder::default()
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub const fn routes(&self) -> &ApiRoutes {
        &self.routes
    }

    /// Set or clear the bearer token sent with every request
    pub fn set_bearer(&self, token: Option<&str>) {
        let mut bearer = self.bearer.write().unwrap_or_else(PoisonError::into_inner);
        *bearer = token.map(str::to_string);
    }

    /// The bearer token currently sent with every request
    pub fn bearer(&self) -> Option<String> {
        self.bearer
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Create a request builder carrying the default bearer header
    pub fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self.client.request(method, url);

        if let Some(token) = self.bearer() {
            request = request.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }

        #[cfg(target_arch = "wasm32")]
        {
            request = request.fetch_credentials_include();
        }

        request
    }

    /// Execute a request and decode a JSON body
    pub async fn execute<T: serde::de::DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ClientError> {
        let response = Self::send(request).await?;
        Ok(response.json().await?)
    }

    /// Execute a request whose success body is ignored
    pub async fn execute_empty(&self, request: reqwest::RequestBuilder) -> Result<(), ClientError> {
        Self::send(request).await.map(drop)
    }

    async fn send(request: reqwest::RequestBuilder) -> Result<reqwest::Response, ClientError> {
        let response = request.send().await?;
        let status = response.status();

        if status.is_success() {
            Ok(response)
        } else {
            let text = response.text().await.unwrap_or_default();
            debug!(status = status.as_u16(), "API request failed");
            Err(ClientError::Api(ApiError::from_status(status, &text)))
        }
    }
}

/// Builder for ApiClient
#[derive(Default)]
pub struct ApiClientBuilder {
    base_url: Option<String>,
    routes: Option<ApiRoutes>,
    bearer: Option<String>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl ApiClientBuilder {
    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Override the endpoint paths
    pub fn routes(mut self, routes: ApiRoutes) -> Self {
        self.routes = Some(routes);
        self
    }

    /// Start with a bearer token already set
    pub fn bearer(mut self, token: impl Into<String>) -> Self {
        self.bearer = Some(token.into());
        self
    }

    /// Set the request timeout (ignored in the browser)
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Build the client
    pub fn build(self) -> Result<ApiClient, ClientError> {
        let base_url = self
            .base_url
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| ClientError::Configuration("base_url is required".into()))?;

        // Ensure base_url ends without a trailing slash
        let base_url = base_url.trim().trim_end_matches('/').to_string();

        let mut client_builder = ClientBuilder::new();

        #[cfg(not(target_arch = "wasm32"))]
        if let Some(timeout) = self.timeout {
            client_builder = client_builder.timeout(timeout);
        }

        #[cfg(target_arch = "wasm32")]
        let _ = self.timeout;

        client_builder = client_builder.user_agent(
            self.user_agent
                .unwrap_or_else(|| concat!("keyward/", env!("CARGO_PKG_VERSION")).to_string()),
        );

        let client = client_builder.build().map_err(ClientError::Request)?;

        Ok(ApiClient {
            client,
            base_url,
            routes: self.routes.unwrap_or_default(),
            bearer: Arc::new(RwLock::new(self.bearer)),
        })
    }
}
