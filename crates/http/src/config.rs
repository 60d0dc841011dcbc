//! Client configuration

use serde::Deserialize;

/// Authentication constants shared by the core and the browser glue
pub struct AuthConfig;

impl AuthConfig {
    /// Local storage key holding the access token
    pub const ACCESS_TOKEN_KEY: &'static str = "access_token";

    /// Local storage key holding the refresh token
    pub const REFRESH_TOKEN_KEY: &'static str = "refresh_token";

    /// Cookie name the refresh and logout endpoints read the refresh token from
    pub const REFRESH_COOKIE: &'static str = "refresh_token";

    pub const HOME_PAGE: &'static str = "/";
    pub const LOGIN_PAGE: &'static str = "/auth/login";
    pub const PROFILE_PAGE: &'static str = "/users/profile";

    /// Pages under this prefix require a stored access token
    pub const PROTECTED_PREFIX: &'static str = "/users/";

    /// Flash notifications lose their `show` class after this many milliseconds
    pub const FLASH_DISMISS_MS: u32 = 5_000;

    /// Delay between hiding a flash and removing it from the DOM
    pub const FLASH_FADE_MS: u32 = 500;

    pub const REGISTER_REDIRECT_DELAY_MS: u32 = 2_000;
    pub const LOGIN_REDIRECT_DELAY_MS: u32 = 1_000;

    /// Whether `path` is a page that needs an authenticated user
    pub fn is_protected(path: &str) -> bool {
        path.starts_with(Self::PROTECTED_PREFIX)
    }
}

/// Endpoint paths of the auth API, relative to the base URL
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ApiRoutes {
    pub register: String,
    pub login: String,
    pub refresh: String,
    pub logout: String,
    pub me: String,
}

impl Default for ApiRoutes {
    fn default() -> Self {
        Self {
            register: "/api/public/users/register".to_string(),
            login: "/api/public/auth/login".to_string(),
            refresh: "/api/public/auth/refresh".to_string(),
            logout: "/api/private/auth/logout".to_string(),
            me: "/api/private/users/me".to_string(),
        }
    }
}

/// Runtime client configuration.
///
/// Every field is optional when deserialized; an empty `base_url` means the
/// caller fills in the page origin.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub base_url: String,
    pub routes: ApiRoutes,
    /// Per-request timeout, honoured on native targets only
    pub timeout_ms: Option<u64>,
}

impl ClientConfig {
    /// Use `origin` as the base URL when none was configured
    #[must_use]
    pub fn with_default_base_url(mut self, origin: impl Into<String>) -> Self {
        if self.base_url.trim().is_empty() {
            self.base_url = origin.into();
        }
        self
    }
}
