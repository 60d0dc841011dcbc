//! Authenticated session: token lifecycle plus the refresh-and-replay policy
//!
//! A call rejected with 401 triggers exactly one refresh. If the refresh
//! succeeds the call is replayed once with the new bearer; if the refresh
//! fails, or the replay is rejected again, the tokens are dropped and the
//! user is sent to the login page. Logout goes through the same path but
//! always finishes on the home page. Concurrent 401s are not coordinated and
//! may each start their own refresh.

use crate::client::{ApiClient, error::ClientError};
use crate::config::AuthConfig;
use crate::token::{StoreError, TokenPair, TokenStore, TokenVault};
use crate::types::{RegisteredUser, UserProfile};
use crate::validation::{FormError, LoginForm, RegisterForm};
use std::future::Future;
use thiserror::Error;

/// Moves the user to another page
pub trait Navigator {
    fn redirect(&self, path: &str);
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Form(#[from] FormError),

    #[error(transparent)]
    Client(#[from] ClientError),

    #[error(transparent)]
    Store(#[from] StoreError),

    /// No usable token was stored; the user has been sent to login
    #[error("Not authenticated")]
    NotAuthenticated,

    /// The refresh call failed; tokens were dropped and the user sent to login
    #[error("Session refresh failed: {0}")]
    RefreshFailed(#[source] ClientError),

    /// The session could not be renewed, or the replayed call was rejected
    /// again; tokens were dropped and the user sent to login
    #[error("Session expired")]
    Expired,
}

impl SessionError {
    /// Whether the session already redirected away from the current page
    pub const fn redirected(&self) -> bool {
        matches!(
            self,
            Self::NotAuthenticated | Self::RefreshFailed(_) | Self::Expired
        )
    }
}

pub struct AuthSession<S, N> {
    client: ApiClient,
    tokens: TokenVault<S>,
    navigator: N,
}

impl<S: TokenStore, N: Navigator> AuthSession<S, N> {
    pub fn new(client: ApiClient, store: S, navigator: N) -> Self {
        Self {
            client,
            tokens: TokenVault::new(store),
            navigator,
        }
    }

    pub const fn client(&self) -> &ApiClient {
        &self.client
    }

    pub const fn tokens(&self) -> &TokenVault<S> {
        &self.tokens
    }

    pub const fn navigator(&self) -> &N {
        &self.navigator
    }

    /// Sync the default bearer header with storage. Returns whether a session exists.
    pub fn restore(&self) -> bool {
        match self.tokens.load() {
            Some(pair) => {
                self.client.set_bearer(Some(&pair.access_token));
                true
            }
            None => {
                self.client.set_bearer(None);
                false
            }
        }
    }

    /// Redirect to login when `path` is protected and nobody is signed in.
    /// Returns whether the page may stay.
    pub fn guard(&self, path: &str) -> bool {
        if self.restore() || !AuthConfig::is_protected(path) {
            return true;
        }
        info!(path, "Protected page without a session, redirecting to login");
        self.navigator.redirect(AuthConfig::LOGIN_PAGE);
        false
    }

    /// Validate the form and create the account
    pub async fn register(&self, form: &RegisterForm) -> Result<RegisteredUser, SessionError> {
        let credentials = form.validate()?;
        let user = self.client.register(&credentials).await?;
        info!("Account registered");
        Ok(user)
    }

    /// Validate the form, sign in and persist the token pair
    pub async fn login(&self, form: &LoginForm) -> Result<(), SessionError> {
        let credentials = form.validate()?;
        let pair = TokenPair::from(self.client.login(&credentials).await?);
        self.adopt(&pair)?;
        info!("Signed in");
        Ok(())
    }

    /// Sign out. Local tokens are always dropped, whatever the server says,
    /// and the user always ends up on the home page.
    pub async fn logout(&self) {
        if let Some(stored) = self.tokens.refresh_token() {
            let result = self
                .with_refresh(
                    |client| {
                        let refresh_token = self
                            .tokens
                            .refresh_token()
                            .unwrap_or_else(|| stored.clone());
                        async move { client.logout(&refresh_token).await }
                    },
                    false,
                )
                .await;
            if let Err(err) = result {
                warn!(error = %err, "Logout request failed, clearing local session anyway");
            }
        }

        self.drop_tokens();
        self.navigator.redirect(AuthConfig::HOME_PAGE);
    }

    /// Trade the refresh token for a new pair. Returns the new access token.
    pub async fn refresh(&self) -> Result<String, SessionError> {
        self.renew(true).await
    }

    /// Load the signed-in user, redirecting to login when there is no token
    pub async fn fetch_profile(&self) -> Result<UserProfile, SessionError> {
        let Some(access_token) = self.tokens.access_token() else {
            self.navigator.redirect(AuthConfig::LOGIN_PAGE);
            return Err(SessionError::NotAuthenticated);
        };
        self.client.set_bearer(Some(&access_token));

        self.send_authenticated(|client| async move { client.me().await })
            .await
    }

    /// Run `call`, refreshing and replaying it once if it is rejected with 401
    pub async fn send_authenticated<T, F, Fut>(&self, call: F) -> Result<T, SessionError>
    where
        F: Fn(ApiClient) -> Fut,
        Fut: Future<Output = Result<T, ClientError>>,
    {
        self.with_refresh(call, true).await
    }

    /// Refresh-and-replay. With `redirect` unset the session ends without
    /// navigating, leaving the caller to pick the destination.
    async fn with_refresh<T, F, Fut>(&self, call: F, redirect: bool) -> Result<T, SessionError>
    where
        F: Fn(ApiClient) -> Fut,
        Fut: Future<Output = Result<T, ClientError>>,
    {
        match call(self.client.clone()).await {
            Err(err) if err.is_unauthorized() => {
                debug!("Access token rejected, refreshing");
                self.renew(redirect).await?;
                match call(self.client.clone()).await {
                    Err(err) if err.is_unauthorized() => {
                        warn!("Replayed request rejected after refresh");
                        self.expire(redirect);
                        Err(SessionError::Expired)
                    }
                    other => other.map_err(SessionError::from),
                }
            }
            other => other.map_err(SessionError::from),
        }
    }

    async fn renew(&self, redirect: bool) -> Result<String, SessionError> {
        let Some(refresh_token) = self.tokens.refresh_token() else {
            if redirect {
                self.navigator.redirect(AuthConfig::LOGIN_PAGE);
            }
            return Err(SessionError::NotAuthenticated);
        };

        match self.client.refresh(&refresh_token).await {
            Ok(response) => {
                let pair = TokenPair::from(response);
                if let Err(err) = self.adopt(&pair) {
                    warn!(error = %err, "Could not persist refreshed tokens");
                    self.expire(redirect);
                    return Err(SessionError::Expired);
                }
                debug!("Tokens refreshed");
                Ok(pair.access_token)
            }
            Err(err) => {
                warn!(error = %err, "Token refresh failed");
                self.expire(redirect);
                Err(SessionError::RefreshFailed(err))
            }
        }
    }

    fn adopt(&self, pair: &TokenPair) -> Result<(), StoreError> {
        self.tokens.save(pair)?;
        self.client.set_bearer(Some(&pair.access_token));
        Ok(())
    }

    fn drop_tokens(&self) {
        self.tokens.clear();
        self.client.set_bearer(None);
    }

    fn expire(&self, redirect: bool) {
        self.drop_tokens();
        if redirect {
            self.navigator.redirect(AuthConfig::LOGIN_PAGE);
        }
    }
}
