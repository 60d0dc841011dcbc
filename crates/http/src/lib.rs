//! Keyward HTTP core
//!
//! Platform-neutral half of the browser auth helper: a typed client for the
//! auth API, the two-token vault, form validation and the session that
//! refreshes and replays a call once when the access token has expired.
//! Everything here compiles natively as well as for `wasm32`, which keeps the
//! policy testable without a browser.

#[macro_use]
extern crate tracing;

pub mod client;
pub mod config;
pub mod session;
pub mod token;
pub mod types;
pub mod validation;

pub use client::{ApiClient, ApiClientBuilder, error::ClientError};
pub use config::{ApiRoutes, AuthConfig, ClientConfig};
pub use session::{AuthSession, Navigator, SessionError};
pub use token::{MemoryStore, StoreError, TokenPair, TokenStore, TokenVault};
pub use validation::{FormError, LoginForm, RegisterForm};
