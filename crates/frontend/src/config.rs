//! Runtime configuration for the browser build.
//!
//! Pages may define `window.KEYWARD_CONFIG` (same shape as
//! [`ClientConfig`]) to point the helper at another API host or different
//! endpoint paths. Missing values fall back to the defaults, and the base URL
//! falls back to the page origin. Configuration values are public; do not
//! store secrets here.

use keyward_http::ClientConfig;
use wasm_bindgen::JsValue;

/// Name of the optional global holding runtime overrides
pub const RUNTIME_CONFIG_GLOBAL: &str = "KEYWARD_CONFIG";

/// Load the client configuration for this page
pub fn load() -> ClientConfig {
    runtime_config()
        .unwrap_or_default()
        .with_default_base_url(page_origin())
}

fn runtime_config() -> Option<ClientConfig> {
    let window = web_sys::window()?;
    let value = js_sys::Reflect::get(&window, &JsValue::from_str(RUNTIME_CONFIG_GLOBAL)).ok()?;
    if value.is_null() || value.is_undefined() {
        return None;
    }

    match serde_wasm_bindgen::from_value(value) {
        Ok(config) => Some(config),
        Err(err) => {
            warn!(error = %err, "Ignoring malformed {RUNTIME_CONFIG_GLOBAL}");
            None
        }
    }
}

fn page_origin() -> String {
    web_sys::window()
        .and_then(|window| window.location().origin().ok())
        .unwrap_or_default()
}
