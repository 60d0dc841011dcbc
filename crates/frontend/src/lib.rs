//! Keyward browser glue
//!
//! Loaded as a wasm module by the server-rendered pages. On
//! `DOMContentLoaded` it syncs the navigation with the stored session, binds
//! the login/register forms and the logout link, and renders the profile
//! page. The same actions are exported for templates that call them
//! directly.

#[macro_use]
extern crate tracing;

pub mod app;
pub mod config;
pub mod dom;
pub mod errors;
pub mod flash;
pub mod forms;
pub mod logging;
pub mod nav;
pub mod navigation;
pub mod profile;
pub mod storage;

pub use app::{BrowserSession, boot, session};
pub use flash::{FlashLevel, show_flash};

use wasm_bindgen::prelude::*;

/// Module entry point
#[wasm_bindgen(start)]
pub fn start() {
    logging::init();
    app::on_dom_ready(boot);
}
