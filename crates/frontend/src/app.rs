//! Page bootstrap and the shared session

use crate::navigation::{BrowserNavigator, current_path};
use crate::storage::LocalStorageStore;
use crate::{config, forms, nav, profile};
use gloo::events::EventListener;
use gloo::utils::document;
use keyward_http::{ApiClient, AuthConfig, AuthSession};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;

/// Session type used in the browser
pub type BrowserSession = AuthSession<LocalStorageStore, BrowserNavigator>;

thread_local! {
    /// Session shared by every handler on the page
    static SESSION: RefCell<Option<Rc<BrowserSession>>> = const { RefCell::new(None) };
}

/// Get the page session, creating it on first use
pub fn session() -> Option<Rc<BrowserSession>> {
    SESSION.with(|cell| {
        let mut slot = cell.borrow_mut();
        if slot.is_none() {
            match ApiClient::from_config(&config::load()) {
                Ok(client) => {
                    *slot = Some(Rc::new(AuthSession::new(
                        client,
                        LocalStorageStore,
                        BrowserNavigator,
                    )));
                }
                Err(err) => error!(error = %err, "Failed to create API client"),
            }
        }
        slot.clone()
    })
}

/// Run `f` once the DOM is parsed
pub fn on_dom_ready(f: fn()) {
    if document().ready_state() == "loading" {
        EventListener::once(&document(), "DOMContentLoaded", move |_| f()).forget();
    } else {
        f();
    }
}

/// Sync the page with the stored session and bind its handlers
pub fn boot() {
    let Some(session) = session() else { return };
    let path = current_path();

    let authenticated = nav::check_auth_status(&session, &path);
    forms::bind_forms();

    if authenticated && path == AuthConfig::PROFILE_PAGE {
        spawn_local(profile::load_user_profile());
    }
}
