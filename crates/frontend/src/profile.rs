//! Profile page rendering

use crate::app::session;
use crate::dom;
use crate::errors::present_error;
use gloo::utils::{document, window};
use keyward_http::types::UserProfile;
use wasm_bindgen::prelude::*;

const UNAVAILABLE: &str = "Unavailable";

/// Fetch the signed-in user and fill the profile page
#[wasm_bindgen(js_name = loadUserProfile)]
pub async fn load_user_profile() {
    let Some(session) = session() else { return };

    match session.fetch_profile().await {
        Ok(profile) => render_profile(&profile),
        Err(err) => present_error(&err),
    }
}

/// Fill `#user-email`, `#account-status` and `#register-date`
pub fn render_profile(profile: &UserProfile) {
    dom::set_text("user-email", &profile.email);
    render_status(profile.is_active);

    let registered = profile
        .created_at
        .as_deref()
        .and_then(format_date)
        .unwrap_or_else(|| UNAVAILABLE.to_string());
    dom::set_text("register-date", &registered);
}

fn render_status(active: bool) {
    let Some(status) = dom::by_id("account-status") else {
        return;
    };
    let (class, label) = if active {
        ("status-active", "Active")
    } else {
        ("status-inactive", "Inactive")
    };

    let Ok(badge) = document().create_element("span") else {
        return;
    };
    badge.set_class_name(&format!("status-badge {class}"));
    badge.set_text_content(Some(label));

    status.set_text_content(None);
    if let Err(err) = status.append_child(&badge) {
        debug!(?err, "Failed to render account status");
    }
}

/// Format an ISO timestamp as a date in the browser's locale
pub fn format_date(timestamp: &str) -> Option<String> {
    let date = js_sys::Date::new(&JsValue::from_str(timestamp));
    if date.get_time().is_nan() {
        return None;
    }
    let locale = window()
        .navigator()
        .language()
        .unwrap_or_else(|| "en-US".to_string());
    date.to_locale_date_string(&locale, &JsValue::UNDEFINED)
        .as_string()
}
