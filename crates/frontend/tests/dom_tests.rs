//! Browser tests for the DOM helpers
//!
//! Run with `wasm-pack test --headless --firefox crates/frontend`.

#![cfg(target_arch = "wasm32")]

use gloo::utils::document;
use keyward_frontend::errors::{mark_invalid, present_error, reset_form_errors};
use keyward_frontend::flash::{FLASH_CONTAINER_ID, FlashLevel, show_flash};
use keyward_frontend::nav::apply_nav_state;
use keyward_frontend::profile::{format_date, render_profile};
use keyward_frontend::storage::LocalStorageStore;
use keyward_frontend::{dom, forms};
use keyward_http::types::UserProfile;
use keyward_http::{FormError, SessionError, TokenPair, TokenStore, TokenVault};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

/// Replace the test page body with `html`
fn mount(html: &str) {
    document()
        .body()
        .expect("test page has a body")
        .set_inner_html(html);
}

fn has_class(id: &str, class: &str) -> bool {
    dom::by_id(id)
        .map(|element| element.class_list().contains(class))
        .unwrap_or(false)
}

#[wasm_bindgen_test]
fn flash_appends_dismissible_alert() {
    mount(r#"<div id="flash-messages"></div>"#);

    let alert = show_flash("<b>Saved</b>", FlashLevel::Success).expect("alert rendered");

    assert_eq!(
        alert.class_name(),
        "alert alert-success alert-dismissible fade show"
    );
    assert_eq!(alert.get_attribute("role").as_deref(), Some("alert"));
    // Messages are text, never markup
    assert!(alert.text_content().unwrap_or_default().contains("<b>Saved</b>"));
    assert!(alert.query_selector("button.btn-close").unwrap().is_some());

    let container = dom::by_id(FLASH_CONTAINER_ID).unwrap();
    assert_eq!(container.child_element_count(), 1);
}

#[wasm_bindgen_test]
fn flash_without_container_is_skipped() {
    mount("");
    assert!(show_flash("Hello", FlashLevel::Info).is_none());
}

#[wasm_bindgen_test]
fn nav_state_toggles_items() {
    mount(
        r#"<ul>
            <li id="login-nav-item"></li>
            <li id="register-nav-item"></li>
            <li id="profile-nav-item" class="d-none"></li>
            <li id="logout-nav-item" class="d-none"></li>
        </ul>"#,
    );

    apply_nav_state(true);
    assert!(has_class("login-nav-item", "d-none"));
    assert!(has_class("register-nav-item", "d-none"));
    assert!(!has_class("profile-nav-item", "d-none"));
    assert!(!has_class("logout-nav-item", "d-none"));

    apply_nav_state(false);
    assert!(!has_class("login-nav-item", "d-none"));
    assert!(has_class("profile-nav-item", "d-none"));
}

#[wasm_bindgen_test]
fn field_errors_render_inline_and_reset() {
    mount(
        r#"<input id="confirm-password" />
           <div id="confirm-password-feedback" class="invalid-feedback"></div>
           <div id="flash-messages"></div>"#,
    );

    present_error(&SessionError::Form(FormError::PasswordMismatch));
    assert!(has_class("confirm-password", "is-invalid"));
    assert_eq!(
        dom::by_id("confirm-password-feedback")
            .unwrap()
            .text_content()
            .as_deref(),
        Some("Passwords do not match")
    );

    reset_form_errors();
    assert!(!has_class("confirm-password", "is-invalid"));
    assert_eq!(
        dom::by_id("confirm-password-feedback")
            .unwrap()
            .text_content()
            .as_deref(),
        Some("")
    );
}

#[wasm_bindgen_test]
fn missing_fields_flash() {
    mount(r#"<div id="flash-messages"></div>"#);

    present_error(&SessionError::Form(FormError::MissingFields));

    let container = dom::by_id(FLASH_CONTAINER_ID).unwrap();
    assert_eq!(container.child_element_count(), 1);
    assert!(container
        .text_content()
        .unwrap_or_default()
        .contains("Please fill in all fields"));
}

#[wasm_bindgen_test]
fn mark_invalid_needs_both_elements() {
    mount(r#"<input id="email" />"#);
    assert!(!mark_invalid("email", "not an email"));
    assert!(!has_class("email", "is-invalid"));
}

#[wasm_bindgen_test]
fn forms_read_input_values() {
    mount(
        r#"<input id="email" value="user@example.com" />
           <input id="password" value="secret123" />
           <input id="confirm-password" value="secret123" />"#,
    );

    let form = forms::read_register_form();
    assert_eq!(form.email, "user@example.com");
    assert!(form.validate().is_ok());

    let form = forms::read_login_form();
    assert_eq!(form.password, "secret123");
}

#[wasm_bindgen_test]
fn profile_renders_status_and_date() {
    mount(
        r#"<span id="user-email"></span>
           <span id="account-status"></span>
           <span id="register-date"></span>"#,
    );

    render_profile(&UserProfile {
        email: "user@example.com".to_string(),
        is_active: false,
        is_verified: true,
        created_at: None,
        updated_at: None,
    });

    assert_eq!(
        dom::by_id("user-email").unwrap().text_content().as_deref(),
        Some("user@example.com")
    );
    let badge = document()
        .query_selector("#account-status .status-badge")
        .unwrap()
        .expect("badge rendered");
    assert!(badge.class_list().contains("status-inactive"));
    assert_eq!(badge.text_content().as_deref(), Some("Inactive"));
    assert_eq!(
        dom::by_id("register-date").unwrap().text_content().as_deref(),
        Some("Unavailable")
    );
}

#[wasm_bindgen_test]
fn dates_are_formatted_or_rejected() {
    assert!(format_date("2024-05-01T10:00:00").is_some());
    assert!(format_date("not a date").is_none());
}

#[wasm_bindgen_test]
fn local_storage_keeps_raw_tokens() {
    let vault = TokenVault::new(LocalStorageStore);
    vault
        .save(&TokenPair {
            access_token: "a1".to_string(),
            refresh_token: "r1".to_string(),
        })
        .unwrap();

    assert_eq!(LocalStorageStore.get("access_token").as_deref(), Some("a1"));
    assert_eq!(LocalStorageStore.get("refresh_token").as_deref(), Some("r1"));

    vault.clear();
    assert_eq!(vault.load(), None);
}
