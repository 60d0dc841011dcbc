//! Register, login and logout actions bound to the page

use crate::app::session;
use crate::dom;
use crate::errors::{present_error, reset_form_errors};
use crate::flash::{FlashLevel, show_flash};
use gloo::events::{EventListener, EventListenerOptions};
use gloo::timers::callback::Timeout;
use keyward_http::{AuthConfig, LoginForm, Navigator, RegisterForm};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

pub const REGISTER_FORM_ID: &str = "register-form";
pub const LOGIN_FORM_ID: &str = "login-form";
pub const LOGOUT_LINK_ID: &str = "logout-link";

/// Read the registration form fields
pub fn read_register_form() -> RegisterForm {
    RegisterForm {
        email: dom::input_value("email"),
        password: dom::input_value("password"),
        confirm_password: dom::input_value("confirm-password"),
    }
}

/// Read the login form fields
pub fn read_login_form() -> LoginForm {
    LoginForm {
        email: dom::input_value("email"),
        password: dom::input_value("password"),
    }
}

/// Submit the registration form, then send the user to login
#[wasm_bindgen(js_name = registerUser)]
pub async fn register_user() {
    reset_form_errors();
    let Some(session) = session() else { return };

    match session.register(&read_register_form()).await {
        Ok(_) => {
            show_flash(
                "Registration successful! You can now sign in.",
                FlashLevel::Success,
            );
            redirect_after(AuthConfig::LOGIN_PAGE, AuthConfig::REGISTER_REDIRECT_DELAY_MS);
        }
        Err(err) => present_error(&err),
    }
}

/// Submit the login form, then send the user to their profile
#[wasm_bindgen(js_name = loginUser)]
pub async fn login_user() {
    reset_form_errors();
    let Some(session) = session() else { return };

    match session.login(&read_login_form()).await {
        Ok(()) => {
            show_flash("Signed in successfully!", FlashLevel::Success);
            redirect_after(AuthConfig::PROFILE_PAGE, AuthConfig::LOGIN_REDIRECT_DELAY_MS);
        }
        Err(err) => present_error(&err),
    }
}

/// Sign out and return to the home page
#[wasm_bindgen(js_name = logoutUser)]
pub async fn logout_user() {
    if let Some(session) = session() {
        session.logout().await;
    }
}

/// Bind a form's submit event to an async action
fn bind_submit<F, Fut>(form_id: &str, action: F)
where
    F: Fn() -> Fut + 'static,
    Fut: std::future::Future<Output = ()> + 'static,
{
    let Some(form) = dom::by_id(form_id) else {
        return;
    };
    debug!(form_id, "Binding form submit");
    EventListener::new_with_options(
        &form,
        "submit",
        EventListenerOptions::enable_prevent_default(),
        move |event| {
            event.prevent_default();
            spawn_local(action());
        },
    )
    .forget();
}

/// Wire up whichever auth forms and links exist on the page
pub fn bind_forms() {
    bind_submit(REGISTER_FORM_ID, register_user);
    bind_submit(LOGIN_FORM_ID, login_user);

    if let Some(link) = dom::by_id(LOGOUT_LINK_ID) {
        EventListener::new_with_options(
            &link,
            "click",
            EventListenerOptions::enable_prevent_default(),
            |event| {
                event.prevent_default();
                spawn_local(logout_user());
            },
        )
        .forget();
    }
}

fn redirect_after(path: &'static str, delay_ms: u32) {
    Timeout::new(delay_ms, move || {
        if let Some(session) = session() {
            session.navigator().redirect(path);
        }
    })
    .forget();
}
