//! Flash notifications rendered into `#flash-messages`

use crate::dom;
use gloo::timers::callback::Timeout;
use gloo::utils::document;
use keyward_http::AuthConfig;
use web_sys::Element;

/// Id of the container flashes are appended to
pub const FLASH_CONTAINER_ID: &str = "flash-messages";

/// Bootstrap alert flavour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlashLevel {
    #[default]
    Info,
    Success,
    Warning,
    Danger,
}

impl FlashLevel {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Danger => "danger",
        }
    }
}

/// Append a dismissible alert that fades out on its own.
///
/// Returns the alert element, or `None` when the page has no flash container.
pub fn show_flash(message: &str, level: FlashLevel) -> Option<Element> {
    let Some(container) = dom::by_id(FLASH_CONTAINER_ID) else {
        warn!(message, "No flash container on this page");
        return None;
    };

    let alert = match build_alert(message, level) {
        Ok(alert) => alert,
        Err(err) => {
            error!(?err, "Failed to build flash message");
            return None;
        }
    };
    if let Err(err) = container.append_child(&alert) {
        error!(?err, "Failed to show flash message");
        return None;
    }

    let fading = alert.clone();
    Timeout::new(AuthConfig::FLASH_DISMISS_MS, move || {
        dom::remove_class(&fading, "show");
        Timeout::new(AuthConfig::FLASH_FADE_MS, move || fading.remove()).forget();
    })
    .forget();

    Some(alert)
}

fn build_alert(message: &str, level: FlashLevel) -> Result<Element, wasm_bindgen::JsValue> {
    let document = document();

    let alert = document.create_element("div")?;
    alert.set_class_name(&format!(
        "alert alert-{} alert-dismissible fade show",
        level.as_str()
    ));
    alert.set_attribute("role", "alert")?;
    alert.append_child(&document.create_text_node(message))?;

    let close = document.create_element("button")?;
    close.set_attribute("type", "button")?;
    close.set_class_name("btn-close");
    close.set_attribute("data-bs-dismiss", "alert")?;
    close.set_attribute("aria-label", "Close")?;
    alert.append_child(&close)?;

    Ok(alert)
}
