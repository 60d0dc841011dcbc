//! Rendering errors into the page

use crate::dom;
use crate::flash::{FlashLevel, show_flash};
use keyward_http::SessionError;
use keyward_http::client::error::Feedback;

const INVALID_CLASS: &str = "is-invalid";

/// Clear inline validation state left from a previous submit
pub fn reset_form_errors() {
    for input in dom::query_all(&format!(".{INVALID_CLASS}")) {
        dom::remove_class(&input, INVALID_CLASS);
    }
    for feedback in dom::query_all(".invalid-feedback") {
        feedback.set_text_content(Some(""));
    }
}

/// Mark `#field` invalid and fill `#field-feedback`.
///
/// Returns false when either element is missing.
pub fn mark_invalid(field: &str, message: &str) -> bool {
    let (Some(input), Some(feedback)) = (dom::by_id(field), dom::by_id(&format!("{field}-feedback")))
    else {
        return false;
    };
    dom::add_class(&input, INVALID_CLASS);
    feedback.set_text_content(Some(message));
    true
}

/// Show an error as inline field messages or flash notifications
pub fn present_error(err: &SessionError) {
    match err {
        // The session has already left the page
        _ if err.redirected() => debug!(error = %err, "Session ended"),
        SessionError::Form(form_err) => match form_err.field() {
            Some(field) if mark_invalid(field, &form_err.to_string()) => {}
            _ => {
                show_flash(&form_err.to_string(), FlashLevel::Danger);
            }
        },
        SessionError::Client(client_err) => {
            for feedback in client_err.feedback() {
                present_feedback(&feedback);
            }
        }
        other => {
            show_flash(&format!("An error occurred: {other}"), FlashLevel::Danger);
        }
    }
}

fn present_feedback(feedback: &Feedback) {
    match feedback {
        Feedback::Field { field, message } => {
            if !mark_invalid(field, message) {
                show_flash(&format!("Field {field}: {message}"), FlashLevel::Danger);
            }
        }
        Feedback::Notice(message) => {
            show_flash(message, FlashLevel::Danger);
        }
    }
}
