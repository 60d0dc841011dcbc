//! Client error types

use crate::types::{ErrorBody, ErrorDetail, ValidationIssue};
use thiserror::Error;

/// Maximum number of body characters kept when the server sent no JSON error
const MAX_ERROR_CHARS: usize = 200;

/// Client error types
#[derive(Debug, Error)]
pub enum ClientError {
    /// The server answered with a non-success status
    #[error("Server error {}: {}", .0.status, .0.message())]
    Api(ApiError),

    /// The request went out but no response came back
    #[error("No response from server: {0}")]
    NoResponse(#[source] reqwest::Error),

    /// Building the request or reading the response failed
    #[error("Request failed: {0}")]
    Request(#[source] reqwest::Error),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Configuration(String),
}

/// Coarse classification used when deciding what to show the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Has a response
    Response,
    /// Request sent but no response
    NoResponse,
    /// Anything else
    Other,
}

/// A non-success HTTP response
#[derive(Debug, Clone, PartialEq)]
pub struct ApiError {
    pub status: u16,
    /// Canonical reason phrase, e.g. "Unauthorized"
    pub reason: String,
    /// Parsed JSON error body, if the server sent one
    pub body: Option<ErrorBody>,
    /// Raw body text, trimmed and truncated
    pub text: String,
}

impl ApiError {
    /// Create error from HTTP status code and raw body
    pub fn from_status(status: reqwest::StatusCode, text: &str) -> Self {
        let body = serde_json::from_str::<ErrorBody>(text)
            .ok()
            .filter(|body| body.detail.is_some());
        Self {
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or_default().to_string(),
            body,
            text: text.trim().chars().take(MAX_ERROR_CHARS).collect(),
        }
    }

    /// Best human-readable summary of the error
    pub fn message(&self) -> String {
        match self.body.as_ref().and_then(|body| body.detail.as_ref()) {
            Some(ErrorDetail::Message(message)) if !message.is_empty() => message.clone(),
            Some(ErrorDetail::Issues(issues)) => issues
                .iter()
                .map(|issue| issue.msg.as_str())
                .collect::<Vec<_>>()
                .join("; "),
            _ if !self.text.is_empty() => self.text.clone(),
            _ => format!("{} {}", self.status, self.reason).trim_end().to_string(),
        }
    }
}

/// What the UI should show for an error
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feedback {
    /// Inline message attached to a form field
    Field { field: String, message: String },
    /// General notification
    Notice(String),
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_builder() || err.is_decode() || err.is_body() {
            Self::Request(err)
        } else if is_unanswered(&err) {
            Self::NoResponse(err)
        } else {
            Self::Request(err)
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn is_unanswered(err: &reqwest::Error) -> bool {
    err.is_timeout() || err.is_connect() || err.is_request()
}

#[cfg(target_arch = "wasm32")]
fn is_unanswered(err: &reqwest::Error) -> bool {
    err.is_timeout() || err.is_request()
}

impl ClientError {
    /// HTTP status of the response, if there was one
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Api(err) => Some(err.status),
            _ => None,
        }
    }

    /// Whether the server rejected the credentials with 401
    pub const fn is_unauthorized(&self) -> bool {
        matches!(self.status(), Some(401))
    }

    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Api(_) => ErrorKind::Response,
            Self::NoResponse(_) => ErrorKind::NoResponse,
            _ => ErrorKind::Other,
        }
    }

    /// Map the error to field-level messages and notifications
    pub fn feedback(&self) -> Vec<Feedback> {
        match self {
            Self::Api(err) => api_feedback(err),
            Self::NoResponse(_) => vec![Feedback::Notice(
                "No response from the server. Please check your internet connection.".to_string(),
            )],
            other => vec![Feedback::Notice(format!("An error occurred: {other}"))],
        }
    }
}

fn api_feedback(err: &ApiError) -> Vec<Feedback> {
    let status_line = || Feedback::Notice(format!("Error: {} {}", err.status, err.reason));
    let Some(body) = &err.body else {
        return vec![status_line()];
    };

    match &body.detail {
        Some(ErrorDetail::Message(message)) if !message.is_empty() => {
            std::iter::once(Feedback::Notice(message.clone()))
                .chain(body.extra_issues().iter().map(issue_feedback))
                .collect()
        }
        Some(ErrorDetail::Issues(issues)) => issues.iter().map(issue_feedback).collect(),
        _ => vec![status_line()],
    }
}

fn issue_feedback(issue: &ValidationIssue) -> Feedback {
    match issue.field() {
        Some(field) => Feedback::Field {
            field,
            message: issue.msg.clone(),
        },
        None => Feedback::Notice(issue.msg.clone()),
    }
}
