//! Request and response bodies exchanged with the auth API

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of the register and login calls
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Returned by the register endpoint with `201 Created`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegisteredUser {
    pub email: String,
}

/// Returned by login and refresh
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenResponse {
    pub access_token: String,
    pub refresh_token: String,
}

/// The authenticated user, as returned by the "who am I" endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserProfile {
    pub email: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub is_verified: bool,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

const fn default_true() -> bool {
    true
}

/// One entry of a validation error list
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ValidationIssue {
    /// Location path, e.g. `["body", "email"]`
    #[serde(default)]
    pub loc: Vec<Value>,
    pub msg: String,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
}

impl ValidationIssue {
    /// Name of the offending form field, taken from the second `loc` entry
    pub fn field(&self) -> Option<String> {
        match self.loc.get(1)? {
            Value::String(name) => Some(name.clone()),
            other => Some(other.to_string()),
        }
    }
}

/// `detail` is either a plain message or a list of field issues
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ErrorDetail {
    Message(String),
    Issues(Vec<ValidationIssue>),
}

/// Error body sent by the API alongside a non-success status
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<ErrorDetail>,
    /// Extra validation details some error responses carry next to a string `detail`
    #[serde(default)]
    pub errors: Option<Value>,
}

impl ErrorBody {
    /// Issues listed under `errors`, skipping it when it is not an issue list
    pub fn extra_issues(&self) -> Vec<ValidationIssue> {
        self.errors
            .as_ref()
            .and_then(|errors| serde_json::from_value(errors.clone()).ok())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn detail_accepts_message_or_issue_list() {
        let body: ErrorBody = serde_json::from_value(json!({"detail": "Invalid credentials"})).unwrap();
        assert_eq!(
            body.detail,
            Some(ErrorDetail::Message("Invalid credentials".into()))
        );

        let body: ErrorBody = serde_json::from_value(json!({
            "detail": [{"loc": ["body", "password"], "msg": "too short", "type": "value_error"}]
        }))
        .unwrap();
        let Some(ErrorDetail::Issues(issues)) = body.detail else {
            panic!("expected an issue list");
        };
        assert_eq!(issues[0].field().as_deref(), Some("password"));
        assert_eq!(issues[0].kind.as_deref(), Some("value_error"));
    }

    #[test]
    fn issue_without_field_location() {
        let issue = ValidationIssue {
            loc: vec![json!("body")],
            msg: "bad body".into(),
            kind: None,
        };
        assert_eq!(issue.field(), None);

        let issue = ValidationIssue {
            loc: vec![json!("query"), json!(3)],
            msg: "bad index".into(),
            kind: None,
        };
        assert_eq!(issue.field().as_deref(), Some("3"));
    }

    #[test]
    fn extra_issues_ignores_unexpected_shapes() {
        let body: ErrorBody =
            serde_json::from_value(json!({"detail": "Bad", "errors": {"email": "taken"}})).unwrap();
        assert!(body.extra_issues().is_empty());

        let body: ErrorBody = serde_json::from_value(json!({
            "detail": "Data validation error",
            "errors": [{"loc": ["body", "email"], "msg": "not an email"}]
        }))
        .unwrap();
        assert_eq!(body.extra_issues().len(), 1);
    }

    #[test]
    fn profile_defaults_optional_fields() {
        let profile: UserProfile = serde_json::from_value(json!({"email": "a@b.c"})).unwrap();
        assert!(profile.is_active);
        assert!(!profile.is_verified);
        assert_eq!(profile.created_at, None);
    }
}
