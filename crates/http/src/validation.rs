//! Client-side form validation
//!
//! Only presence and equality are checked here. Everything else (email
//! syntax, password strength) is the server's call and comes back as a
//! validation error list.

use crate::types::Credentials;
use thiserror::Error;

/// Form rejected before any request was sent
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Please fill in all fields")]
    MissingFields,

    #[error("Passwords do not match")]
    PasswordMismatch,
}

impl FormError {
    /// Id of the input the error belongs to, if it is field-specific
    pub const fn field(&self) -> Option<&'static str> {
        match self {
            Self::MissingFields => None,
            Self::PasswordMismatch => Some("confirm-password"),
        }
    }
}

/// Values of the registration form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegisterForm {
    /// Check the form and turn it into the request body
    pub fn validate(&self) -> Result<Credentials, FormError> {
        if [&self.email, &self.password, &self.confirm_password]
            .iter()
            .any(|value| value.is_empty())
        {
            return Err(FormError::MissingFields);
        }
        if self.password != self.confirm_password {
            return Err(FormError::PasswordMismatch);
        }
        Ok(Credentials {
            email: self.email.clone(),
            password: self.password.clone(),
        })
    }
}

/// Values of the login form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> Result<Credentials, FormError> {
        if self.email.is_empty() || self.password.is_empty() {
            return Err(FormError::MissingFields);
        }
        Ok(Credentials {
            email: self.email.clone(),
            password: self.password.clone(),
        })
    }
}
