//! # Authentication Data Transfer Objects
//!
//! The portfolio sits behind a sign-in gate. Authentication itself is provided
//! by a pluggable session service; these types are its contract.
//!
//! ## Session States
//!
//! - [`SessionIdentity::Loading`] - the service has not answered yet, render a spinner
//! - [`SessionIdentity::Absent`] - nobody is signed in, render the sign-in form
//! - [`SessionIdentity::Present`] - render the application
//!
//! ## Wire Format
//!
//! Stored as JSON in `localStorage`:
//!
//! ```text
//! {
//!   "id": "5b0c3c1e-3f0d-4a43-9d3e-6c2f1f7f9a10",
//!   "email": "rebel@universe.com",
//!   "is_anonymous": false
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Minimum password length accepted on sign-up.
pub const MIN_PASSWORD_LEN: usize = 8;

/// User information (public, safe to keep client side).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserInfo {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default)]
    pub is_anonymous: bool,
}

impl UserInfo {
    /// Name shown in the navigation bar.
    pub fn display_name(&self) -> String {
        match (&self.email, self.is_anonymous) {
            (Some(email), false) => email.split('@').next().unwrap_or(email).to_string(),
            _ => "guest".to_string(),
        }
    }
}

/// Who is signed in, as seen by the UI.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SessionIdentity {
    #[default]
    Loading,
    Absent,
    Present(UserInfo),
}

impl SessionIdentity {
    pub fn user(&self) -> Option<&UserInfo> {
        match self {
            SessionIdentity::Present(user) => Some(user),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, SessionIdentity::Loading)
    }
}

/// Whether the credentials create a new account or open an existing one.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum SignInFlow {
    #[default]
    SignIn,
    SignUp,
}

impl SignInFlow {
    pub fn toggled(self) -> Self {
        match self {
            SignInFlow::SignIn => SignInFlow::SignUp,
            SignInFlow::SignUp => SignInFlow::SignIn,
        }
    }

    pub fn submit_label(self) -> &'static str {
        match self {
            SignInFlow::SignIn => "Sign in",
            SignInFlow::SignUp => "Sign up",
        }
    }
}

/// Password sign-in / sign-up request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
    pub flow: SignInFlow,
}

impl SignInRequest {
    /// Check the credentials before they reach the session service.
    pub fn validate(&self) -> Result<()> {
        let email = self.email.trim();
        if email.is_empty() {
            return Err(AppError::InvalidInput("Email cannot be empty".to_string()));
        }
        let valid_email = email
            .split_once('@')
            .map(|(local, domain)| {
                !local.is_empty() && domain.contains('.') && !domain.ends_with('.')
            })
            .unwrap_or(false);
        if !valid_email {
            return Err(AppError::InvalidInput("Invalid email format".to_string()));
        }
        if self.password.is_empty() {
            return Err(AppError::InvalidInput("Password cannot be empty".to_string()));
        }
        if self.flow == SignInFlow::SignUp && self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(AppError::InvalidInput(format!(
                "Password must be at least {} characters",
                MIN_PASSWORD_LEN
            )));
        }
        Ok(())
    }
}
