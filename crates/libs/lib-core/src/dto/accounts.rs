//! Accounts registered through the browser session service.
//!
//! Stored as a JSON array in `localStorage`. Only the Argon2 hash of each
//! password is kept.

use serde::{Deserialize, Serialize};

use super::{SignInFlow, SignInRequest};
use crate::error::{AppError, Result};
use crate::pwd::{hash_password, verify_password};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StoredAccount {
    pub email: String,
    pub password_hash: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct AccountBook {
    accounts: Vec<StoredAccount>,
}

/// Case- and whitespace-insensitive form of an email address.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_ascii_lowercase()
}

impl AccountBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    pub fn contains(&self, email: &str) -> bool {
        self.find(&normalize_email(email)).is_some()
    }

    fn find(&self, email: &str) -> Option<&StoredAccount> {
        self.accounts.iter().find(|account| account.email == email)
    }

    /// Validate and apply a request, returning the normalized email.
    ///
    /// Sign-up records a new account hashed with `salt`; sign-in checks the
    /// password against the stored hash.
    pub fn apply(&mut self, request: &SignInRequest, salt: &[u8]) -> Result<String> {
        request.validate()?;
        let email = normalize_email(&request.email);

        match (request.flow, self.find(&email)) {
            (SignInFlow::SignIn, None) => Err(AppError::NotFound(
                "No account found for this email, sign up first".to_string(),
            )),
            (SignInFlow::SignIn, Some(account)) => {
                if verify_password(&request.password, &account.password_hash)? {
                    Ok(email)
                } else {
                    Err(AppError::InvalidInput("Incorrect email or password".to_string()))
                }
            }
            (SignInFlow::SignUp, Some(_)) => Err(AppError::InvalidInput(
                "An account with this email already exists".to_string(),
            )),
            (SignInFlow::SignUp, None) => {
                let password_hash = hash_password(&request.password, salt)?;
                self.accounts.push(StoredAccount {
                    email: email.clone(),
                    password_hash,
                });
                Ok(email)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SALT: &[u8] = b"account-salt-001";

    fn request(email: &str, password: &str, flow: SignInFlow) -> SignInRequest {
        SignInRequest {
            email: email.to_string(),
            password: password.to_string(),
            flow,
        }
    }

    #[test]
    fn test_sign_up_then_sign_in() {
        let mut book = AccountBook::new();
        let email = book
            .apply(&request(" Rebel@Universe.COM ", "password123", SignInFlow::SignUp), SALT)
            .unwrap();
        assert_eq!(email, "rebel@universe.com");
        assert!(book.contains("REBEL@universe.com"));

        let email = book
            .apply(&request("rebel@universe.com", "password123", SignInFlow::SignIn), SALT)
            .unwrap();
        assert_eq!(email, "rebel@universe.com");
    }

    #[test]
    fn test_wrong_password_is_rejected() {
        let mut book = AccountBook::new();
        book.apply(&request("rebel@universe.com", "password123", SignInFlow::SignUp), SALT)
            .unwrap();

        let err = book
            .apply(&request("rebel@universe.com", "password124", SignInFlow::SignIn), SALT)
            .unwrap_err();
        assert_eq!(err.user_message(), "Incorrect email or password");
    }

    #[test]
    fn test_unknown_and_duplicate_emails() {
        let mut book = AccountBook::new();
        let err = book
            .apply(&request("ghost@universe.com", "password123", SignInFlow::SignIn), SALT)
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));

        book.apply(&request("rebel@universe.com", "password123", SignInFlow::SignUp), SALT)
            .unwrap();
        let err = book
            .apply(&request("rebel@universe.com", "another-pass", SignInFlow::SignUp), SALT)
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn test_storage_keeps_only_hashes() {
        let mut book = AccountBook::new();
        book.apply(&request("rebel@universe.com", "password123", SignInFlow::SignUp), SALT)
            .unwrap();

        let json = book.to_json().unwrap();
        assert!(!json.contains("password123"));
        assert_eq!(AccountBook::from_json(&json).unwrap(), book);
    }
}
