//! Session service
//!
//! The UI only depends on [`SessionService`]. [`LocalSessionService`] keeps the
//! session in `localStorage` and is what the static build ships with; a hosted
//! auth provider can be dropped in by implementing the same trait.
//!
//! The local service keeps an [`AccountBook`] of signed-up emails with Argon2
//! password hashes, so sign-in checks the password that sign-up set. It is
//! still a per-browser gate, not a server-side account.

use lib_core::dto::{AccountBook, SignInRequest, UserInfo};
use lib_core::error::{AppError, Result};
use web_sys::Storage;

use crate::utils::constants::{ACCOUNTS_STORAGE_KEY, SESSION_STORAGE_KEY};

pub trait SessionService {
    /// Signed-in user, if any.
    fn current(&self) -> Result<Option<UserInfo>>;

    fn sign_in(&self, request: &SignInRequest) -> Result<UserInfo>;

    fn sign_in_anonymously(&self) -> Result<UserInfo>;

    fn sign_out(&self) -> Result<()>;
}

#[derive(Clone, Copy, Debug)]
pub struct LocalSessionService {
    session_key: &'static str,
    accounts_key: &'static str,
}

impl Default for LocalSessionService {
    fn default() -> Self {
        Self {
            session_key: SESSION_STORAGE_KEY,
            accounts_key: ACCOUNTS_STORAGE_KEY,
        }
    }
}

impl LocalSessionService {
    fn storage(&self) -> Result<Storage> {
        web_sys::window()
            .ok_or_else(|| AppError::Storage("no window".to_string()))?
            .local_storage()
            .map_err(|err| AppError::Storage(format!("{:?}", err)))?
            .ok_or_else(|| AppError::Storage("localStorage is disabled".to_string()))
    }

    fn read(&self, storage: &Storage, key: &str) -> Result<Option<String>> {
        storage
            .get_item(key)
            .map_err(|err| AppError::Storage(format!("{:?}", err)))
    }

    fn write(&self, storage: &Storage, key: &str, value: &str) -> Result<()> {
        storage
            .set_item(key, value)
            .map_err(|err| AppError::Storage(format!("{:?}", err)))
    }

    fn accounts(&self, storage: &Storage) -> Result<AccountBook> {
        match self.read(storage, self.accounts_key)? {
            Some(json) => AccountBook::from_json(&json),
            None => Ok(AccountBook::new()),
        }
    }

    fn start_session(&self, storage: &Storage, user: UserInfo) -> Result<UserInfo> {
        let json = serde_json::to_string(&user)?;
        self.write(storage, self.session_key, &json)?;
        Ok(user)
    }
}

impl SessionService for LocalSessionService {
    fn current(&self) -> Result<Option<UserInfo>> {
        let storage = self.storage()?;
        match self.read(&storage, self.session_key)? {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }

    fn sign_in(&self, request: &SignInRequest) -> Result<UserInfo> {
        let storage = self.storage()?;
        let mut accounts = self.accounts(&storage)?;
        let known = accounts.len();

        let email = accounts.apply(request, uuid::Uuid::new_v4().as_bytes())?;
        if accounts.len() != known {
            self.write(&storage, self.accounts_key, &accounts.to_json()?)?;
            log::info!("Registered account for {}", email);
        }

        self.start_session(
            &storage,
            UserInfo {
                id: account_id(&email),
                email: Some(email),
                is_anonymous: false,
            },
        )
    }

    fn sign_in_anonymously(&self) -> Result<UserInfo> {
        let storage = self.storage()?;
        self.start_session(
            &storage,
            UserInfo {
                id: uuid::Uuid::new_v4().to_string(),
                email: None,
                is_anonymous: true,
            },
        )
    }

    fn sign_out(&self) -> Result<()> {
        self.storage()?
            .remove_item(self.session_key)
            .map_err(|err| AppError::Storage(format!("{:?}", err)))
    }
}

/// Stable per-email id so signing in twice yields the same user.
fn account_id(email: &str) -> String {
    let name = format!("mailto:{}", email);
    uuid::Uuid::new_v5(&uuid::Uuid::NAMESPACE_URL, name.as_bytes()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use lib_core::dto::normalize_email;

    #[test]
    fn test_account_id_is_stable_per_email() {
        let normalized = normalize_email(" Rebel@Universe.com");
        assert_eq!(account_id("rebel@universe.com"), account_id(&normalized));
        assert_ne!(account_id("rebel@universe.com"), account_id("other@universe.com"));
    }
}
