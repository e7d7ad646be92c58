//! Session state management

use std::sync::Arc;

use leptos::prelude::*;
use lib_core::dto::{SessionIdentity, SignInRequest, UserInfo};
use lib_core::error::Result;

use crate::services::session::{LocalSessionService, SessionService};

type SharedSessionService = Arc<dyn SessionService + Send + Sync>;

/// Global session context
#[derive(Clone, Copy)]
pub struct SessionContext {
    pub identity: RwSignal<SessionIdentity>,
    service: StoredValue<SharedSessionService>,
}

impl SessionContext {
    pub fn new(service: SharedSessionService) -> Self {
        Self {
            identity: RwSignal::new(SessionIdentity::Loading),
            service: StoredValue::new(service),
        }
    }

    pub fn user(&self) -> Option<UserInfo> {
        self.identity.with(|identity| identity.user().cloned())
    }

    /// Settle `Loading` from whatever the service remembers.
    ///
    /// A storage failure is treated as signed out.
    pub fn resolve(&self) {
        let identity = match self.service.with_value(|service| service.current()) {
            Ok(Some(user)) => {
                log::info!("Restored session for {}", user.display_name());
                SessionIdentity::Present(user)
            }
            Ok(None) => SessionIdentity::Absent,
            Err(err) => {
                log::warn!("Could not restore session: {}", err);
                SessionIdentity::Absent
            }
        };
        self.identity.set(identity);
    }

    pub fn sign_in(&self, request: &SignInRequest) -> Result<UserInfo> {
        let user = self.service.with_value(|service| service.sign_in(request))?;
        log::info!("Signed in as {}", user.display_name());
        self.identity.set(SessionIdentity::Present(user.clone()));
        Ok(user)
    }

    pub fn sign_in_anonymously(&self) -> Result<UserInfo> {
        let user = self.service.with_value(|service| service.sign_in_anonymously())?;
        log::info!("Signed in anonymously");
        self.identity.set(SessionIdentity::Present(user.clone()));
        Ok(user)
    }

    /// Clear the session. The UI falls back to the sign-in form even if the
    /// stored session could not be removed.
    pub fn sign_out(&self) -> Result<()> {
        let result = self.service.with_value(|service| service.sign_out());
        self.identity.set(SessionIdentity::Absent);
        log::info!("Signed out");
        result
    }
}

pub fn provide_session_context() -> SessionContext {
    let context = SessionContext::new(Arc::new(LocalSessionService::default()));
    provide_context(context);
    context
}

pub fn use_session_context() -> SessionContext {
    expect_context::<SessionContext>()
}
