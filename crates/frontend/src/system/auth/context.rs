use std::sync::Arc;

use contracts::system::auth::{AuthError, Credentials, Session};
use leptos::prelude::*;

use super::strategy::AuthStrategy;

/// Auth context: holds the strategy and the current session.
///
/// The session is kept in memory only; navigating away or reloading the page
/// drops it (no token lifecycle in this application).
#[derive(Clone)]
pub struct AuthService {
    strategy: Arc<dyn AuthStrategy>,
    pub session: RwSignal<Option<Session>>,
}

impl AuthService {
    pub fn new(strategy: Arc<dyn AuthStrategy>) -> Self {
        Self {
            strategy,
            session: RwSignal::new(None),
        }
    }

    pub fn login(&self, credentials: &Credentials) -> Result<(), AuthError> {
        let session = self.strategy.authenticate(credentials)?;
        self.session.set(Some(session));
        Ok(())
    }
}

/// Hook to access the auth service
pub fn use_auth() -> AuthService {
    use_context::<AuthService>().expect("AuthService not found in context")
}
