use contracts::system::auth::{AuthError, Credentials, Session};

/// Pluggable authentication strategy.
///
/// The login screen never sees the expected credential pair; it only calls
/// `authenticate` through this trait.
pub trait AuthStrategy: Send + Sync {
    fn authenticate(&self, credentials: &Credentials) -> Result<Session, AuthError>;
}

/// Единственная продакшен-реализация: сверка с одной парой логин/пароль.
/// Пара задаётся в композиционном корне приложения.
pub struct StaticAuthenticator {
    email: String,
    password: String,
}

impl StaticAuthenticator {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl AuthStrategy for StaticAuthenticator {
    fn authenticate(&self, credentials: &Credentials) -> Result<Session, AuthError> {
        if credentials.email == self.email && credentials.password == self.password {
            Ok(Session {
                email: credentials.email.clone(),
            })
        } else {
            Err(AuthError::InvalidCredentials)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn authenticator() -> StaticAuthenticator {
        StaticAuthenticator::new("admin@example.com", "password123")
    }

    #[test]
    fn test_accepts_expected_pair() {
        let session = authenticator()
            .authenticate(&Credentials {
                email: "admin@example.com".to_string(),
                password: "password123".to_string(),
            })
            .unwrap();
        assert_eq!(session.email, "admin@example.com");
    }

    #[test]
    fn test_rejects_wrong_password() {
        let result = authenticator().authenticate(&Credentials {
            email: "admin@example.com".to_string(),
            password: "wrong".to_string(),
        });
        assert_eq!(result, Err(AuthError::InvalidCredentials));
    }

    #[test]
    fn test_rejects_unknown_email() {
        let result = authenticator().authenticate(&Credentials {
            email: "other@example.com".to_string(),
            password: "password123".to_string(),
        });
        assert_eq!(result, Err(AuthError::InvalidCredentials));
    }
}
