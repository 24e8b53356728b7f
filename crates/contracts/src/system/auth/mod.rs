use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Результат успешной аутентификации. Токенов нет: приложение работает
/// без серверной сессии, объект хранится только в памяти вкладки.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("invalid credentials")]
    InvalidCredentials,
}

/// Ошибки локальной проверки формы логина (до вызова стратегии).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CredentialErrors {
    pub email: Option<String>,
    pub password: Option<String>,
}

impl CredentialErrors {
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.password.is_none()
    }
}

impl Credentials {
    /// Локальная валидация формы логина: корректный e-mail и пароль от 8 символов.
    pub fn validate(&self) -> Result<(), CredentialErrors> {
        let mut errors = CredentialErrors::default();

        let email = self.email.trim();
        if email.is_empty() {
            errors.email = Some("Обязательное поле".to_string());
        } else if !is_valid_email(email) {
            errors.email = Some("Некорректный e-mail".to_string());
        }

        if self.password.is_empty() {
            errors.password = Some("Обязательное поле".to_string());
        } else if self.password.len() < 8 {
            errors.password = Some("Минимальная длина — 8 символов".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

fn is_valid_email(s: &str) -> bool {
    let mut parts = s.splitn(2, '@');
    let local = parts.next().unwrap_or("");
    let domain = parts.next().unwrap_or("");
    !local.is_empty()
        && !domain.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !s.contains(char::is_whitespace)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_well_formed_credentials() {
        let c = Credentials {
            email: "admin@example.com".to_string(),
            password: "longenough".to_string(),
        };
        assert!(c.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_malformed_email() {
        for email in ["", "plain", "a@b", "@example.com", "a @example.com"] {
            let c = Credentials {
                email: email.to_string(),
                password: "longenough".to_string(),
            };
            let errors = c.validate().unwrap_err();
            assert!(errors.email.is_some(), "email {:?} accepted", email);
        }
    }

    #[test]
    fn test_validate_rejects_short_password() {
        let c = Credentials {
            email: "admin@example.com".to_string(),
            password: "short".to_string(),
        };
        let errors = c.validate().unwrap_err();
        assert!(errors.password.is_some());
        assert!(errors.email.is_none());
    }
}
