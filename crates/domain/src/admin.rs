use cartaz_core::{AppError, AppResult, NonEmptyString};
use serde::{Deserialize, Serialize};

/// Validated, lowercase email address.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Creates a validated email address.
    ///
    /// Performs basic structural validation: non-empty, contains exactly one `@`,
    /// local part and domain are non-empty, domain contains at least one `.`.
    /// The value is trimmed and lowercased, so two spellings of the same
    /// address always compare equal.
    pub fn new(value: impl Into<String>) -> AppResult<Self> {
        let value = value.into();
        let trimmed = value.trim().to_lowercase();

        if trimmed.is_empty() {
            return Err(AppError::Validation(
                "email address must not be empty".to_owned(),
            ));
        }

        let parts: Vec<&str> = trimmed.splitn(2, '@').collect();
        if parts.len() != 2 {
            return Err(AppError::Validation(
                "email address must contain exactly one '@'".to_owned(),
            ));
        }

        let local = parts[0];
        let domain = parts[1];

        if local.is_empty() {
            return Err(AppError::Validation(
                "email local part must not be empty".to_owned(),
            ));
        }

        if domain.is_empty() || !domain.contains('.') {
            return Err(AppError::Validation(
                "email domain must contain at least one '.'".to_owned(),
            ));
        }

        Ok(Self(trimmed))
    }

    /// Returns the validated email string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl From<EmailAddress> for String {
    fn from(value: EmailAddress) -> Self {
        value.0
    }
}

/// Administrator allowed into the editorial dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminUser {
    email: EmailAddress,
    display_name: NonEmptyString,
    is_active: bool,
}

impl AdminUser {
    /// Creates a validated administrator entry.
    pub fn new(
        email: impl Into<String>,
        display_name: impl Into<String>,
        is_active: bool,
    ) -> AppResult<Self> {
        Ok(Self {
            email: EmailAddress::new(email)?,
            display_name: NonEmptyString::new(display_name)?,
            is_active,
        })
    }

    /// Returns the login email.
    #[must_use]
    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Returns the name shown in the admin shell.
    #[must_use]
    pub fn display_name(&self) -> &NonEmptyString {
        &self.display_name
    }

    /// Returns whether the administrator may sign in.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.is_active
    }
}

#[cfg(test)]
mod tests {
    use super::{AdminUser, EmailAddress};

    #[test]
    fn email_is_normalized_to_lowercase() {
        let email = EmailAddress::new("  Ana@Cartaz.App ").unwrap_or_else(|_| unreachable!());
        assert_eq!(email.as_str(), "ana@cartaz.app");
    }

    #[test]
    fn email_without_domain_dot_is_rejected() {
        assert!(EmailAddress::new("ana@localhost").is_err());
    }

    #[test]
    fn admin_requires_valid_email_and_name() {
        assert!(AdminUser::new("not-an-email", "Ana", true).is_err());
        assert!(AdminUser::new("ana@cartaz.app", "   ", true).is_err());
        assert!(AdminUser::new("ana@cartaz.app", "Ana Lima", false).is_ok());
    }
}
