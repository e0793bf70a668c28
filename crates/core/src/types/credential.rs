//! Admin credential check.
//!
//! The admin area is guarded by a single shared password compiled into the
//! binary. It only gates which page is shown and is not a security boundary.

use secrecy::{ExposeSecret, SecretString};

/// The fixed admin password.
const ADMIN_PASSWORD: &str = "admin123";

/// A password typed into the admin login form.
///
/// Wraps the input in a [`SecretString`] so it is redacted from `Debug`
/// output and logs.
#[derive(Debug, Clone)]
pub struct AdminCredential(SecretString);

impl AdminCredential {
    /// Wrap a typed password.
    #[must_use]
    pub fn new(password: impl Into<String>) -> Self {
        Self(SecretString::from(password.into()))
    }

    /// Whether this credential matches the admin password.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        verify_admin_password(&self.0)
    }
}

impl From<SecretString> for AdminCredential {
    fn from(secret: SecretString) -> Self {
        Self(secret)
    }
}

/// Compare a password against the admin password.
///
/// The comparison is exact: surrounding whitespace is not trimmed.
#[must_use]
pub fn verify_admin_password(password: &SecretString) -> bool {
    password.expose_secret() == ADMIN_PASSWORD
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_password_matches() {
        assert!(AdminCredential::new("admin123").is_valid());
    }

    #[test]
    fn test_admin_password_is_exact() {
        assert!(!AdminCredential::new("wrong").is_valid());
        assert!(!AdminCredential::new(" admin123").is_valid());
        assert!(!AdminCredential::new("").is_valid());
    }

    #[test]
    fn test_debug_redacts_password() {
        let debug = format!("{:?}", AdminCredential::new("admin123"));
        assert!(!debug.contains("admin123"));
    }
}
