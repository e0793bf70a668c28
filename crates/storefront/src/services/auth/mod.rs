//! Session transitions.
//!
//! `Absent -> Customer | Admin -> Absent`. Switching directly between a
//! customer and the admin is refused; the user has to sign out first.

use secrecy::{ExposeSecret, SecretString};
use sweet_slac_core::{AdminCredential, Email};

use crate::error::{Result, StorefrontError, ValidationError};
use crate::models::{Customer, Session};
use crate::state::AppState;

/// Registration form data, as typed.
#[derive(Debug, Clone)]
pub struct RegistrationForm {
    pub name: String,
    pub email: String,
    pub password: SecretString,
}

/// Customer sign-in form data, as typed.
#[derive(Debug, Clone)]
pub struct SignInForm {
    pub email: String,
    pub password: SecretString,
}

/// Session service.
///
/// Works on a borrowed snapshot; the caller decides when to persist.
pub struct AuthService<'a> {
    state: &'a mut AppState,
}

impl<'a> AuthService<'a> {
    /// Create a session service over a snapshot.
    #[must_use]
    pub const fn new(state: &'a mut AppState) -> Self {
        Self { state }
    }

    // =========================================================================
    // Customer
    // =========================================================================

    /// Register a new customer and sign them in.
    ///
    /// The password is required but not stored or checked. A fresh account
    /// starts with an empty cart.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::MissingRegistrationFields` if any field is blank.
    /// Returns `ValidationError::InvalidEmail` if the email is malformed.
    /// Returns `StorefrontError::SessionConflict` if the admin is signed in.
    pub fn register_customer(&mut self, form: &RegistrationForm) -> Result<Customer> {
        let name = form.name.trim();
        let email = form.email.trim();
        if name.is_empty() || email.is_empty() || is_blank(&form.password) {
            return Err(ValidationError::MissingRegistrationFields.into());
        }
        let email = Email::parse(email).map_err(ValidationError::from)?;
        self.ensure_not(&Session::Admin)?;

        let customer = Customer {
            name: name.to_owned(),
            email: email.into_inner(),
        };
        self.state.cart.clear();
        self.state.session = Session::Customer(customer.clone());
        Ok(customer)
    }

    /// Sign a customer in with any non-blank email and password.
    ///
    /// The display name is the part of the email before `@`. The cart is
    /// kept as it is.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::MissingSignInFields` if either field is blank.
    /// Returns `StorefrontError::SessionConflict` if the admin is signed in.
    pub fn sign_in_customer(&mut self, form: &SignInForm) -> Result<Customer> {
        let email = form.email.trim();
        if email.is_empty() || is_blank(&form.password) {
            return Err(ValidationError::MissingSignInFields.into());
        }
        self.ensure_not(&Session::Admin)?;

        let name = email.split_once('@').map_or(email, |(local, _)| local);
        let customer = Customer {
            name: name.to_owned(),
            email: email.to_owned(),
        };
        self.state.session = Session::Customer(customer.clone());
        Ok(customer)
    }

    // =========================================================================
    // Admin
    // =========================================================================

    /// Sign the admin in.
    ///
    /// # Errors
    ///
    /// Returns `StorefrontError::InvalidCredentials` if the password is wrong.
    /// Returns `StorefrontError::SessionConflict` if a customer is signed in.
    pub fn sign_in_admin(&mut self, credential: &AdminCredential) -> Result<()> {
        if !credential.is_valid() {
            return Err(StorefrontError::InvalidCredentials);
        }
        if self.state.session.customer().is_some() {
            return Err(StorefrontError::SessionConflict {
                active: self.state.session.role(),
            });
        }
        self.state.session = Session::Admin;
        Ok(())
    }

    // =========================================================================
    // Sign-out
    // =========================================================================

    /// End the session and empty the cart.
    ///
    /// Always succeeds, even without a session.
    pub fn sign_out(&mut self) {
        self.state.session = Session::Absent;
        self.state.cart.clear();
    }

    fn ensure_not(&self, blocked: &Session) -> Result<()> {
        if &self.state.session == blocked {
            return Err(StorefrontError::SessionConflict {
                active: self.state.session.role(),
            });
        }
        Ok(())
    }
}

fn is_blank(secret: &SecretString) -> bool {
    secret.expose_secret().trim().is_empty()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use sweet_slac_core::{EmailError, ItemId};

    use super::*;

    fn registration(name: &str, email: &str, password: &str) -> RegistrationForm {
        RegistrationForm {
            name: name.to_string(),
            email: email.to_string(),
            password: SecretString::from(password.to_string()),
        }
    }

    fn sign_in(email: &str, password: &str) -> SignInForm {
        SignInForm {
            email: email.to_string(),
            password: SecretString::from(password.to_string()),
        }
    }

    fn state_with_cart() -> AppState {
        let mut state = AppState::default();
        state.cart.add(&ItemId::from("a1"));
        state
    }

    #[test]
    fn test_register_clears_cart() {
        let mut state = state_with_cart();
        let customer = AuthService::new(&mut state)
            .register_customer(&registration(" Meera ", "meera@example.com", "pw"))
            .unwrap();
        assert_eq!(customer.name, "Meera");
        assert!(state.cart.is_empty());
        assert_eq!(state.session, Session::Customer(customer));
    }

    #[test]
    fn test_register_requires_every_field() {
        let mut state = state_with_cart();
        let err = AuthService::new(&mut state)
            .register_customer(&registration("Meera", "meera@example.com", "   "))
            .unwrap_err();
        assert!(matches!(
            err,
            StorefrontError::Validation(ValidationError::MissingRegistrationFields)
        ));
        assert_eq!(state.session, Session::Absent);
        assert!(!state.cart.is_empty());
    }

    #[test]
    fn test_register_checks_email_shape() {
        let mut state = AppState::default();
        let err = AuthService::new(&mut state)
            .register_customer(&registration("Meera", "meera.example.com", "pw"))
            .unwrap_err();
        assert!(matches!(
            err,
            StorefrontError::Validation(ValidationError::InvalidEmail(
                EmailError::MissingAtSymbol
            ))
        ));
    }

    #[test]
    fn test_sign_in_derives_name_and_keeps_cart() {
        let mut state = state_with_cart();
        let customer = AuthService::new(&mut state)
            .sign_in_customer(&sign_in("dev.k@example.com", "x"))
            .unwrap();
        assert_eq!(customer.name, "dev.k");
        assert_eq!(state.cart.len(), 1);
    }

    #[test]
    fn test_sign_in_accepts_unshaped_email() {
        let mut state = AppState::default();
        let customer = AuthService::new(&mut state)
            .sign_in_customer(&sign_in("just-a-name", "x"))
            .unwrap();
        assert_eq!(customer.name, "just-a-name");
    }

    #[test]
    fn test_sign_in_requires_both_fields() {
        let mut state = AppState::default();
        let err = AuthService::new(&mut state)
            .sign_in_customer(&sign_in("a@b.c", ""))
            .unwrap_err();
        assert_eq!(err.user_message(), "Please enter email and password.");
    }

    #[test]
    fn test_wrong_admin_password_leaves_session() {
        let mut state = AppState::default();
        let err = AuthService::new(&mut state)
            .sign_in_admin(&AdminCredential::new("wrong"))
            .unwrap_err();
        assert!(matches!(err, StorefrontError::InvalidCredentials));
        assert_eq!(state.session, Session::Absent);
    }

    #[test]
    fn test_admin_login() {
        let mut state = AppState::default();
        AuthService::new(&mut state)
            .sign_in_admin(&AdminCredential::new("admin123"))
            .unwrap();
        assert!(state.session.is_admin());
    }

    #[test]
    fn test_no_direct_switch_between_roles() {
        let mut state = AppState::default();
        let mut auth = AuthService::new(&mut state);
        auth.sign_in_customer(&sign_in("a@b.c", "x")).unwrap();
        let err = auth
            .sign_in_admin(&AdminCredential::new("admin123"))
            .unwrap_err();
        assert!(matches!(
            err,
            StorefrontError::SessionConflict { active: "customer" }
        ));

        auth.sign_out();
        auth.sign_in_admin(&AdminCredential::new("admin123")).unwrap();
        let err = auth.sign_in_customer(&sign_in("a@b.c", "x")).unwrap_err();
        assert!(matches!(
            err,
            StorefrontError::SessionConflict { active: "admin" }
        ));
    }

    #[test]
    fn test_sign_out_clears_cart() {
        let mut state = state_with_cart();
        state.session = Session::Admin;
        AuthService::new(&mut state).sign_out();
        assert_eq!(state.session, Session::Absent);
        assert!(state.cart.is_empty());
    }
}
