//! Unified error handling for storefront actions.
//!
//! Every action either succeeds or fails with a [`StorefrontError`] and leaves
//! the state untouched. Front-ends show [`StorefrontError::user_message`] to
//! the user; the `Display` text is meant for logs.

use sweet_slac_core::{EmailError, Severity};
use thiserror::Error;

use crate::store::StoreError;

/// A required field was missing or malformed.
///
/// The `Display` text of each variant is the notification shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Registration needs a name, an email and a password.
    #[error("Please fill out all fields.")]
    MissingRegistrationFields,

    /// Registration email is not shaped like `local@domain.tld`.
    #[error("Please enter a valid email.")]
    InvalidEmail(#[from] EmailError),

    /// Sign-in needs an email and a password.
    #[error("Please enter email and password.")]
    MissingSignInFields,

    /// A new product needs a name, an image and a price.
    #[error("Please fill all product fields.")]
    MissingProductFields,

    /// The contact form needs a name, an email and a message.
    #[error("Please fill out all fields.")]
    MissingContactFields,
}

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum StorefrontError {
    /// Input validation failed.
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// The admin password did not match.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Checkout was attempted with no lines in the cart.
    #[error("Cart is empty")]
    EmptyCart,

    /// A sign-in would switch directly between customer and admin.
    #[error("Already signed in as {active}")]
    SessionConflict {
        /// Role of the session that is still active.
        active: &'static str,
    },

    /// An admin-only action was attempted without the admin session.
    #[error("Admin session required")]
    AdminRequired,

    /// The durable store could not be read or written.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

impl StorefrontError {
    /// Message to show the user.
    ///
    /// Store failures are reported generically; their details only go to the
    /// log.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(err) => err.to_string(),
            Self::InvalidCredentials => "Incorrect password.".to_string(),
            Self::EmptyCart => "Your cart is empty.".to_string(),
            Self::SessionConflict { .. } => "Please sign out first.".to_string(),
            Self::AdminRequired => "Please log in as admin.".to_string(),
            Self::Store(_) => "Could not save your changes. Please try again.".to_string(),
        }
    }

    /// Severity used when notifying the user.
    #[must_use]
    pub const fn severity(&self) -> Severity {
        Severity::Error
    }
}

/// Result type alias for `StorefrontError`.
pub type Result<T> = std::result::Result<T, StorefrontError>;
