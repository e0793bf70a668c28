//! Business logic services for the storefront.
//!
//! # Services
//!
//! - `auth` - Session transitions (register, sign-in, admin login, sign-out)

pub mod auth;

pub use auth::{AuthService, RegistrationForm, SignInForm};
