//! Integration tests for Sweet Slac.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p sweet-slac-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart` - Cart arithmetic, quantity floor, checkout
//! - `catalog` - Adding, sorting and deleting products
//! - `session_router` - Session transitions and page routing
//! - `persistence` - Snapshot storage across restarts
//!
//! This library holds the shared fixtures.

#![allow(clippy::unwrap_used)]

use chrono::{TimeZone, Utc};
use secrecy::SecretString;
use sweet_slac_core::AdminCredential;
use sweet_slac_storefront::Storefront;
use sweet_slac_storefront::clock::ManualClock;
use sweet_slac_storefront::models::ProductForm;
use sweet_slac_storefront::services::{RegistrationForm, SignInForm};
use sweet_slac_storefront::store::{KeyValueStore, MemoryStore, StoreKeys};
use sweet_slac_storefront::ui::testing::{RecordingNotifier, RecordingRenderer};

/// Storefront wired to recording doubles and a frozen clock.
pub type TestStorefront<S = MemoryStore> =
    Storefront<S, RecordingNotifier, RecordingRenderer, ManualClock>;

/// Start time of every test clock.
pub const START_MILLIS: i64 = 1_760_000_000_000;

/// A clock frozen at [`START_MILLIS`].
///
/// # Panics
///
/// Never; the start time is a valid timestamp.
#[must_use]
#[allow(clippy::unwrap_used)]
pub fn frozen_clock() -> ManualClock {
    ManualClock::new(Utc.timestamp_millis_opt(START_MILLIS).unwrap())
}

/// Open a storefront on an arbitrary store with default keys.
///
/// # Panics
///
/// Panics if the store cannot be read or written.
#[must_use]
#[allow(clippy::unwrap_used)]
pub fn storefront_on<S: KeyValueStore>(store: S) -> TestStorefront<S> {
    Storefront::open_with_clock(
        store,
        StoreKeys::default(),
        RecordingNotifier::new(),
        RecordingRenderer::new(),
        frozen_clock(),
    )
    .unwrap()
}

/// A fresh storefront on an empty in-memory store.
#[must_use]
pub fn storefront() -> TestStorefront {
    storefront_on(MemoryStore::new())
}

#[must_use]
pub fn sign_in_form(email: &str, password: &str) -> SignInForm {
    SignInForm {
        email: email.to_string(),
        password: SecretString::from(password.to_string()),
    }
}

#[must_use]
pub fn registration_form(name: &str, email: &str, password: &str) -> RegistrationForm {
    RegistrationForm {
        name: name.to_string(),
        email: email.to_string(),
        password: SecretString::from(password.to_string()),
    }
}

#[must_use]
pub fn product_form(name: &str, image_ref: &str, price: &str) -> ProductForm {
    ProductForm {
        name: name.to_string(),
        image_ref: image_ref.to_string(),
        price: price.to_string(),
    }
}

#[must_use]
pub fn admin_password() -> AdminCredential {
    AdminCredential::new("admin123")
}

/// A fresh storefront with a customer signed in.
///
/// # Panics
///
/// Panics if sign-in fails.
#[must_use]
#[allow(clippy::unwrap_used)]
pub fn customer_storefront() -> TestStorefront {
    let mut app = storefront();
    app.sign_in(&sign_in_form("asha@example.com", "pw")).unwrap();
    app
}

/// A fresh storefront with the admin signed in.
///
/// # Panics
///
/// Panics if admin login fails.
#[must_use]
pub fn admin_storefront() -> TestStorefront {
    let mut app = storefront();
    app.admin_login(&admin_password()).unwrap();
    app
}
