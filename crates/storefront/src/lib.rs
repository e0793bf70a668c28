//! Sweet Slac Storefront library.
//!
//! Holds the whole storefront state machine: the product catalog, the
//! shopping cart, the signed-in session and the contact inbox, persisted as
//! one snapshot to a key-value store after every change. Front-ends drive it
//! through [`app::Storefront`] and receive notifications and re-render
//! requests through the traits in [`ui`].

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod app;
pub mod clock;
pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
pub mod store;
pub mod ui;

pub use app::Storefront;
pub use config::{ConfigError, StorefrontConfig};
pub use error::{Result, StorefrontError, ValidationError};
pub use state::AppState;
