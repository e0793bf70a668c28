//! Sweet Slac Core - Shared types library.
//!
//! This crate provides common types used across all Sweet Slac components:
//! - `storefront` - Catalog, cart, session and inbox state with persistence
//! - `cli` - Terminal front-end driving the storefront
//!
//! # Architecture
//!
//! The core crate contains only types and traits - no I/O, no storage access,
//! no rendering. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, emails, and statuses

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
