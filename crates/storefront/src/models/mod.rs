//! Domain models for the storefront.
//!
//! Each model owns its own invariants; cross-model rules (a sign-out clears
//! the cart, a deleted item is pruned from the cart) live in
//! [`crate::services`] and [`crate::app`].

pub mod cart;
pub mod catalog;
pub mod contact;
pub mod session;

pub use cart::{Cart, CartLine, QuantityChange, Receipt};
pub use catalog::{Catalog, Item, ProductForm};
pub use contact::{ContactForm, ContactSubmission, Inbox};
pub use session::{Customer, Session};
