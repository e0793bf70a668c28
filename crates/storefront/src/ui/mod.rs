//! Front-end collaborators and display data.
//!
//! The storefront never draws anything itself. After each action it tells a
//! [`Renderer`] which views went stale and hands user-facing messages to a
//! [`Notifier`]. Front-ends build what they show from the view types in
//! [`views`].

pub mod carousel;
pub mod notifier;
pub mod renderer;
pub mod views;

#[cfg(any(test, feature = "test-util"))]
pub mod testing;

pub use carousel::Carousel;
pub use notifier::{NOTIFICATION_TTL, Notifier, TracingNotifier};
pub use renderer::{NullRenderer, Renderer, View};
pub use views::{AdminProductView, CartItemView, CartView, MessageView, ProductCardView};
