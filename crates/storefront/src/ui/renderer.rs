//! Re-render hooks.

use std::fmt;

/// A region of the UI that can go stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum View {
    /// Which page is visible, plus header chrome.
    Page,
    /// Customer product grid.
    Products,
    /// Cart panel, badge and subtotal.
    Cart,
    /// Admin product list.
    AdminProducts,
    /// Admin inbox.
    AdminMessages,
}

impl View {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Page => "page",
            Self::Products => "products",
            Self::Cart => "cart",
            Self::AdminProducts => "admin-products",
            Self::AdminMessages => "admin-messages",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Receives refresh requests after state changes.
///
/// `refresh` must be idempotent and safe to call for a view that is not on
/// screen.
pub trait Renderer {
    fn refresh(&mut self, view: View);

    /// Draw attention to the cart badge after an add.
    fn pulse_cart_badge(&mut self) {}

    /// Signal a refused checkout on the cart badge.
    fn shake_cart_badge(&mut self) {}
}

impl<R: Renderer + ?Sized> Renderer for Box<R> {
    fn refresh(&mut self, view: View) {
        (**self).refresh(view);
    }

    fn pulse_cart_badge(&mut self) {
        (**self).pulse_cart_badge();
    }

    fn shake_cart_badge(&mut self) {
        (**self).shake_cart_badge();
    }
}

/// Ignores every request.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn refresh(&mut self, _view: View) {}
}
