//! Display data for front-ends.
//!
//! Prices are preformatted (`₹2,499`) so front-ends never format money.

use sweet_slac_core::Price;

use crate::models::{Cart, Catalog, ContactSubmission, Item};

/// A product as shown in the customer grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCardView {
    pub id: String,
    pub name: String,
    pub price: String,
    pub image_ref: String,
}

impl From<&Item> for ProductCardView {
    fn from(item: &Item) -> Self {
        Self {
            id: item.id.to_string(),
            name: item.name.clone(),
            price: item.price.display(),
            image_ref: item.image_ref.clone(),
        }
    }
}

/// A product row in the admin list.
pub type AdminProductView = ProductCardView;

/// One cart line as shown in the cart panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartItemView {
    pub id: String,
    pub name: String,
    pub image_ref: String,
    pub quantity: u32,
    pub price: String,
    pub line_price: String,
}

/// Cart panel display data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub subtotal: String,
    /// Badge count; the badge is hidden at zero.
    pub item_count: u64,
}

impl CartView {
    /// Create an empty cart.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            subtotal: Price::ZERO.display(),
            item_count: 0,
        }
    }

    /// Build the cart panel. Lines whose item is gone are skipped.
    #[must_use]
    pub fn build(cart: &Cart, catalog: &Catalog) -> Self {
        let items = cart
            .lines()
            .iter()
            .filter_map(|line| {
                let item = catalog.get(&line.item_id)?;
                Some(CartItemView {
                    id: item.id.to_string(),
                    name: item.name.clone(),
                    image_ref: item.image_ref.clone(),
                    quantity: line.quantity,
                    price: item.price.display(),
                    line_price: item.price.times(line.quantity).display(),
                })
            })
            .collect();

        Self {
            items,
            subtotal: cart.subtotal(catalog).display(),
            item_count: cart.item_count(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub const fn badge_visible(&self) -> bool {
        self.item_count > 0
    }
}

/// A contact submission as shown in the admin inbox.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageView {
    pub from: String,
    pub email: String,
    pub message: String,
    pub sent_on: String,
}

impl From<&ContactSubmission> for MessageView {
    fn from(submission: &ContactSubmission) -> Self {
        Self {
            from: submission.name.clone(),
            email: submission.email.clone(),
            message: submission.message.clone(),
            sent_on: submission.display_date(),
        }
    }
}
