//! Shopping cart.
//!
//! A cart is an ordered list of lines, one per item. Lines hold the item ID
//! as a weak reference: deleting an item from the catalog does not touch the
//! cart, so every derived computation either prunes first or treats a
//! dangling line as worth nothing.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use sweet_slac_core::{ItemId, Price};

use crate::error::StorefrontError;
use crate::models::catalog::Catalog;

/// One item's presence in the cart.
///
/// `quantity` is at least 1 while the line exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub item_id: ItemId,
    pub quantity: u32,
}

/// Outcome of a quantity change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityChange {
    /// The line now holds this quantity.
    Updated(u32),
    /// The quantity reached zero or below and the line was dropped.
    Removed,
    /// No line exists for the item; nothing changed.
    NotInCart,
}

/// Confirmation of a successful checkout.
///
/// No order record is kept; the receipt is all that remains of the cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Receipt {
    /// Number of distinct lines checked out.
    pub line_count: usize,
    /// Total units checked out.
    pub item_count: u64,
    /// Amount charged.
    pub subtotal: Price,
}

/// The active shopping cart.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create a cart from stored lines.
    #[must_use]
    pub const fn new(lines: Vec<CartLine>) -> Self {
        Self { lines }
    }

    /// Lines in the order they were first added.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Quantity held for an item, if it is in the cart.
    #[must_use]
    pub fn quantity_of(&self, id: &ItemId) -> Option<u32> {
        self.line(id).map(|line| line.quantity)
    }

    /// Total units across all lines (the cart badge count).
    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity)).sum()
    }

    fn line(&self, id: &ItemId) -> Option<&CartLine> {
        self.lines.iter().find(|line| &line.item_id == id)
    }

    /// Add one unit of an item, creating the line if needed.
    ///
    /// Returns the new quantity.
    pub fn add(&mut self, id: &ItemId) -> u32 {
        if let Some(line) = self.lines.iter_mut().find(|line| &line.item_id == id) {
            line.quantity = line.quantity.saturating_add(1);
            return line.quantity;
        }
        self.lines.push(CartLine {
            item_id: id.clone(),
            quantity: 1,
        });
        1
    }

    /// Add `delta` to a line's quantity.
    ///
    /// A result of zero or below removes the line; it is never kept at zero.
    pub fn change_quantity(&mut self, id: &ItemId, delta: i64) -> QuantityChange {
        let Some(pos) = self.lines.iter().position(|line| &line.item_id == id) else {
            return QuantityChange::NotInCart;
        };

        let current = self.lines.get(pos).map_or(0, |line| i64::from(line.quantity));
        let next = current.saturating_add(delta);
        if next <= 0 {
            self.lines.remove(pos);
            return QuantityChange::Removed;
        }

        let quantity = u32::try_from(next).unwrap_or(u32::MAX);
        if let Some(line) = self.lines.get_mut(pos) {
            line.quantity = quantity;
        }
        QuantityChange::Updated(quantity)
    }

    /// Remove a line outright.
    ///
    /// Same path as decrementing by an unbounded amount.
    pub fn remove(&mut self, id: &ItemId) -> QuantityChange {
        self.change_quantity(id, i64::MIN)
    }

    /// Drop every line whose item is not in `valid_ids`, and any line that
    /// somehow holds a zero quantity.
    ///
    /// Returns the number of lines removed. Idempotent.
    pub fn prune(&mut self, valid_ids: &HashSet<&ItemId>) -> usize {
        let before = self.lines.len();
        self.lines
            .retain(|line| line.quantity > 0 && valid_ids.contains(&line.item_id));
        before - self.lines.len()
    }

    /// Prune against the current catalog.
    pub fn prune_against(&mut self, catalog: &Catalog) -> usize {
        self.prune(&catalog.ids())
    }

    /// Sum of `quantity * price` over lines whose item still exists.
    #[must_use]
    pub fn subtotal(&self, catalog: &Catalog) -> Price {
        self.lines
            .iter()
            .map(|line| {
                catalog
                    .get(&line.item_id)
                    .map_or(Price::ZERO, |item| item.price.times(line.quantity))
            })
            .sum()
    }

    /// Empty the cart and return what was bought.
    ///
    /// # Errors
    ///
    /// Returns `StorefrontError::EmptyCart` if there are no lines.
    pub fn checkout(&mut self, catalog: &Catalog) -> Result<Receipt, StorefrontError> {
        if self.lines.is_empty() {
            return Err(StorefrontError::EmptyCart);
        }
        let receipt = Receipt {
            line_count: self.lines.len(),
            item_count: self.item_count(),
            subtotal: self.subtotal(catalog),
        };
        self.clear();
        Ok(receipt)
    }

    /// Remove every line.
    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn id(s: &str) -> ItemId {
        ItemId::from(s)
    }

    #[test]
    fn test_add_twice_then_drop_below_zero() {
        let catalog = Catalog::seeded();
        let mut cart = Cart::default();

        assert_eq!(cart.add(&id("a1")), 1);
        assert_eq!(cart.add(&id("a1")), 2);
        assert_eq!(cart.subtotal(&catalog), Price::new(4998));

        assert_eq!(cart.change_quantity(&id("a1"), -5), QuantityChange::Removed);
        assert!(cart.is_empty());
        assert_eq!(cart.subtotal(&catalog), Price::ZERO);
    }

    #[test]
    fn test_decrement_to_exactly_zero_removes_line() {
        let mut cart = Cart::default();
        cart.add(&id("a2"));
        assert_eq!(cart.change_quantity(&id("a2"), -1), QuantityChange::Removed);
        assert_eq!(cart.quantity_of(&id("a2")), None);
    }

    #[test]
    fn test_increment() {
        let mut cart = Cart::default();
        cart.add(&id("a2"));
        assert_eq!(cart.change_quantity(&id("a2"), 3), QuantityChange::Updated(4));
        assert_eq!(cart.item_count(), 4);
    }

    #[test]
    fn test_change_quantity_of_missing_line() {
        let mut cart = Cart::default();
        assert_eq!(cart.change_quantity(&id("a1"), 1), QuantityChange::NotInCart);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_remove_is_unbounded_decrement() {
        let mut cart = Cart::default();
        for _ in 0..7 {
            cart.add(&id("a3"));
        }
        assert_eq!(cart.remove(&id("a3")), QuantityChange::Removed);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_subtotal_matches_lines_after_mixed_operations() {
        let catalog = Catalog::seeded();
        let mut cart = Cart::default();
        let ops: [(&str, i64); 8] = [
            ("a1", 1),
            ("a2", 1),
            ("a1", 1),
            ("a3", 1),
            ("a2", -1),
            ("a3", 4),
            ("a4", 1),
            ("a4", -1),
        ];
        for (item, delta) in ops {
            if cart.quantity_of(&id(item)).is_none() && delta > 0 {
                cart.add(&id(item));
            } else {
                cart.change_quantity(&id(item), delta);
            }
        }

        let expected: u64 = cart
            .lines()
            .iter()
            .map(|line| {
                u64::from(line.quantity) * catalog.get(&line.item_id).unwrap().price.amount()
            })
            .sum();
        assert_eq!(cart.subtotal(&catalog).amount(), expected);
        assert_eq!(cart.quantity_of(&id("a1")), Some(2));
        assert_eq!(cart.quantity_of(&id("a3")), Some(5));
        assert!(cart.lines().iter().all(|line| line.quantity >= 1));
    }

    #[test]
    fn test_dangling_line_counts_as_zero() {
        let catalog = Catalog::seeded();
        let mut cart = Cart::default();
        cart.add(&id("gone"));
        cart.add(&id("a3"));
        assert_eq!(cart.subtotal(&catalog), Price::new(1199));
    }

    #[test]
    fn test_prune_is_idempotent() {
        let mut catalog = Catalog::seeded();
        let mut cart = Cart::default();
        cart.add(&id("a1"));
        cart.add(&id("a2"));
        catalog.remove(&id("a1"));

        assert_eq!(cart.prune(&catalog.ids()), 1);
        let once = cart.clone();
        assert_eq!(cart.prune(&catalog.ids()), 0);
        assert_eq!(cart, once);
        assert_eq!(cart.quantity_of(&id("a2")), Some(1));
    }

    #[test]
    fn test_prune_drops_zero_quantity_lines() {
        let catalog = Catalog::seeded();
        let mut cart = Cart::new(vec![CartLine {
            item_id: id("a1"),
            quantity: 0,
        }]);
        assert_eq!(cart.prune_against(&catalog), 1);
    }

    #[test]
    fn test_checkout_empty_cart_fails() {
        let mut cart = Cart::default();
        assert!(matches!(
            cart.checkout(&Catalog::seeded()),
            Err(StorefrontError::EmptyCart)
        ));
    }

    #[test]
    fn test_checkout_clears_and_reports() {
        let mut cart = Cart::default();
        cart.add(&id("a1"));
        cart.add(&id("a1"));
        cart.add(&id("a3"));
        let receipt = cart.checkout(&Catalog::seeded()).unwrap();
        assert_eq!(receipt.line_count, 2);
        assert_eq!(receipt.item_count, 3);
        assert_eq!(receipt.subtotal, Price::new(2499 * 2 + 1199));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_line_wire_shape() {
        let mut cart = Cart::default();
        cart.add(&id("a1"));
        let json = serde_json::to_string(&cart).unwrap();
        assert_eq!(json, r#"[{"itemId":"a1","quantity":1}]"#);
    }
}
