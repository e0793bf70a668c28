//! Product catalog.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use sweet_slac_core::{ItemId, Price, SortOrder};

use crate::error::ValidationError;

/// A purchasable item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub price: Price,
    pub image_ref: String,
}

/// Admin form for a new product, as typed.
#[derive(Debug, Clone, Default)]
pub struct ProductForm {
    pub name: String,
    pub image_ref: String,
    pub price: String,
}

/// The list of purchasable items, most recently added first.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    items: Vec<Item>,
}

impl Catalog {
    /// Create a catalog from items in storage order.
    #[must_use]
    pub const fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    /// The four items a fresh storefront starts with.
    #[must_use]
    pub fn seeded() -> Self {
        let item = |id: &str, name: &str, price: u64, image_ref: &str| Item {
            id: ItemId::from(id),
            name: name.to_owned(),
            price: Price::new(price),
            image_ref: image_ref.to_owned(),
        };
        Self::new(vec![
            item(
                "a1",
                "Radiant Dew Serum",
                2499,
                "https://images.unsplash.com/photo-1627811015433-368c148f6c3c?w=600&auto=format&fit=crop&q=60",
            ),
            item(
                "a2",
                "Velvet Night Cream",
                3199,
                "https://images.unsplash.com/photo-1575410229391-19b4da01cc94?w=600&auto=format&fit=crop&q=60",
            ),
            item(
                "a3",
                "Gentle Glow Cleanser",
                1199,
                "https://images.unsplash.com/photo-1556228720-195a672e8a03?w=600&auto=format&fit=crop&q=60",
            ),
            item(
                "a4",
                "Platinum Eye Serum",
                1999,
                "https://images.unsplash.com/photo-1617804439343-1b9a84a7a0a4?w=600&auto=format&fit=crop&q=60",
            ),
        ])
    }

    /// Items in storage order.
    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Look up an item by ID.
    #[must_use]
    pub fn get(&self, id: &ItemId) -> Option<&Item> {
        self.items.iter().find(|item| &item.id == id)
    }

    #[must_use]
    pub fn contains(&self, id: &ItemId) -> bool {
        self.get(id).is_some()
    }

    /// IDs of every item, for pruning dangling cart lines.
    #[must_use]
    pub fn ids(&self) -> HashSet<&ItemId> {
        self.items.iter().map(|item| &item.id).collect()
    }

    /// Items in the requested order.
    ///
    /// Sorting is stable and never touches the stored order.
    #[must_use]
    pub fn list(&self, order: SortOrder) -> Vec<&Item> {
        let mut view: Vec<&Item> = self.items.iter().collect();
        match order {
            SortOrder::None => {}
            SortOrder::PriceAscending => view.sort_by_key(|item| item.price),
            SortOrder::PriceDescending => view.sort_by(|a, b| b.price.cmp(&a.price)),
        }
        view
    }

    /// Add a new item at the front of the catalog.
    ///
    /// The price is parsed leniently and never fails on its own; see
    /// [`Price::parse_lenient`].
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::MissingProductFields` if the name, image or
    /// price text is blank.
    pub fn add(&mut self, form: &ProductForm, id: ItemId) -> Result<Item, ValidationError> {
        let name = form.name.trim();
        let image_ref = form.image_ref.trim();
        let price_raw = form.price.trim();
        if name.is_empty() || image_ref.is_empty() || price_raw.is_empty() {
            return Err(ValidationError::MissingProductFields);
        }

        let item = Item {
            id,
            name: name.to_owned(),
            price: Price::parse_lenient(price_raw),
            image_ref: image_ref.to_owned(),
        };
        self.items.insert(0, item.clone());
        Ok(item)
    }

    /// Delete an item. Returns whether it existed.
    ///
    /// Cart lines that reference the item are left dangling; callers prune
    /// the cart afterwards.
    pub fn remove(&mut self, id: &ItemId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| &item.id != id);
        self.items.len() != before
    }

    /// Highest numeric suffix among generated item IDs, if any.
    #[must_use]
    pub fn max_generated_id(&self) -> Option<i64> {
        self.items
            .iter()
            .filter_map(|item| {
                item.id
                    .as_str()
                    .strip_prefix(ItemId::GENERATED_PREFIX)?
                    .parse::<i64>()
                    .ok()
            })
            .max()
    }
}
