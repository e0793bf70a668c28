//! The persisted application snapshot.
//!
//! All storefront state lives in one [`AppState`] value that is written to the
//! store as a whole after every change. Loading is forgiving: missing values
//! start from their defaults, and a value that no longer decodes is logged
//! and replaced by its default rather than blocking the storefront.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::models::{Cart, Catalog, Inbox, Session};
use crate::store::{KeyValueStore, StoreError, StoreKeys};

/// Catalog, cart, session and inbox as one unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    pub catalog: Catalog,
    pub cart: Cart,
    pub session: Session,
    pub inbox: Inbox,
}

impl Default for AppState {
    /// A fresh storefront: the seeded catalog and nothing else.
    fn default() -> Self {
        Self {
            catalog: Catalog::seeded(),
            cart: Cart::default(),
            session: Session::Absent,
            inbox: Inbox::default(),
        }
    }
}

impl AppState {
    /// Load the snapshot from a store.
    ///
    /// An empty or missing catalog is replaced by the seeded one.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the store itself cannot be read. Undecodable
    /// values are not errors.
    pub fn load<S: KeyValueStore + ?Sized>(store: &S, keys: &StoreKeys) -> Result<Self, StoreError> {
        let catalog = read_or_default::<Catalog, _>(store, &keys.catalog)?;
        let catalog = if catalog.is_empty() {
            tracing::debug!("no stored catalog, using seed");
            Catalog::seeded()
        } else {
            catalog
        };

        Ok(Self {
            catalog,
            cart: read_or_default(store, &keys.cart)?,
            session: read_or_default(store, &keys.session)?,
            inbox: read_or_default(store, &keys.inbox)?,
        })
    }

    /// Write the whole snapshot to a store in one `set_many` call.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if a value cannot be encoded or written.
    pub fn persist<S: KeyValueStore + ?Sized>(
        &self,
        store: &mut S,
        keys: &StoreKeys,
    ) -> Result<(), StoreError> {
        let entries = vec![
            encode(&keys.catalog, &self.catalog)?,
            encode(&keys.cart, &self.cart)?,
            encode(&keys.session, &self.session)?,
            encode(&keys.inbox, &self.inbox)?,
        ];
        store.set_many(entries)?;
        tracing::debug!(
            items = self.catalog.len(),
            cart_lines = self.cart.len(),
            session = self.session.role(),
            messages = self.inbox.len(),
            "snapshot persisted"
        );
        Ok(())
    }

    /// Drop cart lines that point at deleted items. Returns how many went.
    pub fn prune_cart(&mut self) -> usize {
        let removed = self.cart.prune_against(&self.catalog);
        if removed > 0 {
            tracing::debug!(removed, "pruned dangling cart lines");
        }
        removed
    }
}

fn encode<T: Serialize>(key: &str, value: &T) -> Result<(String, String), StoreError> {
    let json = serde_json::to_string(value).map_err(|source| StoreError::Encode {
        key: key.to_owned(),
        source,
    })?;
    Ok((key.to_owned(), json))
}

/// Read and decode one key, falling back to `T::default()` when the key is
/// missing or its value does not decode.
fn read_or_default<T, S>(store: &S, key: &str) -> Result<T, StoreError>
where
    T: DeserializeOwned + Default,
    S: KeyValueStore + ?Sized,
{
    let Some(raw) = store.get(key)? else {
        return Ok(T::default());
    };

    match serde_json::from_str(&raw) {
        Ok(value) => Ok(value),
        Err(source) => {
            let err = StoreError::Decode {
                key: key.to_owned(),
                source,
            };
            tracing::warn!(error = %err, "discarding unreadable stored value");
            Ok(T::default())
        }
    }
}
