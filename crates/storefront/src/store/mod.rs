//! Durable key-value storage for the storefront snapshot.
//!
//! The storefront persists four JSON values under fixed keys (see [`keys`]).
//! Backends only move strings around; encoding lives in [`crate::state`].
//!
//! # Backends
//!
//! - [`MemoryStore`] - in-process map, used by tests and throwaway sessions
//! - [`FileStore`] - one JSON file per key, written with temp-file-then-rename

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use thiserror::Error;

/// Errors raised by a store backend or while encoding the snapshot.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Underlying I/O failed.
    #[error("I/O error on key '{key}': {source}")]
    Io {
        /// Key being accessed.
        key: String,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// A value could not be serialized.
    #[error("failed to encode '{key}': {source}")]
    Encode {
        /// Key being written.
        key: String,
        /// Underlying error.
        #[source]
        source: serde_json::Error,
    },

    /// A stored value could not be deserialized.
    #[error("failed to decode '{key}': {source}")]
    Decode {
        /// Key being read.
        key: String,
        /// Underlying error.
        #[source]
        source: serde_json::Error,
    },

    /// The key cannot be mapped onto the backend.
    #[error("invalid store key '{0}'")]
    InvalidKey(String),
}

/// Abstract durable store of string values under named keys.
pub trait KeyValueStore {
    /// Read the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backend cannot be written.
    fn set(&mut self, key: &str, value: String) -> Result<(), StoreError>;

    /// Remove the value stored under `key`. Removing a missing key is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backend cannot be written.
    fn clear(&mut self, key: &str) -> Result<(), StoreError>;

    /// Store several values as one write.
    ///
    /// Backends that can stage writes should override this so a failure
    /// part-way leaves the previous values in place.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if any value cannot be written.
    fn set_many(&mut self, entries: Vec<(String, String)>) -> Result<(), StoreError> {
        for (key, value) in entries {
            self.set(&key, value)?;
        }
        Ok(())
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), StoreError> {
        (**self).set(key, value)
    }

    fn clear(&mut self, key: &str) -> Result<(), StoreError> {
        (**self).clear(key)
    }

    fn set_many(&mut self, entries: Vec<(String, String)>) -> Result<(), StoreError> {
        (**self).set_many(entries)
    }
}

/// Default store key names.
pub mod keys {
    /// Key for the product catalog.
    pub const CATALOG: &str = "catalog";

    /// Key for the cart lines.
    pub const CART: &str = "cart";

    /// Key for the current session (`null` when signed out).
    pub const SESSION: &str = "session";

    /// Key for the contact submissions.
    pub const INBOX: &str = "inbox";
}

/// The concrete key names used for one storefront instance.
///
/// A prefix lets several storefronts share one backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreKeys {
    pub catalog: String,
    pub cart: String,
    pub session: String,
    pub inbox: String,
}

impl StoreKeys {
    /// Keys with `prefix` prepended to each default name.
    #[must_use]
    pub fn with_prefix(prefix: &str) -> Self {
        Self {
            catalog: format!("{prefix}{}", keys::CATALOG),
            cart: format!("{prefix}{}", keys::CART),
            session: format!("{prefix}{}", keys::SESSION),
            inbox: format!("{prefix}{}", keys::INBOX),
        }
    }

    /// All four keys.
    #[must_use]
    pub fn all(&self) -> [&str; 4] {
        [
            self.catalog.as_str(),
            self.cart.as_str(),
            self.session.as_str(),
            self.inbox.as_str(),
        ]
    }
}

impl Default for StoreKeys {
    fn default() -> Self {
        Self::with_prefix("")
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_default_keys() {
        let keys = StoreKeys::default();
        assert_eq!(keys.all(), ["catalog", "cart", "session", "inbox"]);
    }

    #[test]
    fn test_prefixed_keys() {
        let keys = StoreKeys::with_prefix("demo-");
        assert_eq!(keys.cart, "demo-cart");
        assert_eq!(keys.inbox, "demo-inbox");
    }

    #[test]
    fn test_boxed_store_delegates() {
        let mut store: Box<dyn KeyValueStore> = Box::new(MemoryStore::new());
        store.set("cart", "[]".to_string()).unwrap();
        assert_eq!(store.get("cart").unwrap().as_deref(), Some("[]"));
        store.clear("cart").unwrap();
        assert_eq!(store.get("cart").unwrap(), None);
    }
}
