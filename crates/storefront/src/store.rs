//! The cart store: in-memory cart state with a write-through persistence
//! hook.

use std::sync::{Mutex, MutexGuard, PoisonError};

use blueshop_core::{Cart, Product, ProductId};

use crate::storage::CartStorage;

/// Shared cart state with write-through persistence.
///
/// Every mutation serializes the full cart to the storage file before
/// returning the updated snapshot. A persistence failure is logged and does
/// not fail the request; the in-memory cart stays authoritative for the
/// session.
pub struct CartStore {
    storage: CartStorage,
    cart: Mutex<Cart>,
}

impl CartStore {
    /// Open the store, loading any persisted cart.
    #[must_use]
    pub fn open(storage: CartStorage) -> Self {
        let cart = storage.load();
        Self {
            storage,
            cart: Mutex::new(cart),
        }
    }

    /// A snapshot of the current cart.
    #[must_use]
    pub fn snapshot(&self) -> Cart {
        self.lock().clone()
    }

    /// Add a product to the cart, merging quantities, and persist.
    pub fn add(&self, product: &Product, quantity: u32) -> Cart {
        self.mutate(|cart| cart.add(product, quantity))
    }

    /// Replace a line's quantity (clamped to the minimum) and persist.
    /// No-op when no line matches.
    pub fn set_quantity(&self, id: &ProductId, quantity: u32) -> Cart {
        self.mutate(|cart| cart.set_quantity(id, quantity))
    }

    /// Empty the cart and persist; used after a successful checkout.
    pub fn clear(&self) -> Cart {
        self.mutate(Cart::clear)
    }

    fn mutate(&self, op: impl FnOnce(&mut Cart)) -> Cart {
        let mut cart = self.lock();
        op(&mut cart);

        if let Err(e) = self.storage.save(&cart) {
            tracing::error!("Failed to persist cart: {e}");
        }

        cart.clone()
    }

    // The lock is held only for synchronous mutation + serialization, never
    // across an await.
    fn lock(&self) -> MutexGuard<'_, Cart> {
        self.cart.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn temp_store(name: &str) -> CartStore {
        let path = std::env::temp_dir().join(format!(
            "blueshop-store-{name}-{}.json",
            std::process::id()
        ));
        let _ = std::fs::remove_file(&path);
        CartStore::open(CartStorage::new(path))
    }

    fn product(id: &str, price: i64) -> Product {
        Product {
            id: ProductId::new(id),
            title: format!("Product {id}"),
            category: "Test".to_owned(),
            price: Decimal::from(price),
            image: None,
        }
    }

    #[test]
    fn test_add_persists_immediately() {
        let store = temp_store("add");
        store.add(&product("a", 10), 2);

        // A fresh store over the same file sees the mutation.
        let reopened = CartStore::open(CartStorage::new(
            store.storage.path().to_path_buf(),
        ));
        assert_eq!(reopened.snapshot().item_count(), 2);

        let _ = std::fs::remove_file(store.storage.path());
    }

    #[test]
    fn test_repeated_adds_merge_to_one_line() {
        let store = temp_store("merge");
        let p = product("a", 10);
        store.add(&p, 2);
        let cart = store.add(&p, 3);

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.item_count(), 5);

        let _ = std::fs::remove_file(store.storage.path());
    }

    #[test]
    fn test_set_quantity_clamps_to_minimum() {
        let store = temp_store("clamp");
        store.add(&product("a", 10), 4);

        let cart = store.set_quantity(&ProductId::new("a"), 0);
        assert_eq!(cart.lines().first().unwrap().quantity, 1);

        let _ = std::fs::remove_file(store.storage.path());
    }

    #[test]
    fn test_clear_persists_empty_cart() {
        let store = temp_store("clear");
        store.add(&product("a", 10), 4);

        let cart = store.clear();
        assert!(cart.is_empty());

        let reopened = CartStore::open(CartStorage::new(
            store.storage.path().to_path_buf(),
        ));
        assert!(reopened.snapshot().is_empty());

        let _ = std::fs::remove_file(store.storage.path());
    }
}
