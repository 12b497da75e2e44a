//! Shopping cart persisted in browser storage.
//!
//! The cart is an ordered list of product ids; repeating an id means a higher
//! quantity. It survives page loads and is only ever emptied by logout.

#[cfg(test)]
#[path = "cart_test.rs"]
mod cart_test;

use crate::net::types::ProductId;
use crate::util::storage::{KeyValueStore, StorageError, load_json, save_json};

pub const CART_KEY: &str = "cart";

/// One rendered cart row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CartLine {
    /// Zero-based insertion position; unique even for repeated ids.
    pub position: usize,
    pub product_id: ProductId,
}

impl CartLine {
    pub fn label(&self) -> String {
        format!("Product ID: {}", self.product_id)
    }
}

#[derive(Clone, Debug)]
pub struct CartStore<S> {
    store: S,
}

impl<S: KeyValueStore> CartStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Current cart contents in insertion order. Missing or unreadable data
    /// is an empty cart.
    pub fn items(&self) -> Vec<ProductId> {
        load_json(&self.store, CART_KEY).unwrap_or_default()
    }

    /// Append `product_id` and persist the whole cart.
    ///
    /// Returns the new number of entries.
    ///
    /// # Errors
    ///
    /// Returns an error if the updated cart cannot be written.
    pub fn add(&self, product_id: ProductId) -> Result<usize, StorageError> {
        let mut items = self.items();
        items.push(product_id);
        save_json(&self.store, CART_KEY, &items)?;
        log::debug!("cart add: product_id={product_id} count={}", items.len());
        Ok(items.len())
    }

    pub fn lines(&self) -> Vec<CartLine> {
        cart_lines(&self.items())
    }

    /// Drop the cart entirely.
    ///
    /// # Errors
    ///
    /// Returns an error if storage cannot be accessed.
    pub fn clear(&self) -> Result<(), StorageError> {
        self.store.remove(CART_KEY)
    }
}

/// Build one line per entry, preserving order and duplicates.
pub fn cart_lines(items: &[ProductId]) -> Vec<CartLine> {
    items
        .iter()
        .enumerate()
        .map(|(position, &product_id)| CartLine { position, product_id })
        .collect()
}
