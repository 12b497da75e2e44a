use super::*;
use crate::util::storage::MemoryStore;

#[test]
fn items_on_fresh_store_is_empty() {
    let cart = CartStore::new(MemoryStore::new());
    assert!(cart.items().is_empty());
    assert!(cart.lines().is_empty());
}

#[test]
fn add_is_append_only_and_keeps_duplicates_in_order() {
    let store = MemoryStore::new();
    let cart = CartStore::new(&store);

    assert_eq!(cart.add(3), Ok(1));
    assert_eq!(cart.add(7), Ok(2));
    assert_eq!(cart.add(3), Ok(3));

    let labels: Vec<String> = cart.lines().iter().map(CartLine::label).collect();
    assert_eq!(labels, ["Product ID: 3", "Product ID: 7", "Product ID: 3"]);
    assert_eq!(store.get(CART_KEY), Ok(Some("[3,7,3]".to_owned())));
}

#[test]
fn cart_persists_across_store_instances() {
    let store = MemoryStore::new();
    CartStore::new(&store).add(5).unwrap();
    assert_eq!(CartStore::new(&store).items(), vec![5]);
}

#[test]
fn lines_are_idempotent() {
    let cart = CartStore::new(MemoryStore::with_entries([("cart", "[1,2]")]));
    assert_eq!(cart.lines(), cart.lines());
    assert_eq!(
        cart.lines(),
        vec![
            CartLine { position: 0, product_id: 1 },
            CartLine { position: 1, product_id: 2 },
        ]
    );
}

#[test]
fn malformed_cart_reads_as_empty_and_is_replaced_on_add() {
    let store = MemoryStore::with_entries([("cart", "{\"oops\":true}")]);
    let cart = CartStore::new(&store);
    assert!(cart.items().is_empty());
    assert_eq!(cart.add(9), Ok(1));
    assert_eq!(cart.items(), vec![9]);
}

#[test]
fn add_reports_write_failure_without_changing_cart() {
    let store = MemoryStore::with_entries([("cart", "[1]")]);
    store.fail_writes_to(CART_KEY);
    let cart = CartStore::new(&store);
    assert!(cart.add(2).is_err());
    assert_eq!(cart.items(), vec![1]);
}

#[test]
fn clear_removes_cart_key() {
    let store = MemoryStore::with_entries([("cart", "[1]")]);
    CartStore::new(&store).clear().unwrap();
    assert!(!store.contains(CART_KEY));
}
