use super::*;
use crate::util::storage::MemoryStore;

#[test]
fn cart_page_lines_follow_insertion_order() {
    let store = MemoryStore::new();
    let cart = CartStore::new(&store);
    for id in [3, 7, 3] {
        cart.add(id).unwrap();
    }
    let labels: Vec<String> = cart_page_lines(&store).iter().map(CartLine::label).collect();
    assert_eq!(labels, ["Product ID: 3", "Product ID: 7", "Product ID: 3"]);
}

#[test]
fn cart_page_lines_empty_cart_renders_no_lines() {
    assert!(cart_page_lines(MemoryStore::new()).is_empty());
}

#[test]
fn repeated_products_get_distinct_row_keys() {
    let store = MemoryStore::with_entries([("cart", "[3,7,3]")]);
    let keys: Vec<usize> = cart_page_lines(&store).iter().map(|line| line.position).collect();
    assert_eq!(keys, [0, 1, 2]);
}
