//! Cart page: one line per stored product id, in the order they were added.

#[cfg(test)]
#[path = "cart_test.rs"]
mod cart_test;

use leptos::prelude::*;

use crate::components::site_header::SiteHeader;
use crate::state::cart::{CartLine, CartStore};
use crate::util::storage::{KeyValueStore, LocalStorage};

/// Lines to render for whatever is in `store`.
pub fn cart_page_lines<S: KeyValueStore>(store: S) -> Vec<CartLine> {
    CartStore::new(store).lines()
}

#[component]
pub fn CartPage() -> impl IntoView {
    let lines = match LocalStorage::open() {
        Ok(store) => cart_page_lines(store),
        Err(e) => {
            log::warn!("cart unavailable: {e}");
            Vec::new()
        }
    };

    view! {
        <div class="cart-page">
            <SiteHeader/>
            <div id="cartItems" class="cart-items">
                <For
                    each=move || lines.clone()
                    key=|line| line.position
                    children=|line| view! { <p class="cart-item">{line.label()}</p> }
                />
            </div>
        </div>
    }
}
