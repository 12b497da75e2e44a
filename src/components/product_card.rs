//! Catalog card for a single product.

use leptos::prelude::*;

use crate::net::types::ProductId;
use crate::pages::catalog::ProductCard;
use crate::util::browser;

#[component]
pub fn ProductCardView(card: ProductCard, on_add: Callback<ProductId>) -> impl IntoView {
    let id = card.id;
    let detail_href = card.detail_href;

    view! {
        <div class="product-card">
            <img src=card.image_src alt=card.name.clone()/>
            <h3>{card.name}</h3>
            <p class="product-card__price">{card.price_label}</p>
            <button class="product-card__view" on:click=move |_| browser::navigate(&detail_href)>
                "View"
            </button>
            <button class="product-card__add" on:click=move |_| on_add.run(id)>
                "Add to cart"
            </button>
        </div>
    }
}
