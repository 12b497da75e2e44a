//! Product catalog: the signed-in landing page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Fetches `GET /api/products` once on mount and renders a card per product.
//! The add-to-cart action on each card appends to the persisted cart.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use leptos::prelude::*;

use crate::components::notice_banner::push_notice;
use crate::components::product_card::ProductCardView;
use crate::components::site_header::SiteHeader;
use crate::config::StorefrontConfig;
use crate::net::api::ApiError;
use crate::net::types::{Price, Product, ProductId};
use crate::state::cart::CartStore;
use crate::state::notice::{Notice, NoticeState};
use crate::util::storage::LocalStorage;

pub const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/150";
pub const EMPTY_MESSAGE: &str = "No products found";

/// Display model for one product.
#[derive(Clone, Debug, PartialEq)]
pub struct ProductCard {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
    pub price_label: String,
    pub image_src: String,
    pub detail_href: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum CatalogView {
    #[default]
    Loading,
    Cards(Vec<ProductCard>),
    Empty,
    /// Fetch failed; the message is shown as a notice and nothing is rendered.
    Failed(String),
}

/// Rupee label using the amount as the server wrote it.
pub fn format_price(price: &Price) -> String {
    format!("₹{}", price.text())
}

pub fn product_card(config: &StorefrontConfig, product: &Product) -> ProductCard {
    let image_src = product
        .image
        .as_deref()
        .map(str::trim)
        .filter(|src| !src.is_empty())
        .unwrap_or(PLACEHOLDER_IMAGE)
        .to_owned();
    ProductCard {
        id: product.id,
        name: product.name.clone(),
        price: product.price.value(),
        price_label: format_price(&product.price),
        image_src,
        detail_href: config.detail_href(product.id),
    }
}

/// Map a fetch result onto what the page shows.
pub fn catalog_view(config: &StorefrontConfig, result: Result<Vec<Product>, ApiError>) -> CatalogView {
    match result {
        Ok(products) if products.is_empty() => CatalogView::Empty,
        Ok(products) => CatalogView::Cards(products.iter().map(|p| product_card(config, p)).collect()),
        Err(e) => CatalogView::Failed(e.to_string()),
    }
}

/// Catalog page: header, product grid, and empty state.
#[component]
pub fn CatalogPage() -> impl IntoView {
    let config = expect_context::<StorefrontConfig>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let view_state = RwSignal::new(CatalogView::Loading);

    #[cfg(feature = "csr")]
    {
        let config = config.clone();
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_products(&config).await;
            if let Err(e) = &result {
                log::warn!("product fetch failed: {e}");
            }
            let next = catalog_view(&config, result);
            if let CatalogView::Failed(message) = &next {
                push_notice(notices, Notice::error(message.clone()), config.notice_ttl);
            }
            view_state.set(next);
        });
    }

    let ttl = config.notice_ttl;
    let on_add = Callback::new(move |product_id: ProductId| {
        let added = LocalStorage::open().and_then(|store| CartStore::new(store).add(product_id));
        match added {
            Ok(_) => push_notice(notices, Notice::success("Added to cart"), ttl),
            Err(e) => push_notice(notices, Notice::error(format!("Could not add to cart: {e}")), ttl),
        }
    });

    view! {
        <div class="catalog-page">
            <SiteHeader/>
            <div id="products" class="product-grid">
                {move || match view_state.get() {
                    CatalogView::Loading => view! { <p class="catalog-loading">"Loading products..."</p> }.into_any(),
                    CatalogView::Empty => view! { <p class="catalog-empty">{EMPTY_MESSAGE}</p> }.into_any(),
                    CatalogView::Failed(_) => ().into_any(),
                    CatalogView::Cards(cards) => cards
                        .into_iter()
                        .map(|card| view! { <ProductCardView card=card on_add=on_add/> })
                        .collect_view()
                        .into_any(),
                }}
            </div>
        </div>
    }
}
