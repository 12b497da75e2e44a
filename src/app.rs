//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! The router only supplies the current location. Pages are picked by the
//! final path segment, so the bundle works when served from a subdirectory
//! (`/shop/cart.html`) as well as from the root. Every location change runs
//! the auth guard before a page is rendered, which covers in-app navigation
//! that never reloads and so never reaches `start()`.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{components::Router, hooks::use_location};

use crate::components::notice_banner::NoticeBanner;
use crate::config::StorefrontConfig;
use crate::guard::{AuthGuard, Page};
use crate::pages::{cart::CartPage, catalog::CatalogPage, login::LoginPage, register::RegisterPage};
use crate::state::notice::NoticeState;

/// Page components the app can render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StorefrontPage {
    Catalog,
    Cart,
    Login,
    Register,
}

/// Which page serves `page`, or `None` for an unknown file name.
pub fn resolve_page(config: &StorefrontConfig, page: &Page) -> Option<StorefrontPage> {
    let name = page.name();
    if name == config.guard.landing_page {
        Some(StorefrontPage::Catalog)
    } else if name == config.cart_page {
        Some(StorefrontPage::Cart)
    } else if name == config.login_page {
        Some(StorefrontPage::Login)
    } else if name == config.register_page {
        Some(StorefrontPage::Register)
    } else {
        None
    }
}

/// Root application component.
///
/// Provides the config and notice contexts and renders the page for the
/// current location.
#[component]
pub fn App(config: StorefrontConfig) -> impl IntoView {
    provide_meta_context();

    let notices = RwSignal::new(NoticeState::default());
    provide_context(config);
    provide_context(notices);

    view! {
        <Title text="Storefront"/>
        <NoticeBanner/>

        <Router>
            <PageSwitch/>
        </Router>
    }
}

/// Guard, then render, the page named by the current location.
#[component]
fn PageSwitch() -> impl IntoView {
    let config = expect_context::<StorefrontConfig>();
    let guard = AuthGuard::new(config.guard.clone());
    let location = use_location();

    move || {
        let page = Page::from_path(&location.pathname.get());
        if !guard.enforce_page(&page) {
            return ().into_any();
        }
        match resolve_page(&config, &page) {
            Some(StorefrontPage::Catalog) => view! { <CatalogPage/> }.into_any(),
            Some(StorefrontPage::Cart) => view! { <CartPage/> }.into_any(),
            Some(StorefrontPage::Login) => view! { <LoginPage/> }.into_any(),
            Some(StorefrontPage::Register) => view! { <RegisterPage/> }.into_any(),
            None => {
                log::debug!("no page for {}", page.name());
                view! { <p class="not-found">"Page not found."</p> }.into_any()
            }
        }
    }
}
