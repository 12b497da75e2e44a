//! Page header for signed-in pages: greeting, cart link, logout.

use leptos::prelude::*;

use crate::components::notice_banner::push_notice;
use crate::config::StorefrontConfig;
use crate::state::notice::{Notice, NoticeState};
use crate::state::session::SessionStore;
use crate::util::auth::{LOGOUT_CONFIRM_MESSAGE, LogoutOutcome, logout};
use crate::util::browser;
use crate::util::storage::LocalStorage;

#[component]
pub fn SiteHeader() -> impl IntoView {
    let config = expect_context::<StorefrontConfig>();
    let notices = expect_context::<RwSignal<NoticeState>>();

    let user_name = LocalStorage::open()
        .ok()
        .and_then(|store| SessionStore::new(store).user())
        .map(|profile| profile.display_name());

    let landing_page = config.guard.landing_page.clone();
    let cart_page = config.cart_page.clone();

    let on_logout = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        let confirmed = browser::confirm(LOGOUT_CONFIRM_MESSAGE);
        match logout(confirmed, LocalStorage::open) {
            Ok(LogoutOutcome::Cancelled) => {}
            Ok(LogoutOutcome::LoggedOut) => {
                push_notice(notices, Notice::success("Logged out successfully"), config.notice_ttl);
                browser::navigate_after(&config.guard.entry_page, config.logout_redirect_delay);
            }
            Err(e) => {
                log::warn!("logout failed: {e}");
                push_notice(notices, Notice::error(format!("Logout failed: {e}")), config.notice_ttl);
            }
        }
    };

    view! {
        <header class="site-header">
            <a class="site-header__brand" href=landing_page rel="external">"Storefront"</a>
            <span id="userName" class="site-header__user">
                {user_name.unwrap_or_default()}
            </span>
            <a class="site-header__cart" href=cart_page rel="external">"Cart"</a>
            <a class="site-header__logout" href="#" on:click=on_logout>
                "Logout"
            </a>
        </header>
    }
}
