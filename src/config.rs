//! Storefront configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! A browser bundle has no process environment, so the only build-time knob
//! is `STOREFRONT_API_BASE`, captured by `option_env!` when the WASM is
//! compiled. Everything else (page names, redirect delays) uses the defaults
//! below. The config is built once in `start()` and shared through Leptos
//! context.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

use crate::guard::GuardConfig;
use crate::net::types::ProductId;

/// API origin used when `STOREFRONT_API_BASE` is not set at build time.
pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:5000";

#[derive(Clone, Debug, PartialEq)]
pub struct StorefrontConfig {
    /// Origin of the REST API, without a trailing slash.
    pub api_base: String,
    /// Public/landing/entry page names for the auth guard.
    pub guard: GuardConfig,
    /// Where a successful registration sends the user.
    pub login_page: String,
    pub register_page: String,
    pub cart_page: String,
    /// Product detail page; the product id is passed as `?id=`.
    pub detail_page: String,
    pub login_redirect_delay: Duration,
    pub register_redirect_delay: Duration,
    pub logout_redirect_delay: Duration,
    /// How long a transient notice stays visible.
    pub notice_ttl: Duration,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_owned(),
            guard: GuardConfig::default(),
            login_page: "login.html".to_owned(),
            register_page: "register.html".to_owned(),
            cart_page: "cart.html".to_owned(),
            detail_page: "product_details.html".to_owned(),
            login_redirect_delay: Duration::from_millis(1000),
            register_redirect_delay: Duration::from_millis(2000),
            logout_redirect_delay: Duration::from_millis(1000),
            notice_ttl: Duration::from_millis(3000),
        }
    }
}

impl StorefrontConfig {
    /// Build the config from values baked in at compile time.
    pub fn from_build_env() -> Self {
        let config = Self::with_api_base(option_env!("STOREFRONT_API_BASE"));
        log::debug!("storefront config: api_base={}", config.api_base);
        config
    }

    /// Defaults with the API origin overridden when `api_base` is non-blank.
    pub fn with_api_base(api_base: Option<&str>) -> Self {
        let mut config = Self::default();
        if let Some(base) = api_base.map(str::trim).filter(|b| !b.is_empty()) {
            base.trim_end_matches('/').clone_into(&mut config.api_base);
        }
        config
    }

    /// Absolute URL for an API `path` such as `/api/products`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_base.trim_end_matches('/'), path.trim_start_matches('/'))
    }

    /// Navigation target for a product's detail page.
    pub fn detail_href(&self, id: ProductId) -> String {
        format!("{}?id={id}", self.detail_page)
    }
}
