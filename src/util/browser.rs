//! Thin wrappers over `window` location, navigation, and dialogs.
//!
//! Requires a browser environment; outside the `csr` build every call is a
//! no-op or a fail-closed default so native tests exercise the callers.

use std::time::Duration;

/// `window.location.pathname`, if there is a window.
pub fn current_path() -> Option<String> {
    #[cfg(feature = "csr")]
    {
        web_sys::window()?.location().pathname().ok()
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}

/// Full page navigation to `href` (relative to the current page).
pub fn navigate(href: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().set_href(href) {
                log::warn!("navigation to {href} failed: {e:?}");
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = href;
    }
}

/// Navigate to `href` after `delay`, leaving time for a notice to be read.
pub fn navigate_after(href: &str, delay: Duration) {
    #[cfg(feature = "csr")]
    {
        let href = href.to_owned();
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(delay).await;
            navigate(&href);
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (href, delay);
    }
}

/// Blocking `window.confirm`. Returns `false` when there is no window.
pub fn confirm(message: &str) -> bool {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = message;
        false
    }
}
