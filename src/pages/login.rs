//! Login page: email + password against `POST /api/auth/login`.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::components::notice_banner::push_notice;
use crate::config::StorefrontConfig;
use crate::net::types::LoginRequest;
use crate::state::notice::{Notice, NoticeState};

pub const LOGIN_SUCCESS_MESSAGE: &str = "Login successful! Redirecting...";

/// Trim the email and require both fields.
pub fn validate_login_input(email: &str, password: &str) -> Result<LoginRequest, &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Email and password are required");
    }
    Ok(LoginRequest { email: email.to_owned(), password: password.to_owned() })
}

/// Log in and persist the session; storage is only touched on success.
#[cfg(feature = "csr")]
async fn submit_login(
    config: &StorefrontConfig,
    request: &LoginRequest,
) -> Result<crate::net::types::Profile, crate::util::auth::FlowError> {
    use crate::state::session::{SessionError, SessionStore};
    use crate::util::storage::LocalStorage;

    let success = crate::net::api::login(config, request).await?;
    let store = LocalStorage::open().map_err(SessionError::from)?;
    crate::util::auth::complete_login(&SessionStore::new(store), Ok(success))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let config = expect_context::<StorefrontConfig>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let register_page = config.register_page.clone();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let request = match validate_login_input(&email.get(), &password.get()) {
            Ok(request) => request,
            Err(message) => {
                push_notice(notices, Notice::error(message), config.notice_ttl);
                return;
            }
        };
        busy.set(true);

        #[cfg(feature = "csr")]
        {
            let config = config.clone();
            leptos::task::spawn_local(async move {
                match submit_login(&config, &request).await {
                    Ok(profile) => {
                        log::info!("signed in as {}", profile.display_name());
                        push_notice(notices, Notice::success(LOGIN_SUCCESS_MESSAGE), config.notice_ttl);
                        crate::util::browser::navigate_after(&config.guard.landing_page, config.login_redirect_delay);
                    }
                    Err(e) => {
                        log::warn!("login failed: {e}");
                        push_notice(notices, Notice::error(e.to_string()), config.notice_ttl);
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = request;
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Sign In"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        "Login"
                    </button>
                </form>
                <p class="auth-card__switch">
                    "New here? "
                    <a href=register_page rel="external">"Create an account"</a>
                </p>
            </div>
        </div>
    }
}
