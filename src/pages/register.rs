//! Registration page: the public entry point for anonymous visitors.
//!
//! SYSTEM CONTEXT
//! ==============
//! Registration never signs the user in. On success the page sends them to
//! the login page after a short delay; storage is left untouched.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;

use crate::components::notice_banner::push_notice;
use crate::config::StorefrontConfig;
use crate::net::types::RegisterRequest;
use crate::state::notice::{Notice, NoticeState};
use crate::util::validate::{validate_email, validate_full_name, validate_mobile, validate_password};

pub const REGISTER_SUCCESS_MESSAGE: &str = "Registration successful! Redirecting to login...";

/// Trim and validate the registration form.
///
/// The password is checked as typed; the other fields are trimmed first.
pub fn validate_register_input(
    full_name: &str,
    email: &str,
    mobile: &str,
    password: &str,
) -> Result<RegisterRequest, &'static str> {
    let full_name = full_name.trim();
    let email = email.trim();
    let mobile = mobile.trim();
    validate_full_name(full_name)?;
    validate_email(email)?;
    validate_mobile(mobile)?;
    validate_password(password)?;
    Ok(RegisterRequest {
        full_name: full_name.to_owned(),
        email: email.to_owned(),
        mobile: mobile.to_owned(),
        password: password.to_owned(),
    })
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let config = expect_context::<StorefrontConfig>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let full_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let mobile = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let login_page = config.login_page.clone();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let request = match validate_register_input(&full_name.get(), &email.get(), &mobile.get(), &password.get()) {
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
                match crate::net::api::register(&config, &request).await {
                    Ok(_) => {
                        log::info!("registered {}", request.email);
                        push_notice(notices, Notice::success(REGISTER_SUCCESS_MESSAGE), config.notice_ttl);
                        crate::util::browser::navigate_after(&config.login_page, config.register_redirect_delay);
                    }
                    Err(e) => {
                        log::warn!("registration failed: {e}");
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
                <h1>"Create Account"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="text"
                        placeholder="Full name"
                        prop:value=move || full_name.get()
                        on:input=move |ev| full_name.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="tel"
                        placeholder="Mobile number"
                        prop:value=move || mobile.get()
                        on:input=move |ev| mobile.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        "Register"
                    </button>
                </form>
                <p class="auth-card__switch">
                    "Already have an account? "
                    <a href=login_page rel="external">"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
