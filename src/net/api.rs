//! REST API helpers for the storefront backend.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds: stubs returning `ApiError::Transport`, since there is no
//! browser fetch to call.
//!
//! ERROR HANDLING
//! ==============
//! A request only succeeds when the transport succeeds, the status is 2xx,
//! and the body carries `success: true`. Everything else becomes an
//! `ApiError` whose `Display` is fit to show the user; the server's own
//! `message` is preferred when it sent one.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(any(test, feature = "csr"))]
use serde::de::DeserializeOwned;

use super::types::{LoginRequest, Product, Profile, RegisterRequest};
#[cfg(any(test, feature = "csr"))]
use super::types::{LoginResponse, ProductsResponse, RegisterResponse};
use crate::config::StorefrontConfig;

pub const PRODUCTS_PATH: &str = "/api/products";
pub const LOGIN_PATH: &str = "/api/auth/login";
pub const REGISTER_PATH: &str = "/api/auth/register";

#[cfg(not(feature = "csr"))]
const NOT_IN_BROWSER: &str = "not available outside the browser";

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (offline, CORS, DNS, ...).
    #[error("network error: {0}")]
    Transport(String),
    /// A response arrived but its body was not the expected JSON.
    #[error("unexpected response (HTTP {status}): {detail}")]
    Decode { status: u16, detail: String },
    /// The server answered with a negative success flag or an error status.
    #[error("{0}")]
    Rejected(String),
    /// Login reported success without a token and profile.
    #[error("login response did not include a session")]
    MissingSession,
}

/// Token and profile from a successful login.
#[derive(Clone, Debug, PartialEq)]
pub struct LoginSuccess {
    pub token: String,
    pub user: Profile,
}

#[cfg(any(test, feature = "csr"))]
/// Parse a response body, reporting the HTTP status when it is not JSON.
fn decode_body<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode { status, detail: e.to_string() })
}

#[cfg(any(test, feature = "csr"))]
/// Require a 2xx status and an explicit `success: true`.
fn check_success(ok: bool, success: bool, message: Option<String>, fallback: &str) -> Result<(), ApiError> {
    if ok && success {
        return Ok(());
    }
    let message = message
        .map(|m| m.trim().to_owned())
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| fallback.to_owned());
    Err(ApiError::Rejected(message))
}

#[cfg(any(test, feature = "csr"))]
pub(crate) fn classify_products(ok: bool, body: ProductsResponse) -> Result<Vec<Product>, ApiError> {
    check_success(ok, body.success, body.message, "Failed to load products")?;
    Ok(body.products)
}

#[cfg(any(test, feature = "csr"))]
pub(crate) fn classify_login(ok: bool, body: LoginResponse) -> Result<LoginSuccess, ApiError> {
    check_success(ok, body.success, body.message, "Login failed")?;
    match (body.token.filter(|t| !t.is_empty()), body.user) {
        (Some(token), Some(user)) => Ok(LoginSuccess { token, user }),
        _ => Err(ApiError::MissingSession),
    }
}

#[cfg(any(test, feature = "csr"))]
/// Returns the server's confirmation message, if any.
pub(crate) fn classify_register(ok: bool, body: RegisterResponse) -> Result<Option<String>, ApiError> {
    check_success(ok, body.success, body.message.clone(), "Registration failed")?;
    Ok(body.message)
}

#[cfg(feature = "csr")]
async fn get_json<T: DeserializeOwned>(url: &str) -> Result<(bool, T), ApiError> {
    let resp = gloo_net::http::Request::get(url)
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    read_json(resp).await
}

#[cfg(feature = "csr")]
async fn post_json<B: serde::Serialize, T: DeserializeOwned>(url: &str, payload: &B) -> Result<(bool, T), ApiError> {
    let resp = gloo_net::http::Request::post(url)
        .json(payload)
        .map_err(|e| ApiError::Transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    read_json(resp).await
}

#[cfg(feature = "csr")]
async fn read_json<T: DeserializeOwned>(resp: gloo_net::http::Response) -> Result<(bool, T), ApiError> {
    let ok = resp.ok();
    let status = resp.status();
    let text = resp.text().await.map_err(|e| ApiError::Transport(e.to_string()))?;
    log::debug!("api response: url={} status={status}", resp.url());
    Ok((ok, decode_body(status, &text)?))
}

/// Fetch the product list from `GET /api/products`.
///
/// # Errors
///
/// Returns an error on transport failure, a non-JSON body, or a negative
/// success flag.
pub async fn fetch_products(config: &StorefrontConfig) -> Result<Vec<Product>, ApiError> {
    #[cfg(feature = "csr")]
    {
        let (ok, body) = get_json::<ProductsResponse>(&config.endpoint(PRODUCTS_PATH)).await?;
        classify_products(ok, body)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = config;
        Err(ApiError::Transport(NOT_IN_BROWSER.to_owned()))
    }
}

/// Submit credentials to `POST /api/auth/login`.
///
/// # Errors
///
/// Returns an error on transport failure, a rejected login, or a success
/// response without token and profile.
pub async fn login(config: &StorefrontConfig, request: &LoginRequest) -> Result<LoginSuccess, ApiError> {
    #[cfg(feature = "csr")]
    {
        let (ok, body) = post_json::<_, LoginResponse>(&config.endpoint(LOGIN_PATH), request).await?;
        classify_login(ok, body)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (config, request);
        Err(ApiError::Transport(NOT_IN_BROWSER.to_owned()))
    }
}

/// Create an account via `POST /api/auth/register`.
///
/// # Errors
///
/// Returns an error on transport failure or a rejected registration.
pub async fn register(config: &StorefrontConfig, request: &RegisterRequest) -> Result<Option<String>, ApiError> {
    #[cfg(feature = "csr")]
    {
        let (ok, body) = post_json::<_, RegisterResponse>(&config.endpoint(REGISTER_PATH), request).await?;
        classify_register(ok, body)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (config, request);
        Err(ApiError::Transport(NOT_IN_BROWSER.to_owned()))
    }
}
