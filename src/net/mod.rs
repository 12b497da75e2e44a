//! Networking modules for the storefront REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the HTTP calls and classifies responses; `types` defines the
//! wire schema shared with the backend.

pub mod api;
pub mod types;
