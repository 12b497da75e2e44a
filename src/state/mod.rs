//! Client-side state modules.
//!
//! DESIGN
//! ======
//! `session` and `cart` are persisted through `util::storage`; `notice` is
//! in-memory UI state shared through Leptos context.

pub mod cart;
pub mod notice;
pub mod session;
