//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. The auth guard has already run by the time any page
//! mounts.

pub mod cart;
pub mod catalog;
pub mod login;
pub mod register;
