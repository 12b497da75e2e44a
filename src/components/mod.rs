//! Reusable UI components shared by the pages.

pub mod notice_banner;
pub mod product_card;
pub mod site_header;
