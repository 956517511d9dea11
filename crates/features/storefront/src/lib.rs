//! Storefront feature slice.
//!
//! Currently just the navigation bar: brand title plus search, account and cart controls.

mod navbar;

pub use crate::navbar::{BRAND_TITLE, CART_BADGE_COUNT, NavAction, Navbar, TOOLBAR_BACKGROUND};
