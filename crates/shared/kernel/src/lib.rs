//! Kernel utilities shared by the `FoodPacker` apps.
//! Keep this crate lightweight: it owns process-level plumbing (configuration loading)
//! and re-exports the domain types that plumbing produces.
//!
//! ## Config loading (non-wasm)
//! ```rust,no_run
//! # #[cfg(not(target_arch = "wasm32"))]
//! # {
//! use foodpacker_kernel::config::load_app_config;
//! let cfg = load_app_config(None::<&str>).unwrap();
//! assert!(!cfg.window.title.is_empty());
//! # }
//! ```
#[cfg(not(target_arch = "wasm32"))]
pub mod config;

pub use foodpacker_domain as domain;
