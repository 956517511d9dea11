//! # UI primitives
//!
//! Dioxus components that apply a [`Theme`] the way a Material-style toolkit does:
//! a context-only [`ThemeProvider`], a global [`CssBaseline`], and a few surface
//! components (app bar, toolbar, typography, icon button, badge, icons) whose inline
//! styles are derived from the theme in scope.
//!
//! Everything renders to plain HTML, so the same tree runs in a desktop webview or
//! through [`render::render_component`] for server-side rendering.
//!
//! ```rust
//! use foodpacker_ui::prelude::*;
//!
//! fn root() -> Element {
//!     rsx! {
//!         ThemeProvider { theme: Theme::dark(),
//!             IconButton { label: "search", SearchIcon {} }
//!         }
//!     }
//! }
//!
//! let html = foodpacker_ui::render::render_component(root);
//! assert!(html.contains(r#"aria-label="search""#));
//! ```

mod app_bar;
mod badge;
mod baseline;
mod button;
mod icons;
pub mod render;
mod style;
mod theme;
mod typography;

pub use crate::app_bar::{AppBar, AppBarPosition, Toolbar};
pub use crate::badge::{Badge, BadgeColor};
pub use crate::baseline::{CssBaseline, baseline_css};
pub use crate::button::IconButton;
pub use crate::icons::{IconKind, PermIdentityIcon, SearchIcon, ShoppingCartIcon, SvgIcon};
pub use crate::style::Style;
pub use crate::theme::{ThemeProvider, use_theme};
pub use crate::typography::{Typography, TypographyVariant};
pub use foodpacker_domain::theme::{Color, PaletteMode, Theme};

/// Everything needed to write `rsx!` against these components.
pub mod prelude {
    pub use crate::*;
    pub use dioxus::prelude::*;
}
