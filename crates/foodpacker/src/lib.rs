//! Facade crate for the `FoodPacker` shell.
//! Re-exports the domain, kernel and UI crates and owns the application root.
//! Keep this crate thin: it composes other crates, it does not style or model anything.
//!
//! ## Usage
//! - Mount [`App`] in a Dioxus launcher (see the desktop app), or
//! - call [`render::render_app`] to get the markup as a string.

use dioxus::prelude::*;
pub use foodpacker_domain as domain;
use foodpacker_domain::theme::Theme;
pub use foodpacker_kernel as kernel;
pub use foodpacker_storefront as storefront;
use foodpacker_storefront::Navbar;
pub use foodpacker_ui as ui;
use foodpacker_ui::{CssBaseline, ThemeProvider};

/// Feature registry for runtime introspection.
pub mod features {
    pub use foodpacker_storefront as storefront;

    /// Slices compiled into this build.
    pub const ENABLED: &[&str] = &["storefront"];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

/// Application root: the dark theme, the baseline reset and the navigation bar.
#[component]
pub fn App() -> Element {
    rsx! {
        ThemeProvider { theme: Theme::dark(),
            CssBaseline {}
            Navbar {}
        }
    }
}

pub mod render {
    pub use foodpacker_ui::render::{render_component, render_document};

    /// Markup of a single render pass of [`App`](crate::App).
    #[must_use]
    pub fn render_app() -> String {
        render_component(crate::App)
    }
}
