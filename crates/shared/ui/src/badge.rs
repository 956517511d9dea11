use crate::style::Style;
use crate::theme::use_theme;
use dioxus::prelude::*;
use foodpacker_domain::theme::{PaletteColor, Theme};

/// Palette entry used to paint a [`Badge`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BadgeColor {
    #[default]
    Primary,
    Secondary,
}

impl BadgeColor {
    #[must_use]
    pub const fn resolve(self, theme: &Theme) -> PaletteColor {
        match self {
            Self::Primary => theme.palette.primary,
            Self::Secondary => theme.palette.secondary,
        }
    }
}

/// Overlays a small count on the top-right corner of its child.
#[component]
pub fn Badge(content: u32, #[props(default)] color: BadgeColor, children: Element) -> Element {
    let theme = use_theme();
    let paint = color.resolve(&theme);

    let root = Style::new()
        .set("position", "relative")
        .set("display", "inline-flex")
        .set("vertical-align", "middle")
        .set("flex-shrink", 0);

    let bubble = Style::new()
        .set("position", "absolute")
        .set("top", 0)
        .set("right", 0)
        .set("transform", "scale(1) translate(50%, -50%)")
        .set("transform-origin", "100% 0%")
        .set("display", "flex")
        .set("align-items", "center")
        .set("justify-content", "center")
        .set("box-sizing", "border-box")
        .set("font-family", theme.typography.font_family)
        .set("font-weight", 500)
        .set("font-size", "0.75rem")
        .set("min-width", "20px")
        .set("height", "20px")
        .set("line-height", 1)
        .set("padding", "0 6px")
        .set("border-radius", "10px")
        .set("z-index", 1)
        .set("background-color", paint.main)
        .set("color", paint.contrast_text);

    rsx! {
        span { class: "fp-badge-root", style: "{root}",
            {children}
            span { class: "fp-badge", style: "{bubble}", "{content}" }
        }
    }
}
