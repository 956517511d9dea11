use crate::style::Style;
use crate::theme::use_theme;
use crate::typography::TypographyVariant;
use dioxus::prelude::*;
use foodpacker_domain::theme::Theme;

/// Global style reset: colour scheme, box sizing, body colours and `body1` text.
#[component]
pub fn CssBaseline() -> Element {
    let theme = use_theme();
    let css = baseline_css(&theme);

    rsx! {
        style { "data-baseline": "foodpacker", "{css}" }
    }
}

/// The stylesheet emitted by [`CssBaseline`] for `theme`.
#[must_use]
pub fn baseline_css(theme: &Theme) -> String {
    let palette = &theme.palette;
    let (size, weight, line_height, spacing) = TypographyVariant::Body1.metrics();

    let html = Style::new()
        .set("color-scheme", palette.mode.color_scheme())
        .set("-webkit-font-smoothing", "antialiased")
        .set("-moz-osx-font-smoothing", "grayscale")
        .set("box-sizing", "border-box")
        .set("-webkit-text-size-adjust", "100%");

    let inherit = Style::new().set("box-sizing", "inherit");
    let strong = Style::new().set("font-weight", 700);

    let body = Style::new()
        .set("margin", 0)
        .set("color", palette.text.primary)
        .set("background-color", palette.background.default)
        .set("font-family", theme.typography.font_family)
        .set("font-weight", weight)
        .set("font-size", size)
        .set("line-height", line_height)
        .set("letter-spacing", spacing);

    format!(
        "html {{ {html} }} *, *::before, *::after {{ {inherit} }} strong, b {{ {strong} }} body {{ {body} }}"
    )
}
