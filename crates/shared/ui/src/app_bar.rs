use crate::style::Style;
use crate::theme::use_theme;
use dioxus::prelude::*;
use foodpacker_domain::theme::{Color, PaletteMode, Theme};

const APP_BAR_Z_INDEX: u16 = 1100;
const APP_BAR_SHADOW: &str = "0px 2px 4px -1px rgba(0,0,0,0.2), 0px 4px 5px 0px rgba(0,0,0,0.14), 0px 1px 10px 0px rgba(0,0,0,0.12)";
/// White overlay lightening a dark paper surface at elevation 4.
const ELEVATION_OVERLAY: Color = Color::WHITE.with_alpha(0.09);

/// CSS positioning of an [`AppBar`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppBarPosition {
    /// Scrolls away with the page.
    #[default]
    Static,
    Fixed,
    Absolute,
    Sticky,
    Relative,
}

impl AppBarPosition {
    #[must_use]
    pub const fn as_css(self) -> &'static str {
        match self {
            Self::Static => "static",
            Self::Fixed => "fixed",
            Self::Absolute => "absolute",
            Self::Sticky => "sticky",
            Self::Relative => "relative",
        }
    }

    /// Positions that pin the bar to the top edge.
    const fn is_pinned(self) -> bool {
        matches!(self, Self::Fixed | Self::Absolute | Self::Sticky)
    }
}

/// Colours of the bar surface: `(background, overlay image, text)`.
///
/// Dark themes paint the bar as elevated paper unless `color_on_dark` keeps the primary colour.
fn surface(theme: &Theme, color_on_dark: bool) -> (Color, Option<String>, Color) {
    let palette = &theme.palette;
    if palette.mode == PaletteMode::Dark && !color_on_dark {
        let overlay = format!("linear-gradient({ELEVATION_OVERLAY}, {ELEVATION_OVERLAY})");
        (palette.background.paper, Some(overlay), palette.text.primary)
    } else {
        (palette.primary.main, None, palette.primary.contrast_text)
    }
}

/// Top-level bar surface.
///
/// Light themes use the primary palette colour. Dark themes use the paper surface, or the
/// primary colour when `enable_color_on_dark` is set.
#[component]
pub fn AppBar(
    #[props(default)] position: AppBarPosition,
    #[props(default)] enable_color_on_dark: bool,
    children: Element,
) -> Element {
    let theme = use_theme();
    let (background, overlay, text) = surface(&theme, enable_color_on_dark);

    let mut style = Style::new()
        .set("display", "flex")
        .set("flex-direction", "column")
        .set("width", "100%")
        .set("box-sizing", "border-box")
        .set("flex-shrink", 0)
        .set("position", position.as_css())
        .set("z-index", APP_BAR_Z_INDEX)
        .set("background-color", background)
        .set_opt("background-image", overlay)
        .set("color", text)
        .set("box-shadow", APP_BAR_SHADOW);

    if position.is_pinned() {
        style = style.set("top", 0).set("left", "auto").set("right", 0);
    }

    let class = format!("fp-app-bar fp-app-bar-{}", position.as_css());

    rsx! {
        header { class: "{class}", style: "{style}", {children} }
    }
}

/// Horizontal flex row inside an [`AppBar`]. `background` overrides the bar colour.
#[component]
pub fn Toolbar(background: Option<Color>, children: Element) -> Element {
    let style = Style::new()
        .set("position", "relative")
        .set("display", "flex")
        .set("align-items", "center")
        .set("min-height", "64px")
        .set("padding-left", "24px")
        .set("padding-right", "24px")
        .set_opt("background-color", background);

    rsx! {
        div { class: "fp-toolbar", style: "{style}", {children} }
    }
}
