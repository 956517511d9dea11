use crate::style::Style;
use crate::theme::use_theme;
use dioxus::prelude::*;

/// Text scale entries. Only the variants the shell uses are modelled.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypographyVariant {
    H6,
    #[default]
    Body1,
}

impl TypographyVariant {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::H6 => "h6",
            Self::Body1 => "body1",
        }
    }

    /// `(font-size, font-weight, line-height, letter-spacing)`
    pub(crate) const fn metrics(self) -> (&'static str, u16, &'static str, &'static str) {
        match self {
            Self::H6 => ("1.25rem", 500, "1.6", "0.0075em"),
            Self::Body1 => ("1rem", 400, "1.5", "0.00938em"),
        }
    }
}

/// A block of text. `grow` lets it take the remaining space in a flex row.
#[component]
pub fn Typography(
    #[props(default)] variant: TypographyVariant,
    #[props(default)] grow: bool,
    children: Element,
) -> Element {
    let theme = use_theme();
    let (size, weight, line_height, spacing) = variant.metrics();

    let mut style = Style::new()
        .set("margin", 0)
        .set("font-family", theme.typography.font_family)
        .set("font-weight", weight)
        .set("font-size", size)
        .set("line-height", line_height)
        .set("letter-spacing", spacing);
    if grow {
        style = style.set("flex-grow", 1);
    }

    let class = format!("fp-typography fp-typography-{}", variant.name());

    rsx! {
        div { class: "{class}", style: "{style}", {children} }
    }
}
