use crate::style::Style;
use dioxus::prelude::*;

/// Round, borderless button wrapping a single icon. `label` becomes the `aria-label`.
#[component]
pub fn IconButton(#[props(into)] label: String, children: Element) -> Element {
    let style = Style::new()
        .set("display", "inline-flex")
        .set("align-items", "center")
        .set("justify-content", "center")
        .set("position", "relative")
        .set("box-sizing", "border-box")
        .set("background-color", "transparent")
        .set("outline", 0)
        .set("border", 0)
        .set("margin", 0)
        .set("cursor", "pointer")
        .set("user-select", "none")
        .set("padding", "8px")
        .set("border-radius", "50%")
        .set("font-size", "1.5rem")
        .set("color", "inherit");

    rsx! {
        button { class: "fp-icon-button", r#type: "button", aria_label: "{label}", style: "{style}", {children} }
    }
}
