//! Server-side rendering of component trees to HTML strings.

use dioxus::prelude::*;
use std::fmt::Write;

/// Builds a fresh `VirtualDom` for `root`, runs the initial render and returns its markup.
///
/// Every call starts from a new DOM, so rendering the same tree twice yields the same string.
#[must_use]
pub fn render_component(root: fn() -> Element) -> String {
    let mut dom = VirtualDom::new(root);
    dom.rebuild_in_place();
    let html = dioxus::ssr::render(&dom);
    tracing::debug!(bytes = html.len(), "Rendered component tree");
    html
}

/// Wraps rendered body markup in a minimal HTML5 document.
#[must_use]
pub fn render_document(title: &str, body: &str) -> String {
    let mut doc = String::with_capacity(body.len() + 256);
    doc.push_str("<!DOCTYPE html><html lang=\"en\"><head><meta charset=\"utf-8\">");
    doc.push_str(
        "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">",
    );
    let _ = write!(doc, "<title>{}</title>", escape_text(title));
    doc.push_str("</head><body><div id=\"main\">");
    doc.push_str(body);
    doc.push_str("</div></body></html>");
    doc
}

fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_shell() {
        let doc = render_document("Food & Co <dev>", "<p>hi</p>");
        assert!(doc.starts_with("<!DOCTYPE html>"));
        assert!(doc.contains("<title>Food &amp; Co &lt;dev&gt;</title>"));
        assert!(doc.contains("<div id=\"main\"><p>hi</p></div>"));
        assert!(doc.ends_with("</html>"));
    }

    #[test]
    fn test_render_plain_component() {
        fn hello() -> Element {
            rsx! { p { "hello" } }
        }
        assert_eq!(render_component(hello), "<p>hello</p>");
    }
}
