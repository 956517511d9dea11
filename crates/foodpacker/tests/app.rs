use foodpacker::render::{render_app, render_document};
use foodpacker::storefront::BRAND_TITLE;

#[test]
fn renders_dark_app_bar_end_to_end() {
    let html = render_app();

    // Theme: dark baseline with the configured palette.
    assert!(html.contains("color-scheme: dark;"));
    assert!(html.contains("background-color: #0d0d0d;"));

    // Dark app bar: elevated paper surface, never the primary pink.
    let header = &html[html.find("<header").expect("app bar")..];
    let header = &header[..header.find('>').expect("header tag")];
    assert!(header.contains("background-color: #0d0d0d;"));
    assert!(header.contains("background-image: linear-gradient("));
    assert!(!header.contains("#e91e63"));

    // App bar labelled with the brand, pastel-orange toolbar.
    assert!(html.contains(&format!(">{BRAND_TITLE}</div>")));
    assert!(html.contains("background-color: rgba(255, 182, 138, 0.8);"));

    // Search, identity and cart icons; the cart shows "2".
    for icon in ["SearchIcon", "PermIdentityIcon", "ShoppingCartIcon"] {
        assert!(html.contains(&format!(r#"data-testid="{icon}""#)), "missing {icon}");
    }
    assert_eq!(html.matches("<button").count(), 3);
    assert!(html.contains(">2</span>"));
    assert!(html.contains("background-color: #242b2e;"));
}

#[test]
fn baseline_precedes_navbar() {
    let html = render_app();
    let style = html.find("<style").expect("baseline style");
    let header = html.find("<header").expect("app bar");
    assert!(style < header);
}

#[test]
fn rendering_is_idempotent() {
    let first = render_app();
    let second = render_app();
    assert_eq!(first, second);
}

#[test]
fn document_wraps_app_markup() {
    let body = render_app();
    let doc = render_document("FoodPacker", &body);
    assert!(doc.contains("<title>FoodPacker</title>"));
    assert!(doc.contains(&body));
}

#[test]
fn storefront_is_registered() {
    assert!(foodpacker::features::is_enabled("storefront"));
    assert!(!foodpacker::features::is_enabled("checkout"));
}
