use dioxus::prelude::*;

/// The icon set shipped with the shell (Material icon outlines, 24x24 grid).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconKind {
    Search,
    PermIdentity,
    ShoppingCart,
}

impl IconKind {
    /// Stable identifier, rendered as `data-testid`.
    #[must_use]
    pub const fn test_id(self) -> &'static str {
        match self {
            Self::Search => "SearchIcon",
            Self::PermIdentity => "PermIdentityIcon",
            Self::ShoppingCart => "ShoppingCartIcon",
        }
    }

    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Search => {
                "M15.5 14h-.79l-.28-.27C15.41 12.59 16 11.11 16 9.5 16 5.91 13.09 3 9.5 3S3 5.91 3 9.5 5.91 16 9.5 16c1.61 0 3.09-.59 4.23-1.57l.27.28v.79l5 4.99L20.49 19l-4.99-5zm-6 0C7.01 14 5 11.99 5 9.5S7.01 5 9.5 5 14 7.01 14 9.5 11.99 14 9.5 14z"
            },
            Self::PermIdentity => {
                "M12 6c1.1 0 2 .9 2 2s-.9 2-2 2-2-.9-2-2 .9-2 2-2m0 9c2.7 0 5.8 1.29 6 2v1H6v-.99c.2-.72 3.3-2.01 6-2.01m0-11C9.79 4 8 5.79 8 8s1.79 4 4 4 4-1.79 4-4-1.79-4-4-4zm0 9c-2.67 0-8 1.34-8 4v3h16v-3c0-2.66-5.33-4-8-4z"
            },
            Self::ShoppingCart => {
                "M7 18c-1.1 0-1.99.9-1.99 2S5.9 22 7 22s2-.9 2-2-.9-2-2-2zM1 2v2h2l3.6 7.59-1.35 2.45c-.16.28-.25.61-.25.96 0 1.1.9 2 2 2h12v-2H7.42c-.14 0-.25-.11-.25-.25l.03-.12.9-1.63h7.45c.75 0 1.41-.41 1.75-1.03l3.58-6.49c.08-.14.12-.31.12-.48 0-.55-.45-1-1-1H5.21l-.94-2H1zm16 16c-1.1 0-1.99.9-1.99 2s.89 2 1.99 2 2-.9 2-2-.9-2-2-2z"
            },
        }
    }
}

/// Decorative inline SVG; hidden from assistive tech, the surrounding control carries the label.
#[component]
pub fn SvgIcon(kind: IconKind) -> Element {
    rsx! {
        svg {
            class: "fp-svg-icon",
            "data-testid": kind.test_id(),
            "viewBox": "0 0 24 24",
            "focusable": "false",
            "aria-hidden": "true",
            "width": "1em",
            "height": "1em",
            "fill": "currentColor",
            path { "d": kind.path() }
        }
    }
}

#[component]
pub fn SearchIcon() -> Element {
    rsx! { SvgIcon { kind: IconKind::Search } }
}

#[component]
pub fn PermIdentityIcon() -> Element {
    rsx! { SvgIcon { kind: IconKind::PermIdentity } }
}

#[component]
pub fn ShoppingCartIcon() -> Element {
    rsx! { SvgIcon { kind: IconKind::ShoppingCart } }
}
