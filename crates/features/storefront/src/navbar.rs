use dioxus::prelude::*;
use foodpacker_domain::theme::Color;
use foodpacker_ui::{
    AppBar, AppBarPosition, Badge, BadgeColor, IconButton, IconKind, SvgIcon, Toolbar, Typography,
    TypographyVariant,
};

pub const BRAND_TITLE: &str = "FoodPacker";
/// Items shown on the cart badge. Not bound to any cart state.
pub const CART_BADGE_COUNT: u32 = 2;
/// Pastel orange.
pub const TOOLBAR_BACKGROUND: Color = Color::rgba(255, 182, 138, 0.8);

/// Controls on the right side of the navigation bar, in render order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavAction {
    Search,
    Account,
    Cart,
}

impl NavAction {
    pub const ALL: [Self; 3] = [Self::Search, Self::Account, Self::Cart];

    /// Accessible name of the control.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Search => "search",
            Self::Account => "perm identity icon",
            Self::Cart => "shopping cart",
        }
    }

    #[must_use]
    pub const fn icon(self) -> IconKind {
        match self {
            Self::Search => IconKind::Search,
            Self::Account => IconKind::PermIdentity,
            Self::Cart => IconKind::ShoppingCart,
        }
    }

    #[must_use]
    pub const fn badge(self) -> Option<u32> {
        match self {
            Self::Cart => Some(CART_BADGE_COUNT),
            Self::Search | Self::Account => None,
        }
    }
}

/// The top app bar of the storefront.
#[component]
pub fn Navbar() -> Element {
    use_hook(|| tracing::debug!(actions = NavAction::ALL.len(), "Navbar mounted"));

    rsx! {
        AppBar { position: AppBarPosition::Static,
            Toolbar { background: TOOLBAR_BACKGROUND,
                Typography { variant: TypographyVariant::H6, grow: true, "{BRAND_TITLE}" }
                for action in NavAction::ALL {
                    NavButton { action }
                }
            }
        }
    }
}

#[component]
fn NavButton(action: NavAction) -> Element {
    let icon = rsx! { SvgIcon { kind: action.icon() } };

    rsx! {
        IconButton { label: action.label(),
            {
                match action.badge() {
                    Some(count) => rsx! {
                        Badge { content: count, color: BadgeColor::Secondary, {icon} }
                    },
                    None => icon,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_cart_has_badge() {
        let badges: Vec<_> = NavAction::ALL.iter().filter_map(|a| a.badge()).collect();
        assert_eq!(badges, vec![2]);
    }

    #[test]
    fn test_labels_are_distinct() {
        let labels: std::collections::HashSet<_> = NavAction::ALL.iter().map(|a| a.label()).collect();
        assert_eq!(labels.len(), 3);
    }
}
