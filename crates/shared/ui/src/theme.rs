use dioxus::prelude::*;
use foodpacker_domain::theme::Theme;

/// Makes `theme` available to every descendant through [`use_theme`].
///
/// Renders no markup of its own.
#[component]
pub fn ThemeProvider(theme: Theme, children: Element) -> Element {
    let theme = use_context_provider(|| theme);
    use_hook(|| tracing::debug!(mode = %theme.mode(), "Theme provided"));

    rsx! { {children} }
}

/// The theme from the nearest [`ThemeProvider`], or [`Theme::default`] outside one.
#[must_use]
pub fn use_theme() -> Theme {
    try_use_context::<Theme>().unwrap_or_default()
}
