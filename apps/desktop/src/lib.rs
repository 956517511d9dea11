//! # FoodPacker Desktop
//!
//! Hosts the shell in a native webview window.

use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use dioxus::prelude::*;
use foodpacker::domain::config::{LoggingConfig, WindowConfig};
use foodpacker_logger::{LevelFilter, Logger, LoggerError};

#[derive(Debug, Clone, PartialEq)]
pub struct DesktopApp {
    title: String,
    width: f64,
    height: f64,
}

impl Default for DesktopApp {
    fn default() -> Self {
        Self::from_config(&WindowConfig::default())
    }
}

impl DesktopApp {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_config(cfg: &WindowConfig) -> Self {
        Self { title: cfg.title.clone(), width: cfg.width, height: cfg.height }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use = "This function does nothing unless you call `launch()` on it"]
    pub const fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub const fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    /// Opens the window and runs `root` until it is closed.
    pub fn launch(self, root: fn() -> Element) {
        tracing::info!(title = %self.title, width = self.width, height = self.height, "Launching desktop window");

        let window = WindowBuilder::new()
            .with_title(&self.title)
            .with_inner_size(LogicalSize { width: self.width, height: self.height });

        let cfg = Config::default().with_window(window).with_custom_head(
            r#"<meta name="viewport" content="width=device-width, initial-scale=1.0">"#.into(),
        );

        LaunchBuilder::desktop().with_cfg(cfg).launch(root);
    }
}

/// Installs the global logger from the `[logging]` settings.
///
/// # Errors
/// Returns [`LoggerError::InvalidConfiguration`] for an unknown level name, otherwise
/// whatever [`foodpacker_logger::LoggerBuilder::init`] reports.
pub fn init_logging(name: &str, cfg: &LoggingConfig) -> Result<Logger, LoggerError> {
    let level = parse_level(&cfg.level)?;
    let builder = Logger::builder().name(name).level(level);

    match &cfg.directory {
        Some(dir) if cfg.json => builder.path(dir).json().init(),
        Some(dir) => builder.path(dir).init(),
        None => builder.init(),
    }
}

fn parse_level(level: &str) -> Result<LevelFilter, LoggerError> {
    level.trim().parse::<LevelFilter>().map_err(|e| LoggerError::InvalidConfiguration {
        message: format!("Unknown log level '{level}': {e}").into(),
        context: Some("logging.level".into()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_config() {
        let cfg = WindowConfig { title: "Orders".to_owned(), width: 640.0, height: 480.0 };
        let app = DesktopApp::from_config(&cfg);
        assert_eq!(app.title(), "Orders");
        assert_eq!(app.size(), (640.0, 480.0));
    }

    #[test]
    fn test_default_uses_window_defaults() {
        let app = DesktopApp::new().with_size(1024.0, 768.0);
        assert_eq!(app.title(), "FoodPacker");
        assert_eq!(app.size(), (1024.0, 768.0));
    }

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("debug").ok(), Some(LevelFilter::DEBUG));
        assert_eq!(parse_level(" WARN ").ok(), Some(LevelFilter::WARN));
        let err = parse_level("loud").expect_err("unknown level");
        assert!(err.to_string().contains("logging.level"));
    }
}
