#![windows_subsystem = "windows"]

use anyhow::Context;
use foodpacker::kernel::config::load_app_config;
use foodpacker_desktop::{DesktopApp, init_logging};

fn main() -> anyhow::Result<()> {
    let cfg = load_app_config(None::<&str>).context("Critical: Configuration is malformed")?;

    let _log = init_logging(env!("CARGO_PKG_NAME"), &cfg.logging)?;

    tracing::info!(features = ?foodpacker::features::ENABLED, "Starting FoodPacker");

    DesktopApp::from_config(&cfg.window).launch(foodpacker::App);

    Ok(())
}
