use config::{Config, Environment, File};
use foodpacker_domain::config::AppConfig;
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::info;

/// Base name of the optional config file (`foodpacker.toml`, `foodpacker.json`, ...).
pub const DEFAULT_CONFIG_NAME: &str = "foodpacker";
/// Prefix for environment overrides (`FOODPACKER__WINDOW__TITLE`).
pub const ENV_PREFIX: &str = "FOODPACKER";

#[foodpacker_derive::foodpacker_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads `T` from an optional config file overlaid with environment variables.
///
/// Layers, lowest priority first:
/// 1. **File**: `path`, or [`DEFAULT_CONFIG_NAME`] in the working directory. The file is
///    optional; any format the `config` crate recognises by extension is accepted.
/// 2. **Environment**: variables prefixed with `FOODPACKER__`, nested with `__`
///    (e.g., `FOODPACKER__LOGGING__LEVEL` maps to `logging.level`).
///
/// Missing keys fall back to the `serde` defaults of `T`.
///
/// # Errors
/// Returns [`ConfigError::Config`] if a source cannot be parsed or the merged values do
/// not match the shape of `T`.
///
/// # Example
/// ```rust,no_run
/// use foodpacker_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct HostConfig {
///     port: u16,
/// }
///
/// let cfg: HostConfig = load_config(Some("config/local")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    load_layered(path, None)
}

/// `env` replaces the process environment when set.
fn load_layered<T>(
    path: Option<impl AsRef<Path>>,
    env: Option<config::Map<String, String>>,
) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let effective_path =
        path.map_or_else(|| PathBuf::from(DEFAULT_CONFIG_NAME), |p| p.as_ref().to_path_buf());

    info!("Loading config from {}", effective_path.display());

    let config = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(false))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .convert_case(config::Case::Snake)
                .source(env),
        )
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}

/// [`load_config`] specialised to the host settings.
///
/// # Errors
/// See [`load_config`].
pub fn load_app_config(path: Option<impl AsRef<Path>>) -> Result<AppConfig, ConfigError> {
    load_config(path)
}
