//! Builds an `AppConfig` from layered sources, later ones win:
//! `config/base.toml`, `config/{environment}.toml`, `APP_*` env variables,
//! then the `PORT` and `DATABASE_URL` env variables.

mod error;
mod types;

use std::path::Path;

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use tracing::info;

use types::RawConfig;

// Re-export config structs
pub use error::{ConfigError, ConfigResult};
pub use types::{
    connection_options_from_url, AppConfig, DbConfig, Environment, NetConfig, SslRequire,
};

impl AppConfig {
    /// Loads the configuration from the `config` directory of the current working directory.
    /// The environment is picked with `APP_ENVIRONMENT` and defaults to `local`.
    ///
    /// A `.env` file, if there is one, fills in env variables that are not already set.
    pub fn load() -> ConfigResult<Self> {
        if let Ok(path) = dotenvy::dotenv() {
            info!("{:<20} - Loaded {}", "load_config", path.display());
        }
        let config_dir = std::env::current_dir()?.join("config");
        let environment: Environment = std::env::var("APP_ENVIRONMENT")
            .unwrap_or_else(|_| "local".into())
            .try_into()?;

        Self::load_from(&config_dir, environment)
    }

    pub fn load_from(config_dir: &Path, environment: Environment) -> ConfigResult<Self> {
        info!(
            "{:<20} - Loading the '{}' configuration",
            "load_config",
            environment.as_ref()
        );
        let environment_filename = format!("{}.toml", environment.as_ref().to_lowercase());

        let raw: RawConfig = Figment::new()
            .merge(Toml::file(config_dir.join("base.toml")))
            .merge(Toml::file(config_dir.join(environment_filename)))
            .merge(Env::prefixed("APP_").split("__"))
            .merge(
                Env::raw()
                    .only(&["PORT"])
                    .map(|_| "net_config.app_port".into()),
            )
            .extract()?;

        let db_url = std::env::var("DATABASE_URL").ok();

        raw.finish(db_url.as_deref())
    }
}
