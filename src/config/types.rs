//! The configuration structs used to build the AppConfig, and their impls.
use std::{path::PathBuf, str::FromStr};

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use sqlx::{
    postgres::{PgConnectOptions, PgSslMode},
    ConnectOptions,
};
use strum_macros::AsRefStr;

use crate::config::{ConfigError, ConfigResult};

// ###################################
// ->   STRUCTS
// ###################################
#[derive(AsRefStr, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Environment {
    Local,
    Production,
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub net_config: NetConfig,
    /// Built from `DATABASE_URL` when it is set, from `[db_config]` otherwise.
    pub db_options: PgConnectOptions,
}

/// What figment extracts before `DATABASE_URL` gets a say.
#[derive(Deserialize, Debug)]
pub(super) struct RawConfig {
    pub net_config: NetConfig,
    #[serde(default)]
    pub db_config: Option<DbConfig>,
}

#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct NetConfig {
    pub host: [u8; 4],
    pub app_port: u16,
    /// Directory served for any path no route matches (server adapter only).
    #[serde(default)]
    pub static_dir: Option<PathBuf>,
}

#[derive(Deserialize, Clone, Debug)]
pub struct DbConfig {
    pub username: String,
    pub password: SecretString,
    pub port: u16,
    pub host: String,
    pub db_name: String,
    #[serde(default)]
    pub require_ssl: SslRequire,
}

#[derive(Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SslRequire {
    #[default]
    Prefer,
    Require,
    Disable,
}

// ###################################
// ->   IMPLs
// ###################################
impl DbConfig {
    pub fn connection_options(&self) -> PgConnectOptions {
        self.connection_options_without_db().database(&self.db_name)
    }
    pub fn connection_options_without_db(&self) -> PgConnectOptions {
        // Create new PgConnectOptions struct but don't try to use the '$HOME/.pgpass' file.
        PgConnectOptions::new_without_pgpass()
            .host(&self.host)
            .username(&self.username)
            .password(self.password.expose_secret())
            .port(self.port)
            .ssl_mode(self.require_ssl.into())
            .log_statements(tracing::log::LevelFilter::Trace)
    }
}

impl From<SslRequire> for PgSslMode {
    fn from(value: SslRequire) -> Self {
        match value {
            SslRequire::Require => PgSslMode::Require,
            SslRequire::Disable => PgSslMode::Disable,
            SslRequire::Prefer => PgSslMode::Prefer,
        }
    }
}

impl RawConfig {
    pub(super) fn finish(self, db_url: Option<&str>) -> ConfigResult<AppConfig> {
        let db_options = match (db_url, self.db_config) {
            (Some(db_url), _) => connection_options_from_url(db_url)?,
            (None, Some(db_config)) => db_config.connection_options(),
            (None, None) => return Err(ConfigError::MissingDbConfig),
        };

        Ok(AppConfig {
            net_config: self.net_config,
            db_options,
        })
    }
}

/// Parses a libpq style connection URL the way sqlx does: percent-encoded credentials,
/// every `sslmode`, and missing parts left to the `PG*` env variables.
pub fn connection_options_from_url(db_url: &str) -> ConfigResult<PgConnectOptions> {
    let options = PgConnectOptions::from_str(db_url).map_err(ConfigError::DatabaseUrl)?;

    Ok(options.log_statements(tracing::log::LevelFilter::Trace))
}

// ###################################
// ->   TRY FROMs
// ###################################

impl TryFrom<String> for Environment {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.to_ascii_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            _ => Err(Self::Error::StringToEnvironmentFail),
        }
    }
}

// ###################################
// ->   TESTS
// ###################################
