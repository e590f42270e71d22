//! Database connection settings.

use std::env;

use sqlx::mysql::MySqlConnectOptions;

use crate::error_handling::SettingsError;

const DEFAULT_DB_USER: &str = "root";
const DEFAULT_DB_PASS: &str = "pass123";
const DEFAULT_DB_HOST: &str = "127.0.0.1";
const DEFAULT_DB_PORT: u16 = 3306;
const DEFAULT_DB_NAME: &str = "learning";

/// MySQL connection settings, read from the environment.
///
/// Each field falls back to a documented default when its variable is unset:
/// `DB_USER` (`root`), `DB_PASS` (`pass123`), `DB_HOST` (`127.0.0.1`),
/// `DB_PORT` (`3306`), `DB_NAME` (`learning`).
#[derive(Debug, Clone)]
pub struct DbSettings {
    /// Database user (`DB_USER`)
    pub user: String,
    /// Database password (`DB_PASS`)
    pub pass: String,
    /// Database host (`DB_HOST`)
    pub host: String,
    /// Database TCP port (`DB_PORT`)
    pub port: u16,
    /// Database name (`DB_NAME`)
    pub name: String,
}

impl DbSettings {
    /// Reads settings from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::InvalidPort`] if `DB_PORT` is set but not a
    /// valid port number.
    pub fn from_env() -> Result<Self, SettingsError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds settings from an explicit variable lookup.
    ///
    /// `from_env` delegates here; tests pass a closure over a map so they
    /// never touch the process environment.
    fn from_lookup<F>(lookup: F) -> Result<Self, SettingsError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("DB_PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|source| SettingsError::InvalidPort { value: raw, source })?,
            None => DEFAULT_DB_PORT,
        };

        Ok(Self {
            user: lookup("DB_USER").unwrap_or_else(|| DEFAULT_DB_USER.to_string()),
            pass: lookup("DB_PASS").unwrap_or_else(|| DEFAULT_DB_PASS.to_string()),
            host: lookup("DB_HOST").unwrap_or_else(|| DEFAULT_DB_HOST.to_string()),
            port,
            name: lookup("DB_NAME").unwrap_or_else(|| DEFAULT_DB_NAME.to_string()),
        })
    }

    /// Connection options for sqlx.
    ///
    /// Built field by field rather than as a URL so passwords never need
    /// percent-encoding.
    pub fn connect_options(&self) -> MySqlConnectOptions {
        MySqlConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.pass)
            .database(&self.name)
    }

    /// Connection target for log output, without the password.
    pub fn display_url(&self) -> String {
        format!(
            "mysql://{}@{}:{}/{}",
            self.user, self.host, self.port, self.name
        )
    }
}
