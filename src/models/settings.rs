use std::env;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::utils::constant::{DEFAULT_HOST, DEFAULT_PORT};

/// Deployment environment, selected with `APP_ENV`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppEnv {
    #[default]
    Development,
    Production,
}

impl FromStr for AppEnv {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" => Ok(AppEnv::Development),
            "production" => Ok(AppEnv::Production),
            _ => Err(ConfigError::InvalidEnv(s.to_string())),
        }
    }
}

/// Runtime configuration of the server process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub env: AppEnv,
    pub host: IpAddr,
    pub port: u16,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            env: AppEnv::default(),
            host: DEFAULT_HOST,
            port: DEFAULT_PORT,
        }
    }
}

impl Settings {
    /// Reads the settings from the process environment.
    ///
    /// # Environment Variables
    ///
    /// - `APP_ENV` - `development` (default) or `production`
    /// - `APP_HOST` - IP address to bind, defaults to `0.0.0.0`
    /// - `APP_PORT` - TCP port to bind, defaults to `8000`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the settings from an arbitrary variable lookup.
    ///
    /// Unset or empty variables fall back to their defaults; set but
    /// unparsable ones are an error.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let defaults = Self::default();

        let env = match get("APP_ENV") {
            Some(raw) => raw.parse()?,
            None => defaults.env,
        };

        let host = match get("APP_HOST") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidHost(raw.clone()))?,
            None => defaults.host,
        };

        let port = match get("APP_PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(raw.clone()))?,
            None => defaults.port,
        };

        Ok(Self { env, host, port })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
