//! Preview host configuration parsed from environment variables.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use crate::error::ErrorCode;
use crate::routes::DEFAULT_NAMESPACE;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BIND_ADDR: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT: {0:?}")]
    InvalidPort(String),
    #[error("invalid BIND_ADDR: {0:?}")]
    InvalidBindAddr(String),
    #[error("invalid boolean for {key}: {value:?}")]
    InvalidFlag { key: &'static str, value: String },
    #[error("invalid APP_NAMESPACE: {0:?}")]
    InvalidNamespace(String),
}

impl ErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidPort(_) => "E_CONFIG_PORT",
            Self::InvalidBindAddr(_) => "E_CONFIG_BIND_ADDR",
            Self::InvalidFlag { .. } => "E_CONFIG_FLAG",
            Self::InvalidNamespace(_) => "E_CONFIG_NAMESPACE",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewConfig {
    pub bind_addr: IpAddr,
    pub port: u16,
    /// i18n namespace prefixed to every page-title key.
    pub namespace: String,
    /// Load every route module at start-up instead of on first navigation.
    pub preload_routes: bool,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR,
            port: DEFAULT_PORT,
            namespace: DEFAULT_NAMESPACE.to_owned(),
            preload_routes: false,
        }
    }
}

impl PreviewConfig {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `BIND_ADDR`: default `0.0.0.0`
    /// - `APP_NAMESPACE`: default `backendProgram2App`
    /// - `ROUTES_PRELOAD`: `1/true/yes/on` or `0/false/no/off`, default off
    ///
    /// # Errors
    ///
    /// Returns the first variable that is set but unparsable.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as `from_env`, reading variables through `lookup`. Blank values
    /// count as unset.
    ///
    /// # Errors
    ///
    /// Returns the first variable that is set but unparsable.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());
        let defaults = Self::default();

        let port = match get("PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => defaults.port,
        };
        let bind_addr = match get("BIND_ADDR") {
            Some(raw) => raw.parse::<IpAddr>().map_err(|_| ConfigError::InvalidBindAddr(raw))?,
            None => defaults.bind_addr,
        };
        let namespace = match get("APP_NAMESPACE") {
            Some(raw) if is_valid_namespace(&raw) => raw,
            Some(raw) => return Err(ConfigError::InvalidNamespace(raw)),
            None => defaults.namespace,
        };
        let preload_routes = match get("ROUTES_PRELOAD") {
            Some(raw) => parse_bool(&raw).ok_or(ConfigError::InvalidFlag { key: "ROUTES_PRELOAD", value: raw })?,
            None => defaults.preload_routes,
        };

        Ok(Self { bind_addr, port, namespace, preload_routes })
    }

    #[must_use]
    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}

pub(crate) fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

// Title keys are dot-separated, so a namespace is a single identifier.
fn is_valid_namespace(raw: &str) -> bool {
    raw.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
