use dotenvy::dotenv;
use reqwest::Url;
use std::env;
use std::net::SocketAddr;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_OMDB_BASE_URL: &str = "https://www.omdbapi.com/";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {key}: {message}")]
    Invalid { key: &'static str, message: String },
}

/// Process-wide settings, built once at startup and handed to the router.
#[derive(Debug, Clone)]
pub struct Config {
    pub omdb_api_key: String,
    pub omdb_base_url: Url,
    pub bind_addr: SocketAddr,
    pub request_timeout: Duration,
}

impl Config {
    /// Loads `.env` if present, then reads the process environment.
    pub fn from_env() -> Result<Config, ConfigError> {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Config, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let omdb_api_key = get_var(&lookup, "OMDB_API_KEY")?;

        let base_url = get_var_or_default(&lookup, "OMDB_BASE_URL", DEFAULT_OMDB_BASE_URL);
        let omdb_base_url = Url::parse(&base_url).map_err(|e| ConfigError::Invalid {
            key: "OMDB_BASE_URL",
            message: e.to_string(),
        })?;

        let bind_addr = get_var_or_default(&lookup, "BIND_ADDR", DEFAULT_BIND_ADDR)
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::Invalid {
                key: "BIND_ADDR",
                message: e.to_string(),
            })?;

        let timeout_secs = match lookup("OMDB_TIMEOUT_SECS").filter(|v| !v.trim().is_empty()) {
            Some(raw) => raw.trim().parse::<u64>().map_err(|e| ConfigError::Invalid {
                key: "OMDB_TIMEOUT_SECS",
                message: e.to_string(),
            })?,
            None => DEFAULT_TIMEOUT_SECS,
        };
        if timeout_secs == 0 {
            return Err(ConfigError::Invalid {
                key: "OMDB_TIMEOUT_SECS",
                message: "must be greater than zero".to_string(),
            });
        }

        Ok(Config {
            omdb_api_key,
            omdb_base_url,
            bind_addr,
            request_timeout: Duration::from_secs(timeout_secs),
        })
    }
}

fn get_var<F>(lookup: &F, key: &'static str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or(ConfigError::Missing(key))
}

fn get_var_or_default<F>(lookup: &F, key: &str, default: &str) -> String
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}
