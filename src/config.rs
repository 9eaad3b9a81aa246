//! Service configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` - MySQL connection string; when unset it is assembled from
//!   `DB_HOST` (default `localhost`), `DB_PORT` (`3306`), `DB_NAME` (`mini_erp`),
//!   `DB_USER` (`root`) and `DB_PASS` (empty)
//! - `DB_MAX_CONNECTIONS` - pool size (default: 10)
//! - `HOST` - bind address (default: 0.0.0.0)
//! - `PORT` - listen port (default: 8181)

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::str::FromStr;

use thiserror::Error;

const DEFAULT_PORT: u16 = 8181;
const DEFAULT_MAX_CONNECTIONS: u32 = 10;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub max_connections: u32,
    pub host: IpAddr,
    pub port: u16,
}

impl Config {
    /// Loads `.env` (if present) and reads the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_url = match lookup("DATABASE_URL").filter(|v| !v.is_empty()) {
            Some(url) => url,
            None => {
                let host = lookup("DB_HOST").unwrap_or_else(|| "localhost".to_string());
                let port: u16 = parse_or("DB_PORT", lookup("DB_PORT"), 3306)?;
                let name = lookup("DB_NAME").unwrap_or_else(|| "mini_erp".to_string());
                let user = lookup("DB_USER").unwrap_or_else(|| "root".to_string());
                match lookup("DB_PASS").filter(|p| !p.is_empty()) {
                    Some(pass) => format!("mysql://{user}:{pass}@{host}:{port}/{name}"),
                    None => format!("mysql://{user}@{host}:{port}/{name}"),
                }
            }
        };

        Ok(Self {
            database_url,
            max_connections: parse_or("DB_MAX_CONNECTIONS", lookup("DB_MAX_CONNECTIONS"), DEFAULT_MAX_CONNECTIONS)?,
            host: parse_or("HOST", lookup("HOST"), IpAddr::V4(Ipv4Addr::UNSPECIFIED))?,
            port: parse_or("PORT", lookup("PORT"), DEFAULT_PORT)?,
        })
    }

    pub fn socket_addr(&self) -> SocketAddr { SocketAddr::new(self.host, self.port) }
}

fn parse_or<T>(key: &str, value: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match value {
        Some(raw) => raw.trim().parse().map_err(|e: T::Err| ConfigError::InvalidEnvVar(key.to_string(), e.to_string())),
        None => Ok(default),
    }
}
