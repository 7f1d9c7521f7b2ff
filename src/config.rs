use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Postgres connection string. Without one the server keeps builds in memory.
    pub database_url: Option<String>,
    pub bind_addr: SocketAddr,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_url: None,
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 8000)),
            max_connections: 5,
            acquire_timeout: Duration::from_secs(3),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let database_url = lookup("DATABASE_URL").filter(|url| !url.trim().is_empty());

        let bind_addr = parse_or(&lookup, "BIND_ADDR", defaults.bind_addr)?;
        let max_connections = parse_or(&lookup, "DB_MAX_CONNECTIONS", defaults.max_connections)?;
        let timeout_secs = defaults.acquire_timeout.as_secs();
        let timeout_secs = parse_or(&lookup, "DB_ACQUIRE_TIMEOUT_SECS", timeout_secs)?;
        let acquire_timeout = Duration::from_secs(timeout_secs);

        Ok(Self {
            database_url,
            bind_addr,
            max_connections,
            acquire_timeout,
        })
    }
}

fn parse_or<T, F>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .parse()
            .with_context(|| format!("{} has an invalid value: {}", key, raw)),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn empty_environment_uses_defaults() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, AppConfig::default());
        assert!(config.database_url.is_none());
    }

    #[test]
    fn reads_all_settings() {
        let config = AppConfig::from_lookup(lookup(&[
            ("DATABASE_URL", "postgres://localhost/builds"),
            ("BIND_ADDR", "0.0.0.0:3000"),
            ("DB_MAX_CONNECTIONS", "12"),
            ("DB_ACQUIRE_TIMEOUT_SECS", "7"),
        ]))
        .unwrap();

        assert_eq!(
            config.database_url.as_deref(),
            Some("postgres://localhost/builds")
        );
        assert_eq!(config.bind_addr.port(), 3000);
        assert_eq!(config.max_connections, 12);
        assert_eq!(config.acquire_timeout, Duration::from_secs(7));
    }

    #[test]
    fn malformed_values_are_errors() {
        let bad_addr = lookup(&[("BIND_ADDR", "nowhere")]);
        assert!(AppConfig::from_lookup(bad_addr).is_err());

        let bad_pool = lookup(&[("DB_MAX_CONNECTIONS", "many")]);
        assert!(AppConfig::from_lookup(bad_pool).is_err());

        let bad_timeout = lookup(&[("DB_ACQUIRE_TIMEOUT_SECS", "soon")]);
        assert!(AppConfig::from_lookup(bad_timeout).is_err());
    }

    #[test]
    fn blank_database_url_means_memory_store() {
        let blank = lookup(&[("DATABASE_URL", "  ")]);
        let config = AppConfig::from_lookup(blank).unwrap();
        assert!(config.database_url.is_none());
    }
}
