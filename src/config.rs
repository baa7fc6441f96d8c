//! Process settings read from the environment.

use crate::error::ConfigError;
use regex::Regex;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::OnceLock;

static TABLE_NAME: OnceLock<Regex> = OnceLock::new();

#[derive(Debug, Clone)]
pub struct Settings {
    pub database_url: String,
    pub database_max_connections: u32,
    pub database_connect_timeout_secs: u64,
    /// Table holding event rows, optionally schema-qualified (`public.events`).
    pub events_table: String,
    /// Root of the front-end bundle served for unmatched paths.
    pub static_dir: PathBuf,
    pub listen_addr: SocketAddr,
}

impl Settings {
    /// Read settings from process environment. Load `.env` before calling if wanted.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through `lookup`, falling back to defaults for unset keys.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").unwrap_or_else(|| "postgres://localhost/globoticket".into());
        let database_max_connections = parse_or("DATABASE_MAX_CONNECTIONS", lookup("DATABASE_MAX_CONNECTIONS"), 5)?;
        let database_connect_timeout_secs =
            parse_or("DATABASE_CONNECT_TIMEOUT_SECS", lookup("DATABASE_CONNECT_TIMEOUT_SECS"), 5)?;
        let events_table = lookup("EVENTS_TABLE").unwrap_or_else(|| "events".into());
        validate_table_name(&events_table)?;
        let static_dir = PathBuf::from(lookup("STATIC_DIR").unwrap_or_else(|| "static".into()));
        let listen_addr = parse_or(
            "LISTEN_ADDR",
            lookup("LISTEN_ADDR"),
            SocketAddr::from(([127, 0, 0, 1], 8000)),
        )?;

        Ok(Settings {
            database_url,
            database_max_connections,
            database_connect_timeout_secs,
            events_table,
            static_dir,
            listen_addr,
        })
    }
}

fn parse_or<T>(key: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match raw {
        None => Ok(default),
        Some(s) => s.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            key,
            reason: format!("'{}': {}", s, e),
        }),
    }
}

/// Table name is spliced into SQL text, so only plain identifiers are accepted.
fn validate_table_name(name: &str) -> Result<(), ConfigError> {
    let re = TABLE_NAME.get_or_init(|| {
        Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*(\.[A-Za-z_][A-Za-z0-9_]*)?$").expect("table name pattern compiles")
    });
    if re.is_match(name) {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            key: "EVENTS_TABLE",
            reason: format!("'{}' is not a valid identifier", name),
        })
    }
}
