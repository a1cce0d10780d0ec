//! Configuration module for the to-do backend.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to SQLite database file
    pub db_path: PathBuf,
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Human-readable or JSON log lines
    pub log_format: LogFormat,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, String> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from any key lookup; unset keys take their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, String> {
        let db_path = lookup("TODO_DB_PATH")
            .unwrap_or_else(|| "./data/todos.sqlite".to_string())
            .into();

        let raw_addr = lookup("TODO_BIND_ADDR").unwrap_or_else(|| "127.0.0.1:4000".to_string());
        let bind_addr = raw_addr
            .parse()
            .map_err(|e| format!("Invalid TODO_BIND_ADDR '{}': {}", raw_addr, e))?;

        let log_level = lookup("TODO_LOG_LEVEL").unwrap_or_else(|| "info".to_string());

        let log_format = match lookup("TODO_LOG_FORMAT").as_deref() {
            Some("json") => LogFormat::Json,
            _ => LogFormat::Text,
        };

        Ok(Self {
            db_path,
            bind_addr,
            log_level,
            log_format,
        })
    }
}
