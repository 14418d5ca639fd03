//! Configuration module for the social backend.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::net::{AddrParseError, SocketAddr};
use std::path::PathBuf;

/// Output format for log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl LogFormat {
    fn parse(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => LogFormat::Json,
            _ => LogFormat::Pretty,
        }
    }
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding users.json, posts.json and requests.json
    pub data_dir: PathBuf,
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Human-readable or JSON log lines
    pub log_format: LogFormat,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, AddrParseError> {
        dotenvy::dotenv().ok();

        let data_dir = env::var("SOCIAL_DATA_DIR")
            .unwrap_or_else(|_| "./data".to_string())
            .into();

        let bind_addr = env::var("SOCIAL_BIND_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:5000".to_string())
            .parse()?;

        let log_level = env::var("SOCIAL_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let log_format = env::var("SOCIAL_LOG_FORMAT")
            .map(|s| LogFormat::parse(&s))
            .unwrap_or(LogFormat::Pretty);

        Ok(Self {
            data_dir,
            bind_addr,
            log_level,
            log_format,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_env() {
        // Env vars are process-global, so defaults and overrides share one test.
        env::remove_var("SOCIAL_DATA_DIR");
        env::remove_var("SOCIAL_BIND_ADDR");
        env::remove_var("SOCIAL_LOG_LEVEL");
        env::remove_var("SOCIAL_LOG_FORMAT");

        let config = Config::from_env().unwrap();

        assert_eq!(config.data_dir, PathBuf::from("./data"));
        assert_eq!(config.bind_addr.to_string(), "0.0.0.0:5000");
        assert_eq!(config.log_level, "info");
        assert_eq!(config.log_format, LogFormat::Pretty);

        env::set_var("SOCIAL_BIND_ADDR", "not-an-address");
        assert!(Config::from_env().is_err());

        env::set_var("SOCIAL_BIND_ADDR", "127.0.0.1:9000");
        env::set_var("SOCIAL_LOG_FORMAT", "JSON");
        let config = Config::from_env().unwrap();
        assert_eq!(config.bind_addr.port(), 9000);
        assert_eq!(config.log_format, LogFormat::Json);

        env::remove_var("SOCIAL_BIND_ADDR");
        env::remove_var("SOCIAL_LOG_FORMAT");
    }

    #[test]
    fn test_log_format_parse() {
        assert_eq!(LogFormat::parse("json"), LogFormat::Json);
        assert_eq!(LogFormat::parse(" Json "), LogFormat::Json);
        assert_eq!(LogFormat::parse("pretty"), LogFormat::Pretty);
        assert_eq!(LogFormat::parse("whatever"), LogFormat::Pretty);
    }
}
