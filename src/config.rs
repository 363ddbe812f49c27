use crate::error::{Error, Result};
use dotenvy::dotenv;
use std::env;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub server_address: String,
    pub database_url: String,
    pub database_max_connections: u32,
    pub rate_provider_url: String,
    pub rate_provider_timeout: Duration,
    pub log_format: LogFormat,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        Ok(Self {
            server_address: get_env_or("SERVER_ADDRESS", "127.0.0.1:5000"),
            database_url: get_env_or("DATABASE_URL", "sqlite://database.db"),
            database_max_connections: get_env_parse_or("DATABASE_MAX_CONNECTIONS", 5)?,
            rate_provider_url: get_env_or("RATE_PROVIDER_URL", "https://api.frankfurter.app"),
            rate_provider_timeout: Duration::from_secs(get_env_parse_or(
                "RATE_PROVIDER_TIMEOUT_SECS",
                5,
            )?),
            log_format: parse_log_format(&get_env_or("LOG_FORMAT", "text"))?,
        })
    }
}

fn get_env_or(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

fn get_env_parse_or<T>(name: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) => raw
            .parse()
            .map_err(|e| Error::Config(format!("Invalid value for {}: {}", name, e))),
        Err(_) => Ok(default),
    }
}

fn parse_log_format(raw: &str) -> Result<LogFormat> {
    match raw.to_ascii_lowercase().as_str() {
        "text" | "" => Ok(LogFormat::Text),
        "json" => Ok(LogFormat::Json),
        other => Err(Error::Config(format!("Invalid value for LOG_FORMAT: {}", other))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_or_falls_back_when_unset() {
        let value: u32 = get_env_parse_or("HOUSEHOLD_MONEY_TEST_UNSET_VAR", 7).unwrap();
        assert_eq!(value, 7);
    }

    #[test]
    fn parse_or_rejects_garbage() {
        env::set_var("HOUSEHOLD_MONEY_TEST_BAD_NUMBER", "five");
        let err = get_env_parse_or::<u64>("HOUSEHOLD_MONEY_TEST_BAD_NUMBER", 5).unwrap_err();
        assert!(matches!(err, Error::Config(msg) if msg.contains("HOUSEHOLD_MONEY_TEST_BAD_NUMBER")));
    }

    #[test]
    fn log_format_accepts_known_values() {
        assert_eq!(parse_log_format("JSON").unwrap(), LogFormat::Json);
        assert_eq!(parse_log_format("text").unwrap(), LogFormat::Text);
        assert!(parse_log_format("xml").is_err());
    }
}
