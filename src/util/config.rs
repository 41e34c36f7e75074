use std::env;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Reads `name` from the environment, falling back to `default` when unset.
pub fn var_or(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

fn parsed_or<T: FromStr>(name: &str, default: &str) -> Result<T> {
    let raw = var_or(name, default);
    raw.parse::<T>()
        .map_err(|_| Error::Config(format!("{}={:?} is not a valid value", name, raw)))
}

/// Process configuration, taken from the environment (and `.env`, if the
/// caller loaded one first).
#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub pool_size:    u32,
    pub http_host:    String,
    pub http_port:    u16,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Config {
            database_url: var_or("DOCKET_DATABASE_URL", "docket.sqlite3"),
            pool_size:    parsed_or("DOCKET_DB_POOL_SIZE", "4")?,
            http_host:    var_or("DOCKET_HTTP_HOST", "localhost"),
            http_port:    parsed_or("DOCKET_HTTP_PORT", "8080")?,
        })
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.http_host, self.http_port)
    }
}

#[test]
fn test_var_or_prefers_environment() {
    env::set_var("DOCKET_TEST_VAR_OR_SET", "BAR");
    assert_eq!(var_or("DOCKET_TEST_VAR_OR_SET", "BAZ"), "BAR");
    assert_eq!(var_or("DOCKET_TEST_VAR_OR_UNSET", "BAZ"), "BAZ");
}

#[test]
fn test_parsed_or_rejects_garbage() {
    env::set_var("DOCKET_TEST_BAD_PORT", "eighty");
    match parsed_or::<u16>("DOCKET_TEST_BAD_PORT", "8080") {
        Err(Error::Config(msg)) => assert!(msg.contains("DOCKET_TEST_BAD_PORT")),
        other => panic!("unexpected: {:?}", other),
    }
}

#[test]
fn test_listen_addr() {
    let config = Config {
        database_url: ":memory:".to_string(),
        pool_size: 1,
        http_host: "localhost".to_string(),
        http_port: 8080,
    };

    assert_eq!(config.listen_addr(), "localhost:8080");
}
