// Runtime configuration read from the environment (and `.env` when present).

use std::env;
use std::net::SocketAddr;
use thiserror::Error;

pub const DEFAULT_HTTP_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("LEAVE_HTTP_ADDR is not a socket address: {0}")]
    InvalidAddr(String),

    #[error("LEAVE_SEED_DEMO_DATA must be true or false, got {0}")]
    InvalidFlag(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub http_addr: SocketAddr,
    pub seed_demo_data: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let addr = lookup("LEAVE_HTTP_ADDR").unwrap_or_else(|| DEFAULT_HTTP_ADDR.to_string());
        let http_addr = addr.parse().map_err(|_| ConfigError::InvalidAddr(addr))?;

        let seed_demo_data = match lookup("LEAVE_SEED_DEMO_DATA") {
            None => true,
            Some(flag) => match flag.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" => true,
                "0" | "false" | "no" => false,
                _ => return Err(ConfigError::InvalidFlag(flag)),
            },
        };

        Ok(Self {
            http_addr,
            seed_demo_data,
        })
    }
}
