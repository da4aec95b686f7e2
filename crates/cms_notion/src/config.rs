use std::env;

use cms_core::{Error, Result};

pub const ENV_API_KEY: &str = "NOTION_API_KEY";
pub const ENV_DATABASE_ID: &str = "NOTION_DATABASE_ID";

/// Upstream credentials, fixed at process start. Validated before the
/// first call instead of surfacing as an opaque upstream failure later.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub database_id: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            api_key: require(ENV_API_KEY)?,
            database_id: require(ENV_DATABASE_ID)?,
        })
    }
}

fn require(name: &str) -> Result<String> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(Error::Config(format!("{name} must be set"))),
    }
}
