//! Configuration loading from TOML with environment variable resolution.
//!
//! Reads `config.toml` and deserializes into strongly-typed structs.
//! Credentials are referenced by env-var name in the config and resolved
//! at runtime via `std::env::var`.

use anyhow::{ensure, Context, Result};
use secrecy::SecretString;
use serde::Deserialize;
use std::fs;
use std::time::Duration;

fn default_timeout_secs() -> u64 {
    30
}

fn default_hands() -> u32 {
    1000
}

/// Top-level application configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub base_url: String,
    pub username_env: String,
    pub password_env: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SessionConfig {
    /// Number of hands to play before closing the session.
    #[serde(default = "default_hands")]
    pub hands: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            hands: default_hands(),
        }
    }
}

impl ServerConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Resolve the account username from the environment.
    pub fn username(&self) -> Result<String> {
        AppConfig::resolve_env(&self.username_env)
    }

    /// Resolve the account password from the environment.
    pub fn password(&self) -> Result<SecretString> {
        AppConfig::resolve_env(&self.password_env).map(SecretString::new)
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &str) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {path}"))?;
        Self::parse(&contents).with_context(|| format!("Failed to parse config file: {path}"))
    }

    /// Parse and validate configuration from TOML text.
    pub fn parse(contents: &str) -> Result<Self> {
        let config: AppConfig = toml::from_str(contents)?;
        ensure!(config.session.hands > 0, "session.hands must be at least 1");
        ensure!(!config.server.base_url.is_empty(), "server.base_url must not be empty");
        Ok(config)
    }

    /// Resolve an environment variable name to its value.
    pub fn resolve_env(env_name: &str) -> Result<String> {
        std::env::var(env_name)
            .with_context(|| format!("Environment variable not set: {env_name}"))
    }
}
