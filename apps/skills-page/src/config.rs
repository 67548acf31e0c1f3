use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::dom::PREP_EMAIL_PATH;

/// Page configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub skills_catalog: PathBuf,
    pub app_base_url: String,
    pub reveal_increment: usize,
    pub http_timeout: Duration,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let skills_catalog = lookup("SKILLS_CATALOG")
            .context("Required environment variable 'SKILLS_CATALOG' is not set")?;

        let reveal_increment = lookup("REVEAL_INCREMENT")
            .unwrap_or_else(|| "10".to_string())
            .parse::<usize>()
            .context("REVEAL_INCREMENT must be a positive integer")?;
        if reveal_increment == 0 {
            anyhow::bail!("REVEAL_INCREMENT must be greater than 0");
        }

        let timeout_secs = lookup("HTTP_TIMEOUT_SECS")
            .unwrap_or_else(|| "30".to_string())
            .parse::<u64>()
            .context("HTTP_TIMEOUT_SECS must be a whole number of seconds")?;

        Ok(Config {
            skills_catalog: PathBuf::from(skills_catalog),
            app_base_url: lookup("APP_BASE_URL")
                .unwrap_or_else(|| "http://127.0.0.1:5000".to_string()),
            reveal_increment,
            http_timeout: Duration::from_secs(timeout_secs),
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }

    /// Absolute URL of the email preparation endpoint.
    pub fn prep_email_url(&self) -> String {
        format!("{}{}", self.app_base_url.trim_end_matches('/'), PREP_EMAIL_PATH)
    }
}
