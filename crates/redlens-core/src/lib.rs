//! Shared configuration for the redlens workspace.
//!
//! All settings are env-driven (`REDLENS_*` plus `ANTHROPIC_API_KEY`); there
//! is no config file. [`load_app_config`] loads `.env` first via dotenvy.

mod app_config;
mod config;

use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
