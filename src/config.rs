// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application configuration loaded from environment variables.
//!
//! A `.env` file in the working directory is honored. Strava credentials are
//! optional at load time so that offline conversion works without them; the
//! accessors fail when a command actually needs them.

use std::env;
use std::path::PathBuf;

use crate::services::strava::{is_supported_sport_type, DEFAULT_SPORT_TYPE};

pub const DEFAULT_REDIRECT_URI: &str = "http://localhost:8501";
pub const DEFAULT_OUTPUT_DIR: &str = "output";
pub const DEFAULT_ACTIVITY_NAME: &str = "StrongLifts 5x5";

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Strava OAuth client ID (public)
    pub strava_client_id: Option<String>,
    /// Strava OAuth client secret
    pub strava_client_secret: Option<String>,
    /// Redirect URI registered with the Strava application
    pub redirect_uri: String,
    /// Directory collapsed documents are written to
    pub output_dir: PathBuf,
    /// Default name for uploaded activities
    pub activity_name: String,
    /// Default Strava sport type for uploads
    pub sport_type: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            strava_client_id: None,
            strava_client_secret: None,
            redirect_uri: DEFAULT_REDIRECT_URI.to_string(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            activity_name: DEFAULT_ACTIVITY_NAME.to_string(),
            sport_type: DEFAULT_SPORT_TYPE.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let sport_type = env::var("SPORT_TYPE").unwrap_or_else(|_| DEFAULT_SPORT_TYPE.to_string());
        if !is_supported_sport_type(&sport_type) {
            return Err(ConfigError::Invalid {
                var: "SPORT_TYPE",
                value: sport_type,
            });
        }

        Ok(Self {
            strava_client_id: non_empty_var("STRAVA_CLIENT_ID"),
            strava_client_secret: non_empty_var("STRAVA_CLIENT_SECRET"),
            redirect_uri: env::var("STRAVA_REDIRECT_URI")
                .unwrap_or_else(|_| DEFAULT_REDIRECT_URI.to_string()),
            output_dir: env::var("OUTPUT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_OUTPUT_DIR)),
            activity_name: env::var("ACTIVITY_NAME")
                .unwrap_or_else(|_| DEFAULT_ACTIVITY_NAME.to_string()),
            sport_type,
        })
    }

    pub fn strava_client_id(&self) -> Result<&str, ConfigError> {
        self.strava_client_id
            .as_deref()
            .ok_or(ConfigError::Missing("STRAVA_CLIENT_ID"))
    }

    pub fn strava_client_secret(&self) -> Result<&str, ConfigError> {
        self.strava_client_secret
            .as_deref()
            .ok_or(ConfigError::Missing("STRAVA_CLIENT_SECRET"))
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {var}: {value}")]
    Invalid { var: &'static str, value: String },
}
