// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Error types shared by the document model, the pipeline and the Strava client.

/// Crate error type.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The XML tree does not have the shape the model expects
    /// (missing element or attribute, bad nesting).
    #[error("Malformed document: {0}")]
    MalformedXml(#[from] strong_xml::XmlError),

    /// The tree is well-shaped but a value in it is unusable.
    #[error("Malformed document: {0}")]
    Malformed(String),

    #[error("Invalid number in {field}: {value:?}")]
    InvalidNumber { field: &'static str, value: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Strava API error: {0}")]
    StravaApi(String),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub const STRAVA_RATE_LIMIT: &'static str = "Rate limit exceeded";
    pub const STRAVA_TOKEN_ERROR: &'static str = "Invalid or expired access token";

    /// True for both structural and semantic document errors.
    pub fn is_malformed(&self) -> bool {
        matches!(self, AppError::MalformedXml(_) | AppError::Malformed(_))
    }

    /// Strava rejected the access token (expired, revoked or never valid).
    pub fn is_strava_token_error(&self) -> bool {
        match self {
            AppError::StravaApi(msg) => {
                let msg = msg.to_ascii_lowercase();
                msg.contains("token") || msg.contains("invalid") || msg.contains("unauthorized")
            }
            _ => false,
        }
    }

    pub fn is_rate_limited(&self) -> bool {
        matches!(self, AppError::StravaApi(msg) if msg == Self::STRAVA_RATE_LIMIT)
    }
}

/// Result type alias used across the crate
pub type Result<T> = std::result::Result<T, AppError>;
