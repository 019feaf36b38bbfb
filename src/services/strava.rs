// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Strava API client for authorizing and uploading activities.
//!
//! Handles:
//! - Authorization link for the OAuth code flow
//! - Code → token exchange
//! - Multipart TCX upload and upload status polling
//! - Rate limit / token error detection

use std::path::Path;

use reqwest::multipart::{Form, Part};
use serde::Deserialize;

use crate::error::{AppError, Result};

pub const STRAVA_API_BASE: &str = "https://www.strava.com/api/v3";
pub const STRAVA_OAUTH_BASE: &str = "https://www.strava.com/oauth";

/// Upload `data_type` for Training Center documents.
pub const TCX_DATA_TYPE: &str = "tcx";

pub const DEFAULT_SPORT_TYPE: &str = "WeightTraining";

/// Sport types offered when uploading.
pub const SPORT_TYPES: &[&str] = &[
    "AlpineSki",
    "BackcountrySki",
    "Badminton",
    "Canoeing",
    "Crossfit",
    "EBikeRide",
    "Elliptical",
    "EMountainBikeRide",
    "Golf",
    "GravelRide",
    "Handcycle",
    "HighIntensityIntervalTraining",
    "Hike",
    "IceSkate",
    "InlineSkate",
    "Kayaking",
    "Kitesurf",
    "MountainBikeRide",
    "NordicSki",
    "Pickleball",
    "Pilates",
    "Racquetball",
    "Ride",
    "RockClimbing",
    "RollerSki",
    "Rowing",
    "Run",
    "Sail",
    "Skateboard",
    "Snowboard",
    "Snowshoe",
    "Soccer",
    "Squash",
    "StairStepper",
    "StandUpPaddling",
    "Surfing",
    "Swim",
    "TableTennis",
    "Tennis",
    "TrailRun",
    "Velomobile",
    "VirtualRide",
    "VirtualRow",
    "VirtualRun",
    "Walk",
    "WeightTraining",
    "Wheelchair",
    "Windsurf",
    "Workout",
    "Yoga",
];

pub fn is_supported_sport_type(sport_type: &str) -> bool {
    SPORT_TYPES.contains(&sport_type)
}

/// Strava API client.
#[derive(Clone)]
pub struct StravaClient {
    http: reqwest::Client,
    base_url: String,
    oauth_url: String,
    client_id: String,
    client_secret: String,
}

impl StravaClient {
    /// Create a new Strava client with OAuth credentials.
    pub fn new(client_id: String, client_secret: String) -> Self {
        Self::with_base_urls(client_id, client_secret, STRAVA_API_BASE, STRAVA_OAUTH_BASE)
    }

    /// Create a client against other API/OAuth roots (mock servers).
    pub fn with_base_urls(
        client_id: String,
        client_secret: String,
        base_url: &str,
        oauth_url: &str,
    ) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            oauth_url: oauth_url.trim_end_matches('/').to_string(),
            client_id,
            client_secret,
        }
    }

    /// Link the user follows to grant `activity:write`.
    pub fn authorize_url(&self, redirect_uri: &str) -> String {
        format!(
            "{}/authorize?\
             client_id={}&\
             response_type=code&\
             redirect_uri={}&\
             approval_prompt=force&\
             scope=activity:write",
            self.oauth_url,
            urlencoding::encode(&self.client_id),
            urlencoding::encode(redirect_uri),
        )
    }

    /// Exchange an authorization code for tokens.
    pub async fn exchange_code(&self, code: &str) -> Result<TokenExchange> {
        let response = self
            .http
            .post(format!("{}/token", self.oauth_url))
            .form(&[
                ("client_id", self.client_id.as_str()),
                ("client_secret", self.client_secret.as_str()),
                ("code", code),
                ("grant_type", "authorization_code"),
            ])
            .send()
            .await
            .map_err(|e| AppError::StravaApi(format!("Token exchange failed: {}", e)))?;

        let tokens: TokenExchange = self.check_response_json(response).await?;
        tracing::info!(expires_at = tokens.expires_at, "Exchanged authorization code");
        Ok(tokens)
    }

    /// Upload a TCX file as a new activity.
    ///
    /// Strava processes uploads asynchronously; the returned status is the
    /// initial one. Use [`StravaClient::get_upload`] to follow it.
    pub async fn upload_activity(
        &self,
        access_token: &str,
        file_path: &Path,
        name: &str,
        sport_type: &str,
    ) -> Result<UploadStatus> {
        let bytes = tokio::fs::read(file_path).await?;
        let file_name = file_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "activity.tcx".to_string());

        let file = Part::bytes(bytes)
            .file_name(file_name)
            .mime_str("application/xml")
            .map_err(|e| AppError::StravaApi(format!("Invalid upload part: {}", e)))?;

        let form = Form::new()
            .part("file", file)
            .text("name", name.to_string())
            .text("sport_type", sport_type.to_string())
            .text("data_type", TCX_DATA_TYPE);

        let response = self
            .http
            .post(format!("{}/uploads", self.base_url))
            .bearer_auth(access_token)
            .multipart(form)
            .send()
            .await
            .map_err(|e| AppError::StravaApi(format!("Upload request failed: {}", e)))?;

        let status: UploadStatus = self.check_response_json(response).await?;
        tracing::info!(
            upload_id = status.id,
            status = %status.status,
            path = %file_path.display(),
            "Upload accepted"
        );
        Ok(status)
    }

    /// Get the processing status of an upload.
    pub async fn get_upload(&self, access_token: &str, upload_id: u64) -> Result<UploadStatus> {
        let response = self
            .http
            .get(format!("{}/uploads/{}", self.base_url, upload_id))
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| AppError::StravaApi(e.to_string()))?;

        self.check_response_json(response).await
    }

    /// Check response and parse JSON body.
    async fn check_response_json<T: for<'de> Deserialize<'de>>(
        &self,
        response: reqwest::Response,
    ) -> Result<T> {
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();

            // Rate limit
            if status.as_u16() == 429 {
                tracing::warn!("Strava rate limit hit (429)");
                return Err(AppError::StravaApi(AppError::STRAVA_RATE_LIMIT.to_string()));
            }

            // Unauthorized - token expired or missing activity:write
            if status.as_u16() == 401 {
                return Err(AppError::StravaApi(
                    AppError::STRAVA_TOKEN_ERROR.to_string(),
                ));
            }

            tracing::error!(status = %status, body = %body, "Strava request failed");
            return Err(AppError::StravaApi(format!("HTTP {}: {}", status, body)));
        }

        response
            .json()
            .await
            .map_err(|e| AppError::StravaApi(format!("JSON parse error: {}", e)))
    }
}

/// Token exchange response from Strava OAuth.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenExchange {
    pub access_token: String,
    pub refresh_token: String,
    pub expires_at: i64,
}

/// Upload status as reported by `POST /uploads` and `GET /uploads/{id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct UploadStatus {
    pub id: u64,
    #[serde(default)]
    pub external_id: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    pub status: String,
    #[serde(default)]
    pub activity_id: Option<u64>,
}

impl UploadStatus {
    /// Strava finished processing and created an activity.
    pub fn is_ready(&self) -> bool {
        self.activity_id.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authorize_url_encodes_redirect() {
        let client = StravaClient::new("12345".to_string(), "secret".to_string());
        let url = client.authorize_url("http://localhost:8501");

        assert!(url.starts_with("https://www.strava.com/oauth/authorize?"));
        assert!(url.contains("client_id=12345"));
        assert!(url.contains("redirect_uri=http%3A%2F%2Flocalhost%3A8501"));
        assert!(url.contains("response_type=code"));
        assert!(url.contains("scope=activity:write"));
    }

    #[test]
    fn test_sport_types() {
        assert!(is_supported_sport_type(DEFAULT_SPORT_TYPE));
        assert!(is_supported_sport_type("Yoga"));
        assert!(!is_supported_sport_type("weighttraining"));
    }
}
