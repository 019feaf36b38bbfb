// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - file pipeline and Strava client.

pub mod strava;
pub mod workout;

pub use strava::{StravaClient, TokenExchange, UploadStatus};
pub use workout::{FileOutcome, FileReport, UploadRequest, WorkoutProcessor};
