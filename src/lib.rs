// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! tcx-collapse: merge strength-training TCX exports into one activity
//!
//! Workout apps export a session as one TCX activity per exercise. This
//! crate parses such a document, collapses its activities into a single
//! activity with one summary lap, writes the result back as TCX and uploads
//! it to Strava.

pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod time_utils;

pub use error::{AppError, Result};
pub use models::{TcxElement, TrainingCenterDatabase};
