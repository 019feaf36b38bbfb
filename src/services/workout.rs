// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Workout file processing.
//!
//! Handles the per-file workflow:
//! 1. Read and parse the exported TCX document
//! 2. Collapse its activities into one
//! 3. Write the collapsed document to the output directory
//! 4. Upload it to Strava (optional)
//!
//! Files are processed one at a time; a failure only affects its own file.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{AppError, Result};
use crate::models::TrainingCenterDatabase;
use crate::services::strava::{StravaClient, UploadStatus};

/// Collapses workout files into an output directory.
pub struct WorkoutProcessor {
    output_dir: PathBuf,
}

/// What to call the uploaded activity and with which token.
#[derive(Debug, Clone)]
pub struct UploadRequest {
    pub access_token: String,
    pub name: String,
    pub sport_type: String,
}

/// Result of collapsing one file.
#[derive(Debug, Clone)]
pub struct ProcessedWorkout {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Number of activities merged into the output
    pub activities_merged: usize,
    /// Track points in the collapsed lap
    pub track_points: usize,
}

/// Result of collapsing and uploading one file.
#[derive(Debug, Clone)]
pub struct UploadedWorkout {
    pub workout: ProcessedWorkout,
    pub upload: UploadStatus,
}

/// Outcome for one input of a batch.
#[derive(Debug)]
pub struct FileReport {
    pub input: PathBuf,
    pub outcome: Result<FileOutcome>,
}

#[derive(Debug)]
pub enum FileOutcome {
    Converted(ProcessedWorkout),
    Uploaded(UploadedWorkout),
}

impl WorkoutProcessor {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Collapse one file and write it under the output directory with the
    /// same file name.
    pub fn collapse_file(&self, input: &Path) -> Result<ProcessedWorkout> {
        tracing::info!(path = %input.display(), "Processing workout file");

        let file_name = input.file_name().ok_or_else(|| {
            AppError::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("{} has no file name", input.display()),
            ))
        })?;

        let database = TrainingCenterDatabase::from_file(input)?;
        let activities_merged = database.activities.len();
        let collapsed = database.collapse_activities()?;

        fs::create_dir_all(&self.output_dir)?;
        let output = self.output_dir.join(file_name);
        collapsed.to_file(&output)?;

        Ok(ProcessedWorkout {
            input: input.to_path_buf(),
            output,
            activities_merged,
            track_points: collapsed.track_point_count(),
        })
    }

    /// Collapse one file and upload the result.
    pub async fn upload_file(
        &self,
        strava: &StravaClient,
        request: &UploadRequest,
        input: &Path,
    ) -> Result<UploadedWorkout> {
        let workout = self.collapse_file(input)?;
        let upload = strava
            .upload_activity(
                &request.access_token,
                &workout.output,
                &request.name,
                &request.sport_type,
            )
            .await?;

        Ok(UploadedWorkout { workout, upload })
    }

    /// Process every input in order, uploading when `upload` is given.
    ///
    /// Returns one report per input, in input order.
    pub async fn process_all(
        &self,
        inputs: &[PathBuf],
        upload: Option<(&StravaClient, &UploadRequest)>,
    ) -> Vec<FileReport> {
        let mut reports = Vec::with_capacity(inputs.len());

        for input in inputs {
            let outcome = match upload {
                Some((strava, request)) => self
                    .upload_file(strava, request, input)
                    .await
                    .map(FileOutcome::Uploaded),
                None => self.collapse_file(input).map(FileOutcome::Converted),
            };

            if let Err(e) = &outcome {
                tracing::warn!(path = %input.display(), error = %e, "Failed to process workout file");
            }

            reports.push(FileReport {
                input: input.clone(),
                outcome,
            });
        }

        reports
    }
}
