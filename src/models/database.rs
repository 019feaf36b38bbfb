// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Document root, file I/O and the activity collapse.

use std::fs;
use std::path::Path;

use super::lap::{INTENSITY_ACTIVE, TRIGGER_MANUAL};
use super::schema::TrainingCenterDatabaseNode;
use super::{Activity, Author, Lap, Quantity, TcxElement, Track};
use crate::error::{AppError, Result};

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

/// Root of a Training Center document.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingCenterDatabase {
    pub author: Author,
    pub activities: Vec<Activity>,
}

impl TrainingCenterDatabase {
    pub fn new(author: Author, activities: Vec<Activity>) -> Self {
        Self { author, activities }
    }

    /// Read and parse a document from disk.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let xml = fs::read_to_string(path.as_ref())?;
        Self::from_xml(&xml)
    }

    /// Write the document, with an XML declaration, to `path`.
    ///
    /// Creates or overwrites the file.
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let xml = self.to_xml()?;
        fs::write(path.as_ref(), format!("{XML_DECLARATION}\n{xml}\n"))?;
        tracing::info!(path = %path.as_ref().display(), "Wrote training center document");
        Ok(())
    }

    pub fn track_point_count(&self) -> usize {
        self.activities
            .iter()
            .flat_map(|a| &a.laps)
            .map(Lap::track_point_count)
            .sum()
    }

    /// Merge all activities into one activity holding one synthetic lap.
    ///
    /// Only the first lap of each activity is used. Time, distance and
    /// calories are summed and rounded half-to-even; the track points of the
    /// selected laps are concatenated in document order into one track.
    /// Sport, id and creator come from the first activity.
    ///
    /// The receiver is left untouched.
    pub fn collapse_activities(&self) -> Result<Self> {
        let first = self
            .activities
            .first()
            .ok_or_else(|| AppError::Malformed("Document has no activities".to_string()))?;

        let laps = self
            .activities
            .iter()
            .enumerate()
            .map(|(index, activity)| {
                if activity.laps.len() > 1 {
                    tracing::debug!(
                        activity = index,
                        ignored = activity.laps.len() - 1,
                        "Ignoring laps after the first"
                    );
                }
                activity.laps.first().ok_or_else(|| {
                    AppError::Malformed(format!("Activity {} ({}) has no laps", index, activity.id))
                })
            })
            .collect::<Result<Vec<&Lap>>>()?;

        let total_time_seconds =
            Quantity::sum_rounded("TotalTimeSeconds", laps.iter().map(|l| &l.total_time_seconds))?;
        let distance_meters =
            Quantity::sum_rounded("DistanceMeters", laps.iter().map(|l| &l.distance_meters))?;
        let calories = Quantity::sum_rounded("Calories", laps.iter().map(|l| &l.calories))?;

        let points = laps
            .iter()
            .flat_map(|lap| &lap.tracks)
            .flat_map(|track| &track.points)
            .cloned()
            .collect::<Vec<_>>();

        tracing::debug!(
            activities = self.activities.len(),
            track_points = points.len(),
            total_time_seconds = %total_time_seconds,
            "Collapsed activities"
        );

        let lap = Lap {
            start_time: laps[0].start_time,
            total_time_seconds,
            distance_meters,
            calories,
            intensity: INTENSITY_ACTIVE.to_string(),
            trigger_method: TRIGGER_MANUAL.to_string(),
            tracks: vec![Track::new(points)],
        };

        Ok(Self {
            author: self.author.clone(),
            activities: vec![Activity {
                sport: first.sport.clone(),
                id: first.id.clone(),
                laps: vec![lap],
                creator: first.creator.clone(),
            }],
        })
    }
}

impl TcxElement for TrainingCenterDatabase {
    type Node<'a> = TrainingCenterDatabaseNode<'a>;

    fn from_node(node: TrainingCenterDatabaseNode<'_>) -> Result<Self> {
        let author = node
            .author
            .ok_or_else(|| AppError::Malformed("Missing Author element".to_string()))?;

        let activities = node
            .activities
            .into_iter()
            .flat_map(|wrapper| wrapper.activities)
            .chain(node.bare_activities)
            .map(Activity::from_node)
            .collect::<Result<Vec<_>>>()?;

        tracing::debug!(activities = activities.len(), "Parsed training center document");

        Ok(Self {
            author: Author::from_node(author)?,
            activities,
        })
    }

    fn to_node(&self) -> TrainingCenterDatabaseNode<'_> {
        TrainingCenterDatabaseNode::with_namespaces(
            self.activities.iter().map(Activity::to_node).collect(),
            self.author.to_node(),
        )
    }
}
