// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Lap: a timed segment with aggregate stats and its tracks.

use std::borrow::Cow;

use chrono::{DateTime, FixedOffset};

use super::schema::LapNode;
use super::{Quantity, TcxElement, Track};
use crate::error::Result;
use crate::time_utils::{format_tcx_timestamp, parse_tcx_timestamp};

pub const INTENSITY_ACTIVE: &str = "Active";
pub const TRIGGER_MANUAL: &str = "Manual";

#[derive(Debug, Clone, PartialEq)]
pub struct Lap {
    /// From the `StartTime` attribute
    pub start_time: DateTime<FixedOffset>,
    pub total_time_seconds: Quantity,
    pub distance_meters: Quantity,
    pub calories: Quantity,
    /// "Active" or "Resting"
    pub intensity: String,
    /// "Manual", "Distance", "Location", "Time" or "HeartRate"
    pub trigger_method: String,
    pub tracks: Vec<Track>,
}

impl Lap {
    pub fn track_point_count(&self) -> usize {
        self.tracks.iter().map(|t| t.points.len()).sum()
    }
}

impl TcxElement for Lap {
    type Node<'a> = LapNode<'a>;

    fn from_node(node: LapNode<'_>) -> Result<Self> {
        let tracks = node
            .tracks
            .into_iter()
            .map(Track::from_node)
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            start_time: parse_tcx_timestamp(&node.start_time)?,
            total_time_seconds: Quantity::from(node.total_time_seconds.value.as_ref()),
            distance_meters: Quantity::from(node.distance_meters.value.as_ref()),
            calories: Quantity::from(node.calories.value.as_ref()),
            intensity: node.intensity.value.trim().to_string(),
            trigger_method: node.trigger_method.value.trim().to_string(),
            tracks,
        })
    }

    fn to_node(&self) -> LapNode<'_> {
        LapNode {
            start_time: Cow::Owned(format_tcx_timestamp(&self.start_time)),
            total_time_seconds: self.total_time_seconds.as_text().into(),
            distance_meters: self.distance_meters.as_text().into(),
            calories: self.calories.as_text().into(),
            intensity: self.intensity.as_str().into(),
            trigger_method: self.trigger_method.as_str().into(),
            tracks: self.tracks.iter().map(Track::to_node).collect(),
        }
    }
}
