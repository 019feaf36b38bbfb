// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Track points and tracks.

use std::borrow::Cow;

use chrono::{DateTime, FixedOffset};

use super::schema::{TrackNode, TrackpointNode};
use super::{Quantity, TcxElement};
use crate::error::Result;
use crate::time_utils::{format_tcx_timestamp, parse_tcx_timestamp};

/// A single timestamped distance sample.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackPoint {
    pub time: DateTime<FixedOffset>,
    /// Distance in meters
    pub distance_meters: Quantity,
}

impl TrackPoint {
    pub fn new(time: DateTime<FixedOffset>, distance_meters: impl Into<Quantity>) -> Self {
        Self {
            time,
            distance_meters: distance_meters.into(),
        }
    }
}

impl TcxElement for TrackPoint {
    type Node<'a> = TrackpointNode<'a>;

    fn from_node(node: TrackpointNode<'_>) -> Result<Self> {
        Ok(Self {
            time: parse_tcx_timestamp(&node.time)?,
            distance_meters: Quantity::from(node.distance_meters.as_ref()),
        })
    }

    fn to_node(&self) -> TrackpointNode<'_> {
        TrackpointNode {
            time: Cow::Owned(format_tcx_timestamp(&self.time)),
            distance_meters: self.distance_meters.as_text(),
        }
    }
}

/// Ordered sequence of track points, in source order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Track {
    pub points: Vec<TrackPoint>,
}

impl Track {
    pub fn new(points: Vec<TrackPoint>) -> Self {
        Self { points }
    }
}

impl TcxElement for Track {
    type Node<'a> = TrackNode<'a>;

    fn from_node(node: TrackNode<'_>) -> Result<Self> {
        let points = node
            .points
            .into_iter()
            .map(TrackPoint::from_node)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { points })
    }

    fn to_node(&self) -> TrackNode<'_> {
        TrackNode {
            points: self.points.iter().map(TrackPoint::to_node).collect(),
        }
    }
}
