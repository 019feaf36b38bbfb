// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Activity: one recorded session.

use std::borrow::Cow;

use super::schema::ActivityNode;
use super::{Creator, Lap, TcxElement};
use crate::error::Result;

#[derive(Debug, Clone, PartialEq)]
pub struct Activity {
    /// `Sport` attribute ("Running", "Biking" or "Other")
    pub sport: String,
    /// Activity identifier, usually the start timestamp
    pub id: String,
    pub laps: Vec<Lap>,
    pub creator: Option<Creator>,
}

impl TcxElement for Activity {
    type Node<'a> = ActivityNode<'a>;

    fn from_node(node: ActivityNode<'_>) -> Result<Self> {
        let laps = node
            .laps
            .into_iter()
            .map(Lap::from_node)
            .collect::<Result<Vec<_>>>()?;
        let creator = node.creator.map(Creator::from_node).transpose()?;

        Ok(Self {
            sport: node.sport.trim().to_string(),
            id: node.id.value.trim().to_string(),
            laps,
            creator,
        })
    }

    fn to_node(&self) -> ActivityNode<'_> {
        ActivityNode {
            sport: Cow::Borrowed(&self.sport),
            id: self.id.as_str().into(),
            laps: self.laps.iter().map(Lap::to_node).collect(),
            creator: self.creator.as_ref().map(Creator::to_node),
        }
    }
}
