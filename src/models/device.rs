// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Device and application metadata: `Version`, `Creator` and `Author`.

use std::borrow::Cow;

use super::schema::{AuthorNode, BuildNode, CreatorNode, VersionNode, APPLICATION_TYPE, DEVICE_TYPE};
use super::TcxElement;
use crate::error::{AppError, Result};

/// Four-part version number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Version {
    pub version_major: u32,
    pub version_minor: u32,
    pub build_major: u32,
    pub build_minor: u32,
}

impl Version {
    pub fn new(version_major: u32, version_minor: u32, build_major: u32, build_minor: u32) -> Self {
        Self {
            version_major,
            version_minor,
            build_major,
            build_minor,
        }
    }
}

fn parse_version_part(field: &str, value: &str) -> Result<u32> {
    value
        .trim()
        .parse()
        .map_err(|_| AppError::Malformed(format!("{field} must be a non-negative integer, got {value:?}")))
}

impl TcxElement for Version {
    type Node<'a> = VersionNode<'a>;

    fn from_node(node: VersionNode<'_>) -> Result<Self> {
        Ok(Self {
            version_major: parse_version_part("VersionMajor", &node.version_major)?,
            version_minor: parse_version_part("VersionMinor", &node.version_minor)?,
            build_major: parse_version_part("BuildMajor", &node.build_major)?,
            build_minor: parse_version_part("BuildMinor", &node.build_minor)?,
        })
    }

    fn to_node(&self) -> VersionNode<'_> {
        VersionNode {
            version_major: Cow::Owned(self.version_major.to_string()),
            version_minor: Cow::Owned(self.version_minor.to_string()),
            build_major: Cow::Owned(self.build_major.to_string()),
            build_minor: Cow::Owned(self.build_minor.to_string()),
        }
    }
}

/// The device that recorded an activity.
#[derive(Debug, Clone, PartialEq)]
pub struct Creator {
    pub name: String,
    pub unit_id: String,
    pub product_id: String,
    pub version: Version,
}

impl TcxElement for Creator {
    type Node<'a> = CreatorNode<'a>;

    fn from_node(node: CreatorNode<'_>) -> Result<Self> {
        Ok(Self {
            name: node.name.value.trim().to_string(),
            unit_id: node.unit_id.value.trim().to_string(),
            product_id: node.product_id.value.trim().to_string(),
            version: Version::from_node(node.version)?,
        })
    }

    fn to_node(&self) -> CreatorNode<'_> {
        CreatorNode {
            kind: Some(Cow::Borrowed(DEVICE_TYPE)),
            name: self.name.as_str().into(),
            unit_id: self.unit_id.as_str().into(),
            product_id: self.product_id.as_str().into(),
            version: self.version.to_node(),
        }
    }
}

/// The application that wrote the document.
#[derive(Debug, Clone, PartialEq)]
pub struct Author {
    pub name: String,
    pub build: Version,
    pub lang_id: String,
    pub part_number: String,
}

impl TcxElement for Author {
    type Node<'a> = AuthorNode<'a>;

    fn from_node(node: AuthorNode<'_>) -> Result<Self> {
        Ok(Self {
            name: node.name.value.trim().to_string(),
            build: Version::from_node(node.build.version)?,
            lang_id: node.lang_id.value.trim().to_string(),
            part_number: node.part_number.value.trim().to_string(),
        })
    }

    fn to_node(&self) -> AuthorNode<'_> {
        AuthorNode {
            kind: Some(Cow::Borrowed(APPLICATION_TYPE)),
            name: self.name.as_str().into(),
            build: BuildNode {
                version: self.build.to_node(),
            },
            lang_id: self.lang_id.as_str().into(),
            part_number: self.part_number.as_str().into(),
        }
    }
}
