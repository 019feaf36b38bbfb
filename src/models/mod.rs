// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Training Center document model.

pub mod activity;
pub mod database;
pub mod device;
pub mod lap;
pub mod quantity;
pub mod schema;
pub mod track;

pub use activity::Activity;
pub use database::TrainingCenterDatabase;
pub use device::{Author, Creator, Version};
pub use lap::Lap;
pub use quantity::Quantity;
pub use track::{Track, TrackPoint};

use strong_xml::{XmlRead, XmlWrite};

use crate::error::Result;

/// A model record that maps to one element of the typed XML tree.
pub trait TcxElement: Sized {
    /// The element's node in [`schema`].
    type Node<'a>: XmlRead<'a> + XmlWrite
    where
        Self: 'a;

    /// Build the record from a parsed node, validating values.
    fn from_node(node: Self::Node<'_>) -> Result<Self>;

    /// Borrowing view of the record as a node, ready to write.
    fn to_node(&self) -> Self::Node<'_>;

    /// Parse the record from an XML fragment whose root is this element.
    fn from_xml<'a>(xml: &'a str) -> Result<Self>
    where
        Self: 'a,
    {
        let node = <Self::Node<'a> as XmlRead<'a>>::from_str(xml)?;
        Self::from_node(node)
    }

    /// Serialize the record as an XML fragment.
    fn to_xml(&self) -> Result<String> {
        Ok(self.to_node().to_string()?)
    }
}
