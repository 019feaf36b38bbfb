// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Typed XML tree for Training Center documents.
//!
//! One node type per element the model reads or writes. Node fields borrow
//! from the input text on read and from the model on write. Elements and
//! attributes not declared here (extensions, heart rate, notes) are skipped.
//!
//! The derive writes `child` fields before `flatten_text` fields, so any
//! element that mixes text leaves with child elements declares every leaf
//! as its own text node. Field order is then the written element order.

use std::borrow::Cow;
use strong_xml::{XmlRead, XmlWrite};

pub const TCX_NAMESPACE: &str = "http://www.garmin.com/xmlschemas/TrainingCenterDatabase/v2";
pub const XSI_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema-instance";
pub const USER_PROFILE_NAMESPACE: &str = "http://www.garmin.com/xmlschemas/UserProfile/v2";
pub const ACTIVITY_EXTENSION_NAMESPACE: &str =
    "http://www.garmin.com/xmlschemas/ActivityExtension/v2";
pub const PROFILE_EXTENSION_NAMESPACE: &str =
    "http://www.garmin.com/xmlschemas/ProfileExtension/v1";
pub const ACTIVITY_GOALS_NAMESPACE: &str = "http://www.garmin.com/xmlschemas/ActivityGoals/v1";
pub const SCHEMA_LOCATION: &str = "http://www.garmin.com/xmlschemas/TrainingCenterDatabase/v2 \
     http://www.garmin.com/xmlschemas/TrainingCenterDatabasev2.xsd";

pub const DEVICE_TYPE: &str = "Device_t";
pub const APPLICATION_TYPE: &str = "Application_t";

/// Declare a leaf element holding only text.
macro_rules! text_element {
    ($name:ident, $tag:tt) => {
        #[derive(Debug, Clone, PartialEq, XmlRead, XmlWrite)]
        #[xml(tag = $tag)]
        pub struct $name<'a> {
            #[xml(text)]
            pub value: Cow<'a, str>,
        }

        impl<'a> From<Cow<'a, str>> for $name<'a> {
            fn from(value: Cow<'a, str>) -> Self {
                Self { value }
            }
        }

        impl<'a> From<&'a str> for $name<'a> {
            fn from(value: &'a str) -> Self {
                Self {
                    value: Cow::Borrowed(value),
                }
            }
        }
    };
}

text_element!(IdNode, "Id");
text_element!(TotalTimeSecondsNode, "TotalTimeSeconds");
text_element!(DistanceMetersNode, "DistanceMeters");
text_element!(CaloriesNode, "Calories");
text_element!(IntensityNode, "Intensity");
text_element!(TriggerMethodNode, "TriggerMethod");
text_element!(NameNode, "Name");
text_element!(UnitIdNode, "UnitId");
text_element!(ProductIdNode, "ProductID");
text_element!(LangIdNode, "LangID");
text_element!(PartNumberNode, "PartNumber");

#[derive(Debug, Clone, PartialEq, XmlRead, XmlWrite)]
#[xml(tag = "Trackpoint")]
pub struct TrackpointNode<'a> {
    #[xml(flatten_text = "Time")]
    pub time: Cow<'a, str>,
    #[xml(flatten_text = "DistanceMeters")]
    pub distance_meters: Cow<'a, str>,
}

#[derive(Debug, Clone, PartialEq, XmlRead, XmlWrite)]
#[xml(tag = "Track")]
pub struct TrackNode<'a> {
    #[xml(child = "Trackpoint")]
    pub points: Vec<TrackpointNode<'a>>,
}

#[derive(Debug, Clone, PartialEq, XmlRead, XmlWrite)]
#[xml(tag = "Lap")]
pub struct LapNode<'a> {
    #[xml(attr = "StartTime")]
    pub start_time: Cow<'a, str>,
    #[xml(child = "TotalTimeSeconds")]
    pub total_time_seconds: TotalTimeSecondsNode<'a>,
    #[xml(child = "DistanceMeters")]
    pub distance_meters: DistanceMetersNode<'a>,
    #[xml(child = "Calories")]
    pub calories: CaloriesNode<'a>,
    #[xml(child = "Intensity")]
    pub intensity: IntensityNode<'a>,
    #[xml(child = "TriggerMethod")]
    pub trigger_method: TriggerMethodNode<'a>,
    #[xml(child = "Track")]
    pub tracks: Vec<TrackNode<'a>>,
}

#[derive(Debug, Clone, PartialEq, XmlRead, XmlWrite)]
#[xml(tag = "Version")]
pub struct VersionNode<'a> {
    #[xml(flatten_text = "VersionMajor")]
    pub version_major: Cow<'a, str>,
    #[xml(flatten_text = "VersionMinor")]
    pub version_minor: Cow<'a, str>,
    #[xml(flatten_text = "BuildMajor")]
    pub build_major: Cow<'a, str>,
    #[xml(flatten_text = "BuildMinor")]
    pub build_minor: Cow<'a, str>,
}

/// `<Build>` wraps the author's version.
#[derive(Debug, Clone, PartialEq, XmlRead, XmlWrite)]
#[xml(tag = "Build")]
pub struct BuildNode<'a> {
    #[xml(child = "Version")]
    pub version: VersionNode<'a>,
}

#[derive(Debug, Clone, PartialEq, XmlRead, XmlWrite)]
#[xml(tag = "Creator")]
pub struct CreatorNode<'a> {
    #[xml(attr = "xsi:type")]
    pub kind: Option<Cow<'a, str>>,
    #[xml(child = "Name")]
    pub name: NameNode<'a>,
    #[xml(child = "UnitId")]
    pub unit_id: UnitIdNode<'a>,
    #[xml(child = "ProductID")]
    pub product_id: ProductIdNode<'a>,
    #[xml(child = "Version")]
    pub version: VersionNode<'a>,
}

#[derive(Debug, Clone, PartialEq, XmlRead, XmlWrite)]
#[xml(tag = "Author")]
pub struct AuthorNode<'a> {
    #[xml(attr = "xsi:type")]
    pub kind: Option<Cow<'a, str>>,
    #[xml(child = "Name")]
    pub name: NameNode<'a>,
    #[xml(child = "Build")]
    pub build: BuildNode<'a>,
    #[xml(child = "LangID")]
    pub lang_id: LangIdNode<'a>,
    #[xml(child = "PartNumber")]
    pub part_number: PartNumberNode<'a>,
}

#[derive(Debug, Clone, PartialEq, XmlRead, XmlWrite)]
#[xml(tag = "Activity")]
pub struct ActivityNode<'a> {
    #[xml(attr = "Sport")]
    pub sport: Cow<'a, str>,
    #[xml(child = "Id")]
    pub id: IdNode<'a>,
    #[xml(child = "Lap")]
    pub laps: Vec<LapNode<'a>>,
    #[xml(child = "Creator")]
    pub creator: Option<CreatorNode<'a>>,
}

#[derive(Debug, Clone, PartialEq, XmlRead, XmlWrite)]
#[xml(tag = "Activities")]
pub struct ActivitiesNode<'a> {
    #[xml(child = "Activity")]
    pub activities: Vec<ActivityNode<'a>>,
}

/// Document root.
///
/// Activities are read both from the `<Activities>` wrapper and from
/// directly under the root. Writing always uses the wrapper.
#[derive(Debug, Clone, PartialEq, XmlRead, XmlWrite)]
#[xml(tag = "TrainingCenterDatabase")]
pub struct TrainingCenterDatabaseNode<'a> {
    #[xml(attr = "xmlns")]
    pub xmlns: Option<Cow<'a, str>>,
    #[xml(attr = "xmlns:xsi")]
    pub xmlns_xsi: Option<Cow<'a, str>>,
    #[xml(attr = "xmlns:ns2")]
    pub xmlns_ns2: Option<Cow<'a, str>>,
    #[xml(attr = "xmlns:ns3")]
    pub xmlns_ns3: Option<Cow<'a, str>>,
    #[xml(attr = "xmlns:ns4")]
    pub xmlns_ns4: Option<Cow<'a, str>>,
    #[xml(attr = "xmlns:ns5")]
    pub xmlns_ns5: Option<Cow<'a, str>>,
    #[xml(attr = "xsi:schemaLocation")]
    pub schema_location: Option<Cow<'a, str>>,
    #[xml(child = "Activities")]
    pub activities: Option<ActivitiesNode<'a>>,
    #[xml(child = "Activity")]
    pub bare_activities: Vec<ActivityNode<'a>>,
    #[xml(child = "Author")]
    pub author: Option<AuthorNode<'a>>,
}

impl<'a> TrainingCenterDatabaseNode<'a> {
    /// Root node carrying the fixed namespace declarations.
    pub fn with_namespaces(activities: Vec<ActivityNode<'a>>, author: AuthorNode<'a>) -> Self {
        Self {
            xmlns: Some(Cow::Borrowed(TCX_NAMESPACE)),
            xmlns_xsi: Some(Cow::Borrowed(XSI_NAMESPACE)),
            xmlns_ns2: Some(Cow::Borrowed(USER_PROFILE_NAMESPACE)),
            xmlns_ns3: Some(Cow::Borrowed(ACTIVITY_EXTENSION_NAMESPACE)),
            xmlns_ns4: Some(Cow::Borrowed(PROFILE_EXTENSION_NAMESPACE)),
            xmlns_ns5: Some(Cow::Borrowed(ACTIVITY_GOALS_NAMESPACE)),
            schema_location: Some(Cow::Borrowed(SCHEMA_LOCATION)),
            activities: Some(ActivitiesNode { activities }),
            bare_activities: Vec::new(),
            author: Some(author),
        }
    }
}
