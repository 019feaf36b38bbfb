// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Parsing of training center documents.

use chrono::Timelike;
use tcx_collapse::error::AppError;
use tcx_collapse::models::{Lap, Quantity, TcxElement, TrainingCenterDatabase, Version};

mod common;
use common::load_fixture;

const LAP_WITHOUT_CALORIES: &str = r#"
<Lap StartTime="2019-10-29T05:57:09.037Z">
  <TotalTimeSeconds>30.5</TotalTimeSeconds>
  <DistanceMeters>0.0</DistanceMeters>
  <Intensity>Active</Intensity>
  <TriggerMethod>Manual</TriggerMethod>
  <Track/>
</Lap>"#;

const BARE_ACTIVITIES: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<TrainingCenterDatabase xmlns="http://www.garmin.com/xmlschemas/TrainingCenterDatabase/v2" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">
  <Author xsi:type="Application_t">
    <Name>Garmin</Name>
    <Build><Version><VersionMajor>1</VersionMajor><VersionMinor>0</VersionMinor><BuildMajor>0</BuildMajor><BuildMinor>0</BuildMinor></Version></Build>
    <LangID>en</LangID>
    <PartNumber>1234</PartNumber>
  </Author>
  <Activity Sport="Other">
    <Id>first</Id>
    <Lap StartTime="2019-10-29T05:57:09Z">
      <TotalTimeSeconds>1</TotalTimeSeconds>
      <DistanceMeters>0</DistanceMeters>
      <Calories>1</Calories>
      <Intensity>Active</Intensity>
      <TriggerMethod>Manual</TriggerMethod>
      <Track></Track>
    </Lap>
  </Activity>
  <Activity Sport="Other">
    <Id>second</Id>
    <Lap StartTime="2019-10-29T06:57:09Z">
      <TotalTimeSeconds>2</TotalTimeSeconds>
      <DistanceMeters>0</DistanceMeters>
      <Calories>2</Calories>
      <Intensity>Active</Intensity>
      <TriggerMethod>Manual</TriggerMethod>
      <Track></Track>
    </Lap>
  </Activity>
</TrainingCenterDatabase>"#;

#[test]
fn test_parse_strong_workout_fixture() {
    let db = TrainingCenterDatabase::from_xml(&load_fixture("strong_workout.tcx"))
        .expect("fixture should parse");

    assert_eq!(db.activities.len(), 35);
    assert_eq!(db.track_point_count(), 70);

    let first = &db.activities[0];
    assert_eq!(first.sport, "Other");
    assert_eq!(first.id, "2019-10-29T05:57:09.037Z");
    assert_eq!(first.laps.len(), 1);
    assert_eq!(first.laps[0].tracks.len(), 1);
    assert_eq!(first.laps[0].tracks[0].points.len(), 2);
}

#[test]
fn test_parse_author_and_creator() {
    let db = TrainingCenterDatabase::from_xml(&load_fixture("strong_workout.tcx")).unwrap();

    assert_eq!(db.author.name, "StrongLifts 5x5");
    assert_eq!(db.author.build, Version::new(3, 4, 1, 0));
    assert_eq!(db.author.lang_id, "en");
    assert_eq!(db.author.part_number, "000-00000-00");

    let creator = db.activities[0].creator.as_ref().expect("creator parsed");
    assert_eq!(creator.name, "StrongLifts");
    assert_eq!(creator.version, Version::new(3, 4, 0, 0));
}

#[test]
fn test_lap_fields_are_kept_as_raw_text() {
    let db = TrainingCenterDatabase::from_xml(&load_fixture("strong_workout.tcx")).unwrap();
    let lap = &db.activities[0].laps[0];

    assert_eq!(lap.total_time_seconds, Quantity::Raw("30.5".to_string()));
    assert_eq!(lap.distance_meters.to_string(), "0.0");
    assert_eq!(lap.calories.to_string(), "4");
    assert_eq!(lap.intensity, "Active");
    assert_eq!(lap.trigger_method, "Manual");
}

#[test]
fn test_lap_start_time_comes_from_attribute() {
    let db = TrainingCenterDatabase::from_xml(&load_fixture("multi_lap.tcx")).unwrap();
    let lap = &db.activities[0].laps[1];

    assert_eq!(lap.start_time.minute(), 5);
    assert_eq!(lap.start_time.second(), 0);
}

#[test]
fn test_parse_keeps_track_and_point_order() {
    let db = TrainingCenterDatabase::from_xml(&load_fixture("multi_lap.tcx")).unwrap();
    let lap = &db.activities[0].laps[0];

    assert_eq!(lap.tracks.len(), 2);
    let distances: Vec<String> = lap
        .tracks
        .iter()
        .flat_map(|t| &t.points)
        .map(|p| p.distance_meters.to_string())
        .collect();
    assert_eq!(distances, vec!["0.0", "2.5", "5.5"]);
}

#[test]
fn test_activity_without_creator() {
    let db = TrainingCenterDatabase::from_xml(&load_fixture("multi_lap.tcx")).unwrap();
    assert!(db.activities[0].creator.is_some());
    assert!(db.activities[1].creator.is_none());
}

#[test]
fn test_activities_directly_under_root() {
    let db = TrainingCenterDatabase::from_xml(BARE_ACTIVITIES).unwrap();

    let ids: Vec<&str> = db.activities.iter().map(|a| a.id.as_str()).collect();
    assert_eq!(ids, vec!["first", "second"]);
    assert_eq!(db.author.name, "Garmin");
    assert_eq!(db.track_point_count(), 0);
}

#[test]
fn test_missing_calories_is_malformed() {
    let err = Lap::from_xml(LAP_WITHOUT_CALORIES).unwrap_err();
    assert!(err.is_malformed(), "expected malformed error, got {:?}", err);
    assert!(matches!(err, AppError::MalformedXml(_)));
}

#[test]
fn test_missing_calories_in_document_is_malformed() {
    let xml = load_fixture("multi_lap.tcx").replacen("<Calories>4</Calories>", "", 1);
    let err = TrainingCenterDatabase::from_xml(&xml).unwrap_err();
    assert!(err.is_malformed(), "expected malformed error, got {:?}", err);
}

#[test]
fn test_missing_start_time_is_malformed() {
    let xml = load_fixture("multi_lap.tcx").replacen(
        r#"<Lap StartTime="2021-03-02T18:10:00.000Z">"#,
        "<Lap>",
        1,
    );
    let err = TrainingCenterDatabase::from_xml(&xml).unwrap_err();
    assert!(err.is_malformed());
}

#[test]
fn test_missing_author_is_malformed() {
    let xml = load_fixture("multi_lap.tcx");
    let start = xml.find("<Author").unwrap();
    let end = xml.find("</Author>").unwrap() + "</Author>".len();
    let without_author = format!("{}{}", &xml[..start], &xml[end..]);

    let err = TrainingCenterDatabase::from_xml(&without_author).unwrap_err();
    assert!(matches!(err, AppError::Malformed(ref msg) if msg.contains("Author")));
}

#[test]
fn test_invalid_timestamp_is_malformed() {
    let xml = load_fixture("multi_lap.tcx").replacen(
        "<Time>2021-03-02T18:00:05.000Z</Time>",
        "<Time>five seconds later</Time>",
        1,
    );
    let err = TrainingCenterDatabase::from_xml(&xml).unwrap_err();
    assert!(matches!(err, AppError::Malformed(_)));
}

#[test]
fn test_invalid_version_is_malformed() {
    let xml = load_fixture("multi_lap.tcx").replacen(
        "<VersionMajor>7</VersionMajor>",
        "<VersionMajor>seven</VersionMajor>",
        1,
    );
    let err = TrainingCenterDatabase::from_xml(&xml).unwrap_err();
    assert!(err.is_malformed());
}

#[test]
fn test_from_file_missing_path_is_io_error() {
    let err = TrainingCenterDatabase::from_file("tests/fixtures/does_not_exist.tcx").unwrap_err();
    assert!(matches!(err, AppError::Io(_)));
}
