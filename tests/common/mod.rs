// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use chrono::{DateTime, FixedOffset};
use tcx_collapse::models::{
    Activity, Author, Creator, Lap, Quantity, Track, TrackPoint, TrainingCenterDatabase, Version,
};

/// Read a fixture from tests/fixtures.
#[allow(dead_code)]
pub fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name))
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", name, e))
}

/// Timestamp with a zero sub-second component, so it round-trips exactly.
#[allow(dead_code)]
pub fn at(value: &str) -> DateTime<FixedOffset> {
    DateTime::parse_from_rfc3339(value).expect("valid test timestamp")
}

#[allow(dead_code)]
pub fn test_author() -> Author {
    Author {
        name: "Garmin".to_string(),
        build: Version::new(1, 0, 0, 0),
        lang_id: "en".to_string(),
        part_number: "1234".to_string(),
    }
}

#[allow(dead_code)]
pub fn test_creator() -> Creator {
    Creator {
        name: "Garmin".to_string(),
        unit_id: "0".to_string(),
        product_id: "Garmin Connect API".to_string(),
        version: Version::new(1, 0, 0, 0),
    }
}

/// Lap with the given totals and one track of `points` samples.
#[allow(dead_code)]
pub fn test_lap(start: &str, total_time: &str, distance: &str, calories: &str, points: usize) -> Lap {
    let start_time = at(start);
    let track = Track::new(
        (0..points)
            .map(|i| {
                TrackPoint::new(
                    start_time + chrono::Duration::seconds(i as i64),
                    Quantity::from(format!("{}.0", i)),
                )
            })
            .collect(),
    );

    Lap {
        start_time,
        total_time_seconds: Quantity::from(total_time),
        distance_meters: Quantity::from(distance),
        calories: Quantity::from(calories),
        intensity: "Active".to_string(),
        trigger_method: "Manual".to_string(),
        tracks: vec![track],
    }
}

#[allow(dead_code)]
pub fn test_activity(sport: &str, id: &str, laps: Vec<Lap>) -> Activity {
    Activity {
        sport: sport.to_string(),
        id: id.to_string(),
        laps,
        creator: None,
    }
}

#[allow(dead_code)]
pub fn test_database(activities: Vec<Activity>) -> TrainingCenterDatabase {
    TrainingCenterDatabase::new(test_author(), activities)
}
