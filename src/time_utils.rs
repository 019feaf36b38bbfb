// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for TCX timestamp parsing and formatting.

use chrono::{DateTime, FixedOffset};

use crate::error::{AppError, Result};

/// Output format: whole seconds with a literal `Z` designator.
pub const OUTPUT_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Fallback input format for offsets written without a colon (`+0100`).
const COMPACT_OFFSET_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f%z";

/// Parse a TCX timestamp, keeping the offset it was written with.
///
/// Accepts RFC 3339 (`2019-10-29T05:57:09.037Z`, `...+01:00`) and the
/// compact `+0100` offset form. Fractional seconds are optional.
pub fn parse_tcx_timestamp(value: &str) -> Result<DateTime<FixedOffset>> {
    let value = value.trim();
    DateTime::parse_from_rfc3339(value)
        .or_else(|_| DateTime::parse_from_str(value, COMPACT_OFFSET_FORMAT))
        .map_err(|e| AppError::Malformed(format!("Invalid timestamp {value:?}: {e}")))
}

/// Format a timestamp for output.
///
/// Sub-second precision is dropped and the stored wall-clock fields are
/// written as-is with a `Z` suffix. No conversion to UTC takes place.
pub fn format_tcx_timestamp(date: &DateTime<FixedOffset>) -> String {
    date.format(OUTPUT_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn test_parse_utc_with_millis() {
        let ts = parse_tcx_timestamp("2019-10-29T05:57:09.037Z").unwrap();
        assert_eq!(ts.hour(), 5);
        assert_eq!(ts.nanosecond(), 37_000_000);
        assert_eq!(ts.offset().local_minus_utc(), 0);
    }

    #[test]
    fn test_parse_compact_offset() {
        let ts = parse_tcx_timestamp("2019-10-29T05:57:09.000+0100").unwrap();
        assert_eq!(ts.offset().local_minus_utc(), 3600);
    }

    #[test]
    fn test_parse_without_fraction() {
        assert!(parse_tcx_timestamp("2019-10-29T05:57:09Z").is_ok());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let err = parse_tcx_timestamp("yesterday").unwrap_err();
        assert!(err.is_malformed());
    }

    #[test]
    fn test_format_truncates_subseconds() {
        let ts = parse_tcx_timestamp("2019-10-29T05:57:09.987Z").unwrap();
        assert_eq!(format_tcx_timestamp(&ts), "2019-10-29T05:57:09Z");
    }

    #[test]
    fn test_format_keeps_wall_clock_of_offset() {
        let ts = parse_tcx_timestamp("2019-10-29T05:57:09+02:00").unwrap();
        assert_eq!(format_tcx_timestamp(&ts), "2019-10-29T05:57:09Z");
    }
}
