// src/time/parse.rs

//! Parsing of the backend's dasha boundary format.
//!
//! Boundaries arrive as `D-M-YYYY  H:m`: day, month and year separated by
//! dashes, then exactly two spaces, then hour and minute separated by a
//! colon. No field needs zero padding. The value carries no timezone and is
//! returned as naive wall-clock time.

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

use crate::error::{DashaError, Result};

/// Separator between the date and time segments.
pub const SEGMENT_SEPARATOR: &str = "  ";

/// Parses a raw boundary string into a naive instant.
///
/// Surrounding whitespace is ignored. Everything else must match the format
/// exactly.
///
/// # Errors
///
/// Returns `DashaError::MalformedTimestamp` when the separator is missing or
/// repeated, a field is empty or non-numeric, or the fields do not name a real
/// calendar date and time of day.
pub fn parse_timestamp(raw: &str) -> Result<NaiveDateTime> {
    let trimmed = raw.trim();
    let segments: Vec<&str> = trimmed.split(SEGMENT_SEPARATOR).collect();
    let [date_segment, time_segment] = segments.as_slice() else {
        return Err(DashaError::malformed_timestamp(
            raw,
            "expected one double-space between date and time",
        ));
    };

    let date_fields = numeric_fields(raw, date_segment, '-', &[2, 2, 4])?;
    let time_fields = numeric_fields(raw, time_segment, ':', &[2, 2])?;

    let date = NaiveDate::from_ymd_opt(date_fields[2] as i32, date_fields[1], date_fields[0])
        .ok_or_else(|| DashaError::malformed_timestamp(raw, "no such calendar date"))?;
    let time = NaiveTime::from_hms_opt(time_fields[0], time_fields[1], 0)
        .ok_or_else(|| DashaError::malformed_timestamp(raw, "hour or minute out of range"))?;

    Ok(NaiveDateTime::new(date, time))
}

/// Years the boundary format can carry: at most four digits, no sign.
pub const YEAR_RANGE: std::ops::RangeInclusive<i32> = 0..=9999;

/// Writes an instant in the unpadded boundary format, dropping seconds.
///
/// Returns `None` for years outside [`YEAR_RANGE`], which
/// [`parse_timestamp`] would reject.
pub fn stringify_timestamp(instant: &NaiveDateTime) -> Option<String> {
    if !YEAR_RANGE.contains(&instant.year()) {
        return None;
    }
    Some(format!(
        "{}-{}-{}{}{}:{}",
        instant.day(),
        instant.month(),
        instant.year(),
        SEGMENT_SEPARATOR,
        instant.hour(),
        instant.minute()
    ))
}

/// Splits `segment` on `separator` and parses each field as an unsigned
/// decimal of at most `max_widths[i]` digits.
fn numeric_fields(raw: &str, segment: &str, separator: char, max_widths: &[usize]) -> Result<Vec<u32>> {
    let fields: Vec<&str> = segment.split(separator).collect();
    if fields.len() != max_widths.len() {
        return Err(DashaError::malformed_timestamp(
            raw,
            format!(
                "expected {} '{}'-separated fields in '{}'",
                max_widths.len(),
                separator,
                segment
            ),
        ));
    }

    fields
        .iter()
        .zip(max_widths)
        .map(|(field, &width)| {
            if field.is_empty() || field.len() > width || !field.bytes().all(|b| b.is_ascii_digit()) {
                return Err(DashaError::malformed_timestamp(
                    raw,
                    format!("'{}' is not a numeric field of at most {} digits", field, width),
                ));
            }
            field
                .parse::<u32>()
                .map_err(|e| DashaError::malformed_timestamp(raw, e.to_string()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn parses_unpadded_fields() {
        assert_eq!(parse_timestamp("6-6-2020  9:5").unwrap(), at(2020, 6, 6, 9, 5));
        assert_eq!(parse_timestamp("31-12-2020  23:59").unwrap(), at(2020, 12, 31, 23, 59));
        assert_eq!(parse_timestamp("1-1-2020  0:0").unwrap(), at(2020, 1, 1, 0, 0));
    }

    #[test]
    fn accepts_padding_and_outer_whitespace() {
        assert_eq!(parse_timestamp(" 06-06-2020  09:05\n").unwrap(), at(2020, 6, 6, 9, 5));
    }

    #[test]
    fn rejects_wrong_separator() {
        for raw in [
            "2020-01-01",
            "1-1-2020 0:0",
            "1-1-2020   0:0",
            "1-1-2020  0:0  1:1",
            "1/1/2020  0:0",
            "",
        ] {
            let err = parse_timestamp(raw).unwrap_err();
            assert!(
                matches!(err, DashaError::MalformedTimestamp { .. }),
                "{raw:?} gave {err:?}"
            );
        }
    }

    #[test]
    fn rejects_non_numeric_and_out_of_range() {
        for raw in [
            "a-1-2020  0:0",
            "1--2020  0:0",
            "1-1-2020  0:0:0",
            "+1-1-2020  0:0",
            "31-2-2020  0:0",
            "1-13-2020  0:0",
            "1-1-2020  24:0",
            "1-1-2020  0:60",
            "1-1-20200  0:0",
        ] {
            assert!(parse_timestamp(raw).is_err(), "{raw:?} should fail");
        }
    }

    #[test]
    fn stringify_round_trips() {
        let instant = at(1987, 3, 14, 7, 0);
        let raw = stringify_timestamp(&instant).unwrap();
        assert_eq!(raw, "14-3-1987  7:0");
        assert_eq!(parse_timestamp(&raw).unwrap(), instant);
    }

    #[test]
    fn stringify_refuses_years_the_format_cannot_hold() {
        assert!(stringify_timestamp(&at(10000, 1, 1, 0, 0)).is_none());
        assert!(stringify_timestamp(&at(-1, 1, 1, 0, 0)).is_none());

        let last = at(9999, 12, 31, 23, 59);
        let raw = stringify_timestamp(&last).unwrap();
        assert_eq!(parse_timestamp(&raw).unwrap(), last);
        assert_eq!(parse_timestamp(&stringify_timestamp(&at(0, 1, 1, 0, 0)).unwrap()).unwrap().year(), 0);
    }

    #[test]
    fn error_keeps_raw_input() {
        match parse_timestamp("2020-01-01") {
            Err(DashaError::MalformedTimestamp { raw, .. }) => assert_eq!(raw, "2020-01-01"),
            other => panic!("unexpected {other:?}"),
        }
    }
}
