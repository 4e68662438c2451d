//! Parses compact flight schedule lines such as `ETD KJFK 15Jun / 1430`.
//!
//! Only three fields carry meaning: the airport identifier (field 1), the
//! `DDMon` day and month (field 2) and the `HHMM` time (field 4). The line has
//! no year, so the current UTC year is assumed.

use crate::schedule::error::ScheduleLineError;
use crate::types::flight_point::FlightPoint;
use chrono::{Datelike, TimeZone, Utc};

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

const MIN_FIELDS: usize = 5;
const AIRPORT_FIELD: usize = 1;
const DATE_FIELD: usize = 2;
const TIME_FIELD: usize = 4;

/// Parses a schedule line, stamping it with the current UTC year.
///
/// # Errors
///
/// See [`parse_line_in_year`].
pub fn parse_line(line: &str) -> Result<FlightPoint, ScheduleLineError> {
    parse_line_in_year(line, Utc::now().year())
}

/// Parses a schedule line for an explicit year.
///
/// # Errors
///
/// * [`ScheduleLineError::TooFewTokens`] if the line has fewer than five fields.
/// * [`ScheduleLineError::InvalidNumber`] if the day, hour or minute is not numeric.
/// * [`ScheduleLineError::UnknownMonth`] if the month abbreviation is not recognised.
/// * [`ScheduleLineError::InvalidDateTime`] if the components do not form a real UTC time.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use flightwx::parse_line_in_year;
///
/// let point = parse_line_in_year("ETD KJFK 15jun / 1430", 2025).unwrap();
/// assert_eq!(point.airport_id(), "KJFK");
/// assert_eq!(point.target_time(), Utc.with_ymd_and_hms(2025, 6, 15, 14, 30, 0).unwrap());
/// ```
pub fn parse_line_in_year(line: &str, year: i32) -> Result<FlightPoint, ScheduleLineError> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    if parts.len() < MIN_FIELDS {
        return Err(ScheduleLineError::TooFewTokens {
            line: line.trim().to_string(),
            found: parts.len(),
        });
    }

    let (day_str, month_str) = split_prefix(parts[DATE_FIELD], "day")?;
    let day = parse_number(day_str, "day")?;
    let month = month_number(month_str)?;

    let (hour_str, minute_str) = split_prefix(parts[TIME_FIELD], "hour")?;
    let hour = parse_number(hour_str, "hour")?;
    let minute = parse_number(minute_str, "minute")?;

    let target_time = Utc
        .with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .ok_or(ScheduleLineError::InvalidDateTime {
            year,
            month,
            day,
            hour,
            minute,
        })?;

    Ok(FlightPoint::new(parts[AIRPORT_FIELD], target_time))
}

/// Splits a token after its first two characters.
fn split_prefix<'a>(
    token: &'a str,
    field: &'static str,
) -> Result<(&'a str, &'a str), ScheduleLineError> {
    match (token.get(..2), token.get(2..)) {
        (Some(head), Some(rest)) => Ok((head, rest)),
        _ => Err(ScheduleLineError::InvalidNumber {
            field,
            value: token.to_string(),
        }),
    }
}

fn parse_number(value: &str, field: &'static str) -> Result<u32, ScheduleLineError> {
    value
        .parse::<u32>()
        .map_err(|_| ScheduleLineError::InvalidNumber {
            field,
            value: value.to_string(),
        })
}

fn month_number(name: &str) -> Result<u32, ScheduleLineError> {
    MONTHS
        .iter()
        .position(|month| month.eq_ignore_ascii_case(name))
        .map(|index| index as u32 + 1)
        .ok_or_else(|| ScheduleLineError::UnknownMonth(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn test_parse_well_formed_line() {
        let point = parse_line_in_year("ETD KJFK 15Jun / 1430", 2025).unwrap();
        assert_eq!(point.airport_id(), "KJFK");
        assert_eq!(
            point.target_time(),
            Utc.with_ymd_and_hms(2025, 6, 15, 14, 30, 0).unwrap()
        );
    }

    #[test]
    fn test_airport_case_is_preserved() {
        let point = parse_line_in_year("ETA egll 01Jan / 0005", 2025).unwrap();
        assert_eq!(point.airport_id(), "egll");
    }

    #[test]
    fn test_parse_line_uses_current_utc_year() {
        let point = parse_line("ETD KJFK 15Jun / 1430").unwrap();
        let time = point.target_time();
        assert_eq!(time.year(), Utc::now().year());
        assert_eq!((time.month(), time.day()), (6, 15));
        assert_eq!((time.hour(), time.minute(), time.second()), (14, 30, 0));
    }

    #[test]
    fn test_month_is_case_insensitive() {
        for token in ["15jun", "15Jun", "15JUN", "15jUN"] {
            let line = format!("ETD KJFK {} / 1430", token);
            let point = parse_line_in_year(&line, 2025).unwrap();
            assert_eq!(point.target_time().month(), 6, "token {}", token);
        }
    }

    #[test]
    fn test_every_month_abbreviation_resolves() {
        for (index, name) in MONTHS.iter().enumerate() {
            let line = format!("ETD KJFK 01{} / 0000", name);
            let point = parse_line_in_year(&line, 2025).unwrap();
            assert_eq!(point.target_time().month(), index as u32 + 1);
        }
    }

    #[test]
    fn test_unknown_month_is_rejected() {
        let err = parse_line_in_year("ETD KJFK 15Jux / 1430", 2025).unwrap_err();
        assert_eq!(err, ScheduleLineError::UnknownMonth("Jux".to_string()));

        // full month names are not accepted either
        let err = parse_line_in_year("ETD KJFK 15June / 1430", 2025).unwrap_err();
        assert_eq!(err, ScheduleLineError::UnknownMonth("June".to_string()));
    }

    #[test]
    fn test_too_few_tokens() {
        let err = parse_line_in_year("ETD KJFK 15Jun 1430", 2025).unwrap_err();
        assert!(matches!(err, ScheduleLineError::TooFewTokens { found: 4, .. }));
        assert!(matches!(
            parse_line_in_year("   ", 2025),
            Err(ScheduleLineError::TooFewTokens { found: 0, .. })
        ));
    }

    #[test]
    fn test_non_numeric_fields() {
        assert!(matches!(
            parse_line_in_year("ETD KJFK 5Jun / 1430", 2025),
            Err(ScheduleLineError::InvalidNumber { field: "day", .. })
        ));
        assert!(matches!(
            parse_line_in_year("ETD KJFK 15Jun / 14h0", 2025),
            Err(ScheduleLineError::InvalidNumber { field: "minute", .. })
        ));
        assert!(matches!(
            parse_line_in_year("ETD KJFK 15Jun / 14", 2025),
            Err(ScheduleLineError::InvalidNumber { field: "minute", .. })
        ));
        assert!(matches!(
            parse_line_in_year("ETD KJFK 15Jun / 1", 2025),
            Err(ScheduleLineError::InvalidNumber { field: "hour", .. })
        ));
    }

    #[test]
    fn test_impossible_dates_are_not_clamped() {
        assert_eq!(
            parse_line_in_year("ETD KJFK 31Feb / 1200", 2025).unwrap_err(),
            ScheduleLineError::InvalidDateTime {
                year: 2025,
                month: 2,
                day: 31,
                hour: 12,
                minute: 0,
            }
        );
        assert!(matches!(
            parse_line_in_year("ETD KJFK 32Jan / 1200", 2025),
            Err(ScheduleLineError::InvalidDateTime { day: 32, .. })
        ));
        assert!(matches!(
            parse_line_in_year("ETD KJFK 15Jun / 2400", 2025),
            Err(ScheduleLineError::InvalidDateTime { hour: 24, .. })
        ));
        assert!(matches!(
            parse_line_in_year("ETD KJFK 15Jun / 1260", 2025),
            Err(ScheduleLineError::InvalidDateTime { minute: 60, .. })
        ));
    }

    #[test]
    fn test_leap_day_depends_on_year() {
        assert!(parse_line_in_year("ETD KJFK 29Feb / 1200", 2024).is_ok());
        assert!(parse_line_in_year("ETD KJFK 29Feb / 1200", 2025).is_err());
    }

    #[test]
    fn test_extra_fields_are_ignored() {
        let point = parse_line_in_year("ETD KBOS 03Mar / 0915 extra fields here", 2025).unwrap();
        assert_eq!(point.airport_id(), "KBOS");
        assert_eq!(
            point.target_time(),
            Utc.with_ymd_and_hms(2025, 3, 3, 9, 15, 0).unwrap()
        );
    }
}
