//! A single validity window of a terminal aerodrome forecast (TAF), kept as
//! received so that malformed fields can be skipped instead of failing the
//! whole report.

use crate::types::wind::Wind;
use chrono::{DateTime, FixedOffset, Utc};
use serde::Deserialize;
use serde_json::Value;

/// The part of a TAF report this crate reads.
///
/// Periods stay raw until [`TafReport::into_periods`] so that one element of
/// the wrong shape does not reject the whole report.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TafReport {
    #[serde(default)]
    pub forecast: Option<Vec<Value>>,
}

impl TafReport {
    /// Converts each element to a [`TafPeriod`], in upstream order.
    ///
    /// Elements that are not objects become an empty period, which has no
    /// times and is therefore skipped during selection.
    pub fn into_periods(self) -> Vec<TafPeriod> {
        self.forecast
            .unwrap_or_default()
            .into_iter()
            .map(|value| serde_json::from_value(value).unwrap_or_default())
            .collect()
    }
}

/// One forecast window. Every field is optional and loosely typed.
///
/// Times are RFC 3339 strings (`Z` and `+00:00` are interchangeable) or AVWX
/// style objects with a `dt` member. Wind values are integers, numeric strings,
/// or AVWX style objects with a `value` member; anything else, such as `"VRB"`,
/// counts as missing.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TafPeriod {
    #[serde(default)]
    pub start_time: Value,
    #[serde(default)]
    pub end_time: Value,
    #[serde(default)]
    pub wind_direction: Value,
    #[serde(default)]
    pub wind_speed: Value,
}

impl TafPeriod {
    pub fn start(&self) -> Option<DateTime<Utc>> {
        parse_time(&self.start_time)
    }

    pub fn end(&self) -> Option<DateTime<Utc>> {
        parse_time(&self.end_time)
    }

    /// Both wind fields as integers, or `None` if either is missing or non-numeric.
    pub fn wind(&self) -> Option<Wind> {
        let direction = parse_int(&self.wind_direction)?;
        let speed = parse_int(&self.wind_speed)?;
        Some(Wind::new(direction, speed))
    }
}

fn parse_time(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::String(text) => parse_time_str(text.trim()),
        Value::Object(map) => map.get("dt").and_then(parse_time),
        _ => None,
    }
}

fn parse_time_str(text: &str) -> Option<DateTime<Utc>> {
    let normalized = match text.strip_suffix('Z') {
        Some(rest) => format!("{}+00:00", rest),
        None => text.to_string(),
    };
    DateTime::parse_from_rfc3339(&normalized)
        .or_else(|_| DateTime::<FixedOffset>::parse_from_str(&normalized, "%Y-%m-%dT%H:%M%:z"))
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

fn parse_int(value: &Value) -> Option<i32> {
    match value {
        Value::Number(number) => number
            .as_i64()
            .or_else(|| {
                number
                    .as_f64()
                    .filter(|f| f.is_finite())
                    .map(|f| f.trunc() as i64)
            })
            .and_then(|n| i32::try_from(n).ok()),
        Value::String(text) => text.trim().parse::<i32>().ok(),
        Value::Object(map) => map.get("value").and_then(parse_int),
        _ => None,
    }
}
