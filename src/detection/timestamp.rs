use crate::shared::error::BuiltWithError;
use crate::shared::Result;
use chrono::{DateTime, NaiveDate, Utc};
use once_cell::sync::Lazy;
use regex::Regex;

/// Matches the epoch-millisecond payload inside detection timestamps,
/// which arrive as marker strings like `/Date(1348182000000)/`.
static DIGIT_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+").expect("digit-run pattern compiles"));

/// Parses a detection timestamp into a UTC instant.
///
/// The API encodes timestamps as marker strings embedding milliseconds
/// since the Unix epoch. The first run of decimal digits anywhere in the
/// input is taken as the payload, so the surrounding marker syntax is
/// never inspected. Millisecond precision is preserved.
///
/// # Errors
/// Returns `BuiltWithError::MalformedTimestamp` if the input contains no
/// digits, or if the value does not denote a representable instant.
pub fn parse_epoch_millis(value: &str) -> Result<DateTime<Utc>> {
    let digits = DIGIT_RUN
        .find(value)
        .ok_or_else(|| BuiltWithError::MalformedTimestamp {
            value: value.to_string(),
            details: "no digit run found".to_string(),
        })?;

    let millis: i64 = digits
        .as_str()
        .parse()
        .map_err(|e| BuiltWithError::MalformedTimestamp {
            value: value.to_string(),
            details: format!("epoch milliseconds out of range: {}", e),
        })?;

    DateTime::from_timestamp_millis(millis).ok_or_else(|| {
        BuiltWithError::MalformedTimestamp {
            value: value.to_string(),
            details: "epoch milliseconds denote no representable instant".to_string(),
        }
        .into()
    })
}

/// Parses a `YYYY-MM-DD` string into a calendar date.
///
/// Used for the `FULL` field of the update-metadata endpoint, which
/// reports when the provider last completed a full detection sweep.
///
/// # Errors
/// Returns `BuiltWithError::MalformedTimestamp` on any other format.
pub fn parse_calendar_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|e| {
        BuiltWithError::MalformedTimestamp {
            value: value.to_string(),
            details: e.to_string(),
        }
        .into()
    })
}
