use crate::detection::timestamp::parse_epoch_millis;
use crate::shared::Result;
use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;

/// One technology record as it appears on the wire, timestamps still in
/// the provider's marker-string encoding.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TechnologyEntry {
    pub name: String,
    pub tag: String,
    pub link: String,
    pub description: String,
    pub first_detected: String,
    pub last_detected: String,
}

/// One technology detected on one URL, with parsed timestamps and the
/// derived liveness flag.
///
/// `currently_live` is a heuristic: it compares the last detection
/// against the provider's last FULL sweep date. The provider's smaller
/// TOPSITE sweep runs on an unpublished schedule, so technologies on
/// lightly-sampled sites may be reported live when they are only
/// confirmed as of an older full sweep.
#[derive(Debug, Clone, PartialEq)]
pub struct Technology {
    pub name: String,
    pub tag: String,
    pub link: String,
    pub description: String,
    pub first_detected: DateTime<Utc>,
    pub last_detected: DateTime<Utc>,
    pub currently_live: bool,
}

impl Technology {
    /// Normalizes a wire record against the last full scan date.
    ///
    /// # Errors
    /// Returns `BuiltWithError::MalformedTimestamp` if either detection
    /// timestamp cannot be parsed.
    pub fn from_entry(entry: TechnologyEntry, last_full_scan: NaiveDate) -> Result<Self> {
        let first_detected = parse_epoch_millis(&entry.first_detected)?;
        let last_detected = parse_epoch_millis(&entry.last_detected)?;
        let currently_live = last_full_scan <= last_detected.date_naive();

        Ok(Self {
            name: entry.name,
            tag: entry.tag,
            link: entry.link,
            description: entry.description,
            first_detected,
            last_detected,
            currently_live,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(last_detected: &str) -> TechnologyEntry {
        TechnologyEntry {
            name: "Javascript".to_string(),
            tag: "docinfo".to_string(),
            link: "http://en.wikipedia.org/wiki/JavaScript".to_string(),
            description: "The website uses JavaScript.".to_string(),
            first_detected: "/Date(1346972400000)/".to_string(),
            last_detected: last_detected.to_string(),
        }
    }

    #[test]
    fn test_not_live_when_last_detected_before_full_scan() {
        // 1346972400000 ms = 2012-09-06T23:00 UTC
        let reference = NaiveDate::from_ymd_opt(2012, 9, 13).unwrap();
        let technology = Technology::from_entry(entry("/Date(1346972400000)/"), reference).unwrap();
        assert!(!technology.currently_live);
    }

    #[test]
    fn test_live_when_last_detected_after_full_scan() {
        // 1348182000000 ms = 2012-09-20T23:00 UTC
        let reference = NaiveDate::from_ymd_opt(2012, 9, 13).unwrap();
        let technology = Technology::from_entry(entry("/Date(1348182000000)/"), reference).unwrap();
        assert!(technology.currently_live);
    }

    #[test]
    fn test_live_when_last_detected_on_full_scan_day() {
        // 1347577200000 ms = 2012-09-13T23:00 UTC, same day as the reference
        let reference = NaiveDate::from_ymd_opt(2012, 9, 13).unwrap();
        let technology = Technology::from_entry(entry("/Date(1347577200000)/"), reference).unwrap();
        assert!(technology.currently_live);
    }

    #[test]
    fn test_malformed_timestamp_propagates() {
        let reference = NaiveDate::from_ymd_opt(2012, 9, 13).unwrap();
        let result = Technology::from_entry(entry("/Date()/"), reference);
        assert!(result.is_err());
    }

    #[test]
    fn test_entry_deserializes_pascal_case() {
        let json = r#"{
            "Name": "HTML5 DocType",
            "Tag": "docinfo",
            "Link": "http://dev.w3.org/html5/spec/syntax.html#the-doctype",
            "Description": "The DOCTYPE is a required preamble for HTML5 websites.",
            "FirstDetected": "/Date(1346972400000)/",
            "LastDetected": "/Date(1348182000000)/"
        }"#;
        let entry: TechnologyEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.name, "HTML5 DocType");
        assert_eq!(entry.last_detected, "/Date(1348182000000)/");
    }

    #[test]
    fn test_entry_missing_field_is_an_error() {
        let json = r#"{"Name": "Javascript"}"#;
        let result = serde_json::from_str::<TechnologyEntry>(json);
        assert!(result.is_err());
    }
}
