use crate::adapters::outbound::network::HttpApiTransport;
use crate::detection::{parse_calendar_date, DomainInfo};
use crate::ports::outbound::ApiTransport;
use crate::shared::error::BuiltWithError;
use crate::shared::Result;
use chrono::NaiveDate;
use serde_json::Value;

const V1_ENDPOINT: &str = "https://api.builtwith.com/v1/api.json";
const V2_ENDPOINT: &str = "https://api.builtwith.com/v2/api.json";

/// A validated BuiltWith API version.
///
/// Version 1 returns the raw parsed JSON value; version 2 returns a
/// structured [`DomainInfo`] with per-URL technology sets and liveness.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiVersion {
    V1,
    V2,
}

impl ApiVersion {
    /// Validates a version number.
    ///
    /// # Errors
    /// Returns `BuiltWithError::UnsupportedApiVersion` carrying the
    /// offending number when it is not 1 or 2.
    pub fn from_number(version: u32) -> Result<Self> {
        match version {
            1 => Ok(ApiVersion::V1),
            2 => Ok(ApiVersion::V2),
            other => Err(BuiltWithError::UnsupportedApiVersion { version: other }.into()),
        }
    }

    /// The lookup endpoint for this version.
    pub fn endpoint(self) -> &'static str {
        match self {
            ApiVersion::V1 => V1_ENDPOINT,
            ApiVersion::V2 => V2_ENDPOINT,
        }
    }

    pub fn as_number(self) -> u32 {
        match self {
            ApiVersion::V1 => 1,
            ApiVersion::V2 => 2,
        }
    }
}

/// The result of one domain lookup, shaped by the configured API version.
#[derive(Debug, Clone)]
pub enum LookupResult {
    /// Version 1: the parsed response body, returned unmodified.
    Raw(Value),
    /// Version 2: normalized per-URL technology sets.
    Detail(DomainInfo),
}

impl LookupResult {
    pub fn as_raw(&self) -> Option<&Value> {
        match self {
            LookupResult::Raw(value) => Some(value),
            LookupResult::Detail(_) => None,
        }
    }

    pub fn as_detail(&self) -> Option<&DomainInfo> {
        match self {
            LookupResult::Raw(_) => None,
            LookupResult::Detail(info) => Some(info),
        }
    }
}

/// BuiltWith API client
///
/// Holds an API key and a fixed, validated API version for its entire
/// lifetime; performs no caching and retains no results. Generic over
/// the transport port so tests can substitute a stub.
///
/// # Example
///
/// ```no_run
/// use builtwith::prelude::*;
///
/// # #[tokio::main]
/// # async fn main() -> Result<()> {
/// let client = BuiltWith::new("YOUR_API_KEY", 2)?;
/// match client.lookup("example.com").await? {
///     LookupResult::Detail(info) => {
///         for (url, technologies) in &info {
///             println!("{}.{}{}", url.subdomain, url.domain, url.path);
///             for technology in technologies {
///                 println!("  {} (live: {})", technology.name, technology.currently_live);
///             }
///         }
///     }
///     LookupResult::Raw(value) => println!("{}", value),
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct BuiltWith<T: ApiTransport> {
    key: String,
    api_version: ApiVersion,
    transport: T,
}

impl BuiltWith<HttpApiTransport> {
    /// Creates a client backed by the default reqwest transport.
    ///
    /// The version number is validated before the transport is built, so
    /// a misconfigured client fails early with zero network activity.
    ///
    /// # Errors
    /// Returns `BuiltWithError::UnsupportedApiVersion` when `api_version`
    /// is not 1 or 2.
    pub fn new(key: impl Into<String>, api_version: u32) -> Result<Self> {
        let api_version = ApiVersion::from_number(api_version)?;
        Ok(Self {
            key: key.into(),
            api_version,
            transport: HttpApiTransport::new()?,
        })
    }
}

impl<T: ApiTransport> BuiltWith<T> {
    /// Creates a client with an injected transport (Dependency Injection).
    ///
    /// # Errors
    /// Returns `BuiltWithError::UnsupportedApiVersion` when `api_version`
    /// is not 1 or 2.
    pub fn with_transport(key: impl Into<String>, api_version: u32, transport: T) -> Result<Self> {
        let api_version = ApiVersion::from_number(api_version)?;
        Ok(Self {
            key: key.into(),
            api_version,
            transport,
        })
    }

    pub fn api_version(&self) -> ApiVersion {
        self.api_version
    }

    /// Looks up the technology profile of a domain.
    ///
    /// Version 2 first fetches the date of the provider's last full scan
    /// from the update-metadata endpoint; that date drives the
    /// `currently_live` flag on every technology record. Version 1 issues
    /// a single request and returns the body as-is.
    ///
    /// # Errors
    /// Transport failures, non-success statuses and malformed payloads
    /// all abort the lookup; no default scan date is substituted and no
    /// partial result is returned.
    pub async fn lookup(&self, domain: &str) -> Result<LookupResult> {
        let last_full_scan = match self.api_version {
            ApiVersion::V1 => None,
            ApiVersion::V2 => Some(self.fetch_last_full_scan().await?),
        };

        let raw = self
            .transport
            .get_json(
                self.api_version.endpoint(),
                &[("KEY", self.key.as_str()), ("LOOKUP", domain)],
            )
            .await?;

        match last_full_scan {
            None => Ok(LookupResult::Raw(raw)),
            Some(date) => Ok(LookupResult::Detail(DomainInfo::from_response(raw, date)?)),
        }
    }

    /// Fetches the completion date of the provider's last full detection
    /// sweep from the update-metadata endpoint.
    async fn fetch_last_full_scan(&self) -> Result<NaiveDate> {
        let metadata = self
            .transport
            .get_json(self.api_version.endpoint(), &[("UPDATE", "1")])
            .await?;

        let full = metadata
            .get("FULL")
            .and_then(Value::as_str)
            .ok_or_else(|| BuiltWithError::MalformedResponse {
                details: "update metadata is missing the FULL field".to_string(),
            })?;

        parse_calendar_date(full)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_version_from_number() {
        assert_eq!(ApiVersion::from_number(1).unwrap(), ApiVersion::V1);
        assert_eq!(ApiVersion::from_number(2).unwrap(), ApiVersion::V2);
    }

    #[test]
    fn test_api_version_rejects_unsupported_numbers() {
        for version in [0, 3, 42] {
            let error = ApiVersion::from_number(version).unwrap_err();
            match error.downcast_ref::<BuiltWithError>() {
                Some(BuiltWithError::UnsupportedApiVersion { version: carried }) => {
                    assert_eq!(*carried, version);
                }
                other => panic!("unexpected error: {:?}", other),
            }
        }
    }

    #[test]
    fn test_api_version_endpoints() {
        assert_eq!(
            ApiVersion::V1.endpoint(),
            "https://api.builtwith.com/v1/api.json"
        );
        assert_eq!(
            ApiVersion::V2.endpoint(),
            "https://api.builtwith.com/v2/api.json"
        );
    }

    #[test]
    fn test_api_version_round_trips_as_number() {
        assert_eq!(ApiVersion::V1.as_number(), 1);
        assert_eq!(ApiVersion::V2.as_number(), 2);
    }

    #[test]
    fn test_client_rejects_unsupported_version() {
        let error = BuiltWith::new("key", 3).unwrap_err();
        assert!(matches!(
            error.downcast_ref::<BuiltWithError>(),
            Some(BuiltWithError::UnsupportedApiVersion { version: 3 })
        ));
    }

    #[test]
    fn test_lookup_result_accessors() {
        let raw = LookupResult::Raw(serde_json::json!(true));
        assert!(raw.as_raw().is_some());
        assert!(raw.as_detail().is_none());
    }
}
