use crate::detection::technology::TechnologyEntry;
use crate::detection::url_technologies::UrlTechnologies;
use crate::shared::error::BuiltWithError;
use crate::shared::Result;
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;

/// Identifies one URL in a lookup response: the registered domain, the
/// subdomain (empty string when the response carries none), and the path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UrlKey {
    pub domain: String,
    pub subdomain: String,
    pub path: String,
}

impl UrlKey {
    pub fn new(domain: &str, subdomain: &str, path: &str) -> Self {
        Self {
            domain: domain.to_string(),
            subdomain: subdomain.to_string(),
            path: path.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct LookupResponse {
    paths: Vec<PathEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct PathEntry {
    domain: String,
    #[serde(default)]
    sub_domain: String,
    url: String,
    technologies: Vec<TechnologyEntry>,
}

/// The full parsed result of a version-2 domain lookup.
///
/// Groups the response's path entries by (domain, subdomain, path) and
/// holds one [`UrlTechnologies`] per group. The raw response value is
/// retained unmodified for diagnostic access. Duplicate keys in the
/// response keep last-write-wins semantics; the provider's data is not
/// guaranteed unique and no merge rule is specified.
#[derive(Debug, Clone)]
pub struct DomainInfo {
    raw: Value,
    technologies_by_url: HashMap<UrlKey, UrlTechnologies>,
}

impl DomainInfo {
    /// Builds a DomainInfo from a parsed lookup response and the date of
    /// the provider's last full scan.
    ///
    /// # Errors
    /// Returns `BuiltWithError::MalformedResponse` if the response lacks a
    /// `Paths` array or any path entry is missing a required field, and
    /// `BuiltWithError::MalformedTimestamp` for unparseable detection
    /// timestamps. Construction either fully succeeds or fails entirely.
    pub fn from_response(raw: Value, last_full_scan: NaiveDate) -> Result<Self> {
        let response: LookupResponse =
            serde_json::from_value(raw.clone()).map_err(|e| BuiltWithError::MalformedResponse {
                details: e.to_string(),
            })?;

        let mut technologies_by_url = HashMap::new();
        for path_entry in response.paths {
            let key = UrlKey {
                domain: path_entry.domain,
                subdomain: path_entry.sub_domain,
                path: path_entry.url,
            };
            let technologies =
                UrlTechnologies::from_entries(path_entry.technologies, last_full_scan)?;
            technologies_by_url.insert(key, technologies);
        }

        Ok(Self {
            raw,
            technologies_by_url,
        })
    }

    /// The original response value, untouched by normalization.
    pub fn raw(&self) -> &Value {
        &self.raw
    }

    /// Returns the (domain, subdomain, path) keys present in the response.
    pub fn available_urls(&self) -> impl Iterator<Item = &UrlKey> {
        self.technologies_by_url.keys()
    }

    /// Looks up the technology set for one URL.
    ///
    /// An unknown key is an expected absence, not an error.
    pub fn get_technologies_by_url(
        &self,
        domain: &str,
        subdomain: &str,
        path: &str,
    ) -> Option<&UrlTechnologies> {
        self.technologies_by_url
            .get(&UrlKey::new(domain, subdomain, path))
    }

    /// Iterates over all per-URL technology sets.
    pub fn iter(&self) -> impl Iterator<Item = (&UrlKey, &UrlTechnologies)> {
        self.technologies_by_url.iter()
    }
}

impl<'a> IntoIterator for &'a DomainInfo {
    type Item = (&'a UrlKey, &'a UrlTechnologies);
    type IntoIter = std::collections::hash_map::Iter<'a, UrlKey, UrlTechnologies>;

    fn into_iter(self) -> Self::IntoIter {
        self.technologies_by_url.iter()
    }
}
