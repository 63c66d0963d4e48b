use crate::detection::technology::{Technology, TechnologyEntry};
use crate::shared::Result;
use chrono::NaiveDate;
use std::collections::HashMap;

/// The set of technologies detected on one (domain, subdomain, path)
/// triple, indexed by technology name.
///
/// Names are unique within the set; when the provider reports the same
/// name twice for one URL, the later record wins. Constructed once per
/// path entry and never mutated afterward. Iteration order is not
/// guaranteed.
#[derive(Debug, Clone)]
pub struct UrlTechnologies {
    technologies_by_name: HashMap<String, Technology>,
}

impl UrlTechnologies {
    /// Normalizes a list of wire records against the last full scan date.
    ///
    /// # Errors
    /// Returns `BuiltWithError::MalformedTimestamp` if any record carries
    /// an unparseable detection timestamp; no partial set is produced.
    pub fn from_entries(entries: Vec<TechnologyEntry>, last_full_scan: NaiveDate) -> Result<Self> {
        let mut technologies_by_name = HashMap::new();
        for entry in entries {
            let technology = Technology::from_entry(entry, last_full_scan)?;
            technologies_by_name.insert(technology.name.clone(), technology);
        }

        Ok(Self {
            technologies_by_name,
        })
    }

    /// Looks up a single technology by name.
    ///
    /// Unknown names are an expected absence, not an error.
    pub fn get_technology_info(&self, technology_name: &str) -> Option<&Technology> {
        self.technologies_by_name.get(technology_name)
    }

    /// Returns the names of all technologies in the set.
    pub fn list_technologies(&self) -> impl Iterator<Item = &str> {
        self.technologies_by_name.keys().map(String::as_str)
    }

    /// Iterates over all technology records in the set.
    pub fn iter(&self) -> impl Iterator<Item = &Technology> {
        self.technologies_by_name.values()
    }

    pub fn len(&self) -> usize {
        self.technologies_by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.technologies_by_name.is_empty()
    }
}

impl<'a> IntoIterator for &'a UrlTechnologies {
    type Item = &'a Technology;
    type IntoIter = std::collections::hash_map::Values<'a, String, Technology>;

    fn into_iter(self) -> Self::IntoIter {
        self.technologies_by_name.values()
    }
}
