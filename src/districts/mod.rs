//! District lookup for listing descriptions
//!
//! Listings rarely carry a structured location field, so the district is
//! recovered by searching the free-text description for known district
//! names. The lookup table is plain configuration data: it is built once,
//! never mutated, and handed to the page extractor.

mod table;

pub use table::WROCLAW_DISTRICTS;

use std::collections::HashMap;

/// Immutable phrase -> district matcher
///
/// Matching is a case-insensitive substring search. When several phrases
/// occur in the text, the longest phrase wins ("stabłowice nowe" beats
/// "stabłowice"); ties are broken alphabetically so results never depend
/// on hash order.
#[derive(Debug, Clone)]
pub struct DistrictMatcher {
    /// (lowercased phrase, district), longest phrase first
    entries: Vec<(String, String)>,
}

impl DistrictMatcher {
    /// Builds a matcher from any phrase -> district mapping
    pub fn new<I, K, V>(mapping: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut entries: Vec<(String, String)> = mapping
            .into_iter()
            .map(|(phrase, district)| (phrase.as_ref().trim().to_lowercase(), district.into()))
            .filter(|(phrase, _)| !phrase.is_empty())
            .collect();

        entries.sort_by(|a, b| {
            b.0.chars()
                .count()
                .cmp(&a.0.chars().count())
                .then_with(|| a.0.cmp(&b.0))
        });
        entries.dedup_by(|a, b| a.0 == b.0);

        Self { entries }
    }

    /// Matcher over the built-in Wrocław table
    pub fn builtin() -> Self {
        Self::new(WROCLAW_DISTRICTS.iter().copied())
    }

    /// Uses `overrides` when non-empty, the built-in table otherwise
    pub fn from_overrides(overrides: &HashMap<String, String>) -> Self {
        if overrides.is_empty() {
            Self::builtin()
        } else {
            Self::new(overrides.iter().map(|(k, v)| (k.as_str(), v.clone())))
        }
    }

    /// Finds the district mentioned in `text`
    pub fn find(&self, text: &str) -> Option<&str> {
        let haystack = text.to_lowercase();
        self.entries
            .iter()
            .find(|(phrase, _)| haystack.contains(phrase.as_str()))
            .map(|(_, district)| district.as_str())
    }

    /// Finds the district mentioned in `text`, or returns `fallback`
    pub fn district_or<'a>(&'a self, text: &str, fallback: &'a str) -> &'a str {
        match self.find(text) {
            Some(district) => district,
            None => {
                tracing::debug!("No matching district in '{}'", text);
                fallback
            }
        }
    }

    /// Number of phrases known to the matcher
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for DistrictMatcher {
    fn default() -> Self {
        Self::builtin()
    }
}
